/// One recovered binary line symbol.
///
/// The timer keys the line between two polarities: negative amplitude is
/// mark (logical 1, also the idle level), positive amplitude is space
/// (logical 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Space,
    Mark,
}

impl Bit {
    /// Data-bit value used during byte assembly.
    pub fn value(self) -> u8 {
        match self {
            Bit::Space => 0,
            Bit::Mark => 1,
        }
    }
}

/// Threshold a single amplitude sample by sign.
///
/// An exact zero has no polarity and yields `None` (indeterminate). Later
/// stages treat an indeterminate sample as a continuation of the current
/// line level; the hardware never legitimately rests at zero, so this only
/// happens on isolated samples under certain audio pipelines.
pub fn sample_to_bit(sample: f32) -> Option<Bit> {
    if sample < 0.0 {
        Some(Bit::Mark)
    } else if sample > 0.0 {
        Some(Bit::Space)
    } else {
        None
    }
}

/// Threshold a whole buffer, elementwise and in order.
pub fn threshold(samples: &[f32]) -> Vec<Option<Bit>> {
    samples.iter().map(|&s| sample_to_bit(s)).collect()
}
