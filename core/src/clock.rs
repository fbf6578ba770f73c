use crate::sampler::Bit;

/// One run of consecutive equal line symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub bit: Bit,
    pub len: usize,
}

/// Compress a thresholded sub-sequence into runs.
///
/// Indeterminate samples continue the run in progress, so a stray zero
/// sample cannot split a bit period in two; any before the first
/// determinate symbol are dropped.
pub fn run_length_encode(bits: &[Option<Bit>]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for bit in bits {
        let bit = match (bit, runs.last()) {
            (Some(b), _) => *b,
            (None, Some(last)) => last.bit,
            (None, None) => continue,
        };

        if let Some(last) = runs.last_mut() {
            if last.bit == bit {
                last.len += 1;
                continue;
            }
        }
        runs.push(Run { bit, len: 1 });
    }

    runs
}

/// Re-expand runs into one symbol per protocol bit period.
///
/// The audio clock and the timer's bit clock are neither synchronized nor
/// locked; rounding each run to the nearest whole number of bit periods
/// absorbs cumulative drift of up to half a period per run. A run shorter
/// than half a period rounds to zero symbols and vanishes.
pub fn recover_bit_periods(runs: &[Run], samples_per_bit: f32) -> Vec<Bit> {
    let mut bits = Vec::new();

    for run in runs {
        let periods = (run.len as f32 / samples_per_bit).round() as usize;
        for _ in 0..periods {
            bits.push(run.bit);
        }
    }

    bits
}
