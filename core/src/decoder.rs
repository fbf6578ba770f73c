use log::debug;

use crate::clock::{recover_bit_periods, run_length_encode};
use crate::error::{Result, StackmatError};
use crate::packet::assemble;
use crate::sampler::threshold;
use crate::signal::Signal;
use crate::sync::find_frame_start;
use crate::{BAUD_RATE, PACKET_BIT_PERIODS};

/// Clockless RS-232 decoder for the timer's fixed-rate audio channel.
///
/// Holds the pipeline's single configuration value: how many audio samples
/// span one bit period. Every `decode` call is self-contained; all
/// intermediate buffers are call-local and nothing survives between calls.
pub struct RsDecoder {
    samples_per_bit: f32,
}

impl RsDecoder {
    /// Build a decoder for an audio source running at `sample_rate` Hz.
    ///
    /// Fails only on configuration the line physically cannot support;
    /// per-buffer failures never surface here.
    pub fn new(sample_rate: f32) -> Result<RsDecoder> {
        let samples_per_bit = sample_rate / BAUD_RATE as f32;
        if !samples_per_bit.is_finite() || samples_per_bit < 1.0 {
            return Err(StackmatError::InvalidConfig(format!(
                "sample rate {} cannot carry a {} baud line",
                sample_rate, BAUD_RATE
            )));
        }
        Ok(RsDecoder { samples_per_bit })
    }

    pub fn samples_per_bit(&self) -> f32 {
        self.samples_per_bit
    }

    /// Decode one audio buffer into a validated signal.
    ///
    /// Runs the full pipeline in order: sign thresholding, frame
    /// synchronization, run-length clock recovery, byte assembly, packet
    /// validation. Every error is a non-fatal per-buffer outcome; the
    /// caller discards the buffer and waits for the next retransmission.
    pub fn decode(&self, samples: &[f32]) -> Result<Signal> {
        let bits = threshold(samples);

        let start = find_frame_start(&bits, self.samples_per_bit)
            .ok_or(StackmatError::SyncNotFound)?;

        let runs = run_length_encode(&bits[start..]);
        let periods = recover_bit_periods(&runs, self.samples_per_bit);

        // Synchronization landed on the frame's own start bit; drop it so
        // the assembler's stride begins at the first data bit.
        if periods.is_empty() {
            return Err(StackmatError::IncompleteFrame {
                got: 0,
                needed: PACKET_BIT_PERIODS,
            });
        }
        let packet = assemble(&periods[1..])?;

        Signal::from_packet(&packet).map_err(|e| {
            debug!("discarding frame found at sample {}: {}", start, e);
            e
        })
    }
}
