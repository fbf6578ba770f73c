use log::trace;

use crate::decoder::RsDecoder;
use crate::error::Result;
use crate::state::TimerState;

/// Host-facing timer object: one decoder plus the long-lived state entity.
///
/// The host feeds it whatever sample buffers its audio capture produces,
/// one at a time; buffers that contain no valid frame leave the state
/// untouched. Capture is a plain mode toggle with no queued work to drain.
/// Not internally synchronized: a multi-threaded host must serialize calls
/// itself.
pub struct StackmatTimer {
    decoder: RsDecoder,
    state: TimerState,
    capturing: bool,
}

impl StackmatTimer {
    pub fn new(sample_rate: f32) -> Result<StackmatTimer> {
        Ok(StackmatTimer {
            decoder: RsDecoder::new(sample_rate)?,
            state: TimerState::new(),
            capturing: false,
        })
    }

    /// Begin accepting buffers.
    pub fn start(&mut self) {
        self.capturing = true;
    }

    /// Ignore subsequent buffers.
    pub fn stop(&mut self) {
        self.capturing = false;
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Decode one buffer and fold the result into the timer state.
    ///
    /// Returns the refreshed state when the buffer held a valid frame, and
    /// `None` when capture is off or the buffer had nothing usable. Decode
    /// failures are routine (a buffer boundary can split any frame) and
    /// are skipped silently; the next retransmission resynchronizes.
    pub fn process_buffer(&mut self, samples: &[f32]) -> Option<&TimerState> {
        if !self.capturing {
            return None;
        }

        match self.decoder.decode(samples) {
            Ok(signal) => {
                self.state.update(&signal);
                Some(&self.state)
            }
            Err(e) => {
                trace!("buffer of {} samples skipped: {}", samples.len(), e);
                None
            }
        }
    }
}
