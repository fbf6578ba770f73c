//! Decoder for the Stackmat competition timer's audio-carried serial line
//!
//! The timer reports its display state as a 1200 baud RS-232 stream whose
//! line voltage rides directly on an audio channel: negative amplitude is
//! mark (logical 1, the idle level), positive amplitude is space (logical
//! 0). Each status frame is 9 bytes of 1 start + 8 data + 1 stop bits,
//! preceded by an idle preamble, retransmitted continuously.

pub mod clock;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod packet;
pub mod sampler;
pub mod signal;
pub mod state;
pub mod sync;
pub mod timer;

pub use decoder::RsDecoder;
pub use encoder::SignalEncoder;
pub use error::{Result, StackmatError};
pub use sampler::Bit;
pub use signal::{Signal, Status};
pub use state::TimerState;
pub use timer::StackmatTimer;

/// Symbol rate of the timer's serial line, in bits per second.
pub const BAUD_RATE: u32 = 1200;

/// Bytes in one status frame: status, five digits, checksum, LF, CR.
pub const PACKET_BYTES: usize = 9;

/// Bit periods per framed byte: 1 start + 8 data + 1 stop.
pub const BITS_PER_BYTE_FRAME: usize = 10;

/// Bit periods one frame occupies after its leading start bit.
pub const PACKET_BIT_PERIODS: usize = PACKET_BYTES * BITS_PER_BYTE_FRAME;

/// Consecutive idle bit periods required before a start bit is trusted.
/// No byte inside a frame can put more than 9 mark periods on the line in
/// a row, so a longer run can only be the inter-frame idle preamble.
pub const SYNC_ARM_BITS: usize = 9;
