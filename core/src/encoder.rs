use crate::error::{Result, StackmatError};
use crate::sampler::Bit;
use crate::signal::Status;
use crate::{BAUD_RATE, PACKET_BYTES, SYNC_ARM_BITS};

/// Bit periods of idle line emitted before the frame. The synchronizer
/// needs strictly more than `SYNC_ARM_BITS` periods to arm.
const IDLE_PREAMBLE_BITS: usize = SYNC_ARM_BITS + 3;

/// Bit periods of idle line after the frame, so the final stop bit sits in
/// a full-length run and survives clock recovery.
const IDLE_TAIL_BITS: usize = 4;

const LINE_AMPLITUDE: f32 = 0.5;

/// Synthesizes the timer's line waveform for a given readout.
///
/// The real device keys the line between two polarities: mark (negative
/// amplitude) is idle, and each byte goes out as 1 start bit (space), 8
/// data bits LSB first, 1 stop bit (mark). Used by tests and by the CLI to
/// produce reference recordings; there is no transmit path to real
/// hardware.
pub struct SignalEncoder {
    samples_per_bit: f32,
}

impl SignalEncoder {
    pub fn new(sample_rate: f32) -> Result<SignalEncoder> {
        let samples_per_bit = sample_rate / BAUD_RATE as f32;
        if !samples_per_bit.is_finite() || samples_per_bit < 1.0 {
            return Err(StackmatError::InvalidConfig(format!(
                "sample rate {} cannot carry a {} baud line",
                sample_rate, BAUD_RATE
            )));
        }
        Ok(SignalEncoder { samples_per_bit })
    }

    /// Build the 9 raw packet bytes for a status and digit readout.
    pub fn packet_bytes(status: Status, digits: [u8; 5]) -> [u8; PACKET_BYTES] {
        let mut packet = [0u8; PACKET_BYTES];
        packet[0] = status.as_byte();
        for (i, &d) in digits.iter().enumerate() {
            packet[1 + i] = b'0' + d;
        }
        packet[6] = 64 + digits.iter().sum::<u8>();
        packet[7] = 0x0A;
        packet[8] = 0x0D;
        packet
    }

    /// Render one frame for a status and digit readout.
    pub fn encode(&self, status: Status, digits: [u8; 5]) -> Vec<f32> {
        self.encode_packet(&Self::packet_bytes(status, digits))
    }

    /// Render one frame from raw packet bytes: idle preamble, the framed
    /// bytes, idle tail. The bytes are emitted as given, valid or not.
    ///
    /// Bit-period boundaries are placed on the accumulated sample grid so
    /// a non-integral samples-per-bit (44100 / 1200 = 36.75) never drifts.
    pub fn encode_packet(&self, packet: &[u8; PACKET_BYTES]) -> Vec<f32> {
        let mut bits: Vec<Bit> = Vec::new();
        bits.resize(IDLE_PREAMBLE_BITS, Bit::Mark);
        for &byte in packet {
            bits.push(Bit::Space); // start
            for i in 0..8 {
                bits.push(if (byte >> i) & 1 == 1 { Bit::Mark } else { Bit::Space });
            }
            bits.push(Bit::Mark); // stop
        }
        for _ in 0..IDLE_TAIL_BITS {
            bits.push(Bit::Mark);
        }

        let mut samples = Vec::new();
        for (k, bit) in bits.iter().enumerate() {
            let level = match bit {
                Bit::Mark => -LINE_AMPLITUDE,
                Bit::Space => LINE_AMPLITUDE,
            };
            let target = ((k + 1) as f32 * self.samples_per_bit).round() as usize;
            while samples.len() < target {
                samples.push(level);
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_bytes_layout() {
        let packet = SignalEncoder::packet_bytes(Status::Reset, [1, 3, 0, 2, 8]);
        assert_eq!(packet, [b'I', b'1', b'3', b'0', b'2', b'8', 78, 10, 13]);
    }

    #[test]
    fn test_packet_bytes_zero_digits_checksum() {
        let packet = SignalEncoder::packet_bytes(Status::Running, [0; 5]);
        assert_eq!(packet[6], 64);
    }

    #[test]
    fn test_waveform_starts_idle() {
        let encoder = SignalEncoder::new(44_100.0).unwrap();
        let samples = encoder.encode(Status::Reset, [0; 5]);
        assert!(samples[0] < 0.0);
    }

    #[test]
    fn test_waveform_length_matches_bit_count() {
        let encoder = SignalEncoder::new(48_000.0).unwrap();
        let samples = encoder.encode(Status::Reset, [0; 5]);
        let bits = IDLE_PREAMBLE_BITS + PACKET_BYTES * 10 + IDLE_TAIL_BITS;
        assert_eq!(samples.len(), bits * 40); // 48000 / 1200 = 40 exactly
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        assert!(SignalEncoder::new(100.0).is_err());
    }
}
