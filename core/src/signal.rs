use crate::error::{Result, StackmatError};
use crate::PACKET_BYTES;

/// Status character reported in byte 0 of a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `' '` — the clock is counting.
    Running,
    /// `'S'` — a solve just finished, time frozen on the display.
    Stopped,
    /// `'I'` — the timer has been reset to zero.
    Reset,
    /// `'L'` — left touch pad held.
    LeftHand,
    /// `'R'` — right touch pad held.
    RightHand,
    /// `'C'` — both touch pads held.
    BothHands,
    /// `'A'` — accepted by the protocol but drives no state transition.
    Accessory,
}

impl Status {
    pub fn from_byte(byte: u8) -> Option<Status> {
        match byte {
            b' ' => Some(Status::Running),
            b'S' => Some(Status::Stopped),
            b'I' => Some(Status::Reset),
            b'L' => Some(Status::LeftHand),
            b'R' => Some(Status::RightHand),
            b'C' => Some(Status::BothHands),
            b'A' => Some(Status::Accessory),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Status::Running => b' ',
            Status::Stopped => b'S',
            Status::Reset => b'I',
            Status::LeftHand => b'L',
            Status::RightHand => b'R',
            Status::BothHands => b'C',
            Status::Accessory => b'A',
        }
    }
}

/// One validated timer transmission: a status character and the five
/// display digits. Created only from a packet that passed validation,
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    status: Status,
    digits: [u8; 5],
}

impl Signal {
    /// Validate a raw packet and decode it.
    ///
    /// All rules must hold: a known status character in byte 0, ASCII
    /// digits in bytes 1-5, a checksum byte equal to 64 plus the digit
    /// sum, and an LF/CR terminator. Failures are frequent in normal
    /// operation (a buffer boundary can split any frame) and map to
    /// distinct error variants so the host can count them if it cares.
    pub fn from_packet(packet: &[u8; PACKET_BYTES]) -> Result<Signal> {
        let status =
            Status::from_byte(packet[0]).ok_or(StackmatError::InvalidStatus(packet[0]))?;

        let mut digits = [0u8; 5];
        for (i, digit) in digits.iter_mut().enumerate() {
            let byte = packet[1 + i];
            if !byte.is_ascii_digit() {
                return Err(StackmatError::InvalidDigit { position: 1 + i, byte });
            }
            *digit = byte - b'0';
        }

        // Digit sum is at most 45, so the offset checksum fits in a byte
        let expected = 64 + digits.iter().sum::<u8>();
        if packet[6] != expected {
            return Err(StackmatError::ChecksumMismatch { expected, got: packet[6] });
        }

        if packet[7] != 0x0A || packet[8] != 0x0D {
            return Err(StackmatError::BadTerminator);
        }

        Ok(Signal { status, digits })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn digits(&self) -> [u8; 5] {
        self.digits
    }
}
