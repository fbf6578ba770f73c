use crate::error::{Result, StackmatError};
use crate::sampler::Bit;
use crate::{BITS_PER_BYTE_FRAME, PACKET_BIT_PERIODS, PACKET_BYTES};

/// Assemble the 9 packet bytes from a recovered bit-period stream.
///
/// `bits` must begin at the first data bit, i.e. with the frame's leading
/// start bit already sliced off by the caller. Each byte occupies 10 bit
/// periods on the line (start + 8 data + stop), so consecutive bytes' data
/// bits sit exactly 10 periods apart and the stride skips the framing bits
/// implicitly. Data bits are read LSB first.
pub fn assemble(bits: &[Bit]) -> Result<[u8; PACKET_BYTES]> {
    if bits.len() < PACKET_BIT_PERIODS {
        return Err(StackmatError::IncompleteFrame {
            got: bits.len(),
            needed: PACKET_BIT_PERIODS,
        });
    }

    let mut packet = [0u8; PACKET_BYTES];
    for (i, byte) in packet.iter_mut().enumerate() {
        *byte = decode_byte(&bits[i * BITS_PER_BYTE_FRAME..]);
    }

    Ok(packet)
}

fn decode_byte(bits: &[Bit]) -> u8 {
    let mut value = 0u8;
    for (i, bit) in bits[..8].iter().enumerate() {
        value |= bit.value() << i;
    }
    value
}
