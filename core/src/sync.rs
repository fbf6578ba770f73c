use crate::sampler::Bit;
use crate::SYNC_ARM_BITS;

/// Locate the first start bit of a frame inside a thresholded buffer.
///
/// Scans left to right counting consecutive mark samples. Once more than
/// `SYNC_ARM_BITS` bit periods of continuous mark have been seen (longer
/// than any legitimate in-frame run), the scanner is armed and the next
/// space sample is the high-to-low transition into the frame's start bit.
/// A space seen before arming resets the counter, which filters short
/// glitches inside idle. An indeterminate sample holds the current level
/// and affects neither side.
///
/// `None` is not an error; the buffer simply held no frame boundary.
pub fn find_frame_start(bits: &[Option<Bit>], samples_per_bit: f32) -> Option<usize> {
    let arm_threshold = SYNC_ARM_BITS as f32 * samples_per_bit;
    let mut mark_count = 0usize;
    let mut armed = false;

    for (i, bit) in bits.iter().enumerate() {
        match bit {
            Some(Bit::Mark) => {
                mark_count += 1;
                if mark_count as f32 > arm_threshold {
                    armed = true;
                }
            }
            Some(Bit::Space) => {
                mark_count = 0;
                if armed {
                    return Some(i);
                }
            }
            None => {}
        }
    }

    None
}
