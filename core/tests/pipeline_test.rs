//! End-to-end pipeline tests: synthetic amplitude buffers through
//! thresholding, synchronization, clock recovery, assembly, and validation.

use rand::{Rng, SeedableRng};

use stackmat_core::{RsDecoder, SignalEncoder, StackmatError, StackmatTimer, Status};

const RATE: f32 = 44_100.0;

#[test]
fn test_end_to_end_decode() {
    let _ = env_logger::builder().is_test(true).try_init();

    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();

    let samples = encoder.encode(Status::Reset, [1, 3, 0, 2, 8]);
    let signal = decoder.decode(&samples).expect("clean frame must decode");

    assert_eq!(signal.status(), Status::Reset);
    assert_eq!(signal.digits(), [1, 3, 0, 2, 8]);
}

#[test]
fn test_end_to_end_all_statuses() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();

    for status in [
        Status::Running,
        Status::Stopped,
        Status::Reset,
        Status::LeftHand,
        Status::RightHand,
        Status::BothHands,
        Status::Accessory,
    ] {
        let samples = encoder.encode(status, [9, 5, 7, 3, 1]);
        let signal = decoder.decode(&samples).unwrap();
        assert_eq!(signal.status(), status);
        assert_eq!(signal.digits(), [9, 5, 7, 3, 1]);
    }
}

#[test]
fn test_corrupted_checksum_rejected_at_validation() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();

    let mut packet = SignalEncoder::packet_bytes(Status::Stopped, [0, 4, 2, 0, 0]);
    packet[6] += 1;
    let samples = encoder.encode_packet(&packet);

    // The pipeline must get all the way to validation and fail there
    assert!(matches!(
        decoder.decode(&samples),
        Err(StackmatError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_decode_survives_amplitude_noise() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    // Additive noise below the line amplitude never flips a sample's sign
    let mut samples = encoder.encode(Status::Running, [0, 1, 2, 3, 4]);
    for s in &mut samples {
        *s += rng.gen_range(-0.4..0.4);
    }

    let signal = decoder.decode(&samples).unwrap();
    assert_eq!(signal.status(), Status::Running);
    assert_eq!(signal.digits(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_decode_survives_scattered_zero_samples() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);

    // Exact-zero samples are indeterminate; the continuation policy must
    // keep run-length accounting intact
    let mut samples = encoder.encode(Status::Stopped, [0, 5, 8, 1, 9]);
    for _ in 0..20 {
        let i = rng.gen_range(0..samples.len());
        samples[i] = 0.0;
    }

    let signal = decoder.decode(&samples).unwrap();
    assert_eq!(signal.status(), Status::Stopped);
    assert_eq!(signal.digits(), [0, 5, 8, 1, 9]);
}

#[test]
fn test_decode_with_leading_garbage() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();

    // Alternating junk before the frame cannot arm the synchronizer; the
    // frame's own idle preamble does
    let mut samples: Vec<f32> = (0..500)
        .map(|i| if i % 7 < 3 { 0.2 } else { -0.2 })
        .collect();
    samples.extend(encoder.encode(Status::Reset, [0, 0, 0, 0, 0]));

    let signal = decoder.decode(&samples).unwrap();
    assert_eq!(signal.status(), Status::Reset);
}

#[test]
fn test_first_of_two_frames_wins() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let decoder = RsDecoder::new(RATE).unwrap();

    let mut samples = encoder.encode(Status::Running, [0, 0, 1, 0, 0]);
    samples.extend(encoder.encode(Status::Stopped, [0, 0, 2, 0, 0]));

    let signal = decoder.decode(&samples).unwrap();
    assert_eq!(signal.status(), Status::Running);
    assert_eq!(signal.digits(), [0, 0, 1, 0, 0]);
}

#[test]
fn test_nonstandard_sample_rates() {
    for rate in [8_000.0, 22_050.0, 48_000.0, 96_000.0] {
        let encoder = SignalEncoder::new(rate).unwrap();
        let decoder = RsDecoder::new(rate).unwrap();

        let samples = encoder.encode(Status::Reset, [2, 4, 6, 8, 0]);
        let signal = decoder.decode(&samples).unwrap();
        assert_eq!(signal.digits(), [2, 4, 6, 8, 0], "rate {}", rate);
    }
}

#[test]
fn test_timer_tracks_a_solve() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let mut timer = StackmatTimer::new(RATE).unwrap();
    timer.start();

    // Reset, hands down, running, stopped: the shape of a real solve
    timer.process_buffer(&encoder.encode(Status::Reset, [0, 0, 0, 0, 0]));
    assert!(timer.state().is_reset());

    timer.process_buffer(&encoder.encode(Status::BothHands, [0, 0, 0, 0, 0]));
    assert!(timer.state().is_left_hand_pressed());
    assert!(timer.state().is_right_hand_pressed());

    timer.process_buffer(&encoder.encode(Status::Running, [0, 0, 4, 5, 2]));
    assert!(timer.state().is_running());
    assert!(!timer.state().is_left_hand_pressed());

    timer.process_buffer(&encoder.encode(Status::Stopped, [0, 1, 2, 9, 7]));
    assert!(!timer.state().is_running());
    assert!(!timer.state().is_reset());
    assert_eq!(timer.state().time_as_string(), "0:12.97");
    assert_eq!(timer.state().time_in_milliseconds(), 12_970);
}

#[test]
fn test_buffer_boundary_splitting_a_frame() {
    let encoder = SignalEncoder::new(RATE).unwrap();
    let mut timer = StackmatTimer::new(RATE).unwrap();
    timer.start();

    let samples = encoder.encode(Status::Running, [0, 0, 7, 7, 7]);
    let half = samples.len() / 2;

    // Neither half holds a complete frame; state must not move
    assert!(timer.process_buffer(&samples[..half]).is_none());
    assert!(timer.process_buffer(&samples[half..]).is_none());
    assert!(timer.state().is_reset());

    // The retransmitted full frame recovers
    assert!(timer.process_buffer(&samples).is_some());
    assert!(timer.state().is_running());
}
