use crate::signal::{Signal, Status};

/// Externally observable timer state.
///
/// Two orthogonal axes: the run/reset axis (running, stopped-not-reset,
/// reset) and two momentary hand-contact flags. A fresh timer starts
/// reset with a zeroed display. Mutated in place by `update`, one call
/// per accepted signal; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    running: bool,
    reset: bool,
    left_hand_pressed: bool,
    right_hand_pressed: bool,
    digits: [u8; 5],
}

impl TimerState {
    pub fn new() -> TimerState {
        TimerState {
            running: false,
            reset: true,
            left_hand_pressed: false,
            right_hand_pressed: false,
            digits: [0; 5],
        }
    }

    /// Apply one decoded signal.
    ///
    /// Hand flags are momentary: cleared on every update and only re-set
    /// by the hand statuses, so they track the latest transmission alone.
    /// The hand statuses leave the run/reset axis untouched. Digits always
    /// follow the signal regardless of status.
    pub fn update(&mut self, signal: &Signal) {
        self.left_hand_pressed = false;
        self.right_hand_pressed = false;

        match signal.status() {
            Status::Running => {
                self.running = true;
                self.reset = false;
            }
            Status::Stopped => {
                self.running = false;
                self.reset = false;
            }
            Status::Reset => {
                self.running = false;
                self.reset = true;
            }
            Status::LeftHand => {
                self.left_hand_pressed = true;
            }
            Status::RightHand => {
                self.right_hand_pressed = true;
            }
            Status::BothHands => {
                self.running = false;
                self.left_hand_pressed = true;
                self.right_hand_pressed = true;
            }
            Status::Accessory => {}
        }

        self.digits = signal.digits();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }

    pub fn is_left_hand_pressed(&self) -> bool {
        self.left_hand_pressed
    }

    pub fn is_right_hand_pressed(&self) -> bool {
        self.right_hand_pressed
    }

    pub fn digits(&self) -> [u8; 5] {
        self.digits
    }

    /// Display time as `M:SS.tt` (1 minute digit, 2 second digits, 2
    /// hundredth digits).
    pub fn time_as_string(&self) -> String {
        format!(
            "{}:{}{}.{}{}",
            self.digits[0], self.digits[1], self.digits[2], self.digits[3], self.digits[4]
        )
    }

    /// Display time in whole milliseconds.
    pub fn time_in_milliseconds(&self) -> u32 {
        let seconds = self.digits[0] as u32 * 60
            + self.digits[1] as u32 * 10
            + self.digits[2] as u32;
        let hundredths = self.digits[3] as u32 * 10 + self.digits[4] as u32;
        seconds * 1000 + hundredths * 10
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
