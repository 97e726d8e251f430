// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Mock collaborators for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::hw::{Encoder, PwmChannel};

/// Which channel a recorded pulse-width write went to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ch {
    One,
    Two,
}

/// Write log shared by both mock channels of one driver, so call order can be checked.
pub type PwmLog = Rc<RefCell<Vec<(Ch, f32)>>>;

/// PWM channel that records every pulse width it is given.
pub struct MockPwm {
    ch: Ch,
    log: PwmLog,
    fail: bool,
}

impl MockPwm {
    /// Two channels sharing one log.
    pub fn pair() -> (Self, Self, PwmLog) {
        let log = PwmLog::default();
        (
            Self {
                ch: Ch::One,
                log: log.clone(),
                fail: false,
            },
            Self {
                ch: Ch::Two,
                log: log.clone(),
                fail: false,
            },
            log,
        )
    }

    /// Reject every write with `MockPwmError`.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MockPwmError;

impl PwmChannel for MockPwm {
    type Error = MockPwmError;

    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<(), MockPwmError> {
        if self.fail {
            return Err(MockPwmError);
        }
        self.log.borrow_mut().push((self.ch, percent));
        Ok(())
    }
}

/// Last pulse width written to each channel, `(ch1, ch2)`.
pub fn last_widths(log: &PwmLog) -> (f32, f32) {
    let log = log.borrow();
    let last = |ch| {
        log.iter()
            .rev()
            .find(|(c, _)| *c == ch)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    };
    (last(Ch::One), last(Ch::Two))
}

/// Encoder whose count is set by the test; `zero` moves the origin like a hardware counter reset.
#[derive(Clone, Default)]
pub struct MockEncoder {
    pub counts: Rc<RefCell<i32>>,
    origin: i32,
}

impl MockEncoder {
    pub fn new(counts: i32) -> Self {
        Self {
            counts: Rc::new(RefCell::new(counts)),
            origin: 0,
        }
    }

    pub fn turn_to(&self, counts: i32) {
        *self.counts.borrow_mut() = counts;
    }
}

impl Encoder for MockEncoder {
    fn read(&mut self) -> i32 {
        *self.counts.borrow() - self.origin
    }

    fn zero(&mut self) {
        self.origin = *self.counts.borrow();
    }
}
