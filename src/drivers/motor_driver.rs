// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-input H-bridge driven from one signed duty cycle.
//!
//! | Duty            | IN1 (ch1) | IN2 (ch2) |
//! | --------------- | --------- | --------- |
//! | `0 ..= 100`     | `duty` %  | 0 %       |
//! | `-100 < d < 0`  | 0 %       | `-duty` % |
//!
//! Exactly one channel carries the pulse; both at 0% coasts the motor.

use crate::error::Error;
use crate::hw::PwmChannel;

/// Duty values at or beyond this magnitude are clamped.
pub const DUTY_LIMIT: f32 = 100.0;

/// Magnitude a clamped duty is replaced with. Never requests a full 100% pulse.
pub const DUTY_CEILING: f32 = 99.0;

/// Clamp a requested duty into the drivable range.
///
/// `>= 100` becomes `99` and `<= -100` becomes `-99`; everything else (including NaN) is passed
/// through unchanged.
#[inline]
pub fn clamp_duty(duty: f32) -> f32 {
    if duty >= DUTY_LIMIT {
        DUTY_CEILING
    } else if duty <= -DUTY_LIMIT {
        -DUTY_CEILING
    } else {
        duty
    }
}

/// Motor driver bound to a forward (IN1) and a reverse (IN2) PWM channel.
pub struct MotorDriver<CH1, CH2> {
    ch1: CH1,
    ch2: CH2,
    duty: f32,
}

impl<CH1, CH2, E> MotorDriver<CH1, CH2>
where
    CH1: PwmChannel<Error = E>,
    CH2: PwmChannel<Error = E>,
{
    /// Bind the two channels. Nothing is written until the first command.
    pub fn new(ch1: CH1, ch2: CH2) -> Self {
        Self { ch1, ch2, duty: 0.0 }
    }

    /// Release both channels.
    pub fn free(self) -> (CH1, CH2) {
        (self.ch1, self.ch2)
    }

    /// Drive the motor with a signed percent duty cycle.
    ///
    /// Positive values drive IN1, negative values drive IN2. Out-of-range values are clamped with
    /// [`clamp_duty`]. Channel 1 is always written before channel 2.
    ///
    /// Returns [`Error::InvalidDutyRange`] without touching either channel if the clamped duty fits
    /// neither direction (NaN).
    ///
    /// If channel 2 rejects its write after channel 1 was driven, channel 1 is pulled back to 0%
    /// before the error is returned, so both inputs are never left driven. [`duty`](Self::duty)
    /// keeps the last fully applied command.
    pub fn set_duty_cycle(&mut self, duty: f32) -> Result<(), Error<E>> {
        let duty = clamp_duty(duty);

        let (fwd, rev) = if (0.0..=DUTY_LIMIT).contains(&duty) {
            (duty, 0.0)
        } else if duty > -DUTY_LIMIT && duty < 0.0 {
            (0.0, -duty)
        } else {
            crate::log_warn!("invalid percent duty cycle {}", duty);
            return Err(Error::InvalidDutyRange(duty));
        };

        self.ch1.set_pulse_width_percent(fwd).map_err(Error::Pwm)?;
        if let Err(e) = self.ch2.set_pulse_width_percent(rev) {
            if fwd != 0.0 {
                let _ = self.ch1.set_pulse_width_percent(0.0);
            }
            crate::log_error!("IN2 write failed, IN1 released");
            return Err(Error::Pwm(e));
        }
        self.duty = duty;

        Ok(())
    }

    /// Both channels to 0%.
    #[inline]
    pub fn coast(&mut self) -> Result<(), Error<E>> {
        self.set_duty_cycle(0.0)
    }

    /// Last duty applied to the bridge, after clamping.
    #[inline]
    pub fn duty(&self) -> f32 {
        self.duty
    }
}
