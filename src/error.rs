// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the control pipeline.

use core::convert::Infallible;
use core::fmt;

/// Which numeric input of the control law was not finite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    Setpoint,
    Gain,
    Measured,
    /// Finite inputs whose product overflowed.
    Actuation,
}

/// Control pipeline error.
///
/// `E` is the error type of the PWM channels behind the motor driver. Code that never touches a
/// PWM channel (e.g. [`Controller`](crate::control::Controller)) uses the default `Infallible`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = Infallible> {
    /// Duty value matched none of the forward / reverse cases after clamping.
    InvalidDutyRange(f32),
    /// A setpoint, gain, or measurement was NaN or infinite.
    NonFinite(Quantity),
    /// The PWM channel rejected a pulse-width command.
    Pwm(E),
}

impl Error {
    /// Re-type a PWM-free error so it can be returned alongside PWM errors of type `E`.
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Error::InvalidDutyRange(duty) => Error::InvalidDutyRange(duty),
            Error::NonFinite(q) => Error::NonFinite(q),
            Error::Pwm(never) => match never {},
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Setpoint => "setpoint",
            Quantity::Gain => "gain",
            Quantity::Measured => "measured position",
            Quantity::Actuation => "actuation",
        };
        f.write_str(name)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDutyRange(duty) => write!(f, "invalid percent duty cycle {}", duty),
            Error::NonFinite(q) => write!(f, "{} is not a finite number", q),
            Error::Pwm(e) => write!(f, "PWM channel error: {}", e),
        }
    }
}
