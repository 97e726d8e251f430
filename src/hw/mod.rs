// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Boundary
//!
//! The control core only talks to hardware through the two traits below. The STM32F7 adapters
//! that implement them are compiled with the `stm32f7` feature.
//!
//! ## Modules
//!
//! - [`encoder`] - TIM2 quadrature encoder (`stm32f7`)
//! - [`pwm`] - HAL PWM pin adapter (`stm32f7`)
//! - [`pins`] - Board pin map (`stm32f7`)

#[cfg(feature = "stm32f7")]
pub mod encoder;
#[cfg(feature = "stm32f7")]
pub mod pins;
#[cfg(feature = "stm32f7")]
pub mod pwm;

#[cfg(feature = "stm32f7")]
pub use encoder::TimerEncoder;
#[cfg(feature = "stm32f7")]
pub use pins::BoardPins;
#[cfg(feature = "stm32f7")]
pub use pwm::PwmOutput;

/// Position source sampled by [`EncoderTask`](crate::tasks::EncoderTask).
pub trait Encoder {
    /// Net ticks since the last [`zero`](Self::zero).
    fn read(&mut self) -> i32;

    /// Make the current position the new origin.
    fn zero(&mut self);
}

/// One logical PWM output driving one H-bridge input.
pub trait PwmChannel {
    type Error;

    /// Set the pulse width as a percentage of the period, `0.0..=100.0`.
    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<(), Self::Error>;
}

/// Convert a pulse-width percentage into a compare value for a timer with the given maximum duty.
///
/// Out-of-range percentages saturate at `0` and `max_duty`.
pub fn duty_for_percent(percent: f32, max_duty: u16) -> u16 {
    let fraction = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0) / 100.0
    };
    (fraction * max_duty as f32) as u16
}
