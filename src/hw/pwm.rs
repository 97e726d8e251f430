// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! [`PwmChannel`] adapter for HAL timer PWM pins.

use core::convert::Infallible;

use stm32f7xx_hal::prelude::*;

use crate::hw::{duty_for_percent, PwmChannel};

/// A HAL PWM pin driven by pulse-width percentage.
pub struct PwmOutput<P> {
    pin: P,
}

impl<P> PwmOutput<P>
where
    P: _embedded_hal_PwmPin<Duty = u16>,
{
    /// Take ownership of `pin`, force it to 0% and enable the output.
    pub fn new(mut pin: P) -> Self {
        pin.set_duty(0);
        pin.enable();
        Self { pin }
    }

    /// Release the pin, left at its last duty.
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P> PwmChannel for PwmOutput<P>
where
    P: _embedded_hal_PwmPin<Duty = u16>,
{
    type Error = Infallible;

    #[inline]
    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<(), Infallible> {
        let max = self.pin.get_max_duty();
        self.pin.set_duty(duty_for_percent(percent, max));
        Ok(())
    }
}
