// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One tick of the closed loop: position share -> controller -> motor driver.
//!
//! The run loop calls [`ControlLoop::step`] once per tick, after the encoder task has published
//! its sample:
//!
//! ```rust,ignore
//! loop {
//!     encoder_task.step();
//!     control_loop.step()?;
//!     delay.delay_ms(LOOP_PERIOD_MS);
//! }
//! ```
//!
//! `step` never suspends; it reads the latest published position and returns.

use crate::control::Controller;
use crate::drivers::MotorDriver;
use crate::error::Error;
use crate::hw::PwmChannel;
use crate::share::Share;

/// Controller and motor driver bound to a position share.
pub struct ControlLoop<'a, CH1, CH2> {
    controller: Controller<'a>,
    motor: MotorDriver<CH1, CH2>,
    position: &'a Share<i32>,
}

impl<'a, CH1, CH2, E> ControlLoop<'a, CH1, CH2>
where
    CH1: PwmChannel<Error = E>,
    CH2: PwmChannel<Error = E>,
{
    pub fn new(
        controller: Controller<'a>,
        motor: MotorDriver<CH1, CH2>,
        position: &'a Share<i32>,
    ) -> Self {
        Self {
            controller,
            motor,
            position,
        }
    }

    /// Run the controller on the latest published position and apply the result.
    ///
    /// Returns the duty applied to the bridge (after clamping). On a controller error the motor
    /// keeps its previous command.
    pub fn step(&mut self) -> Result<f32, Error<E>> {
        let measured = self.position.get() as f32;
        let actuation = self.controller.run(measured).map_err(|e| e.widen())?;
        self.motor.set_duty_cycle(actuation)?;
        Ok(self.motor.duty())
    }

    /// Stop driving the motor (both channels to 0%).
    pub fn stop(&mut self) -> Result<(), Error<E>> {
        self.motor.coast()
    }

    #[inline]
    pub fn controller(&self) -> &Controller<'a> {
        &self.controller
    }

    /// Mutable access for retargeting the setpoint or gain between ticks.
    #[inline]
    pub fn controller_mut(&mut self) -> &mut Controller<'a> {
        &mut self.controller
    }

    #[inline]
    pub fn motor(&self) -> &MotorDriver<CH1, CH2> {
        &self.motor
    }

    /// Tear down the loop and return its parts.
    pub fn free(self) -> (Controller<'a>, MotorDriver<CH1, CH2>) {
        (self.controller, self.motor)
    }
}
