// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Proportional position controller.
//!
//! `actuation = (setpoint - measured) * gain`
//!
//! The controller carries no state between calls other than the retargetable setpoint and gain
//! and the last error (kept for diagnostics), so identical inputs always give identical outputs.
//! Output is unbounded; limiting is left to the motor driver.

use crate::error::{Error, Quantity};
use crate::share::Share;

/// Where the controller takes its proportional gain from.
#[derive(Copy, Clone, Debug)]
pub enum GainSource<'a> {
    /// Gain owned by the controller.
    Fixed(f32),
    /// Gain published by another task, read fresh on every [`Controller::run`].
    Shared(&'a Share<f32>),
}

impl GainSource<'_> {
    #[inline]
    fn read(&self) -> f32 {
        match self {
            GainSource::Fixed(kp) => *kp,
            GainSource::Shared(share) => share.get(),
        }
    }
}

/// Proportional controller.
#[derive(Debug)]
pub struct Controller<'a> {
    setpoint: f32,
    gain: GainSource<'a>,
    /// Last computed error, diagnostic only.
    error: f32,
}

impl<'a> Controller<'a> {
    /// Create a controller from a setpoint share and a gain share.
    ///
    /// The setpoint is copied once here; later changes go through [`set_point`](Self::set_point).
    /// The gain share stays live and is read on every run.
    pub fn new(setpoint: &Share<f32>, gain: &'a Share<f32>) -> Self {
        Self::with_setpoint(setpoint.get(), GainSource::Shared(gain))
    }

    /// Create a controller from a plain setpoint and any gain source.
    pub fn with_setpoint(setpoint: f32, gain: GainSource<'a>) -> Self {
        crate::log_info!("controller: setpoint {} gain {}", setpoint, gain.read());

        Self {
            setpoint,
            gain,
            error: 0.0,
        }
    }

    /// Compute the actuation for one measured position.
    ///
    /// Returns [`Error::NonFinite`] if the setpoint, gain or measurement is NaN or infinite, or if
    /// the product overflows. The stored error is left unchanged in that case.
    pub fn run(&mut self, measured: f32) -> Result<f32, Error> {
        let gain = self.gain.read();

        check_finite(self.setpoint, Quantity::Setpoint)?;
        check_finite(gain, Quantity::Gain)?;
        check_finite(measured, Quantity::Measured)?;

        let error = self.setpoint - measured;
        let actuation = error * gain;
        check_finite(actuation, Quantity::Actuation)?;

        self.error = error;
        crate::log_trace!(
            "controller: setpoint {} measured {} actuation {}",
            self.setpoint,
            measured,
            actuation
        );

        Ok(actuation)
    }

    /// Retarget the setpoint, effective on the next run.
    #[inline]
    pub fn set_point(&mut self, setpoint: f32) {
        self.setpoint = setpoint;
    }

    /// Change the gain, effective on the next run.
    ///
    /// A shared gain is published back into its share, so every reader of that share sees it.
    /// This makes the controller the writer of that share: calling `set_gain` while another task
    /// also publishes the gain breaks the single-writer rule of [`Share`].
    pub fn set_gain(&mut self, gain: f32) {
        match &mut self.gain {
            GainSource::Fixed(kp) => *kp = gain,
            GainSource::Shared(share) => {
                let old = share.replace(gain);
                crate::log_debug!("controller: gain {} -> {}", old, gain);
            }
        }
    }

    #[inline]
    pub fn setpoint(&self) -> f32 {
        self.setpoint
    }

    /// Gain the next run would use.
    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain.read()
    }

    /// Error computed by the last successful run.
    #[inline]
    pub fn error(&self) -> f32 {
        self.error
    }
}

#[inline]
fn check_finite(value: f32, quantity: Quantity) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite(quantity))
    }
}
