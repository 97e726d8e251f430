// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time tuning defaults.
//!
//! These seed the setpoint and gain shares at startup. They are not persisted; change them here
//! and reflash.

/// Initial target position, in encoder ticks from the power-on origin.
pub const INITIAL_SETPOINT: f32 = 4000.0;

/// Proportional gain, in percent duty per tick of error.
pub const KP: f32 = 0.05;

/// Run loop period.
pub const LOOP_PERIOD_MS: u32 = 10;

/// H-bridge PWM carrier frequency.
pub const PWM_FREQUENCY_HZ: u32 = 20_000;

/// Flip encoder sign so that positive duty increases the measured position.
pub const ENCODER_INVERTED: bool = false;
