// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Closed-loop position control for a single motor axis.
//!
//! ## Modules
//!
//! - [`controller`] - Proportional controller with shared setpoint / gain inputs.
//! - [`control_loop`] - Per-tick pipeline from the position share to the motor driver.

pub mod control_loop;
pub mod controller;

pub use control_loop::ControlLoop;
pub use controller::{Controller, GainSource};
