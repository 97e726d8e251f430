// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device Drivers
//!
//! Drivers that sit above the [`hw`](crate::hw) collaborator traits and below the control loop.
//!
//! ## Existing drivers
//!
//! - [`motor_driver`] – two-input H-bridge (L6206 / DRV8873 in PWM mode) from a signed duty

pub mod motor_driver;

pub use motor_driver::{clamp_duty, MotorDriver};
