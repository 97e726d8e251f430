// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Positrak Firmware
//!
//! Single-axis closed-loop position control for a brushed DC motor with a quadrature encoder,
//! written in Rust, targeting an STM32F777 MCU.
//!
//! One control cycle is three cooperating pieces connected through [`share::Share`] cells:
//!
//! ```text
//! Encoder -> EncoderTask -> Share<i32> -> Controller -> MotorDriver -> PWM IN1 / IN2
//! ```
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`share`] | Single-writer / multi-reader cells passed between tasks |
//! | [`hw`] | Collaborator traits for encoders and PWM channels, plus STM32F7 adapters |
//! | [`drivers`] | H-bridge motor driver (signed duty to two PWM channels) |
//! | [`control`] | Proportional controller and the per-tick control loop |
//! | [`tasks`] | Periodic encoder sampling task |
//! | [`config`] | Compile-time tuning defaults |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features stm32f7,defmt
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod logging;

pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod share;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Quantity};
