// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cooperative tasks resumed by the run loop.

pub mod encoder_task;

pub use encoder_task::EncoderTask;
