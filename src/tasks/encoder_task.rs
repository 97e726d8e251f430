// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic encoder sampling.
//!
//! Each [`step`](EncoderTask::step) reads the encoder once, publishes the position, and returns
//! control to the run loop. The task also implements [`Iterator`] as an endless sequence of
//! samples, one per resume, so it can be driven with iterator adapters:
//!
//! ```
//! use positrak::hw::Encoder;
//! use positrak::share::Share;
//! use positrak::tasks::EncoderTask;
//!
//! struct Fixed(i32);
//!
//! impl Encoder for Fixed {
//!     fn read(&mut self) -> i32 { self.0 }
//!     fn zero(&mut self) { self.0 = 0; }
//! }
//!
//! let position = Share::new(0);
//! let mut task = EncoderTask::new(Fixed(42), &position);
//!
//! assert_eq!(task.nth(2), Some(42));
//! assert_eq!(position.get(), 42);
//! ```

use crate::hw::Encoder;
use crate::share::Share;

/// Samples an [`Encoder`] into a position share. The task is the share's only writer.
pub struct EncoderTask<'a, ENC> {
    encoder: ENC,
    position: &'a Share<i32>,
}

impl<'a, ENC: Encoder> EncoderTask<'a, ENC> {
    pub fn new(encoder: ENC, position: &'a Share<i32>) -> Self {
        Self { encoder, position }
    }

    /// Read the encoder and publish the position. Returns the published value.
    ///
    /// The publish completes before this returns, so readers never see a partial update.
    #[inline]
    pub fn step(&mut self) -> i32 {
        let ticks = self.encoder.read();
        self.position.put(ticks);
        ticks
    }

    /// Move the encoder origin to the current position.
    ///
    /// The share keeps the old value until the next [`step`](Self::step).
    pub fn zero(&mut self) {
        self.encoder.zero();
        crate::log_info!("encoder zeroed");
    }

    /// Last published position.
    #[inline]
    pub fn position(&self) -> i32 {
        self.position.get()
    }

    #[inline]
    pub fn share(&self) -> &'a Share<i32> {
        self.position
    }

    /// Release the encoder.
    pub fn free(self) -> ENC {
        self.encoder
    }
}

impl<ENC: Encoder> Iterator for EncoderTask<'_, ENC> {
    type Item = i32;

    /// Never returns `None`.
    #[inline]
    fn next(&mut self) -> Option<i32> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
