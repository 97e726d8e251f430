// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Quadrature encoder on TIM2 in encoder mode.
//!
//! TIM2 is 32 bits wide, so the raw counter reinterpreted as `i32` is already a signed tick count
//! and wraps the same way the position does.

use stm32f7xx_hal::pac;

use crate::hw::Encoder;

/// Timer running in encoder mode 3 (counts on both TI1 and TI2 edges).
pub struct TimerEncoder<TIM> {
    tim: TIM,
    inverted: bool,
}

impl<TIM> TimerEncoder<TIM> {
    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> TIM {
        self.tim
    }
}

impl TimerEncoder<pac::TIM2> {
    /// Configure TIM2 as a quadrature encoder and start counting from zero.
    ///
    /// `inverted` flips the sign of every reading, for motors wired so that positive drive
    /// decreases the count.
    pub fn tim2(tim: pac::TIM2, inverted: bool) -> Self {
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Full 32-bit range
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Encoder mode 3
        tim.smcr.modify(|_, w| w.sms().bits(0b011));

        // CH1/CH2 as inputs from TI1/TI2
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());

        // Non-inverted polarity, both channels enabled
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim, inverted }
    }

    /// Raw 32-bit counter value.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.tim.cnt.read().cnt().bits()
    }
}

impl Encoder for TimerEncoder<pac::TIM2> {
    #[inline]
    fn read(&mut self) -> i32 {
        let ticks = self.raw() as i32;
        if self.inverted {
            ticks.wrapping_neg()
        } else {
            ticks
        }
    }

    #[inline]
    fn zero(&mut self) {
        self.tim.cnt.write(|w| w.bits(0));
    }
}
