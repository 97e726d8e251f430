// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the single-axis controller on the STM32F777.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins used by the control loop. Construct once at startup:
///
/// ```rust,ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub motor: MotorPins,
    pub encoder: EncoderPins,
}

/// H-bridge inputs and enable lines.
pub struct MotorPins {
    pub in1: gpiod::PD12<Alternate<2>>, // TIM4_CH1 (PWM, forward)
    pub in2: gpiod::PD13<Alternate<2>>, // TIM4_CH2 (PWM, reverse)
    pub bridge: BridgeEnable,
}

/// nSLEEP / DISABLE lines of the H-bridge.
pub struct BridgeEnable {
    nsleep: gpioa::PA4<Output<PushPull>>,
    disable: gpioa::PA3<Output<PushPull>>,
}

/// TIM2 quadrature inputs.
pub struct EncoderPins {
    pub ch1: gpioa::PA0<Alternate<1>>,
    pub ch2: gpioa::PA1<Alternate<1>>,
}

impl BoardPins {
    /// Create the named pins from raw GPIO peripherals.
    ///
    /// The bridge is left asleep and disabled; call [`BridgeEnable::enable`] once the PWM outputs
    /// are at 0%.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();

        let mut nsleep = gpioa.pa4.into_push_pull_output();
        let mut disable = gpioa.pa3.into_push_pull_output();
        nsleep.set_low();
        disable.set_high();

        Self {
            motor: MotorPins {
                in1: gpiod.pd12.into_alternate::<2>(),
                in2: gpiod.pd13.into_alternate::<2>(),
                bridge: BridgeEnable { nsleep, disable },
            },

            encoder: EncoderPins {
                ch1: gpioa.pa0.into_alternate::<1>(),
                ch2: gpioa.pa1.into_alternate::<1>(),
            },
        }
    }
}

impl BridgeEnable {
    /// Wake the driver and release DISABLE.
    pub fn enable(&mut self) {
        self.nsleep.set_high();
        self.disable.set_low();
    }

    /// Assert DISABLE (outputs Hi-Z) and put the driver to sleep.
    pub fn disable(&mut self) {
        self.disable.set_high();
        self.nsleep.set_low();
    }
}
