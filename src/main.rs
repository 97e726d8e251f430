// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Firmware entry point: board bring-up and the cooperative run loop.
//!
//! Every tick the encoder task samples TIM2 and publishes into `POSITION`, then the control loop
//! reads it and drives TIM4 CH1/CH2. Nothing preempts either step. A failed control step
//! coasts the motor, disables the bridge, and parks the core until reset.

#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

use hal::{
    pac,
    prelude::*,
    timer::{Channel1, Channel2},
};
use stm32f7xx_hal as hal;

use positrak::{
    config,
    control::{ControlLoop, Controller},
    drivers::MotorDriver,
    hw::{BoardPins, PwmOutput, TimerEncoder},
    log_error, log_info,
    share::Share,
    tasks::EncoderTask,
};

static SETPOINT: Share<f32> = Share::new(config::INITIAL_SETPOINT);
static GAIN: Share<f32> = Share::new(config::KP);
static POSITION: Share<i32> = Share::new(0);

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut delay = Delay::new(cp.SYST, clocks.sysclk().raw());

    let BoardPins { motor, encoder } = BoardPins::new(dp.GPIOA, dp.GPIOD);
    let _encoder_pins = encoder;
    let mut bridge = motor.bridge;

    // TIM4 CH1/CH2 -> IN1/IN2
    let (in1, in2) = dp
        .TIM4
        .pwm_hz(
            (Channel1::new(motor.in1), Channel2::new(motor.in2)),
            config::PWM_FREQUENCY_HZ.Hz(),
            &clocks,
        )
        .split();
    let driver = MotorDriver::new(PwmOutput::new(in1), PwmOutput::new(in2));

    // TIM2 encoder (clock is not enabled by the HAL for raw register use)
    let rcc_pac = unsafe { &*pac::RCC::ptr() };
    rcc_pac.apb1enr.modify(|_, w| w.tim2en().set_bit());
    let mut encoder_task = EncoderTask::new(
        TimerEncoder::tim2(dp.TIM2, config::ENCODER_INVERTED),
        &POSITION,
    );
    encoder_task.zero();

    let controller = Controller::new(&SETPOINT, &GAIN);
    let mut control_loop = ControlLoop::new(controller, driver, &POSITION);

    bridge.enable();
    log_info!("run loop started, period {} ms", config::LOOP_PERIOD_MS);

    loop {
        encoder_task.step();

        if let Err(e) = control_loop.step() {
            log_error!("control step failed: {}", e);
            let _ = control_loop.stop();
            bridge.disable();
            break;
        }

        delay.delay_ms(config::LOOP_PERIOD_MS);
    }

    // Fault latch: outputs at 0%, bridge Hi-Z and asleep until reset.
    loop {
        cortex_m::asm::wfi();
    }
}
