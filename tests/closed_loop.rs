// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Full cooperative cycle on the host: encoder task -> position share -> control loop -> PWM.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use positrak::control::{ControlLoop, Controller, GainSource};
use positrak::drivers::MotorDriver;
use positrak::hw::{Encoder, PwmChannel};
use positrak::share::Share;
use positrak::tasks::EncoderTask;
use positrak::Error;

/// Encoder over a simulated shaft position shared with the test.
struct SimEncoder {
    shaft: Rc<Cell<i32>>,
    origin: i32,
}

impl Encoder for SimEncoder {
    fn read(&mut self) -> i32 {
        self.shaft.get() - self.origin
    }

    fn zero(&mut self) {
        self.origin = self.shaft.get();
    }
}

/// PWM channel that remembers its last pulse width.
#[derive(Clone, Default)]
struct Probe(Rc<RefCell<f32>>);

impl Probe {
    fn width(&self) -> f32 {
        *self.0.borrow()
    }
}

impl PwmChannel for Probe {
    type Error = Infallible;

    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<(), Infallible> {
        *self.0.borrow_mut() = percent;
        Ok(())
    }
}

struct Rig {
    shaft: Rc<Cell<i32>>,
    fwd: Probe,
    rev: Probe,
}

impl Rig {
    fn new(start: i32) -> Self {
        Self {
            shaft: Rc::new(Cell::new(start)),
            fwd: Probe::default(),
            rev: Probe::default(),
        }
    }

    fn encoder(&self) -> SimEncoder {
        SimEncoder {
            shaft: self.shaft.clone(),
            origin: 0,
        }
    }

    fn motor(&self) -> MotorDriver<Probe, Probe> {
        MotorDriver::new(self.fwd.clone(), self.rev.clone())
    }

    fn widths(&self) -> (f32, f32) {
        (self.fwd.width(), self.rev.width())
    }

    /// Crude plant: the shaft moves one tick per 10% of net duty.
    fn advance(&self) {
        let net = self.fwd.width() - self.rev.width();
        self.shaft.set(self.shaft.get() + (net / 10.0) as i32);
    }
}

#[test]
fn far_target_saturates_forward() {
    let rig = Rig::new(0);
    let setpoint = Share::new(100.0);
    let gain = Share::new(2.0);
    let position = Share::new(0);

    let mut encoder_task = EncoderTask::new(rig.encoder(), &position);
    let controller = Controller::new(&setpoint, &gain);
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    encoder_task.step();
    assert_eq!(control_loop.step().unwrap(), 99.0);
    assert_eq!(rig.widths(), (99.0, 0.0));
}

#[test]
fn overshoot_reverses() {
    let rig = Rig::new(80);
    let setpoint = Share::new(50.0);
    let gain = Share::new(1.0);
    let position = Share::new(0);

    let mut encoder_task = EncoderTask::new(rig.encoder(), &position);
    let controller = Controller::new(&setpoint, &gain);
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    encoder_task.step();
    assert_eq!(control_loop.step().unwrap(), -30.0);
    assert_eq!(rig.widths(), (0.0, 30.0));
}

#[test]
fn loop_converges_on_setpoint() {
    let rig = Rig::new(0);
    let gain = Share::new(1.0);
    let position = Share::new(0);

    let mut encoder_task = EncoderTask::new(rig.encoder(), &position);
    let controller = Controller::with_setpoint(500.0, GainSource::Shared(&gain));
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    for _ in 0..200 {
        encoder_task.step();
        control_loop.step().unwrap();
        rig.advance();
    }

    // Stalls inside the band where the duty is too small to move the plant.
    let remaining = 500 - position.get();
    assert!((0..10).contains(&remaining), "remaining error {}", remaining);
    assert_eq!(rig.rev.width(), 0.0);
}

#[test]
fn zero_moves_origin_for_next_cycle() {
    let rig = Rig::new(250);
    let gain = Share::new(1.0);
    let position = Share::new(0);

    let mut encoder_task = EncoderTask::new(rig.encoder(), &position);
    let controller = Controller::with_setpoint(0.0, GainSource::Shared(&gain));
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    encoder_task.step();
    control_loop.step().unwrap();
    assert_eq!(rig.widths(), (0.0, 99.0));

    encoder_task.zero();
    encoder_task.step();
    assert_eq!(position.get(), 0);

    control_loop.step().unwrap();
    assert_eq!(rig.widths(), (0.0, 0.0));
}

#[test]
fn retargeting_between_ticks() {
    let rig = Rig::new(0);
    let gain = Share::new(0.5);
    let position = Share::new(0);

    let mut encoder_task = EncoderTask::new(rig.encoder(), &position);
    let controller = Controller::with_setpoint(40.0, GainSource::Shared(&gain));
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    encoder_task.step();
    control_loop.step().unwrap();
    assert_eq!(rig.widths(), (20.0, 0.0));

    control_loop.controller_mut().set_point(-60.0);
    control_loop.step().unwrap();
    assert_eq!(rig.widths(), (0.0, 30.0));

    control_loop.controller_mut().set_gain(1.0);
    assert_eq!(gain.get(), 1.0);
    control_loop.step().unwrap();
    assert_eq!(rig.widths(), (0.0, 60.0));
}

#[test]
fn non_finite_gain_is_reported() {
    let rig = Rig::new(0);
    let gain = Share::new(f32::NAN);
    let position = Share::new(0);

    let controller = Controller::with_setpoint(10.0, GainSource::Shared(&gain));
    let mut control_loop = ControlLoop::new(controller, rig.motor(), &position);

    assert!(matches!(
        control_loop.step(),
        Err(Error::NonFinite(positrak::Quantity::Gain))
    ));
    assert_eq!(rig.widths(), (0.0, 0.0));
}
