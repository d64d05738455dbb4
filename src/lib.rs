//! A generic, `no_std` Rust driver for brushed DC motors behind a dual-direction H-bridge.
//!
//! This library drives the common three-wire H-bridge input stage: two
//! active-high direction-select lines (forward enable, reverse enable) and one
//! PWM line whose duty cycle sets the magnitude. It is hardware-agnostic,
//! built on the `embedded-hal` 1.x [`OutputPin`] and [`SetDutyCycle`] traits,
//! so any HAL that exposes those works (STM32, ESP32, RP2040, Linux GPIO, ...).
//!
//! A signed speed command selects between three drive states: coast stop
//! (both direction lines low, duty 0), forward (forward line high, duty equal
//! to the speed) and reverse (reverse line high, duty equal to the magnitude).
//! The driver guarantees that both direction lines are never asserted at the
//! same time: the outgoing line is always dropped before the incoming line is
//! raised.

#![no_std]

pub mod drive;
mod errors;

pub use drive::Drive;
pub use errors::Error;

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Maximum speed magnitude accepted by [`Motor::set_speed`].
///
/// Matches the canonical 8-bit PWM resolution; larger magnitudes are clamped.
pub const MAX_SPEED: i16 = 255;

type Result<T, DIRE, PWME> = core::result::Result<T, Error<DIRE, PWME>>;

/// Driver for one dual-direction DC motor channel.
///
/// Owns the two direction-select lines and the PWM magnitude line for the
/// channel. The lines are moved in at construction, which also forces the
/// coast-stopped state, and can be recovered with [`Motor::release`].
///
/// Both direction pins must share an error type, which is what every HAL
/// providing a homogeneous GPIO bank gives you.
#[derive(Debug)]
pub struct Motor<FWD, REV, PWM> {
    forward: FWD,
    reverse: REV,
    pwm: PWM,
}

impl<FWD, REV, PWM> Motor<FWD, REV, PWM>
where
    FWD: OutputPin,
    REV: OutputPin<Error = FWD::Error>,
    PWM: SetDutyCycle,
{
    /// Takes ownership of the three output lines and coast-stops the motor.
    ///
    /// The pins must already be configured as push-pull outputs; the
    /// [`OutputPin`] bound encodes that. Both direction lines are driven low
    /// and the duty cycle is set to zero before the constructor returns, so
    /// the bridge is de-energised no matter what state the lines were left in.
    ///
    /// # Errors
    /// Propagates the first failed pin or PWM write.
    pub fn new(forward: FWD, reverse: REV, pwm: PWM) -> Result<Self, FWD::Error, PWM::Error> {
        let mut motor = Self {
            forward,
            reverse,
            pwm,
        };
        motor.drive(Drive::Coast)?;
        Ok(motor)
    }

    /// Commands a signed speed.
    ///
    /// The sign selects the direction, the magnitude sets the duty cycle:
    ///
    /// | `speed` | forward line | reverse line | duty        |
    /// |---------|--------------|--------------|-------------|
    /// | `= 0`   | low          | low          | 0           |
    /// | `> 0`   | high         | low          | `speed`     |
    /// | `< 0`   | low          | high         | `-speed`    |
    ///
    /// Magnitudes above [`MAX_SPEED`] are clamped. The duty is applied as the
    /// fraction `magnitude / 255` of the PWM's `max_duty_cycle()`, so an
    /// 8-bit PWM receives exactly the commanded magnitude and wider timers
    /// scale proportionally.
    ///
    /// # Errors
    /// Propagates the first failed pin or PWM write.
    pub fn set_speed(&mut self, speed: i16) -> Result<(), FWD::Error, PWM::Error> {
        self.drive(Drive::from_speed(speed))
    }

    /// Applies an explicit [`Drive`] state.
    ///
    /// The outgoing direction line is driven low before the incoming one is
    /// driven high, so the two enables are never asserted simultaneously.
    ///
    /// # Errors
    /// Propagates the first failed pin or PWM write.
    pub fn drive(&mut self, drive: Drive) -> Result<(), FWD::Error, PWM::Error> {
        match drive {
            Drive::Coast => {
                self.forward.set_low().map_err(Error::Direction)?;
                self.reverse.set_low().map_err(Error::Direction)?;
                self.set_magnitude(0)
            }
            Drive::Forward(magnitude) => {
                self.reverse.set_low().map_err(Error::Direction)?;
                self.forward.set_high().map_err(Error::Direction)?;
                self.set_magnitude(magnitude)
            }
            Drive::Reverse(magnitude) => {
                self.forward.set_low().map_err(Error::Direction)?;
                self.reverse.set_high().map_err(Error::Direction)?;
                self.set_magnitude(magnitude)
            }
        }
    }

    /// Coast-stops the motor: both direction lines low, duty 0.
    ///
    /// Equivalent to `set_speed(0)`. The rotor is left free-running and
    /// decelerates by friction alone.
    ///
    /// # Errors
    /// Propagates the first failed pin or PWM write.
    pub fn coast(&mut self) -> Result<(), FWD::Error, PWM::Error> {
        self.drive(Drive::Coast)
    }

    /// Consumes the driver and gives the three lines back.
    ///
    /// The lines are returned in whatever state the last command left them;
    /// call [`Motor::coast`] first if the bridge must be de-energised.
    pub fn release(self) -> (FWD, REV, PWM) {
        (self.forward, self.reverse, self.pwm)
    }

    fn set_magnitude(&mut self, magnitude: u8) -> Result<(), FWD::Error, PWM::Error> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(magnitude), u16::from(u8::MAX))
            .map_err(Error::Duty)
    }
}
