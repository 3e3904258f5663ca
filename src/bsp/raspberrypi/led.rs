// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2020-2023 Andre Richter <andre.o.richter@gmail.com>

//! BSP status LED facilities.

use crate::{bsp::device_driver, led};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The GPIO pin wired to the board's green ACT LED.
///
/// Bank 1 pin on the RPi4; its set/clear bit position is `pin - 32`.
#[cfg(feature = "bsp_rpi4")]
pub const STATUS_LED_PIN: device_driver::GpioPin = device_driver::GpioPin::new(42);

/// The GPIO pin wired to the board's green ACT LED.
///
/// Valid for the 3A+/3B+ boards. Earlier RPi3 boards route the ACT LED through the GPIO expander,
/// which is not reachable without the mailbox property interface.
#[cfg(feature = "bsp_rpi3")]
pub const STATUS_LED_PIN: device_driver::GpioPin = device_driver::GpioPin::new(29);

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

struct StatusLed;

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static STATUS_LED: StatusLed = StatusLed;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Return a reference to the status LED.
pub fn status_led() -> &'static dyn led::interface::StatusLed {
    &STATUS_LED
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl led::interface::StatusLed for StatusLed {
    fn on(&self) {
        super::GPIO.set_pin(STATUS_LED_PIN);
    }

    fn off(&self) {
        super::GPIO.clear_pin(STATUS_LED_PIN);
    }
}
