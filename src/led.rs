// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2020-2023 Andre Richter <andre.o.richter@gmail.com>

//! Status LED control.

use crate::cpu;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// LED interfaces.
pub mod interface {
    /// A board LED that can be switched on and off.
    pub trait StatusLed {
        /// Drive the LED pin high.
        fn on(&self);

        /// Drive the LED pin low.
        fn off(&self);
    }
}

/// Drives an LED through endless on/off cycles.
///
/// The delay between transitions is a software busy-wait counted in loop iterations, not
/// wall-clock time. No timer peripheral is involved, so the actual blink frequency depends on
/// core clock speed and optimization level.
pub struct Blinker<'a> {
    led: &'a dyn interface::StatusLed,
    interval_cycles: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl<'a> Blinker<'a> {
    /// Create an instance.
    pub const fn new(led: &'a dyn interface::StatusLed, interval_cycles: usize) -> Self {
        Self {
            led,
            interval_cycles,
        }
    }

    /// Run one full on/off period.
    fn cycle(&self) {
        self.led.on();
        cpu::spin_for_cycles(self.interval_cycles);

        self.led.off();
        cpu::spin_for_cycles(self.interval_cycles);
    }

    /// Blink forever.
    ///
    /// The two-state on/off machine has no terminal state. This function never returns.
    pub fn run(&self) -> ! {
        loop {
            self.cycle()
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    /// Records every transition it is asked to perform.
    struct RecordingLed {
        transitions: RefCell<Vec<Transition>>,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Transition {
        On,
        Off,
    }

    impl RecordingLed {
        const fn new() -> Self {
            Self {
                transitions: RefCell::new(Vec::new()),
            }
        }
    }

    impl interface::StatusLed for RecordingLed {
        fn on(&self) {
            self.transitions.borrow_mut().push(Transition::On);
        }

        fn off(&self) {
            self.transitions.borrow_mut().push(Transition::Off);
        }
    }

    /// Each cycle is exactly one on followed by one off. Over any number of cycles, the observed
    /// level strictly alternates and never settles.
    #[test]
    fn cycles_strictly_alternate() {
        let led = RecordingLed::new();
        let blinker = Blinker::new(&led, 0);

        for _ in 0..3 {
            blinker.cycle();
        }

        let recorded = led.transitions.borrow();
        assert_eq!(recorded.len(), 6);

        for (i, transition) in recorded.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Transition::On
            } else {
                Transition::Off
            };
            assert_eq!(*transition, expected);
        }
    }
}
