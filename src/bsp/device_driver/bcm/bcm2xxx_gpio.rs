// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2018-2023 Andre Richter <andre.o.richter@gmail.com>

//! GPIO driver.

use crate::{
    bsp::device_driver::common::{BoundedUsize, MMIODerefWrapper},
    driver,
    synchronization::{interface::Mutex, NullLock},
};
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_structs,
    registers::{ReadWrite, WriteOnly},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

// GPIO registers.
//
// Descriptions taken from
// - https://github.com/raspberrypi/documentation/files/1888662/BCM2837-ARM-Peripherals.-.Revised.-.V2-1.pdf
// - https://datasheets.raspberrypi.com/bcm2711/bcm2711-peripherals.pdf
//
// GPFSEL0-5: one 3-bit function field per pin, ten pins per register.
// GPSET0-1, GPCLR0-1: write-1-acts, write-0 is a no-op.
register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x00 => GPFSEL: [ReadWrite<u32>; 6]),
        (0x18 => _reserved1),
        (0x1C => GPSET: [WriteOnly<u32>; 2]),
        (0x24 => _reserved2),
        (0x28 => GPCLR: [WriteOnly<u32>; 2]),
        (0x30 => @END),
    }
}

/// Abstraction for the associated MMIO registers.
type Registers = MMIODerefWrapper<RegisterBlock>;

struct GPIOInner {
    registers: Registers,
}

/// Pins per function select register.
const FSEL_PINS_PER_REGISTER: usize = 10;

/// Width of one function select field.
const FSEL_FIELD_WIDTH: usize = 3;

const FSEL_FIELD_MASK: u32 = 0b111;

/// Pins per set/clear register bank.
const PINS_PER_BANK: usize = 32;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// A GPIO pin number. The BCM283x/BCM2711 SoCs expose pins 0 through 53.
pub type GpioPin = BoundedUsize<53>;

/// Pin function select encodings.
#[allow(dead_code)]
#[repr(u32)]
#[derive(Copy, Clone)]
pub enum Function {
    Input = 0b000,
    Output = 0b001,
}

/// Representation of the GPIO HW block.
pub struct GPIO {
    inner: NullLock<GPIOInner>,
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl GPIOInner {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: Registers::new(mmio_start_addr),
        }
    }

    /// Select `function` for `pin`.
    ///
    /// Ten pins share one function select register, so this is a read-modify-write that leaves
    /// the other nine fields untouched.
    fn set_pin_function(&mut self, pin: GpioPin, function: Function) {
        let fsel = pin.get() / FSEL_PINS_PER_REGISTER;
        let shift = (pin.get() % FSEL_PINS_PER_REGISTER) * FSEL_FIELD_WIDTH;

        let mut fields = self.registers.GPFSEL[fsel].get();
        fields &= !(FSEL_FIELD_MASK << shift);
        fields |= (function as u32) << shift;

        self.registers.GPFSEL[fsel].set(fields);
    }

    /// Drive `pin` high.
    ///
    /// The set registers are write-1-sets: the zero bits of the written word leave all other
    /// pins' output state alone, so no read-modify-write is needed.
    fn set_pin(&mut self, pin: GpioPin) {
        let bank = pin.get() / PINS_PER_BANK;

        self.registers.GPSET[bank].set(1 << (pin.get() % PINS_PER_BANK));
    }

    /// Drive `pin` low.
    fn clear_pin(&mut self, pin: GpioPin) {
        let bank = pin.get() / PINS_PER_BANK;

        self.registers.GPCLR[bank].set(1 << (pin.get() % PINS_PER_BANK));
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl GPIO {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            inner: NullLock::new(GPIOInner::new(mmio_start_addr)),
        }
    }

    /// Select `function` for `pin`.
    pub fn set_pin_function(&self, pin: GpioPin, function: Function) {
        let mut r = &self.inner;
        r.lock(|inner| inner.set_pin_function(pin, function))
    }

    /// Drive `pin` high.
    pub fn set_pin(&self, pin: GpioPin) {
        let mut r = &self.inner;
        r.lock(|inner| inner.set_pin(pin))
    }

    /// Drive `pin` low.
    pub fn clear_pin(&self, pin: GpioPin) {
        let mut r = &self.inner;
        r.lock(|inner| inner.clear_pin(pin))
    }
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for GPIO {
    fn compatible(&self) -> &'static str {
        "BCM GPIO"
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Word offsets into the register block.
    const GPFSEL4: usize = 0x10;
    const GPSET0: usize = 0x1C;
    const GPSET1: usize = 0x20;
    const GPCLR0: usize = 0x28;
    const GPCLR1: usize = 0x2C;

    const NUM_WORDS: usize = core::mem::size_of::<RegisterBlock>() / 4;

    /// An in-memory register block standing in for the MMIO window.
    fn mock_block() -> [u32; NUM_WORDS] {
        [0; NUM_WORDS]
    }

    fn peek(base: usize, byte_offset: usize) -> u32 {
        unsafe { ((base + byte_offset) as *const u32).read_volatile() }
    }

    fn poke(base: usize, byte_offset: usize, value: u32) {
        unsafe { ((base + byte_offset) as *mut u32).write_volatile(value) }
    }

    /// Pin 42 lives in function select register 4, field low bit 6. Selecting output must write
    /// `0b001` into that field and preserve every other bit of the register.
    #[test]
    fn output_select_rewrites_only_the_pin_field() {
        let mut block = mock_block();
        let base = block.as_mut_ptr() as usize;
        let mut inner = unsafe { GPIOInner::new(base) };

        poke(base, GPFSEL4, 0xFFFF_FFFF);

        inner.set_pin_function(GpioPin::new(42), Function::Output);

        let expected = (0xFFFF_FFFF & !(0b111 << 6)) | (0b001 << 6);
        assert_eq!(peek(base, GPFSEL4), expected);

        // No other function select register is touched.
        for offset in [0x00, 0x04, 0x08, 0x0C, 0x14] {
            assert_eq!(peek(base, offset), 0);
        }
    }

    /// Bank 1 covers pins 32-53; the set/clear bit position is `pin - 32` and stays in `0..=21`.
    #[test]
    fn bank_one_bit_positions() {
        let mut block = mock_block();
        let base = block.as_mut_ptr() as usize;
        let mut inner = unsafe { GPIOInner::new(base) };

        for pin in 32..=53 {
            inner.set_pin(GpioPin::new(pin));

            let written = peek(base, GPSET1);
            assert_eq!(written, 1 << (pin - 32));
            assert!(written < (1 << 22));
            assert_eq!(peek(base, GPSET0), 0);

            poke(base, GPSET1, 0);
        }

        // Pin 42 in particular maps to bit 10.
        inner.set_pin(GpioPin::new(42));
        assert_eq!(peek(base, GPSET1), 1 << 10);
    }

    /// Bank 0 pins must not leak into bank 1.
    #[test]
    fn bank_zero_pins_use_the_first_registers() {
        let mut block = mock_block();
        let base = block.as_mut_ptr() as usize;
        let mut inner = unsafe { GPIOInner::new(base) };

        inner.set_pin(GpioPin::new(31));
        assert_eq!(peek(base, GPSET0), 1 << 31);
        assert_eq!(peek(base, GPSET1), 0);

        inner.clear_pin(GpioPin::new(0));
        assert_eq!(peek(base, GPCLR0), 1);
        assert_eq!(peek(base, GPCLR1), 0);
    }

    /// Three full blink cycles against pin 42, tracking per-bit pin levels with write-1 set/clear
    /// semantics. Only pin 42's level may ever transition, and no register outside the configured
    /// function select and the bank 1 set/clear pair is written.
    #[test]
    fn blink_cycles_touch_only_the_target_pin() {
        let mut block = mock_block();
        let base = block.as_mut_ptr() as usize;
        let mut inner = unsafe { GPIOInner::new(base) };

        let pin = GpioPin::new(42);
        inner.set_pin_function(pin, Function::Output);
        assert_eq!(peek(base, GPFSEL4), 0b001 << 6);

        // Simulated output levels of bank 1.
        let mut level: u32 = 0;

        for _ in 0..3 {
            inner.set_pin(pin);
            let set = peek(base, GPSET1);
            assert_eq!(set, 1 << 10);
            level |= set;
            assert_eq!(level, 1 << 10);
            poke(base, GPSET1, 0);

            inner.clear_pin(pin);
            let clear = peek(base, GPCLR1);
            assert_eq!(clear, 1 << 10);
            level &= !clear;
            assert_eq!(level, 0);
            poke(base, GPCLR1, 0);

            // Bank 0 and the remaining function selects stay untouched throughout.
            assert_eq!(peek(base, GPSET0), 0);
            assert_eq!(peek(base, GPCLR0), 0);
            assert_eq!(peek(base, GPFSEL4), 0b001 << 6);
        }
    }
}
