// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2018-2023 Andre Richter <andre.o.richter@gmail.com>

// Rust embedded logo for `make doc`.
#![doc(html_logo_url = "https://git.io/JeGIp")]

//! The `kernel` binary.
//!
//! A freestanding firmware for the Raspberry Pi that does exactly one thing: blink the board's
//! green ACT LED forever.
//!
//! # Code organization and architecture
//!
//! The code is divided into different *modules*, each representing a typical **subsystem** of the
//! `kernel`. Top-level module files of subsystems reside directly in the `src` folder. For
//! example, `src/led.rs` contains code that is concerned with driving the status LED.
//!
//! ## Visibility of processor architecture code
//!
//! Code that is specific to the target processor architecture lives in `src/_arch`, and is loaded
//! into the generic modules using the `path attribute`. For example, the architectural part of the
//! `cpu` subsystem, `src/_arch/aarch64/cpu.rs`, is loaded at the top of `src/cpu.rs`.
//!
//! When unit testing on the build host, a host stand-in from `src/_arch/host` is loaded instead,
//! so that the test harness can exercise the generic code without AArch64 instructions.
//!
//! ## BSP code
//!
//! `BSP` stands for Board Support Package. `BSP` code is organized under `src/bsp`, and contains
//! board-specific definitions and functions. These are things such as the board's memory map or
//! instances of drivers for devices that are featured on the respective board.
//!
//! # Boot flow
//!
//! 1. All four cores start executing [`_start()`]. Cores other than the boot core park in a
//!    low-power wait and never proceed.
//! 2. The boot core sets up its stack and jumps to [`runtime_init()`], which zeroes `.bss`.
//! 3. [`kernel_init()`] brings up the device drivers and muxes the LED pin.
//! 4. [`kernel_main()`] enters the endless blink loop.
//!
//! [`_start()`]: cpu/boot/arch_boot/fn._start.html
//! [`runtime_init()`]: runtime_init/fn.runtime_init.html
//! [`kernel_init()`]: fn.kernel_init.html
//! [`kernel_main()`]: fn.kernel_main.html

#![cfg_attr(not(test), no_main)]
#![cfg_attr(not(test), no_std)]

mod bsp;
mod cpu;
mod driver;
mod led;
#[cfg(not(test))]
mod panic_wait;
#[cfg(all(target_arch = "aarch64", not(test)))]
mod runtime_init;
mod synchronization;

/// Delay between LED transitions, in busy-wait loop iterations.
///
/// Wall-clock duration depends on core clock speed and optimization level, so the resulting blink
/// frequency is only approximately reproducible.
const BLINK_INTERVAL_CYCLES: usize = 500_000;

/// Early init code.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
unsafe fn kernel_init() -> ! {
    use driver::interface::DriverManager;

    for i in bsp::driver::driver_manager().all_device_drivers().iter() {
        if let Err(x) = i.init() {
            panic!("Error loading driver: {}: {}", i.compatible(), x);
        }
    }
    bsp::driver::driver_manager().post_device_driver_init();

    // Transition from unsafe to safe.
    kernel_main()
}

/// The main function running after the early init.
fn kernel_main() -> ! {
    led::Blinker::new(bsp::led::status_led(), BLINK_INTERVAL_CYCLES).run()
}
