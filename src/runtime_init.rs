// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2018-2023 Andre Richter <andre.o.richter@gmail.com>

//! Rust runtime initialization code.

use core::ptr::addr_of_mut;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Equivalent to `crt0` or `c0` code in C/C++ world. Clears the `bss` section, then calls the
/// kernel init code.
///
/// Called from the architectural boot code.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
pub unsafe fn runtime_init() -> ! {
    extern "C" {
        // Boundaries of the .bss section, provided by the linker script.
        static mut __bss_start: u64;
        static mut __bss_end: u64;
    }

    // Zero out the .bss section.
    r0::zero_bss(addr_of_mut!(__bss_start), addr_of_mut!(__bss_end));

    crate::kernel_init()
}
