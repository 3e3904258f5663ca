// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2021-2023 Andre Richter <andre.o.richter@gmail.com>

//! Architectural boot code.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::boot::arch_boot

use crate::{bsp, cpu, runtime_init};
use aarch64_cpu::registers::*;
use tock_registers::interfaces::Writeable;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// The entry of the `kernel` binary.
///
/// The Raspberry's firmware releases all four cores into this function simultaneously. The boot
/// core sets up a stack and continues with the Rust runtime init; all other cores are parked.
///
/// The function must be named `_start`, because the linker is looking for this exact name, and
/// must live in the `.text._start` section, which the linker script pins to the load address.
///
/// # Safety
///
/// - Linker script must ensure to place this function at `0x8_0000`.
/// - No stack is available until `SP` is set below.
#[no_mangle]
#[link_section = ".text._start"]
pub unsafe extern "C" fn _start() -> ! {
    if cpu::smp::is_boot_core(cpu::smp::core_id::<u64>()) {
        SP.set(bsp::memory::BOOT_CORE_STACK_START as u64);
        runtime_init::runtime_init()
    } else {
        // Parked cores are never woken. There is no inter-core wake protocol.
        cpu::wait_forever()
    }
}
