// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2021-2023 Andre Richter <andre.o.richter@gmail.com>

//! Host stand-ins for the architectural processor code.
//!
//! Only compiled for `cargo test` runs on the build host. Mirrors the public interface of
//! `src/_arch/aarch64/cpu.rs` without emitting AArch64 instructions.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::cpu::arch_cpu

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Spin for `n` cycles.
#[inline(always)]
pub fn spin_for_cycles(n: usize) {
    for _ in 0..n {
        core::hint::spin_loop();
    }
}

/// Pause execution.
#[allow(dead_code)]
pub fn wait_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
