// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2021-2023 Andre Richter <andre.o.richter@gmail.com>

//! Boot code.

// The boot code is only meaningful in the freestanding binary. Excluding it from test builds
// keeps `_start` and the linker-provided symbols out of the host test harness.
#[cfg(all(target_arch = "aarch64", not(test)))]
#[path = "../_arch/aarch64/cpu/boot.rs"]
mod arch_boot;
