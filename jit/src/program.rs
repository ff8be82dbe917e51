// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::mem;

use crate::arch::{Address, Arch};

/// Machine code for one architecture, living for the whole process.
#[derive(Clone, Copy, Debug)]
pub struct Program {
    pub bytes: &'static [u8],
    pub arch: Arch
}

/// The big-endian encodings of `mov x0, #0; mov x16, #1; svc #0`, byte for
/// byte as written. A little-endian core does not decode them as that
/// sequence.
pub static INSTRUCTIONS: [u8; 12] = [
    0xd2, 0x80, 0x00, 0x00, 0xd2, 0x80, 0x00, 0x30, 0xd4, 0x00, 0x00, 0x01
];

impl Program {
    pub const fn new(bytes: &'static [u8], arch: Arch) -> Self {
        Self { bytes, arch }
    }

    pub fn address(&self) -> Address {
        self.bytes.as_ptr() as Address
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The program this binary ships with.
pub static BUILTIN: Program = Program::new(&INSTRUCTIONS, Arch::Aarch64);

/// Calls the first byte of `program` as an `extern "C" fn()`.
///
/// # Safety
///
/// The pages holding `program.bytes` must already be executable, and the
/// bytes must be valid code for the host (so `program.arch` must be
/// [`Arch::host`]) that either returns with the C calling convention or never
/// comes back. Nothing here checks any of that.
#[allow(unsafe_code)]
pub unsafe fn enter(program: &Program) {
    let entry: extern "C" fn() =
        unsafe { mem::transmute(program.bytes.as_ptr()) };
    entry();
}
