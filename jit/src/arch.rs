// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use static_assertions::const_assert;
use std::fmt;

pub type Address = usize;

/// Page size the demo assumes. Checked against the host at startup by
/// [`crate::config::Config::validate`].
pub const PAGE_SIZE: usize = 4096;
const_assert!(PAGE_SIZE.is_power_of_two());

/// Bytes handed to the protection call, independent of the buffer length.
pub const PROTECTED_REGION_LENGTH: usize = 4 * PAGE_SIZE;
const_assert!(PROTECTED_REGION_LENGTH > 0);
const_assert!(PROTECTED_REGION_LENGTH % PAGE_SIZE == 0);

/// Instruction set a buffer of machine code is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arch {
    Aarch64,
    X86_64
}

impl Arch {
    /// The architecture this binary was compiled for, if it has a tag.
    pub const fn host() -> Option<Arch> {
        if cfg!(target_arch = "aarch64") {
            Some(Arch::Aarch64)
        } else if cfg!(target_arch = "x86_64") {
            Some(Arch::X86_64)
        } else {
            None
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aarch64 => "aarch64",
            Self::X86_64 => "x86_64"
        })
    }
}

/// Rounds `address` down to the start of its `page_size`-byte page.
/// `page_size` must be a power of two.
pub const fn page_address(address: Address, page_size: usize) -> Address {
    address & !(page_size - 1)
}

#[cfg(test)]
mod tests {
    use super::{page_address, Arch, PAGE_SIZE};

    #[test]
    fn clears_low_twelve_bits() {
        for address in [0, 1, 0xfff, 0x1000, 0x1001, 0x7fff_1234_5678, usize::MAX]
        {
            assert_eq!(address & !0xfff, page_address(address, PAGE_SIZE));
        }
    }

    #[test]
    fn aligned_address_is_its_own_page() {
        assert_eq!(0x4000, page_address(0x4000, PAGE_SIZE));
        assert_eq!(0x4000, page_address(0x4000, 0x4000));
        assert_eq!(0x4000, page_address(0x7fff, 0x4000));
    }

    #[test]
    fn host_matches_target() {
        #[cfg(target_arch = "x86_64")]
        assert_eq!(Some(Arch::X86_64), Arch::host());
        #[cfg(target_arch = "aarch64")]
        assert_eq!(Some(Arch::Aarch64), Arch::host());
        assert_eq!("aarch64", Arch::Aarch64.to_string());
    }
}
