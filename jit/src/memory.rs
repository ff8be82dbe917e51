// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::io;

use crate::{arch::Address, error::OsErrorCode};

/// The operating system's page-protection facility.
pub trait PageProtection {
    /// Makes `length` bytes starting at the page-aligned `address` readable
    /// and executable, removing write access.
    fn set_executable(
        &mut self, address: Address, length: usize
    ) -> Result<(), OsErrorCode>;

    fn page_size(&self) -> io::Result<usize>;
}

/// [`PageProtection`] through `mprotect(2)` and `sysconf(3)`.
#[derive(Default)]
pub struct HostPages;

#[allow(unsafe_code)]
impl PageProtection for HostPages {
    fn set_executable(
        &mut self, address: Address, length: usize
    ) -> Result<(), OsErrorCode> {
        let result = unsafe {
            libc::mprotect(
                address as *mut libc::c_void,
                length,
                libc::PROT_READ | libc::PROT_EXEC
            )
        };
        if result != 0 {
            return Err(last_os_error_code());
        }
        Ok(())
    }

    fn page_size(&self) -> io::Result<usize> {
        let result = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if result == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(result as usize)
        }
    }
}

fn last_os_error_code() -> OsErrorCode {
    io::Error::last_os_error().raw_os_error().unwrap_or(-1)
}
