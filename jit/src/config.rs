// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use tracing::Level;

use crate::{
    arch::{self, Address, PAGE_SIZE, PROTECTED_REGION_LENGTH},
    error::{Error, Result}
};

/// Page geometry the runner works with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub page_size: usize,
    pub region_length: usize
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            region_length: PROTECTED_REGION_LENGTH
        }
    }
}

impl Config {
    /// Fails unless `host_page_size` is the page size this config assumes.
    pub fn validate(&self, host_page_size: usize) -> Result<()> {
        if host_page_size != self.page_size {
            return Err(Error::PageSizeMismatch {
                assumed: self.page_size,
                host: host_page_size
            });
        }
        Ok(())
    }

    pub fn page_of(&self, address: Address) -> Address {
        arch::page_address(address, self.page_size)
    }
}

/// Most verbose level `main` logs at: stage events in debug builds, only
/// warnings and errors otherwise.
pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::WARN
    }
}
