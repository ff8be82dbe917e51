// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::io;

use thiserror::Error as ThisError;

/// Raw `errno` value reported by the operating system.
pub type OsErrorCode = i32;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("mprotect failed: error {code}")]
    PermissionChangeFailed { code: OsErrorCode },

    #[error("assumed a {assumed}-byte page but the host uses {host}-byte pages")]
    PageSizeMismatch { assumed: usize, host: usize },

    #[error("could not query the host page size: {0}")]
    PageSizeUnavailable(#[source] io::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error)
}

impl Error {
    /// Process exit status for this error. Every failure is fatal.
    pub fn exit_status(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
