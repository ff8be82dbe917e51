// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::io::{BufRead, Write};

use crate::{
    arch::{Address, Arch},
    config::Config,
    error::{Error, Result},
    memory::PageProtection,
    program::{self, Program}
};

/// Makes a [`Program`]'s page executable and jumps into it, narrating each
/// step to `out`.
pub struct Runner<P: PageProtection> {
    config: Config,
    protection: P,
    entry: Address
}

impl<P: PageProtection> Runner<P> {
    /// `entry` is only reported, as the address of the routine driving the
    /// run.
    pub fn new(protection: P, entry: Address) -> Self {
        Self {
            config: Config::default(),
            protection,
            entry
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn run<W: Write, R: BufRead>(
        &mut self, program: &Program, out: &mut W, input: &mut R
    ) -> Result<()> {
        let host_page_size = self
            .protection
            .page_size()
            .map_err(Error::PageSizeUnavailable)?;
        self.config.validate(host_page_size)?;

        writeln!(out, "{:>12} @ {:#x}", "main", self.entry)?;
        writeln!(out, "{:>12} @ {:#x}", "instructions", program.address())?;

        let page = self.config.page_of(program.address());
        tracing::debug!(
            buffer = program.address(),
            page,
            length = program.len(),
            "located instruction page"
        );
        writeln!(out, "{:>12} @ {:#x}", "page", page)?;

        writeln!(out, "making instructions executable...")?;
        out.flush()?;
        input.read_until(b'\n', &mut Vec::new())?;

        if let Err(code) =
            self.protection.set_executable(page, self.config.region_length)
        {
            writeln!(out, "mprotect failed: error {}", code)?;
            return Err(Error::PermissionChangeFailed { code });
        }
        tracing::debug!(page, length = self.config.region_length, "protected");

        if Arch::host() != Some(program.arch) {
            tracing::warn!(
                program = %program.arch,
                host = ?Arch::host(),
                "jumping into code for another architecture"
            );
        }

        writeln!(out, "jumping...")?;
        out.flush()?;
        // the page is now read+execute; validity of the bytes is on the caller
        #[allow(unsafe_code)]
        unsafe {
            program::enter(program);
        }
        writeln!(out, "after jump")?;
        Ok(())
    }
}
