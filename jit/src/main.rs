// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use barejit::{
    config, memory::HostPages, program::BUILTIN, runner::Runner
};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(config::log_level())
        .with_writer(io::stderr)
        .init();

    let entry = (main as fn() -> ExitCode) as usize;
    let mut runner = Runner::new(HostPages, entry);
    match runner.run(&BUILTIN, &mut io::stdout(), &mut io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "giving up");
            ExitCode::from(error.exit_status())
        }
    }
}
