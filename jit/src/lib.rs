// Copyright (C) 2024 Ethan Uppal. All rights reserved.

#![deny(unsafe_code)]

pub mod arch;
pub mod config;
pub mod error;
pub mod memory;
pub mod program;
pub mod runner;
