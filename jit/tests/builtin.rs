// Copyright (C) 2024 Ethan Uppal. All rights reserved.

#![cfg(all(target_os = "linux", target_arch = "aarch64"))]

use barejit::{arch::PAGE_SIZE, memory::{HostPages, PageProtection}};
use std::{
    io::Write,
    os::unix::process::ExitStatusExt,
    process::{Command, Stdio}
};

#[test]
fn builtin_program_jumps_or_traps() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_barejit"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn barejit");
    // barejit exits before reading when the page size check fails
    let _ = child.stdin.take().expect("piped stdin").write_all(b"\n");
    let output = child.wait_with_output().expect("barejit did not finish");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();

    if HostPages.page_size().expect("sysconf failed") != PAGE_SIZE {
        assert_eq!(Some(1), output.status.code());
        assert!(lines.is_empty());
        return;
    }

    assert!(lines[0].starts_with("        main @ 0x"));
    assert!(lines[1].starts_with("instructions @ 0x"));
    assert!(lines[2].starts_with("        page @ 0x"));
    assert_eq!("making instructions executable...", lines[3]);
    // a refused mprotect is the only way to stop short of the jump
    if lines[4].starts_with("mprotect failed: error ") {
        assert_eq!(Some(1), output.status.code());
        return;
    }
    assert_eq!("jumping...", lines[4]);

    match output.status.signal() {
        Some(signal) => assert!(
            [libc::SIGILL, libc::SIGSEGV, libc::SIGTRAP, libc::SIGBUS]
                .contains(&signal),
            "unexpected signal {}",
            signal
        ),
        None => {
            assert_eq!(Some(0), output.status.code());
        }
    }
}
