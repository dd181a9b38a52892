//! Failure paths of the open sequence.
//!
//! These live in their own binary because the descriptor-leak check counts
//! the process's open descriptors, which must not fluctuate underneath it.

#![cfg(unix)]

use assert2::{assert, let_assert};
use std::time::Duration;

use ttyport::{Baud, Connection, OpenError};

mod common;

#[test]
fn rejects_paths_that_are_not_terminals_without_leaking() {
	common::init_logging();
	#[cfg(target_os = "linux")]
	let descriptors_before = open_descriptor_count();

	// The open briefly holds a descriptor for /dev/null before the isatty
	// check fails; every attempt must give it back.
	for _ in 0..32 {
		let_assert!(Err(OpenError::NotATerminal) = Connection::open("/dev/null", Baud::B9600, Duration::from_millis(100)));
	}

	#[cfg(target_os = "linux")]
	assert!(open_descriptor_count() == descriptors_before);
}

#[test]
fn surfaces_the_os_error_for_missing_devices() {
	common::init_logging();
	let_assert!(Err(OpenError::Open(error)) = Connection::open(
		"/dev/ttyport-does-not-exist",
		Baud::B9600,
		Duration::from_millis(100)
	));
	assert!(error.kind() == std::io::ErrorKind::NotFound);
}

#[cfg(target_os = "linux")]
fn open_descriptor_count() -> usize {
	std::fs::read_dir("/proc/self/fd").unwrap().count()
}
