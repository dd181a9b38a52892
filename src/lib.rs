//! Minimal raw-mode serial port access for POSIX systems.
//!
//! This crate opens a TTY device, puts it in raw mode at a fixed baud rate and
//! exposes plain blocking reads and writes. The one piece of added behavior is
//! the deadline on [`Connection::read()`]: the read keeps pulling bytes until
//! the buffer is full or the configured timeout has elapsed, and then returns
//! whatever it accumulated.
//!
//! The OS interaction is hidden behind the [`device::SerialDevice`] trait,
//! with [`device::PosixDevice`] as the termios-backed implementation.
//! Everything else, including the deadline loop, is platform independent.
//!
//! ```no_run
//! use std::time::Duration;
//! use ttyport::{Baud, Connection};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut port = Connection::open("/dev/ttyUSB0", Baud::B115200, Duration::from_millis(500))?;
//! port.write(b"AT\r\n")?;
//!
//! let mut reply = [0; 64];
//! let n = port.read(&mut reply)?;
//! println!("{:02X?}", &reply[..n]);
//! port.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! A zero timeout disables the deadline entirely: `read` blocks until the
//! buffer is completely filled. A `Connection` is not meant to be shared
//! between threads; callers that need that must serialize access themselves.

#[macro_use]
mod log;

mod baud;
mod connection;
mod error;

pub mod device;

pub use baud::Baud;
pub use connection::Connection;
pub use error::OpenError;
pub use error::ReadError;
pub use error::SetBaudRateError;
pub use error::UnsupportedBaudRate;
