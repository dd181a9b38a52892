//! [`SerialDevice`] trait to decouple the deadline logic from the operating system.

use std::io;

use crate::error::SetBaudRateError;
use crate::Baud;

#[cfg(unix)]
mod posix;
#[cfg(unix)]
pub use posix::PosixDevice;

/// An opened and configured serial device, ready for raw byte I/O.
///
/// Implementors must hand out bytes with the semantics of a descriptor
/// configured with `VMIN = 0, VTIME = 0`: a read with no data pending returns
/// `Ok(0)` rather than an error or an indefinite block, and the caller decides
/// how long to keep asking. The deadline loop in
/// [`Connection::read()`][crate::Connection::read] relies on this.
pub trait SerialDevice {
	/// Read available bytes into `buffer`, returning `Ok(0)` when none are pending.
	fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize>;

	/// Write bytes to the device, returning how many were accepted.
	fn write(&mut self, buffer: &[u8]) -> io::Result<usize>;

	/// Flush buffered output, if the implementation buffers at all.
	fn flush(&mut self) -> io::Result<()>;

	/// Change the line speed without touching any other setting.
	fn set_baud_rate(&mut self, baud: Baud) -> Result<(), SetBaudRateError>;

	/// The line speed the device is currently configured at.
	fn baud_rate(&self) -> io::Result<Baud>;
}
