use std::io;
use std::time::{Duration, Instant};

#[cfg(unix)]
use std::path::Path;

#[cfg(unix)]
use crate::device::PosixDevice;
use crate::device::SerialDevice;
#[cfg(unix)]
use crate::error::OpenError;
use crate::error::{ReadError, SetBaudRateError};
use crate::Baud;

/// A serial connection with a read deadline.
///
/// The connection exclusively owns its device: it only exists after a fully
/// successful open, and [`Self::close()`] consumes it, so an operation on a
/// closed or half-configured connection cannot be expressed.
pub struct Connection<D> {
	/// The underlying device (normally a raw-mode TTY).
	device: D,

	/// The timeout for a single read call. Zero disables the deadline.
	read_timeout: Duration,
}

#[cfg(unix)]
impl Connection<PosixDevice> {
	/// Open the terminal device at `path` in raw mode at the given baud rate.
	///
	/// A zero `read_timeout` disables the deadline: [`Self::read()`] then
	/// blocks until its buffer is completely filled.
	pub fn open(path: impl AsRef<Path>, baud: Baud, read_timeout: Duration) -> Result<Self, OpenError> {
		let path = path.as_ref();
		let device = PosixDevice::open(path, baud)?;
		info!("opened serial port {} at {} baud", path.display(), baud);
		Ok(Self::new(device, read_timeout))
	}
}

impl<D: SerialDevice> Connection<D> {
	/// Create a connection over an already-configured device.
	pub fn new(device: D, read_timeout: Duration) -> Self {
		Self { device, read_timeout }
	}

	/// Read into `buffer` until it is full or the read timeout elapses.
	///
	/// Returns the number of bytes placed in the buffer. The count equals
	/// `buffer.len()` whenever the call completes before the deadline; with a
	/// non-zero timeout any shorter count, including zero, simply means the
	/// deadline passed first and is not an error. A device read yielding no
	/// data is treated as "nothing available yet", never as end of stream.
	///
	/// The deadline is checked between device reads, so the actual return may
	/// overrun the timeout by the duration of one underlying read call.
	pub fn read(&mut self, buffer: &mut [u8]) -> Result<usize, ReadError> {
		let start = Instant::now();
		let mut filled = 0;

		while filled < buffer.len() {
			// Zero means no deadline at all, not an immediate return.
			if !self.read_timeout.is_zero() && start.elapsed() >= self.read_timeout {
				trace!("read deadline reached with {} of {} bytes", filled, buffer.len());
				break;
			}
			match self.device.read(&mut buffer[filled..]) {
				Ok(0) => continue,
				Ok(n) => filled += n,
				Err(error) => return Err(ReadError { bytes_read: filled, error }),
			}
		}

		Ok(filled)
	}

	/// Write `data` to the device.
	///
	/// A single pass-through write with no retries and no deadline; returns
	/// how many bytes the device accepted.
	pub fn write(&mut self, data: &[u8]) -> io::Result<usize> {
		self.device.write(data)
	}

	/// Change the baud rate of the open connection.
	///
	/// Only the speed fields are re-applied; the raw-mode configuration from
	/// the open is left untouched.
	pub fn set_baud_rate(&mut self, baud: Baud) -> Result<(), SetBaudRateError> {
		self.device.set_baud_rate(baud)?;
		debug!("changed baud rate to {}", baud);
		Ok(())
	}

	/// The baud rate the device is currently configured at.
	pub fn baud_rate(&self) -> io::Result<Baud> {
		self.device.baud_rate()
	}

	/// The configured read timeout.
	pub fn read_timeout(&self) -> Duration {
		self.read_timeout
	}

	/// Change the read timeout for subsequent reads. Zero disables the deadline.
	pub fn set_read_timeout(&mut self, read_timeout: Duration) {
		self.read_timeout = read_timeout;
	}

	/// The underlying device.
	pub fn device(&self) -> &D {
		&self.device
	}

	/// The underlying device, mutably.
	pub fn device_mut(&mut self) -> &mut D {
		&mut self.device
	}

	/// Flush pending output and release the device.
	///
	/// Consuming `self` makes a second close, or I/O after close, a compile
	/// error rather than a runtime fault.
	pub fn close(mut self) -> io::Result<()> {
		self.device.flush()
	}
}

#[cfg(unix)]
impl std::fmt::Debug for Connection<PosixDevice> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::os::unix::io::AsRawFd;
		f.debug_struct("Connection")
			.field("fd", &self.device.as_raw_fd())
			.field("read_timeout", &self.read_timeout)
			.finish_non_exhaustive()
	}
}
