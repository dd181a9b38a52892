//! Termios-backed device implementation.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;

use super::SerialDevice;
use crate::error::{OpenError, SetBaudRateError};
use crate::Baud;

/// A terminal device opened read-write and configured for raw byte I/O.
///
/// The descriptor is owned through a [`File`], so a `PosixDevice` that goes
/// out of scope always closes it, including on every early return while the
/// configuration below is still in progress.
pub struct PosixDevice {
	file: File,
}

impl PosixDevice {
	/// Open `path` and configure it as a raw serial line at `baud`.
	///
	/// The device is opened with `O_NONBLOCK` so the open cannot hang on modem
	/// control lines; the flag is cleared again once configuration is done and
	/// all further I/O uses plain blocking syscalls. `VMIN` and `VTIME` are
	/// both set to zero, so the driver itself never blocks waiting for data;
	/// timeout handling belongs to the layer above.
	pub fn open(path: impl AsRef<Path>, baud: Baud) -> Result<Self, OpenError> {
		let file = OpenOptions::new()
			.read(true)
			.write(true)
			.custom_flags(libc::O_NOCTTY | libc::O_NONBLOCK)
			.open(path)
			.map_err(OpenError::Open)?;
		let fd = file.as_raw_fd();

		if unsafe { libc::isatty(fd) } != 1 {
			return Err(OpenError::NotATerminal);
		}

		let mut attributes = get_attributes(fd).map_err(OpenError::GetAttributes)?;

		let speed = baud.speed();
		unsafe {
			libc::cfsetispeed(&mut attributes, speed);
			libc::cfsetospeed(&mut attributes, speed);
		}

		attributes.c_cc[libc::VMIN] = 0;
		attributes.c_cc[libc::VTIME] = 0;

		// Raw mode: ignore modem control lines, enable the receiver, and stop
		// the line discipline from interpreting, translating or echoing any
		// byte in either direction.
		attributes.c_cflag |= libc::CLOCAL | libc::CREAD;
		attributes.c_lflag &= !(libc::ICANON | libc::ECHO | libc::ECHOE | libc::ISIG);
		attributes.c_iflag &= !(libc::IGNBRK
			| libc::BRKINT
			| libc::PARMRK
			| libc::ISTRIP
			| libc::INLCR
			| libc::IGNCR
			| libc::ICRNL
			| libc::IXON
			| libc::IXOFF
			| libc::IXANY);
		attributes.c_oflag &= !libc::OPOST;

		// The device was only just opened, so there is nothing to drain.
		set_attributes(fd, &attributes).map_err(OpenError::SetAttributes)?;

		let flags = unsafe { libc::fcntl(fd, libc::F_GETFL) };
		if flags < 0 {
			return Err(OpenError::SetBlocking(io::Error::last_os_error()));
		}
		if unsafe { libc::fcntl(fd, libc::F_SETFL, flags & !libc::O_NONBLOCK) } < 0 {
			return Err(OpenError::SetBlocking(io::Error::last_os_error()));
		}

		Ok(Self { file })
	}
}

impl SerialDevice for PosixDevice {
	fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
		self.file.read(buffer)
	}

	fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
		self.file.write(buffer)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.file.flush()
	}

	fn set_baud_rate(&mut self, baud: Baud) -> Result<(), SetBaudRateError> {
		let fd = self.file.as_raw_fd();
		let mut attributes = get_attributes(fd).map_err(SetBaudRateError::GetAttributes)?;
		let speed = baud.speed();
		unsafe {
			libc::cfsetispeed(&mut attributes, speed);
			libc::cfsetospeed(&mut attributes, speed);
		}
		set_attributes(fd, &attributes).map_err(SetBaudRateError::SetAttributes)?;
		Ok(())
	}

	fn baud_rate(&self) -> io::Result<Baud> {
		let attributes = get_attributes(self.file.as_raw_fd())?;
		let speed = unsafe { libc::cfgetospeed(&attributes) };
		Baud::from_speed(speed).ok_or_else(|| {
			io::Error::new(io::ErrorKind::InvalidData, "device reports an unsupported line speed")
		})
	}
}

impl AsRawFd for PosixDevice {
	fn as_raw_fd(&self) -> RawFd {
		self.file.as_raw_fd()
	}
}

fn get_attributes(fd: RawFd) -> io::Result<libc::termios> {
	let mut attributes = unsafe { std::mem::zeroed() };
	if unsafe { libc::tcgetattr(fd, &mut attributes) } != 0 {
		return Err(io::Error::last_os_error());
	}
	Ok(attributes)
}

fn set_attributes(fd: RawFd, attributes: &libc::termios) -> io::Result<()> {
	if unsafe { libc::tcsetattr(fd, libc::TCSANOW, attributes) } != 0 {
		return Err(io::Error::last_os_error());
	}
	Ok(())
}
