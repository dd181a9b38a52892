use core::convert::TryFrom;

use crate::error::UnsupportedBaudRate;

/// A supported baud rate.
///
/// The set is closed: converting an integer outside of it fails with
/// [`UnsupportedBaudRate`] rather than clamping to a nearby rate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Baud {
	B2400,
	B4800,
	B9600,
	B19200,
	B38400,
	B57600,
	B115200,
}

impl Baud {
	/// The rate in bits per second.
	pub fn as_u32(self) -> u32 {
		match self {
			Self::B2400 => 2400,
			Self::B4800 => 4800,
			Self::B9600 => 9600,
			Self::B19200 => 19200,
			Self::B38400 => 38400,
			Self::B57600 => 57600,
			Self::B115200 => 115200,
		}
	}

	/// Translate the rate to the platform constant used in the termios speed fields.
	#[cfg(unix)]
	pub(crate) fn speed(self) -> libc::speed_t {
		match self {
			Self::B2400 => libc::B2400,
			Self::B4800 => libc::B4800,
			Self::B9600 => libc::B9600,
			Self::B19200 => libc::B19200,
			Self::B38400 => libc::B38400,
			Self::B57600 => libc::B57600,
			Self::B115200 => libc::B115200,
		}
	}

	/// Reverse of [`Self::speed()`], for reporting the rate a device is configured at.
	#[cfg(unix)]
	pub(crate) fn from_speed(speed: libc::speed_t) -> Option<Self> {
		match speed {
			libc::B2400 => Some(Self::B2400),
			libc::B4800 => Some(Self::B4800),
			libc::B9600 => Some(Self::B9600),
			libc::B19200 => Some(Self::B19200),
			libc::B38400 => Some(Self::B38400),
			libc::B57600 => Some(Self::B57600),
			libc::B115200 => Some(Self::B115200),
			_ => None,
		}
	}
}

impl TryFrom<u32> for Baud {
	type Error = UnsupportedBaudRate;

	fn try_from(value: u32) -> Result<Self, UnsupportedBaudRate> {
		match value {
			2400 => Ok(Self::B2400),
			4800 => Ok(Self::B4800),
			9600 => Ok(Self::B9600),
			19200 => Ok(Self::B19200),
			38400 => Ok(Self::B38400),
			57600 => Ok(Self::B57600),
			115200 => Ok(Self::B115200),
			value => Err(UnsupportedBaudRate { value }),
		}
	}
}

impl std::fmt::Display for Baud {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.as_u32())
	}
}
