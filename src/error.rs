/// An error that can occur while opening and configuring a serial connection.
///
/// Every failure aborts the whole open: the descriptor acquired by the first
/// step is closed before the error is returned.
#[derive(Debug)]
pub enum OpenError {
	/// The device itself could not be opened.
	Open(std::io::Error),
	/// The opened path does not refer to a terminal device.
	NotATerminal,
	/// Reading the current terminal attributes failed.
	GetAttributes(std::io::Error),
	/// Applying the raw-mode terminal attributes failed.
	SetAttributes(std::io::Error),
	/// Restoring blocking mode on the descriptor failed.
	SetBlocking(std::io::Error),
}

/// The requested rate is not in the supported set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnsupportedBaudRate {
	pub value: u32,
}

/// An error that can occur while changing the baud rate of an open connection.
#[derive(Debug)]
pub enum SetBaudRateError {
	/// Reading the current terminal attributes failed.
	GetAttributes(std::io::Error),
	/// Applying the updated speed fields failed.
	SetAttributes(std::io::Error),
}

/// An error from the deadline read loop.
///
/// The bytes accumulated before the failing device read are still in the
/// caller's buffer; `bytes_read` says how many.
#[derive(Debug)]
pub struct ReadError {
	pub bytes_read: usize,
	pub error: std::io::Error,
}

impl std::error::Error for OpenError {}
impl std::error::Error for UnsupportedBaudRate {}
impl std::error::Error for SetBaudRateError {}
impl std::error::Error for ReadError {}

impl std::fmt::Display for OpenError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Open(e) => write!(f, "failed to open device: {}", e),
			Self::NotATerminal => write!(f, "device is not a terminal"),
			Self::GetAttributes(e) => write!(f, "failed to read terminal attributes: {}", e),
			Self::SetAttributes(e) => write!(f, "failed to apply terminal attributes: {}", e),
			Self::SetBlocking(e) => write!(f, "failed to restore blocking mode: {}", e),
		}
	}
}

impl std::fmt::Display for UnsupportedBaudRate {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "unsupported baud rate: {}", self.value)
	}
}

impl std::fmt::Display for SetBaudRateError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::GetAttributes(e) => write!(f, "failed to read terminal attributes: {}", e),
			Self::SetAttributes(e) => write!(f, "failed to apply new baud rate: {}", e),
		}
	}
}

impl std::fmt::Display for ReadError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "read failed after {} bytes: {}", self.bytes_read, self.error)
	}
}
