#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use ttyport::device::SerialDevice;
use ttyport::{Baud, SetBaudRateError};

/// In-memory serial device with scripted data arrival.
///
/// Bytes become readable once their scheduled delay since construction has
/// passed. Like a descriptor configured with `VMIN = 0`, a read with nothing
/// ready returns `Ok(0)` after a short sleep standing in for the syscall.
pub struct MockDevice {
	start: Instant,
	incoming: VecDeque<(Duration, Vec<u8>)>,
	pending: VecDeque<u8>,
	read_error: Option<io::Error>,
	pub written: Vec<u8>,
	baud: Baud,
}

impl MockDevice {
	pub fn new() -> Self {
		init_logging();
		Self {
			start: Instant::now(),
			incoming: VecDeque::new(),
			pending: VecDeque::new(),
			read_error: None,
			written: Vec::new(),
			baud: Baud::B9600,
		}
	}

	/// Make `data` readable immediately.
	pub fn feed(self, data: &[u8]) -> Self {
		self.feed_after(Duration::from_millis(0), data)
	}

	/// Make `data` readable once `after` has passed since construction.
	pub fn feed_after(mut self, after: Duration, data: &[u8]) -> Self {
		self.incoming.push_back((after, data.to_vec()));
		self
	}

	/// Fail the first read attempted after all scheduled data has been consumed.
	pub fn fail_after_data(mut self, error: io::Error) -> Self {
		self.read_error = Some(error);
		self
	}

	fn promote_due(&mut self) {
		let elapsed = self.start.elapsed();
		while let Some((after, _)) = self.incoming.front() {
			if *after > elapsed {
				break;
			}
			let (_, data) = self.incoming.pop_front().unwrap();
			self.pending.extend(data);
		}
	}
}

impl SerialDevice for MockDevice {
	fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
		self.promote_due();
		if self.pending.is_empty() {
			if self.incoming.is_empty() {
				if let Some(error) = self.read_error.take() {
					return Err(error);
				}
			}
			std::thread::sleep(Duration::from_millis(1));
			return Ok(0);
		}
		let len = buffer.len().min(self.pending.len());
		for slot in &mut buffer[..len] {
			*slot = self.pending.pop_front().unwrap();
		}
		Ok(len)
	}

	fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
		self.written.extend_from_slice(buffer);
		Ok(buffer.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}

	fn set_baud_rate(&mut self, baud: Baud) -> Result<(), SetBaudRateError> {
		self.baud = baud;
		Ok(())
	}

	fn baud_rate(&self) -> io::Result<Baud> {
		Ok(self.baud)
	}
}

pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}
