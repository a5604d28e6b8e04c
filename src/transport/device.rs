//! # Device File Transport
//!
//! Writes print data straight to a printer device node:
//!
//! - USB printer class devices (`/dev/usb/lp0`)
//! - Serial and Bluetooth RFCOMM ttys (`/dev/ttyUSB0`, `/dev/rfcomm0`)
//!
//! ## TTY Configuration
//!
//! When the device is a terminal it is switched to raw mode so binary raster
//! data passes through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL, IXON, IXOFF, IXANY cleared
//! - **No output processing**: OPOST cleared (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **Non-canonical, no echo**
//!
//! Plain character devices such as `lp` are written as-is.
//!
//! ## Chunked Writes
//!
//! Large writes are split into 4096-byte chunks with a short pause between
//! them so slow links do not overrun the printer's buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use super::Transport;
use crate::error::PrintError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Printer Device Transport
///
/// An open printer device. The file handle is closed when this is dropped.
///
/// ```no_run
/// use dokondor_print::protocol::commands;
/// use dokondor_print::transport::{DeviceTransport, Transport};
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::init())?;
/// # Ok::<(), dokondor_print::PrintError>(())
/// ```
pub struct DeviceTransport {
    path: PathBuf,
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// ## Errors
    ///
    /// Returns a transport error if the device does not exist, permission is
    /// denied (usually needs the `lp` or `dialout` group), or raw TTY
    /// configuration fails.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, PrintError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            PrintError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let fd = file.as_raw_fd();
        if is_tty(fd) {
            configure_tty_raw(fd)?;
            log::debug!("Configured {} for raw TTY output", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Device path this transport writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for DeviceTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), PrintError> {
        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| PrintError::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| PrintError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| PrintError::Transport(format!("Flush failed: {}", e)))
    }
}

fn is_tty(fd: i32) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Configure a file descriptor for raw TTY mode.
///
/// IXON/IXOFF/IXANY must be off: 0x11 (XON) and 0x13 (XOFF) appear in raster data.
fn configure_tty_raw(fd: i32) -> Result<(), PrintError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(PrintError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(PrintError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dokondor-print-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_open_missing_device() {
        let err = DeviceTransport::open("/nonexistent/dokondor/lp9")
            .err()
            .expect("open should fail");
        assert!(matches!(err, PrintError::Transport(_)));
        assert!(err.to_string().contains("/nonexistent/dokondor/lp9"));
    }

    #[test]
    fn test_writes_regular_file_in_chunks() {
        let path = temp_path("chunks");
        fs::write(&path, b"").unwrap();

        {
            let mut transport = DeviceTransport::open(&path).unwrap();
            transport.chunk_size = 3;
            transport.chunk_delay = Duration::ZERO;
            transport.write_all(b"0123456789").unwrap();
            transport.write_all(b"ab").unwrap();
            assert_eq!(transport.path(), path.as_path());
        }

        assert_eq!(fs::read(&path).unwrap(), b"0123456789ab");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_vec_transport_collects() {
        let mut sink: Vec<u8> = Vec::new();
        Transport::write_all(&mut sink, &[1, 2]).unwrap();
        Transport::write_all(&mut sink, &[3]).unwrap();
        assert_eq!(sink, vec![1, 2, 3]);
    }
}
