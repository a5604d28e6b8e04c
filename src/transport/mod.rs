//! # Printer Transport Layer
//!
//! Communication backends for sending print data to a printer.
//!
//! ## Available Transports
//!
//! - [`device`]: printer device file (USB line printer, serial or RFCOMM tty)
//! - `Vec<u8>`: in-memory sink, used to inspect job bytes

pub mod device;

pub use device::DeviceTransport;

use crate::error::PrintError;

/// A byte sink that print jobs write to.
pub trait Transport {
    /// Write all bytes, or fail with a transport error.
    fn write_all(&mut self, data: &[u8]) -> Result<(), PrintError>;
}

impl Transport for Vec<u8> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), PrintError> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<(), PrintError> {
        (**self).write_all(data)
    }
}
