//! # Print Jobs
//!
//! A [`PrintJob`] owns the printer connection for the length of one
//! document. Opening the job acquires the device and resets the printer;
//! dropping it releases the device, whether or not the job finished.
//!
//! ```text
//! PrintJob::open ──► ESC @ ──► print_page (raster chunks) ──► finish (cut)
//!        │                                                       │
//!        └──────────── Drop closes the device on every path ─────┘
//! ```

use std::path::Path;

use super::config::PrinterConfig;
use crate::error::PrintError;
use crate::page::Page;
use crate::protocol::{commands, graphics};
use crate::render::Canvas;
use crate::transport::{DeviceTransport, Transport};

/// Gap fed between consecutive pages of one job.
const PAGE_GAP_MM: f32 = 3.0;

/// A single print job on one printer.
pub struct PrintJob<T: Transport> {
    transport: T,
    config: PrinterConfig,
    name: String,
    pages: usize,
    finished: bool,
}

impl PrintJob<DeviceTransport> {
    /// Open the printer device and start a job.
    pub fn open(
        device: &Path,
        config: PrinterConfig,
        name: impl Into<String>,
    ) -> Result<Self, PrintError> {
        let transport = DeviceTransport::open(device)?;
        log::debug!("Opened {} for {}", transport.path().display(), config.name);
        Self::begin(transport, config, name)
    }
}

impl<T: Transport> PrintJob<T> {
    /// Start a job on an already open transport. Sends the printer reset.
    pub fn begin(
        mut transport: T,
        config: PrinterConfig,
        name: impl Into<String>,
    ) -> Result<Self, PrintError> {
        let name = name.into();
        transport.write_all(&commands::init())?;
        log::info!("Started print job '{}' on {}", name, config.name);

        Ok(Self {
            transport,
            config,
            name,
            pages: 0,
            finished: false,
        })
    }

    /// Rasterize a page and send it.
    pub fn print_page(&mut self, page: &Page) -> Result<(), PrintError> {
        let raster = Canvas::render(page).to_raster();
        if raster.width_bytes() > self.config.width_bytes() as usize {
            log::warn!(
                "Page '{}' is {} dots wide, wider than {} ({} dots); it will be clipped",
                page.name,
                page.width,
                self.config.name,
                self.config.width_dots
            );
        }

        if self.pages > 0 {
            self.transport.write_all(&commands::feed_mm(PAGE_GAP_MM))?;
        }

        let chunks = graphics::raster_chunks(&raster, self.config.max_chunk_rows);
        log::debug!(
            "Sending {}x{} raster in {} chunk(s)",
            raster.width,
            raster.height,
            chunks.len()
        );

        for chunk in &chunks {
            self.transport.write_all(chunk)?;
        }

        self.pages += 1;
        Ok(())
    }

    /// End the job: cut when the printer has a cutter.
    pub fn finish(mut self) -> Result<(), PrintError> {
        if self.config.cutter {
            self.transport.write_all(&commands::cut_full_feed())?;
        }
        self.finished = true;
        log::info!("Finished print job '{}' ({} page(s))", self.name, self.pages);
        Ok(())
    }
}

impl<T: Transport> Drop for PrintJob<T> {
    fn drop(&mut self) {
        if !self.finished {
            log::warn!(
                "Print job '{}' released before finishing ({} page(s) sent)",
                self.name,
                self.pages
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Rect;

    fn page(width: u32, height: u32) -> Page {
        let mut page = Page::new("test", width);
        page.height = height;
        page.fill(Rect::new(0, 0, 8, 1));
        page
    }

    #[test]
    fn test_begin_sends_init() {
        let mut sink = Vec::new();
        let job = PrintJob::begin(&mut sink, PrinterConfig::LABEL_40X30, "t").unwrap();
        job.finish().unwrap();
        assert_eq!(sink, commands::init());
    }

    #[test]
    fn test_receipt_job_cuts() {
        let mut sink = Vec::new();
        let mut job = PrintJob::begin(&mut sink, PrinterConfig::RECEIPT_80MM, "t").unwrap();
        job.print_page(&page(540, 2)).unwrap();
        job.finish().unwrap();

        assert_eq!(&sink[0..2], &[0x1B, 0x40]);
        // Raster header: 68 bytes wide, 2 rows
        assert_eq!(&sink[2..11], &[0x1B, 0x1D, b'S', 1, 68, 0, 2, 0, 0]);
        // First row starts with one black byte
        assert_eq!(sink[11], 0xFF);
        assert_eq!(&sink[sink.len() - 3..], &commands::cut_full_feed()[..]);
        assert_eq!(sink.len(), 2 + 9 + 68 * 2 + 3);
    }

    #[test]
    fn test_label_job_has_no_cut() {
        let mut sink = Vec::new();
        let mut job = PrintJob::begin(&mut sink, PrinterConfig::LABEL_40X30, "t").unwrap();
        job.print_page(&page(320, 240)).unwrap();
        assert_eq!(job.pages, 1);
        job.finish().unwrap();
        assert_eq!(sink.len(), 2 + 9 + 40 * 240);
    }

    #[test]
    fn test_long_page_chunked() {
        let mut config = PrinterConfig::RECEIPT_80MM;
        config.max_chunk_rows = 100;
        let mut sink = Vec::new();
        let mut job = PrintJob::begin(&mut sink, config, "t").unwrap();
        job.print_page(&page(540, 250)).unwrap();
        job.finish().unwrap();

        let headers = sink
            .windows(3)
            .filter(|w| *w == [0x1B, 0x1D, b'S'])
            .count();
        assert_eq!(headers, 3);
    }

    #[test]
    fn test_gap_between_pages() {
        let mut sink = Vec::new();
        let mut job = PrintJob::begin(&mut sink, PrinterConfig::LABEL_40X30, "t").unwrap();
        job.print_page(&page(320, 1)).unwrap();
        job.print_page(&page(320, 1)).unwrap();
        job.finish().unwrap();

        let feed = commands::feed_mm(PAGE_GAP_MM);
        let first_page_end = 2 + 9 + 40;
        assert_eq!(&sink[first_page_end..first_page_end + 3], &feed[..]);
    }

    #[test]
    fn test_drop_without_finish_releases() {
        let mut sink = Vec::new();
        {
            let mut job = PrintJob::begin(&mut sink, PrinterConfig::RECEIPT_80MM, "t").unwrap();
            job.print_page(&page(540, 1)).unwrap();
        }
        // No cut was sent, and the sink is usable again
        assert!(!sink.ends_with(&commands::cut_full_feed()));
        sink.clear();
        assert!(sink.is_empty());
    }
}
