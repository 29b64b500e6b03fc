//! Owned raster surface and full-surface snapshots.
//!
//! The surface wraps a Cairo ARGB32 [`cairo::ImageSurface`]. Drawing goes through
//! short-lived contexts created by [`Surface::draw`]; the pixel buffer can only be
//! borrowed while no context is alive, which is why snapshots take `&mut self`.

use super::color::Color;
use crate::util::Rect;
use std::io::Write;
use thiserror::Error;

/// Errors raised while creating, drawing on, or reading back a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Snapshot is {snapshot_width}x{snapshot_height} but surface is {width}x{height}")]
    SizeMismatch {
        width: i32,
        height: i32,
        snapshot_width: i32,
        snapshot_height: i32,
    },
}

/// Unpremultiplied pixel value read back from a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// An owned copy of every pixel of a surface at one point in time.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl Snapshot {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the captured buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The raster drawing area.
pub struct Surface {
    image: cairo::ImageSurface,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Underlying Cairo surface, e.g. to use as a paint source.
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }

    /// Runs `paint` against a fresh context for this surface.
    ///
    /// The context is dropped and the surface flushed before returning, so the
    /// pixels are immediately readable.
    pub fn draw<F>(&mut self, paint: F) -> Result<(), SurfaceError>
    where
        F: FnOnce(&cairo::Context) -> Result<(), cairo::Error>,
    {
        {
            let ctx = cairo::Context::new(&self.image)?;
            paint(&ctx)?;
        }
        self.image.flush();
        Ok(())
    }

    /// Replaces every pixel with `color`.
    pub fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.draw(|ctx| {
            ctx.set_operator(cairo::Operator::Source);
            color.apply(ctx);
            ctx.paint()
        })
    }

    /// Replaces the pixels inside `rect` with `color`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.draw(|ctx| {
            ctx.set_operator(cairo::Operator::Source);
            color.apply(ctx);
            ctx.rectangle(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
            ctx.fill()
        })
    }

    /// Captures the full pixel buffer.
    pub fn snapshot(&mut self) -> Result<Snapshot, SurfaceError> {
        let width = self.width();
        let height = self.height();
        let stride = self.image.stride();
        let data = self.image.data()?.to_vec();
        Ok(Snapshot {
            width,
            height,
            stride,
            data,
        })
    }

    /// Overwrites the surface with a previously captured snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        if snapshot.width != self.width()
            || snapshot.height != self.height()
            || snapshot.stride != self.image.stride()
        {
            return Err(SurfaceError::SizeMismatch {
                width: self.width(),
                height: self.height(),
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
            });
        }
        let mut data = self.image.data()?;
        data.copy_from_slice(&snapshot.data);
        Ok(())
    }

    /// Reads a single pixel, un-premultiplying the color channels.
    ///
    /// Returns `Ok(None)` for coordinates outside the surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<Rgba>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        let stride = self.image.stride() as usize;
        let data = self.image.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let mut word = [0u8; 4];
        word.copy_from_slice(&data[offset..offset + 4]);
        Ok(Some(unpremultiply(u32::from_ne_bytes(word))))
    }

    /// Encodes the surface as PNG into `out`.
    pub fn write_png<W: Write>(&self, out: &mut W) -> Result<(), SurfaceError> {
        self.image.write_to_png(out)?;
        Ok(())
    }
}

/// ARGB32 stores premultiplied alpha in a native-endian 32-bit word.
fn unpremultiply(argb: u32) -> Rgba {
    let a = (argb >> 24) as u8;
    let channel = |shift: u32| -> u8 {
        let premultiplied = (argb >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((premultiplied * 255 + a as u32 / 2) / a as u32).min(255) as u8
        }
    };
    Rgba {
        r: channel(16),
        g: channel(8),
        b: channel(0),
        a,
    }
}
