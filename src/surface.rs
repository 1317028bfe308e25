//! Pixel surfaces
//!
//! A surface is an ordered array of color cells with a brightness scalar and
//! an explicit flush to hardware. The device has two of them, the on-board
//! matrix and the external strip, grouped in [`Surfaces`].

use smart_leds::{SmartLedsWrite, brightness};

use crate::{
    Error,
    color::{OFF, Rgb},
};

/// Identifies one of the two surfaces of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    Board,
    Strip,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 2] = [SurfaceId::Board, SurfaceId::Strip];
}

/// Error returned by a surface whose driver rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlushError;

/// Addressable pixel buffer
pub trait Surface {
    /// Number of cells, fixed at construction
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Color of a cell, `OFF` outside the cell range
    fn cell(&self, index: usize) -> Rgb;

    /// Set a cell; writes outside the cell range are ignored
    fn set_cell(&mut self, index: usize, color: Rgb);

    /// Set every cell to one color
    fn fill(&mut self, color: Rgb);

    fn brightness(&self) -> u8;

    fn set_brightness(&mut self, brightness: u8);

    /// Push the buffer to hardware
    fn flush(&mut self) -> Result<(), FlushError>;
}

/// Surface backed by a fixed cell buffer and a `smart-leds` driver
pub struct PixelSurface<D, const N: usize> {
    cells: [Rgb; N],
    brightness: u8,
    driver: D,
}

impl<D, const N: usize> PixelSurface<D, N>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    /// Create a blank surface with the given brightness
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            cells: [OFF; N],
            brightness,
            driver,
        }
    }

    /// Raw cells, before brightness scaling
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Copy of the raw cells
    pub fn frame(&self) -> [Rgb; N] {
        self.cells
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D, const N: usize> Surface for PixelSurface<D, N>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    fn len(&self) -> usize {
        N
    }

    fn cell(&self, index: usize) -> Rgb {
        self.cells.get(index).copied().unwrap_or(OFF)
    }

    fn set_cell(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn flush(&mut self) -> Result<(), FlushError> {
        self.driver
            .write(brightness(self.cells.iter().copied(), self.brightness))
            .map_err(|_| FlushError)
    }
}

/// Collection of surfaces addressable by [`SurfaceId`]
pub trait SurfaceSet {
    fn surface(&self, id: SurfaceId) -> &dyn Surface;

    fn surface_mut(&mut self, id: SurfaceId) -> &mut dyn Surface;

    /// Flush one surface, tagging a failure with its id
    fn flush(&mut self, id: SurfaceId) -> Result<(), Error> {
        self.surface_mut(id).flush().map_err(|_| Error::Flush(id))
    }

    /// Blank every surface and push the blank frame to hardware
    fn clear_all(&mut self) -> Result<(), Error> {
        for id in SurfaceId::ALL {
            self.surface_mut(id).fill(OFF);
            self.flush(id)?;
        }
        Ok(())
    }
}

/// The board and strip surfaces of the device
pub struct Surfaces<B, S> {
    pub board: B,
    pub strip: S,
}

impl<B: Surface, S: Surface> Surfaces<B, S> {
    pub const fn new(board: B, strip: S) -> Self {
        Self { board, strip }
    }
}

impl<B: Surface, S: Surface> SurfaceSet for Surfaces<B, S> {
    fn surface(&self, id: SurfaceId) -> &dyn Surface {
        match id {
            SurfaceId::Board => &self.board,
            SurfaceId::Strip => &self.strip,
        }
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut dyn Surface {
        match id {
            SurfaceId::Board => &mut self.board,
            SurfaceId::Strip => &mut self.strip,
        }
    }
}

impl<T: SurfaceSet + ?Sized> SurfaceSet for &mut T {
    fn surface(&self, id: SurfaceId) -> &dyn Surface {
        (**self).surface(id)
    }

    fn surface_mut(&mut self, id: SurfaceId) -> &mut dyn Surface {
        (**self).surface_mut(id)
    }
}
