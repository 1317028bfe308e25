//! Status display layout
//!
//! The slow-refresh screen shows a static background with a few labels and a
//! single status line that is re-rendered on every telemetry refresh.

use crate::Error;

/// Error returned by a display that failed to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayError;

/// Placement of a text block on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRegion {
    pub position: (i32, i32),
    /// Text color in 0xRRGGBB format
    pub color: u32,
    pub scale: u8,
}

/// Static text rendered once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub region: TextRegion,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusLayout {
    pub background: &'static str,
    pub labels: &'static [Label],
    /// Region re-rendered with the telemetry reading
    pub status: TextRegion,
    /// Status text shown before the first reading
    pub placeholder: &'static str,
}

pub trait StatusDisplay {
    fn set_background(&mut self, image: &str) -> Result<(), DisplayError>;

    /// Replace the text of a region without refreshing the panel
    fn set_text(&mut self, region: &TextRegion, text: &str) -> Result<(), DisplayError>;

    /// Push pending changes to the panel
    fn refresh(&mut self) -> Result<(), DisplayError>;
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn set_background(&mut self, image: &str) -> Result<(), DisplayError> {
        (**self).set_background(image)
    }

    fn set_text(&mut self, region: &TextRegion, text: &str) -> Result<(), DisplayError> {
        (**self).set_text(region, text)
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        (**self).refresh()
    }
}

impl StatusLayout {
    /// Draw the background, every label and the status placeholder
    pub fn render(&self, display: &mut impl StatusDisplay) -> Result<(), Error> {
        display
            .set_background(self.background)
            .map_err(|_| Error::Display)?;
        for label in self.labels {
            display
                .set_text(&label.region, label.text)
                .map_err(|_| Error::Display)?;
        }
        display
            .set_text(&self.status, self.placeholder)
            .map_err(|_| Error::Display)?;
        display.refresh().map_err(|_| Error::Display)
    }

    /// Replace the status line and refresh the panel
    pub fn show_status(&self, display: &mut impl StatusDisplay, text: &str) -> Result<(), Error> {
        display
            .set_text(&self.status, text)
            .map_err(|_| Error::Display)?;
        display.refresh().map_err(|_| Error::Display)
    }
}
