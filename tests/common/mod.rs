#![allow(dead_code)]

use std::{cell::Cell, string::String, vec::Vec};

use myrtio_light_selector::{
    Button, Buttons, Instant, PixelSurface, Rgb, Surfaces,
    display::{DisplayError, StatusDisplay, TextRegion},
    telemetry::{Telemetry, TelemetryError},
};
use smart_leds::SmartLedsWrite;

pub(crate) const BOARD_LEN: usize = 4;
pub(crate) const STRIP_LEN: usize = 8;

pub(crate) type TestSurfaces =
    Surfaces<PixelSurface<RecordingDriver, BOARD_LEN>, PixelSurface<RecordingDriver, STRIP_LEN>>;

/// Driver that keeps the last written frame
#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    pub(crate) writes: usize,
    pub(crate) last: Vec<Rgb>,
    pub(crate) fail: bool,
}

impl SmartLedsWrite for RecordingDriver {
    type Error = ();
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(());
        }
        self.last = iterator.into_iter().map(Into::into).collect();
        self.writes += 1;
        Ok(())
    }
}

pub(crate) fn surfaces() -> TestSurfaces {
    Surfaces::new(
        PixelSurface::new(RecordingDriver::default(), 255),
        PixelSurface::new(RecordingDriver::default(), 255),
    )
}

pub(crate) fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Buttons held at fixed levels until changed
pub(crate) struct LevelButtons<'a>(pub(crate) &'a Cell<[bool; 4]>);

impl Buttons for LevelButtons<'_> {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.0.get()[button.index()]
    }
}

pub(crate) struct FixedTelemetry {
    pub(crate) volts: f32,
    pub(crate) reads: usize,
    pub(crate) fail: bool,
}

impl FixedTelemetry {
    pub(crate) fn new(volts: f32) -> Self {
        Self {
            volts,
            reads: 0,
            fail: false,
        }
    }
}

impl Telemetry for FixedTelemetry {
    fn read(&mut self) -> Result<f32, TelemetryError> {
        if self.fail {
            return Err(TelemetryError);
        }
        self.reads += 1;
        Ok(self.volts)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    pub(crate) background: Option<String>,
    pub(crate) texts: Vec<(TextRegion, String)>,
    pub(crate) refreshes: usize,
    pub(crate) fail: bool,
}

impl RecordingDisplay {
    /// Latest text written to `region`
    pub(crate) fn text_at(&self, region: &TextRegion) -> Option<&str> {
        self.texts
            .iter()
            .rev()
            .find(|(r, _)| r == region)
            .map(|(_, text)| text.as_str())
    }
}

impl StatusDisplay for RecordingDisplay {
    fn set_background(&mut self, image: &str) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError);
        }
        self.background = Some(image.into());
        Ok(())
    }

    fn set_text(&mut self, region: &TextRegion, text: &str) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError);
        }
        self.texts.push((*region, text.into()));
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError);
        }
        self.refreshes += 1;
        Ok(())
    }
}
