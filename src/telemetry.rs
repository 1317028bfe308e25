use core::fmt::Write;

use heapless::String;

use crate::Error;

/// Text shown in the status region
pub type StatusText = String<24>;

/// Error returned by a telemetry source that failed to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryError;

/// Slow scalar sensor, e.g. the battery voltage
pub trait Telemetry {
    fn read(&mut self) -> Result<f32, TelemetryError>;
}

impl<T: Telemetry + ?Sized> Telemetry for &mut T {
    fn read(&mut self) -> Result<f32, TelemetryError> {
        (**self).read()
    }
}

/// Shown when a reading does not fit the status region
const UNREADABLE_VOLTAGE: &str = "-- V";

/// Format a voltage reading as `"4.12 V"`
pub fn format_voltage(volts: f32) -> StatusText {
    let mut text = StatusText::new();
    if write!(text, "{:.2} V", volts).is_err() {
        text.clear();
        // Fits the buffer
        let _ = text.push_str(UNREADABLE_VOLTAGE);
    }
    text
}

/// Format a fatal error for the status region
pub fn format_error(error: Error) -> StatusText {
    let mut text = StatusText::new();
    // Every code fits the buffer
    let _ = write!(text, "ERR {}", error.code());
    text
}
