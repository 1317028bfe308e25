//! Cooperative selector loop
//!
//! One tick polls the buttons, switches mode on a new press, advances the
//! active mode by one frame and refreshes the status line when it is due.
//! Everything runs on a single thread; the only suspension point is the
//! fixed sleep between ticks.
//!
//! # Usage
//!
//! ```ignore
//! let mut selector = Selector::new(surfaces, buttons, battery, screen, modes, config)?;
//! let error = selector.run().unwrap_err();
//! ```

use core::convert::Infallible;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    Error,
    config::SelectorConfig,
    display::StatusDisplay,
    input::{Button, ButtonEdges, Buttons},
    mode::ModeSequence,
    surface::SurfaceSet,
    telemetry::{Telemetry, format_error, format_voltage},
};

/// Loop state that outlives a single tick
#[derive(Debug, Clone, Default)]
pub struct SchedulerState {
    last_refresh: Option<Instant>,
    edges: ButtonEdges,
}

impl SchedulerState {
    pub const fn new() -> Self {
        Self {
            last_refresh: None,
            edges: ButtonEdges::new(),
        }
    }

    pub const fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// Due on the first tick, then once more than `interval` has elapsed
    pub fn refresh_due(&self, now: Instant, interval: Duration) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => now.checked_duration_since(last).is_some_and(|elapsed| elapsed > interval),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Newly pressed button, if any
    pub pressed: Option<Button>,
    /// The press switched to another mode
    pub switched: bool,
    /// The active mode drew a frame
    pub drawn: bool,
    /// The status line was refreshed
    pub refreshed: bool,
}

pub struct Selector<S, B, T, D> {
    surfaces: S,
    buttons: B,
    telemetry: T,
    display: D,
    modes: ModeSequence,
    state: SchedulerState,
    config: SelectorConfig,
}

impl<S, B, T, D> Selector<S, B, T, D>
where
    S: SurfaceSet,
    B: Buttons,
    T: Telemetry,
    D: StatusDisplay,
{
    /// Create a selector after validating the modes against the surfaces
    ///
    /// No surface or display is touched if validation fails.
    pub fn new(
        surfaces: S,
        buttons: B,
        telemetry: T,
        display: D,
        modes: ModeSequence,
        config: SelectorConfig,
    ) -> Result<Self, Error> {
        modes.validate(&surfaces)?;
        Ok(Self {
            surfaces,
            buttons,
            telemetry,
            display,
            modes,
            state: SchedulerState::new(),
            config,
        })
    }

    /// Render the static part of the status screen
    pub fn start(&mut self) -> Result<(), Error> {
        self.config.layout.render(&mut self.display)
    }

    /// Run one iteration of the loop at `now`
    pub fn tick(&mut self, now: Instant) -> Result<TickReport, Error> {
        let mut report = TickReport::default();

        // Input is resolved before advancing so a press renders in the same tick
        if let Some(button) = self.state.edges.poll(&mut self.buttons) {
            report.pressed = Some(button);
            let index = button.index();
            if index < self.modes.len() {
                let previous = self.modes.active();
                self.modes.activate(index, &mut self.surfaces)?;
                report.switched = previous != Some(index);
            }
        }

        report.drawn = self.modes.advance(now, &mut self.surfaces)?;

        if self.state.refresh_due(now, self.config.refresh_interval) {
            self.refresh_status()?;
            self.state.last_refresh = Some(now);
            report.refreshed = true;
        }

        Ok(report)
    }

    /// Run until an error occurs, reporting it on the status display
    pub fn run(&mut self) -> Result<Infallible, Error> {
        self.run_loop().inspect_err(|error| self.report(*error))
    }

    fn run_loop(&mut self) -> Result<Infallible, Error> {
        self.start()?;
        loop {
            self.tick(Instant::now())?;
            embassy_time::block_for(self.config.tick_interval);
        }
    }

    fn refresh_status(&mut self) -> Result<(), Error> {
        let volts = self.telemetry.read().map_err(|_| Error::Telemetry)?;
        #[cfg(feature = "esp32-log")]
        println!("[Selector.refresh_status] telemetry reading {}", volts);
        self.config
            .layout
            .show_status(&mut self.display, &format_voltage(volts))
    }

    /// Best effort: the display itself may be the failing part
    fn report(&mut self, error: Error) {
        #[cfg(feature = "esp32-log")]
        println!("[Selector.report] fatal error: {}", error);
        let _ = self
            .config
            .layout
            .show_status(&mut self.display, &format_error(error));
    }

    pub fn modes(&self) -> &ModeSequence {
        &self.modes
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }
}
