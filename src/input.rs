//! Selector buttons
//!
//! The selector samples four buttons every tick and reacts to rising edges
//! only, so holding a button down activates its mode once.

use core::cell::Cell;

use critical_section::Mutex;

/// One of the four selector keys, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
    C,
    D,
}

impl Button {
    /// All buttons, highest priority first
    pub const ALL: [Button; 4] = [Button::A, Button::B, Button::C, Button::D];

    /// Mode index selected by this button
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn mask(self) -> u8 {
        1 << self.index()
    }
}

/// Source of button levels
pub trait Buttons {
    /// Sample the current state of a button
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Rising edge detector over the four buttons
#[derive(Debug, Clone, Default)]
pub struct ButtonEdges {
    previous: [bool; 4],
}

impl ButtonEdges {
    pub const fn new() -> Self {
        Self {
            previous: [false; 4],
        }
    }

    /// Sample every button and return the highest-priority new press
    ///
    /// All four buttons are sampled on each call so that a lower priority
    /// press, shadowed in this tick, is not reported again later.
    pub fn poll(&mut self, buttons: &mut impl Buttons) -> Option<Button> {
        let mut pressed = None;
        for button in Button::ALL {
            let level = buttons.is_pressed(button);
            let previous = core::mem::replace(&mut self.previous[button.index()], level);
            if level && !previous && pressed.is_none() {
                pressed = Some(button);
            }
        }
        pressed
    }
}

/// Interrupt-safe latch of button presses
///
/// A GPIO interrupt handler calls [`ButtonLatch::latch`]; the selector reads
/// and clears each flag when it samples the buttons, which yields a single
/// high sample per press.
pub struct ButtonLatch {
    pressed: Mutex<Cell<u8>>,
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            pressed: Mutex::new(Cell::new(0)),
        }
    }

    /// Record a press of `button`
    pub fn latch(&self, button: Button) {
        critical_section::with(|cs| {
            let pressed = self.pressed.borrow(cs);
            pressed.set(pressed.get() | button.mask());
        });
    }

    /// Return and clear the press flag of `button`
    pub fn take(&self, button: Button) -> bool {
        critical_section::with(|cs| {
            let pressed = self.pressed.borrow(cs);
            let value = pressed.get();
            pressed.set(value & !button.mask());
            value & button.mask() != 0
        })
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Buttons for &ButtonLatch {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.take(button)
    }
}
