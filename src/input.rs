//! Input bindings
//!
//! Devices are polled by the platform layer. This module only turns "which
//! buttons are held" plus "which were just pressed" into a [`TickInput`].
//! Every action may be bound to several buttons and fires if any is active.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Physical buttons the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KbLeft,
    KbRight,
    KbUp,
    KbEscape,
    GpLeft,
    GpRight,
    GpButton0,
    GpStart,
}

/// Held-button query supplied by the platform
pub trait ButtonState {
    fn is_down(&self, button: Button) -> bool;
}

/// A plain set of held buttons
#[derive(Debug, Clone, Default)]
pub struct HeldButtons {
    held: HashSet<Button>,
}

impl HeldButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl FromIterator<Button> for HeldButtons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl ButtonState for HeldButtons {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}

/// Buttons bound to each action
#[derive(Debug, Clone)]
pub struct Bindings {
    pub turn_left: Vec<Button>,
    pub turn_right: Vec<Button>,
    pub thrust: Vec<Button>,
    pub quit: Vec<Button>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            turn_left: vec![Button::KbLeft, Button::GpLeft],
            turn_right: vec![Button::KbRight, Button::GpRight],
            thrust: vec![Button::KbUp, Button::GpButton0],
            quit: vec![Button::KbEscape, Button::GpStart],
        }
    }
}

impl Bindings {
    /// Resolve one frame of intents.
    ///
    /// Turn and thrust follow held state; quit only fires on a fresh press.
    pub fn resolve(&self, held: &impl ButtonState, pressed: &[Button]) -> TickInput {
        let any_down = |buttons: &[Button]| buttons.iter().any(|b| held.is_down(*b));
        TickInput {
            turn_left: any_down(&self.turn_left[..]),
            turn_right: any_down(&self.turn_right[..]),
            thrust: any_down(&self.thrust[..]),
            quit: pressed.iter().any(|b| self.quit.contains(b)),
        }
    }
}
