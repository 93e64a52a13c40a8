use egui::{Pos2, PointerButton};

mod controller;
pub use controller::{InputController, InputState};

/// Pointer input in screen coordinates, already reduced to what drawing needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed or a touch started
    PointerDown {
        /// `None` when the platform reported no position
        position: Option<Pos2>,
    },
    /// Pointer moved (with or without buttons pressed)
    PointerMove {
        position: Option<Pos2>,
    },
    /// Primary button released or a touch ended
    PointerUp,
    /// Pointer left the window
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { position } | InputEvent::PointerMove { position } => *position,
            InputEvent::PointerUp | InputEvent::PointerLeave => None,
        }
    }
}

/// Convert one frame's raw egui events into our InputEvents, in order.
///
/// Touches arrive as emulated primary-pointer events from both the web and
/// winit backends, so `egui::Event::Touch` is not handled separately.
pub fn translate_events(events: &[egui::Event]) -> Vec<InputEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove { position: Some(*pos) }),
            egui::Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                InputEvent::PointerDown { position: Some(*pos) }
            } else {
                InputEvent::PointerUp
            }),
            egui::Event::PointerGone => Some(InputEvent::PointerLeave),
            _ => None,
        })
        .collect()
}
