use crate::command::Command;
use crate::config::InputConfig;
use crate::surface::SurfaceMetrics;

use super::InputEvent;

/// Pointer interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Drawing {
        /// Move events seen since the stroke started
        moves: u32,
    },
}

/// Turns pointer events into session commands
#[derive(Debug)]
pub struct InputController {
    state: InputState,
    config: InputConfig,
    attached: bool,
}

impl InputController {
    pub fn new(config: InputConfig) -> Self {
        Self {
            state: InputState::Idle,
            config,
            attached: true,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Drop any press in progress without emitting commands
    pub fn reset(&mut self) {
        self.state = InputState::Idle;
    }

    /// Stop listening. Every later event is ignored.
    pub fn detach(&mut self) {
        self.attached = false;
        self.state = InputState::Idle;
    }

    pub fn handle(&mut self, event: &InputEvent, surface: &SurfaceMetrics) -> Vec<Command> {
        if !self.attached {
            return Vec::new();
        }

        match (self.state, *event) {
            (InputState::Idle, InputEvent::PointerDown { position }) => {
                if position.is_some_and(|pos| !surface.contains(pos)) {
                    return Vec::new();
                }
                self.start(surface.to_local(position))
            }
            (InputState::Drawing { .. }, InputEvent::PointerDown { position }) => {
                // A press we never saw released: close that stroke first
                let mut commands = vec![Command::EndStroke];
                commands.extend(self.start(surface.to_local(position)));
                commands
            }
            (InputState::Drawing { moves }, InputEvent::PointerMove { position }) => {
                if position.is_some_and(|pos| !surface.contains(pos)) {
                    return self.finish();
                }
                let at = surface.to_local(position);
                let moves = moves + 1;
                self.state = InputState::Drawing { moves };

                let mut commands = vec![Command::ExtendStroke(at)];
                if moves % self.config.move_emit_stride.max(1) == 0 {
                    commands.push(Command::Emit {
                        at,
                        count: self.config.move_burst,
                        speed: self.config.move_speed,
                    });
                }
                commands
            }
            (InputState::Drawing { .. }, InputEvent::PointerUp | InputEvent::PointerLeave) => self.finish(),
            (InputState::Idle, _) => Vec::new(),
        }
    }

    fn start(&mut self, at: egui::Pos2) -> Vec<Command> {
        self.state = InputState::Drawing { moves: 0 };
        vec![
            Command::BeginStroke(at),
            Command::Emit {
                at,
                count: self.config.start_burst,
                speed: self.config.start_speed,
            },
        ]
    }

    fn finish(&mut self) -> Vec<Command> {
        self.state = InputState::Idle;
        vec![Command::EndStroke]
    }
}
