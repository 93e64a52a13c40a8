use egui::Pos2;

/// Mutations of a [`crate::CanvasSession`]. The input controller produces
/// these and only the session applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a stroke at a surface-local point
    BeginStroke(Pos2),
    /// Append a surface-local point to the active stroke
    ExtendStroke(Pos2),
    /// Commit the active stroke
    EndStroke,
    /// Emit a particle burst
    Emit { at: Pos2, count: usize, speed: f32 },
    /// Drop all strokes and particles
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginStroke(_) => "BeginStroke",
            Command::ExtendStroke(_) => "ExtendStroke",
            Command::EndStroke => "EndStroke",
            Command::Emit { .. } => "Emit",
            Command::Clear => "Clear",
        }
    }
}
