use crate::canvas::{DrawingMode, PointerEvent};

/// A user action the designer can apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignerCommand {
    SelectMode(DrawingMode),
    Pointer(PointerEvent),
    /// Finish the pending path; only honored in path-draw mode.
    CommitPath,
    GeneratePattern,
    ToggleSpiral,
}

impl DesignerCommand {
    /// Maps a key name to its command: `f` free draw, `p` path draw, `Enter`
    /// commit.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "f" | "F" => Some(Self::SelectMode(DrawingMode::FreeDraw)),
            "p" | "P" => Some(Self::SelectMode(DrawingMode::PathDraw)),
            "Enter" => Some(Self::CommitPath),
            _ => None,
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectMode(DrawingMode::FreeDraw) => "Free Draw",
            Self::SelectMode(DrawingMode::PathDraw) => "Path Draw",
            Self::Pointer(_) => "Pointer",
            Self::CommitPath => "Add Curve",
            Self::GeneratePattern => "Generate Pattern",
            Self::ToggleSpiral => "Toggle Spiral",
        }
    }
}
