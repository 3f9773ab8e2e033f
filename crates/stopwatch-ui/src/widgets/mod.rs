pub mod button;
pub mod toggle;

/// Visual intent of a control, left to the renderer to map onto colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tone {
    /// Go (conventionally green).
    Start,
    /// Halt (conventionally red).
    Stop,
    /// Destructive but available (conventionally orange).
    Reset,
    /// Present but not pressable (conventionally gray).
    Disabled,
}

/// Everything a renderer needs to draw one control.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ControlView {
    pub label: String,
    pub enabled: bool,
    pub tone: Tone,
}
