//! Keyboard input classification.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// The keys the page chrome reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Closes the menu and the logo zoom.
    Escape,
    /// Activates a focused logo.
    Enter,
    /// Activates a focused logo.
    Space,
    /// Anything else, as reported by `KeyboardEvent.key`.
    Other(String),
}

impl Key {
    /// Classify a `KeyboardEvent.key` value. Older engines report `"Esc"`.
    #[must_use]
    pub fn from_event_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this key activates a focused control.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
