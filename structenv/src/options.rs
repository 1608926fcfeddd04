/// Parser configuration.
///
/// Per-field behaviour is decided by the shape of the target struct, so the
/// only knob here is how hard to fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Stop at the first malformed or out-of-range value and return its
    /// error.
    ///
    /// When unset, such fields are set to their zero value, the problem is
    /// traced, and parsing continues. Fields filled before the failing one
    /// keep their new values either way.
    pub errors_are_critical: bool,
}

impl Options {
    pub fn critical() -> Self {
        Self {
            errors_are_critical: true,
        }
    }
}
