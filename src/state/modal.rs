//! Modal dialog state for the UI.

/// Overlay drawn above the page; captures input while open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// Informational alert with a non-interactive message.
    Alert {
        /// Text shown in the dialog.
        message: String,
    },
}

impl Modal {
    /// Whether an overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
