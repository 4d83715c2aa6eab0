//! Focus signals.

/// How a widget received focus.
///
/// Widgets use the origin to decide whether focus should make them look
/// "active": anything except keyboard navigation does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    /// Focus came from a mouse press.
    Mouse,
    /// Focus came from a touch.
    Touch,
    /// Focus came from keyboard navigation.
    Keyboard,
    /// Focus was set programmatically.
    #[default]
    Program,
}

impl FocusOrigin {
    /// Whether this origin was keyboard navigation.
    pub fn is_keyboard(self) -> bool {
        self == Self::Keyboard
    }
}
