//! Pointer input for hover and click detection.
//!
//! The host writes the cursor position and click edges; entities and the
//! renderer only read them. Positions are raw viewport pixels.

use verdant_core::Vec2;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button; the one that activates entities.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl MouseButton {
    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
        }
    }
}

/// Pointer state seen by one frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: Vec2,
    /// Buttons clicked since the frame began.
    clicked: [bool; 3],
}

impl InputState {
    /// Creates an input state with the cursor at the viewport origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the click edges. The cursor stays where it is.
    pub fn begin_frame(&mut self) {
        self.clicked = [false; 3];
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    /// Cursor position, in viewport pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Records a click of `button` for the current frame.
    pub fn record_click(&mut self, button: MouseButton) {
        self.clicked[button.index()] = true;
    }

    /// Returns true if `button` was clicked this frame.
    #[must_use]
    pub fn clicked(&self, button: MouseButton) -> bool {
        self.clicked[button.index()]
    }
}
