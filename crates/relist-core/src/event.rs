#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event types a host delivers to relist
//! controllers. All events derive `Clone`, `PartialEq`, and `Eq` for use in
//! tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are surface coordinates and may be negative.
//! - `SelectionChange` carries no payload; listeners inspect the
//!   [`InputSurface`](crate::surface::InputSurface) selection directly.
//! - Only the keys a list reacts to are modelled; hosts drop the rest.

use crate::geometry::Position;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A pointer (mouse, pen, touch) event.
    Pointer(PointerEvent),

    /// A keyboard event.
    Key(KeyEvent),

    /// The document text selection changed.
    SelectionChange,

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Horizontal surface coordinate.
    pub x: i32,

    /// Vertical surface coordinate.
    pub y: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Primary-button press at `(x, y)`.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    /// Pointer movement to `(x, y)`.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Primary-button release at `(x, y)`.
    #[must_use]
    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up(PointerButton::Primary), x, y)
    }

    /// Get the pointer position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Event::Pointer(event)
    }
}

/// Types of pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Pointer moved, with or without a button held.
    Move,

    /// Button released.
    Up(PointerButton),
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary button (left mouse, pen tip, touch contact).
    #[default]
    Primary,

    /// Secondary button (right mouse).
    Secondary,

    /// Auxiliary button (middle mouse).
    Auxiliary,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

/// Key codes relevant to list interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key.
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_event_position() {
        let event = PointerEvent::down(10, -20);
        assert_eq!(event.position(), Position::new(10, -20));
        assert_eq!(event.kind, PointerEventKind::Down(PointerButton::Primary));
    }

    #[test]
    fn conversions_into_event() {
        let pointer: Event = PointerEvent::up(1, 2).into();
        assert!(matches!(pointer, Event::Pointer(p) if p.kind == PointerEventKind::Up(PointerButton::Primary)));
        let key: Event = KeyEvent::new(KeyCode::Escape).into();
        assert_eq!(key, Event::Key(KeyEvent::new(KeyCode::Escape)));
    }

    #[test]
    fn defaults() {
        assert_eq!(PointerButton::default(), PointerButton::Primary);
    }
}
