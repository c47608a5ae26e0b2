#![forbid(unsafe_code)]

//! List items and their affordance regions.

use std::fmt;

use relist_core::geometry::{Position, Rect};

/// Stable identity of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interactive region of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Pressing here starts a drag.
    Grab,
    /// Pressing here removes the item.
    Delete,
}

/// An opaque renderable row.
///
/// The controller never looks at the label; it only moves the item around
/// and hit-tests its handles. Handle rects are item-local (origin at the
/// item's top-left corner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: ItemId,
    height: i32,
    grab_handle: Option<Rect>,
    delete_handle: Option<Rect>,
    label: String,
}

impl ListItem {
    /// Create an item with the given natural height and no handles.
    #[must_use]
    pub fn new(id: u64, height: i32) -> Self {
        Self {
            id: ItemId(id),
            height: height.max(0),
            grab_handle: None,
            delete_handle: None,
            label: String::new(),
        }
    }

    /// Set the grab handle region.
    #[must_use]
    pub fn with_grab_handle(mut self, region: Rect) -> Self {
        self.grab_handle = Some(region);
        self
    }

    /// Set the delete handle region.
    #[must_use]
    pub fn with_delete_handle(mut self, region: Rect) -> Self {
        self.delete_handle = Some(region);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn grab_handle(&self) -> Option<Rect> {
        self.grab_handle
    }

    #[must_use]
    pub const fn delete_handle(&self) -> Option<Rect> {
        self.delete_handle
    }

    /// Which affordance, if any, lies under surface point `pos` when the
    /// item is laid out at `placed`.
    ///
    /// Grab wins when a host supplies overlapping regions.
    #[must_use]
    pub fn affordance_at(&self, placed: Rect, pos: Position) -> Option<Affordance> {
        let hit =
            |handle: Option<Rect>| handle.is_some_and(|r| placed.offset_local(r).contains(pos));
        if hit(self.grab_handle) {
            Some(Affordance::Grab)
        } else if hit(self.delete_handle) {
            Some(Affordance::Delete)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT_ORIGIN: Rect = Rect::new(0, 0, 40, 20);

    fn row() -> ListItem {
        ListItem::new(7, 20)
            .with_grab_handle(Rect::new(0, 0, 4, 20))
            .with_delete_handle(Rect::new(36, 0, 4, 20))
            .with_label("seven")
    }

    #[test]
    fn hit_test_handles() {
        let item = row();
        assert_eq!(item.affordance_at(AT_ORIGIN, Position::new(1, 5)), Some(Affordance::Grab));
        assert_eq!(
            item.affordance_at(AT_ORIGIN, Position::new(37, 19)),
            Some(Affordance::Delete)
        );
        assert_eq!(item.affordance_at(AT_ORIGIN, Position::new(20, 5)), None);
        assert_eq!(item.affordance_at(AT_ORIGIN, Position::new(1, 20)), None);
    }

    #[test]
    fn overlapping_handles_prefer_grab() {
        let item = ListItem::new(1, 10)
            .with_grab_handle(Rect::new(0, 0, 10, 10))
            .with_delete_handle(Rect::new(5, 0, 10, 10));
        assert_eq!(item.affordance_at(AT_ORIGIN, Position::new(6, 2)), Some(Affordance::Grab));
        assert_eq!(
            item.affordance_at(AT_ORIGIN, Position::new(12, 2)),
            Some(Affordance::Delete)
        );
    }

    #[test]
    fn item_without_handles_is_inert() {
        let item = ListItem::new(3, 10);
        assert_eq!(item.affordance_at(AT_ORIGIN, Position::new(0, 0)), None);
        assert_eq!(item.label(), "");
    }

    #[test]
    fn hit_test_follows_placement() {
        let item = row();
        let placed = Rect::new(10, 60, 40, 20);
        assert_eq!(
            item.affordance_at(placed, Position::new(11, 61)),
            Some(Affordance::Grab)
        );
        assert_eq!(
            item.affordance_at(placed, Position::new(47, 79)),
            Some(Affordance::Delete)
        );
        assert_eq!(item.affordance_at(placed, Position::new(1, 5)), None);
    }

    #[test]
    fn negative_height_clamps() {
        assert_eq!(ListItem::new(1, -5).height(), 0);
    }

    #[test]
    fn id_display() {
        assert_eq!(ItemId::new(42).to_string(), "#42");
        assert_eq!(row().id().get(), 7);
    }
}
