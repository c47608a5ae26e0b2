#![forbid(unsafe_code)]

//! JSON trace format.
//!
//! ```json
//! {
//!   "width": 100,
//!   "threshold": 5,
//!   "items": [
//!     { "id": 1, "height": 20, "label": "Alpha",
//!       "grab": [0, 0, 10, 20], "delete": [90, 0, 10, 20] }
//!   ],
//!   "events": [
//!     { "down": { "x": 5, "y": 10 } },
//!     { "move": { "x": 5, "y": 36 } },
//!     "selection_change",
//!     { "up": { "x": 5, "y": 36 } }
//!   ]
//! }
//! ```

use relist_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use relist_core::geometry::Rect;
use relist_widgets::ListItem;
use serde::{Deserialize, Serialize};

/// Default root width when a trace omits it.
pub const DEFAULT_WIDTH: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFile {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default)]
    pub threshold: Option<i32>,
    pub items: Vec<TraceItem>,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

/// One list row. Handle rects are `[x, y, width, height]`, item-local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceItem {
    pub id: u64,
    pub height: i32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub grab: Option<[i32; 4]>,
    #[serde(default)]
    pub delete: Option<[i32; 4]>,
}

impl TraceItem {
    #[must_use]
    pub fn to_list_item(&self) -> ListItem {
        let mut item = ListItem::new(self.id, self.height).with_label(self.label.clone());
        if let Some([x, y, w, h]) = self.grab {
            item = item.with_grab_handle(Rect::new(x, y, w, h));
        }
        if let Some([x, y, w, h]) = self.delete {
            item = item.with_delete_handle(Rect::new(x, y, w, h));
        }
        item
    }
}

/// Scripted host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    Escape,
    SelectionChange,
    Blur,
}

impl TraceEvent {
    #[must_use]
    pub fn to_event(self) -> Event {
        match self {
            Self::Down { x, y } => Event::Pointer(PointerEvent::down(x, y)),
            Self::Move { x, y } => Event::Pointer(PointerEvent::moved(x, y)),
            Self::Up { x, y } => Event::Pointer(PointerEvent::up(x, y)),
            Self::Escape => Event::Key(KeyEvent::new(KeyCode::Escape)),
            Self::SelectionChange => Event::SelectionChange,
            Self::Blur => Event::Focus(false),
        }
    }
}
