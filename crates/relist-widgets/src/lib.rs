#![forbid(unsafe_code)]

//! Widgets for relist.
//!
//! The centrepiece is [`sortable_list::SortableList`], a drag-and-reorder
//! controller over opaque [`item::ListItem`]s. It consumes the shared
//! surfaces from `relist-core` and reports each event's effect as a
//! [`sortable_list::ListOutcome`] so hosts can sync the committed order.

pub mod config;
pub mod item;
pub mod order;
pub mod sortable_list;

pub use config::{ConfigError, DEFAULT_PROXIMITY_THRESHOLD, SortableListConfig};
pub use item::{Affordance, ItemId, ListItem};
pub use order::ListOrder;
pub use sortable_list::{
    DragSession, DragState, LayoutSlot, ListOutcome, Slot, SortableList, SwapDirection,
};
