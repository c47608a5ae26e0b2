#![forbid(unsafe_code)]

//! Drag-and-reorder list controller.
//!
//! [`SortableList`] owns an ordered sequence of [`ListItem`]s laid out as a
//! vertical stack inside a root mounted on the shared [`RenderSurface`]. A
//! pointer-down on an item's grab handle lifts the item out of flow, leaves
//! a placeholder in its slot, and tracks pointer movement until release.
//!
//! # State Machine
//!
//! - `Idle`: no drag. Pointer-downs are hit-tested against item handles.
//! - `Dragging`: a [`DragSession`] exists. It holds the lifted item, the
//!   pointer offset captured on grab, the frozen item size, and the
//!   listener guards registered on the shared [`InputSurface`].
//!
//! On every pointer move the placeholder is compared with its immediate
//! neighbours only:
//!
//! - swap up if `prev.bottom + threshold > dragged.bottom`,
//! - otherwise swap down if `next.bottom - threshold < dragged.bottom`.
//!
//! At most one swap happens per move event; a fast pointer that crosses
//! several slots in one step catches up over the following events.
//!
//! # Invariants
//!
//! 1. Outside a drag, `order()` is exactly the display order and contains no
//!    duplicate ids.
//! 2. During a drag the flow holds exactly one placeholder and the lifted
//!    item is not in flow.
//! 3. Shared-surface listeners exist only while a session exists. Dropping
//!    the session (release, cancel, destroy, drop) deregisters them.
//! 4. After `destroy()` every event is ignored.
//!
//! # Failure Modes
//!
//! There are no error returns on the event path. Events that do not apply to
//! the current state produce [`ListOutcome::Ignored`]. Geometry queries on an
//! unmounted list return `None`.

use ahash::AHashMap;
use relist_core::event::{Event, KeyCode, PointerEvent, PointerEventKind};
use relist_core::geometry::{Position, Rect, Size};
use relist_core::surface::{
    InputSurface, ListenerGuard, ListenerKind, RenderSurface, RootId, Surfaces,
};

use crate::config::{ConfigError, SortableListConfig};
use crate::item::{Affordance, ItemId, ListItem};
use crate::order::ListOrder;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One entry of the flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Item(ItemId),
    Placeholder,
}

/// A flow slot with its computed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSlot {
    pub slot: Slot,
    pub rect: Rect,
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Direction the placeholder moved on a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    Up,
    Down,
}

/// What one [`SortableList::handle_event`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The event did not apply to the current state.
    Ignored,
    /// A drag started on the item at `index`.
    Grabbed { id: ItemId, index: usize },
    /// The lifted item followed the pointer; `placeholder` is the slot after
    /// any swap.
    Moved {
        id: ItemId,
        swap: Option<SwapDirection>,
        placeholder: usize,
    },
    /// The drag was released and the order committed.
    Dropped { id: ItemId, from: usize, to: usize },
    /// The drag was aborted and the item returned to `index`.
    Cancelled { id: ItemId, index: usize },
    /// The item at `index` was removed through its delete handle.
    Deleted { id: ItemId, index: usize },
    /// A selection change was suppressed during a drag.
    SelectionCleared { had_selection: bool },
}

impl ListOutcome {
    /// Whether the committed order differs from before the event.
    #[must_use]
    pub const fn order_changed(&self) -> bool {
        match self {
            Self::Dropped { from, to, .. } => *from != *to,
            Self::Deleted { .. } => true,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// Transient state of one grab → move → release interaction.
///
/// Created on grab and dropped on release or cancel. It owns the global
/// listener registrations, so no exit path can leave them attached.
#[derive(Debug)]
pub struct DragSession {
    item: ItemId,
    origin_index: usize,
    pointer_shift: Position,
    frozen: Size,
    position: Position,
    listeners: [ListenerGuard; 3],
}

impl DragSession {
    fn begin(
        input: &InputSurface,
        item: ItemId,
        origin_index: usize,
        pointer: Position,
        item_rect: Rect,
        offset_y: i32,
    ) -> Self {
        let mut session = Self {
            item,
            origin_index,
            pointer_shift: pointer.offset_from(item_rect.origin()),
            frozen: item_rect.size(),
            position: item_rect.origin(),
            listeners: ListenerKind::ALL.map(|kind| input.listen(kind)),
        };
        session.follow(pointer, offset_y);
        session
    }

    fn follow(&mut self, pointer: Position, offset_y: i32) {
        self.position = pointer.offset_from(self.pointer_shift).translate(0, offset_y);
    }

    /// The lifted item.
    #[must_use]
    pub const fn item(&self) -> ItemId {
        self.item
    }

    /// Index the item occupied when grabbed.
    #[must_use]
    pub const fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Pointer position relative to the item's top-left corner at grab time.
    #[must_use]
    pub const fn pointer_shift(&self) -> Position {
        self.pointer_shift
    }

    /// Size pinned on grab.
    #[must_use]
    pub const fn frozen_size(&self) -> Size {
        self.frozen
    }

    /// Current overlay rectangle of the lifted item.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_origin(self.position, self.frozen)
    }

    /// Whether every listener registration is still live.
    #[must_use]
    pub fn listening(&self) -> bool {
        self.listeners.iter().all(ListenerGuard::is_active)
    }
}

// ---------------------------------------------------------------------------
// SortableList
// ---------------------------------------------------------------------------

/// Reorderable list controller.
#[derive(Debug)]
pub struct SortableList {
    items: AHashMap<ItemId, ListItem>,
    flow: Vec<Slot>,
    bounds: Rect,
    config: SortableListConfig,
    input: InputSurface,
    render: RenderSurface,
    root: Option<RootId>,
    session: Option<DragSession>,
    destroyed: bool,
}

impl SortableList {
    /// Lay out `items` in the given order and mount the root at `bounds`.
    ///
    /// Only the origin and width of `bounds` are used; the list grows
    /// downward with its content. Duplicate ids keep their first occurrence.
    #[must_use]
    pub fn new(
        items: impl IntoIterator<Item = ListItem>,
        bounds: Rect,
        surfaces: &Surfaces,
    ) -> Self {
        Self::build(items, bounds, surfaces, SortableListConfig::default())
    }

    /// Like [`new`](Self::new) with a validated configuration.
    pub fn with_config(
        items: impl IntoIterator<Item = ListItem>,
        bounds: Rect,
        surfaces: &Surfaces,
        config: SortableListConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if bounds.width < 0 {
            return Err(ConfigError::InvalidRootWidth {
                width: bounds.width,
            });
        }
        Ok(Self::build(items, bounds, surfaces, config))
    }

    fn build(
        items: impl IntoIterator<Item = ListItem>,
        bounds: Rect,
        surfaces: &Surfaces,
        config: SortableListConfig,
    ) -> Self {
        let mut map = AHashMap::new();
        let mut flow = Vec::new();
        for item in items {
            let id = item.id();
            if map.contains_key(&id) {
                #[cfg(feature = "tracing")]
                tracing::warn!(message = "sortable_list.duplicate_item", id = id.get());
                continue;
            }
            flow.push(Slot::Item(id));
            map.insert(id, item);
        }

        let root = surfaces.render.mount(bounds);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.mount", items = flow.len());

        Self {
            items: map,
            flow,
            bounds,
            config,
            input: surfaces.input.clone(),
            render: surfaces.render.clone(),
            root: Some(root),
            session: None,
            destroyed: false,
        }
    }

    // --- queries -----------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &SortableListConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ListItem> {
        self.items.get(&id)
    }

    /// Item ids in display order.
    ///
    /// During a drag the lifted item is reported at the placeholder's slot,
    /// i.e. the order a release would commit right now.
    #[must_use]
    pub fn order(&self) -> Vec<ItemId> {
        self.flow
            .iter()
            .filter_map(|slot| match slot {
                Slot::Item(id) => Some(*id),
                Slot::Placeholder => self.session.as_ref().map(DragSession::item),
            })
            .collect()
    }

    /// Items in the same order as [`order`](Self::order).
    pub fn items(&self) -> impl Iterator<Item = &ListItem> + '_ {
        self.order()
            .into_iter()
            .filter_map(move |id| self.items.get(&id))
    }

    #[must_use]
    pub fn snapshot(&self) -> ListOrder {
        ListOrder::new(self.order())
    }

    /// Index of the placeholder in the flow, if dragging.
    #[must_use]
    pub fn placeholder_index(&self) -> Option<usize> {
        self.flow.iter().position(|slot| *slot == Slot::Placeholder)
    }

    /// Flow slots with their rectangles, top to bottom.
    #[must_use]
    pub fn layout(&self) -> Vec<LayoutSlot> {
        self.layout_in(self.bounds)
    }

    fn layout_in(&self, root: Rect) -> Vec<LayoutSlot> {
        let mut y = root.y;
        self.flow
            .iter()
            .map(|&slot| {
                let height = self.slot_height(slot);
                let rect = Rect::new(root.x, y, root.width, height);
                y = y.saturating_add(height);
                LayoutSlot { slot, rect }
            })
            .collect()
    }

    /// Root rectangle sized to the current content.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let height = self
            .flow
            .iter()
            .fold(0i32, |acc, &slot| acc.saturating_add(self.slot_height(slot)));
        Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, height)
    }

    /// Rendered rectangle of `id`: its flow slot, or the overlay position
    /// while it is being dragged. `None` when unknown or unmounted.
    #[must_use]
    pub fn item_bounds(&self, id: ItemId) -> Option<Rect> {
        let root = self.mounted_root()?;
        if let Some(session) = &self.session
            && session.item == id
        {
            return Some(session.rect());
        }
        self.layout_in(root)
            .into_iter()
            .find(|entry| entry.slot == Slot::Item(id))
            .map(|entry| entry.rect)
    }

    /// Whether `id` currently carries the dragging visual state.
    #[must_use]
    pub fn is_item_dragging(&self, id: ItemId) -> bool {
        self.session.as_ref().is_some_and(|s| s.item == id)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.root.is_some_and(|root| self.render.is_mounted(root))
    }

    /// Bounds the root was mounted with, while it is still attached.
    fn mounted_root(&self) -> Option<Rect> {
        self.root.and_then(|root| self.render.root_bounds(root))
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // --- programmatic mutation ---------------------------------------------

    /// Append an item at the end. Refused while dragging, after destroy, or
    /// when the id is already present.
    pub fn append(&mut self, item: ListItem) -> bool {
        if self.destroyed || self.session.is_some() || self.items.contains_key(&item.id()) {
            return false;
        }
        self.flow.push(Slot::Item(item.id()));
        self.items.insert(item.id(), item);
        true
    }

    /// Remove `id` as if its delete handle were pressed. Refused while
    /// dragging. Returns the index it occupied.
    pub fn remove_item(&mut self, id: ItemId) -> Option<usize> {
        if self.destroyed || self.session.is_some() {
            return None;
        }
        self.delete_item(id)
    }

    /// Reorder to match a saved order. Ids unknown to this list are skipped
    /// and items missing from `saved` keep their relative order after the
    /// restored ones. Refused while dragging.
    pub fn restore_order(&mut self, saved: &ListOrder) -> bool {
        if self.destroyed || self.session.is_some() {
            return false;
        }
        let mut flow: Vec<Slot> = Vec::with_capacity(self.flow.len());
        for id in saved.ids() {
            let slot = Slot::Item(*id);
            if self.items.contains_key(id) && !flow.contains(&slot) {
                flow.push(slot);
            }
        }
        for slot in &self.flow {
            if !flow.contains(slot) {
                flow.push(*slot);
            }
        }
        self.flow = flow;
        true
    }

    // --- teardown ----------------------------------------------------------

    /// Detach the root from the render surface. Returns `false` if it was
    /// already detached.
    ///
    /// A drag in progress survives: its listeners stay registered and a
    /// later pointer-up still commits the order. [`destroy`](Self::destroy)
    /// aborts the drag instead.
    pub fn remove(&mut self) -> bool {
        let Some(root) = self.root.take() else {
            return false;
        };
        let detached = self.render.unmount(root);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.unmount", detached);

        detached
    }

    /// Abort any drag (releasing its listeners), detach the root, and stop
    /// reacting to events. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if self.session.is_some() {
            self.cancel_drag();
        }
        self.remove();
        self.destroyed = true;
    }

    // --- events ------------------------------------------------------------

    /// Feed one host event to the controller.
    pub fn handle_event(&mut self, event: &Event) -> ListOutcome {
        if self.destroyed {
            return ListOutcome::Ignored;
        }
        match event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::SelectionChange => self.on_selection_change(),
            Event::Key(key) if key.code == KeyCode::Escape && self.config.cancel_on_escape => {
                self.cancel_drag()
            }
            Event::Focus(false) if self.config.cancel_on_focus_loss => self.cancel_drag(),
            _ => ListOutcome::Ignored,
        }
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent) -> ListOutcome {
        match pointer.kind {
            PointerEventKind::Down(button)
                if button == self.config.activation_button && self.session.is_none() =>
            {
                self.on_pointer_down(pointer.position())
            }
            PointerEventKind::Down(_) => ListOutcome::Ignored,
            PointerEventKind::Move => self.on_pointer_move(pointer.position()),
            PointerEventKind::Up(_) => self.on_pointer_up(),
        }
    }

    fn on_pointer_down(&mut self, pos: Position) -> ListOutcome {
        let Some(root) = self.mounted_root() else {
            return ListOutcome::Ignored;
        };
        let Some((index, LayoutSlot { slot, rect })) = self
            .layout_in(root)
            .into_iter()
            .enumerate()
            .find(|(_, entry)| entry.rect.contains(pos))
        else {
            return ListOutcome::Ignored;
        };
        let Slot::Item(id) = slot else {
            return ListOutcome::Ignored;
        };
        let affordance = self
            .items
            .get(&id)
            .and_then(|item| item.affordance_at(rect, pos));

        match affordance {
            Some(Affordance::Grab) => self.grab(id, index, pos, rect),
            Some(Affordance::Delete) => match self.delete_item(id) {
                Some(index) => ListOutcome::Deleted { id, index },
                None => ListOutcome::Ignored,
            },
            None => ListOutcome::Ignored,
        }
    }

    fn grab(&mut self, id: ItemId, index: usize, pointer: Position, rect: Rect) -> ListOutcome {
        let session = DragSession::begin(
            &self.input,
            id,
            index,
            pointer,
            rect,
            self.config.drag_offset_y,
        );
        self.flow[index] = Slot::Placeholder;
        self.session = Some(session);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.grab", id = id.get(), index);

        ListOutcome::Grabbed { id, index }
    }

    fn on_pointer_move(&mut self, pointer: Position) -> ListOutcome {
        let offset_y = self.config.drag_offset_y;
        let Some(session) = self.session.as_mut() else {
            return ListOutcome::Ignored;
        };
        session.follow(pointer, offset_y);
        let id = session.item;
        let dragged_bottom = session.rect().bottom();

        let Some(index) = self.placeholder_index() else {
            return ListOutcome::Ignored;
        };
        let swap = self.proximity_swap(index, dragged_bottom);
        let placeholder = match swap {
            Some(SwapDirection::Up) => index - 1,
            Some(SwapDirection::Down) => index + 1,
            None => index,
        };

        #[cfg(feature = "tracing")]
        if swap.is_some() {
            tracing::debug!(
                message = "sortable_list.swap",
                id = id.get(),
                from = index,
                to = placeholder
            );
        }

        ListOutcome::Moved {
            id,
            swap,
            placeholder,
        }
    }

    /// Single-step swap of the placeholder at `index` against its immediate
    /// neighbours. Both comparisons are strict.
    fn proximity_swap(&mut self, index: usize, dragged_bottom: i32) -> Option<SwapDirection> {
        let layout = self.layout();
        let threshold = self.config.proximity_threshold;

        if index > 0
            && layout[index - 1].rect.bottom().saturating_add(threshold) > dragged_bottom
        {
            self.flow.swap(index - 1, index);
            return Some(SwapDirection::Up);
        }
        if let Some(next) = layout.get(index + 1)
            && next.rect.bottom().saturating_sub(threshold) < dragged_bottom
        {
            self.flow.swap(index, index + 1);
            return Some(SwapDirection::Down);
        }
        None
    }

    fn on_pointer_up(&mut self) -> ListOutcome {
        let Some(session) = self.session.take() else {
            return ListOutcome::Ignored;
        };
        let id = session.item;
        let from = session.origin_index;
        let to = self.replace_placeholder(id);
        drop(session);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.drop", id = id.get(), from, to);

        ListOutcome::Dropped { id, from, to }
    }

    fn cancel_drag(&mut self) -> ListOutcome {
        let Some(session) = self.session.take() else {
            return ListOutcome::Ignored;
        };
        if let Some(index) = self.placeholder_index() {
            self.flow.remove(index);
        }
        let index = session.origin_index.min(self.flow.len());
        self.flow.insert(index, Slot::Item(session.item));
        let id = session.item;
        drop(session);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.cancel", id = id.get(), index);

        ListOutcome::Cancelled { id, index }
    }

    fn on_selection_change(&mut self) -> ListOutcome {
        if self.session.is_none() {
            return ListOutcome::Ignored;
        }
        ListOutcome::SelectionCleared {
            had_selection: self.input.clear_selection(),
        }
    }

    // --- internals ---------------------------------------------------------

    fn slot_height(&self, slot: Slot) -> i32 {
        match slot {
            Slot::Item(id) => self.items.get(&id).map_or(0, ListItem::height),
            Slot::Placeholder => self.session.as_ref().map_or(0, |s| s.frozen.height),
        }
    }

    fn replace_placeholder(&mut self, id: ItemId) -> usize {
        match self.placeholder_index() {
            Some(index) => {
                self.flow[index] = Slot::Item(id);
                index
            }
            None => {
                self.flow.push(Slot::Item(id));
                self.flow.len() - 1
            }
        }
    }

    fn delete_item(&mut self, id: ItemId) -> Option<usize> {
        let index = self.flow.iter().position(|slot| *slot == Slot::Item(id))?;
        self.flow.remove(index);
        self.items.remove(&id);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sortable_list.delete", id = id.get(), index);

        Some(index)
    }
}

impl Drop for SortableList {
    fn drop(&mut self) {
        self.destroy();
    }
}
