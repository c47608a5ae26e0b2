#![forbid(unsafe_code)]

//! Shared host surfaces.
//!
//! Two single-threaded services are shared between a host and every list
//! controller it creates:
//!
//! - [`InputSurface`]: the document-wide listener registry plus the text
//!   selection. Controllers register global listeners here only while a drag
//!   is in progress. The registry records listener lifetimes; it does not
//!   dispatch. Hosts route every event through the controller's
//!   `handle_event`.
//! - [`RenderSurface`]: the registry of mounted list roots.
//!
//! Both are cheap `Rc` handles. Clones share state; neither is `Send`.
//!
//! # Invariants
//!
//! 1. A [`ListenerGuard`] deregisters its listener exactly once, when dropped
//!    or when [`ListenerGuard::release`] is called, whichever comes first.
//! 2. `listener_count(kind)` equals the number of live guards of that kind.
//! 3. A guard outliving its surface is inert; dropping it is a no-op.
//! 4. `unmount` on an already-detached root returns `false` and does not
//!    bump `detach_count`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::geometry::Rect;

/// Listener categories on the shared input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    SelectionChange,
}

impl ListenerKind {
    /// Every kind, in registration order used by drag sessions.
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::PointerMove,
        ListenerKind::PointerUp,
        ListenerKind::SelectionChange,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PointerMove => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::SelectionChange => "selection_change",
        }
    }
}

impl fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(u64);

/// A text selection range on the document (anchor/focus offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    #[must_use]
    pub const fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }
}

#[derive(Debug, Default)]
struct InputRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, ListenerKind)>,
    selection: Option<Selection>,
    registrations: u64,
    deregistrations: u64,
}

impl InputRegistry {
    fn deregister(&mut self, id: ListenerId) -> bool {
        let Some(index) = self.listeners.iter().position(|(lid, _)| *lid == id) else {
            return false;
        };
        self.listeners.remove(index);
        self.deregistrations += 1;
        true
    }
}

/// Document-wide listener registry and text selection.
#[derive(Debug, Clone, Default)]
pub struct InputSurface {
    inner: Rc<RefCell<InputRegistry>>,
}

impl InputSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener of `kind`. The returned guard owns the
    /// registration.
    #[must_use = "dropping the guard deregisters the listener immediately"]
    pub fn listen(&self, kind: ListenerKind) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, kind));
        registry.registrations += 1;
        drop(registry);

        #[cfg(feature = "tracing")]
        tracing::trace!(message = "input_surface.listen", kind = kind.as_str(), id = id.0);

        ListenerGuard {
            registry: Rc::downgrade(&self.inner),
            id,
            kind,
            active: true,
        }
    }

    /// Number of live listeners of `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k)| *k == kind)
            .count()
    }

    /// Number of live listeners of any kind.
    #[must_use]
    pub fn total_listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Lifetime totals: `(registrations, deregistrations)`.
    #[must_use]
    pub fn registration_totals(&self) -> (u64, u64) {
        let registry = self.inner.borrow();
        (registry.registrations, registry.deregistrations)
    }

    /// Set the document selection.
    pub fn select(&self, selection: Selection) {
        self.inner.borrow_mut().selection = Some(selection);
    }

    /// Current document selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.inner.borrow().selection
    }

    /// Empty the document selection. Returns `true` if a selection existed.
    pub fn clear_selection(&self) -> bool {
        self.inner.borrow_mut().selection.take().is_some()
    }
}

/// Scoped registration of one listener on an [`InputSurface`].
///
/// Dropping the guard deregisters the listener.
pub struct ListenerGuard {
    registry: Weak<RefCell<InputRegistry>>,
    id: ListenerId,
    kind: ListenerKind,
    active: bool,
}

impl ListenerGuard {
    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Whether this guard still holds its registration.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Deregister now. Returns `true` only on the call that actually
    /// removed the listener.
    pub fn release(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = registry.borrow_mut().deregister(self.id);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "input_surface.release",
            kind = self.kind.as_str(),
            id = self.id.0,
            removed
        );

        removed
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("active", &self.active)
            .finish()
    }
}

/// Opaque identity of a mounted root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RootId(u64);

#[derive(Debug, Default)]
struct RenderRegistry {
    next_id: u64,
    roots: Vec<(RootId, Rect)>,
    detaches: u64,
}

/// Registry of list roots attached to the host's rendering surface.
#[derive(Debug, Clone, Default)]
pub struct RenderSurface {
    inner: Rc<RefCell<RenderRegistry>>,
}

impl RenderSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new root occupying `bounds`.
    pub fn mount(&self, bounds: Rect) -> RootId {
        let mut registry = self.inner.borrow_mut();
        let id = RootId(registry.next_id);
        registry.next_id += 1;
        registry.roots.push((id, bounds));
        id
    }

    /// Detach `root`. Returns `false` if it was not attached.
    pub fn unmount(&self, root: RootId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let Some(index) = registry.roots.iter().position(|(id, _)| *id == root) else {
            return false;
        };
        registry.roots.remove(index);
        registry.detaches += 1;
        true
    }

    #[must_use]
    pub fn is_mounted(&self, root: RootId) -> bool {
        self.inner.borrow().roots.iter().any(|(id, _)| *id == root)
    }

    /// Bounds `root` was mounted with.
    #[must_use]
    pub fn root_bounds(&self, root: RootId) -> Option<Rect> {
        self.inner
            .borrow()
            .roots
            .iter()
            .find(|(id, _)| *id == root)
            .map(|(_, rect)| *rect)
    }

    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.inner.borrow().roots.len()
    }

    /// Number of successful detaches over the surface's lifetime.
    #[must_use]
    pub fn detach_count(&self) -> u64 {
        self.inner.borrow().detaches
    }
}

/// The pair of shared services a list controller is constructed against.
#[derive(Debug, Clone, Default)]
pub struct Surfaces {
    pub input: InputSurface,
    pub render: RenderSurface,
}

impl Surfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
