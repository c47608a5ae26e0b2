#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and the shared host surfaces.
//!
//! # Role in relist
//! `relist-core` is the host boundary. It owns the normalized event types a
//! host feeds to list controllers, plus the two shared services those
//! controllers consume: the [`surface::InputSurface`] (document-wide
//! listeners and text selection) and the [`surface::RenderSurface`] (mounted
//! list roots).
//!
//! # How it fits in the system
//! `relist-widgets` builds the reorderable list controller on top of these
//! types. Hosts (a browser bridge, a terminal runtime, the replay harness)
//! translate their native input into [`event::Event`] values.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod surface;
