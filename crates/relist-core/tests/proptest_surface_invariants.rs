//! Property-based invariant tests for the shared surfaces.
//!
//! 1. listener_count(kind) equals the number of live guards of that kind.
//! 2. Every registration is matched by exactly one deregistration once all
//!    guards are gone, however they were released.
//! 3. unmount succeeds once per mounted root.

use proptest::prelude::*;
use relist_core::geometry::Rect;
use relist_core::surface::{InputSurface, ListenerGuard, ListenerKind, RenderSurface};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Listen(usize),
    Release(usize),
    Drop(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3).prop_map(Op::Listen),
        any::<usize>().prop_map(Op::Release),
        any::<usize>().prop_map(Op::Drop),
    ]
}

fn live_count(guards: &[ListenerGuard], kind: ListenerKind) -> usize {
    guards
        .iter()
        .filter(|g| g.kind() == kind && g.is_active())
        .count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Listener accounting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn listener_counts_track_live_guards(ops in proptest::collection::vec(op(), 0..80)) {
        let surface = InputSurface::new();
        let mut guards: Vec<ListenerGuard> = Vec::new();

        for op in ops {
            match op {
                Op::Listen(k) => guards.push(surface.listen(ListenerKind::ALL[k])),
                Op::Release(i) if !guards.is_empty() => {
                    let len = guards.len();
                    guards[i % len].release();
                }
                Op::Drop(i) if !guards.is_empty() => {
                    let len = guards.len();
                    drop(guards.swap_remove(i % len));
                }
                _ => {}
            }
            for kind in ListenerKind::ALL {
                prop_assert_eq!(surface.listener_count(kind), live_count(&guards, kind));
            }
        }

        guards.clear();
        prop_assert_eq!(surface.total_listeners(), 0);
        let (registered, deregistered) = surface.registration_totals();
        prop_assert_eq!(registered, deregistered);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Root detach accounting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unmount_succeeds_once_per_root(
        roots in 1usize..10,
        attempts in proptest::collection::vec(any::<usize>(), 0..40),
    ) {
        let surface = RenderSurface::new();
        let ids: Vec<_> = (0..roots)
            .map(|i| surface.mount(Rect::new(0, i as i32 * 10, 10, 10)))
            .collect();

        let mut detached = std::collections::HashSet::new();
        for pick in attempts {
            let id = ids[pick % ids.len()];
            let first = detached.insert(pick % ids.len());
            prop_assert_eq!(surface.unmount(id), first);
        }
        prop_assert_eq!(surface.detach_count(), detached.len() as u64);
        prop_assert_eq!(surface.mounted_count(), roots - detached.len());
    }
}
