#![no_main]

use libfuzzer_sys::fuzz_target;
use relist_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use relist_core::geometry::Rect;
use relist_core::surface::Surfaces;
use relist_widgets::{DragState, ListItem, SortableList};

fuzz_target!(|data: &[u8]| {
    // First byte: item count (0..16). Next `count` bytes: heights (1..64).
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 16);
    if rest.len() < count {
        return;
    }
    let (heights, script) = rest.split_at(count);

    let surfaces = Surfaces::new();
    let items = heights.iter().enumerate().map(|(i, &h)| {
        let h = i32::from(h % 63) + 1;
        ListItem::new(i as u64, h)
            .with_grab_handle(Rect::new(0, 0, 8, h))
            .with_delete_handle(Rect::new(56, 0, 8, h))
    });
    let mut list = SortableList::new(items, Rect::new(0, 0, 64, 0), &surfaces);

    // Script: pairs of (opcode, coordinate).
    for chunk in script.chunks_exact(2) {
        let coord = i32::from(chunk[1]) * 4 - 64;
        let event = match chunk[0] % 6 {
            0 => Event::Pointer(PointerEvent::down(4, coord)),
            1 => Event::Pointer(PointerEvent::down(60, coord)),
            2 | 3 => Event::Pointer(PointerEvent::moved(4, coord)),
            4 => Event::Pointer(PointerEvent::up(4, coord)),
            _ => Event::Key(KeyEvent::new(KeyCode::Escape)),
        };
        list.handle_event(&event);

        let order = list.order();
        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), order.len(), "duplicate ids");
        assert_eq!(order.len(), list.len(), "order/len mismatch");
        let expected = if list.state() == DragState::Dragging { 3 } else { 0 };
        assert_eq!(surfaces.input.total_listeners(), expected, "listener leak");
    }

    list.destroy();
    assert_eq!(surfaces.input.total_listeners(), 0);
    assert_eq!(surfaces.render.mounted_count(), 0);
});
