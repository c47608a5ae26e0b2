#![cfg(feature = "state-persistence")]

//! A committed order survives a JSON hop and restores onto a fresh list.

use relist_core::event::{Event, PointerEvent};
use relist_core::geometry::Rect;
use relist_core::surface::Surfaces;
use relist_widgets::{ItemId, ListItem, ListOrder, SortableList};

fn row(id: u64) -> ListItem {
    ListItem::new(id, 20).with_grab_handle(Rect::new(0, 0, 10, 20))
}

#[test]
fn dropped_order_restores_after_json_round_trip() {
    let surfaces = Surfaces::new();
    let mut list = SortableList::new((1..=4).map(row), Rect::new(0, 0, 100, 0), &surfaces);
    list.handle_event(&Event::Pointer(PointerEvent::down(5, 10)));
    list.handle_event(&Event::Pointer(PointerEvent::moved(5, 36)));
    list.handle_event(&Event::Pointer(PointerEvent::up(5, 36)));

    let json = serde_json::to_string(&list.snapshot()).expect("serialize");
    assert_eq!(json, r#"{"ids":[2,1,3,4]}"#);

    let saved: ListOrder = serde_json::from_str(&json).expect("deserialize");
    let mut fresh = SortableList::new((1..=4).map(row), Rect::new(0, 0, 100, 0), &surfaces);
    assert!(fresh.restore_order(&saved));
    assert_eq!(fresh.order(), list.order());
    assert_eq!(fresh.order()[0], ItemId::new(2));
}
