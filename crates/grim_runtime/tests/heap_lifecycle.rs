use grim_runtime::numeric::{pack_complex, pack_float, pack_integer, pack_rational};
use grim_runtime::{Cell, Heap, HeapConfig, Value, ValueExt, ValueType, pack_symbol_cell, symbol_name};
use std::rc::Rc;

#[test]
fn unreachable_cells_are_reclaimed() {
    let mut heap = Heap::new();
    let x = pack_float(&mut heap, 1.5);
    let id = x.as_obj_id();
    assert!(heap.is_live(id));

    heap.collect(&[]);
    assert!(!heap.is_live(id));
    assert_eq!(heap.live_count(), 0);
    assert_eq!(heap.stats().cells_freed, 1);
}

#[test]
fn rooted_cells_survive() {
    let mut heap = Heap::new();
    let kept = pack_float(&mut heap, 1.5);
    let dropped = pack_float(&mut heap, 2.5);
    heap.collect(&[kept]);
    assert!(heap.is_live(kept.as_obj_id()));
    assert!(!heap.is_live(dropped.as_obj_id()));
    assert_eq!(kept.type_of(&heap), ValueType::Float);
}

#[test]
fn complex_components_are_traced() {
    let mut heap = Heap::new();
    let re = pack_float(&mut heap, 1.0);
    let im = pack_float(&mut heap, 2.0);
    let c = pack_complex(&mut heap, re, im);
    heap.collect(&[c]);
    assert!(heap.is_live(re.as_obj_id()));
    assert!(heap.is_live(im.as_obj_id()));
    assert_eq!(heap.live_count(), 3);
}

#[test]
fn immediates_are_ignored_as_roots() {
    let mut heap = Heap::new();
    let one = pack_integer(&mut heap, 1);
    heap.collect(&[one, Value::NIL, Value::from_char('x')]);
    assert_eq!(heap.live_count(), 0);
}

#[test]
fn symbol_cells_are_permanent() {
    let mut heap = Heap::new();
    let sym = pack_symbol_cell(&mut heap, "lambda");
    assert!(sym.is_symbol());
    assert!(heap.is_permanent(sym.as_symbol_id()));

    heap.collect(&[sym]);
    heap.collect(&[]);
    assert!(heap.is_live(sym.as_symbol_id()));
    assert_eq!(symbol_name(&heap, sym), "lambda");
    assert_eq!(sym.type_of(&heap), ValueType::Symbol);
}

#[test]
fn bigint_storage_is_released_once() {
    let mut heap = Heap::new();
    let big = pack_integer(&mut heap, i64::MAX);
    assert!(heap.has_finalizer(big.as_obj_id()));

    heap.collect(&[]);
    assert_eq!(heap.stats().finalizers_run, 1);
    heap.collect(&[]);
    assert_eq!(heap.stats().finalizers_run, 1);
}

#[test]
fn rational_storage_is_released() {
    let mut heap = Heap::new();
    let one = pack_integer(&mut heap, 1);
    let three = pack_integer(&mut heap, 3);
    let r = pack_rational(&mut heap, one, three);
    assert!(heap.has_finalizer(r.as_obj_id()));
    heap.collect(&[]);
    assert_eq!(heap.stats().finalizers_run, 1);
}

#[test]
fn custom_finalizer_sees_the_dying_cell() {
    let mut heap = Heap::new();
    let x = pack_float(&mut heap, 4.0);
    let seen = Rc::new(std::cell::Cell::new(None));
    let probe = Rc::clone(&seen);
    heap.register_finalizer(
        x.as_obj_id(),
        Box::new(move |cell: &mut Cell| {
            if let Cell::Float(f) = cell {
                probe.set(Some(*f));
            }
        }),
    );

    heap.collect(&[x]);
    assert_eq!(seen.get(), None);
    heap.collect(&[]);
    assert_eq!(seen.get(), Some(4.0));
}

#[test]
fn freed_slots_are_reused() {
    let mut heap = Heap::new();
    let keep = pack_float(&mut heap, 1.0);
    let gone = pack_float(&mut heap, 2.0);
    let _tail = pack_float(&mut heap, 3.0);
    let last = pack_float(&mut heap, 4.0);
    heap.collect(&[keep, last]);

    let fresh = pack_float(&mut heap, 5.0);
    assert!([gone.as_obj_id().0, 2].contains(&fresh.as_obj_id().0));
    assert_eq!(heap.live_count(), 3);
}

#[test]
fn should_gc_follows_the_threshold() {
    let mut heap = Heap::with_config(HeapConfig::eager(3));
    for i in 0..2 {
        pack_float(&mut heap, i as f64);
    }
    assert!(!heap.should_gc());
    pack_float(&mut heap, 2.0);
    assert!(heap.should_gc());

    heap.collect(&[]);
    assert!(!heap.should_gc());
    assert_eq!(heap.stats().collections, 1);
}

#[test]
fn allocation_never_collects_on_its_own() {
    let mut heap = Heap::with_config(HeapConfig::eager(1));
    let values: Vec<Value> = (0..10).map(|i| pack_float(&mut heap, i as f64)).collect();
    assert!(heap.should_gc());
    assert!(values.iter().all(|v| heap.is_live(v.as_obj_id())));
}

#[test]
fn stats_and_report() {
    let mut heap = Heap::new();
    let x = pack_float(&mut heap, 1.0);
    let big = pack_integer(&mut heap, i64::MIN);
    let stats = heap.stats();
    assert_eq!(stats.allocations, 2);

    heap.collect(&[x, big]);
    let stats = heap.stats();
    assert_eq!(stats.live_cells, 2);
    assert!(stats.live_bytes > 0);

    let report = heap.memory_stats();
    assert!(report.contains("Float:"));
    assert!(report.contains("Bigint:"));
    assert!(report.contains("Pending finalizers: 1"));
}

#[test]
#[should_panic(expected = "Cell was garbage collected")]
fn reading_a_reclaimed_cell_is_fatal() {
    let mut heap = Heap::new();
    let x = pack_float(&mut heap, 1.0);
    heap.collect(&[]);
    heap.get(x.as_obj_id());
}
