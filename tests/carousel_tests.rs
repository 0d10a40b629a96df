use vitrine::carousel::{
    SLOT_COUNT, Slot, active_index, map_slots, pad_items, slot_positions, wrapped_index,
    wrapped_offset,
};
use vitrine::error::Error;

#[test]
fn wrapped_offset_matches_mathematical_modulo() {
    assert_eq!(wrapped_offset(-1.0, 4.0), 3.0);
    assert_eq!(wrapped_offset(5.0, 4.0), 1.0);
    assert_eq!(wrapped_offset(-0.25, 1.0), 0.75);
    assert_eq!(wrapped_offset(8.0, 4.0), 0.0);
}

#[test]
fn wrapped_offset_is_never_negative() {
    for n in -1000..=1000 {
        for m in 1..=50 {
            let out = wrapped_offset(f64::from(n), f64::from(m));
            assert!(
                (0.0..f64::from(m)).contains(&out),
                "wrapped_offset({n}, {m}) = {out}"
            );
            let idx = wrapped_index(i64::from(n), m as usize).unwrap();
            assert!(idx < m as usize, "wrapped_index({n}, {m}) = {idx}");
        }
    }
}

#[test]
fn wrapped_index_rejects_empty_period() {
    assert!(matches!(wrapped_index(3, 0), Err(Error::NoItems)));
}

#[test]
fn map_slots_concrete_scenario() {
    // virtual index 5.2 over 10 items: base = 10 - 5 = 5
    let mapping = map_slots(5.2, 10).unwrap();
    assert_eq!(mapping, [5, 6, 3, 4]);
}

#[test]
fn map_slots_is_idempotent() {
    assert_eq!(map_slots(-7.3, 6).unwrap(), map_slots(-7.3, 6).unwrap());
    assert_eq!(map_slots(0.0, 4).unwrap(), map_slots(0.0, 4).unwrap());
}

#[test]
fn map_slots_rejects_empty_item_list() {
    assert!(matches!(map_slots(1.0, 0), Err(Error::NoItems)));
}

#[test]
fn map_slots_is_total_and_distinct_over_dense_sample() {
    for count in [4usize, 5, 7, 10, 13] {
        for step in -270..=270 {
            let vi = f64::from(step) * 0.37;
            let mapping = map_slots(vi, count).unwrap();
            for idx in mapping {
                assert!(idx < count, "index {idx} out of range at vi={vi} count={count}");
            }
            for a in 0..SLOT_COUNT {
                for b in (a + 1)..SLOT_COUNT {
                    assert_ne!(
                        mapping[a], mapping[b],
                        "slots {a} and {b} collided at vi={vi} count={count}"
                    );
                }
            }
        }
    }
}

#[test]
fn map_slots_is_constant_between_floor_crossings() {
    assert_eq!(map_slots(3.1, 10).unwrap(), map_slots(3.9, 10).unwrap());
    assert_eq!(map_slots(-2.99, 7).unwrap(), map_slots(-2.01, 7).unwrap());
}

#[test]
fn floor_crossing_shifts_every_slot_by_one_step() {
    // Crossing an integer decrements the shared base, so all four resolved
    // indices step together; relative slot order is preserved.
    let before = map_slots(2.999, 10).unwrap();
    let after = map_slots(3.001, 10).unwrap();
    for slot in 0..SLOT_COUNT {
        assert_eq!(after[slot], (before[slot] + 10 - 1) % 10, "slot {slot}");
    }
}

#[test]
fn active_index_wraps_negatives() {
    assert_eq!(active_index(0.2, 10).unwrap(), 0);
    assert_eq!(active_index(0.6, 10).unwrap(), 1);
    assert_eq!(active_index(-1.0, 10).unwrap(), 9);
    assert_eq!(active_index(-10.9, 10).unwrap(), 9);
}

#[test]
fn slot_positions_move_pairs_in_opposite_directions() {
    assert_eq!(slot_positions(0.0), [0.0, 100.0, -200.0, -100.0]);
    assert_eq!(slot_positions(1.0), [100.0, 200.0, -100.0, 0.0]);
    let mid = slot_positions(0.5);
    assert_eq!(mid, [50.0, 150.0, -150.0, -50.0]);
}

#[test]
fn pad_items_doubles_short_lists() {
    assert_eq!(pad_items(vec![1]).unwrap(), vec![1, 1, 1, 1]);
    assert_eq!(pad_items(vec![1, 2]).unwrap(), vec![1, 2, 1, 2]);
    assert_eq!(pad_items(vec![1, 2, 3]).unwrap(), vec![1, 2, 3, 1, 2, 3]);
    assert_eq!(pad_items(vec![1, 2, 3, 4, 5]).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn pad_items_rejects_empty_input() {
    assert!(matches!(pad_items(Vec::<u8>::new()), Err(Error::NoItems)));
}

#[test]
fn slot_assignment_is_idempotent() {
    let mut slot = Slot::default();
    assert!(slot.assign(3));
    assert!(!slot.assign(3));
    assert_eq!(slot.item(), Some(3));
    assert!(slot.assign(4));
    assert_eq!(slot.item(), Some(4));
}
