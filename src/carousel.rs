//! Circular slide-index mapping for a four-slot looping carousel.
//!
//! Four physical slots stay populated from a conceptually infinite,
//! circularly wrapped item list while a continuous virtual index scrolls
//! through it. Wrapping uses a true mathematical modulo so negative
//! positions resolve correctly.

use crate::error::Error;
use crate::tween::lerp;

/// Number of physical display slots.
pub const SLOT_COUNT: usize = 4;

/// Per-slot item offsets relative to the floored virtual index. Slots 0-1
/// are the incoming pair, slots 2-3 the outgoing/wrapped pair.
pub const SLOT_OFFSETS: [i64; SLOT_COUNT] = [0, 1, -2, -1];

/// Per-slot horizontal travel (from, to) in percent of slide width over one
/// unit of progress. The two pairs move in opposite directions.
const SLOT_TRAVEL: [(f64, f64); SLOT_COUNT] = [
    (0.0, 100.0),
    (100.0, 200.0),
    (-200.0, -100.0),
    (-100.0, 0.0),
];

/// True mathematical modulo: the result is in `[0, m)` for any finite `n`,
/// unlike `%`, which keeps the sign of the dividend.
#[must_use]
pub fn wrapped_offset(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

/// Integer form of [`wrapped_offset`]: wrap `n` into `[0, count)`.
///
/// # Errors
/// Returns [`Error::NoItems`] when `count` is zero.
pub fn wrapped_index(n: i64, count: usize) -> Result<usize, Error> {
    if count == 0 {
        return Err(Error::NoItems);
    }
    let m = count as i64;
    Ok((((n % m) + m) % m) as usize)
}

/// Resolve the item index shown by each of the four slots at `virtual_index`.
///
/// Pure and idempotent: the same inputs always produce the same mapping.
/// With `item_count >= 4` the four resolved indices are pairwise distinct
/// (shorter lists must be pre-padded with [`pad_items`]).
///
/// # Errors
/// Returns [`Error::NoItems`] when `item_count` is zero.
pub fn map_slots(virtual_index: f64, item_count: usize) -> Result<[usize; SLOT_COUNT], Error> {
    if item_count == 0 {
        return Err(Error::NoItems);
    }
    let base = item_count as i64 - virtual_index.floor() as i64;
    let mut mapping = [0usize; SLOT_COUNT];
    for (slot, offset) in SLOT_OFFSETS.iter().enumerate() {
        mapping[slot] = wrapped_index(base + offset, item_count)?;
    }
    Ok(mapping)
}

/// The item whose background asset should be active at `virtual_index`:
/// the nearest integer position, wrapped.
///
/// # Errors
/// Returns [`Error::NoItems`] when `item_count` is zero.
pub fn active_index(virtual_index: f64, item_count: usize) -> Result<usize, Error> {
    wrapped_index(virtual_index.round() as i64, item_count)
}

/// Horizontal offset in percent for every slot at `progress` in `[0, 1]`
/// (the fractional part of the virtual index).
#[must_use]
pub fn slot_positions(progress: f64) -> [f64; SLOT_COUNT] {
    let mut positions = [0.0; SLOT_COUNT];
    for (slot, (from, to)) in SLOT_TRAVEL.iter().enumerate() {
        positions[slot] = lerp(*from, *to, progress);
    }
    positions
}

/// Pre-pad a short item list by doubling it until it holds at least
/// [`SLOT_COUNT`] entries, so all four slots can show distinct entries.
///
/// # Errors
/// Returns [`Error::NoItems`] when `items` is empty.
pub fn pad_items<T: Clone>(mut items: Vec<T>) -> Result<Vec<T>, Error> {
    if items.is_empty() {
        return Err(Error::NoItems);
    }
    while items.len() < SLOT_COUNT {
        let len = items.len();
        for i in 0..len {
            items.push(items[i].clone());
        }
    }
    Ok(items)
}

/// One physical display slot. Remembers the item it last showed so content
/// swaps are idempotent: re-assigning the same item is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slot {
    current: Option<usize>,
}

impl Slot {
    /// Assign `item_index` to the slot. Returns `true` when the displayed
    /// item actually changed; callers skip the content swap otherwise.
    pub fn assign(&mut self, item_index: usize) -> bool {
        if self.current == Some(item_index) {
            return false;
        }
        self.current = Some(item_index);
        true
    }

    /// The item currently displayed, if any was assigned yet.
    #[must_use]
    pub const fn item(&self) -> Option<usize> {
        self.current
    }
}
