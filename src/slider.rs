//! Headless orchestration of the looping four-slot background slider.
//!
//! Gesture samples and navigation calls adjust a target for the virtual
//! index; `tick` advances the animation and resolves the pure mapping into a
//! [`SliderFrame`]. Applying the frame to on-screen elements is the
//! renderer's job, never this module's.

use tracing::debug;

use crate::carousel::{self, SLOT_COUNT, Slot};
use crate::config::SliderOptions;
use crate::error::Error;
use crate::events::DragSample;
use crate::tween::{Ease, Tween};

/// Everything a renderer needs to draw one frame of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFrame {
    /// Item index resolved for each slot.
    pub slot_items: [usize; SLOT_COUNT],
    /// Whether a slot's content changed since the previous frame. Renderers
    /// swap content only for flagged slots.
    pub slot_changed: [bool; SLOT_COUNT],
    /// Horizontal slot offsets in percent of slide width.
    pub slot_x_percent: [f64; SLOT_COUNT],
    /// The item whose background asset should be active.
    pub active_index: usize,
}

/// The looping background slider, minus any rendering.
#[derive(Debug)]
pub struct BackgroundSlider {
    opts: SliderOptions,
    item_count: usize,
    slots: [Slot; SLOT_COUNT],
    virtual_index: f64,
    tween: Option<Tween>,
    drag_delta: f64,
    drag_velocity: f64,
}

impl BackgroundSlider {
    /// Build a slider over `item_count` items. Lists shorter than
    /// [`SLOT_COUNT`] must be pre-padded via [`carousel::pad_items`].
    ///
    /// # Errors
    /// Returns [`Error::NoItems`] when `item_count` is zero.
    pub fn new(item_count: usize, opts: SliderOptions) -> Result<Self, Error> {
        if item_count == 0 {
            return Err(Error::NoItems);
        }
        Ok(Self {
            opts,
            item_count,
            slots: [Slot::default(); SLOT_COUNT],
            virtual_index: 0.0,
            tween: None,
            drag_delta: 0.0,
            drag_velocity: 0.0,
        })
    }

    /// Feed one gesture sample. The virtual index is nudged by a fixed step
    /// in the drag direction; a live drag overrides any in-flight snap.
    pub fn on_drag(&mut self, sample: DragSample) {
        self.tween = None;
        self.drag_delta = sample.delta_x;
        self.drag_velocity = sample.velocity_x.abs();
        self.virtual_index += self.opts.drag_step * sample.delta_x.signum();
    }

    /// End the gesture: snap forward (ceil) when the accumulated delta beat
    /// the threshold, back (floor) otherwise, carrying the fling velocity.
    pub fn on_drag_end(&mut self, now: f64) {
        let target = if self.drag_delta > self.opts.snap_threshold_px {
            self.virtual_index.ceil()
        } else {
            self.virtual_index.floor()
        };
        let velocity = self.drag_velocity;
        self.drag_delta = 0.0;
        self.drag_velocity = 0.0;
        self.snap_to(target, velocity, now);
    }

    /// Advance one slide.
    pub fn next(&mut self, now: f64) {
        self.snap_to(self.virtual_index.floor() - 1.0, 0.0, now);
    }

    /// Go back one slide.
    pub fn previous(&mut self, now: f64) {
        self.snap_to(self.virtual_index.ceil() + 1.0, 0.0, now);
    }

    fn snap_to(&mut self, target: f64, velocity: f64, now: f64) {
        // A fast fling shortens the snap, capped so it never degenerates.
        let cut = (velocity * self.opts.velocity_duration_scale).min(self.opts.max_duration_cut);
        let duration = self.opts.snap_duration.as_secs_f64() - cut;
        let ease = if velocity > 0.0 { Ease::Out } else { Ease::InOut };
        debug!(target, velocity, duration, "snapping slider");
        self.tween = Some(Tween::new(self.virtual_index, target, now, duration, ease));
    }

    /// Advance the animation to `now` (seconds) and resolve the frame to
    /// render. Calling again with the same `now` yields the same frame with
    /// every `slot_changed` flag cleared.
    pub fn tick(&mut self, now: f64) -> SliderFrame {
        if let Some(tween) = self.tween {
            self.virtual_index = tween.sample(now);
            if tween.is_done(now) {
                self.tween = None;
            }
        }

        let slot_items = carousel::map_slots(self.virtual_index, self.item_count)
            .expect("item count validated at construction");
        let mut slot_changed = [false; SLOT_COUNT];
        for (i, (slot, item)) in self.slots.iter_mut().zip(slot_items).enumerate() {
            slot_changed[i] = slot.assign(item);
        }

        SliderFrame {
            slot_items,
            slot_changed,
            slot_x_percent: carousel::slot_positions(carousel::wrapped_offset(
                self.virtual_index,
                1.0,
            )),
            active_index: carousel::active_index(self.virtual_index, self.item_count)
                .expect("item count validated at construction"),
        }
    }

    /// Current continuous scroll position.
    #[must_use]
    pub const fn virtual_index(&self) -> f64 {
        self.virtual_index
    }

    /// Whether a snap animation is still in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}
