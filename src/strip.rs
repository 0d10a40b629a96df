//! Free-scrolling slider strip driven by drag velocity.
//!
//! Unlike the background slider this strip never snaps: its position chases
//! a target fed by drag velocity, and the velocity bleeds off after release
//! so the strip glides to a stop.

use crate::config::StripOptions;
use crate::events::DragSample;
use crate::tween::lerp;

#[derive(Debug)]
pub struct FilmStrip {
    opts: StripOptions,
    position: f64,
    drag_x: f64,
    dragging: bool,
    pressed: bool,
    scale: f64,
}

impl FilmStrip {
    #[must_use]
    pub fn new(opts: StripOptions) -> Self {
        Self {
            opts,
            position: 0.0,
            drag_x: 0.0,
            dragging: false,
            pressed: false,
            scale: 1.0,
        }
    }

    pub fn on_drag(&mut self, sample: DragSample) {
        self.dragging = true;
        self.drag_x = sample.velocity_x;
    }

    pub fn on_drag_end(&mut self) {
        self.dragging = false;
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
    }

    /// Advance one frame; returns the new horizontal position in pixels.
    pub fn tick(&mut self) -> f64 {
        let target = self.position + self.drag_x * self.opts.velocity_gain;
        self.position = lerp(self.position, target, self.opts.follow_factor);

        if !self.dragging {
            self.drag_x = lerp(self.drag_x, 0.0, self.opts.release_decay);
            if self.drag_x.abs() < 1e-4 {
                self.drag_x = 0.0;
            }
        }

        let scale_target = if self.pressed { self.opts.press_scale } else { 1.0 };
        self.scale = lerp(self.scale, scale_target, self.opts.press_ease);

        self.position
    }

    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Scale to apply to the slides for press feedback.
    #[must_use]
    pub const fn press_scale(&self) -> f64 {
        self.scale
    }

    /// True once released drag momentum has fully bled off.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.dragging && self.drag_x == 0.0
    }
}
