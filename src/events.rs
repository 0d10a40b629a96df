use crate::layout::Size;

/// One horizontal pan sample from the host's gesture recognizer.
#[derive(Debug, Clone, Copy)]
pub struct DragSample {
    /// Accumulated horizontal distance of the pan, in pixels.
    pub delta_x: f64,
    /// Overall horizontal velocity of the pan, in px/ms.
    pub velocity_x: f64,
}

/// One smooth-scroll position sample.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSample {
    /// Vertical scroll position, in pixels.
    pub y: f64,
}

/// Fired by the host once a media element's intrinsic size is known.
/// Sizing must not run before this.
#[derive(Debug, Clone, Copy)]
pub struct MediaReady {
    pub intrinsic: Size,
}
