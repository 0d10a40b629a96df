//! Aspect-ratio fitting of a media box inside a container box.
//!
//! The functions here are pure: callers apply the returned rectangle to
//! whatever rendering surface they own. Media with unknown intrinsic size
//! (video metadata not loaded yet) is rejected with
//! [`Error::InvalidSize`]; callers retry after the readiness signal fires.

use serde::Deserialize;

use crate::error::Error;

/// A width/height pair: either a container's visible box or a media
/// element's intrinsic box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    fn validate(&self) -> Result<(), Error> {
        if self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
        {
            Ok(())
        } else {
            Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Scaled media box plus the offset to apply inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

/// How a media box is fitted to its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Fill the container completely, cropping overflow.
    #[default]
    Cover,
    /// Fit inside the container completely, leaving empty space.
    Contain,
}

/// Scale `media` so it fully covers `container`, preserving aspect ratio and
/// cropping the overflow.
///
/// The result is centered horizontally (`x` is negative when the scaled media
/// is wider than the container) and top-aligned: `y` is always 0. The missing
/// vertical centering is observed product behavior, kept on purpose.
///
/// # Errors
/// Returns [`Error::InvalidSize`] when either box has a non-positive or
/// non-finite dimension.
pub fn compute_cover_fit(container: Size, media: Size) -> Result<FitRect, Error> {
    container.validate()?;
    media.validate()?;

    let media_ratio = media.aspect_ratio();
    let (width, height) = if media_ratio > container.aspect_ratio() {
        // Media relatively wider: pin height, overflow horizontally.
        let height = container.height;
        (height * media_ratio, height)
    } else {
        // Media relatively taller (or matching): pin width, overflow vertically.
        let width = container.width;
        (width, width / media_ratio)
    };

    Ok(FitRect {
        width,
        height,
        x: (container.width - width) / 2.0,
        y: 0.0,
    })
}

/// Scale `media` so it fits entirely inside `container`, preserving aspect
/// ratio and centering on both axes.
///
/// # Errors
/// Returns [`Error::InvalidSize`] when either box has a non-positive or
/// non-finite dimension.
pub fn compute_contain_fit(container: Size, media: Size) -> Result<FitRect, Error> {
    container.validate()?;
    media.validate()?;

    let scale = (container.width / media.width).min(container.height / media.height);
    let width = media.width * scale;
    let height = media.height * scale;

    Ok(FitRect {
        width,
        height,
        x: (container.width - width) / 2.0,
        y: (container.height - height) / 2.0,
    })
}

/// Fit `media` to `container` according to `mode`.
///
/// # Errors
/// Returns [`Error::InvalidSize`] when either box has a non-positive or
/// non-finite dimension.
pub fn compute_fit(container: Size, media: Size, mode: FitMode) -> Result<FitRect, Error> {
    match mode {
        FitMode::Cover => compute_cover_fit(container, media),
        FitMode::Contain => compute_contain_fit(container, media),
    }
}
