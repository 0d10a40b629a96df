//! YAML configuration for component tuning.
//!
//! All knobs are runtime-adjustable configuration injected at construction
//! time; nothing reads them globally. Field names are kebab-case in the file.

use std::path::Path;
use std::time::Duration;

use anyhow::{Result, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Background slider tuning.
    pub slider: SliderOptions,
    /// Free-scrolling strip tuning.
    pub strip: StripOptions,
    /// Parallax scroll tuning.
    pub parallax: ParallaxOptions,
    /// Optional deterministic seed for the demo's initial item shuffle.
    pub startup_shuffle_seed: Option<u64>,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde
    /// defaults alone.
    pub fn validated(self) -> Result<Self> {
        self.slider.validate()?;
        self.strip.validate()?;
        self.parallax.validate()?;
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            slider: SliderOptions::default(),
            strip: StripOptions::default(),
            parallax: ParallaxOptions::default(),
            startup_shuffle_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SliderOptions {
    /// Base duration of a snap animation.
    #[serde(with = "humantime_serde")]
    pub snap_duration: Duration,
    /// Virtual-index nudge applied per drag sample.
    pub drag_step: f64,
    /// Drag distance in pixels beyond which release snaps forward (ceil)
    /// instead of back (floor).
    pub snap_threshold_px: f64,
    /// Seconds shaved off the snap duration per unit of fling velocity.
    pub velocity_duration_scale: f64,
    /// Cap on the velocity-based duration cut, in seconds.
    pub max_duration_cut: f64,
}

impl SliderOptions {
    const fn default_snap_duration() -> Duration {
        Duration::from_secs(1)
    }

    const fn default_drag_step() -> f64 {
        0.015
    }

    const fn default_snap_threshold_px() -> f64 {
        100.0
    }

    const fn default_velocity_duration_scale() -> f64 {
        0.1
    }

    const fn default_max_duration_cut() -> f64 {
        0.5
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.snap_duration > Duration::ZERO,
            "slider.snap-duration must be positive"
        );
        ensure!(self.drag_step > 0.0, "slider.drag-step must be positive");
        ensure!(
            self.snap_threshold_px >= 0.0,
            "slider.snap-threshold-px must not be negative"
        );
        ensure!(
            self.velocity_duration_scale >= 0.0,
            "slider.velocity-duration-scale must not be negative"
        );
        ensure!(
            self.max_duration_cut >= 0.0
                && self.max_duration_cut < self.snap_duration.as_secs_f64(),
            "slider.max-duration-cut must be shorter than slider.snap-duration"
        );
        Ok(())
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            snap_duration: Self::default_snap_duration(),
            drag_step: Self::default_drag_step(),
            snap_threshold_px: Self::default_snap_threshold_px(),
            velocity_duration_scale: Self::default_velocity_duration_scale(),
            max_duration_cut: Self::default_max_duration_cut(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StripOptions {
    /// Pixels of target displacement per unit of drag velocity.
    pub velocity_gain: f64,
    /// Fraction of the remaining distance covered per tick.
    pub follow_factor: f64,
    /// Per-tick decay of drag velocity after release.
    pub release_decay: f64,
    /// Scale applied to slides while the pointer is held down.
    pub press_scale: f64,
    /// Per-tick ease factor toward the press/release scale target.
    pub press_ease: f64,
}

impl StripOptions {
    const fn default_velocity_gain() -> f64 {
        40.0
    }

    const fn default_follow_factor() -> f64 {
        0.5
    }

    const fn default_release_decay() -> f64 {
        0.1
    }

    const fn default_press_scale() -> f64 {
        1.02
    }

    const fn default_press_ease() -> f64 {
        0.15
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.velocity_gain > 0.0, "strip.velocity-gain must be positive");
        ensure!(
            self.follow_factor > 0.0 && self.follow_factor <= 1.0,
            "strip.follow-factor must be in (0, 1]"
        );
        ensure!(
            self.release_decay > 0.0 && self.release_decay <= 1.0,
            "strip.release-decay must be in (0, 1]"
        );
        ensure!(self.press_scale > 0.0, "strip.press-scale must be positive");
        ensure!(
            self.press_ease > 0.0 && self.press_ease <= 1.0,
            "strip.press-ease must be in (0, 1]"
        );
        Ok(())
    }
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            velocity_gain: Self::default_velocity_gain(),
            follow_factor: Self::default_follow_factor(),
            release_decay: Self::default_release_decay(),
            press_scale: Self::default_press_scale(),
            press_ease: Self::default_press_ease(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ParallaxOptions {
    /// Scale of a tracked element at the top of its scroll range.
    pub from_scale: f64,
    /// Scale of a tracked element at the bottom of its scroll range.
    pub to_scale: f64,
}

impl ParallaxOptions {
    const fn default_from_scale() -> f64 {
        1.0
    }

    const fn default_to_scale() -> f64 {
        1.7
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.from_scale > 0.0, "parallax.from-scale must be positive");
        ensure!(self.to_scale > 0.0, "parallax.to-scale must be positive");
        Ok(())
    }
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            from_scale: Self::default_from_scale(),
            to_scale: Self::default_to_scale(),
        }
    }
}
