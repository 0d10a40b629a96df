pub mod backgrounds;
pub mod carousel;
pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod parallax;
pub mod slider;
pub mod strip;
pub mod tween;
