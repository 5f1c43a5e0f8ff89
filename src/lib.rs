//! Password generator and digital clock.
//!
//! The composer in [`password`] and the formatting helpers in [`clock`] have
//! no dependency on the windowing code; [`app`] and [`clock_app`] are the
//! egui front ends that call into them.

pub mod app;
pub mod clock;
pub mod clock_app;
pub mod error;
pub mod logging;
pub mod manager;
pub mod password;
pub mod settings;
