//! Glide - touchscreen application launcher engine
//!
//! The engine behind a home-screen launcher: XML feeds describe the
//! launchable apps, a swipe detector classifies touch gestures, and one of
//! two layout engines (ellipse carousel or paged grid) turns drags and
//! swipes into motion. A rendering frontend injects pointer events and
//! reads item positions back out every frame; rendering itself, input
//! drivers, and window-system glue live outside this crate.

pub mod anim;
pub mod config;
pub mod controller;
pub mod feed;
pub mod input;
pub mod launch;
pub mod layout;
pub mod persist;
pub mod runtime;
pub mod ticker;
