//! Playground - an interactive terminal page.
//!
//! This crate renders a single interactive page in the terminal: theme toggling,
//! hover effects, key echo, a hidden modal, a long-press easter egg, tabs, an
//! auto-advancing slideshow, an accordion and a contact form with live validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the page controller and services.
pub mod application;
/// Domain layer containing page state, predicates, timers and ports.
pub mod domain;
/// Infrastructure layer containing configuration, clocks and color sources.
pub mod infrastructure;
/// Presentation layer containing the terminal UI and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "playground";
