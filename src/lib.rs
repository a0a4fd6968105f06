//! JBpotato Minecraft server site: server info page and community message board.
//!
//! The board workflow, store client, theme preference and display helpers
//! are plain Rust and build without any UI feature; the Dioxus shell and
//! pages live in [`ui`] and [`views`].

pub mod board;
pub mod config;
pub mod display;
pub mod logging;
pub mod preferences;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
