//! UI components and layouts.
//!
//! Leptos SSR components that turn the Root View tree ([`crate::layout::Node`])
//! into HTML.
//!
//! # Structure
//!
//! - [`app`]: Document and page entry point
//! - [`shell`]: Themed root, container and the header/main/footer regions

pub mod app;
pub mod shell;

pub use app::{Document, RootView, render_page};
