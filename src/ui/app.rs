//! Document shell and page entry point.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::layout::{Node, root_view};
use crate::theme::Theme;
use crate::ui::shell::render_node;

/// Render the full page for a theme and page settings.
///
/// This is the entry point the server mounts. Output always starts with a
/// doctype and links the theme stylesheet at `/theme.css`.
pub fn render_page(theme: &Theme, page: &PageConfig) -> String {
    let tree = root_view(theme, page);
    let title = page.title.clone();

    let html = Owner::new().with(move || view! { <Document title=title tree=tree /> }.to_html());

    tracing::debug!(
        name: "page.rendered",
        theme = %theme.name,
        layout = %page.layout,
        bytes = html.len(),
        "Page rendered"
    );

    format!("<!DOCTYPE html>{html}")
}

/// HTML document wrapping the Root View.
#[component]
pub fn Document(
    /// Document title.
    title: String,
    /// Page tree.
    tree: Node,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href="/theme.css"/>
            </head>
            <body>
                <RootView tree=tree />
            </body>
        </html>
    }
}

/// Root View component: renders a tree built by [`root_view`].
#[component]
pub fn RootView(
    /// Page tree.
    tree: Node,
) -> impl IntoView {
    render_node(tree)
}
