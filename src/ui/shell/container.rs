//! Themed root and vertical container.

use leptos::prelude::*;

use super::render_nodes;
use crate::layout::Node;

/// Theme application point.
///
/// The `data-theme` attribute names the token set whose stylesheet is
/// linked by the document.
#[component]
pub fn ThemeRoot(
    /// Theme name.
    theme: String,
    /// Full-viewport sizing.
    full: bool,
    /// Child nodes.
    nodes: Vec<Node>,
) -> impl IntoView {
    let classes = if full {
        "shell-root shell-full"
    } else {
        "shell-root"
    };

    view! {
        <div class=classes data-theme=theme>
            {render_nodes(nodes)}
        </div>
    }
}

/// Column box stacking its children top to bottom.
#[component]
pub fn ShellBox(
    /// Stretch to the parent's size.
    #[prop(default = false)]
    fill: bool,
    /// Child nodes.
    nodes: Vec<Node>,
) -> impl IntoView {
    let classes = if fill {
        "shell-box shell-fill"
    } else {
        "shell-box"
    };

    view! {
        <div class=classes>
            {render_nodes(nodes)}
        </div>
    }
}
