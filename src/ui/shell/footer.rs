//! Footer component.

use leptos::prelude::*;

use super::{RegionAttrs, render_nodes};
use crate::layout::Region;

/// Footer region.
#[component]
pub fn AppFooter(
    /// Footer region; its children form the footer label.
    region: Region,
) -> impl IntoView {
    let RegionAttrs {
        class,
        pad_horizontal,
        pad_vertical,
    } = RegionAttrs::new(&region, "shell-footer");

    view! {
        <footer
            data-region="footer"
            class=class
            data-pad-horizontal=pad_horizontal
            data-pad-vertical=pad_vertical
        >
            <span>{render_nodes(region.children)}</span>
        </footer>
    }
}
