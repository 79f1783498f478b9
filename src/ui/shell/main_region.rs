//! Main content region.

use leptos::prelude::*;

use super::{RegionAttrs, render_nodes};
use crate::layout::Region;

/// Flexible main region.
///
/// Padding tokens are exposed as classes for styling and as data
/// attributes for inspection.
#[component]
pub fn MainRegion(
    /// Main region.
    region: Region,
) -> impl IntoView {
    let RegionAttrs {
        class,
        pad_horizontal,
        pad_vertical,
    } = RegionAttrs::new(&region, "shell-main");

    view! {
        <main
            data-region="main"
            class=class
            data-pad-horizontal=pad_horizontal
            data-pad-vertical=pad_vertical
        >
            {render_nodes(region.children)}
        </main>
    }
}
