//! Navigation header.

use leptos::prelude::*;

use super::{RegionAttrs, render_nodes};
use crate::layout::Region;

/// Header region with the brand link back to the page root.
#[component]
pub fn AppHeader(
    /// Header region; its children form the brand label.
    region: Region,
) -> impl IntoView {
    let RegionAttrs {
        class,
        pad_horizontal,
        pad_vertical,
    } = RegionAttrs::new(&region, "shell-header");

    view! {
        <header
            data-region="header"
            class=class
            data-pad-horizontal=pad_horizontal
            data-pad-vertical=pad_vertical
        >
            <nav>
                <a href="/" class="shell-brand">
                    <BrandIcon />
                    <span>{render_nodes(region.children)}</span>
                </a>
            </nav>
        </header>
    }
}

/// Globe mark shown next to the brand.
#[component]
pub fn BrandIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class="shell-icon"
        >
            <circle cx="12" cy="12" r="10" />
            <line x1="2" y1="12" x2="22" y2="12" />
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
        </svg>
    }
}
