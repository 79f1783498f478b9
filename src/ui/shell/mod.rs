//! Shell layout components.
//!
//! One component per node kind of the render tree. [`render_node`] picks the
//! component for a node; containers call back into [`render_nodes`] for
//! their children.

mod container;
mod footer;
mod header;
mod main_region;

use leptos::prelude::*;

use crate::layout::{Node, Region, RegionKind};

pub use container::{ShellBox, ThemeRoot};
pub use footer::AppFooter;
pub use header::{AppHeader, BrandIcon};
pub use main_region::MainRegion;

/// Render one node of the tree.
pub fn render_node(node: Node) -> AnyView {
    match node {
        Node::Themed {
            theme,
            full,
            children,
        } => view! { <ThemeRoot theme=theme full=full nodes=children /> }.into_any(),
        Node::Container { fill, children } => {
            view! { <ShellBox fill=fill nodes=children /> }.into_any()
        }
        Node::Region(region) => match region.kind {
            RegionKind::Header => view! { <AppHeader region=region /> }.into_any(),
            RegionKind::Main => view! { <MainRegion region=region /> }.into_any(),
            RegionKind::Footer => view! { <AppFooter region=region /> }.into_any(),
        },
        Node::Text(text) => text.into_any(),
    }
}

/// Render a list of sibling nodes in order.
pub fn render_nodes(nodes: Vec<Node>) -> Vec<AnyView> {
    nodes.into_iter().map(render_node).collect()
}

/// Attributes shared by all region elements.
#[derive(Debug)]
pub(crate) struct RegionAttrs {
    pub class: String,
    pub pad_horizontal: Option<&'static str>,
    pub pad_vertical: Option<&'static str>,
}

impl RegionAttrs {
    pub fn new(region: &Region, base_class: &str) -> Self {
        let mut classes = vec![base_class.to_string()];
        if region.flex {
            classes.push("shell-flex".to_string());
        }
        if region.fill {
            classes.push("shell-fill".to_string());
        }
        if let Some(pad) = region.pad {
            classes.push(format!("pad-h-{}", pad.horizontal));
            classes.push(format!("pad-v-{}", pad.vertical));
        }

        Self {
            class: classes.join(" "),
            pad_horizontal: region.pad.map(|p| p.horizontal.as_str()),
            pad_vertical: region.pad.map(|p| p.vertical.as_str()),
        }
    }
}
