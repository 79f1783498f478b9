//! Root View: the page's render tree.
//!
//! [`root_view`] composes a themed full-viewport container with three
//! vertically stacked regions: a navigation header, a flexible main region
//! holding the message, and a footer. The tree is plain data so it can be
//! inspected and compared before the UI layer turns it into markup.

use crate::config::{PageConfig, PageLayout};
use crate::theme::{Size, Theme};

/// The message shown in the main region.
pub const HELLO_WORLD: &str = "Hello, World!";

/// Padding on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pad {
    pub horizontal: Size,
    pub vertical: Size,
}

impl Pad {
    /// Padding of the main region.
    pub const MAIN: Pad = Pad {
        horizontal: Size::Medium,
        vertical: Size::Small,
    };
}

/// Named layout area within the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Header,
    Main,
    Footer,
}

impl RegionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Main => "main",
            Self::Footer => "footer",
        }
    }
}

/// A slot in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    pub pad: Option<Pad>,
    /// Grows to take the remaining height.
    pub flex: bool,
    /// Stretches to fill its parent.
    pub fill: bool,
    pub children: Vec<Node>,
}

impl Region {
    fn new(kind: RegionKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            pad: None,
            flex: false,
            fill: false,
            children,
        }
    }

    fn main() -> Self {
        Self {
            pad: Some(Pad::MAIN),
            flex: true,
            fill: false,
            ..Self::new(RegionKind::Main, vec![Node::Text(HELLO_WORLD.to_string())])
        }
    }
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Theme application point. Always the root.
    Themed {
        theme: String,
        full: bool,
        children: Vec<Node>,
    },
    /// Vertical stacking box.
    Container { fill: bool, children: Vec<Node> },
    Region(Region),
    Text(String),
}

impl Node {
    /// Direct children; empty for text.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Themed { children, .. } | Self::Container { children, .. } => children,
            Self::Region(region) => &region.children,
            Self::Text(_) => &[],
        }
    }

    /// The top-level regions, in order.
    ///
    /// Looks through the root and a single wrapping container, so both the
    /// contained and the full-bleed layouts answer the same way.
    #[must_use]
    pub fn regions(&self) -> Vec<&Region> {
        let mut level = self.children();
        if let [Node::Container { children, .. }] = level {
            level = children;
        }
        level
            .iter()
            .filter_map(|node| match node {
                Node::Region(region) => Some(region),
                _ => None,
            })
            .collect()
    }

    /// First top-level region of the given kind.
    #[must_use]
    pub fn region(&self, kind: RegionKind) -> Option<&Region> {
        self.regions().into_iter().find(|r| r.kind == kind)
    }

    /// All text below this node, concatenated and trimmed.
    #[must_use]
    pub fn text_content(&self) -> String {
        fn collect(node: &Node, out: &mut String) {
            match node {
                Node::Text(text) => out.push_str(text),
                other => other.children().iter().for_each(|c| collect(c, out)),
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out.trim().to_string()
    }
}

/// Build the page tree for a theme and page settings.
///
/// Pure: equal inputs always give equal trees.
#[must_use]
pub fn root_view(theme: &Theme, page: &PageConfig) -> Node {
    let children = match page.layout {
        PageLayout::Contained => vec![Node::Container {
            fill: true,
            children: vec![
                Node::Region(Region::new(
                    RegionKind::Header,
                    vec![Node::Text(page.brand.clone())],
                )),
                Node::Region(Region::main()),
                Node::Region(Region::new(
                    RegionKind::Footer,
                    vec![Node::Text(page.footer_text.clone())],
                )),
            ],
        }],
        PageLayout::FullBleed => vec![Node::Region(Region::main())],
    };

    Node::Themed {
        theme: theme.name.clone(),
        full: true,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contained() -> Node {
        root_view(&Theme::hpe(), &PageConfig::default())
    }

    fn full_bleed() -> Node {
        let page = PageConfig {
            layout: PageLayout::FullBleed,
            ..PageConfig::default()
        };
        root_view(&Theme::hpe(), &page)
    }

    #[test]
    fn root_is_themed_with_one_container() {
        let tree = contained();
        let Node::Themed { theme, full, children } = &tree else {
            panic!("root must be themed, got {tree:?}");
        };
        assert_eq!(theme, "hpe");
        assert!(*full);
        assert_eq!(children.len(), 1);
        assert!(matches!(children[0], Node::Container { fill: true, .. }));
    }

    #[test]
    fn regions_are_header_main_footer() {
        let tree = contained();
        let kinds: Vec<_> = tree.regions().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![RegionKind::Header, RegionKind::Main, RegionKind::Footer]
        );
        assert_eq!(tree.children()[0].children().len(), 3);
    }

    #[test]
    fn main_region_padding_and_flex() {
        for tree in [contained(), full_bleed()] {
            let main = tree.region(RegionKind::Main).unwrap();
            let pad = main.pad.unwrap();
            assert_eq!(pad.horizontal, Size::Medium);
            assert_eq!(pad.vertical, Size::Small);
            assert!(main.flex);
            assert!(!main.fill);
        }
    }

    #[test]
    fn main_region_holds_the_message() {
        let tree = contained();
        let main = tree.region(RegionKind::Main).unwrap();
        assert_eq!(Node::Region(main.clone()).text_content(), HELLO_WORLD);
    }

    #[test]
    fn header_and_footer_use_page_labels() {
        let page = PageConfig {
            brand: "Acme".to_string(),
            footer_text: "Acme Inc.".to_string(),
            ..PageConfig::default()
        };
        let tree = root_view(&Theme::base(), &page);
        let header = tree.region(RegionKind::Header).unwrap();
        let footer = tree.region(RegionKind::Footer).unwrap();
        assert_eq!(header.children, vec![Node::Text("Acme".to_string())]);
        assert_eq!(footer.children, vec![Node::Text("Acme Inc.".to_string())]);
        assert!(header.pad.is_none());
    }

    #[test]
    fn rendering_twice_gives_the_same_tree() {
        assert_eq!(contained(), contained());
        assert_eq!(full_bleed(), full_bleed());
    }

    #[test]
    fn theme_only_changes_the_root_name() {
        let page = PageConfig::default();
        let a = root_view(&Theme::hpe(), &page);
        let b = root_view(&Theme::dark(), &page);
        assert_ne!(a, b);
        assert_eq!(a.children(), b.children());
    }

    #[test]
    fn full_bleed_has_a_single_region_with_the_message() {
        let tree = full_bleed();
        assert!(matches!(tree, Node::Themed { full: true, .. }));
        assert_eq!(tree.children().len(), 1);
        let regions = tree.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].kind, RegionKind::Main);
        assert_eq!(regions[0].children, vec![Node::Text(HELLO_WORLD.to_string())]);
        assert_eq!(tree.text_content(), HELLO_WORLD);
    }

    #[test]
    fn text_content_is_trimmed() {
        let node = Node::Container {
            fill: false,
            children: vec![Node::Text("  \n Hello, World! \n".to_string())],
        };
        assert_eq!(node.text_content(), HELLO_WORLD);
    }
}
