//! Stylesheet generation from theme tokens.

use std::fmt::Write;

use super::{Size, Theme};

/// Build the page stylesheet for a theme.
///
/// Tokens become CSS custom properties on `:root`; the shell classes used by
/// the UI components (`shell-root`, `shell-box`, `pad-h-*`, ...) are defined
/// in terms of those properties.
#[must_use]
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = String::with_capacity(2048);
    let c = &theme.colors;
    let t = &theme.typography;

    // Writing to a String cannot fail.
    let _ = writeln!(css, "/* theme: {} */", theme.name);
    css.push_str(":root {\n");
    for (token, value) in [
        ("brand", &c.brand),
        ("background", &c.background),
        ("background-front", &c.background_front),
        ("text", &c.text),
        ("text-weak", &c.text_weak),
        ("border", &c.border),
        ("focus", &c.focus),
    ] {
        let _ = writeln!(css, "  --color-{token}: {value};");
    }
    for size in Size::ALL {
        let _ = writeln!(css, "  --pad-{size}: {}px;", theme.spacing(size));
    }
    let _ = writeln!(css, "  --font-family: {};", t.font_family);
    let _ = writeln!(css, "  --font-size: {}px;", t.font_size);
    let _ = writeln!(css, "  --line-height: {}px;", t.line_height);
    css.push_str("}\n");

    css.push_str(
        "html, body { margin: 0; height: 100%; }
body {
  background: var(--color-background);
  color: var(--color-text);
  font-family: var(--font-family);
  font-size: var(--font-size);
  line-height: var(--line-height);
}
.shell-root { box-sizing: border-box; width: auto; min-height: 100%; }
.shell-full { min-height: 100vh; }
.shell-box { display: flex; flex-direction: column; box-sizing: border-box; }
.shell-fill { width: 100%; min-height: 100vh; }
.shell-flex { flex: 1 1 auto; }
.shell-header, .shell-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--pad-small) var(--pad-medium);
  background: var(--color-background-front);
}
.shell-header { border-bottom: 1px solid var(--color-border); }
.shell-footer { border-top: 1px solid var(--color-border); color: var(--color-text-weak); }
.shell-brand { display: inline-flex; align-items: center; gap: var(--pad-xsmall); color: var(--color-brand); font-weight: 600; text-decoration: none; }
.shell-brand:focus { outline: 2px solid var(--color-focus); }
.shell-icon { width: 24px; height: 24px; }
",
    );

    for size in Size::ALL {
        let _ = writeln!(
            css,
            ".pad-h-{size} {{ padding-left: var(--pad-{size}); padding-right: var(--pad-{size}); }}"
        );
        let _ = writeln!(
            css,
            ".pad-v-{size} {{ padding-top: var(--pad-{size}); padding-bottom: var(--pad-{size}); }}"
        );
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_color_tokens_as_custom_properties() {
        let css = stylesheet(&Theme::hpe());
        assert!(css.starts_with("/* theme: hpe */"));
        assert!(css.contains("--color-brand: #01a982;"));
        assert!(css.contains("--color-background-front: #f7f7f7;"));
    }

    #[test]
    fn spacing_scale_follows_theme() {
        let mut theme = Theme::base();
        theme.spacing.medium = 30;
        let css = stylesheet(&theme);
        assert!(css.contains("--pad-medium: 30px;"));
        assert!(css.contains("--pad-none: 0px;"));
    }

    #[test]
    fn defines_pad_classes_for_every_size() {
        let css = stylesheet(&Theme::dark());
        for size in Size::ALL {
            assert!(css.contains(&format!(".pad-h-{size} {{")), "missing pad-h-{size}");
            assert!(css.contains(&format!(".pad-v-{size} {{")), "missing pad-v-{size}");
        }
    }

    #[test]
    fn same_theme_same_stylesheet() {
        assert_eq!(stylesheet(&Theme::hpe()), stylesheet(&Theme::hpe()));
        assert_ne!(stylesheet(&Theme::hpe()), stylesheet(&Theme::dark()));
    }
}
