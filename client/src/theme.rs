//! Design tokens and utility-CSS build configuration.
//!
//! The token table is compile-time data: the root layout renders it once as
//! CSS custom properties and nothing mutates it afterwards. `content` and
//! `plugins` feed the stylesheet build (`style/main.css`), which scans the
//! listed sources, relative to the workspace root, for class names.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt::Write as _;

/// A named color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Token name, used as `--{name}` and as the utility color name.
    pub name: &'static str,
    /// CSS color value.
    pub value: &'static str,
}

/// Static styling configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Source globs scanned for utility class names.
    pub content: &'static [&'static str],
    /// Extended color tokens.
    pub colors: &'static [ColorToken],
    /// Stylesheet build plugins.
    pub plugins: &'static [&'static str],
}

/// The application's theme.
pub const THEME: ThemeConfig = ThemeConfig {
    content: &["./client/src/**/*.rs", "./server/src/**/*.rs", "./style/**/*.css"],
    colors: &[
        ColorToken { name: "border", value: "oklch(0.922 0 0)" },
        ColorToken { name: "ring", value: "oklch(0.708 0 0)" },
        ColorToken { name: "background", value: "oklch(1 0 0)" },
        ColorToken { name: "foreground", value: "oklch(0.145 0 0)" },
    ],
    plugins: &["tailwindcss-animate"],
};

impl ThemeConfig {
    /// Look up a color token by name.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&'static str> {
        self.colors.iter().find(|token| token.name == name).map(|token| token.value)
    }

    /// Render the color tokens as a `:root` block of CSS custom properties.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {");
        for token in self.colors {
            let _ = write!(css, " --{}: {};", token.name, token.value);
        }
        css.push_str(" }");
        css
    }
}
