use super::*;

#[test]
fn theme_declares_expected_color_tokens() {
    assert_eq!(THEME.color("border"), Some("oklch(0.922 0 0)"));
    assert_eq!(THEME.color("ring"), Some("oklch(0.708 0 0)"));
    assert_eq!(THEME.color("background"), Some("oklch(1 0 0)"));
    assert_eq!(THEME.color("foreground"), Some("oklch(0.145 0 0)"));
}

#[test]
fn unknown_color_token_is_none() {
    assert_eq!(THEME.color("accent"), None);
}

#[test]
fn color_token_names_are_unique() {
    let mut names: Vec<_> = THEME.colors.iter().map(|t| t.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), THEME.colors.len());
}

#[test]
fn css_variables_include_every_token() {
    let css = THEME.css_variables();
    assert!(css.starts_with(":root {"));
    assert!(css.ends_with('}'));
    for token in THEME.colors {
        assert!(css.contains(&format!("--{}: {};", token.name, token.value)), "missing {}", token.name);
    }
}

#[test]
fn css_variables_for_empty_theme() {
    let empty = ThemeConfig { content: &[], colors: &[], plugins: &[] };
    assert_eq!(empty.css_variables(), ":root { }");
}

#[test]
fn content_globs_cover_component_sources() {
    assert!(THEME.content.contains(&"./client/src/**/*.rs"));
    assert_eq!(THEME.plugins, &["tailwindcss-animate"]);
}
