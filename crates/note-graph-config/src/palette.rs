use std::collections::BTreeMap;

use crate::ConfigError;

/// Palette name to colour name to colour string.
pub type Palettes = BTreeMap<String, BTreeMap<String, String>>;

/// The built-in palettes, as shipped.
pub const DEFAULT_PALETTES: &str = include_str!("../resources/palettes.toml");

/// Palette names that would read like configuration sections.
pub const RESERVED_PALETTE_NAMES: [&str; 5] = ["graph", "tag", "note", "tag_link", "note_link"];

pub fn builtin_palettes() -> Result<Palettes, ConfigError> {
    toml::from_str(DEFAULT_PALETTES).map_err(|source| ConfigError::DefaultsParseError {
        file: "palettes.toml",
        source,
    })
}

/// Resolves a `palette.name` colour reference.
///
/// Anything that is not a reference (`"white"`, `"#ff0000"`, an HSV triple
/// such as `"0.6 0.2 1.0"`) is returned unchanged. References are looked up
/// in `user` first, then in `builtin`.
pub fn resolve_color(spec: &str, user: &Palettes, builtin: &Palettes) -> Result<String, ConfigError> {
    let Some((palette, color)) = spec.split_once('.') else {
        return Ok(spec.to_string());
    };
    if !is_name(palette) || !is_name(color) {
        return Ok(spec.to_string());
    }
    if RESERVED_PALETTE_NAMES.contains(&palette) {
        return Err(ConfigError::ReservedPaletteName {
            palette: palette.to_string(),
        });
    }

    let layers: Vec<_> = [user.get(palette), builtin.get(palette)]
        .into_iter()
        .flatten()
        .collect();
    if layers.is_empty() {
        return Err(ConfigError::UnknownPalette {
            palette: palette.to_string(),
        });
    }

    layers
        .iter()
        .find_map(|colors| colors.get(color))
        .cloned()
        .ok_or_else(|| ConfigError::UnknownColor {
            palette: palette.to_string(),
            color: color.to_string(),
        })
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user_palettes() -> Palettes {
        toml::from_str(
            r##"
[mine]
accent = "#123456"

[solarized]
yellow = "gold"
"##,
        )
        .unwrap()
    }

    #[rstest]
    #[case("white", "white")]
    #[case("#ff0000", "#ff0000")]
    #[case("0.650 0.200 1.000", "0.650 0.200 1.000")]
    #[case("mine.accent", "#123456")]
    #[case("solarized.yellow", "gold")]
    #[case("solarized.blue", "#268bd2")]
    #[case("nord.frost1", "#88c0d0")]
    fn resolves_colors(#[case] spec: &str, #[case] expected: &str) {
        let builtin = builtin_palettes().unwrap();
        assert_eq!(resolve_color(spec, &user_palettes(), &builtin).unwrap(), expected);
    }

    #[rstest]
    #[case("graph.bgcolor")]
    #[case("tag_link.red")]
    fn reserved_names_are_rejected(#[case] spec: &str) {
        let err = resolve_color(spec, &Palettes::new(), &Palettes::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ReservedPaletteName { .. }));
    }

    #[test]
    fn unknown_palette() {
        let builtin = builtin_palettes().unwrap();
        let err = resolve_color("dracula.pink", &user_palettes(), &builtin).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPalette { ref palette } if palette == "dracula"));
    }

    #[test]
    fn unknown_color() {
        let builtin = builtin_palettes().unwrap();
        let err = resolve_color("mine.teal", &user_palettes(), &builtin).unwrap_err();
        assert_eq!(err.to_string(), "Colour teal is not available in palette mine");
    }

    #[test]
    fn builtin_palettes_parse() {
        let builtin = builtin_palettes().unwrap();
        assert!(builtin.contains_key("solarized"));
        assert!(builtin.contains_key("nord"));
        assert!(
            builtin
                .keys()
                .all(|name| !RESERVED_PALETTE_NAMES.contains(&name.as_str()))
        );
    }
}
