/// Glyph for a dataset icon name. Unknown names fall back to a star.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "users" => "\u{1f465}",
        "layers" => "\u{1f5c2}",
        "calendar" => "\u{1f4c5}",
        "clock" => "\u{1f552}",
        "code" => "\u{2328}",
        "award" => "\u{1f3c5}",
        "trophy" => "\u{1f3c6}",
        "heart" => "\u{2764}",
        "lightbulb" => "\u{1f4a1}",
        "map-pin" => "\u{1f4cd}",
        "mail" => "\u{2709}",
        "phone" => "\u{260e}",
        "play" => "\u{25b6}",
        _ => "\u{2b50}",
    }
}

/// Short badge text for a social platform.
pub fn social_badge(platform: &str) -> &'static str {
    match platform {
        "instagram" => "IG",
        "linkedin" => "in",
        "github" => "GH",
        "twitter" => "X",
        _ => "\u{1f517}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_icons_have_glyphs() {
        for name in ["users", "layers", "calendar", "clock", "award", "heart", "lightbulb"] {
            assert_ne!(glyph(name), glyph("no-such-icon"), "{name}");
        }
    }

    #[test]
    fn every_social_platform_has_a_badge() {
        for platform in ["instagram", "linkedin", "github", "twitter"] {
            assert_ne!(social_badge(platform), social_badge("myspace"));
        }
    }
}
