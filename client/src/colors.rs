use cloudsi_shared::colors::palette_index;

pub const SKY: &str = "#87ceeb";
pub const SKY_LIGHT: &str = "#e0f2fe";
pub const OCEAN: &str = "#0369a1";
pub const INK: &str = "#1e293b";
pub const SLATE: &str = "#64748b";

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Background for the initials placeholder, picked from the member id so
/// each card keeps its color across renders.
pub fn avatar_tint(id: &str) -> &'static str {
    const TINTS: [&str; 4] = [SKY, OCEAN, "#38bdf8", "#0ea5e9"];
    TINTS[palette_index(id, TINTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_format() {
        assert_eq!(rgba_css(135, 206, 235, 0.6), "rgba(135,206,235,0.6)");
    }

    #[test]
    fn avatar_tint_is_stable() {
        assert_eq!(avatar_tint("7"), avatar_tint("7"));
        assert_eq!(avatar_tint(""), SKY);
        assert_eq!(avatar_tint("123456789"), "#38bdf8");
    }
}
