use serde::{Deserialize, Serialize};

/// Vertical extent of a line of text relative to its baseline.
///
/// Both values are magnitudes: `ascent` rows above the baseline and
/// `descent` rows below it. A terminal cell glyph is one row tall and sits
/// entirely above its baseline, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetrics {
    #[serde(default = "default_ascent")]
    pub ascent: u16,
    #[serde(default)]
    pub descent: u16,
}

fn default_ascent() -> u16 {
    1
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            ascent: default_ascent(),
            descent: 0,
        }
    }
}

impl FontMetrics {
    pub fn new(ascent: u16, descent: u16) -> Self {
        Self { ascent, descent }
    }

    pub fn line_height(&self) -> u16 {
        self.ascent.saturating_add(self.descent)
    }

    /// Baseline offset that centers the ascent + descent envelope within
    /// `height`: `(height - (ascent + descent)) / 2 + ascent`.
    pub fn baseline(&self, height: u16) -> u16 {
        height.saturating_add(self.ascent).saturating_sub(self.descent) / 2
    }

    /// First row of the glyph envelope, i.e. the row a terminal draws on.
    pub fn glyph_top(&self, height: u16) -> u16 {
        self.baseline(height).saturating_sub(self.ascent)
    }
}

#[cfg(test)]
mod tests {
    use super::FontMetrics;

    #[test]
    fn single_row_glyph_is_centered() {
        let m = FontMetrics::default();
        assert_eq!(m.glyph_top(1), 0);
        assert_eq!(m.glyph_top(3), 1);
        assert_eq!(m.glyph_top(5), 2);
        // Even heights round towards the top.
        assert_eq!(m.glyph_top(4), 1);
    }

    #[test]
    fn baseline_matches_envelope_formula() {
        let m = FontMetrics::new(3, 1);
        for h in 4..20u16 {
            assert_eq!(m.baseline(h), (h - m.line_height()) / 2 + m.ascent);
        }
    }

    #[test]
    fn short_heights_do_not_underflow() {
        let m = FontMetrics::new(2, 5);
        assert_eq!(m.baseline(0), 0);
        assert_eq!(m.glyph_top(0), 0);
        assert_eq!(m.glyph_top(2), 0);
    }
}
