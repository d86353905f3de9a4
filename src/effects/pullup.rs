#[derive(Debug, Clone, PartialEq)]
pub struct PulledLetter {
    pub glyph: String,
    /// Seconds before this letter starts rising.
    pub delay: f64,
}

/// Splits `text` into letters that rise one after another, `step` seconds apart,
/// starting `base` seconds in. Spaces become non-breaking so they keep their width.
pub fn letters(text: &str, base: f64, step: f64) -> Vec<PulledLetter> {
    text.chars()
        .enumerate()
        .map(|(i, c)| PulledLetter {
            glyph: if c == ' ' {
                '\u{a0}'.to_string()
            } else {
                c.to_string()
            },
            delay: base + step * i as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let out = letters("Hi, I'm", 0.0, 0.05);
        assert_eq!(out.len(), 7);
        assert_eq!(out[3].glyph, "\u{a0}");
        assert_eq!(out[0].delay, 0.0);
        assert!((out[6].delay - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_base_offset_and_unicode() {
        let out = letters("é🚀", 1.0, 0.03);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].glyph, "🚀");
        assert!((out[1].delay - 1.03).abs() < 1e-12);
    }
}
