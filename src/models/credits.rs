use shade_palette::Palette;

/// A palette together with its attribution.
///
/// Attribution only exists for palettes fetched from a remote source and
/// travels with the palette into code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteWithCredits {
    pub palette: Palette,
    pub name: Option<String>,
    pub author: Option<String>,
}

impl PaletteWithCredits {
    /// Wrap a palette without attribution
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            name: None,
            author: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Human-readable attribution line, e.g. "Endesga 32 by Endesga"
    ///
    /// The result is always a single line: whitespace and control
    /// characters collapse to single spaces and trailing backslashes are
    /// dropped, so remote text cannot leave a `//` comment.
    pub fn attribution(&self) -> Option<String> {
        let name = self.name.as_deref().and_then(single_line);
        let author = self.author.as_deref().and_then(single_line);

        match (name, author) {
            (Some(name), Some(author)) => Some(format!("{name} by {author}")),
            (Some(name), None) => Some(name),
            (None, Some(author)) => Some(format!("by {author}")),
            (None, None) => None,
        }
    }
}

/// Flatten free text to one comment-safe line, `None` if nothing is left
fn single_line(text: &str) -> Option<String> {
    let spaced: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let line = joined.trim_end_matches(|c: char| c == '\\' || c.is_whitespace());

    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::from_hex(&["#000", "#fff"]).unwrap()
    }

    #[test]
    fn test_attribution_variants() {
        let plain = PaletteWithCredits::new(palette());
        assert_eq!(plain.attribution(), None);

        let named = PaletteWithCredits::new(palette()).with_name("Pico-8");
        assert_eq!(named.attribution(), Some("Pico-8".to_string()));

        let authored = PaletteWithCredits::new(palette()).with_author("Lexaloffle");
        assert_eq!(authored.attribution(), Some("by Lexaloffle".to_string()));

        let both = PaletteWithCredits::new(palette())
            .with_name("Pico-8")
            .with_author("Lexaloffle");
        assert_eq!(both.attribution(), Some("Pico-8 by Lexaloffle".to_string()));
    }

    #[test]
    fn test_blank_credits_are_ignored() {
        let blank = PaletteWithCredits::new(palette())
            .with_name("  ")
            .with_author("");
        assert_eq!(blank.attribution(), None);
    }

    #[test]
    fn test_multiline_credits_become_one_line() {
        let credits = PaletteWithCredits::new(palette())
            .with_name("Evil\nconst int colorNum = 99;")
            .with_author("x\r\n\tauthor");
        assert_eq!(
            credits.attribution(),
            Some("Evil const int colorNum = 99; by x author".to_string())
        );
    }

    #[test]
    fn test_control_chars_and_trailing_backslash_dropped() {
        let credits = PaletteWithCredits::new(palette())
            .with_name("Name\u{0}\u{1b}[1m")
            .with_author("Someone \\\\");
        assert_eq!(
            credits.attribution(),
            Some("Name [1m by Someone".to_string())
        );

        let only_backslash = PaletteWithCredits::new(palette()).with_name("\\");
        assert_eq!(only_backslash.attribution(), None);
    }
}
