use serde::{Deserialize, Serialize};

/// Display formatting carried by a token. Opaque to macro expansion —
/// the engine rewrites token text and never touches formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TokenFormatting {
    #[default]
    Text,
    JustifyLeft,
    JustifyCenter,
    NewLine,
}

/// One display token of a message: a text payload plus formatting metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToken {
    pub text: String,
    pub formatting: TokenFormatting,
}

impl TextToken {
    /// A plain text token with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: TokenFormatting::Text,
        }
    }
}

/// One message's worth of display tokens, processed together in a single
/// resolution pass. Owned by the caller's quest or dialogue system; the
/// engine borrows it mutably for the duration of one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    pub tokens: Vec<TextToken>,
}

impl TextUnit {
    /// Build a unit of plain text tokens, one per line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            tokens: lines
                .iter()
                .map(|line| TextToken::new(line.as_ref()))
                .collect(),
        }
    }

    /// Joined text payloads of all tokens, one line each.
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.tokens.iter().map(|t| t.text.as_str()).collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_builds_plain_tokens() {
        let unit = TextUnit::from_lines(&["first line", "second line"]);
        assert_eq!(unit.tokens.len(), 2);
        assert_eq!(unit.tokens[0].text, "first line");
        assert_eq!(unit.tokens[0].formatting, TokenFormatting::Text);
    }

    #[test]
    fn text_joins_lines() {
        let unit = TextUnit::from_lines(&["a", "b"]);
        assert_eq!(unit.text(), "a\nb");
    }

    #[test]
    fn ron_round_trip() {
        let mut unit = TextUnit::from_lines(&["Greetings %pcf."]);
        unit.tokens.push(TextToken {
            text: String::new(),
            formatting: TokenFormatting::NewLine,
        });

        let serialized = ron::to_string(&unit).unwrap();
        let deserialized: TextUnit = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, unit);
    }
}
