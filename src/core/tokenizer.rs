/// Word tokenizer — splits token text into words for macro scanning and
/// reassembles them after substitution.

/// Split text into words on single spaces.
///
/// Empty words are kept, so runs of spaces survive a split/join round trip
/// even though only single-space separation is guaranteed by contract.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}

/// Reassemble words into final text with exactly one space between
/// consecutive words and none at the ends.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_spaces() {
        let words = split_words("one two three");
        assert_eq!(words, vec!["one", "two", "three"]);
    }

    #[test]
    fn split_single_word() {
        assert_eq!(split_words("alone"), vec!["alone"]);
    }

    #[test]
    fn split_empty_text() {
        assert_eq!(split_words(""), vec![""]);
    }

    #[test]
    fn join_inserts_single_spaces() {
        let words = vec!["one".to_string(), "two".to_string()];
        assert_eq!(join_words(&words), "one two");
    }

    #[test]
    fn round_trip_normalized_text() {
        let text = "It is a fine day in the Dragontail Mountains.";
        assert_eq!(join_words(&split_words(text)), text);
    }

    #[test]
    fn round_trip_preserves_consecutive_spaces() {
        // Empty words stand in for the extra separators.
        let text = "gap  here";
        assert_eq!(join_words(&split_words(text)), text);
    }
}
