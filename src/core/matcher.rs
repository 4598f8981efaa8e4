/// Macro matcher — detects and classifies placeholder tokens inside a word.
///
/// Classification runs an explicit, ordered list of prefix rules; the first
/// rule that matches anywhere in the word wins and no lower-priority rule is
/// consulted afterwards. Longer marker prefixes sit above shorter ones so a
/// word starting with four underscores can never classify as a shallower
/// name macro.
use serde::{Deserialize, Serialize};

/// The syntactic class of a detected macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacroClass {
    /// `____symbol_`
    Name4,
    /// `___symbol_`
    Name3,
    /// `__symbol_`
    Name2,
    /// `_symbol_`
    Name1,
    /// `==symbol_`
    Faction,
    /// `=#symbol_`
    Binding,
    /// `=symbol_`
    Details,
    /// `%symbol` — built-in context value, no closing delimiter.
    Context,
}

/// One detected macro within a word. Transient: created during a single
/// word's processing and discarded once the word has been rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macro<'a> {
    /// Exact matched substring, e.g. `"__symbol_"`.
    pub token: &'a str,
    pub class: MacroClass,
    /// Inner symbol of the macro, used as a lookup key.
    pub symbol: &'a str,
    /// Byte offset of the first macro character within the word.
    pub start: usize,
    /// Byte length of the matched substring.
    pub len: usize,
}

impl Macro<'_> {
    /// Replace the matched span inside `word` with `replacement`, leaving
    /// any characters outside the span (such as trailing punctuation)
    /// untouched.
    pub fn splice(&self, word: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(word.len() + replacement.len());
        out.push_str(&word[..self.start]);
        out.push_str(replacement);
        out.push_str(&word[self.start + self.len..]);
        out
    }
}

/// Rule table in strict priority order: marker prefix, whether a closing
/// underscore is required, resulting class.
const RULES: &[(&str, bool, MacroClass)] = &[
    ("____", true, MacroClass::Name4),
    ("___", true, MacroClass::Name3),
    ("__", true, MacroClass::Name2),
    ("_", true, MacroClass::Name1),
    ("==", true, MacroClass::Faction),
    ("=#", true, MacroClass::Binding),
    ("=", true, MacroClass::Details),
    ("%", false, MacroClass::Context),
];

/// Scan a word for a macro. Only a single macro is matched per word;
/// `None` means the word carries no recognizable macro and must pass
/// through unchanged.
pub fn find_macro(word: &str) -> Option<Macro<'_>> {
    for &(prefix, closed, class) in RULES {
        if let Some(found) = match_rule(word, prefix, closed, class) {
            return Some(found);
        }
    }
    None
}

fn match_rule<'a>(
    word: &'a str,
    prefix: &str,
    closed: bool,
    class: MacroClass,
) -> Option<Macro<'a>> {
    // Closed macros allow dotted symbols; context symbols are plain
    // alphanumeric so a sentence-ending dot stays outside the span.
    let is_symbol_char = |c: char| c.is_ascii_alphanumeric() || (closed && c == '.');

    for (start, _) in word.char_indices() {
        if !word[start..].starts_with(prefix) {
            continue;
        }
        let sym_start = start + prefix.len();
        let sym_len = word[sym_start..]
            .find(|c| !is_symbol_char(c))
            .unwrap_or(word.len() - sym_start);
        if sym_len == 0 {
            continue;
        }
        let sym_end = sym_start + sym_len;

        // Span runs through the closing underscore where one is required,
        // excluding adjacent characters like a trailing full stop.
        let len = if closed {
            if !word[sym_end..].starts_with('_') {
                continue;
            }
            sym_end + 1 - start
        } else {
            sym_end - start
        };

        return Some(Macro {
            token: &word[start..start + len],
            class,
            symbol: &word[sym_start..sym_end],
            start,
            len,
        });
    }
    None
}
