/// The macro engine: one stateless resolution pass over a message.
///
/// Wires together word tokenization, macro matching, and the two resolver
/// paths — built-in context values and caller-owned resources.
use rand::RngCore;

use crate::core::matcher::{self, MacroClass};
use crate::core::resolver;
use crate::core::resource::{self, ResourceRegistry};
use crate::core::tokenizer;
use crate::schema::context::ResolutionContext;
use crate::schema::text::TextUnit;

/// Expand any macros found inside a message's tokens, rewriting each
/// token's text in place. Formatting metadata is untouched.
///
/// Unresolved macros stay as literal text; there is no failure path. The
/// pass runs once — replacement text is never re-scanned, so expansion
/// output containing macro-like syntax is emitted verbatim.
pub fn expand_message(
    unit: &mut TextUnit,
    ctx: &ResolutionContext<'_>,
    registry: &dyn ResourceRegistry,
    rng: &mut dyn RngCore,
) {
    for token in unit.tokens.iter_mut() {
        token.text = expand_text(&token.text, ctx, registry, rng);
    }
}

/// Expand macros in a single piece of text.
pub fn expand_text(
    text: &str,
    ctx: &ResolutionContext<'_>,
    registry: &dyn ResourceRegistry,
    rng: &mut dyn RngCore,
) -> String {
    let mut words = tokenizer::split_words(text);
    for word in words.iter_mut() {
        if let Some(expanded) = expand_word(word, ctx, registry, rng) {
            *word = expanded;
        }
    }
    tokenizer::join_words(&words)
}

/// Process one word. `None` means the word carries no macro, or its macro
/// did not resolve; either way the caller leaves the word unchanged.
fn expand_word(
    word: &str,
    ctx: &ResolutionContext<'_>,
    registry: &dyn ResourceRegistry,
    rng: &mut dyn RngCore,
) -> Option<String> {
    let found = matcher::find_macro(word)?;
    let replacement = match found.class {
        MacroClass::Context => resolver::resolve_context(found.token, ctx, rng)?,
        class => resource::resolve_resource(found.symbol, class, registry)?,
    };
    Some(found.splice(word, &replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::{StaticResource, SymbolTable};
    use crate::schema::context::EmptyTextSource;
    use crate::schema::npc::{Gender, NpcRef};
    use crate::schema::text::{TextToken, TokenFormatting};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_ctx(npc: Option<NpcRef>) -> ResolutionContext<'static> {
        ResolutionContext {
            player_name: "Gortwog gro-Nagorm".to_string(),
            player_race: "Orc".to_string(),
            current_region: "Orsinium".to_string(),
            quest_start_date: "12 Hearthfire".to_string(),
            last_npc: npc,
            text_source: &EmptyTextSource,
        }
    }

    fn expand(text: &str, ctx: &ResolutionContext<'_>, registry: &SymbolTable) -> String {
        let mut rng = StdRng::seed_from_u64(42);
        expand_text(text, ctx, registry, &mut rng)
    }

    #[test]
    fn plain_text_passes_through() {
        let ctx = make_ctx(None);
        let registry = SymbolTable::new();
        let text = "Nothing to see here, move along.";
        assert_eq!(expand(text, &ctx, &registry), text);
    }

    #[test]
    fn context_macro_with_trailing_punctuation() {
        let ctx = make_ctx(None);
        let registry = SymbolTable::new();
        assert_eq!(
            expand("Greetings %pcf.", &ctx, &registry),
            "Greetings Gortwog."
        );
    }

    #[test]
    fn resource_macro_expands_through_registry() {
        let ctx = make_ctx(None);
        let mut registry = SymbolTable::new();
        registry.insert(
            "helper",
            Box::new(StaticResource::new().with(MacroClass::Name2, "Brother Martin")),
        );
        assert_eq!(
            expand("__helper_ will assist you.", &ctx, &registry),
            "Brother Martin will assist you."
        );
    }

    #[test]
    fn unresolved_resource_macro_stays_literal() {
        let ctx = make_ctx(None);
        let registry = SymbolTable::new();
        let text = "=#oddsymbol_ awaits.";
        assert_eq!(expand(text, &ctx, &registry), text);
    }

    #[test]
    fn mixed_context_and_resource_macros() {
        let npc = NpcRef::new(Gender::Female, "Mara");
        let ctx = make_ctx(Some(npc));
        let mut registry = SymbolTable::new();
        registry.insert(
            "dung",
            Box::new(StaticResource::new().with(MacroClass::Name1, "Scourg Barrow")),
        );
        assert_eq!(
            expand("%g waits at _dung_ for %pcf.", &ctx, &registry),
            "she waits at Scourg Barrow for Gortwog."
        );
    }

    #[test]
    fn one_macro_per_word() {
        // Second macro in the same word is left as literal text.
        let ctx = make_ctx(None);
        let mut registry = SymbolTable::new();
        registry.insert(
            "a",
            Box::new(StaticResource::new().with(MacroClass::Name1, "Alpha")),
        );
        registry.insert(
            "b",
            Box::new(StaticResource::new().with(MacroClass::Name1, "Beta")),
        );
        assert_eq!(expand("_a_,_b_", &ctx, &registry), "Alpha,_b_");
    }

    #[test]
    fn expansion_output_is_not_rescanned() {
        let ctx = make_ctx(None);
        let mut registry = SymbolTable::new();
        registry.insert(
            "tricky",
            Box::new(StaticResource::new().with(MacroClass::Name1, "%pcn")),
        );
        assert_eq!(expand("_tricky_", &ctx, &registry), "%pcn");
    }

    #[test]
    fn expand_message_rewrites_every_token() {
        let ctx = make_ctx(None);
        let registry = SymbolTable::new();
        let mut rng = StdRng::seed_from_u64(42);

        let mut unit = TextUnit::from_lines(&["Well met, %pcn.", "Safe travels to %reg."]);
        expand_message(&mut unit, &ctx, &registry, &mut rng);

        assert_eq!(unit.tokens[0].text, "Well met, Gortwog gro-Nagorm.");
        assert_eq!(unit.tokens[1].text, "Safe travels to Orsinium.");
    }

    #[test]
    fn expand_message_leaves_formatting_untouched() {
        let ctx = make_ctx(None);
        let registry = SymbolTable::new();
        let mut rng = StdRng::seed_from_u64(42);

        let mut unit = TextUnit {
            tokens: vec![
                TextToken {
                    text: "%ra blood runs true.".to_string(),
                    formatting: TokenFormatting::JustifyCenter,
                },
                TextToken {
                    text: String::new(),
                    formatting: TokenFormatting::NewLine,
                },
            ],
        };
        expand_message(&mut unit, &ctx, &registry, &mut rng);

        assert_eq!(unit.tokens[0].text, "Orc blood runs true.");
        assert_eq!(unit.tokens[0].formatting, TokenFormatting::JustifyCenter);
        assert_eq!(unit.tokens[1].formatting, TokenFormatting::NewLine);
    }
}
