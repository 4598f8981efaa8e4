/// Context resolver — the closed table of built-in `%` macro substitutions.
///
/// Every entry computes its replacement from the caller-supplied
/// [`ResolutionContext`]; nothing here reaches into ambient game state.
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::schema::context::ResolutionContext;
use crate::schema::npc::Gender;

/// God name used by `%god` when no NPC has been referenced yet.
pub const DEFAULT_GOD: &str = "Arkay";

/// Guild title used for every `%pct` until guild ranks are modeled.
pub const PLACEHOLDER_TITLE: &str = "Apprentice";

/// Localized oath tables, keyed by speaker race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OathCategory {
    Nord,
    Khajiit,
    Redguard,
    Breton,
    Argonian,
    Bosmer,
    Altmer,
    Dunmer,
}

impl OathCategory {
    /// Id of the text table holding this race's oath lines.
    pub fn text_id(self) -> u32 {
        match self {
            Self::Nord => 201,
            Self::Khajiit => 202,
            Self::Redguard => 203,
            Self::Breton => 204,
            Self::Argonian => 205,
            Self::Bosmer => 206,
            Self::Altmer => 207,
            Self::Dunmer => 208,
        }
    }
}

// TODO: select the oath table from the speaking NPC's race once NPC race
// reaches the resolution context. Every speaker swears like a Nord for now.
pub const FALLBACK_OATH_CATEGORY: OathCategory = OathCategory::Nord;

/// Resolve a built-in context macro token (e.g. `"%pcn"`).
///
/// Returns `None` for tokens outside the closed table; the word then
/// passes through unchanged. The set is not extensible at runtime.
pub fn resolve_context(
    token: &str,
    ctx: &ResolutionContext<'_>,
    rng: &mut dyn RngCore,
) -> Option<String> {
    match token {
        // Player's full name
        "%pcn" => Some(ctx.player_name.clone()),
        // Player's first name
        "%pcf" => Some(first_name(&ctx.player_name)),
        // Quest start date
        "%qdt" => Some(ctx.quest_start_date.clone()),
        // Player race
        "%ra" => Some(ctx.player_race.clone()),
        "%pct" => Some(PLACEHOLDER_TITLE.to_string()),
        // A randomly selected oath line
        "%oth" => ctx
            .text_source
            .random_text(FALLBACK_OATH_CATEGORY.text_id(), rng),
        "%reg" => Some(ctx.current_region.clone()),
        // God of the last NPC referenced
        "%god" => Some(
            ctx.last_npc
                .as_ref()
                .map(|npc| npc.god.clone())
                .unwrap_or_else(|| DEFAULT_GOD.to_string()),
        ),
        // He/She
        "%g" | "%g1" => Some(npc_gender(ctx).subject().to_string()),
        // Him/Her
        "%g2" => Some(npc_gender(ctx).object().to_string()),
        // Himself/Herself
        "%g2self" => Some(npc_gender(ctx).reflexive().to_string()),
        // His/Hers
        "%g3" => Some(npc_gender(ctx).possessive().to_string()),
        _ => None,
    }
}

fn npc_gender(ctx: &ResolutionContext<'_>) -> Gender {
    ctx.last_npc
        .as_ref()
        .map(|npc| npc.gender)
        .unwrap_or_default()
}

fn first_name(full_name: &str) -> String {
    full_name.split(' ').next().unwrap_or(full_name).to_string()
}
