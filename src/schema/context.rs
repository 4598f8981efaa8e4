/// Resolution context — the read-only game-state snapshot supplied by the
/// caller for one macro expansion pass.
use rand::RngCore;

use super::npc::NpcRef;

/// A source of random localized text lines keyed by an integer table id.
///
/// Backed by the game's text database in production; `%oth` resolves
/// through this. A missing table is a silent non-result, not an error.
pub trait TextSource {
    fn random_text(&self, id: u32, rng: &mut dyn RngCore) -> Option<String>;
}

/// A text source with no tables. Every lookup resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTextSource;

impl TextSource for EmptyTextSource {
    fn random_text(&self, _id: u32, _rng: &mut dyn RngCore) -> Option<String> {
        None
    }
}

/// Game state passed by the caller to the macro engine. Built fresh (or
/// referenced read-only) per call; the engine holds no state of its own
/// across passes.
pub struct ResolutionContext<'a> {
    /// Player's full display name.
    pub player_name: String,
    /// Player's race display name.
    pub player_race: String,
    /// Name of the region the player is currently in.
    pub current_region: String,
    /// Quest start time, already formatted as a date string by the
    /// caller's calendar system.
    pub quest_start_date: String,
    /// Last NPC referenced by the quest, if any.
    pub last_npc: Option<NpcRef>,
    /// Localized text lookup for randomly selected lines.
    pub text_source: &'a dyn TextSource,
}
