use serde::{Deserialize, Serialize};

/// NPC gender, used to select pronoun forms for `%g`-family macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Gender {
    /// he/him/himself/his — also the fallback when no NPC has been referenced.
    #[default]
    Male,
    /// she/her/herself/hers
    Female,
}

impl Gender {
    /// Nominative/subject form: "he", "she".
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Male => "he",
            Self::Female => "she",
        }
    }

    /// Accusative/object form: "him", "her".
    pub fn object(&self) -> &'static str {
        match self {
            Self::Male => "him",
            Self::Female => "her",
        }
    }

    /// Reflexive form: "himself", "herself".
    pub fn reflexive(&self) -> &'static str {
        match self {
            Self::Male => "himself",
            Self::Female => "herself",
        }
    }

    /// Possessive form: "his", "hers".
    pub fn possessive(&self) -> &'static str {
        match self {
            Self::Male => "his",
            Self::Female => "hers",
        }
    }
}

/// Snapshot of the last NPC referenced by the running quest. Pronoun and
/// deity macros resolve against this; with no snapshot they fall back to
/// male forms and the default god name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcRef {
    pub gender: Gender,
    pub god: String,
}

impl NpcRef {
    pub fn new(gender: Gender, god: impl Into<String>) -> Self {
        Self {
            gender,
            god: god.into(),
        }
    }
}
