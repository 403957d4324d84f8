//! Fixed word lists for the random word tool.

use rand::Rng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const EASY: &[&str] = &[
    "happy", "house", "water", "light", "music", "friend", "smile", "peace", "dream", "heart",
    "love", "hope", "time", "life", "world", "nature",
];

const MEDIUM: &[&str] = &[
    "serendipity",
    "eloquent",
    "resilient",
    "magnificent",
    "innovative",
    "perspective",
    "authentic",
    "curiosity",
    "adventure",
    "harmony",
    "wisdom",
    "courage",
    "gratitude",
    "compassion",
    "creativity",
    "balance",
];

const HARD: &[&str] = &[
    "ephemeral",
    "ubiquitous",
    "perspicacious",
    "surreptitious",
    "magnanimous",
    "obfuscate",
    "ameliorate",
    "propensity",
    "vicissitude",
    "perspicuity",
    "sesquipedalian",
    "grandiloquent",
    "pusillanimous",
    "truculent",
    "recalcitrant",
];

/// Difficulty tier of the word of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Everyday vocabulary
    Easy,
    /// Richer but common vocabulary
    #[default]
    Medium,
    /// Rare and literary vocabulary
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The fixed word list for this tier.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
        }
    }

    /// Pick a word uniformly at random from this tier.
    pub fn pick_word<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        // Tiers are never empty, so `choose` always returns a word.
        self.words().choose(rng).copied().unwrap_or_default()
    }

    /// [`pick_word`](Self::pick_word) with the thread-local generator.
    pub fn random_word(self) -> &'static str {
        self.pick_word(&mut rand::thread_rng())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
