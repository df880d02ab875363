use regex::Regex;

use crate::domain::DomainError;

/// Default vague-result vocabulary. The mix of English and Spanish matches
/// the languages the generator is asked to work in.
const DEFAULT_VAGUE_WORDS: &[&str] = &[
    "works",
    "correct(ly)?",
    "properly",
    "fine",
    "good",
    "ok",
    "okay",
    "done",
    "success",
    "funciona",
    "correcto",
    "bien",
];

/// Default generic-precondition phrases, matched against the whole field.
const DEFAULT_GENERIC_PRECONDITIONS: &[&str] = &[
    "the user is (logged in|on the app|in the system)",
    "n/?a",
    "none",
    "ninguna?",
    "no aplica",
];

/// Compiled word-list patterns for the quality scorer.
///
/// The lists are configuration, not literals: entries are regex fragments
/// joined into one case-insensitive pattern, so deployments can tune the
/// vocabulary (or its language) without touching the scorer.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    vague: Regex,
    generic_preconditions: Regex,
}

impl ScoringConfig {
    /// Build from configured fragments; empty lists fall back to the
    /// built-in defaults.
    pub fn from_word_lists(
        vague_words: &[String],
        generic_preconditions: &[String],
    ) -> Result<Self, DomainError> {
        let vague = join_fragments(vague_words, DEFAULT_VAGUE_WORDS);
        let generic = join_fragments(generic_preconditions, DEFAULT_GENERIC_PRECONDITIONS);

        Ok(Self {
            vague: compile(&format!(r"(?i)\b(?:{vague})\b"))?,
            generic_preconditions: compile(&format!(r"(?i)^(?:{generic})$"))?,
        })
    }

    /// Number of vague-word matches in an expected result
    pub fn vague_matches(&self, text: &str) -> usize {
        self.vague.find_iter(text).count()
    }

    /// Whether a (trimmed) precondition is one of the generic phrases
    pub fn is_generic_precondition(&self, text: &str) -> bool {
        self.generic_preconditions.is_match(text)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::from_word_lists(&[], &[]).expect("built-in scoring patterns are valid")
    }
}

fn join_fragments(configured: &[String], defaults: &[&str]) -> String {
    if configured.is_empty() {
        defaults.join("|")
    } else {
        configured.join("|")
    }
}

fn compile(pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern)
        .map_err(|e| DomainError::configuration(format!("invalid scoring word list: {e}")))
}
