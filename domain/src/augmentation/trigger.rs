//! Reply classification for search augmentation.

/// Phrases that mark a reply as insufficient, matched as lower-case substrings.
///
/// The list is a coarse heuristic. A reply that merely mentions one of these
/// phrases still triggers a search, and a refusal worded differently does not.
pub const TRIGGER_PHRASES: [&str; 16] = [
    "search:",
    "i don't have access",
    "i do not have access",
    "i'm unable to browse",
    "i can't browse",
    "i cannot browse",
    "unable to access",
    "there is no information",
    "no information available",
    "no knowledge of",
    "unable to provide",
    "can't find",
    "don't know",
    "cannot retrieve",
    "sorry, i don't have",
    "no data available",
];

/// Returns `true` if the lower-cased reply contains any trigger phrase.
pub fn should_augment(reply: &str) -> bool {
    if reply.is_empty() {
        return false;
    }
    let lower = reply.to_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Like [`should_augment`], treating a missing reply as sufficient.
pub fn should_augment_opt(reply: Option<&str>) -> bool {
    reply.is_some_and(should_augment)
}
