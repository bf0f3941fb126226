//! Relevance scoring between a query and one record's text.
//!
//! Tiers, checked in order after lower-casing and trimming both sides:
//! equal (100), prefix (80), substring (60), word overlap (at most 40).

pub const EXACT_SCORE: f64 = 100.0;
pub const PREFIX_SCORE: f64 = 80.0;
pub const SUBSTRING_SCORE: f64 = 60.0;
pub const WORD_OVERLAP_MAX_SCORE: f64 = 40.0;

/// Lower-cases and trims `text`.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Scores `text` against `query`; `0.0` means no match.
pub fn relevance(query: &str, text: &str) -> f64 {
    let query = normalize(query);
    let text = normalize(text);
    relevance_normalized(&query, &text)
}

/// Same as [`relevance`] for inputs already passed through [`normalize`].
pub fn relevance_normalized(query: &str, text: &str) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    if text == query {
        return EXACT_SCORE;
    }
    if text.starts_with(query) {
        return PREFIX_SCORE;
    }
    if text.contains(query) {
        return SUBSTRING_SCORE;
    }
    word_overlap(query, text)
}

/// Counts (query word, text word) pairs where either contains the other.
///
/// The count is scaled by the query word count and capped so a record with
/// many partial hits never outranks a substring match.
fn word_overlap(query: &str, text: &str) -> f64 {
    let query_words = query.split_whitespace().collect::<Vec<_>>();
    if query_words.is_empty() {
        return 0.0;
    }
    let text_words = text.split_whitespace().collect::<Vec<_>>();

    let matches = query_words
        .iter()
        .flat_map(|query_word| {
            text_words.iter().filter(move |text_word| {
                text_word.contains(*query_word) || query_word.contains(**text_word)
            })
        })
        .count();

    if matches == 0 {
        return 0.0;
    }
    let scaled = (matches as f64 / query_words.len() as f64) * WORD_OVERLAP_MAX_SCORE;
    scaled.min(WORD_OVERLAP_MAX_SCORE)
}
