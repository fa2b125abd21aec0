//! Prompt construction for the text-to-audio provider
//!
//! Maps the structured request onto a descriptive natural-language prompt.
//! Pure and deterministic: output depends only on the input and the fixed
//! translation tables below.

use crate::types::GenerationRequest;

/// Lyrics up to this length are embedded verbatim as the theme clause;
/// longer lyrics are reduced to extracted keywords.
const LYRICS_INLINE_LIMIT: usize = 200;

/// Keywords kept from long lyrics
const MAX_KEYWORDS: usize = 5;

/// Tokens this short carry too little meaning to keep
const MIN_KEYWORD_LEN: usize = 4;

/// Style descriptors keyed by the enum-like value the form submits
const STYLE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("pop", "upbeat pop"),
    ("rock", "energetic rock"),
    ("jazz", "smooth jazz"),
    ("classical", "orchestral classical"),
    ("electronic", "electronic dance"),
    ("hip-hop", "hip hop beats"),
    ("folk", "acoustic folk"),
    ("blues", "soulful blues"),
    ("country", "country music"),
    ("r&b", "smooth R&B"),
];

const TEMPO_DESCRIPTIONS: &[(&str, &str)] = &[
    ("slow", "slow tempo"),
    ("medium", "medium tempo"),
    ("fast", "fast tempo"),
];

const MOOD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("happy", "uplifting and joyful"),
    ("sad", "melancholic and emotional"),
    ("energetic", "high energy and dynamic"),
    ("calm", "peaceful and relaxing"),
    ("romantic", "romantic and tender"),
    ("epic", "epic and cinematic"),
];

/// Common words that carry no thematic signal
const STOP_WORDS: &[&str] = &[
    "the", "and", "but", "for", "are", "with", "this", "that", "from", "they", "know", "want", "been", "good", "much",
    "some", "time", "very", "when", "come", "here", "just", "like", "long", "make", "many", "over", "such", "take",
    "than", "them", "well", "were",
];

/// Build the provider prompt from the structured request
///
/// Unknown style/tempo/mood values pass through unchanged so users can
/// type free-form descriptions into the form fields.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let style = describe(STYLE_DESCRIPTIONS, &request.style);
    let tempo = describe(TEMPO_DESCRIPTIONS, &request.tempo);
    let mood = describe(MOOD_DESCRIPTIONS, &request.mood);

    let mut prompt = format!("{style} music, {tempo}, {mood}");

    // Character count, not bytes: multibyte lyrics must not lose the
    // verbatim path early
    if request.lyrics.chars().count() <= LYRICS_INLINE_LIMIT {
        prompt.push_str(", with theme about: ");
        prompt.push_str(&request.lyrics);
    } else {
        prompt.push_str(", with theme about: ");
        prompt.push_str(&extract_keywords(&request.lyrics).join(", "));
    }

    prompt
}

/// Case-insensitive table lookup, falling back to the raw value
fn describe<'a>(table: &'a [(&str, &str)], value: &'a str) -> &'a str {
    let lowered = value.to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == lowered)
        .map_or(value, |&(_, description)| description)
}

/// Naive keyword extraction for long lyrics
///
/// Lowercases, strips punctuation, splits on whitespace, drops short
/// tokens and stop words, and keeps the first [`MAX_KEYWORDS`] survivors
/// in original order.
fn extract_keywords(lyrics: &str) -> Vec<String> {
    let normalized: String = lyrics
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .filter(|word| !STOP_WORDS.contains(word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
