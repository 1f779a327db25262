//! Partial fuzzy ratio: best-aligned substring similarity scaled 0-100.
//!
//! Rewards a short phrase appearing near-verbatim anywhere inside a much
//! longer text, unlike whole-string similarity which would punish the length
//! difference. Built on `strsim` Levenshtein distance over character windows.

use std::collections::HashSet;

/// Scores how closely `phrase` matches its best-aligned substring of `text`.
///
/// The score is `round(100 * (1 - d / m))` where `d` is the Levenshtein
/// distance between the phrase and the best character window of phrase
/// length `m`. Identical strings score 100; disjoint alphabets score near 0;
/// the score never increases as edits are introduced between the phrase and
/// its best-aligned window.
///
/// Both inputs are expected to be lowercased already; this function does no
/// normalization of its own.
#[must_use]
pub fn partial_ratio(phrase: &str, text: &str) -> u8 {
    if phrase.is_empty() || text.is_empty() {
        return 0;
    }

    let phrase_len = phrase.chars().count();
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let text_len = boundaries.len() - 1;

    if text_len <= phrase_len {
        let distance = strsim::levenshtein(phrase, text);
        return scale(distance, phrase_len.max(text_len));
    }

    // Sliding count of window characters that occur anywhere in the phrase.
    // The Levenshtein distance over a window of phrase length is at least
    // `phrase_len - shared`, so windows whose score ceiling cannot beat the
    // running best are skipped without computing the distance.
    let phrase_chars: HashSet<char> = phrase.chars().collect();
    let text_chars: Vec<char> = text.chars().collect();
    let mut shared = text_chars[..phrase_len]
        .iter()
        .filter(|c| phrase_chars.contains(c))
        .count();

    let mut best = 0u8;
    for start in 0..=(text_len - phrase_len) {
        if start > 0 {
            if phrase_chars.contains(&text_chars[start - 1]) {
                shared -= 1;
            }
            if phrase_chars.contains(&text_chars[start + phrase_len - 1]) {
                shared += 1;
            }
        }
        if scale(phrase_len - shared, phrase_len) <= best {
            continue;
        }

        let window = &text[boundaries[start]..boundaries[start + phrase_len]];
        let distance = strsim::levenshtein(phrase, window);
        let score = scale(distance, phrase_len);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(distance: usize, length: usize) -> u8 {
    if length == 0 {
        return 0;
    }
    let ratio = 1.0 - (distance as f64 / length as f64);
    (ratio.max(0.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(partial_ratio("murder", "murder"), 100);
    }

    #[test]
    fn test_phrase_embedded_in_longer_text_scores_100() {
        assert_eq!(
            partial_ratio("graphic violence", "a tale of graphic violence in a small town"),
            100
        );
    }

    #[test]
    fn test_disjoint_alphabets_score_near_zero() {
        assert!(partial_ratio("abcdef", "zzzzzzzzzzzz") <= 10);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(partial_ratio("", "some text"), 0);
        assert_eq!(partial_ratio("phrase", ""), 0);
        assert_eq!(partial_ratio("", ""), 0);
    }

    #[test]
    fn test_score_non_increasing_under_edits() {
        // One edit into the best-aligned window must not raise the score.
        let clean = partial_ratio("slaughter", "the slaughter began at dawn");
        let one_edit = partial_ratio("slaughter", "the sloughter began at dawn");
        let two_edits = partial_ratio("slaughter", "the slaugter begen at dawn");
        assert!(clean >= one_edit);
        assert!(one_edit >= two_edits);
    }

    #[test]
    fn test_near_match_crosses_default_threshold() {
        // 9-char phrase, 1 edit: 100 * (1 - 1/9) ~ 89, above 80.
        assert!(partial_ratio("slaughter", "a sloughter of innocents") > 80);
    }

    #[test]
    fn test_clear_non_match_stays_below_default_threshold() {
        assert!(partial_ratio("homicide", "friendship and baking cookies") <= 80);
    }

    #[test]
    fn test_text_shorter_than_phrase_compares_whole_text() {
        // Distance is 3 over length 7 -> 57.
        assert!(partial_ratio("murders", "murd") < 80);
        assert_eq!(partial_ratio("cat", "cat"), 100);
    }

    #[test]
    fn test_near_match_buried_in_long_text_is_found() {
        // The skipped-window fast path must never hide a scoring window.
        let filler = "xxxx yyyy zzzz ".repeat(200);
        let text = format!("{filler}a sloughter of innocents {filler}");
        assert!(partial_ratio("slaughter", &text) > 80);
    }

    #[test]
    fn test_long_disjoint_text_scores_zero() {
        let text = "zzzz yyyy xxxx ".repeat(200);
        assert_eq!(partial_ratio("murder", &text), 0);
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        let score = partial_ratio("café", "un petit café au lait");
        assert_eq!(score, 100);
        let _ = partial_ratio("naïve", "日本語のテキスト");
    }
}
