use crate::analysis::models::{round2, TextStatistics};

const WORDS_PER_MINUTE: f64 = 200.0;

/// Counts words, sentences and characters and derives a simple readability figure.
///
/// Sentences are `.`-delimited segments, so `""` counts as one sentence and the trailing
/// period of `"Done."` opens a second, empty one.
pub fn compute(text: &str) -> TextStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = text.split('.').count();

    let average_words_per_sentence = if sentence_count > 0 {
        round2(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };

    TextStatistics {
        character_count: text.chars().count(),
        word_count,
        sentence_count,
        average_words_per_sentence,
        readability_score: readability(&words, sentence_count),
        estimated_reading_time: round2(word_count as f64 / WORDS_PER_MINUTE),
    }
}

/// `100 - 2 * avg_sentence_length - 3 * avg_word_length`, clamped to 0..=100.
fn readability(words: &[&str], sentence_count: usize) -> f64 {
    if words.is_empty() || sentence_count == 0 {
        return 0.0;
    }
    let avg_sentence_length = words.len() as f64 / sentence_count as f64;
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / words.len() as f64;

    (100.0 - avg_sentence_length * 2.0 - avg_word_length * 3.0).clamp(0.0, 100.0)
}
