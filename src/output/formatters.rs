//! Formatting utilities for terminal output

/// Format the "word N of M" progress line
#[must_use]
pub fn word_progress(word_number: usize, max_words: usize) -> String {
    format!("Word {word_number} of {max_words}")
}

/// Display form of a scrambled word: uppercase with spaced letters
#[must_use]
pub fn spaced_uppercase(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format session progress as a bar of consumed attempts
#[must_use]
pub fn attempts_bar(attempt_count: usize, max_words: usize, width: usize) -> String {
    create_progress_bar(attempt_count as f64, max_words.max(1) as f64, width)
}
