//! LCS diff computation
//!
//! The core entry point is [`render_diff`].

use crate::diff::model::DiffToken;

const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Split on whitespace runs; leading and trailing whitespace yields no token
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Comparison key of a word: trailing punctuation stripped, lower-cased
pub fn normalize_token(token: &str) -> String {
    token.trim_end_matches(TRAILING_PUNCTUATION).to_lowercase()
}

/// Diff `before` against `after` word by word
///
/// Identical inputs produce a single unchanged token carrying the whole
/// text, whitespace included. Otherwise every word of `before` appears
/// exactly once as unchanged or removed, every word of `after` exactly once
/// as unchanged or added, and both sequences keep their original order.
pub fn render_diff(before: &str, after: &str) -> Vec<DiffToken> {
    if before == after {
        return vec![DiffToken::unchanged(before)];
    }

    let old = tokenize(before);
    let new = tokenize(after);
    let old_keys: Vec<String> = old.iter().map(|t| normalize_token(t)).collect();
    let new_keys: Vec<String> = new.iter().map(|t| normalize_token(t)).collect();

    let (n, m) = (old.len(), new.len());
    let width = m + 1;
    // table[i * width + j] = LCS length of old[..i] and new[..j]
    let mut table = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            table[i * width + j] = if old_keys[i - 1] == new_keys[j - 1] {
                table[(i - 1) * width + (j - 1)] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + (j - 1)])
            };
        }
    }

    // Backtrack from the end; tokens are collected right to left
    let mut reversed = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old_keys[i - 1] == new_keys[j - 1] {
            if old[i - 1] == new[j - 1] {
                reversed.push(DiffToken::unchanged(old[i - 1]));
            } else {
                // Pushed in reverse so the removal reads first
                reversed.push(DiffToken::added(new[j - 1]));
                reversed.push(DiffToken::removed(old[i - 1]));
            }
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i * width + (j - 1)] >= table[(i - 1) * width + j]) {
            reversed.push(DiffToken::added(new[j - 1]));
            j -= 1;
        } else {
            reversed.push(DiffToken::removed(old[i - 1]));
            i -= 1;
        }
    }

    reversed.reverse();
    reversed
}
