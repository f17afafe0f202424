// Literal keyword matching with bounded context capture.
//
// The extractor is the innermost loop of the pipeline: given one corpus and
// one keyword, it finds every non-overlapping occurrence and captures a
// fixed-width window of surrounding text as human-readable evidence.
// Matching is exact substring search, with no tokenization or case folding, so
// a keyword list can mix scripts freely (Chinese transcripts with English
// product terms are the common case).

use serde::{Deserialize, Serialize};

/// Characters of context captured on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 120;

/// One keyword occurrence with its surrounding text window.
///
/// `context` is the window with newlines flattened to spaces, trimmed, and
/// wrapped in `...` markers. Created once per match; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub keyword: String,
    pub context: String,
}

/// Find every non-overlapping literal occurrence of `keyword` in `text`,
/// in left-to-right order, each wrapped in a `context_chars`-wide window.
///
/// Window bounds are measured in characters, not bytes, so multi-byte
/// transcripts get the same window width as ASCII ones. An empty keyword
/// would match at every position, so it yields no quotes.
///
/// Deduplication is not done here; that is the analyzer's concern.
pub fn find_quotes(text: &str, keyword: &str, context_chars: usize) -> Vec<Quote> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let mut quotes = Vec::new();

    for (start, matched) in text.match_indices(keyword) {
        let end = start + matched.len();

        // Step back up to context_chars characters from the match start.
        let win_start = text[..start]
            .char_indices()
            .rev()
            .take(context_chars)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(start);

        // Step forward up to context_chars characters past the match end.
        let trailing = &text[end..];
        let win_end = end
            + trailing
                .char_indices()
                .nth(context_chars)
                .map(|(i, _)| i)
                .unwrap_or(trailing.len());

        let window = text[win_start..win_end].replace('\n', " ");
        quotes.push(Quote {
            keyword: keyword.to_string(),
            context: format!("...{}...", window.trim()),
        });
    }

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_occurrences() {
        let quotes = find_quotes("the quick brown fox", "login", 120);
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_matches_in_document_order() {
        let quotes = find_quotes("a login here, another login there", "login", 5);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].context, "...a login here...");
        assert_eq!(quotes[1].context, "...ther login ther...");
    }

    #[test]
    fn test_non_overlapping_matches() {
        // "aaaa" contains "aa" at offsets 0 and 2 once matches consume
        // their span, not three overlapping occurrences
        let quotes = find_quotes("aaaa", "aa", 0);
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn test_zero_context_is_keyword_only() {
        let quotes = find_quotes("say login now", "login", 0);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].context, "...login...");
    }

    #[test]
    fn test_newlines_flattened() {
        let quotes = find_quotes("line one\nlogin\nline two", "login", 120);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].context, "...line one login line two...");
    }

    #[test]
    fn test_window_clamped_at_text_bounds() {
        let quotes = find_quotes("login", "login", 50);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].context, "...login...");
    }

    #[test]
    fn test_multibyte_window_counts_characters() {
        // 3 chars of context on each side of a Chinese keyword
        let quotes = find_quotes("我希望能登录系统后看", "登录", 3);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].context, "...希望能登录系统后...");
    }

    #[test]
    fn test_empty_keyword_yields_nothing() {
        assert!(find_quotes("some text", "", 120).is_empty());
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(find_quotes("", "login", 120).is_empty());
    }

    #[test]
    fn test_keyword_field_carries_the_keyword() {
        let quotes = find_quotes("a login b", "login", 2);
        assert_eq!(quotes[0].keyword, "login");
    }
}
