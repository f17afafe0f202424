// Per-feature evidence analysis: keyword sweep, near-duplicate
// suppression, and capped mention counting.
//
// Dedup is a cheap near-duplicate filter, not exact-string matching: two
// quotes whose wrapped contexts share the same first 80 characters count as
// the same evidence and only the first survives. This suppresses the
// repeated windows produced when several keywords of one feature hit the
// same passage, at the cost of occasionally folding genuinely distinct
// quotes that differ only near the end.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::FeatureDefinition;

use super::extract::{find_quotes, Quote, DEFAULT_CONTEXT_CHARS};

/// Mentions kept per feature per source after dedup.
pub const DEFAULT_MAX_QUOTES_PER_FEATURE: usize = 15;

/// Quotes sharing this many leading characters are treated as one mention.
pub const DEDUP_PREFIX_CHARS: usize = 80;

/// Tuning knobs for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerParams {
    /// Characters of context captured on each side of a match
    pub context_chars: usize,
    /// Mentions kept per feature per source
    pub max_quotes_per_feature: usize,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            context_chars: DEFAULT_CONTEXT_CHARS,
            max_quotes_per_feature: DEFAULT_MAX_QUOTES_PER_FEATURE,
        }
    }
}

/// Evidence and frequency counts for one feature across both sources.
///
/// Counts are the lengths of the deduplicated, capped mention lists:
/// a lower bound on raw occurrences whenever matches exceed the cap or
/// collapse as near-duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureResult {
    pub feature: String,
    pub description: String,
    pub offline_mentions: Vec<Quote>,
    pub online_mentions: Vec<Quote>,
    pub offline_count: usize,
    pub online_count: usize,
    pub total_count: usize,
}

/// Ordered mention list with prefix-based duplicate suppression.
#[derive(Default)]
struct SourceMentions {
    seen: HashSet<String>,
    mentions: Vec<Quote>,
}

impl SourceMentions {
    fn push(&mut self, quote: Quote) {
        let prefix: String = quote.context.chars().take(DEDUP_PREFIX_CHARS).collect();
        if self.seen.insert(prefix) {
            self.mentions.push(quote);
        }
    }

    fn into_capped(self, cap: usize) -> Vec<Quote> {
        let mut mentions = self.mentions;
        mentions.truncate(cap);
        mentions
    }
}

/// Run every keyword of `def` against both corpora and collect the
/// surviving evidence.
///
/// Keywords are processed in declaration order; within a keyword, matches
/// stay in document order, and that combined order is what the cap
/// truncates. Blank keywords are skipped with a warning. The offline and
/// online sources deduplicate independently.
pub fn analyze_feature(
    def: &FeatureDefinition,
    offline_text: &str,
    online_text: &str,
    params: &AnalyzerParams,
) -> FeatureResult {
    let mut offline = SourceMentions::default();
    let mut online = SourceMentions::default();

    for keyword in &def.keywords {
        if keyword.trim().is_empty() {
            warn!(feature = %def.name, "skipping blank keyword");
            continue;
        }
        for quote in find_quotes(offline_text, keyword, params.context_chars) {
            offline.push(quote);
        }
        for quote in find_quotes(online_text, keyword, params.context_chars) {
            online.push(quote);
        }
    }

    let offline_mentions = offline.into_capped(params.max_quotes_per_feature);
    let online_mentions = online.into_capped(params.max_quotes_per_feature);
    let offline_count = offline_mentions.len();
    let online_count = online_mentions.len();

    FeatureResult {
        feature: def.name.clone(),
        description: def.description.clone(),
        offline_mentions,
        online_mentions,
        offline_count,
        online_count,
        total_count: offline_count + online_count,
    }
}
