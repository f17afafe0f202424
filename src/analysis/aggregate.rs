// Cross-feature aggregation: evidence serialization and the
// frequency-ranked summary table.
//
// The evidence document keeps catalog declaration order so downstream Kano
// classification can line results up with the catalog file. The summary is
// re-sorted by total mentions; the sort is stable, so features with equal
// totals stay in declaration order.

use anyhow::{Context, Result};

use super::feature::FeatureResult;

/// Serialize the full evidence document, in the order the results were
/// produced (catalog declaration order).
pub fn evidence_json(results: &[FeatureResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("failed to serialize evidence document")
}

/// View of `results` sorted by total mentions, descending. Stable: ties
/// keep their relative input order.
pub fn ranked(results: &[FeatureResult]) -> Vec<&FeatureResult> {
    let mut view: Vec<&FeatureResult> = results.iter().collect();
    view.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    view
}

/// Render the plain-text frequency summary, one line per feature in ranked
/// order.
pub fn summary_table(results: &[FeatureResult]) -> String {
    let mut out = String::new();
    for r in ranked(results) {
        out.push_str(&format!(
            "{:<14}  off={:>4}  on={:>4}  total={:>4}\n",
            r.feature, r.offline_count, r.online_count, r.total_count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(feature: &str, offline: usize, online: usize) -> FeatureResult {
        FeatureResult {
            feature: feature.to_string(),
            description: String::new(),
            offline_mentions: Vec::new(),
            online_mentions: Vec::new(),
            offline_count: offline,
            online_count: online,
            total_count: offline + online,
        }
    }

    #[test]
    fn test_ranked_sorts_by_total_descending_with_stable_ties() {
        let results = vec![result("a", 5, 0), result("b", 20, 0), result("c", 2, 3)];
        let names: Vec<&str> = ranked(&results).iter().map(|r| r.feature.as_str()).collect();
        // a and c tie at 5, declaration order wins
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_summary_line_format() {
        let results = vec![result("login", 3, 12)];
        assert_eq!(
            summary_table(&results),
            "login           off=   3  on=  12  total=  15\n"
        );
    }

    #[test]
    fn test_summary_empty_results() {
        assert_eq!(summary_table(&[]), "");
    }

    #[test]
    fn test_long_feature_names_are_not_truncated() {
        let results = vec![result("a-feature-name-past-fourteen", 1, 0)];
        let line = summary_table(&results);
        assert!(line.starts_with("a-feature-name-past-fourteen  off="));
    }

    #[test]
    fn test_evidence_json_preserves_input_order() {
        let results = vec![result("zeta", 0, 0), result("alpha", 9, 9)];
        let json = evidence_json(&results).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha, "evidence document must keep catalog order");
    }
}
