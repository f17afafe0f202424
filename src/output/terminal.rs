// Colored terminal output for analysis results.
//
// This module handles all terminal-specific formatting: colors, tables,
// rank markers. The plain-text artifacts written to disk are produced by
// analysis::aggregate; nothing here feeds back into them.

use colored::Colorize;

use crate::analysis::aggregate::ranked;
use crate::analysis::feature::FeatureResult;

/// Display the ranked mention-frequency table.
pub fn display_summary(results: &[FeatureResult]) {
    if results.is_empty() {
        println!("No features analyzed. Check your feature catalog.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Mention Frequency ({} features) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<24} {:>8}  {:>8}  {:>8}",
        "Rank".dimmed(),
        "Feature".dimmed(),
        "Offline".dimmed(),
        "Online".dimmed(),
        "Total".dimmed(),
    );
    println!("  {}", "-".repeat(62).dimmed());

    for (i, result) in ranked(results).iter().enumerate() {
        println!(
            "  {:>4}. {:<24} {:>8}  {:>8}  {:>8}",
            i + 1,
            result.feature,
            result.offline_count,
            result.online_count,
            colorize_total(result.total_count),
        );
    }

    println!();

    let unmentioned = results.iter().filter(|r| r.total_count == 0).count();
    if unmentioned > 0 {
        println!(
            "  {} {} features had no mentions; review their keyword lists",
            "~".yellow(),
            unmentioned
        );
    }
}

/// Display one feature's evidence in detail: counts plus quote previews
/// for each source.
pub fn display_feature_detail(result: &FeatureResult) {
    println!("\n{}", format!("=== {} ===", result.feature).bold());

    if !result.description.is_empty() {
        println!("  {}", result.description);
    }
    println!(
        "  Mentions: offline {} | online {} | total {}",
        result.offline_count, result.online_count, result.total_count
    );

    for (label, mentions) in [
        ("Offline", &result.offline_mentions),
        ("Online", &result.online_mentions),
    ] {
        if mentions.is_empty() {
            continue;
        }
        println!("\n  {} quotes:", label);
        for (i, quote) in mentions.iter().enumerate() {
            let preview = super::truncate_chars(&quote.context, 120);
            println!(
                "    {}. [{}] {}",
                i + 1,
                quote.keyword,
                preview.dimmed()
            );
        }
    }
}

/// Colorize a total mention count.
fn colorize_total(count: usize) -> colored::ColoredString {
    let s = count.to_string();
    if count == 0 {
        s.dimmed()
    } else if count >= 10 {
        s.green().bold()
    } else {
        s.normal()
    }
}
