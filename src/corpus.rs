// Transcript corpus assembly.
//
// Walks a directory of plain-text interview transcripts and merges them
// into a single corpus string per source. Everything here degrades
// gracefully: a missing folder or an unreadable file contributes no text
// and logs a warning instead of failing the run, so one corrupt transcript
// never loses a whole interview batch.

use std::fs;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use walkdir::WalkDir;

/// File extensions treated as transcripts. Word-processor formats are not
/// parsed; transcripts are expected as exported plain text.
pub const TRANSCRIPT_EXTENSIONS: &[&str] = &["txt", "md"];

fn is_transcript(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TRANSCRIPT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Recursively merge every transcript file under `folder` into one corpus,
/// separated by blank lines. Files are visited in name order so the merged
/// corpus is deterministic across runs.
pub fn merge_folder(folder: &Path) -> String {
    if !folder.exists() {
        warn!(folder = %folder.display(), "transcript folder not found, treating as empty");
        return String::new();
    }

    let files: Vec<_> = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_transcript(e.path()))
        .collect();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut texts = Vec::with_capacity(files.len());
    for entry in &files {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            pb.set_message(name.to_string());
        }
        match fs::read_to_string(path) {
            Ok(text) => texts.push(text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read transcript");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    texts.join("\n\n")
}

/// Read a merged corpus file. A missing path or read failure yields an
/// empty corpus (zero mentions downstream), never an error.
pub fn read_merged(path: Option<&Path>) -> String {
    let Some(path) = path else {
        return String::new();
    };
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corpus unavailable, treating as empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transcript_by_extension() {
        assert!(is_transcript(Path::new("interview.txt")));
        assert!(is_transcript(Path::new("notes.MD")));
        assert!(!is_transcript(Path::new("audio.mp3")));
        assert!(!is_transcript(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_folder_is_empty() {
        assert_eq!(merge_folder(Path::new("/nonexistent/transcripts")), "");
    }

    #[test]
    fn test_missing_merged_file_is_empty() {
        assert_eq!(read_merged(Some(Path::new("/nonexistent/merged.txt"))), "");
        assert_eq!(read_merged(None), "");
    }
}
