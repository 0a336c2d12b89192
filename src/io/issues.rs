//! Issue tracker JSONL: one issue object per line.
//!
//! Loading is lenient. Blank lines, undecodable bytes, malformed JSON and
//! issues that fail validation are skipped; only failing to read the file is
//! an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::BOM_BYTES;
use crate::errors::DepmapError;
use crate::model::Issue;

/// Parse JSONL text, skipping lines that do not hold a valid issue.
pub fn parse_issues_jsonl(reader: impl BufRead) -> std::io::Result<Vec<Issue>> {
    let mut issues = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let mut line = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        if index == 0 {
            line = line.strip_prefix(BOM_BYTES).unwrap_or(line);
        }
        if line.trim_ascii().is_empty() {
            continue;
        }

        match serde_json::from_slice::<Issue>(line) {
            Ok(issue) => match issue.validate() {
                Ok(()) => issues.push(issue),
                Err(reason) => {
                    skipped += 1;
                    tracing::warn!(
                        line = index + 1,
                        id = %issue.id,
                        %reason,
                        "Skipping invalid issue"
                    );
                }
            },
            Err(e) => {
                skipped += 1;
                tracing::warn!(line = index + 1, error = %e, "Skipping malformed issue line");
            }
        }
    }

    tracing::debug!(loaded = issues.len(), skipped, "Parsed issue lines");
    Ok(issues)
}

/// Load issues from a JSONL file.
pub fn load_issues_jsonl(path: &Path) -> Result<Vec<Issue>, DepmapError> {
    let file = File::open(path).map_err(|e| DepmapError::io(path, e))?;
    parse_issues_jsonl(BufReader::new(file)).map_err(|e| DepmapError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_skips_blank_malformed_and_invalid_lines() {
        let input = indoc! {r#"
            {"id":"A","title":"Alpha","status":"open"}

            {not json
            {"id":"","title":"nameless"}
            {"id":"B","title":"Beta","dependencies":[{"issue_id":"B","depends_on_id":"A","type":"blocks"}]}
        "#};
        let issues = parse_issues_jsonl(input.as_bytes()).unwrap();
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(issues[1].dependencies[0].depends_on_id, "A");
    }

    #[test]
    fn test_bom_on_first_line_is_stripped() {
        let input = "\u{feff}{\"id\":\"A\",\"title\":\"Alpha\"}\n";
        let issues = parse_issues_jsonl(input.as_bytes()).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].title, "Alpha");
    }

    #[test]
    fn test_undecodable_line_is_skipped() {
        let mut input = b"{\"id\":\"A\",\"title\":\"Alpha\"}\n".to_vec();
        input.extend_from_slice(b"{\"id\":\"X\",\"title\":\"\xff\"}\n");
        input.extend_from_slice(b"\xff\xfe garbage\r\n");
        input.extend_from_slice(b"{\"id\":\"B\",\"title\":\"Beta\"}\r\n");

        let issues = parse_issues_jsonl(input.as_slice()).unwrap();
        let ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_issues_jsonl(Path::new("/nonexistent/issues.jsonl")).unwrap_err();
        assert!(matches!(err, DepmapError::Io { .. }));
    }
}
