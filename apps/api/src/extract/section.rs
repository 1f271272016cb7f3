//! Section Locator — finds the line range of a named section inside the
//! ordered lines of the source text.
//!
//! Resume sections are bounded by short header lines ("Experience", "Skills:").
//! A keyword hit only counts when the line is shorter than the short-line
//! threshold, which keeps keyword mentions inside long prose sentences from
//! being mistaken for headers. This is a heuristic, not a structural
//! guarantee — callers must tolerate partial or garbage sections.

/// A keyword hit inside a line longer than this is ignored as prose.
const SHORT_LINE_THRESHOLD: usize = 50;

/// Returns the contiguous run of lines between a start-keyword header
/// (exclusive) and the first end-keyword header or `max_span` lines,
/// whichever comes first. Empty when no start header is found.
pub fn locate_section<'a>(
    lines: &'a [String],
    start_keywords: &[&str],
    end_keywords: &[&str],
    max_span: usize,
) -> &'a [String] {
    let lower: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();

    let Some(start) = lower
        .iter()
        .position(|l| is_header_line(l, start_keywords))
    else {
        return &[];
    };

    // End header or span cap, whichever comes first. An end keyword past the
    // cap never extends the section.
    let cap = (start + 1 + max_span).min(lines.len());
    let mut end = cap;
    for (i, line) in lower.iter().enumerate().take(cap).skip(start + 1) {
        if is_header_line(line, end_keywords) {
            end = i;
            break;
        }
    }

    &lines[start + 1..end.max(start + 1)]
}

fn is_header_line(lower_line: &str, keywords: &[&str]) -> bool {
    lower_line.len() < SHORT_LINE_THRESHOLD && keywords.iter().any(|k| lower_line.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_locates_bounded_section() {
        let text = lines(&[
            "Jane Doe",
            "Skills",
            "Rust, Python",
            "Docker",
            "Experience",
            "Engineer at Acme",
        ]);
        let section = locate_section(&text, &["skills"], &["experience"], 20);
        assert_eq!(section, &["Rust, Python".to_string(), "Docker".to_string()]);
    }

    #[test]
    fn test_missing_start_returns_empty() {
        let text = lines(&["Jane Doe", "Experience", "Engineer"]);
        let section = locate_section(&text, &["skills"], &["experience"], 20);
        assert!(section.is_empty());
    }

    #[test]
    fn test_header_line_is_excluded_from_section() {
        let text = lines(&["Summary", "A focused engineer.", "Skills"]);
        let section = locate_section(&text, &["summary"], &["skills"], 10);
        assert_eq!(section, &["A focused engineer.".to_string()]);
    }

    #[test]
    fn test_keyword_inside_long_prose_is_ignored() {
        let text = lines(&[
            "I have gathered a great deal of experience building highly available systems.",
            "Experience",
            "Engineer at Acme",
        ]);
        let section = locate_section(&text, &["experience"], &["education"], 20);
        // The prose line fails the length guard; the real header on line 1 wins.
        assert_eq!(section, &["Engineer at Acme".to_string()]);
    }

    #[test]
    fn test_max_span_truncates_unbounded_section() {
        let text = lines(&["Skills", "a", "b", "c", "d"]);
        let section = locate_section(&text, &["skills"], &["experience"], 2);
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn test_end_keyword_past_max_span_does_not_extend() {
        let text = lines(&[
            "Skills", "a", "b", "c", "d", "e", "f", "g", "h", "Experience",
        ]);
        let section = locate_section(&text, &["skills"], &["experience"], 3);
        assert_eq!(section, &["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_end_keyword_needs_short_line_too() {
        let text = lines(&[
            "Skills",
            "Rust",
            "Used in production experience settings across many large deployments at scale.",
            "Python",
        ]);
        let section = locate_section(&text, &["skills"], &["experience"], 20);
        assert_eq!(section.len(), 3);
    }

    #[test]
    fn test_section_header_as_last_line_yields_empty_section() {
        let text = lines(&["Jane Doe", "Projects"]);
        let section = locate_section(&text, &["projects"], &["education"], 20);
        assert!(section.is_empty());
    }

    #[test]
    fn test_case_folding_on_headers() {
        let text = lines(&["WORK EXPERIENCE", "Engineer at Acme", "EDUCATION", "BSc"]);
        let section = locate_section(&text, &["experience"], &["education"], 20);
        assert_eq!(section, &["Engineer at Acme".to_string()]);
    }
}
