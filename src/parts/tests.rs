use super::*;
use crate::chunker::{Separators, char_len};

fn long_text() -> String {
    (1..=40)
        .map(|i| {
            format!(
                "Paragraph {i} talks about the weather. It was sunny on day {i}. \
                 Nobody expected rain, yet clouds gathered by the evening."
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect()
}

// ========================================================================
// Framing
// ========================================================================

#[test]
fn test_frame_layout() {
    assert_eq!(
        frame(2, 5, "hello"),
        "[START PART 2/5]\nhello\n[END PART 2/5]"
    );
}

#[test]
fn test_frame_uses_markers() {
    let framed = frame(3, 12, "body");
    assert!(framed.starts_with(START_MARKER));
    assert!(framed.contains(END_MARKER));
    assert!(framed.ends_with(" 3/12]"));
}

#[test]
fn test_framing_overhead() {
    assert_eq!(framing_overhead(1, 3, false), 32);
    assert_eq!(framing_overhead(3, 3, true), 32 + char_len(COMPLETION_SUFFIX));
    assert_eq!(max_overhead(10), 36 + 15);
}

#[test]
fn test_instruction_text_substitutes_total() {
    let text = instruction_text(7);
    assert!(!text.contains(TOTAL_PARTS_PLACEHOLDER));
    assert!(text.contains("7 parts"));
    assert!(text.contains("[START PART 2/7]"));
    assert!(text.contains("ALL PARTS SENT"));
}

// ========================================================================
// Formatting
// ========================================================================

#[test]
fn test_blank_text_or_zero_limit_is_empty() {
    assert!(format_parts("", 100).unwrap().is_empty());
    assert!(format_parts("   \n ", 100).unwrap().is_empty());
    assert!(format_parts("real text", 0).unwrap().is_empty());
}

#[test]
fn test_single_chunk_has_no_instruction() {
    let parts = format_parts("Hello world", 100).unwrap();

    assert_eq!(parts.len(), 1);
    assert!(!parts.has_instructions());
    assert_eq!(
        parts.parts[0].text,
        "[START PART 1/1]\nHello world\n[END PART 1/1]\nALL PARTS SENT"
    );
}

#[test]
fn test_multi_part_sequence_shape() {
    let text = long_text();
    let limit = 1000;
    let parts = format_parts(&text, limit).unwrap();

    assert!(parts.len() > 2);
    assert!(parts.has_instructions());
    assert!(parts.parts[0].is_instruction());
    assert!(!parts.parts[0].text.ends_with(COMPLETION_SUFFIX));

    let total = parts.len();
    for (i, part) in parts.iter().enumerate() {
        assert_eq!(part.index, i + 1);
        assert_eq!(part.total, total);
        assert!(part.len() <= limit, "part {} is {} chars", part.index, part.len());
    }

    let with_suffix: Vec<_> = parts
        .iter()
        .filter(|p| p.text.ends_with(COMPLETION_SUFFIX))
        .collect();
    assert_eq!(with_suffix.len(), 1);
    assert!(with_suffix[0].is_last());

    for part in parts.iter().skip(1) {
        let header = format!("[START PART {}/{}]\n", part.index, total);
        assert!(part.text.starts_with(&header));
    }
}

#[test]
fn test_content_reconstructs_text() {
    let text = long_text();
    let parts = format_parts(&text, 700).unwrap();

    let joined: String = parts.content_chunks().collect();
    assert_eq!(squash(&joined), squash(&text));
}

#[test]
fn test_format_is_idempotent() {
    let text = long_text();
    assert_eq!(format_parts(&text, 900), format_parts(&text, 900));
}

#[test]
fn test_fingerprint_tracks_inputs() {
    let a = format_parts("same text", 500).unwrap();
    let b = format_parts("same text", 500).unwrap();
    let c = format_parts("same text", 501).unwrap();
    let d = format_parts("other text", 500).unwrap();

    assert_eq!(a.fingerprint, b.fingerprint);
    assert_ne!(a.fingerprint, c.fingerprint);
    assert_ne!(a.fingerprint, d.fingerprint);
    assert_eq!(a.fingerprint.len(), 64);
}

#[test]
fn test_tiny_limit_is_rejected() {
    let result = format_parts(&long_text(), 10);
    assert!(matches!(result, Err(FormatError::LimitTooSmall { limit: 10, .. })));
}

#[test]
fn test_unbroken_text_under_small_limit() {
    let text = "A".repeat(50);

    // The raw split hard-cuts at the limit
    let chunks = crate::chunker::split_text(&text, 30);
    assert_eq!(chunks.len(), 2);

    // Three parts need 47 characters of markers, which leaves no room
    let result = format_parts(&text, 30);
    assert_eq!(
        result,
        Err(FormatError::LimitTooSmall {
            limit: 30,
            overhead: 47
        })
    );
}

#[test]
fn test_unbroken_text_is_framed_within_limit() {
    let text = "A".repeat(2500);
    let parts = format_parts(&text, 1000).unwrap();

    assert!(parts.has_instructions());
    assert!(parts.iter().all(|p| p.len() <= 1000));
    assert_eq!(parts.content_chunks().collect::<String>(), text);
}

#[test]
fn test_single_estimate_that_resplits_gets_instruction() {
    // Fits the full limit in one chunk, but not once markers are reserved
    let text = "A".repeat(980);
    let parts = format_parts(&text, 1000).unwrap();

    assert_eq!(parts.len(), 3);
    assert!(parts.has_instructions());
    assert_eq!(parts.parts[1].body.len(), 953);
    assert_eq!(parts.parts[2].body.len(), 27);
    assert!(parts.iter().all(|p| p.len() <= 1000));
}

#[test]
fn test_recount_overflow_is_reported() {
    // Estimate is 8 chunks (9 parts, one-digit markers) but the re-split
    // yields 9 chunks, so the last part carries two-digit markers.
    let text = "A".repeat(3177);
    let result = format_parts(&text, 400);

    assert_eq!(
        result,
        Err(FormatError::OverflowAfterFraming {
            index: 10,
            length: 404,
            limit: 400
        })
    );
}

#[test]
fn test_instruction_must_fit_limit() {
    let text = "A".repeat(150);
    let result = format_parts(&text, 100);

    assert!(matches!(
        result,
        Err(FormatError::OverflowAfterFraming { index: 1, limit: 100, .. })
    ));
}

#[test]
fn test_markdown_profile_formatter() {
    let text = format!(
        "# Guide\n\n## Part A\n{}\n## Part B\n{}",
        "a ".repeat(300),
        "b ".repeat(300)
    );
    let parts = PartFormatter::new(700)
        .with_separators(Separators::markdown())
        .format(&text)
        .unwrap();

    assert_eq!(parts.limit, 700);
    assert!(parts.content_chunks().any(|c| c.starts_with("## Part B")));
    assert!(parts.iter().all(|p| p.len() <= 700));
}

#[test]
fn test_get_is_one_based() {
    let parts = format_parts(&long_text(), 1000).unwrap();
    assert!(parts.get(0).is_none());
    assert_eq!(parts.get(1).map(|p| p.index), Some(1));
    assert!(parts.get(parts.len() + 1).is_none());
}

#[test]
fn test_error_messages_are_readable() {
    let err = FormatError::LimitTooSmall {
        limit: 30,
        overhead: 47,
    };
    assert!(err.to_string().contains("too small"));

    let err = FormatError::OverflowAfterFraming {
        index: 3,
        length: 120,
        limit: 100,
    };
    assert_eq!(
        err.to_string(),
        "Part 3 is 120 characters after framing (limit: 100)"
    );
}

// ========================================================================
// Limit parsing
// ========================================================================

#[test]
fn test_parse_limit_normalizes_invalid_input() {
    assert_eq!(parse_limit("8000"), 8000);
    assert_eq!(parse_limit("  42 "), 42);
    assert_eq!(parse_limit("0"), 0);
    assert_eq!(parse_limit("-5"), 0);
    assert_eq!(parse_limit("abc"), 0);
    assert_eq!(parse_limit("12.5"), 0);
    assert_eq!(parse_limit(""), 0);
}
