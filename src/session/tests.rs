use super::*;

fn sample_text() -> String {
    (1..=30)
        .map(|i| format!("Line {i} of the report, with enough words to take up some room."))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_session_is_empty() {
    let session = Session::new(8000);
    assert_eq!(session.part_count(), 0);
    assert!(session.error().is_none());
    assert_eq!(session.text(), "");
}

#[test]
fn test_set_text_recomputes() {
    let mut session = Session::new(8000);
    session.set_text("short note");
    assert_eq!(session.part_count(), 1);

    session.set_limit(600);
    session.set_text(sample_text());
    assert!(session.part_count() > 1);
    assert_eq!(session.limit(), 600);
}

#[test]
fn test_chunk_count_leaves_out_instruction() {
    let mut session = Session::new(8000);
    assert_eq!(session.chunk_count(), 0);

    session.set_text("short note");
    assert_eq!(session.chunk_count(), 1);
    assert_eq!(session.part_count(), 1);

    session.set_limit(600);
    session.set_text(sample_text());
    assert!(session.chunk_count() > 1);
    assert_eq!(session.chunk_count() + 1, session.part_count());
}

#[test]
fn test_mark_copied_returns_part() {
    let mut session = Session::new(600);
    session.set_text(sample_text());

    let part = session.mark_copied(2).unwrap();
    assert_eq!(part.index, 2);
    assert!(part.text.starts_with("[START PART 2/"));

    assert!(session.is_copied(2));
    assert!(!session.is_copied(1));
    assert_eq!(session.copied_count(), 1);
}

#[test]
fn test_mark_copied_out_of_range() {
    let mut session = Session::new(8000);
    session.set_text("one part only");

    assert_eq!(
        session.mark_copied(2).unwrap_err(),
        SessionError::NoSuchPart { index: 2, total: 1 }
    );
    assert!(session.mark_copied(0).is_err());
    assert_eq!(session.copied_count(), 0);
}

#[test]
fn test_copied_flags_survive_identical_recompute() {
    let mut session = Session::new(600);
    session.set_text(sample_text());
    session.mark_copied(1).unwrap();

    session.set_text(sample_text());
    assert!(session.is_copied(1));

    session.set_limit(700);
    assert!(!session.is_copied(1));
    assert_eq!(session.copied_count(), 0);
}

#[test]
fn test_failed_format_blocks_copy() {
    let mut session = Session::new(8000);
    session.set_text(sample_text());
    session.mark_copied(1).unwrap();

    session.set_limit(20);
    assert!(matches!(
        session.error(),
        Some(FormatError::LimitTooSmall { limit: 20, .. })
    ));
    assert_eq!(session.part_count(), 0);
    assert!(!session.is_copied(1));
    assert!(matches!(
        session.mark_copied(1),
        Err(SessionError::Unavailable(_))
    ));
}

#[test]
fn test_copy_tracker_basics() {
    let mut tracker = CopyTracker::new();
    assert!(!tracker.is_copied(3));

    tracker.mark(3);
    tracker.mark(3);
    tracker.mark(1);
    assert_eq!(tracker.count(), 2);

    tracker.clear();
    assert_eq!(tracker.count(), 0);
}
