use super::*;
use chrono::TimeZone;

// ============================================================================
// Average Rating Tests
// ============================================================================

#[test]
fn test_average_of_empty_is_unrated_not_zero() {
    assert_eq!(average(&[]), None);
}

#[test]
fn test_average_of_ratings() {
    assert_eq!(average(&[3, 5]), Some(4.0));
    assert_eq!(average(&[1]), Some(1.0));
    let avg = average(&[1, 2, 2]).unwrap();
    assert!((avg - 5.0 / 3.0).abs() < 1e-9);
}

// ============================================================================
// RatingLog Tests
// ============================================================================

#[test]
fn test_record_rejects_out_of_range() {
    let mut log = RatingLog::default();
    assert_eq!(log.record(0), Err(RatingError::OutOfRange(0)));
    assert_eq!(log.record(6), Err(RatingError::OutOfRange(6)));
    assert!(log.is_empty());

    assert_eq!(log.record(5), Ok(()));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_rating_log_keeps_most_recent_200() {
    let mut log = RatingLog::default();
    for _ in 0..MAX_RATINGS {
        log.record(1).unwrap();
    }
    log.record(5).unwrap();

    assert_eq!(log.len(), MAX_RATINGS);
    // The oldest 1-star entry fell off; the fresh 5 is still counted.
    let avg = log.average().unwrap();
    assert!(avg > 1.0);
}

#[test]
fn test_rating_log_average_delegates() {
    let mut log = RatingLog::default();
    assert_eq!(log.average(), None);
    log.record(3).unwrap();
    log.record(5).unwrap();
    assert_eq!(log.average(), Some(4.0));
}

// ============================================================================
// CommentLog Tests
// ============================================================================

#[test]
fn test_comments_are_newest_first() {
    let mut log = CommentLog::default();
    let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();

    assert!(log.post_at("first", t0));
    assert!(log.post_at("second", t1));

    let texts: Vec<&str> = log.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[test]
fn test_blank_comments_are_ignored() {
    let mut log = CommentLog::default();
    assert!(!log.post("   "));
    assert!(log.is_empty());
}

#[test]
fn test_comment_log_caps_at_60() {
    let mut log = CommentLog::default();
    let t = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    for i in 0..MAX_COMMENTS + 5 {
        log.post_at(&format!("comment {i}"), t);
    }

    assert_eq!(log.len(), MAX_COMMENTS);
    // Newest survives, oldest dropped.
    assert_eq!(log.iter().next().unwrap().text, "comment 64");
}

#[test]
fn test_comment_text_is_trimmed() {
    let mut log = CommentLog::default();
    assert!(log.post("  lovely with extra garlic  "));
    assert_eq!(log.iter().next().unwrap().text, "lovely with extra garlic");
}
