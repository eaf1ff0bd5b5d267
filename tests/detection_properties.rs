// Property tests for slug sanitizing and pipeline determinism
use chrono::NaiveDate;
use codesnap::detection::clock::FixedClock;
use codesnap::detection::language::classify;
use codesnap::detection::sanitize::{TITLE_MAX_LENGTH, sanitize};
use codesnap::{DetectionInput, DetectionPipeline, SnapConfig};
use proptest::prelude::*;

fn pipeline() -> DetectionPipeline<FixedClock> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    DetectionPipeline::with_clock(SnapConfig::default(), FixedClock(date))
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(raw in "\\PC{0,80}") {
        let once = sanitize(&raw, None);
        prop_assert_eq!(sanitize(&once, None), once);
    }

    #[test]
    fn capped_sanitize_is_idempotent_and_bounded(raw in "\\PC{0,200}") {
        let once = sanitize(&raw, Some(TITLE_MAX_LENGTH));
        prop_assert!(once.chars().count() <= TITLE_MAX_LENGTH);
        prop_assert_eq!(sanitize(&once, Some(TITLE_MAX_LENGTH)), once);
    }

    #[test]
    fn sanitized_slug_has_no_edge_hyphens_or_whitespace(raw in "[ a-zA-Z0-9.!?#-]{0,60}") {
        let slug = sanitize(&raw, None);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert_eq!(slug.to_lowercase(), slug.clone());
    }

    #[test]
    fn classify_never_panics_and_is_stable(code in "\\PC{0,200}") {
        prop_assert_eq!(classify(&code), classify(&code));
    }

    #[test]
    fn detection_is_deterministic(code in "(//|#|def |class |function )?[ a-zA-Z0-9.:()]{0,60}\n?[ a-z(){};=]{0,40}") {
        let input = DetectionInput::new(code);
        let first = pipeline().detect(&input).expect("detect");
        let second = pipeline().detect(&input).expect("detect");
        prop_assert_eq!(first, second);
    }
}
