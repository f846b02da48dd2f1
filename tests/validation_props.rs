//! Property-based invariants for validation and timing primitives.
//!
//! 1. Name and message validity depends only on the trimmed UTF-16 length.
//! 2. Surrounding whitespace never changes a verdict.
//! 3. Well-formed addresses pass; strings without `@`, or without a `.`
//!    after it, fail.
//! 4. A throttle fires at most once per window.
//! 5. The scheduler releases tasks in non-decreasing deadline order.

use portfolio_ui::domain::form::{is_valid_email, MESSAGE_MIN_CHARS, NAME_MIN_CHARS};
use portfolio_ui::domain::{validate, FieldName};
use portfolio_ui::timing::{Scheduler, Throttle};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn field_strategy() -> impl Strategy<Value = FieldName> {
    prop_oneof![
        Just(FieldName::Name),
        Just(FieldName::Email),
        Just(FieldName::Message),
    ]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._%+-]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Length rules count trimmed UTF-16 units
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn name_validity_tracks_trimmed_length(value in "\\PC{0,8}") {
        let expected = value.trim().encode_utf16().count() >= NAME_MIN_CHARS;
        prop_assert_eq!(validate(FieldName::Name, &value).is_valid, expected);
    }

    #[test]
    fn message_validity_tracks_trimmed_length(value in "\\PC{0,20}") {
        let expected = value.trim().encode_utf16().count() >= MESSAGE_MIN_CHARS;
        prop_assert_eq!(validate(FieldName::Message, &value).is_valid, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Padding is ignored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn padding_never_changes_verdict(
        field in field_strategy(),
        value in "\\PC{0,16}",
        before in whitespace_strategy(),
        after in whitespace_strategy(),
    ) {
        let padded = format!("{before}{value}{after}");
        prop_assert_eq!(validate(field, &padded), validate(field, &value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Email shapes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn well_formed_addresses_pass(email in email_strategy()) {
        prop_assert!(is_valid_email(&email), "rejected {}", email);
        prop_assert!(validate(FieldName::Email, &email).is_valid);
    }

    #[test]
    fn strings_without_at_sign_fail(value in "[^@]{0,24}") {
        prop_assert!(!validate(FieldName::Email, &value).is_valid);
    }

    #[test]
    fn addresses_without_dot_after_at_fail(email in "[^@\\s.]{1,8}@[^@\\s.]{1,8}") {
        prop_assert!(!is_valid_email(&email), "accepted {}", email);
        prop_assert!(!validate(FieldName::Email, &email).is_valid);
    }

    #[test]
    fn inner_whitespace_fails(local in "[a-z]{1,6}", gap in "[ \t]{1,3}", domain in "[a-z]{1,6}") {
        let email = format!("{local}{gap}x@{domain}.com");
        prop_assert!(!is_valid_email(&email));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Throttle windows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn throttle_fires_at_most_once_per_window(
        window in 1u64..=200,
        steps in prop::collection::vec(0u64..=50, 1..64),
    ) {
        let mut throttle = Throttle::new(window);
        let mut now = 0u64;
        let mut fired = Vec::new();

        for step in steps {
            now += step;
            if throttle.try_fire(now) {
                fired.push(now);
            }
        }

        prop_assert!(!fired.is_empty(), "the first call always fires");
        for pair in fired.windows(2) {
            prop_assert!(pair[1] - pair[0] >= window, "fired at {:?} within {}ms", pair, window);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Scheduler ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scheduler_releases_in_deadline_order(
        delays in prop::collection::vec(0u64..=10_000, 0..32),
        cancel_mask in prop::collection::vec(any::<bool>(), 32),
    ) {
        let mut scheduler = Scheduler::new();
        let mut live = 0usize;
        for (i, &delay) in delays.iter().enumerate() {
            let handle = scheduler.schedule(delay, delay);
            if cancel_mask[i] {
                prop_assert!(scheduler.cancel(handle));
            } else {
                live += 1;
            }
        }

        let mut released = Vec::new();
        while let Some(deadline) = scheduler.pop_due(u64::MAX) {
            prop_assert_eq!(scheduler.now(), deadline);
            released.push(deadline);
        }

        prop_assert_eq!(released.len(), live);
        prop_assert!(released.windows(2).all(|w| w[0] <= w[1]), "out of order: {:?}", released);
        prop_assert_eq!(scheduler.pending(), 0);
    }
}
