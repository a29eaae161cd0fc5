//! Tests for the public operations.

use super::error::{ConstraintKind, StrError};
use super::ops::*;
use super::test_utils::{counting_context, recording_context};
use super::{BoundedStr, RSIZE_MAX_STR};

type TwoBufferOp = fn(&crate::ScanContext, BoundedStr<'_>, BoundedStr<'_>) -> crate::Result<usize>;

const TWO_BUFFER_OPS: [(&str, TwoBufferOp); 4] = [
    ("strstr_s", find_substring),
    ("strcasestr_s", find_substring_ignore_case),
    ("strcspn_s", complement_span),
    ("strpbrk_s", find_first_of),
];

fn ok(s: &str) -> BoundedStr<'_> {
    BoundedStr::from_str(s, s.len().max(1))
}

#[test]
fn test_find_substring() {
    let (ctx, recorder) = recording_context();
    assert_eq!(find_substring(&ctx, ok("keep calm"), ok("calm")), Ok(5));
    assert_eq!(find_substring(&ctx, ok("keep calm"), ok("CALM")), Err(StrError::NotFound));
    assert!(recorder.is_empty());
}

#[test]
fn test_find_substring_ignore_case() {
    let (ctx, _) = recording_context();
    assert_eq!(
        find_substring_ignore_case(&ctx, ok("Hello World"), ok("WORLD")),
        Ok(6)
    );
    assert_eq!(
        find_substring_ignore_case(&ctx, ok("Hello World"), ok("planet")),
        Err(StrError::NotFound)
    );
}

#[test]
fn test_truncated_needle_succeeds() {
    let (ctx, _) = recording_context();
    let needle = BoundedStr::from_str("abcX", 3);
    assert_eq!(find_substring(&ctx, ok("abcdef"), needle), Ok(0));
    assert_eq!(find_substring_ignore_case(&ctx, ok("ABCdef"), needle), Ok(0));
}

#[test]
fn test_empty_needle_matches_start() {
    let (ctx, _) = recording_context();
    let empty = BoundedStr::from_str("", 4);
    assert_eq!(find_substring(&ctx, ok("whatever"), empty), Ok(0));
    assert_eq!(find_substring_ignore_case(&ctx, ok("whatever"), empty), Ok(0));
}

#[test]
fn test_identical_buffer_matches_start() {
    let (ctx, _) = recording_context();
    let data = b"same buffer";
    let hay = BoundedStr::new(data, data.len());
    assert_eq!(find_substring(&ctx, hay, hay), Ok(0));
    assert_eq!(find_substring_ignore_case(&ctx, hay, hay), Ok(0));
}

#[test]
fn test_not_found_is_not_reported() {
    let (ctx, counter) = counting_context();
    let result = find_substring(
        &ctx,
        BoundedStr::from_str("abcdef", 6),
        BoundedStr::from_str("xyz", 3),
    );
    assert_eq!(result, Err(StrError::NotFound));
    assert_eq!(counter.total(), 0);
}

#[test]
fn test_complement_span() {
    let (ctx, _) = recording_context();
    assert_eq!(
        complement_span(
            &ctx,
            BoundedStr::from_str("12345abc", 8),
            BoundedStr::from_str("abc", 3)
        ),
        Ok(5)
    );
    assert_eq!(complement_span(&ctx, ok("123456"), ok("xyz")), Ok(6));
}

#[test]
fn test_find_first_of() {
    let (ctx, _) = recording_context();
    assert_eq!(find_first_of(&ctx, ok("key=value"), ok("=:")), Ok(3));
    assert_eq!(find_first_of(&ctx, ok("keyvalue"), ok("=:")), Err(StrError::NotFound));
}

#[test]
fn test_uppercase_predicate() {
    let (ctx, recorder) = recording_context();
    assert!(is_uppercase(&ctx, ok("HELLO")));
    assert!(!is_uppercase(&ctx, ok("HELLo")));
    assert!(!is_uppercase(&ctx, BoundedStr::from_str("", 1)));
    assert!(recorder.is_empty());
}

#[test]
fn test_uppercase_predicate_folds_violations() {
    let (ctx, recorder) = recording_context();
    assert!(!is_uppercase(&ctx, BoundedStr::from_str("HELLO", RSIZE_MAX_STR + 1)));
    assert_eq!(recorder.len(), 1);
    let v = recorder.last().unwrap();
    assert_eq!(v.kind, ConstraintKind::LengthExceedsMax);
    assert_eq!(v.to_string(), "strisuppercase_s: dmax exceeds max");

    assert!(!is_uppercase(&ctx, BoundedStr::null(5)));
    assert!(!is_uppercase(&ctx, BoundedStr::from_str("HELLO", 0)));
    assert_eq!(recorder.len(), 3);
}

#[test]
fn test_check_uppercase_splits_channels() {
    let (ctx, _) = recording_context();
    assert_eq!(check_uppercase(&ctx, ok("ABC")), Ok(true));
    assert_eq!(check_uppercase(&ctx, ok("AbC")), Ok(false));
    assert_eq!(
        check_uppercase(&ctx, BoundedStr::null(3)),
        Err(StrError::NullPointer)
    );
}

#[test]
fn test_other_classifiers() {
    let (ctx, _) = recording_context();
    assert!(is_lowercase(&ctx, ok("hello")));
    assert!(!is_lowercase(&ctx, ok("Hello")));
    assert!(is_digit(&ctx, ok("0123456789")));
    assert!(!is_digit(&ctx, ok("12a")));
    assert!(is_hex(&ctx, ok("DEADbeef01")));
    assert!(!is_hex(&ctx, ok("0x1F")));
    assert!(is_alphanumeric(&ctx, ok("abc123XYZ")));
    assert!(!is_alphanumeric(&ctx, ok("abc 123")));
    assert!(!is_digit(&ctx, BoundedStr::from_str("", 1)));
}

#[test]
fn test_primary_buffer_violations() {
    for (name, op) in TWO_BUFFER_OPS {
        let cases = [
            (BoundedStr::null(5), StrError::NullPointer, "dest is null"),
            (BoundedStr::from_str("hello", 0), StrError::ZeroLength, "dmax is 0"),
            (
                BoundedStr::from_str("hello", RSIZE_MAX_STR + 1),
                StrError::LengthExceedsMax,
                "dmax exceeds max",
            ),
        ];
        for (dest, expected, condition) in cases {
            let (ctx, recorder) = recording_context();
            assert_eq!(op(&ctx, dest, ok("l")), Err(expected), "{name}");
            assert_eq!(recorder.len(), 1, "{name}");
            let v = recorder.last().unwrap();
            assert_eq!(v.operation, name);
            assert_eq!(v.condition, condition);
        }
    }
}

#[test]
fn test_secondary_buffer_violations() {
    for (name, op) in TWO_BUFFER_OPS {
        let cases = [
            (BoundedStr::null(5), StrError::NullPointer, "src is null"),
            (BoundedStr::from_str("l", 0), StrError::ZeroLength, "slen is 0"),
            (
                BoundedStr::from_str("l", RSIZE_MAX_STR + 1),
                StrError::LengthExceedsMax,
                "slen exceeds max",
            ),
        ];
        for (src, expected, condition) in cases {
            let (ctx, recorder) = recording_context();
            assert_eq!(op(&ctx, ok("hello"), src), Err(expected), "{name}");
            assert_eq!(recorder.len(), 1, "{name}");
            assert_eq!(recorder.last().unwrap().condition, condition);
        }
    }
}

#[test]
fn test_primary_checked_before_secondary() {
    for (name, op) in TWO_BUFFER_OPS {
        let (ctx, recorder) = recording_context();
        let result = op(&ctx, BoundedStr::from_str("x", 0), BoundedStr::null(0));
        assert_eq!(result, Err(StrError::ZeroLength), "{name}");
        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.last().unwrap().condition, "dmax is 0");
    }
}

#[test]
fn test_custom_ceiling() {
    let (ctx, recorder) = recording_context();
    let ctx = ctx.with_max_str_len(4);
    assert_eq!(
        find_substring(&ctx, BoundedStr::from_str("abcde", 5), ok("a")),
        Err(StrError::LengthExceedsMax)
    );
    assert_eq!(find_substring(&ctx, BoundedStr::from_str("abcde", 4), ok("d")), Ok(3));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_operations_are_idempotent() {
    let (ctx, _) = recording_context();
    let hay = b"the quick brown fox".to_vec();
    let needle = b"brown".to_vec();
    let before = (hay.clone(), needle.clone());

    let dest = BoundedStr::new(&hay, hay.len());
    let src = BoundedStr::new(&needle, 5);
    let first = find_substring(&ctx, dest, src);
    let second = find_substring(&ctx, dest, src);
    assert_eq!(first, Ok(10));
    assert_eq!(first, second);
    assert_eq!((hay, needle), before);
}

#[test]
fn test_concurrent_use_of_shared_context() {
    let (ctx, counter) = counting_context();
    std::thread::scope(|s| {
        for _ in 0..4 {
            let ctx = &ctx;
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(find_substring(ctx, ok("haystack"), ok("stack")), Ok(3));
                    assert!(complement_span(ctx, BoundedStr::null(1), ok("a")).is_err());
                }
            });
        }
    });
    assert_eq!(counter.null_pointer_count(), 400);
}
