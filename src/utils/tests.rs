use super::UrlUtils;
use crate::error::ExpectError;
use std::fmt::Display;

#[test]
fn concat_inserts_exactly_one_slash() {
    let expected = "http://example.org/api/users";
    assert_eq!(UrlUtils::concat("http://example.org/api", "users"), expected);
    assert_eq!(UrlUtils::concat("http://example.org/api/", "users"), expected);
    assert_eq!(UrlUtils::concat("http://example.org/api", "/users"), expected);
    assert_eq!(UrlUtils::concat("http://example.org/api/", "/users"), expected);
}

#[test]
fn concat_strips_only_one_slash_per_side() {
    assert_eq!(
        UrlUtils::concat("http://example.org//", "//users"),
        "http://example.org///users"
    );
}

#[test]
fn concat_with_empty_side_returns_other_unchanged() {
    assert_eq!(UrlUtils::concat("", "/users"), "/users");
    assert_eq!(UrlUtils::concat("http://example.org/", ""), "http://example.org/");
    assert_eq!(UrlUtils::concat("", ""), "");
}

#[test]
fn interpolate_substitutes_positionally() {
    let id = 42;
    let name = "alice";
    let args: [Option<&dyn Display>; 2] = [Some(&id), Some(&name)];
    let url = UrlUtils::interpolate("http://example.org/users/%v/%s", &args).expect("format");
    assert_eq!(url, "http://example.org/users/42/alice");
}

#[test]
fn interpolate_keeps_percent_encoding_and_escapes() {
    let id = 7;
    let args: [Option<&dyn Display>; 1] = [Some(&id)];
    let url = UrlUtils::interpolate("/a%20b/%d/100%%", &args).expect("format");
    assert_eq!(url, "/a%20b/7/100%");
}

#[test]
fn interpolate_without_args_is_verbatim() {
    let url = UrlUtils::interpolate("/path/%v/%%", &[]).expect("format");
    assert_eq!(url, "/path/%v/%%");
}

#[test]
fn interpolate_rejects_argument_count_mismatch() {
    let a = 1;
    let b = 2;
    let args: [Option<&dyn Display>; 2] = [Some(&a), Some(&b)];
    let err = UrlUtils::interpolate("/path/%v", &args).expect_err("too many args");
    assert!(matches!(
        err,
        ExpectError::FormatArgs {
            expected: 1,
            given: 2
        }
    ));

    let args: [Option<&dyn Display>; 1] = [Some(&a)];
    let err = UrlUtils::interpolate("/%v/%v", &args).expect_err("too few args");
    assert!(matches!(
        err,
        ExpectError::FormatArgs {
            expected: 2,
            given: 1
        }
    ));
}

#[test]
fn interpolate_renders_nil_arguments() {
    let args: [Option<&dyn Display>; 1] = [None];
    let url = UrlUtils::interpolate("/users/%v", &args).expect("format");
    assert_eq!(url, "/users/<nil>");
}

#[test]
fn describe_args_lists_values_and_nils() {
    let a = 1;
    let b = "x";
    let args: [Option<&dyn Display>; 3] = [Some(&a), None, Some(&b)];
    assert_eq!(UrlUtils::describe_args(&args), "[1, <nil>, x]");
    assert_eq!(UrlUtils::describe_args(&[]), "[]");
}

#[test]
fn parse_accepts_absolute_urls() {
    let url = UrlUtils::parse("https://example.org/path?a=1").expect("valid url");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.path(), "/path");
    assert_eq!(url.query(), Some("a=1"));
}

#[test]
fn parse_rejects_relative_and_malformed_urls() {
    let err = UrlUtils::parse("/relative/path").expect_err("relative url");
    assert!(matches!(err, ExpectError::InvalidUrl(_)));

    let err = UrlUtils::parse("http://").expect_err("empty host");
    assert!(matches!(err, ExpectError::InvalidUrl(_)));
}
