//! Per-request decisions and grant headers of the single-origin policy.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use corsette_core::policy::{header, ALLOWED_METHODS, MAX_AGE_SECS};
use corsette_core::{build_cors_policy, CorsDecision};

const FRONTEND: &str = "https://app.example.com";

fn lookup<'a>(headers: &'a [(&'static str, &'a str)], name: &str) -> Option<&'a str> {
    headers.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

#[test]
fn policy_holds_exactly_one_origin() {
    let p = build_cors_policy(FRONTEND);
    assert_eq!(p.allowed_origins(), [FRONTEND.to_string()]);
    assert!(p.allow_credentials());
    assert_eq!(
        p.allowed_headers(),
        ["Origin", "Content-Type", "Authorization", "X-API-Key"]
    );
    assert_eq!(p.allowed_methods(), ALLOWED_METHODS);
}

#[test]
fn missing_origin_passes_through() {
    let p = build_cors_policy(FRONTEND);
    for method in ["GET", "POST", "OPTIONS"] {
        let d = p.evaluate(None, method);
        assert_eq!(d, CorsDecision::PassThrough);
        assert!(p.response_headers(d).is_empty());
    }
}

#[test]
fn trusted_origin_get_is_actual() {
    let p = build_cors_policy(FRONTEND);
    let d = p.evaluate(Some(FRONTEND.as_bytes()), "GET");
    assert_eq!(d, CorsDecision::Actual);
    assert!(!d.short_circuits());

    let h = p.response_headers(d);
    assert_eq!(lookup(&h, header::ALLOW_ORIGIN), Some(FRONTEND));
    assert_eq!(lookup(&h, header::ALLOW_CREDENTIALS), Some("true"));
    assert_eq!(
        lookup(&h, header::ALLOW_METHODS),
        Some("GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS")
    );
    assert_eq!(lookup(&h, header::VARY), Some("Origin"));
    assert_eq!(lookup(&h, header::MAX_AGE), None);
}

#[test]
fn trusted_origin_options_is_preflight() {
    let p = build_cors_policy(FRONTEND);
    let d = p.evaluate(Some(FRONTEND.as_bytes()), "OPTIONS");
    assert_eq!(d, CorsDecision::Preflight);
    assert!(d.short_circuits());

    let h = p.response_headers(d);
    assert_eq!(lookup(&h, header::ALLOW_ORIGIN), Some(FRONTEND));
    assert_eq!(lookup(&h, header::ALLOW_CREDENTIALS), Some("true"));
    let max_age = MAX_AGE_SECS.to_string();
    assert_eq!(lookup(&h, header::MAX_AGE), Some(max_age.as_str()));
}

#[test]
fn allow_headers_value_is_fixed() {
    for url in [FRONTEND, "http://localhost:3000", ""] {
        let p = build_cors_policy(url);
        let d = p.evaluate(Some(url.as_bytes()), "GET");
        if !d.is_granted() {
            continue;
        }
        let h = p.response_headers(d);
        assert_eq!(
            lookup(&h, header::ALLOW_HEADERS),
            Some("Origin, Content-Type, Authorization, X-API-Key")
        );
    }
}

#[test]
fn near_miss_origins_are_withheld() {
    let p = build_cors_policy(FRONTEND);
    for origin in [
        "https://evil.example.com",
        "https://APP.example.com",
        "https://app.example.com/",
        "http://app.example.com",
        "https://app.example.com:443",
        "null",
    ] {
        let d = p.evaluate(Some(origin.as_bytes()), "GET");
        assert_eq!(d, CorsDecision::Withhold, "origin {origin}");
        assert!(p.response_headers(d).is_empty());
    }
}

#[test]
fn untrusted_preflight_is_not_short_circuited() {
    let p = build_cors_policy(FRONTEND);
    let d = p.evaluate(Some(b"https://evil.example.com".as_slice()), "OPTIONS");
    assert_eq!(d, CorsDecision::Withhold);
    assert!(!d.short_circuits());
}

#[test]
fn empty_frontend_url_never_grants() {
    let p = build_cors_policy("");
    assert_eq!(p.evaluate(Some(b"".as_slice()), "GET"), CorsDecision::Withhold);
    assert_eq!(p.evaluate(Some(FRONTEND.as_bytes()), "OPTIONS"), CorsDecision::Withhold);
}

#[test]
fn trailing_slash_frontend_url_never_matches_browser_origin() {
    let p = build_cors_policy("https://app.example.com/");
    assert_eq!(p.evaluate(Some(FRONTEND.as_bytes()), "GET"), CorsDecision::Withhold);
}
