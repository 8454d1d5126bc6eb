//! The fixed check pipeline.
//!
//! Every check is a pure function over the fetched markup, the measured
//! response time or the audited URL. Markup is inspected with case-insensitive
//! regular expressions on the raw text rather than a parsed DOM, so checks are
//! total: empty or malformed markup simply yields a failing verdict.

use crate::types::{CheckKind, CheckVerdict, FetchResult};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;
use url::Url;

/// Responses at or above this many seconds fail the performance check
pub const MAX_RESPONSE_SECS: f64 = 2.5;
/// Accepted `<title>` length, in characters
pub const TITLE_LENGTH: RangeInclusive<usize> = 10..=70;
/// Accepted meta description length, in characters
pub const META_DESCRIPTION_LENGTH: RangeInclusive<usize> = 50..=160;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("Failed to compile title regex")
});

// `name` must come before `content`; other attribute orders read as absent.
static META_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s+name\s*=\s*["']description["']\s+content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .expect("Failed to compile meta description regex")
});

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1\b").expect("Failed to compile h1 regex"));

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("Failed to compile img regex"));

static ALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\salt\s*=\s*(?:"[^"]+"|'[^']+')"#).expect("Failed to compile alt regex")
});

static VIEWPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*\sname\s*=\s*["']viewport["']"#)
        .expect("Failed to compile viewport regex")
});

/// Run every check against one fetched page, in [`CheckKind::ALL`] order
pub fn run_checks(url: &str, fetched: &FetchResult) -> Vec<CheckVerdict> {
    CheckKind::ALL
        .iter()
        .map(|kind| run_check(*kind, url, fetched))
        .collect()
}

/// Run a single check
pub fn run_check(kind: CheckKind, url: &str, fetched: &FetchResult) -> CheckVerdict {
    let html = fetched.body.as_str();
    match kind {
        CheckKind::Https => check_https(url),
        CheckKind::Performance => check_performance(fetched.elapsed_seconds),
        CheckKind::Title => check_title(html),
        CheckKind::MetaDescription => check_meta_description(html),
        CheckKind::Headings => check_headings(html),
        CheckKind::ImageAlt => check_images_alt(html),
        CheckKind::Viewport => check_viewport(html),
    }
}

/// Passes when the URL scheme is exactly `https`
pub fn check_https(url: &str) -> CheckVerdict {
    let passed = Url::parse(url)
        .map(|parsed| parsed.scheme() == "https")
        .unwrap_or(false);
    let message = if passed {
        "HTTPS enabled"
    } else {
        "HTTPS missing"
    };
    CheckVerdict::new(CheckKind::Https, passed, message)
}

/// Passes when the page was fully read in under [`MAX_RESPONSE_SECS`]
pub fn check_performance(elapsed_seconds: f64) -> CheckVerdict {
    CheckVerdict::new(
        CheckKind::Performance,
        elapsed_seconds < MAX_RESPONSE_SECS,
        format!("Response time: {:.2}s", elapsed_seconds),
    )
}

/// Checks the trimmed length of the first `<title>` element
pub fn check_title(html: &str) -> CheckVerdict {
    let length = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| char_len(m.as_str()))
        .unwrap_or(0);

    CheckVerdict::new(
        CheckKind::Title,
        TITLE_LENGTH.contains(&length),
        format!("<title> tag: {} characters", length),
    )
}

/// Checks the trimmed length of the first meta description's `content`
pub fn check_meta_description(html: &str) -> CheckVerdict {
    let length = META_DESCRIPTION_RE
        .captures(html)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| char_len(m.as_str()))
        .unwrap_or(0);

    CheckVerdict::new(
        CheckKind::MetaDescription,
        META_DESCRIPTION_LENGTH.contains(&length),
        format!("Meta description: {} characters", length),
    )
}

/// Passes with exactly one `<h1` tag opening
pub fn check_headings(html: &str) -> CheckVerdict {
    let count = H1_RE.find_iter(html).count();
    CheckVerdict::new(
        CheckKind::Headings,
        count == 1,
        format!("{} <h1> tag(s)", count),
    )
}

/// Passes when no `<img>` tag lacks a non-empty quoted `alt` attribute.
///
/// A page without images passes.
pub fn check_images_alt(html: &str) -> CheckVerdict {
    let (total, missing) = IMG_RE
        .find_iter(html)
        .fold((0usize, 0usize), |(total, missing), img| {
            if ALT_RE.is_match(img.as_str()) {
                (total + 1, missing)
            } else {
                (total + 1, missing + 1)
            }
        });

    CheckVerdict::new(
        CheckKind::ImageAlt,
        missing == 0,
        format!("Images without alt: {} / {}", missing, total),
    )
}

/// Passes when a `<meta name="viewport">` tag is present
pub fn check_viewport(html: &str) -> CheckVerdict {
    CheckVerdict::new(
        CheckKind::Viewport,
        VIEWPORT_RE.is_match(html),
        "Meta viewport present",
    )
}

fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}
