//! Browser support detection from user-agent strings.
//!
//! The support matrix is a single pattern with one alternative per browser
//! family. A user agent is supported when any alternative matches anywhere
//! in the string; version thresholds are encoded as digit ranges, so every
//! family accepts its minimum version and anything above it.
//!
//! | Family | Minimum |
//! |--------|---------|
//! | Edge | 18 |
//! | Firefox | 65 |
//! | Chrome / Chromium | 58 |
//! | Safari (macOS) | 14 |
//! | Opera | 44 |
//! | iOS Safari | 14 |
//! | Android WebView | 107 |
//! | Opera Mobile | 64 |
//! | Firefox for Android | 106 |
//! | Chrome for Android | 107 |
//! | UC Browser | 13.4 |
//! | Samsung Internet | 6.2 |
//! | QQ Browser | 13.1 |
//!
//! Chrome tokens followed by a trailing `Safari/x Edge/y` (EdgeHTML, which
//! impersonates Chrome) are excluded from the Chrome alternative; those user
//! agents only pass through the Edge alternative.

use fancy_regex::{Regex, RegexBuilder};
use once_cell::sync::Lazy;
use tracing::warn;

// Any character but a line terminator, as `.` reads in a browser.
macro_rules! not_newline {
    () => {
        "[^\n\r\u{2028}\u{2029}]"
    };
}

/// Source of [`SUPPORTED_BROWSERS`].
///
/// Digit and word classes are spelled out as ASCII ranges so that non-ASCII
/// digits never count towards a version number, and wildcards never cross
/// `\n`, `\r`, U+2028 or U+2029.
pub const SUPPORTED_BROWSERS_PATTERN: &str = concat!(
    // Edge
    r"Edge?/(?:1[89]|[2-9][0-9]|[0-9]{3,})(?:\.[0-9]+)?(?:\.[0-9]+)?",
    // Firefox
    r"|Firefox/(?:6[5-9]|[7-9][0-9]|[0-9]{3,})\.[0-9]+(?:\.[0-9]+)?",
    // Chrome / Chromium, not EdgeHTML
    r"|Chrom(?:ium|e)/(?:5[89]|[6-9][0-9]|[0-9]{3,})\.[0-9]+(?:\.[0-9]+)?(?:[0-9.]+$|",
    not_newline!(),
    r"*Safari/(?![0-9.]+ Edge/[0-9.]+$))",
    // Safari on macOS
    r"|Maci",
    not_newline!(),
    r"+ Version/(?:14\.[0-9]+|(?:1[5-9]|[2-9][0-9]|[0-9]{3,})\.[0-9]+)(?:[,.][0-9]+)?(?: Mobile/[0-9A-Za-z_]+)? Safari/",
    // Opera
    r"|Chrome",
    not_newline!(),
    r"+OPR/(?:4[4-9]|[5-9][0-9]|[0-9]{3,})\.[0-9]+\.[0-9]+",
    // iOS
    r"|(?:CPU[ +]OS|iPhone[ +]OS|CPU[ +]iPhone|CPU IPhone OS|CPU iPad OS)[ +]+(?:14[._][0-9]+|(?:1[5-9]|[2-9][0-9]|[0-9]{3,})[._][0-9]+)(?:[._][0-9]+)?",
    // Android WebView
    r"|Android:?[ /-](?:10[7-9]|1[1-9][0-9]|[2-9][0-9]{2}|[0-9]{4,})(?:\.[0-9]+)?(?:\.[0-9]+)?",
    // Opera Mobile
    r"|Mobile Safari",
    not_newline!(),
    r"+OPR/(?:6[4-9]|[7-9][0-9]|[0-9]{3,})\.[0-9]+\.[0-9]+",
    // Firefox for Android
    r"|Android",
    not_newline!(),
    r"+Firefox/(?:10[6-9]|1[1-9][0-9]|[2-9][0-9]{2}|[0-9]{4,})\.[0-9]+(?:\.[0-9]+)?",
    // Chrome for Android
    r"|Android",
    not_newline!(),
    r"+Chrom(?:ium|e)/(?:10[7-9]|1[1-9][0-9]|[2-9][0-9]{2}|[0-9]{4,})\.[0-9]+(?:\.[0-9]+)?",
    // UC Browser
    r"|Android",
    not_newline!(),
    r"+(?:UC? ?Browser|UCWEB|U3)[ /]?(?:13\.(?:[4-9]|[0-9]{2,})|(?:1[4-9]|[2-9][0-9]|[0-9]{3,})\.[0-9]+)\.[0-9]+",
    // Samsung Internet
    r"|SamsungBrowser/(?:6\.(?:[2-9]|[0-9]{2,})|(?:[7-9]|[0-9]{2,})\.[0-9]+)",
    // QQ Browser
    r"|Android",
    not_newline!(),
    r"+MQ{2}Browser/(?:13(?:\.(?:[1-9]|[0-9]{2,}))?|(?:1[4-9]|[2-9][0-9]|[0-9]{3,})(?:\.[0-9]+)?)(?:\.[0-9]+)?",
);

/// Backtracking budget for a single match.
///
/// Wildcard alternatives cost quadratic steps in the input length; this
/// budget covers user agents tens of thousands of characters long.
pub const BACKTRACK_LIMIT: usize = 1_000_000_000;

/// The compiled support matrix, built on first use.
pub static SUPPORTED_BROWSERS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(SUPPORTED_BROWSERS_PATTERN)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .expect("supported browsers pattern is valid")
});

/// Returns true if the user agent meets the minimum browser versions.
///
/// Never fails: empty or unrecognisable strings are unsupported.
///
/// # Example
///
/// ```rust
/// use passthrough::is_supported;
///
/// assert!(is_supported("Mozilla/5.0 (X11; Linux x86_64; rv:115.0) Gecko/20100101 Firefox/115.0"));
/// assert!(!is_supported("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)"));
/// ```
pub fn is_supported(user_agent: &str) -> bool {
    match SUPPORTED_BROWSERS.is_match(user_agent) {
        Ok(matched) => matched,
        Err(err) => {
            warn!(error = %err, user_agent, "browser support match aborted");
            false
        }
    }
}
