//! Text normalization — repairs PDF extraction artifacts into a canonical
//! single-line form. Every step is idempotent, so normalizing twice is a
//! no-op.

use once_cell::sync::Lazy;
use regex::Regex;

// "(cid:123)" glyph placeholders and stray '#' markers left by extractors
static ARTIFACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(cid:\d+\)|[#]").unwrap());

// Vertical / control whitespace runs
static VERTICAL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\t\r\f]+").unwrap());

// Lowercase-or-digit glued to an uppercase letter across a removed line
// break ("aDeveloper" -> "a Developer")
static GLUED_CASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Clean raw extracted text into a canonical single-line form.
///
/// Steps, in order: strip artifact tokens, collapse vertical whitespace,
/// split glued case transitions, collapse multiple spaces, trim.
pub fn normalize(raw: &str) -> String {
    let text = ARTIFACT_RE.replace_all(raw, " ");
    let text = VERTICAL_WS_RE.replace_all(&text, " ");
    let text = GLUED_CASE_RE.replace_all(&text, "$1 $2");
    let text = MULTI_SPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
