//! Payload resolution: finding usable vector markup in whatever a design
//! export hands over.
//!
//! Exports embed markup in several ways: as literal text, percent-encoded,
//! behind a `url(...)` background reference, or packed into a data URI.
//! [`resolve_markup`] tries each strategy in a fixed order and keeps the
//! first result that actually contains an `<svg` root. Decode failures are
//! logged and treated as "this strategy did not apply".

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use decal_core::{CssProperty, StyleMap};
use percent_encoding::percent_decode_str;
use regex::Regex;

/// First successful decode containing an `<svg` root wins; `None` when no
/// strategy produced vector markup.
pub fn resolve_markup(payload: &str, style: &StyleMap) -> Option<String> {
    if payload.contains("<svg") {
        return Some(payload.to_string());
    }
    if let Some(decoded) = percent_decoded(payload) {
        if decoded.contains("<svg") {
            return Some(decoded);
        }
    }
    if let Some(reference) = background_url(style) {
        if let Some(decoded) = data_uri_body(&reference) {
            if decoded.contains("<svg") {
                return Some(decoded);
            }
        }
    }
    if let Some(decoded) = data_uri_body(payload) {
        if decoded.contains("<svg") {
            return Some(decoded);
        }
    }
    None
}

fn percent_decoded(text: &str) -> Option<String> {
    if !text.contains('%') {
        return None;
    }
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(error) => {
            log::debug!("percent decoding produced invalid utf-8: {}", error);
            None
        }
    }
}

/// Extracts the target of a `url(...)` from the background styles. Quotes
/// around the target are tolerated.
fn background_url(style: &StyleMap) -> Option<String> {
    static URL: OnceLock<Regex> = OnceLock::new();
    let pattern = URL
        .get_or_init(|| Regex::new(r#"url\(\s*['"]?([^'")]+)['"]?\s*\)"#).expect("valid pattern"));
    let value = style
        .get(CssProperty::BackgroundImage)
        .or_else(|| style.get(CssProperty::Background))?;
    pattern
        .captures(value)
        .map(|captures| captures[1].trim().to_string())
}

/// Decodes the body of a `data:` URI: base64 when flagged, percent-decoded
/// otherwise, raw as a last resort.
fn data_uri_body(text: &str) -> Option<String> {
    let rest = text.trim().strip_prefix("data:")?;
    let (meta, body) = rest.split_once(',')?;
    if meta.ends_with(";base64") {
        match STANDARD.decode(body.trim()) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(decoded) => Some(decoded),
                Err(error) => {
                    log::debug!("base64 payload is not utf-8: {}", error);
                    None
                }
            },
            Err(error) => {
                log::debug!("base64 decoding failed: {}", error);
                None
            }
        }
    } else {
        percent_decoded(body).or_else(|| Some(body.to_string()))
    }
}
