//! Clean-up for template YAML produced by the generation service.
//!
//! Model output may arrive wrapped in a markdown code fence and may contain
//! `<think>...</think>` reasoning spans. Both are removed before the text is
//! parsed. The result gets no special trust: it goes through the same parser
//! and validator as a hand-written cliqfile.

use crate::error::{CliqError, Result};
use crate::template::TemplateDocument;
use crate::validate::Profile;
use base64::Engine as _;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static THINK_RE: OnceLock<Regex> = OnceLock::new();
static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn think_re() -> &'static Regex {
    THINK_RE.get_or_init(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid regex"))
}

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```(?:yaml|yml)?\s*\n(.*?)\n\s*```\s*$").expect("valid regex")
    })
}

pub fn strip_think_tags(s: &str) -> String {
    think_re().replace_all(s, "").into_owned()
}

/// Remove think spans, then unwrap the text if all of it is one fenced block.
pub fn strip_fences(s: &str) -> String {
    let without_think = strip_think_tags(s);
    let out = without_think.trim();
    match fence_re().captures(out).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim().to_string(),
        None => out.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Wire representation of a generated YAML string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Plain,
    Base64,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Plain => "plain",
            Encoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Encoding {
    type Err = CliqError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Encoding::Plain),
            "base64" => Ok(Encoding::Base64),
            _ => Err(CliqError::Decode(format!(
                "unknown encoding '{s}' (expected plain or base64)"
            ))),
        }
    }
}

pub fn encode_payload(encoding: Encoding, yaml: &str) -> String {
    match encoding {
        Encoding::Plain => yaml.to_string(),
        Encoding::Base64 => base64::engine::general_purpose::STANDARD.encode(yaml),
    }
}

pub fn decode_payload(encoding: Encoding, payload: &str) -> Result<String> {
    match encoding {
        Encoding::Plain => Ok(payload.to_string()),
        Encoding::Base64 => {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(payload.trim())
                .map_err(|e| CliqError::Decode(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| CliqError::Decode(e.to_string()))
        }
    }
}

/// Decode, strip and parse a generated template, then validate it under
/// `profile`. Returns the cleaned YAML together with the document.
pub fn sanitize_generated(
    payload: &str,
    encoding: Encoding,
    profile: Profile,
) -> Result<(String, TemplateDocument)> {
    let yaml = strip_fences(&decode_payload(encoding, payload)?);
    let doc = TemplateDocument::parse_and_validate(&yaml, profile)?;
    Ok((yaml, doc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
