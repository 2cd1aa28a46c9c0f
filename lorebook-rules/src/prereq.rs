//! Prerequisite expressions attached to bonus effects.
//!
//! Token codecs build these from fixed textual templates such as
//! `PREMULT:1,[PREHD:MIN=1],[PRELEVEL:MIN=1]`. Evaluating a prerequisite
//! against a character belongs to the host application; this layer only
//! constructs and round-trips the expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity checked by a leaf threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrereqKind {
    /// Total hit dice.
    HitDice,
    /// Character level.
    Level,
}

impl PrereqKind {
    /// Directive tag for this kind, as written in templates.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::HitDice => "PREHD",
            Self::Level => "PRELEVEL",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PREHD" => Some(Self::HitDice),
            "PRELEVEL" => Some(Self::Level),
            _ => None,
        }
    }
}

impl fmt::Display for PrereqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Compound boolean expression gating a bonus effect.
///
/// Codecs treat constructed values as opaque; only the builder below knows
/// the template grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prerequisite {
    /// At least `count` of `terms` must hold.
    AtLeast {
        count: u32,
        terms: Vec<Prerequisite>,
    },
    /// A single numeric threshold: the quantity must be at least `min`.
    Minimum { kind: PrereqKind, min: u32 },
}

/// Builds prerequisites from fixed directive templates.
///
/// Templates are compile-time constants owned by token codecs, so a
/// rejected template signals a defect in the codec, not bad dataset input.
/// Codecs hold a builder value rather than reaching for a global helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrerequisiteBuilder;

impl PrerequisiteBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse one `PREMULT:<n>,[<leaf>],...` template.
    ///
    /// Returns `None` on malformed text: missing prefix, bad count,
    /// unbracketed terms, unknown leaf tags, or non-numeric thresholds.
    #[must_use]
    pub fn build(&self, template: &str) -> Option<Prerequisite> {
        let rest = template.strip_prefix("PREMULT:")?;
        let (count_part, terms_part) = rest.split_once(',')?;
        let count: u32 = count_part.parse().ok()?;
        let mut terms = Vec::new();
        for term in split_bracketed(terms_part)? {
            terms.push(build_leaf(term)?);
        }
        if terms.is_empty() {
            return None;
        }
        Some(Prerequisite::AtLeast { count, terms })
    }
}

fn build_leaf(text: &str) -> Option<Prerequisite> {
    let (tag, spec) = text.split_once(':')?;
    let kind = PrereqKind::from_tag(tag)?;
    let min: u32 = spec.strip_prefix("MIN=")?.parse().ok()?;
    Some(Prerequisite::Minimum { kind, min })
}

/// Split `[A],[B],[C]` into its bracket contents.
///
/// Leaf terms never nest further brackets in the templates this crate owns.
fn split_bracketed(text: &str) -> Option<Vec<&str>> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    Some(inner.split("],[").collect())
}
