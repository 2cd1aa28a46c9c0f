//! Bonus-effect value objects and their spec-string factory.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::prereq::Prerequisite;

/// A conditional numeric grant recorded against an entity.
///
/// Immutable once constructed; the owning store takes the value outright,
/// so effects are never shared between entities. Before insertion every
/// effect carries its originating directive's canonical name and exactly
/// one prerequisite group (the group itself may be compound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEffect {
    /// What the bonus raises (e.g. `FEAT`).
    pub target: String,
    /// Pool within the target that the magnitude feeds (e.g. `POOL`).
    pub pool: String,
    /// Integer magnitude; the directive grammar permits a leading sign.
    pub magnitude: i32,
    /// Canonical name of the directive that recorded this effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_token: Option<String>,
    /// The single prerequisite group gating this effect.
    pub prerequisites: SmallVec<[Prerequisite; 1]>,
}

impl BonusEffect {
    /// Decimal rendering of the magnitude, as unparse emits it.
    #[must_use]
    pub fn payload(&self) -> String {
        self.magnitude.to_string()
    }

    /// Tag the effect with the directive that created it.
    #[must_use]
    pub fn tagged(mut self, token: &str) -> Self {
        self.source_token = Some(token.to_string());
        self
    }

    /// Attach the prerequisite group gating this effect.
    #[must_use]
    pub fn gated_by(mut self, prereq: Prerequisite) -> Self {
        self.prerequisites.push(prereq);
        self
    }

    /// Whether this effect was recorded by the named directive.
    ///
    /// Canonical names match case-sensitively.
    #[must_use]
    pub fn is_from(&self, token: &str) -> bool {
        self.source_token.as_deref() == Some(token)
    }
}

/// Builds bonus effects from `TARGET|POOL|<magnitude>` spec strings.
///
/// Spec strings are fixed formats owned by token codecs; a rejected spec is
/// an internal defect, never a dataset input error. Codecs hold a factory
/// value rather than reaching for a global constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BonusFactory;

impl BonusFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse one spec string.
    ///
    /// Returns `None` on malformed specs: wrong segment count, empty
    /// target or pool, or a non-integer magnitude.
    #[must_use]
    pub fn build(&self, spec: &str) -> Option<BonusEffect> {
        let mut parts = spec.split('|');
        let target = parts.next()?;
        let pool = parts.next()?;
        let magnitude = parts.next()?;
        if parts.next().is_some() || target.is_empty() || pool.is_empty() {
            return None;
        }
        let magnitude: i32 = magnitude.parse().ok()?;
        Some(BonusEffect {
            target: target.to_string(),
            pool: pool.to_string(),
            magnitude,
            source_token: None,
            prerequisites: SmallVec::new(),
        })
    }
}
