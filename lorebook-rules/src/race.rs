//! Race definitions and their recorded bonus effects.

use serde::{Deserialize, Serialize};

use crate::bonus::BonusEffect;

/// Append-only record of bonus effects with a movable baseline.
///
/// The baseline separates effects that existed before the current load or
/// edit pass from those added during it. Tokens only ever append; nothing
/// in the token layer removes entries, so insertion order stays intact for
/// traceability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectStore {
    effects: Vec<BonusEffect>,
    baseline: usize,
}

impl EffectStore {
    /// Append one effect after the baseline.
    pub fn push(&mut self, effect: BonusEffect) {
        self.effects.push(effect);
    }

    /// Effects appended since the baseline, in insertion order.
    ///
    /// `None` when nothing has been appended since the baseline, which
    /// collapses "never touched" and "touched, then re-baselined" into one
    /// signal; callers that need the distinction inspect [`Self::all`].
    #[must_use]
    pub fn additions(&self) -> Option<&[BonusEffect]> {
        let added = &self.effects[self.baseline..];
        if added.is_empty() { None } else { Some(added) }
    }

    /// All recorded effects in insertion order, baseline included.
    #[must_use]
    pub fn all(&self) -> &[BonusEffect] {
        &self.effects
    }

    /// Move the baseline past every recorded effect.
    pub fn mark_baseline(&mut self) {
        self.baseline = self.effects.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }
}

/// One race definition from the dataset.
///
/// Created by the load pipeline before any directive is parsed and kept for
/// the dataset's lifetime. Token codecs mutate it only through
/// [`Race::add_bonus`]; the load pipeline serializes all directive
/// applications to one race, so no locking happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    bonuses: EffectStore,
}

impl Race {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bonuses: EffectStore::default(),
        }
    }

    /// Record a bonus effect. Callers tag the effect's source first.
    pub fn add_bonus(&mut self, effect: BonusEffect) {
        self.bonuses.push(effect);
    }

    /// Bonus effects added since the baseline, from any source token.
    ///
    /// `None` means the bonus mechanism was never touched in this pass;
    /// unparse paths turn that into their absence sentinel.
    #[must_use]
    pub fn bonus_additions(&self) -> Option<&[BonusEffect]> {
        self.bonuses.additions()
    }

    /// Re-baseline after a save or export so later edits diff cleanly.
    pub fn mark_bonus_baseline(&mut self) {
        self.bonuses.mark_baseline();
    }

    /// Full effect record, baseline included.
    #[must_use]
    pub fn bonuses(&self) -> &EffectStore {
        &self.bonuses
    }
}
