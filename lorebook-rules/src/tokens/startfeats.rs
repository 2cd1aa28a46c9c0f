//! STARTFEATS - bonus starting feat slots for a race.
//!
//! `STARTFEATS:<n>` grants `n` extra feat-pool slots, gated so the grant
//! only applies once a character of the race actually has a hit die and a
//! level.

use crate::bonus::BonusFactory;
use crate::outcome::{ParseOutcome, TokenError};
use crate::prereq::PrerequisiteBuilder;
use crate::race::Race;
use crate::token::RaceToken;
use crate::weighted::WeightedTally;

const TOKEN_NAME: &str = "STARTFEATS";
const BONUS_TARGET: &str = "FEAT|POOL";
const GATE_TEMPLATE: &str = "PREMULT:1,[PREHD:MIN=1],[PRELEVEL:MIN=1]";

/// Codec for the `STARTFEATS` directive.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartfeatsToken {
    bonuses: BonusFactory,
    gates: PrerequisiteBuilder,
}

impl StartfeatsToken {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bonuses: BonusFactory::new(),
            gates: PrerequisiteBuilder::new(),
        }
    }
}

impl RaceToken for StartfeatsToken {
    fn canonical_name(&self) -> &'static str {
        TOKEN_NAME
    }

    fn parse(&self, race: &mut Race, value: &str) -> ParseOutcome {
        let Ok(magnitude) = value.parse::<i32>() else {
            return Err(TokenError::ExpectedInteger {
                token: TOKEN_NAME,
                value: value.to_string(),
            });
        };
        let Some(bonus) = self.bonuses.build(&format!("{BONUS_TARGET}|{magnitude}")) else {
            return Err(TokenError::Internal {
                token: TOKEN_NAME,
                what: "bonus",
            });
        };
        let Some(gate) = self.gates.build(GATE_TEMPLATE) else {
            return Err(TokenError::Internal {
                token: TOKEN_NAME,
                what: "prerequisite",
            });
        };
        race.add_bonus(bonus.gated_by(gate).tagged(TOKEN_NAME));
        Ok(())
    }

    fn unparse(&self, race: &Race) -> Option<Vec<String>> {
        let added = race.bonus_additions()?;
        let mut values = WeightedTally::new();
        for bonus in added {
            if bonus.is_from(TOKEN_NAME) {
                values.insert(bonus.payload());
            }
        }
        if values.is_empty() {
            // No effects from this token among the additions; same sentinel
            // as a race the token never touched.
            return None;
        }
        Some(values.into_ordered())
    }
}
