//! Token capability trait and the name-to-codec dispatch table.

use std::collections::HashMap;

use crate::outcome::{ParseOutcome, TokenError};
use crate::race::Race;

/// Capability set every race-file token implements.
///
/// `parse` applies one directive payload to a race; `unparse` reconstructs
/// the payload strings from recorded state, or `None` when the directive is
/// absent. The pair must round-trip: reparsing unparsed output reproduces
/// the same recorded effects.
pub trait RaceToken {
    /// Canonical uppercase directive name. Doubles as the dispatch key and
    /// as the source tag on every effect this token records.
    fn canonical_name(&self) -> &'static str;

    /// Apply one directive payload to `race`.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] value on bad payload text or on a rejected
    /// fixed template; never panics across this boundary.
    fn parse(&self, race: &mut Race, value: &str) -> ParseOutcome;

    /// Reconstruct payload strings from `race`'s recorded additions.
    ///
    /// `None` is the absence sentinel, not an empty sequence.
    fn unparse(&self, race: &Race) -> Option<Vec<String>>;
}

/// Dispatch table mapping canonical directive names to codecs.
#[derive(Default)]
pub struct TokenRegistry {
    tokens: HashMap<&'static str, Box<dyn RaceToken>>,
}

impl TokenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every token family this crate ships.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::tokens::StartfeatsToken::new()));
        registry
    }

    /// Register a codec under its canonical name, replacing any previous
    /// codec with the same name.
    pub fn register(&mut self, token: Box<dyn RaceToken>) {
        let name = token.canonical_name();
        log::debug!("registering race token {name}");
        self.tokens.insert(name, token);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn RaceToken> {
        self.tokens.get(name).map(Box::as_ref)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Dispatch one already-split `NAME:VALUE` directive to its codec.
    ///
    /// # Errors
    ///
    /// Returns the codec's failure unchanged, or
    /// [`TokenError::Unrecognized`] when no codec owns `name`. Failures are
    /// also logged so a load pass can continue and still leave a trail.
    pub fn parse_directive(&self, race: &mut Race, name: &str, value: &str) -> ParseOutcome {
        let Some(token) = self.get(name) else {
            log::debug!("no codec registered for token {name}");
            return Err(TokenError::Unrecognized {
                name: name.to_string(),
            });
        };
        let outcome = token.parse(race, value);
        if let Err(err) = &outcome {
            log::warn!("directive rejected for race {}: {err}", race.name);
        }
        outcome
    }
}
