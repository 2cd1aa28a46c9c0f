//! Lorebook rules-data token layer
//!
//! Platform-agnostic parse/unparse codecs for the line-oriented Lorebook
//! dataset format. Each directive ("token") family owns a bidirectional
//! mapping: `parse` applies a directive's payload string as a mutation on a
//! domain entity, and `unparse` reconstructs equivalent payload strings from
//! the entity's recorded state, for editing tools and format round-tripping.

pub mod bonus;
pub mod outcome;
pub mod prereq;
pub mod race;
pub mod token;
pub mod tokens;
pub mod weighted;

// Re-export commonly used types
pub use bonus::{BonusEffect, BonusFactory};
pub use outcome::{ParseOutcome, TokenError};
pub use prereq::{PrereqKind, Prerequisite, PrerequisiteBuilder};
pub use race::{EffectStore, Race};
pub use token::{RaceToken, TokenRegistry};
pub use tokens::StartfeatsToken;
pub use weighted::WeightedTally;
