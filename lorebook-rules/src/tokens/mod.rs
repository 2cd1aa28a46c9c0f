//! Token codec implementations, one module per directive family.

mod startfeats;

pub use startfeats::StartfeatsToken;
