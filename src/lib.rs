//! Sets of words that share no letter, found by composing letter masks.
//!
//! Words become [`mask::LetterMask`]s, anagrams collapse into one
//! [`group::WordGroup`] bucket, [`combine::Chain`] grows k-word masks from
//! (k-1)-word ones, and [`expand::Expander`] turns full-length masks back
//! into word tuples.

pub mod combine;
pub mod config;
pub mod expand;
pub mod group;
pub mod input;
pub mod mask;
pub mod report;
pub mod solver;

pub use combine::{Chain, Provenance, SequenceMap};
pub use config::{Config, ConfigError};
pub use expand::{ExpandError, Expander};
pub use group::WordGroup;
pub use mask::{encode, LetterMask};
pub use solver::Options;
