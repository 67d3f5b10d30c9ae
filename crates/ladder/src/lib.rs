//! Priority ladders for one-decision-per-cycle agents.
//!
//! A ladder is an ordered list of named tiers. Each cycle the tiers are
//! evaluated top to bottom; the first one that acts wins and the rest are
//! never consulted. Every tier is a standalone value, so each rung of the
//! arbitration policy can be audited and unit-tested on its own.
//!
//! - **Deterministic**: evaluation order is fixed at construction
//! - **No Running state**: a tier either acts this cycle or passes
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Tier`]: Core trait for all rungs
//! - [`Verdict`]: `Act(action)` or `Pass`
//! - [`Ladder`]: First-acting-tier-wins arbitration (OR semantics)
//! - [`Guarded`]: Tier that only runs when its guard holds (AND semantics)

pub mod ladder;
pub mod tier;
pub mod verdict;

pub use ladder::{DEFAULT_TIER, Decision, Guarded, Ladder};
pub use tier::{FnTier, Tier};
pub use verdict::Verdict;
