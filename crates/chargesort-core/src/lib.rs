//! chargesort-core — charge-rate node ranking and top-choice validation.
//!
//! This crate holds the only algorithmic part of the charge-rate policy.
//! It knows nothing about the host scheduler: callers hand in the full
//! candidate set for every decision and get back either a ranking or a
//! [`Decision`].
//!
//! # Components
//!
//! - **`ranker`** — Orders candidates by charge rate (highest first, stable on ties)
//! - **`validator`** — Answers "is this node the top choice?"
//! - **`types`** — Candidate, ranking and decision types
//! - **`error`** — Conditions that prevent a decision from being made

pub mod error;
pub mod ranker;
pub mod types;
pub mod validator;

pub use error::{PolicyError, PolicyResult};
pub use ranker::{rank, top_choice};
pub use types::{CandidateNode, Decision, RankedSequence, ReasonCode};
pub use validator::{is_top_choice, is_top_choice_for};
