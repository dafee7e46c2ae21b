//! Transition engine for the four-disk Tower of Hanoi.
//!
//! Given a board state, computes the states reachable by one legal action,
//! and for the whole state space, the full edge set.
//!
//! The two interaction models have separate state types and cannot be mixed:
//!
//! - [`direct`] -- one-step moves between settled states ([`DirectMoves`])
//! - [`select`] -- lift a disk, then place it ([`SelectThenPlace`])
//! - [`graph`] -- [`StateGraph`], the enumerated states plus all transitions

pub mod direct;
pub mod graph;
pub mod select;

use std::fmt;
use std::hash::Hash;

use hanoi_core::{Disk, Peg};

pub use direct::{DirectMoves, Move, all_moves};
pub use graph::StateGraph;
pub use select::{SelectThenPlace, Step};

/// Upper bound on the number of successors of any state, in either model.
pub const MAX_SUCCESSORS: usize = 3;

/// Error type for a single requested move that is not legal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("peg {0} has no disk to move")]
    EmptyPeg(Peg),
    #[error("source and destination are both peg {0}")]
    SamePeg(Peg),
    #[error("disk {disk} cannot be placed on smaller disk {onto}")]
    LargerOnSmaller { disk: Disk, onto: Disk },
}

/// One edge of the state graph: `from` becomes `to` by `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition<S, A> {
    pub from: S,
    pub to: S,
    pub action: A,
}

/// An interaction model: the set of states it can be in and the legal
/// transitions out of each.
///
/// Successor generation never fails. Illegal candidates are left out of the
/// result, so a state with no legal action yields an empty vector.
pub trait MoveModel {
    type State: Copy + Eq + Hash + fmt::Display + fmt::Debug;
    type Action: Copy + Eq + fmt::Debug;

    /// Every state of the model, in a fixed order.
    fn states(&self) -> Vec<Self::State>;

    /// The transitions out of `state`, at most [`MAX_SUCCESSORS`].
    fn successors(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;
}
