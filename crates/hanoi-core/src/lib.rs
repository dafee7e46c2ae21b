//! Board state codec for the four-disk Tower of Hanoi.
//!
//! A board configuration is encoded as a string of exactly [`DISK_COUNT`]
//! symbols, one per disk in disk-number order (position 0 is disk 1, the
//! smallest). Each symbol names the peg the disk sits on. The
//! select-then-place interaction model adds a fourth symbol for a disk that
//! has been lifted off its peg but not yet placed.
//!
//! # Architecture
//!
//! - [`peg`] -- Peg and disk identities
//! - [`state`] -- [`BoardState`], validation and enumeration of the 81 settled states
//! - [`selection`] -- [`SelectionState`] for the select-then-place model

pub mod peg;
pub mod selection;
pub mod state;

pub use peg::{Disk, Peg};
pub use selection::{Location, SelectionState, generate_all_selection_states, is_valid_selection_state};
pub use state::{BoardState, generate_all_states, is_valid_state};

/// Number of disks on the board.
pub const DISK_COUNT: usize = 4;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Number of settled board states (`PEG_COUNT ^ DISK_COUNT`).
pub const STATE_COUNT: usize = 81;

/// Symbol marking a lifted disk in the select-then-place encoding.
pub const LIFTED_SYMBOL: char = 's';

/// Error type for decoding an encoded state string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state must be {expected} symbols long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("at most one disk may be lifted, found {count}")]
    MultipleLifted { count: usize },
}
