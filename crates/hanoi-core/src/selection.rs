// States of the select-then-place interaction model.
//
// A move is split in two: lifting the top disk of a peg (its symbol becomes
// `s`), then placing it on a peg. Between the two steps exactly one disk is
// off the board.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::peg::{Disk, Peg};
use crate::state::{BoardState, generate_all_states};
use crate::{DISK_COUNT, LIFTED_SYMBOL, StateError};

/// Where a disk is in the select-then-place model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// Stacked on a peg.
    On(Peg),
    /// Lifted off its peg and not yet placed.
    Lifted,
}

impl Location {
    pub const fn symbol(self) -> char {
        match self {
            Location::On(peg) => peg.symbol(),
            Location::Lifted => LIFTED_SYMBOL,
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Location> {
        match symbol {
            LIFTED_SYMBOL => Some(Location::Lifted),
            _ => match Peg::from_symbol(symbol) {
                Some(peg) => Some(Location::On(peg)),
                None => None,
            },
        }
    }
}

/// A board state that may have one disk lifted.
///
/// Invariant: at most one disk is [`Location::Lifted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionState {
    slots: [Location; DISK_COUNT],
}

impl SelectionState {
    /// Decode a state such as `"sabb"`.
    pub fn parse(encoded: &str) -> Result<Self, StateError> {
        let actual = encoded.chars().count();
        if actual != DISK_COUNT {
            return Err(StateError::WrongLength {
                expected: DISK_COUNT,
                actual,
            });
        }

        let mut slots = [Location::On(Peg::A); DISK_COUNT];
        for (position, symbol) in encoded.chars().enumerate() {
            slots[position] = Location::from_symbol(symbol)
                .ok_or(StateError::InvalidSymbol { symbol, position })?;
        }

        let count = slots.iter().filter(|&&l| l == Location::Lifted).count();
        if count > 1 {
            return Err(StateError::MultipleLifted { count });
        }
        Ok(Self { slots })
    }

    /// Where a disk currently is.
    pub fn location_of(&self, disk: Disk) -> Location {
        self.slots[disk.index()]
    }

    /// The lifted disk, if one is mid-move.
    pub fn lifted(&self) -> Option<Disk> {
        self.slots
            .iter()
            .position(|&l| l == Location::Lifted)
            .and_then(Disk::from_index)
    }

    /// The equivalent settled state, or `None` while a disk is lifted.
    pub fn settled(&self) -> Option<BoardState> {
        let mut pegs = [Peg::A; DISK_COUNT];
        for (slot, location) in pegs.iter_mut().zip(self.slots) {
            match location {
                Location::On(peg) => *slot = peg,
                Location::Lifted => return None,
            }
        }
        Some(BoardState::from_pegs(pegs))
    }

    /// The movable disk on a peg. A lifted disk is on no peg.
    pub fn top_disk(&self, peg: Peg) -> Option<Disk> {
        self.slots
            .iter()
            .position(|&l| l == Location::On(peg))
            .and_then(Disk::from_index)
    }

    /// Lift the top disk of `peg`. Returns `None` if the peg is empty or a
    /// disk is already lifted.
    pub fn lift(&self, peg: Peg) -> Option<(Disk, SelectionState)> {
        if self.lifted().is_some() {
            return None;
        }
        let disk = self.top_disk(peg)?;
        let mut slots = self.slots;
        slots[disk.index()] = Location::Lifted;
        Some((disk, Self { slots }))
    }

    /// Place the lifted disk on `peg`. Returns `None` if nothing is lifted or
    /// a smaller disk already sits on `peg`.
    pub fn place(&self, peg: Peg) -> Option<(Disk, SelectionState)> {
        let disk = self.lifted()?;
        if self.slots[..disk.index()].contains(&Location::On(peg)) {
            return None;
        }
        let mut slots = self.slots;
        slots[disk.index()] = Location::On(peg);
        Some((disk, Self { slots }))
    }
}

impl From<BoardState> for SelectionState {
    fn from(state: BoardState) -> Self {
        Self {
            slots: state.pegs().map(Location::On),
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.slots {
            write!(f, "{}", location.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for SelectionState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check whether `encoded` is a well-formed select-then-place state: four
/// symbols from `a`, `b`, `c`, `s`, with at most one `s`.
pub fn is_valid_selection_state(encoded: &str) -> bool {
    SelectionState::parse(encoded).is_ok()
}

/// Enumerate every page of the select-then-place model.
///
/// The 81 settled states come first, in [`generate_all_states`] order,
/// followed by every lifted state reachable by lifting a top disk, in
/// first-seen order.
pub fn generate_all_selection_states() -> Vec<SelectionState> {
    let settled: Vec<SelectionState> = generate_all_states()
        .into_iter()
        .map(SelectionState::from)
        .collect();

    let mut seen = HashSet::new();
    let mut lifted = Vec::new();
    for state in &settled {
        for peg in Peg::ALL {
            if let Some((_, next)) = state.lift(peg) {
                if seen.insert(next) {
                    lifted.push(next);
                }
            }
        }
    }

    let mut all = settled;
    all.extend(lifted);
    all
}
