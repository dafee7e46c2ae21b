// Direct-move model: every transition relocates one top disk between pegs.

use hanoi_core::{BoardState, Disk, Peg, StateError, generate_all_states};
use tracing::warn;

use crate::{MoveError, MoveModel, Transition};

/// A single legal move: `disk` goes from the top of `from` to the top of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub disk: Disk,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    /// The move that undoes this one.
    pub fn reversed(self) -> Move {
        Move {
            disk: self.disk,
            from: self.to,
            to: self.from,
        }
    }

    /// Apply the move to a state. Legality is not rechecked.
    pub fn apply(self, state: &BoardState) -> BoardState {
        state.with_disk(self.disk, self.to)
    }
}

/// The one-step interaction model over settled [`BoardState`]s.
///
/// From any state there are at most three legal moves: disk 1 to either other
/// peg, and the single move between the two pegs that do not hold disk 1
/// (the smaller of their top disks goes onto the other; an empty peg accepts
/// any disk). Every move is reversible, so the resulting graph is symmetric.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectMoves;

impl DirectMoves {
    /// Legal moves from `state`, in successor order.
    pub fn moves(&self, state: &BoardState) -> Vec<Move> {
        let mut moves = Vec::with_capacity(crate::MAX_SUCCESSORS);
        let tops = state.top_disks();

        let home = state.peg_of(Disk::SMALLEST);
        let [left, right] = home.others();
        for to in [left, right] {
            moves.push(Move {
                disk: Disk::SMALLEST,
                from: home,
                to,
            });
        }

        match (tops[left.index()], tops[right.index()]) {
            (None, Some(disk)) => moves.push(Move {
                disk,
                from: right,
                to: left,
            }),
            (Some(disk), None) => moves.push(Move {
                disk,
                from: left,
                to: right,
            }),
            (Some(l), Some(r)) if l < r => moves.push(Move {
                disk: l,
                from: left,
                to: right,
            }),
            (Some(_), Some(r)) => moves.push(Move {
                disk: r,
                from: right,
                to: left,
            }),
            (None, None) => {}
        }

        moves
    }

    /// Successors of a raw encoded state, for callers holding a path segment.
    pub fn successors_of(
        &self,
        encoded: &str,
    ) -> Result<Vec<Transition<BoardState, Move>>, StateError> {
        let state = BoardState::parse(encoded).inspect_err(|e| {
            warn!(encoded, error = %e, "rejected state");
        })?;
        Ok(self.successors(&state))
    }

    /// Check a single requested move and describe it if it is legal.
    pub fn legal_move(&self, state: &BoardState, from: Peg, to: Peg) -> Result<Move, MoveError> {
        if from == to {
            return Err(MoveError::SamePeg(from));
        }
        let disk = state.top_disk(from).ok_or(MoveError::EmptyPeg(from))?;
        if let Some(onto) = state.top_disk(to) {
            if onto < disk {
                return Err(MoveError::LargerOnSmaller { disk, onto });
            }
        }
        Ok(Move { disk, from, to })
    }
}

impl MoveModel for DirectMoves {
    type State = BoardState;
    type Action = Move;

    fn states(&self) -> Vec<BoardState> {
        generate_all_states()
    }

    fn successors(&self, state: &BoardState) -> Vec<Transition<BoardState, Move>> {
        self.moves(state)
            .into_iter()
            .map(|action| Transition {
                from: *state,
                to: action.apply(state),
                action,
            })
            .collect()
    }
}

/// The full directed edge set of the direct-move model, in state enumeration
/// order and then successor order.
pub fn all_moves() -> Vec<Transition<BoardState, Move>> {
    let model = DirectMoves;
    model
        .states()
        .iter()
        .flat_map(|state| model.successors(state))
        .collect()
}
