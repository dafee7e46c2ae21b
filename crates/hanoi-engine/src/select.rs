// Select-then-place model: a move is a lift followed by a place.

use hanoi_core::{Disk, Peg, SelectionState, StateError, generate_all_selection_states};
use tracing::warn;

use crate::{MoveModel, Transition};

/// Half of a move in the select-then-place model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The top disk of `from` was lifted.
    Lift { disk: Disk, from: Peg },
    /// The lifted disk was put on `to`.
    Place { disk: Disk, to: Peg },
}

impl Step {
    pub fn disk(self) -> Disk {
        match self {
            Step::Lift { disk, .. } | Step::Place { disk, .. } => disk,
        }
    }

    /// The peg that was clicked to take this step.
    pub fn peg(self) -> Peg {
        match self {
            Step::Lift { from, .. } => from,
            Step::Place { to, .. } => to,
        }
    }
}

/// The two-step interaction model over [`SelectionState`]s.
///
/// With nothing lifted, the top disk of any non-empty peg may be lifted. With
/// a disk lifted, it may be placed on any peg that holds no smaller disk,
/// including the peg it came from. Each state therefore has at most one
/// successor per peg.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectThenPlace;

impl SelectThenPlace {
    /// The action taken by clicking `peg`, or `None` if that click is illegal.
    pub fn step(&self, state: &SelectionState, peg: Peg) -> Option<(Step, SelectionState)> {
        if state.lifted().is_some() {
            state
                .place(peg)
                .map(|(disk, next)| (Step::Place { disk, to: peg }, next))
        } else {
            state
                .lift(peg)
                .map(|(disk, next)| (Step::Lift { disk, from: peg }, next))
        }
    }

    /// The state reached by clicking each peg, indexed by [`Peg::index`].
    pub fn peg_links(&self, state: &SelectionState) -> [Option<SelectionState>; 3] {
        Peg::ALL.map(|peg| self.step(state, peg).map(|(_, next)| next))
    }

    /// Successors of a raw encoded state, for callers holding a path segment.
    pub fn successors_of(
        &self,
        encoded: &str,
    ) -> Result<Vec<Transition<SelectionState, Step>>, StateError> {
        let state = SelectionState::parse(encoded).inspect_err(|e| {
            warn!(encoded, error = %e, "rejected state");
        })?;
        Ok(self.successors(&state))
    }
}

impl MoveModel for SelectThenPlace {
    type State = SelectionState;
    type Action = Step;

    fn states(&self) -> Vec<SelectionState> {
        generate_all_selection_states()
    }

    fn successors(&self, state: &SelectionState) -> Vec<Transition<SelectionState, Step>> {
        Peg::ALL
            .iter()
            .filter_map(|&peg| self.step(state, peg))
            .map(|(action, to)| Transition {
                from: *state,
                to,
                action,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> SelectionState {
        SelectionState::parse(s).unwrap()
    }

    fn links(s: &str) -> Vec<Option<String>> {
        SelectThenPlace
            .peg_links(&state(s))
            .iter()
            .map(|l| l.map(|n| n.to_string()))
            .collect()
    }

    #[test]
    fn lifting_from_a_full_peg() {
        assert_eq!(links("aaaa"), vec![Some("saaa".to_string()), None, None]);
    }

    #[test]
    fn lifting_takes_each_pegs_top_disk() {
        assert_eq!(
            links("abcc"),
            vec![
                Some("sbcc".to_string()),
                Some("ascc".to_string()),
                Some("absc".to_string()),
            ]
        );
    }

    #[test]
    fn placing_skips_pegs_with_smaller_disks() {
        // Disk 3 lifted; disk 1 on a, disk 2 on b.
        assert_eq!(links("absc"), vec![None, None, Some("abcc".to_string())]);
    }

    #[test]
    fn smallest_disk_can_be_placed_anywhere() {
        assert_eq!(
            links("sbbb"),
            vec![
                Some("abbb".to_string()),
                Some("bbbb".to_string()),
                Some("cbbb".to_string()),
            ]
        );
    }

    #[test]
    fn steps_carry_disk_and_peg() {
        let out = SelectThenPlace.successors(&state("babb"));
        let actions: Vec<Step> = out.iter().map(|t| t.action).collect();
        assert_eq!(
            actions,
            vec![
                Step::Lift { disk: Disk::new(2).unwrap(), from: Peg::A },
                Step::Lift { disk: Disk::SMALLEST, from: Peg::B },
            ]
        );
        assert_eq!(actions[1].peg(), Peg::B);
        assert_eq!(actions[0].disk(), Disk::new(2).unwrap());
    }

    #[test]
    fn successors_stay_within_the_enumerated_states() {
        let all = SelectThenPlace.states();
        for s in &all {
            let out = SelectThenPlace.successors(s);
            assert!(!out.is_empty(), "{s} has no successor");
            assert!(out.len() <= crate::MAX_SUCCESSORS);
            for t in out {
                assert!(all.contains(&t.to), "{} -> {} escapes", t.from, t.to);
            }
        }
    }

    #[test]
    fn lift_then_place_elsewhere_is_a_direct_move() {
        use crate::DirectMoves;
        use hanoi_core::{SelectionState, generate_all_states};

        for board in generate_all_states() {
            let mut composed = Vec::new();
            for lift in SelectThenPlace.successors(&SelectionState::from(board)) {
                for place in SelectThenPlace.successors(&lift.to) {
                    if let Some(settled) = place.to.settled() {
                        if settled != board {
                            composed.push(settled);
                        }
                    }
                }
            }
            let mut direct: Vec<_> = DirectMoves
                .moves(&board)
                .iter()
                .map(|m| m.apply(&board))
                .collect();
            composed.sort();
            direct.sort();
            assert_eq!(composed, direct, "{board}");
        }
    }

    #[test]
    fn successors_of_rejects_two_lifted_disks() {
        assert!(SelectThenPlace.successors_of("ssaa").is_err());
        assert_eq!(SelectThenPlace.successors_of("saaa").unwrap().len(), 3);
    }
}
