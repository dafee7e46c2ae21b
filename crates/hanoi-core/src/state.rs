// Settled board states: every disk sits on a peg.

use std::fmt;
use std::str::FromStr;

use crate::peg::{Disk, Peg};
use crate::{DISK_COUNT, PEG_COUNT, STATE_COUNT, StateError};

/// A complete assignment of every disk to a peg.
///
/// The stacking order on a peg is implied: smaller disks always sit above
/// larger ones, so the top disk of a peg is the lowest-numbered disk on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardState {
    pegs: [Peg; DISK_COUNT],
}

impl BoardState {
    /// Build a state from the peg of each disk, smallest disk first.
    pub const fn from_pegs(pegs: [Peg; DISK_COUNT]) -> Self {
        Self { pegs }
    }

    /// All disks stacked on a single peg.
    pub const fn uniform(peg: Peg) -> Self {
        Self {
            pegs: [peg; DISK_COUNT],
        }
    }

    /// Decode an encoded state such as `"abca"`.
    pub fn parse(encoded: &str) -> Result<Self, StateError> {
        let actual = encoded.chars().count();
        if actual != DISK_COUNT {
            return Err(StateError::WrongLength {
                expected: DISK_COUNT,
                actual,
            });
        }

        let mut pegs = [Peg::A; DISK_COUNT];
        for (position, symbol) in encoded.chars().enumerate() {
            pegs[position] =
                Peg::from_symbol(symbol).ok_or(StateError::InvalidSymbol { symbol, position })?;
        }
        Ok(Self { pegs })
    }

    /// The peg of each disk, smallest disk first.
    pub fn pegs(&self) -> &[Peg; DISK_COUNT] {
        &self.pegs
    }

    /// The peg a disk sits on.
    pub fn peg_of(&self, disk: Disk) -> Peg {
        self.pegs[disk.index()]
    }

    /// A copy of this state with one disk relocated.
    ///
    /// No legality check is made; see the transition engine for that.
    pub fn with_disk(&self, disk: Disk, peg: Peg) -> Self {
        let mut pegs = self.pegs;
        pegs[disk.index()] = peg;
        Self { pegs }
    }

    /// The movable disk of a peg, or `None` if the peg is empty.
    pub fn top_disk(&self, peg: Peg) -> Option<Disk> {
        self.pegs
            .iter()
            .position(|&p| p == peg)
            .and_then(Disk::from_index)
    }

    /// Top disk of every peg, indexed by [`Peg::index`].
    pub fn top_disks(&self) -> [Option<Disk>; PEG_COUNT] {
        Peg::ALL.map(|peg| self.top_disk(peg))
    }

    /// Disks on a peg from bottom to top (largest first).
    pub fn stack(&self, peg: Peg) -> Vec<Disk> {
        Disk::ALL
            .iter()
            .rev()
            .copied()
            .filter(|&disk| self.peg_of(disk) == peg)
            .collect()
    }

    /// Whether no disk sits on the peg.
    pub fn is_empty(&self, peg: Peg) -> bool {
        !self.pegs.contains(&peg)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{}", peg.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BoardState {
    type Error = StateError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Check whether `encoded` is a well-formed settled state: exactly four
/// symbols, each one of `a`, `b`, `c`.
pub fn is_valid_state(encoded: &str) -> bool {
    BoardState::parse(encoded).is_ok()
}

/// Enumerate every settled state.
///
/// Disk 1 varies slowest, so the sequence runs `aaaa, aaab, aaac, aaba, ...,
/// cccc`. The order is fixed and reproducible.
pub fn generate_all_states() -> Vec<BoardState> {
    (0..STATE_COUNT)
        .map(|n| {
            let mut pegs = [Peg::A; DISK_COUNT];
            let mut rest = n;
            for slot in pegs.iter_mut().rev() {
                *slot = Peg::ALL[rest % PEG_COUNT];
                rest /= PEG_COUNT;
            }
            BoardState { pegs }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn state(s: &str) -> BoardState {
        BoardState::parse(s).unwrap()
    }

    #[test]
    fn validation_accepts_canonical_symbols() {
        assert!(is_valid_state("aaaa"));
        assert!(is_valid_state("abca"));
        assert!(is_valid_state("cccc"));
    }

    #[test]
    fn validation_rejects_foreign_symbols() {
        assert!(!is_valid_state("abcd"));
        assert!(!is_valid_state("AAAA"));
        assert!(!is_valid_state("aasa"));
    }

    #[test]
    fn validation_rejects_wrong_length() {
        assert!(!is_valid_state("ab"));
        assert!(!is_valid_state(""));
        assert!(!is_valid_state("aaaaa"));
    }

    #[test]
    fn parse_reports_first_bad_symbol() {
        assert_eq!(
            BoardState::parse("abxd"),
            Err(StateError::InvalidSymbol {
                symbol: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn parse_counts_characters_not_bytes() {
        assert_eq!(
            BoardState::parse("aäa"),
            Err(StateError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn enumeration_is_complete_and_distinct() {
        let states = generate_all_states();
        assert_eq!(states.len(), 81);
        let unique: HashSet<_> = states.iter().collect();
        assert_eq!(unique.len(), 81);
        for s in &states {
            assert!(is_valid_state(&s.to_string()));
        }
    }

    #[test]
    fn enumeration_order_has_disk_one_slowest() {
        let states: Vec<String> = generate_all_states().iter().map(ToString::to_string).collect();
        assert_eq!(&states[..4], &["aaaa", "aaab", "aaac", "aaba"]);
        assert_eq!(states[27], "baaa");
        assert_eq!(states[80], "cccc");
    }

    #[test]
    fn enumeration_is_repeatable() {
        assert_eq!(generate_all_states(), generate_all_states());
    }

    #[test]
    fn top_disk_is_lowest_numbered() {
        let s = state("babb");
        assert_eq!(s.top_disk(Peg::A), Disk::new(2));
        assert_eq!(s.top_disk(Peg::B), Disk::new(1));
        assert_eq!(s.top_disk(Peg::C), None);
        assert_eq!(s.top_disks(), [Disk::new(2), Disk::new(1), None]);
    }

    #[test]
    fn stack_lists_largest_first() {
        let s = state("bcbb");
        assert_eq!(
            s.stack(Peg::B),
            vec![Disk::LARGEST, Disk::new(3).unwrap(), Disk::SMALLEST]
        );
        assert!(s.stack(Peg::A).is_empty());
        assert!(s.is_empty(Peg::A));
        assert!(!s.is_empty(Peg::C));
    }

    #[test]
    fn with_disk_relocates_only_that_disk() {
        let s = BoardState::uniform(Peg::A).with_disk(Disk::SMALLEST, Peg::C);
        assert_eq!(s.to_string(), "caaa");
        assert_eq!(s.peg_of(Disk::new(2).unwrap()), Peg::A);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_state() -> impl Strategy<Value = BoardState> {
            proptest::array::uniform4(0usize..3)
                .prop_map(|idx| BoardState::from_pegs(idx.map(|i| Peg::ALL[i])))
        }

        proptest! {
            #[test]
            fn display_then_parse_is_identity(s in any_state()) {
                prop_assert_eq!(BoardState::parse(&s.to_string()), Ok(s));
            }

            #[test]
            fn stacks_partition_the_disks(s in any_state()) {
                let total: usize = Peg::ALL.iter().map(|&p| s.stack(p).len()).sum();
                prop_assert_eq!(total, DISK_COUNT);
            }

            #[test]
            fn arbitrary_strings_validate_like_the_alphabet(text in "[a-e]{0,6}") {
                let expected = text.len() == 4 && text.chars().all(|c| matches!(c, 'a' | 'b' | 'c'));
                prop_assert_eq!(is_valid_state(&text), expected);
            }
        }
    }
}
