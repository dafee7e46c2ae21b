// Peg and disk identities.

use std::fmt;

use crate::DISK_COUNT;

/// One of the three pegs.
///
/// Ordering follows the alphabet of the encoding (`a < b < c`), which is the
/// order successors are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs in encoding order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// The symbol used for this peg in an encoded state.
    pub const fn symbol(self) -> char {
        match self {
            Peg::A => 'a',
            Peg::B => 'b',
            Peg::C => 'c',
        }
    }

    /// Decode a peg symbol. Only the lowercase canonical symbols are accepted.
    pub const fn from_symbol(symbol: char) -> Option<Peg> {
        match symbol {
            'a' => Some(Peg::A),
            'b' => Some(Peg::B),
            'c' => Some(Peg::C),
            _ => None,
        }
    }

    /// Zero-based index (`A = 0`, `B = 1`, `C = 2`).
    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// The two other pegs, in encoding order.
    pub const fn others(self) -> [Peg; 2] {
        match self {
            Peg::A => [Peg::B, Peg::C],
            Peg::B => [Peg::A, Peg::C],
            Peg::C => [Peg::A, Peg::B],
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A disk, numbered 1 (smallest) through 4 (largest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u8);

impl Disk {
    /// All disks, smallest first.
    pub const ALL: [Disk; DISK_COUNT] = [Disk(1), Disk(2), Disk(3), Disk(4)];

    /// The smallest disk. It can never be covered, so it can always move.
    pub const SMALLEST: Disk = Disk(1);

    /// The largest disk.
    pub const LARGEST: Disk = Disk(DISK_COUNT as u8);

    /// Create a disk from its number. Returns `None` outside `1..=4`.
    pub const fn new(number: u8) -> Option<Disk> {
        if number >= 1 && number as usize <= DISK_COUNT {
            Some(Disk(number))
        } else {
            None
        }
    }

    /// Create a disk from its position in the encoding (`0..4`).
    pub const fn from_index(index: usize) -> Option<Disk> {
        if index < DISK_COUNT {
            Some(Disk(index as u8 + 1))
        } else {
            None
        }
    }

    /// The disk number, 1 through 4.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Position of this disk in the encoded state string.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
