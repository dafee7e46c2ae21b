//! Sierpinski-triangle layout of the Tower of Hanoi state graph.
//!
//! Every state gets a 2D coordinate from a closed-form recursive embedding:
//! the largest disk picks one of three half-scale sub-triangles, the next disk
//! picks a quarter-scale triangle inside it, and so on. Edges are coloured by
//! the disk that moves along them.
//!
//! - [`config`] -- [`LayoutConfig`], sizes and colours
//! - [`sierpinski`] -- [`Point`] and the recursive [`node_position`]
//! - [`layout`] -- [`Layout`]: nodes, coloured edges and the [`Viewport`]

pub mod config;
pub mod layout;
pub mod sierpinski;

use hanoi_core::BoardState;

pub use config::LayoutConfig;
pub use layout::{Layout, LayoutEdge, LayoutNode, Viewport};
pub use sierpinski::{Point, node_position, peg_vectors};

/// Error type for layout computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("no states to lay out")]
    Empty,
    #[error("state {0} appears more than once")]
    DuplicateState(BoardState),
    #[error("edge {from} -> {to} references state {missing} which is not in the state list")]
    UnknownState {
        from: BoardState,
        to: BoardState,
        missing: BoardState,
    },
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}
