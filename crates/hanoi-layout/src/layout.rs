// Node placement, coloured edges and viewport bounds for the whole graph.

use hashbrown::HashMap;
use tracing::debug;

use hanoi_core::{BoardState, Disk};
use hanoi_engine::{DirectMoves, Move, StateGraph, Transition};

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::sierpinski::{Point, node_position};

/// A placed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutNode {
    pub state: BoardState,
    pub position: Point,
}

/// A placed move, coloured by the disk that moves along it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub from: BoardState,
    pub to: BoardState,
    pub disk: Disk,
    pub from_position: Point,
    pub to_position: Point,
    pub color: String,
}

/// Bounding box of all node centres, expanded by the node margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// The SVG `viewBox` attribute value: `"min_x min_y width height"`.
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }

    fn around(points: impl Iterator<Item = Point>, margin: f64) -> Option<Self> {
        let mut bounds: Option<(Point, Point)> = None;
        for p in points {
            bounds = Some(match bounds {
                None => (p, p),
                Some((lo, hi)) => (
                    Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                ),
            });
        }
        bounds.map(|(lo, hi)| Viewport {
            min_x: lo.x - margin,
            min_y: lo.y - margin,
            width: hi.x - lo.x + 2.0 * margin,
            height: hi.y - lo.y + 2.0 * margin,
        })
    }
}

/// The complete diagram of the state graph.
#[derive(Debug, Clone)]
pub struct Layout {
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    viewport: Viewport,
    index: HashMap<BoardState, usize>,
    config: LayoutConfig,
}

impl Layout {
    /// Place `states` and the `edges` between them.
    ///
    /// Nodes and edges keep their input order. Every edge endpoint must be
    /// one of `states`; an edge that references any other state is rejected
    /// rather than drawn to a made-up position.
    pub fn compute(
        states: &[BoardState],
        edges: &[Transition<BoardState, Move>],
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        if states.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut index = HashMap::with_capacity(states.len());
        let mut nodes = Vec::with_capacity(states.len());
        for (i, &state) in states.iter().enumerate() {
            if index.insert(state, i).is_some() {
                return Err(LayoutError::DuplicateState(state));
            }
            nodes.push(LayoutNode {
                state,
                position: node_position(&state, config),
            });
        }

        let position = |state: &BoardState, edge: &Transition<BoardState, Move>| {
            index
                .get(state)
                .map(|&i| nodes[i].position)
                .ok_or_else(|| LayoutError::UnknownState {
                    from: edge.from,
                    to: edge.to,
                    missing: *state,
                })
        };

        let edges = edges
            .iter()
            .map(|edge| {
                Ok(LayoutEdge {
                    from: edge.from,
                    to: edge.to,
                    disk: edge.action.disk,
                    from_position: position(&edge.from, edge)?,
                    to_position: position(&edge.to, edge)?,
                    color: config.color_of(edge.action.disk).to_string(),
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        let viewport = Viewport::around(nodes.iter().map(|n| n.position), config.margin())
            .ok_or(LayoutError::Empty)?;

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            view_box = %viewport.view_box(),
            "computed layout"
        );

        Ok(Self {
            nodes,
            edges,
            viewport,
            index,
            config: config.clone(),
        })
    }

    /// Lay out every state and move of the direct-move graph.
    pub fn from_graph(
        graph: &StateGraph<DirectMoves>,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        Self::compute(graph.states(), graph.edges(), config)
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Where `state` was placed, if it is part of this layout.
    pub fn position_of(&self, state: &BoardState) -> Option<Point> {
        self.index.get(state).map(|&i| self.nodes[i].position)
    }
}
