// WASM bindings for the Tower of Hanoi state engine.
//
// Provides a `WasmHanoi` class exported via wasm-bindgen. The state graph and
// its layout are computed once in the constructor; every method afterwards is
// a lookup or a small pure computation. Structured results are serialized to
// plain JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const hanoi = new WasmHanoi();              // or new WasmHanoi(1500, 120, 50)
//   WasmHanoi.isValidState("abca");             // => true
//   hanoi.allStates();                          // => ["aaaa", "aaab", ...]
//   hanoi.successors("aaaa");                   // => [{ target: "baaa", disk: 1, fromPeg: "a", toPeg: "b" }, ...]
//   hanoi.pegLinks("abcc");                     // => ["sbcc", "ascc", "absc"]
//   hanoi.layout();                             // => { viewBox: "...", nodes: [...], edges: [...] }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use hanoi_core::{BoardState, SelectionState, StateError};
use hanoi_engine::{DirectMoves, Move, SelectThenPlace, StateGraph, Transition};
use hanoi_layout::{Layout, LayoutConfig, LayoutEdge, LayoutError, LayoutNode};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// A legal move out of a state.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsMove {
    target: String,
    disk: u8,
    from_peg: String,
    to_peg: String,
}

/// A directed edge of the state graph.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsEdge {
    from_state: String,
    to_state: String,
    disk: u8,
    from_peg: String,
    to_peg: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct JsNode {
    state: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, PartialEq)]
struct JsLayoutEdge {
    from: String,
    to: String,
    disk: u8,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLayout {
    view_box: String,
    node_size: f64,
    node_radius: f64,
    edge_stroke_width: f64,
    edge_opacity: f64,
    nodes: Vec<JsNode>,
    edges: Vec<JsLayoutEdge>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn move_to_js(t: &Transition<BoardState, Move>) -> JsMove {
    JsMove {
        target: t.to.to_string(),
        disk: t.action.disk.number(),
        from_peg: t.action.from.to_string(),
        to_peg: t.action.to.to_string(),
    }
}

fn edge_to_js(t: &Transition<BoardState, Move>) -> JsEdge {
    JsEdge {
        from_state: t.from.to_string(),
        to_state: t.to.to_string(),
        disk: t.action.disk.number(),
        from_peg: t.action.from.to_string(),
        to_peg: t.action.to.to_string(),
    }
}

fn node_to_js(n: &LayoutNode) -> JsNode {
    JsNode {
        state: n.state.to_string(),
        x: n.position.x,
        y: n.position.y,
    }
}

fn layout_edge_to_js(e: &LayoutEdge) -> JsLayoutEdge {
    JsLayoutEdge {
        from: e.from.to_string(),
        to: e.to.to_string(),
        disk: e.disk.number(),
        x1: e.from_position.x,
        y1: e.from_position.y,
        x2: e.to_position.x,
        y2: e.to_position.y,
        color: e.color.clone(),
    }
}

fn layout_to_js(layout: &Layout) -> JsLayout {
    let config = layout.config();
    JsLayout {
        view_box: layout.viewport().view_box(),
        node_size: config.node_size,
        node_radius: config.node_radius(),
        edge_stroke_width: config.edge_stroke_width,
        edge_opacity: config.edge_opacity,
        nodes: layout.nodes().iter().map(node_to_js).collect(),
        edges: layout.edges().iter().map(layout_edge_to_js).collect(),
    }
}

fn peg_links(state: &str) -> Result<[Option<String>; 3], StateError> {
    let state = SelectionState::parse(state)?;
    Ok(SelectThenPlace
        .peg_links(&state)
        .map(|link| link.map(|s| s.to_string())))
}

fn state_error_to_js(e: StateError) -> JsError {
    JsError::new(&e.to_string())
}

fn layout_error_to_js(e: LayoutError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmHanoi
// ============================================================================

/// Tower of Hanoi state engine for WebAssembly.
///
/// Exposes state validation, legal moves for both interaction models, the
/// full edge set and the Sierpinski layout of the state graph.
#[wasm_bindgen]
pub struct WasmHanoi {
    graph: StateGraph<DirectMoves>,
    layout: Layout,
}

#[wasm_bindgen]
impl WasmHanoi {
    /// Build the state graph and its layout.
    ///
    /// Omitted arguments take the default layout values (scale 1500, node
    /// size 120, padding 50).
    #[wasm_bindgen(constructor)]
    pub fn new(
        scale: Option<f64>,
        node_size: Option<f64>,
        padding: Option<f64>,
    ) -> Result<WasmHanoi, JsError> {
        let defaults = LayoutConfig::default();
        let config = LayoutConfig {
            scale: scale.unwrap_or(defaults.scale),
            node_size: node_size.unwrap_or(defaults.node_size),
            padding: padding.unwrap_or(defaults.padding),
            ..defaults
        };
        let graph = StateGraph::build(DirectMoves);
        let layout = Layout::from_graph(&graph, &config).map_err(layout_error_to_js)?;
        Ok(WasmHanoi { graph, layout })
    }

    /// Check whether a string is a settled state (four of `a`, `b`, `c`).
    #[wasm_bindgen(js_name = "isValidState")]
    pub fn is_valid_state(state: &str) -> bool {
        hanoi_core::is_valid_state(state)
    }

    /// Check whether a string is a select-then-place state (at most one `s`).
    #[wasm_bindgen(js_name = "isValidSelectionState")]
    pub fn is_valid_selection_state(state: &str) -> bool {
        hanoi_core::is_valid_selection_state(state)
    }

    /// All 81 settled states in enumeration order.
    #[wasm_bindgen(js_name = "allStates")]
    pub fn all_states(&self) -> Vec<String> {
        self.graph.states().iter().map(ToString::to_string).collect()
    }

    /// Every page of the select-then-place model.
    #[wasm_bindgen(js_name = "allSelectionStates")]
    pub fn all_selection_states() -> Vec<String> {
        hanoi_core::generate_all_selection_states()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Legal direct moves out of `state`.
    ///
    /// Returns an array of `{ target, disk, fromPeg, toPeg }` objects. Throws
    /// if `state` is not a valid settled state.
    pub fn successors(&self, state: &str) -> Result<JsValue, JsError> {
        let state = BoardState::parse(state).map_err(state_error_to_js)?;
        let moves: Vec<JsMove> = self.graph.outgoing(&state).iter().map(move_to_js).collect();
        to_js(&moves)
    }

    /// Target of a click on each peg in the select-then-place model.
    ///
    /// Returns a three-element array (pegs a, b, c) of state strings, with
    /// `null` where the click is not legal.
    #[wasm_bindgen(js_name = "pegLinks")]
    pub fn peg_links(state: &str) -> Result<JsValue, JsError> {
        let links = peg_links(state).map_err(state_error_to_js)?;
        to_js(&links)
    }

    /// All directed edges of the direct-move graph.
    pub fn edges(&self) -> Result<JsValue, JsError> {
        let edges: Vec<JsEdge> = self.graph.edges().iter().map(edge_to_js).collect();
        to_js(&edges)
    }

    /// The laid-out graph: `viewBox`, node geometry, `nodes` and coloured `edges`.
    pub fn layout(&self) -> Result<JsValue, JsError> {
        to_js(&layout_to_js(&self.layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> BoardState {
        BoardState::parse(s).unwrap()
    }

    #[test]
    fn moves_carry_peg_symbols() {
        let graph = StateGraph::build(DirectMoves);
        let moves: Vec<JsMove> = graph.outgoing(&board("abbb")).iter().map(move_to_js).collect();
        assert_eq!(
            moves[2],
            JsMove {
                target: "acbb".to_string(),
                disk: 2,
                from_peg: "b".to_string(),
                to_peg: "c".to_string(),
            }
        );
    }

    #[test]
    fn peg_links_reject_bad_input() {
        assert!(peg_links("ssaa").is_err());
        assert_eq!(
            peg_links("aaaa").unwrap(),
            [Some("saaa".to_string()), None, None]
        );
    }

    #[test]
    fn layout_dto_mirrors_layout() {
        let graph = StateGraph::build(DirectMoves);
        let layout = Layout::from_graph(&graph, &LayoutConfig::default()).unwrap();
        let dto = layout_to_js(&layout);
        assert_eq!(dto.nodes.len(), 81);
        assert_eq!(dto.edges.len(), 240);
        assert_eq!(dto.node_radius, 70.0);
        assert_eq!(dto.view_box, layout.viewport().view_box());
        assert_eq!(
            dto.nodes[0],
            JsNode {
                state: "aaaa".to_string(),
                x: 0.0,
                y: -1406.25,
            }
        );
        assert_eq!(dto.edges[0].color, "#ef4444");
    }

    #[test]
    fn edges_keep_graph_order() {
        let graph = StateGraph::build(DirectMoves);
        let first = edge_to_js(&graph.edges()[0]);
        assert_eq!(first.from_state, "aaaa");
        assert_eq!(first.to_state, "baaa");
        assert_eq!(first.disk, 1);
    }
}
