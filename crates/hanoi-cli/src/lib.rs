// hanoi-cli: shared utilities for the command-line tools.
//
// Every tool prints JSON or plain text on stdout and logs to stderr, so the
// output can be piped straight into a static-site build.

use std::io::{self, Write};

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hanoi_core::{BoardState, SelectionState, StateError};
use hanoi_engine::{DirectMoves, MoveModel, SelectThenPlace, StateGraph, Step};
use hanoi_layout::config::{DEFAULT_NODE_SIZE, DEFAULT_PADDING, DEFAULT_SCALE};
use hanoi_layout::{Layout, LayoutConfig};

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Which interaction model to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Model {
    /// One-step moves between settled states.
    #[default]
    Direct,
    /// Lift a disk, then place it.
    Select,
}

/// Layout overrides shared by the tools that draw the graph.
#[derive(Debug, Clone, clap::Args)]
pub struct LayoutArgs {
    /// Multiplier applied to the unit-size embedding
    #[arg(long, env = "HANOI_SCALE", default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Diameter of each node's board drawing
    #[arg(long, env = "HANOI_NODE_SIZE", default_value_t = DEFAULT_NODE_SIZE)]
    pub node_size: f64,

    /// Margin between the outermost nodes and the viewport edge
    #[arg(long, env = "HANOI_PADDING", default_value_t = DEFAULT_PADDING)]
    pub padding: f64,
}

impl LayoutArgs {
    pub fn to_config(&self) -> LayoutConfig {
        LayoutConfig {
            scale: self.scale,
            node_size: self.node_size,
            padding: self.padding,
            ..LayoutConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Page manifest
// ---------------------------------------------------------------------------

/// A link from a direct-model page to a neighbouring state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectLink {
    pub target: String,
    pub disk: u8,
    pub from_peg: String,
    pub to_peg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectPage {
    pub state: String,
    pub links: Vec<DirectLink>,
}

/// A select-then-place page: the target of a click on each peg, `null`
/// where the click is illegal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectPage {
    pub state: String,
    pub links: [Option<String>; 3],
}

/// One record per routable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum Manifest {
    Direct { pages: Vec<DirectPage> },
    Select { pages: Vec<SelectPage> },
}

impl Manifest {
    pub fn page_count(&self) -> usize {
        match self {
            Manifest::Direct { pages } => pages.len(),
            Manifest::Select { pages } => pages.len(),
        }
    }
}

/// Build the page manifest of a model.
pub fn manifest(model: Model) -> Manifest {
    match model {
        Model::Direct => {
            let graph = StateGraph::build(DirectMoves);
            let pages = graph
                .states()
                .iter()
                .map(|state| DirectPage {
                    state: state.to_string(),
                    links: graph
                        .outgoing(state)
                        .iter()
                        .map(|t| DirectLink {
                            target: t.to.to_string(),
                            disk: t.action.disk.number(),
                            from_peg: t.action.from.to_string(),
                            to_peg: t.action.to.to_string(),
                        })
                        .collect(),
                })
                .collect();
            Manifest::Direct { pages }
        }
        Model::Select => {
            let pages = SelectThenPlace
                .states()
                .iter()
                .map(|state| SelectPage {
                    state: state.to_string(),
                    links: SelectThenPlace
                        .peg_links(state)
                        .map(|link| link.map(|s| s.to_string())),
                })
                .collect();
            Manifest::Select { pages }
        }
    }
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

/// One legal action out of a state, in either model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from_state: String,
    pub to_state: String,
    pub disk: u8,
    /// `lift`, `place` or `move`.
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_peg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_peg: Option<String>,
}

impl MoveRecord {
    /// Human-readable one-line form, e.g. `aaaa -> baaa  move disk 1 a->b`.
    pub fn describe(&self) -> String {
        let from = self.from_peg.as_deref().unwrap_or("");
        let to = self.to_peg.as_deref().unwrap_or("");
        match self.kind {
            "lift" => format!(
                "{} -> {}  lift disk {} from {}",
                self.from_state, self.to_state, self.disk, from
            ),
            "place" => format!(
                "{} -> {}  place disk {} on {}",
                self.from_state, self.to_state, self.disk, to
            ),
            _ => format!(
                "{} -> {}  move disk {} {}->{}",
                self.from_state, self.to_state, self.disk, from, to
            ),
        }
    }
}

/// Legal actions out of an encoded state.
pub fn moves_from(encoded: &str, model: Model) -> Result<Vec<MoveRecord>, StateError> {
    match model {
        Model::Direct => {
            let state = BoardState::parse(encoded)?;
            Ok(DirectMoves
                .successors(&state)
                .iter()
                .map(|t| MoveRecord {
                    from_state: t.from.to_string(),
                    to_state: t.to.to_string(),
                    disk: t.action.disk.number(),
                    kind: "move",
                    from_peg: Some(t.action.from.to_string()),
                    to_peg: Some(t.action.to.to_string()),
                })
                .collect())
        }
        Model::Select => {
            let state = SelectionState::parse(encoded)?;
            Ok(SelectThenPlace
                .successors(&state)
                .iter()
                .map(|t| {
                    let (kind, from_peg, to_peg) = match t.action {
                        Step::Lift { from, .. } => ("lift", Some(from.to_string()), None),
                        Step::Place { to, .. } => ("place", None, Some(to.to_string())),
                    };
                    MoveRecord {
                        from_state: t.from.to_string(),
                        to_state: t.to.to_string(),
                        disk: t.action.disk().number(),
                        kind,
                        from_peg,
                        to_peg,
                    }
                })
                .collect())
        }
    }
}

/// Encoded states of a model in enumeration order.
pub fn state_names(model: Model) -> Vec<String> {
    match model {
        Model::Direct => DirectMoves.states().iter().map(ToString::to_string).collect(),
        Model::Select => SelectThenPlace
            .states()
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Graph export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    pub state: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub disk: u8,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

/// Everything needed to draw the state graph as SVG.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphExport {
    pub view_box: String,
    pub node_size: f64,
    pub node_radius: f64,
    pub edge_stroke_width: f64,
    pub edge_opacity: f64,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl From<&Layout> for GraphExport {
    fn from(layout: &Layout) -> Self {
        let config = layout.config();
        GraphExport {
            view_box: layout.viewport().view_box(),
            node_size: config.node_size,
            node_radius: config.node_radius(),
            edge_stroke_width: config.edge_stroke_width,
            edge_opacity: config.edge_opacity,
            nodes: layout
                .nodes()
                .iter()
                .map(|n| NodeRecord {
                    state: n.state.to_string(),
                    x: n.position.x,
                    y: n.position.y,
                })
                .collect(),
            edges: layout
                .edges()
                .iter()
                .map(|e| EdgeRecord {
                    from: e.from.to_string(),
                    to: e.to.to_string(),
                    disk: e.disk.number(),
                    x1: e.from_position.x,
                    y1: e.from_position.y,
                    x2: e.to_position.x,
                    y2: e.to_position.y,
                    color: e.color.clone(),
                })
                .collect(),
        }
    }
}

/// Lay out the direct-move graph with the given overrides.
pub fn export_graph(args: &LayoutArgs) -> anyhow::Result<GraphExport> {
    let graph = StateGraph::build(DirectMoves);
    let layout = Layout::from_graph(&graph, &args.to_config())
        .context("failed to lay out the state graph")?;
    Ok(GraphExport::from(&layout))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Write `value` to stdout as JSON, pretty-printed when `pretty` is set.
pub fn write_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        layout: LayoutArgs,
    }

    #[test]
    fn direct_manifest_has_one_page_per_state() {
        let manifest = manifest(Model::Direct);
        assert_eq!(manifest.page_count(), 81);
        let Manifest::Direct { pages } = manifest else {
            panic!("expected direct manifest");
        };
        assert_eq!(pages[0].state, "aaaa");
        assert_eq!(
            pages[0].links[0],
            DirectLink {
                target: "baaa".to_string(),
                disk: 1,
                from_peg: "a".to_string(),
                to_peg: "b".to_string(),
            }
        );
    }

    #[test]
    fn select_manifest_covers_lifted_pages() {
        let manifest = manifest(Model::Select);
        assert_eq!(manifest.page_count(), 183);
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["model"], "select");
        assert_eq!(json["pages"][0]["state"], "aaaa");
        assert_eq!(json["pages"][0]["links"][0], "saaa");
        assert!(json["pages"][0]["links"][1].is_null());
    }

    #[test]
    fn direct_manifest_json_uses_camel_case() {
        let json = serde_json::to_value(manifest(Model::Direct)).unwrap();
        assert_eq!(json["model"], "direct");
        assert_eq!(json["pages"][0]["links"][0]["fromPeg"], "a");
        assert_eq!(json["pages"][0]["links"][0]["toPeg"], "b");
    }

    #[test]
    fn moves_from_direct_state() {
        let moves = moves_from("abbb", Model::Direct).unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[2].to_state, "acbb");
        assert_eq!(moves[2].describe(), "abbb -> acbb  move disk 2 b->c");
    }

    #[test]
    fn moves_from_selection_state() {
        let moves = moves_from("absc", Model::Select).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].kind, "place");
        assert_eq!(moves[0].describe(), "absc -> abcc  place disk 3 on c");
        let json = serde_json::to_value(&moves[0]).unwrap();
        assert!(json.get("fromPeg").is_none());
    }

    #[test]
    fn moves_from_rejects_wrong_model_alphabet() {
        assert!(moves_from("saaa", Model::Direct).is_err());
        assert!(moves_from("saaa", Model::Select).is_ok());
    }

    #[test]
    fn state_names_follow_enumeration() {
        assert_eq!(state_names(Model::Direct).len(), 81);
        assert_eq!(state_names(Model::Select)[81], "saaa");
    }

    #[test]
    fn layout_args_default_to_documented_values() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.layout.to_config(), LayoutConfig::default());
    }

    #[test]
    fn layout_args_override_scale() {
        let cli = TestCli::try_parse_from(["test", "--scale", "750"]).unwrap();
        assert_eq!(cli.layout.to_config().scale, 750.0);
    }

    #[test]
    fn export_graph_rejects_bad_overrides() {
        let args = LayoutArgs {
            scale: -1.0,
            node_size: DEFAULT_NODE_SIZE,
            padding: DEFAULT_PADDING,
        };
        assert!(export_graph(&args).is_err());
    }

    #[test]
    fn export_graph_default() {
        let args = LayoutArgs {
            scale: DEFAULT_SCALE,
            node_size: DEFAULT_NODE_SIZE,
            padding: DEFAULT_PADDING,
        };
        let export = export_graph(&args).unwrap();
        assert_eq!(export.nodes.len(), 81);
        assert_eq!(export.edges.len(), 240);
        assert_eq!(export.nodes[0].y, -1406.25);
    }
}
