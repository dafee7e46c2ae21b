//! Geometry of the full layout: determinism, edge lengths and nesting.

use std::collections::HashSet;

use hanoi_core::{BoardState, Disk, Peg};
use hanoi_engine::{DirectMoves, StateGraph};
use hanoi_layout::{Layout, LayoutConfig, node_position, peg_vectors};
use proptest::prelude::*;

fn full(config: &LayoutConfig) -> Layout {
    Layout::from_graph(&StateGraph::build(DirectMoves), config).expect("layout")
}

#[test]
fn pipeline_is_bit_identical_across_runs() {
    let config = LayoutConfig::default();
    let a = full(&config);
    let b = full(&config);

    assert_eq!(a.nodes().len(), b.nodes().len());
    for (x, y) in a.nodes().iter().zip(b.nodes()) {
        assert_eq!(x.state, y.state);
        assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
        assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
    }
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.viewport().view_box(), b.viewport().view_box());
}

#[test]
fn every_state_gets_its_own_position() {
    let layout = full(&LayoutConfig::default());
    let distinct: HashSet<(u64, u64)> = layout
        .nodes()
        .iter()
        .map(|n| (n.position.x.to_bits(), n.position.y.to_bits()))
        .collect();
    assert_eq!(distinct.len(), 81);
}

#[test]
fn every_edge_has_the_same_length() {
    let config = LayoutConfig::default();
    let layout = full(&config);
    let expected = config.scale * 3f64.sqrt() / 16.0;
    for edge in layout.edges() {
        let length = edge.from_position.distance(edge.to_position);
        assert!(
            (length - expected).abs() < 1e-9,
            "{} -> {} (disk {}) has length {length}, expected {expected}",
            edge.from,
            edge.to,
            edge.disk
        );
    }
}

#[test]
fn largest_disk_edges_join_the_three_sub_triangles() {
    let layout = full(&LayoutConfig::default());
    let bridges: Vec<_> = layout
        .edges()
        .iter()
        .filter(|e| e.disk == Disk::LARGEST)
        .collect();
    // Two directed edges for each of the three pairs of sub-triangles.
    assert_eq!(bridges.len(), 6);
    for edge in bridges {
        assert_ne!(edge.from.peg_of(Disk::LARGEST), edge.to.peg_of(Disk::LARGEST));
    }
}

#[test]
fn scaling_the_config_scales_the_layout() {
    let small = LayoutConfig {
        scale: 750.0,
        ..LayoutConfig::default()
    };
    let a = full(&LayoutConfig::default());
    let b = full(&small);
    for (x, y) in a.nodes().iter().zip(b.nodes()) {
        assert!((x.position.x - 2.0 * y.position.x).abs() < 1e-9);
        assert!((x.position.y - 2.0 * y.position.y).abs() < 1e-9);
    }
}

fn any_state() -> impl Strategy<Value = BoardState> {
    proptest::array::uniform4(0usize..3).prop_map(|idx| BoardState::from_pegs(idx.map(|i| Peg::ALL[i])))
}

proptest! {
    #[test]
    fn positions_nest_inside_the_largest_disks_half(s in any_state()) {
        let config = LayoutConfig::default();
        let p = node_position(&s, &config);
        let anchor = peg_vectors()[s.peg_of(Disk::LARGEST).index()].scale(config.scale / 2.0);
        // The three smaller disks add at most 7/8 of a half-scale vector.
        prop_assert!(p.distance(anchor) <= config.scale * 7.0 / 16.0 + 1e-9);
    }

    #[test]
    fn positions_stay_within_the_viewport(s in any_state()) {
        let layout = full(&LayoutConfig::default());
        let v = layout.viewport();
        let p = layout.position_of(&s).expect("every state is placed");
        prop_assert!(p.x > v.min_x && p.x < v.max_x());
        prop_assert!(p.y > v.min_y && p.y < v.max_y());
    }
}
