// The full state graph of an interaction model.

use std::ops::Range;

use hashbrown::HashMap;
use tracing::debug;

use crate::{MoveModel, Transition};

/// Every state of a model together with every transition between them.
///
/// Built once and never mutated. Edges are stored in state enumeration order
/// and then successor order, so the outgoing edges of each state form one
/// contiguous run.
pub struct StateGraph<M: MoveModel> {
    model: M,
    states: Vec<M::State>,
    index: HashMap<M::State, usize>,
    edges: Vec<Transition<M::State, M::Action>>,
    /// Edge range of each state, parallel to `states`.
    outgoing: Vec<Range<usize>>,
}

impl<M: MoveModel> std::fmt::Debug for StateGraph<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateGraph")
            .field("state_count", &self.states.len())
            .field("edge_count", &self.edges.len())
            .finish()
    }
}

impl<M: MoveModel> StateGraph<M> {
    /// Enumerate the model's states and collect the successors of each.
    pub fn build(model: M) -> Self {
        let states = model.states();
        let index: HashMap<M::State, usize> = states
            .iter()
            .enumerate()
            .map(|(i, &state)| (state, i))
            .collect();

        let mut edges = Vec::with_capacity(states.len() * crate::MAX_SUCCESSORS);
        let mut outgoing = Vec::with_capacity(states.len());
        for state in &states {
            let start = edges.len();
            edges.extend(model.successors(state));
            outgoing.push(start..edges.len());
        }

        debug!(
            states = states.len(),
            edges = edges.len(),
            "built state graph"
        );

        Self {
            model,
            states,
            index,
            edges,
            outgoing,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// All states, in the model's enumeration order.
    pub fn states(&self) -> &[M::State] {
        &self.states
    }

    /// All edges, grouped by source state.
    pub fn edges(&self) -> &[Transition<M::State, M::Action>] {
        &self.edges
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position of `state` in [`states`](Self::states).
    pub fn index_of(&self, state: &M::State) -> Option<usize> {
        self.index.get(state).copied()
    }

    /// Edges leaving `state`. Empty for a state outside the graph.
    pub fn outgoing(&self, state: &M::State) -> &[Transition<M::State, M::Action>] {
        match self.index_of(state) {
            Some(i) => &self.edges[self.outgoing[i].clone()],
            None => &[],
        }
    }

    /// Whether some action leads from `from` to `to`.
    pub fn has_edge(&self, from: &M::State, to: &M::State) -> bool {
        self.outgoing(from).iter().any(|t| t.to == *to)
    }
}
