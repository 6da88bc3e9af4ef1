use crate::error::FlowError;
use crate::minimum_cost_flow::csr::CSR;
use crate::minimum_cost_flow::graph::{Edge, Graph};
use num_traits::NumAssign;

/// Flow overlay on top of a borrowed [`Graph`].
///
/// Each solve owns one of these, so several solves may share the same base graph. The overlay keeps
/// `0 <= flow <= capacity` on every edge; [`augment`](Self::augment) panics rather than break it.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<'a, Flow, Cost> {
    graph: &'a Graph<Flow, Cost>,
    csr: CSR,
    flows: Vec<Flow>,
}

impl<'a, Flow, Cost> ResidualNetwork<'a, Flow, Cost>
where
    Flow: NumAssign + Ord + Copy,
    Cost: NumAssign + PartialOrd + Copy,
{
    pub fn new(graph: &'a Graph<Flow, Cost>) -> Self {
        ResidualNetwork { graph, csr: CSR::build(graph), flows: vec![Flow::zero(); graph.num_edges()] }
    }

    #[inline]
    pub fn graph(&self) -> &'a Graph<Flow, Cost> {
        self.graph
    }

    #[inline]
    pub fn edge(&self, edge_id: usize) -> &'a Edge<Flow, Cost> {
        let graph = self.graph;
        &graph.edges[edge_id]
    }

    #[inline]
    pub fn edge_flow(&self, edge_id: usize) -> Flow {
        self.flows[edge_id]
    }

    #[inline]
    pub fn edge_residual_capacity(&self, edge_id: usize) -> Flow {
        self.graph.edges[edge_id].capacity - self.flows[edge_id]
    }

    pub fn capacity(&self, from: usize, to: usize) -> Result<Flow, FlowError> {
        self.graph.capacity(from, to)
    }

    pub fn cost(&self, from: usize, to: usize) -> Result<Cost, FlowError> {
        self.graph.cost(from, to)
    }

    pub fn flow(&self, from: usize, to: usize) -> Result<Flow, FlowError> {
        self.graph.find_edge(from, to).map(|edge_id| self.flows[edge_id])
    }

    pub fn residual_capacity(&self, from: usize, to: usize) -> Result<Flow, FlowError> {
        self.graph.find_edge(from, to).map(|edge_id| self.edge_residual_capacity(edge_id))
    }

    /// Out-edges of `u` that can still carry flow, in insertion order.
    pub fn residual_edges(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let edges = &self.graph.edges[..];
        let flows = &self.flows[..];
        self.csr.out_edges(u).iter().copied().filter(move |&edge_id| edges[edge_id].capacity - flows[edge_id] > Flow::zero())
    }

    pub fn neighbors_with_residual_capacity(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let edges = &self.graph.edges[..];
        self.residual_edges(u).map(move |edge_id| edges[edge_id].to)
    }

    pub fn augment(&mut self, path: &[usize], amount: Flow) {
        assert!(amount > Flow::zero());
        for &edge_id in path {
            assert!(amount <= self.edge_residual_capacity(edge_id), "augmenting edge {edge_id} beyond its capacity");
        }

        for &edge_id in path {
            self.flows[edge_id] += amount;
        }
    }

    pub(crate) fn into_flows(self) -> Vec<Flow> {
        self.flows
    }
}
