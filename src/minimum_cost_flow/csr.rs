use crate::minimum_cost_flow::graph::Graph;
use num_traits::NumAssign;

// Forward arcs only: flow is never pushed back along an edge, so no reverse arc is stored.
#[derive(Default, Debug, Clone)]
pub struct CSR {
    pub num_nodes: usize,
    pub num_edges: usize,

    pub start: Vec<usize>,
    pub edge_ids: Vec<usize>,
}

impl CSR {
    pub fn build<Flow, Cost>(graph: &Graph<Flow, Cost>) -> Self
    where
        Flow: NumAssign + Ord + Copy,
        Cost: NumAssign + PartialOrd + Copy,
    {
        let num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();

        let mut start = vec![0; num_nodes + 1];
        for edge in graph.edges.iter() {
            start[edge.from + 1] += 1;
        }
        for i in 1..=num_nodes {
            start[i] += start[i - 1];
        }

        // stable: each node keeps its out-edges in insertion order
        let mut counter = vec![0; num_nodes];
        let mut edge_ids = vec![usize::MAX; num_edges];
        for (edge_id, edge) in graph.edges.iter().enumerate() {
            edge_ids[start[edge.from] + counter[edge.from]] = edge_id;
            counter[edge.from] += 1;
        }

        CSR { num_nodes, num_edges, start, edge_ids }
    }

    #[inline]
    pub fn out_edges(&self, u: usize) -> &[usize] {
        &self.edge_ids[self.start[u]..self.start[u + 1]]
    }
}
