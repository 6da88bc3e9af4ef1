use crate::error::{FlowError, InvalidRequest};
use num_traits::NumAssign;
use std::collections::HashMap;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow, Cost> {
    pub from: usize,
    pub to: usize,
    pub capacity: Flow,
    pub cost: Cost,
}

/// Capacitated, cost-weighted directed graph.
///
/// At most one edge exists per ordered `(from, to)` pair. Capacities and costs never change once an
/// edge is added; flow is tracked by a [`ResidualNetwork`](super::residual::ResidualNetwork) per solve.
#[derive(Default, Debug, Clone)]
pub struct Graph<Flow, Cost> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow, Cost>>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl<Flow, Cost> Graph<Flow, Cost>
where
    Flow: NumAssign + Ord + Copy,
    Cost: NumAssign + PartialOrd + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    #[inline]
    pub fn contains_node(&self, u: usize) -> bool {
        u < self.num_nodes
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow, cost: Cost) -> Result<usize, FlowError> {
        for u in [from, to] {
            if !self.contains_node(u) {
                return Err(InvalidRequest::UnknownNode(u).into());
            }
        }
        if capacity < Flow::zero() {
            return Err(InvalidRequest::NegativeCapacity { from, to }.into());
        }
        // also rejects NaN
        if !(cost >= Cost::zero()) {
            return Err(InvalidRequest::InvalidCost { from, to }.into());
        }
        if self.edge_index.contains_key(&(from, to)) {
            return Err(InvalidRequest::DuplicateEdge { from, to }.into());
        }

        self.edges.push(Edge { from, to, capacity, cost });
        self.edge_index.insert((from, to), self.num_edges);

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<&Edge<Flow, Cost>> {
        self.edges.get(edge_id)
    }

    pub fn edges(&self) -> std::slice::Iter<Edge<Flow, Cost>> {
        self.edges.iter()
    }

    pub fn find_edge(&self, from: usize, to: usize) -> Result<usize, FlowError> {
        self.edge_index.get(&(from, to)).copied().ok_or(FlowError::EdgeNotFound { from, to })
    }

    pub fn capacity(&self, from: usize, to: usize) -> Result<Flow, FlowError> {
        self.find_edge(from, to).map(|edge_id| self.edges[edge_id].capacity)
    }

    pub fn cost(&self, from: usize, to: usize) -> Result<Cost, FlowError> {
        self.find_edge(from, to).map(|edge_id| self.edges[edge_id].cost)
    }
}
