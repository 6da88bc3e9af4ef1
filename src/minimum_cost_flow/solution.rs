use crate::error::FlowError;
use crate::minimum_cost_flow::graph::Graph;
use crate::minimum_cost_flow::status::Status;
use num_traits::NumAssign;
use std::fmt::{self, Display};

/// One successful augmentation along a cheapest residual path.
#[derive(PartialEq, Debug, Clone)]
pub struct Augmentation<Flow, Cost> {
    /// Nodes from source to sink.
    pub nodes: Vec<usize>,
    /// Edge ids from source to sink; `edges[i]` joins `nodes[i]` and `nodes[i + 1]`.
    pub edges: Vec<usize>,
    pub amount: Flow,
    /// Sum of edge costs along the path.
    pub unit_cost: Cost,
    /// `amount * unit_cost`
    pub path_cost: Cost,
    pub cumulative_cost: Cost,
    pub remaining_demand: Flow,
}

impl<Flow, Cost> Display for Augmentation<Flow, Cost>
where
    Flow: Display,
    Cost: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sent {} via [", self.amount)?;
        for (i, pair) in self.nodes.windows(2).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", pair[0], pair[1])?;
        }
        write!(f, "], path cost = {}, remaining = {}, total cost = {}", self.path_cost, self.remaining_demand, self.cumulative_cost)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct FlowEdge<Flow, Cost> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    pub cost: Cost,
}

// edge label: "flow/capacity, cost=cost"
impl<Flow, Cost> Display for FlowEdge<Flow, Cost>
where
    Flow: Display,
    Cost: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, cost={}", self.flow, self.capacity, self.cost)
    }
}

/// Terminal outcome of one solve.
///
/// `status` is either [`Status::Exhausted`] or [`Status::Blocked`]. A blocked solution is a normal
/// result: `remaining_demand` is what the network could not carry.
#[derive(Debug, Clone)]
pub struct FlowSolution<'a, Flow, Cost> {
    graph: &'a Graph<Flow, Cost>,
    flows: Vec<Flow>,
    status: Status,
    requested: Flow,
    remaining_demand: Flow,
    total_cost: Cost,
    augmentations: Vec<Augmentation<Flow, Cost>>,
}

impl<'a, Flow, Cost> FlowSolution<'a, Flow, Cost>
where
    Flow: NumAssign + Ord + Copy,
    Cost: NumAssign + PartialOrd + Copy + From<Flow>,
{
    pub(crate) fn new(
        graph: &'a Graph<Flow, Cost>,
        flows: Vec<Flow>,
        status: Status,
        requested: Flow,
        remaining_demand: Flow,
        total_cost: Cost,
        augmentations: Vec<Augmentation<Flow, Cost>>,
    ) -> Self {
        debug_assert!(status.is_terminal());
        FlowSolution { graph, flows, status, requested, remaining_demand, total_cost, augmentations }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.status == Status::Exhausted
    }

    #[inline]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    #[inline]
    pub fn requested(&self) -> Flow {
        self.requested
    }

    #[inline]
    pub fn remaining_demand(&self) -> Flow {
        self.remaining_demand
    }

    #[inline]
    pub fn delivered(&self) -> Flow {
        self.requested - self.remaining_demand
    }

    pub fn augmentations(&self) -> &[Augmentation<Flow, Cost>] {
        &self.augmentations
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<FlowEdge<Flow, Cost>> {
        let edge = self.graph.get_edge(edge_id)?;
        Some(FlowEdge { from: edge.from, to: edge.to, flow: self.flows[edge_id], capacity: edge.capacity, cost: edge.cost })
    }

    /// Every edge with its final flow, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = FlowEdge<Flow, Cost>> + '_ {
        let edges = &self.graph.edges[..];
        edges
            .iter()
            .zip(self.flows.iter())
            .map(|(edge, &flow)| FlowEdge { from: edge.from, to: edge.to, flow, capacity: edge.capacity, cost: edge.cost })
    }

    pub fn flow(&self, from: usize, to: usize) -> Result<Flow, FlowError> {
        self.graph.find_edge(from, to).map(|edge_id| self.flows[edge_id])
    }

    pub fn inflow(&self, u: usize) -> Flow {
        self.edges().filter(|e| e.to == u).fold(Flow::zero(), |sum, e| sum + e.flow)
    }

    pub fn outflow(&self, u: usize) -> Flow {
        self.edges().filter(|e| e.from == u).fold(Flow::zero(), |sum, e| sum + e.flow)
    }

    /// Sum of `cost * flow` over all edges.
    pub fn recomputed_cost(&self) -> Cost {
        self.edges().fold(Cost::zero(), |cost, e| cost + e.cost * Cost::from(e.flow))
    }
}
