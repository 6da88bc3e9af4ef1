use crate::error::{FlowError, InvalidRequest};
use crate::minimum_cost_flow::graph::Graph;
use crate::minimum_cost_flow::residual::ResidualNetwork;
use crate::minimum_cost_flow::solution::{Augmentation, FlowSolution};
use crate::minimum_cost_flow::status::Status;
use num_traits::NumAssign;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Routes a fixed demand from `source` to `sink` by repeatedly augmenting along the cheapest path of
/// the residual network.
///
/// Only forward residual capacity is used: flow already sent is never cancelled or rerouted, so the
/// result is the greedy sequence of cheapest paths rather than a min-cost flow in general.
#[derive(Default, Debug, Clone)]
pub struct SuccessiveShortestPath {
    iteration_limit: Option<usize>,
}

impl SuccessiveShortestPath {
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn solve<'a, Flow, Cost>(&self, graph: &'a Graph<Flow, Cost>, source: usize, sink: usize, demand: Flow) -> Result<FlowSolution<'a, Flow, Cost>, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
        Cost: NumAssign + PartialOrd + Copy + Debug + From<Flow>,
    {
        let mut session = self.session(graph, source, sink, demand)?;
        while !session.status().is_terminal() {
            session.step()?;
        }
        Ok(session.finish())
    }

    pub fn session<'a, Flow, Cost>(&self, graph: &'a Graph<Flow, Cost>, source: usize, sink: usize, demand: Flow) -> Result<Session<'a, Flow, Cost>, FlowError>
    where
        Flow: NumAssign + Ord + Copy + Debug,
        Cost: NumAssign + PartialOrd + Copy + Debug + From<Flow>,
    {
        for u in [source, sink] {
            if !graph.contains_node(u) {
                return Err(InvalidRequest::UnknownNode(u).into());
            }
        }
        if source == sink {
            return Err(InvalidRequest::SourceIsSink(source).into());
        }
        if demand <= Flow::zero() {
            return Err(InvalidRequest::NonPositiveDemand.into());
        }

        Ok(Session {
            network: ResidualNetwork::new(graph),
            source,
            sink,
            requested: demand,
            remaining_demand: demand,
            total_cost: Cost::zero(),
            augmentations: Vec::new(),
            pending: None,
            status: Status::Searching,
            iteration_limit: self.iteration_limit,
        })
    }
}

/// A single solve, advanced one state transition at a time.
///
/// `Searching` runs Dijkstra and moves to `Augmenting` (a path was found) or `Blocked`. `Augmenting`
/// pushes flow along that path and moves to `Exhausted` or back to `Searching`.
#[derive(Debug)]
pub struct Session<'a, Flow, Cost> {
    network: ResidualNetwork<'a, Flow, Cost>,
    source: usize,
    sink: usize,
    requested: Flow,
    remaining_demand: Flow,
    total_cost: Cost,
    augmentations: Vec<Augmentation<Flow, Cost>>,
    pending: Option<Vec<usize>>,
    status: Status,
    iteration_limit: Option<usize>,
}

impl<'a, Flow, Cost> Session<'a, Flow, Cost>
where
    Flow: NumAssign + Ord + Copy + Debug,
    Cost: NumAssign + PartialOrd + Copy + Debug + From<Flow>,
{
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn remaining_demand(&self) -> Flow {
        self.remaining_demand
    }

    #[inline]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    #[inline]
    pub fn network(&self) -> &ResidualNetwork<'a, Flow, Cost> {
        &self.network
    }

    pub fn augmentations(&self) -> &[Augmentation<Flow, Cost>] {
        &self.augmentations
    }

    pub fn step(&mut self) -> Result<Status, FlowError> {
        match self.status {
            Status::Searching => {
                match self.find_augmenting_path() {
                    Some(path) => {
                        if let Some(limit) = self.iteration_limit {
                            if self.augmentations.len() >= limit {
                                return Err(FlowError::IterationLimitExceeded { limit });
                            }
                        }
                        self.pending = Some(path);
                        self.status = Status::Augmenting;
                    }
                    None => {
                        log::info!("no more augmenting paths, {:?} of {:?} unrouted", self.remaining_demand, self.requested);
                        self.status = Status::Blocked;
                    }
                }
            }
            Status::Augmenting => {
                if let Some(path) = self.pending.take() {
                    self.augment(path);
                }
                self.status = if self.remaining_demand == Flow::zero() { Status::Exhausted } else { Status::Searching };
            }
            Status::Exhausted | Status::Blocked => {}
        }

        Ok(self.status)
    }

    pub fn finish(self) -> FlowSolution<'a, Flow, Cost> {
        let graph = self.network.graph();
        FlowSolution::new(graph, self.network.into_flows(), self.status, self.requested, self.remaining_demand, self.total_cost, self.augmentations)
    }

    // edge ids from source to sink, or None if the sink is unreachable
    fn find_augmenting_path(&self) -> Option<Vec<usize>> {
        let prev = self.calculate_distance();
        prev[self.sink]?;

        let mut path = Vec::new();
        let mut v = self.sink;
        while let Some(edge_id) = prev[v] {
            path.push(edge_id);
            v = self.network.edge(edge_id).from;
        }
        debug_assert_eq!(v, self.source);
        path.reverse();

        Some(path)
    }

    // Dijkstra over edges with positive residual capacity; returns the predecessor edge of each node.
    // Among nodes at equal distance the smallest id is settled first.
    fn calculate_distance(&self) -> Vec<Option<usize>> {
        let num_nodes = self.network.graph().num_nodes();
        let mut prev = vec![None; num_nodes];
        let mut dist: Vec<Option<Cost>> = vec![None; num_nodes];
        let mut visited = vec![false; num_nodes];
        let mut bh = BinaryHeap::new();

        bh.push(Candidate { distance: Cost::zero(), node: self.source });
        dist[self.source] = Some(Cost::zero());

        let mut settled = 0;
        while let Some(Candidate { distance: d, node: u }) = bh.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            settled += 1;

            for edge_id in self.network.residual_edges(u) {
                let edge = self.network.edge(edge_id);
                let new_dist = d + edge.cost;
                if dist[edge.to].map_or(true, |current| new_dist < current) {
                    log::trace!("relax {} -> {}: {:?}", u, edge.to, new_dist);
                    dist[edge.to] = Some(new_dist);
                    prev[edge.to] = Some(edge_id);
                    bh.push(Candidate { distance: new_dist, node: edge.to });
                }
            }
        }

        log::debug!("dijkstra settled {} of {} nodes, distance to sink {:?}", settled, num_nodes, dist[self.sink]);
        prev
    }

    fn augment(&mut self, path: Vec<usize>) {
        let bottleneck = path.iter().map(|&edge_id| self.network.edge_residual_capacity(edge_id)).min().unwrap_or(Flow::zero());
        let amount = bottleneck.min(self.remaining_demand);
        debug_assert!(amount > Flow::zero());

        self.network.augment(&path, amount);

        let unit_cost = path.iter().fold(Cost::zero(), |sum, &edge_id| sum + self.network.edge(edge_id).cost);
        let path_cost = unit_cost * Cost::from(amount);
        self.total_cost += path_cost;
        self.remaining_demand -= amount;

        let mut nodes = Vec::with_capacity(path.len() + 1);
        nodes.push(self.source);
        nodes.extend(path.iter().map(|&edge_id| self.network.edge(edge_id).to));

        log::info!(
            "sent {:?} via {:?}, path cost = {:?}, remaining = {:?}, total cost = {:?}",
            amount,
            nodes,
            path_cost,
            self.remaining_demand,
            self.total_cost
        );

        self.augmentations.push(Augmentation {
            nodes,
            edges: path,
            amount,
            unit_cost,
            path_cost,
            cumulative_cost: self.total_cost,
            remaining_demand: self.remaining_demand,
        });
    }
}

// Min-heap entry: smaller distance first, then smaller node id.
#[derive(Debug, Clone, Copy)]
struct Candidate<Cost> {
    distance: Cost,
    node: usize,
}

impl<Cost: PartialOrd> Ord for Candidate<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        // costs are validated non-negative and not NaN
        other.distance.partial_cmp(&self.distance).unwrap_or(Ordering::Equal).then_with(|| other.node.cmp(&self.node))
    }
}

impl<Cost: PartialOrd> PartialOrd for Candidate<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: PartialOrd> PartialEq for Candidate<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: PartialOrd> Eq for Candidate<Cost> {}
