use capacitated_flow::minimum_cost_flow::graph::Graph;
use capacitated_flow::minimum_cost_flow::status::Status;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

pub struct GraphInstance {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize, i64, i64)>,
    pub source: usize,
    pub sink: usize,
    pub demand: i64,
}

impl GraphInstance {
    pub fn build(&self) -> Graph<i64, i64> {
        let mut graph = Graph::default();
        graph.add_nodes(self.num_nodes);
        for &(from, to, capacity, cost) in self.edges.iter() {
            graph.add_directed_edge(from, to, capacity, cost).unwrap();
        }
        graph
    }
}

pub struct Expected {
    pub status: Status,
    pub delivered: i64,
    pub total_cost: i64,
}

pub fn instance_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("instances").join(name)
}

pub fn read_expected(file_path: &Path) -> Expected {
    let data = read_to_string(file_path).unwrap();
    let fields: Vec<&str> = data.split_whitespace().collect();
    let status = match fields[0] {
        "exhausted" => Status::Exhausted,
        "blocked" => Status::Blocked,
        other => panic!("unknown status {other}"),
    };

    Expected { status, delivered: fields[1].parse().unwrap(), total_cost: fields[2].parse().unwrap() }
}

pub fn read_graph_instance(file_path: &Path) -> GraphInstance {
    let data = read_to_string(file_path).unwrap();
    let data: Vec<&str> = data.trim().split('\n').collect();

    let (num_nodes, num_edges, source, sink, demand) = {
        let header: Vec<&str> = data[0].split_whitespace().collect();
        (header[0].parse().unwrap(), header[1].parse().unwrap(), header[2].parse().unwrap(), header[3].parse().unwrap(), header[4].parse().unwrap())
    };

    let mut edges = Vec::with_capacity(num_edges);
    for line in data[1..].iter() {
        let line: Vec<&str> = line.split_whitespace().collect();
        edges.push((line[0].parse().unwrap(), line[1].parse().unwrap(), line[2].parse().unwrap(), line[3].parse().unwrap()));
    }
    assert_eq!(edges.len(), num_edges);

    GraphInstance { num_nodes, edges, source, sink, demand }
}
