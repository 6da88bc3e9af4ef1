use capacitated_flow::minimum_cost_flow::graph::Graph;
use capacitated_flow::minimum_cost_flow::status::Status;
use capacitated_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use capacitated_flow::FlowError;

fn main() -> Result<(), FlowError> {
    env_logger::init();

    let mut graph: Graph<i64, i64> = Graph::default();
    graph.add_nodes(6);

    let edges = vec![
        graph.add_directed_edge(0, 1, 15, 2)?,
        graph.add_directed_edge(0, 2, 7, 4)?,
        graph.add_directed_edge(1, 3, 10, 1)?,
        graph.add_directed_edge(2, 3, 10, 2)?,
        graph.add_directed_edge(2, 4, 8, 3)?,
        graph.add_directed_edge(3, 5, 9, 2)?,
        graph.add_directed_edge(4, 5, 13, 1)?,
    ];

    let solution = SuccessiveShortestPath::default().solve(&graph, 0, 5, 15)?;

    for augmentation in solution.augmentations() {
        println!("{augmentation}");
    }
    if solution.status() == Status::Blocked {
        println!("no more augmenting paths, {} left unrouted", solution.remaining_demand());
    }

    println!("minimum cost:{}", solution.total_cost());
    for edge_id in edges {
        if let Some(edge) = solution.get_edge(edge_id) {
            println!("{} -> {}: {}", edge.from, edge.to, edge);
        }
    }

    Ok(())
}
