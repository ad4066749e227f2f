use proptest::prelude::*;
use layerdag::format::{write_dot, write_ord, GraphReader};
use layerdag::graph::LayeredGraph;
use layerdag::layering::assign_layers;
use layerdag_test_utils::builders::GraphBuilder;

fn node_name(i: usize) -> String {
    format!("n{:02}", i)
}

// Strategy to generate a random DAG as (node count, edge list).
// Acyclic by construction: node i only gets edges from nodes 0..i-1.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        let preds_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            num_nodes,
        );

        preds_strat.prop_map(move |raw_preds| {
            let mut edges = Vec::new();
            for (i, preds) in raw_preds.into_iter().enumerate() {
                if i == 0 {
                    continue;
                }
                for p in preds {
                    edges.push((p % i, i));
                }
            }
            (num_nodes, edges)
        })
    })
}

fn build(num_nodes: usize, edges: &[(usize, usize)]) -> LayeredGraph {
    let mut builder = GraphBuilder::new("P");
    for i in 0..num_nodes {
        builder = builder.node(&node_name(i));
    }
    for &(from, to) in edges {
        builder = builder.edge(&node_name(from), &node_name(to));
    }
    builder.build()
}

// Length of the longest path reaching each node.
fn longest_paths(num_nodes: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut depth = vec![0; num_nodes];
    for i in 0..num_nodes {
        for &(from, to) in edges {
            if to == i {
                depth[i] = depth[i].max(depth[from] + 1);
            }
        }
    }
    depth
}

fn layers_of(graph: &LayeredGraph) -> Vec<Vec<String>> {
    (0..graph.num_layers())
        .map(|l| graph.nodes_on_layer(l).into_iter().map(str::to_string).collect())
        .collect()
}

proptest! {
    #[test]
    fn every_edge_spans_exactly_one_layer((num_nodes, edges) in dag_strategy(12)) {
        let mut graph = build(num_nodes, &edges);
        assign_layers(&mut graph).unwrap();

        for (from, to) in graph.edges() {
            let from_layer = graph.layer_of(from).unwrap();
            let to_layer = graph.layer_of(to).unwrap();
            prop_assert_eq!(to_layer, from_layer + 1, "edge {} -> {}", from, to);
        }
    }

    #[test]
    fn regular_nodes_sit_at_their_longest_path_depth((num_nodes, edges) in dag_strategy(12)) {
        let mut graph = build(num_nodes, &edges);
        let summary = assign_layers(&mut graph).unwrap();

        let depth = longest_paths(num_nodes, &edges);
        for (i, d) in depth.iter().enumerate() {
            prop_assert_eq!(graph.layer_of(&node_name(i)), Some(*d));
        }

        let max_depth = depth.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(summary.layers, max_depth + 1);
        prop_assert_eq!(graph.num_layers(), max_depth + 1);
    }

    #[test]
    fn counts_add_up((num_nodes, edges) in dag_strategy(12)) {
        let mut graph = build(num_nodes, &edges);
        let summary = assign_layers(&mut graph).unwrap();

        let depth = longest_paths(num_nodes, &edges);
        let expected_dummies: usize = edges
            .iter()
            .map(|&(from, to)| depth[to] - depth[from] - 1)
            .sum();

        prop_assert_eq!(summary.regular_nodes, num_nodes);
        prop_assert_eq!(summary.dummies_inserted, expected_dummies);
        prop_assert_eq!(summary.dummy_nodes, expected_dummies);
        prop_assert_eq!(summary.edges, edges.len() + expected_dummies);
        prop_assert_eq!(graph.num_nodes(), num_nodes + expected_dummies);

        let placed: usize = (0..graph.num_layers()).map(|l| graph.layer_size(l)).sum();
        prop_assert_eq!(placed, graph.num_nodes());
    }

    #[test]
    fn second_run_is_a_no_op((num_nodes, edges) in dag_strategy(10)) {
        let mut graph = build(num_nodes, &edges);
        assign_layers(&mut graph).unwrap();
        let names: Vec<String> = graph.node_names().map(str::to_string).collect();
        let before: Vec<Option<usize>> = names.iter().map(|n| graph.layer_of(n)).collect();

        let summary = assign_layers(&mut graph).unwrap();
        let after: Vec<Option<usize>> = names.iter().map(|n| graph.layer_of(n)).collect();

        prop_assert_eq!(summary.dummies_inserted, 0);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn written_output_reads_back((num_nodes, edges) in dag_strategy(10), per_line in 1..5usize) {
        let mut graph = build(num_nodes, &edges);
        assign_layers(&mut graph).unwrap();

        let mut dot = Vec::new();
        write_dot(&graph, &mut dot).unwrap();
        let mut ord = Vec::new();
        write_ord(&graph, &[], per_line, &mut ord).unwrap();

        let parsed = GraphReader::new()
            .read_layered(
                &String::from_utf8(ord).unwrap(),
                &String::from_utf8(dot).unwrap(),
            )
            .unwrap();

        prop_assert!(parsed.report.is_clean());
        prop_assert_eq!(parsed.graph.num_nodes(), graph.num_nodes());
        prop_assert_eq!(parsed.graph.num_edges(), graph.num_edges());
        prop_assert_eq!(layers_of(&parsed.graph), layers_of(&graph));
        let original: Vec<(&str, &str)> = graph.edges().collect();
        let reread: Vec<(&str, &str)> = parsed.graph.edges().collect();
        prop_assert_eq!(reread, original);
    }
}
