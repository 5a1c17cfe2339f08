use super::*;
use crate::error::{ParseError, SolveError};
use proptest::prelude::*;

const PATH3: &str = "3\n0 1 0\n1 0 1\n0 1 0\n";

fn matrix(rows: &[&[i32]]) -> AdjacencyMatrix {
    let rows: Vec<Vec<i32>> = rows.iter().map(|r| r.to_vec()).collect();
    AdjacencyMatrix::from_rows(&rows).unwrap()
}

#[test]
fn bfs_path_graph_levels() {
    let r = bfs_from_text(PATH3, TraversalParams::default()).unwrap();
    assert_eq!(r.kind, TraversalKind::Bfs);
    assert_eq!(r.discovery_order, vec![0, 1, 2]);
    assert_eq!(r.distance, Some(vec![Some(0), Some(1), Some(2)]));
    assert_eq!(r.predecessor, Some(vec![None, Some(0), Some(1)]));
    assert_eq!(r.tree_edges, vec![(0, 1), (1, 2)]);
}

#[test]
fn dfs_path_graph_column_order() {
    let r = dfs_from_text(PATH3, TraversalParams { source: 0 }).unwrap();
    assert_eq!(r.kind, TraversalKind::Dfs);
    assert_eq!(r.discovery_order, vec![0, 1, 2]);
    assert_eq!(r.tree_edges, vec![(0, 1), (1, 2)]);
    assert!(r.distance.is_none() && r.predecessor.is_none());
}

#[test]
fn dfs_records_edges_at_push_time_and_tolerates_duplicates() {
    // Triangle: 0 pushes 1 and 2; 2 is popped first and pushes 1 again.
    let g = matrix(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
    let r = dfs(&g, 0).unwrap();
    assert_eq!(r.discovery_order, vec![0, 2, 1]);
    assert_eq!(r.tree_edges, vec![(0, 1), (0, 2), (2, 1)]);
}

#[test]
fn bfs_on_triangle_visits_each_node_once() {
    let g = matrix(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
    let r = bfs(&g, 1).unwrap();
    assert_eq!(r.discovery_order, vec![1, 0, 2]);
    assert_eq!(r.tree_edges, vec![(1, 0), (1, 2)]);
}

#[test]
fn directed_edges_and_unreachable_nodes() {
    // 0 → 1 → 2, node 3 isolated, 2 → 0 closes a cycle.
    let g = matrix(&[&[0, 1, 0, 0], &[0, 0, 1, 0], &[1, 0, 0, 0], &[0, 0, 0, 0]]);
    let r = bfs(&g, 1).unwrap();
    assert_eq!(r.discovery_order, vec![1, 2, 0]);
    assert_eq!(r.distance, Some(vec![Some(2), Some(0), Some(1), None]));
    let d = dfs(&g, 3).unwrap();
    assert_eq!(d.discovery_order, vec![3]);
    assert!(d.tree_edges.is_empty());
}

#[test]
fn non_unit_entries_are_not_edges() {
    let g = matrix(&[&[0, 2], &[5, 0]]);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(bfs(&g, 0).unwrap().discovery_order, vec![0]);
}

#[test]
fn source_out_of_range_is_an_error() {
    let g = matrix(&[&[0, 1], &[1, 0]]);
    assert_eq!(
        bfs(&g, 2).unwrap_err(),
        SolveError::SourceOutOfRange {
            node: 2,
            node_count: 2
        }
    );
    assert!(matches!(
        dfs_from_text(PATH3, TraversalParams { source: 7 }),
        Err(SolveError::SourceOutOfRange { node: 7, .. })
    ));
}

#[test]
fn malformed_matrix_surfaces_parse_error() {
    let err = bfs_from_text("3\n0 1 0\n1 0 1\n", TraversalParams::default()).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Parse(ParseError::MissingRow { row: 2, .. })
    ));
}

#[test]
fn circle_layout_starts_at_top() {
    let pts = layout_circle(4);
    let expect = [(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)];
    for (p, (x, y)) in pts.iter().zip(expect) {
        assert!((p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12);
    }
    assert!(layout_circle(0).is_empty());
}

fn graph_and_source() -> impl Strategy<Value = (Vec<Vec<i32>>, usize)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(0i32..=1, n), n),
            0..n,
        )
    })
}

fn assert_unique_within(order: &[usize], n: usize) {
    let mut seen = vec![false; n];
    assert!(order.len() <= n);
    for &v in order {
        assert!(!seen[v], "node {v} discovered twice");
        seen[v] = true;
    }
}

proptest! {
    #[test]
    fn bfs_distances_match_predecessor_chains((rows, source) in graph_and_source()) {
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        let before = g.clone();
        let r = bfs(&g, source).unwrap();
        prop_assert_eq!(&g, &before);
        let dist = r.distance.clone().unwrap();
        let pred = r.predecessor.clone().unwrap();
        prop_assert_eq!(dist[source], Some(0));
        assert_unique_within(&r.discovery_order, g.node_count());
        prop_assert_eq!(r.tree_edges.len(), r.discovery_order.len() - 1);
        for &v in &r.discovery_order {
            let mut hops = 0;
            let mut cur = v;
            while let Some(p) = pred[cur] {
                prop_assert!(g.has_edge(p, cur));
                cur = p;
                hops += 1;
            }
            prop_assert_eq!(cur, source);
            prop_assert_eq!(dist[v], Some(hops));
        }
        // Shortest: no edge shortcuts a reached level.
        for u in 0..g.node_count() {
            for v in g.neighbors(u) {
                if let Some(du) = dist[u] {
                    let dv = dist[v];
                    prop_assert!(dv.is_some_and(|dv| dv <= du + 1));
                }
            }
        }
    }

    #[test]
    fn dfs_order_is_duplicate_free_and_reaches_bfs_set((rows, source) in graph_and_source()) {
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        let d = dfs(&g, source).unwrap();
        let b = bfs(&g, source).unwrap();
        assert_unique_within(&d.discovery_order, g.node_count());
        prop_assert_eq!(d.discovery_order[0], source);
        let mut ds = d.discovery_order.clone();
        let mut bs = b.discovery_order.clone();
        ds.sort_unstable();
        bs.sort_unstable();
        prop_assert_eq!(ds, bs);
        for &(u, v) in &d.tree_edges {
            prop_assert!(g.has_edge(u, v));
        }
    }
}
