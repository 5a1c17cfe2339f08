//! Plain-text printout of a solution, one record per line.
//!
//! - BFS/DFS: `Order: v0 v1 ...`, a blank line, then `from, to` per tree edge.
//! - HULL: `x y` per hull vertex (raw, counter-clockwise).
//! - SKYLINE: `x height` per key point (raw).

use algoviz::Solution;

pub fn to_text(solution: &Solution) -> String {
    match solution {
        Solution::Traversal(r) => {
            let order: Vec<String> = r.discovery_order.iter().map(usize::to_string).collect();
            let edges: Vec<String> = r
                .tree_edges
                .iter()
                .map(|(u, v)| format!("{u}, {v}"))
                .collect();
            format!("Order: {}\n\n{}", order.join(" "), edges.join("\n"))
        }
        Solution::Hull(r) => r
            .hull_raw
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join("\n"),
        Solution::Skyline(r) => r
            .key_points_raw
            .iter()
            .map(|k| format!("{} {}", k.x, k.height))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
