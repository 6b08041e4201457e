use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::Graph;

impl Graph {
    /// Least-cost path from `source` to `target` by summed edge weight (Dijkstra).
    /// Returns the total cost and the node sequence, or `None` if `target` is unreachable.
    /// Weights must be non-negative.
    pub(crate) fn shortest_path(&self, source: usize, target: usize) -> Option<(f64, Vec<usize>)> {
        // Binary min-heap keyed by tentative cost; equal costs pop the lower node first.
        #[derive(Copy, Clone, Eq, PartialEq)]
        struct Entry {
            cost_bits: u64, // f64::to_bits() is monotone for non-negative values
            node: usize,
        }

        impl Ord for Entry {
            fn cmp(&self, other: &Self) -> Ordering {
                other.cost_bits.cmp(&self.cost_bits)
                    .then_with(|| other.node.cmp(&self.node))
            }
        }

        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
        }

        let mut cost = vec![f64::INFINITY; self.node_count()];
        let mut prev = vec![usize::MAX; self.node_count()];
        let mut heap = BinaryHeap::<Entry>::new();

        cost[source] = 0.0;
        heap.push(Entry { cost_bits: 0f64.to_bits(), node: source });

        while let Some(Entry { cost_bits, node }) = heap.pop() {
            if node == target { break }
            let current = f64::from_bits(cost_bits);
            if current > cost[node] { continue } // Stale entry.

            for (next, weight) in self.edges_with_weights(node) {
                debug_assert!(weight >= 0.0, "edge weights must be non-negative");
                let candidate = current + weight;
                if candidate < cost[next] {
                    cost[next] = candidate;
                    prev[next] = node;
                    heap.push(Entry { cost_bits: candidate.to_bits(), node: next });
                }
            }
        }

        if !cost[target].is_finite() { return None }

        let mut path = vec![target];
        let mut node = target;
        while node != source {
            node = prev[node];
            path.push(node);
        }
        path.reverse();
        Some((cost[target], path))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    /// Build an undirected CSR graph from an edge list.
    fn undirected(num_nodes: usize, edges: &[(u32, u32, f64)]) -> Graph {
        let mut adj = vec![vec![]; num_nodes];
        let mut weights = vec![vec![]; num_nodes];
        for &(u, v, w) in edges {
            adj[u as usize].push(v);
            weights[u as usize].push(w);
            adj[v as usize].push(u);
            weights[v as usize].push(w);
        }
        Graph::new(num_nodes, &adj, &weights)
    }

    #[test]
    fn follows_the_cheapest_route() {
        // 0 -0.9- 1 -0.0- 3, 0 -0.2- 2 -0.5- 3
        let graph = undirected(4, &[(0, 1, 0.9), (1, 3, 0.0), (0, 2, 0.2), (2, 3, 0.5)]);
        let (cost, path) = graph.shortest_path(0, 3).unwrap();
        assert_eq!(path, vec![0, 2, 3]);
        assert!((cost - 0.7).abs() < 1e-12);
    }

    #[test]
    fn prefers_cheap_detour_over_expensive_direct_edge() {
        let graph = undirected(3, &[(0, 2, 1.0), (0, 1, 0.1), (1, 2, 0.1)]);
        assert_eq!(graph.shortest_path(0, 2).unwrap().1, vec![0, 1, 2]);
    }

    #[test]
    fn cost_is_symmetric() {
        let graph = undirected(3, &[(0, 1, 0.3), (1, 2, 0.4)]);
        let (forward, path) = graph.shortest_path(0, 2).unwrap();
        let (backward, reverse) = graph.shortest_path(2, 0).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(path.iter().rev().copied().collect::<Vec<_>>(), reverse);
    }

    #[test]
    fn source_equal_to_target_is_a_single_node() {
        let graph = undirected(2, &[(0, 1, 0.5)]);
        assert_eq!(graph.shortest_path(1, 1), Some((0.0, vec![1])));
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let graph = undirected(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        assert_eq!(graph.shortest_path(0, 2), Some((0.0, vec![0, 1, 2])));
    }

    #[test]
    fn equal_cost_routes_prefer_lower_node_indices() {
        // Two routes of cost 1.0 between 0 and 3: through 1 or through 2.
        let graph = undirected(4, &[(0, 1, 0.5), (1, 3, 0.5), (0, 2, 0.5), (2, 3, 0.5)]);
        for _ in 0..10 {
            assert_eq!(graph.shortest_path(0, 3), Some((1.0, vec![0, 1, 3])));
            assert_eq!(graph.shortest_path(3, 0), Some((1.0, vec![3, 1, 0])));
        }

        // Insertion order of the adjacency lists does not matter.
        let graph = undirected(4, &[(0, 2, 0.5), (2, 3, 0.5), (0, 1, 0.5), (1, 3, 0.5)]);
        assert_eq!(graph.shortest_path(0, 3).unwrap().1, vec![0, 1, 3]);
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = undirected(4, &[(0, 1, 0.5), (2, 3, 0.5)]);
        assert_eq!(graph.shortest_path(0, 3), None);
    }
}
