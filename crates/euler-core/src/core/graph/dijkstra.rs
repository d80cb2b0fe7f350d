use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A directed graph stored as adjacency lists of `(target, weight)` pairs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        self.adjacency[from].push((to, weight));
    }

    pub fn neighbors(&self, node: usize) -> &[(usize, u64)] {
        &self.adjacency[node]
    }

    /// Shortest distances from a set of weighted sources.
    ///
    /// Each source starts at its own initial cost, which lets callers charge the
    /// weight of the starting cell. Unreachable nodes are `None`.
    pub fn dijkstra(&self, sources: &[(usize, u64)]) -> Vec<Option<u64>> {
        let mut dist: Vec<Option<u64>> = vec![None; self.node_count()];
        let mut heap = BinaryHeap::new();

        for &(node, cost) in sources {
            if dist[node].is_none_or(|d| cost < d) {
                dist[node] = Some(cost);
                heap.push(Reverse((cost, node)));
            }
        }

        while let Some(Reverse((cost, node))) = heap.pop() {
            if dist[node].is_some_and(|d| cost > d) {
                continue;
            }
            for &(next, weight) in &self.adjacency[node] {
                let candidate = cost + weight;
                if dist[next].is_none_or(|d| candidate < d) {
                    dist[next] = Some(candidate);
                    heap.push(Reverse((candidate, next)));
                }
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        let mut g = Graph::with_nodes(5);
        g.add_edge(0, 1, 4);
        g.add_edge(0, 2, 1);
        g.add_edge(2, 1, 2);
        g.add_edge(1, 3, 1);
        g.add_edge(2, 3, 5);
        g
    }

    #[test]
    fn dijkstra_prefers_cheaper_indirect_route() {
        let dist = diamond().dijkstra(&[(0, 0)]);
        assert_eq!(dist, vec![Some(0), Some(3), Some(1), Some(4), None]);
    }

    #[test]
    fn dijkstra_honours_initial_source_costs() {
        let dist = diamond().dijkstra(&[(0, 10), (2, 0)]);
        assert_eq!(dist[0], Some(10));
        assert_eq!(dist[1], Some(2));
        assert_eq!(dist[3], Some(3));
    }

    #[test]
    fn edge_count_sums_adjacency_lists() {
        let g = diamond();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.neighbors(0), &[(1, 4), (2, 1)]);
    }
}
