//! Parallel-reduction pass.

use crate::circuit::{CircuitGraph, NodeLabel};

use super::ReductionStep;

/// Merge the first group of parallel resistors found, visiting nodes in `order`.
///
/// Returns the rewrite performed, or `None` if no two distinct nodes are
/// joined by two or more resistors. Self-loops never count towards a group.
/// Nodes in `order` that are not in the graph are skipped.
pub fn try_parallel_reduce<N: NodeLabel>(
    graph: &mut CircuitGraph<N>,
    order: &[N],
) -> Option<ReductionStep<N>> {
    let (u, v) = find_parallel_pair(graph, order)?;
    collapse_parallel(graph, &u, &v)
}

/// Replace every resistor directly joining `u` and `v` by their equivalent.
///
/// Returns `None` and leaves the graph alone if `u == v` or fewer than two
/// resistors join the pair.
pub fn collapse_parallel<N: NodeLabel>(
    graph: &mut CircuitGraph<N>,
    u: &N,
    v: &N,
) -> Option<ReductionStep<N>> {
    if u == v {
        return None;
    }
    let group = graph.edges_between(u, v);
    if group.len() < 2 {
        return None;
    }

    let mut resistances = Vec::with_capacity(group.len());
    for (key, resistance) in group {
        graph.remove_edge(u, v, key);
        resistances.push(resistance);
    }

    let conductance: f64 = resistances.iter().map(|r| 1.0 / r).sum();
    let equivalent = 1.0 / conductance;
    graph.insert_edge(u.clone(), v.clone(), equivalent);

    Some(ReductionStep::Parallel {
        u: u.clone(),
        v: v.clone(),
        resistances,
        equivalent,
    })
}

/// Find the first node pair, in scan order, joined by at least two resistors.
fn find_parallel_pair<N: NodeLabel>(graph: &CircuitGraph<N>, order: &[N]) -> Option<(N, N)> {
    for u in order {
        // Neighbours in first-seen order with their edge counts
        let mut neighbours: Vec<(&N, usize)> = Vec::new();
        for edge in graph.incident_edges(u) {
            if edge.is_self_loop() {
                continue;
            }
            let Some(other) = edge.opposite(u) else {
                continue;
            };
            match neighbours.iter_mut().find(|(n, _)| *n == other) {
                Some((_, count)) => *count += 1,
                None => neighbours.push((other, 1)),
            }
        }

        if let Some((v, _)) = neighbours.into_iter().find(|(_, count)| *count >= 2) {
            return Some((u.clone(), v.clone()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parallel_group_collapses_to_one_edge() {
        let mut g = CircuitGraph::new();
        g.add_resistor("x", "y", 10.0).unwrap();
        g.add_resistor("y", "x", 20.0).unwrap();
        g.add_resistor("x", "y", 40.0).unwrap();

        let order = g.all_nodes().to_vec();
        let step = try_parallel_reduce(&mut g, &order).unwrap();

        let expected = 1.0 / (1.0 / 10.0 + 1.0 / 20.0 + 1.0 / 40.0);
        match step {
            ReductionStep::Parallel {
                u,
                v,
                resistances,
                equivalent,
            } => {
                assert_eq!((u, v), ("x", "y"));
                assert_eq!(resistances, vec![10.0, 20.0, 40.0]);
                assert_relative_eq!(equivalent, expected);
            }
            other => panic!("unexpected step {:?}", other),
        }

        let remaining = g.edges_between(&"x", &"y");
        assert_eq!(remaining.len(), 1);
        assert_relative_eq!(remaining[0].1, expected);
        assert_eq!(g.degree(&"x"), 1);
    }

    #[test]
    fn test_only_first_group_is_reduced() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("c", "d", 10.0).unwrap();
        g.add_resistor("c", "d", 10.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert!(try_parallel_reduce(&mut g, &order).is_some());
        assert_eq!(g.edges_between(&"a", &"b").len(), 1);
        assert_eq!(g.edges_between(&"c", &"d").len(), 2);
    }

    #[test]
    fn test_scan_order_picks_group() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("c", "d", 10.0).unwrap();
        g.add_resistor("c", "d", 10.0).unwrap();

        let order = vec!["d", "c", "b", "a"];
        match try_parallel_reduce(&mut g, &order).unwrap() {
            ReductionStep::Parallel { u, v, .. } => assert_eq!((u, v), ("d", "c")),
            other => panic!("unexpected step {:?}", other),
        }
        assert_eq!(g.edges_between(&"a", &"b").len(), 2);
    }

    #[test]
    fn test_no_group_means_no_change() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("b", "c", 10.0).unwrap();
        g.add_resistor("b", "b", 10.0).unwrap();
        g.add_resistor("b", "b", 10.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert!(try_parallel_reduce(&mut g, &order).is_none());
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_collapse_parallel_requires_group() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        assert!(collapse_parallel(&mut g, &"a", &"b").is_none());
        assert!(collapse_parallel(&mut g, &"a", &"a").is_none());
        assert_eq!(g.edge_count(), 1);
    }
}
