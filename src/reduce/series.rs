//! Series-reduction pass.

use crate::circuit::{CircuitGraph, NodeLabel};

use super::ReductionStep;

/// Remove the first series midpoint found, visiting nodes in `order`.
///
/// A midpoint is a node other than the two terminals with exactly two
/// resistors to other nodes, leading to two *different* neighbours.
/// Self-loops are not counted and are discarded along with the midpoint.
/// When both resistors lead back to the same neighbour they form a parallel
/// loop through the node, and the node is left alone.
pub fn try_series_reduce<N: NodeLabel>(
    graph: &mut CircuitGraph<N>,
    order: &[N],
    terminals: (&N, &N),
) -> Option<ReductionStep<N>> {
    for node in order {
        if node == terminals.0 || node == terminals.1 {
            continue;
        }

        let incident: Vec<_> = graph
            .incident_edges(node)
            .into_iter()
            .filter(|edge| !edge.is_self_loop())
            .collect();
        let [first, second] = incident.as_slice() else {
            continue;
        };
        let (Some(u), Some(w)) = (first.opposite(node), second.opposite(node)) else {
            continue;
        };
        if u == w {
            continue;
        }

        let (u, w) = (u.clone(), w.clone());
        let resistances = [first.resistance, second.resistance];
        let equivalent = resistances[0] + resistances[1];

        graph.remove_node(node);
        graph.insert_edge(u.clone(), w.clone(), equivalent);

        return Some(ReductionStep::Series {
            node: node.clone(),
            u,
            w,
            resistances,
            equivalent,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_midpoint_is_removed() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("b", "c", 20.0).unwrap();

        let order = g.all_nodes().to_vec();
        let step = try_series_reduce(&mut g, &order, (&"a", &"c")).unwrap();
        assert_eq!(
            step,
            ReductionStep::Series {
                node: "b",
                u: "a",
                w: "c",
                resistances: [10.0, 20.0],
                equivalent: 30.0,
            }
        );
        assert!(!g.contains_node(&"b"));
        assert_eq!(g.edges_between(&"a", &"c").len(), 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_terminals_are_never_collapsed() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("b", "c", 20.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert!(try_series_reduce(&mut g, &order, (&"a", &"b")).is_none());
        assert!(try_series_reduce(&mut g, &order, (&"b", &"c")).is_none());
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_loop_back_to_same_neighbour_is_declined() {
        // Both resistors of n lead to u: a parallel loop, not a series pair
        let mut g = CircuitGraph::new();
        g.add_resistor("u", "n", 10.0).unwrap();
        g.add_resistor("n", "u", 20.0).unwrap();
        g.add_resistor("u", "v", 30.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert!(try_series_reduce(&mut g, &order, (&"u", &"v")).is_none());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_node_is_not_a_midpoint() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("m", "m", 10.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert_eq!(g.degree(&"m"), 2);
        assert!(try_series_reduce(&mut g, &order, (&"a", &"b")).is_none());
    }

    #[test]
    fn test_midpoint_with_self_loop_is_removed() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "m", 10.0).unwrap();
        g.add_resistor("m", "m", 5.0).unwrap();
        g.add_resistor("m", "b", 20.0).unwrap();
        assert_eq!(g.degree(&"m"), 4);

        let order = g.all_nodes().to_vec();
        let step = try_series_reduce(&mut g, &order, (&"a", &"b")).unwrap();
        assert_eq!(
            step,
            ReductionStep::Series {
                node: "m",
                u: "a",
                w: "b",
                resistances: [10.0, 20.0],
                equivalent: 30.0,
            }
        );
        assert!(!g.contains_node(&"m"));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges_between(&"a", &"b"), vec![(g.all_edges()[0].key, 30.0)]);
    }

    #[test]
    fn test_degree_three_is_not_a_midpoint() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "m", 1.0).unwrap();
        g.add_resistor("m", "b", 1.0).unwrap();
        g.add_resistor("m", "c", 1.0).unwrap();

        let order = g.all_nodes().to_vec();
        assert!(try_series_reduce(&mut g, &order, (&"a", &"b")).is_none());
    }
}
