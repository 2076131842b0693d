//! Core types for circuit representation.

use std::fmt;
use std::hash::Hash;

/// Requirements on a node label.
///
/// Any hashable, printable value can name a circuit junction: `&str`,
/// `String`, integers, or a caller-defined newtype.
pub trait NodeLabel: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> NodeLabel for T {}

/// Stable per-insertion identifier for one resistor instance.
///
/// Keys are handed out in increasing order and never reused, so two parallel
/// resistors between the same nodes are always distinguishable and sorting by
/// key recovers insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub u64);

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A resistor edge between two circuit nodes.
///
/// The endpoint order is the order given at insertion; it carries no meaning
/// since resistors are not polarized.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor<N> {
    /// Stable key of this edge instance
    pub key: EdgeKey,
    /// First endpoint
    pub u: N,
    /// Second endpoint
    pub v: N,
    /// Resistance in ohms (always > 0)
    pub resistance: f64,
}

impl<N: PartialEq> Resistor<N> {
    /// Check whether both ends sit on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Check whether this resistor joins `a` and `b` (in either direction).
    pub fn connects(&self, a: &N, b: &N) -> bool {
        (self.u == *a && self.v == *b) || (self.u == *b && self.v == *a)
    }

    /// Get the endpoint opposite to `node`, if `node` is an endpoint.
    pub fn opposite(&self, node: &N) -> Option<&N> {
        if self.u == *node {
            Some(&self.v)
        } else if self.v == *node {
            Some(&self.u)
        } else {
            None
        }
    }

    /// Conductance in siemens.
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

impl<N: fmt::Display> fmt::Display for Resistor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}–{} {} Ω", self.key, self.u, self.v, self.resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistor_helpers() {
        let r = Resistor {
            key: EdgeKey(0),
            u: "a",
            v: "b",
            resistance: 1000.0,
        };
        assert!(!r.is_self_loop());
        assert!(r.connects(&"b", &"a"));
        assert_eq!(r.opposite(&"a"), Some(&"b"));
        assert_eq!(r.opposite(&"c"), None);
        assert!((r.conductance() - 0.001).abs() < 1e-12);
    }
}
