//! Reduction driver.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::circuit::{validate_terminals, CircuitGraph, NodeLabel, Resistor};
use crate::error::Result;

use super::{collapse_parallel, try_parallel_reduce, try_series_reduce, ReductionStep};

/// Order in which the reduction passes visit nodes.
///
/// For a series/parallel-reducible network the result does not depend on
/// the order; only the sequence of recorded steps does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Node insertion order (deterministic, the default)
    #[default]
    Insertion,
    /// Reverse insertion order
    Reversed,
    /// A fresh seeded shuffle before every scan
    Shuffled { seed: u64 },
}

/// Configuration for the reducer.
#[derive(Debug, Clone, Default)]
pub struct ReducerConfig {
    /// Node visiting order for both passes.
    pub scan_order: ScanOrder,
}

impl ReducerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node visiting order.
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }
}

/// Where the reducer is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionState {
    /// At least one more cycle is needed
    Reducing,
    /// A single resistor joins the terminals
    Solved,
    /// Neither rule applies and the network is not a single resistor
    Irreducible,
}

/// What was left of the circuit when no rule applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Residual<N> {
    /// Remaining nodes in insertion order
    pub nodes: Vec<N>,
    /// Remaining resistors in insertion order
    pub edges: Vec<Resistor<N>>,
}

/// Outcome of an equivalent-resistance query.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduction<N> {
    /// The network collapsed to one resistor of `resistance` ohms.
    Solved {
        resistance: f64,
        steps: Vec<ReductionStep<N>>,
    },
    /// The network cannot be solved by series/parallel reduction alone
    /// (bridge topologies, disconnected terminals, dead-end branches).
    Irreducible {
        residual: Residual<N>,
        steps: Vec<ReductionStep<N>>,
    },
}

impl<N> Reduction<N> {
    /// The equivalent resistance, if solved.
    pub fn resistance(&self) -> Option<f64> {
        match self {
            Reduction::Solved { resistance, .. } => Some(*resistance),
            Reduction::Irreducible { .. } => None,
        }
    }

    /// Check if the network was solved.
    pub fn is_solved(&self) -> bool {
        matches!(self, Reduction::Solved { .. })
    }

    /// Check if the network was irreducible.
    pub fn is_irreducible(&self) -> bool {
        matches!(self, Reduction::Irreducible { .. })
    }

    /// The rewrites performed, in order.
    pub fn steps(&self) -> &[ReductionStep<N>] {
        match self {
            Reduction::Solved { steps, .. } | Reduction::Irreducible { steps, .. } => steps,
        }
    }
}

/// Drives the parallel and series passes over one circuit.
///
/// The reducer borrows the circuit mutably and rewrites it in place. Build
/// one with [`Reducer::new`], then either call [`Reducer::run`] or advance it
/// cycle by cycle with [`Reducer::step`].
pub struct Reducer<'g, N> {
    /// The circuit being reduced
    graph: &'g mut CircuitGraph<N>,
    /// Terminal pair
    a: N,
    b: N,
    /// Driver configuration
    config: ReducerConfig,
    /// Shuffle source for [`ScanOrder::Shuffled`]
    rng: Option<StdRng>,
    /// Current state
    state: ReductionState,
    /// Rewrites performed so far
    steps: Vec<ReductionStep<N>>,
    /// Result once solved
    resistance: Option<f64>,
}

impl<'g, N: NodeLabel> Reducer<'g, N> {
    /// Create a reducer for the terminals `a` and `b` with default configuration.
    pub fn new(graph: &'g mut CircuitGraph<N>, a: N, b: N) -> Result<Self> {
        Self::with_config(graph, a, b, ReducerConfig::default())
    }

    /// Create a reducer with custom configuration.
    ///
    /// Fails with [`crate::OhmicError::UnknownTerminal`] before touching the
    /// circuit if either terminal is missing. Otherwise every self-loop is
    /// discarded, since a resistor with both ends on one node carries no
    /// current between distinct nodes.
    pub fn with_config(
        graph: &'g mut CircuitGraph<N>,
        a: N,
        b: N,
        config: ReducerConfig,
    ) -> Result<Self> {
        validate_terminals(graph, &a, &b)?;

        let rng = match config.scan_order {
            ScanOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
            ScanOrder::Insertion | ScanOrder::Reversed => None,
        };

        let mut reducer = Self {
            graph,
            a,
            b,
            config,
            rng,
            state: ReductionState::Reducing,
            steps: Vec::new(),
            resistance: None,
        };

        if reducer.a == reducer.b {
            // Short circuit: same node on both sides
            reducer.finish_solved(0.0);
        } else {
            reducer.drop_self_loops();
        }

        Ok(reducer)
    }

    /// Current state.
    pub fn state(&self) -> ReductionState {
        self.state
    }

    /// Rewrites performed so far.
    pub fn steps(&self) -> &[ReductionStep<N>] {
        &self.steps
    }

    /// Run one reduction cycle and return the new state.
    ///
    /// A cycle tries the parallel pass, then the series pass, and stops at the
    /// first rewrite. Once the state is `Solved` or `Irreducible` further
    /// calls do nothing.
    pub fn step(&mut self) -> ReductionState {
        if self.state != ReductionState::Reducing {
            return self.state;
        }

        if let Some(resistance) = self.single_terminal_edge() {
            self.finish_solved(resistance);
            return self.state;
        }

        let order = self.scan_order();

        if let Some(step) = try_parallel_reduce(self.graph, &order) {
            self.record(step);
            return self.state;
        }

        if let Some(step) = try_series_reduce(self.graph, &order, (&self.a, &self.b)) {
            self.record(step);
            return self.state;
        }

        // Neither pass applied. Merge any group still left between the
        // terminals before judging the final shape.
        if let Some(step) = collapse_parallel(self.graph, &self.a, &self.b) {
            self.record(step);
        }

        match self.single_terminal_edge() {
            Some(resistance) => self.finish_solved(resistance),
            None => {
                log::info!(
                    "irreducible network: {} nodes and {} resistors remain",
                    self.graph.node_count(),
                    self.graph.edge_count()
                );
                self.state = ReductionState::Irreducible;
            }
        }
        self.state
    }

    /// Run to completion and report the outcome.
    pub fn run(mut self) -> Reduction<N> {
        while self.step() == ReductionState::Reducing {}
        self.into_reduction()
    }

    fn into_reduction(self) -> Reduction<N> {
        match (self.state, self.resistance) {
            (ReductionState::Solved, Some(resistance)) => Reduction::Solved {
                resistance,
                steps: self.steps,
            },
            _ => Reduction::Irreducible {
                residual: Residual {
                    nodes: self.graph.all_nodes().to_vec(),
                    edges: self.graph.all_edges().into_iter().cloned().collect(),
                },
                steps: self.steps,
            },
        }
    }

    /// Resistance of the only edge if the circuit is exactly `a`–`b`.
    fn single_terminal_edge(&self) -> Option<f64> {
        if self.graph.node_count() != 2 || self.graph.edge_count() != 1 {
            return None;
        }
        match self.graph.edges_between(&self.a, &self.b).as_slice() {
            [(_, resistance)] => Some(*resistance),
            _ => None,
        }
    }

    fn scan_order(&mut self) -> Vec<N> {
        let mut order = self.graph.all_nodes().to_vec();
        match self.config.scan_order {
            ScanOrder::Insertion => {}
            ScanOrder::Reversed => order.reverse(),
            ScanOrder::Shuffled { .. } => {
                if let Some(rng) = self.rng.as_mut() {
                    order.shuffle(rng);
                }
            }
        }
        order
    }

    fn drop_self_loops(&mut self) {
        let loops: Vec<Resistor<N>> = self
            .graph
            .all_edges()
            .into_iter()
            .filter(|edge| edge.is_self_loop())
            .cloned()
            .collect();

        for edge in loops {
            if self.graph.remove_edge(&edge.u, &edge.v, edge.key).is_some() {
                log::warn!("discarding self-loop {} at node {}", edge.key, edge.u);
                self.steps.push(ReductionStep::SelfLoopDropped {
                    node: edge.u,
                    resistance: edge.resistance,
                });
            }
        }
    }

    fn record(&mut self, step: ReductionStep<N>) {
        log::debug!("{}", step);
        self.steps.push(step);
    }

    fn finish_solved(&mut self, resistance: f64) {
        log::info!(
            "solved {}–{} in {} steps: {} Ω",
            self.a,
            self.b,
            self.steps.len(),
            resistance
        );
        self.resistance = Some(resistance);
        self.state = ReductionState::Solved;
    }
}

/// Compute the equivalent resistance between `a` and `b`, reducing `graph` in place.
///
/// Returns an error only for an unknown terminal. A network that cannot be
/// collapsed is reported as [`Reduction::Irreducible`].
pub fn equivalent_resistance<N: NodeLabel>(
    graph: &mut CircuitGraph<N>,
    a: &N,
    b: &N,
) -> Result<Reduction<N>> {
    equivalent_resistance_with_config(graph, a, b, ReducerConfig::default())
}

/// Compute the equivalent resistance with custom configuration.
pub fn equivalent_resistance_with_config<N: NodeLabel>(
    graph: &mut CircuitGraph<N>,
    a: &N,
    b: &N,
    config: ReducerConfig,
) -> Result<Reduction<N>> {
    Ok(Reducer::with_config(graph, a.clone(), b.clone(), config)?.run())
}
