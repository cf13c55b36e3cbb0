/*!

  Structural analyses of a circuit's gate dependency graph.

*/

use crate::circuit::{Circuit, Signal};
use crate::error::{Error, Result};
#[cfg(feature = "graph")]
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A common trait of analyses that can be performed on a circuit.
pub trait Analysis<'a>
where
    Self: Sized + 'a,
{
    /// Construct the analysis for `circuit`.
    fn build(circuit: &'a Circuit) -> Result<Self>;
}

/// A table that maps signals to the gates that read them
pub struct FanOutTable<'a> {
    circuit: &'a Circuit,
    // Maps a signal to the indices of the gates it feeds
    fan_out: HashMap<Signal, Vec<usize>>,
}

impl FanOutTable<'_> {
    /// Returns the indices of the gates that read `signal`
    pub fn get_users(&self, signal: Signal) -> impl Iterator<Item = usize> + '_ {
        self.fan_out
            .get(&signal)
            .into_iter()
            .flat_map(|users| users.iter().copied())
    }

    /// Returns `true` if some gate reads `signal`
    pub fn has_uses(&self, signal: Signal) -> bool {
        self.fan_out.get(&signal).is_some_and(|u| !u.is_empty())
    }

    /// Returns the primary inputs no gate reads
    pub fn unused_inputs(&self) -> impl Iterator<Item = Signal> + '_ {
        self.circuit
            .inputs()
            .iter()
            .copied()
            .filter(|s| !self.has_uses(*s))
    }
}

impl<'a> Analysis<'a> for FanOutTable<'a> {
    fn build(circuit: &'a Circuit) -> Result<Self> {
        let mut fan_out: HashMap<Signal, Vec<usize>> = HashMap::new();
        for (i, gate) in circuit.gates().iter().enumerate() {
            for input in gate.inputs() {
                let users = fan_out.entry(*input).or_default();
                // An AND gate may read the same signal twice
                if users.last() != Some(&i) {
                    users.push(i);
                }
            }
        }
        Ok(FanOutTable { circuit, fan_out })
    }
}

/// The logic depth of every gate output, primary inputs being depth 0.
/// Building this analysis fails on a combinational cycle.
///
/// The depth bounds the work of the fixed-point evaluator:
/// however the gates are ordered, a circuit of depth `d` settles within `d + 1` passes.
pub struct LogicDepth<'a> {
    _circuit: &'a Circuit,
    // Maps a gate output to its logic level
    depth: HashMap<Signal, usize>,
    max_depth: usize,
}

impl LogicDepth<'_> {
    /// Returns the logic depth of `signal`, or `None` for signals no gate drives
    pub fn get_comb_depth(&self, signal: Signal) -> Option<usize> {
        self.depth.get(&signal).copied()
    }

    /// Returns the maximum logic depth of the circuit
    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'a> Analysis<'a> for LogicDepth<'a> {
    fn build(circuit: &'a Circuit) -> Result<Self> {
        let gates = circuit.gates();
        let drivers: HashMap<Signal, usize> = gates
            .iter()
            .enumerate()
            .map(|(i, g)| (g.output(), i))
            .collect();

        let mut level: Vec<Option<usize>> = vec![None; gates.len()];
        let mut on_path = vec![false; gates.len()];

        for root in 0..gates.len() {
            // Iterative DFS; `true` marks a gate whose drivers are all done
            let mut stack = vec![(root, false)];
            while let Some((g, expanded)) = stack.pop() {
                if expanded {
                    on_path[g] = false;
                    let d = gates[g]
                        .inputs()
                        .iter()
                        .filter_map(|s| drivers.get(s))
                        .filter_map(|&d| level[d])
                        .max()
                        .unwrap_or(0);
                    level[g] = Some(d + 1);
                    continue;
                }
                if level[g].is_some() {
                    continue;
                }
                if on_path[g] {
                    return Err(Error::Cycle {
                        signal: gates[g].output(),
                    });
                }
                on_path[g] = true;
                stack.push((g, true));
                for input in gates[g].inputs() {
                    if let Some(&d) = drivers.get(input) {
                        if on_path[d] {
                            return Err(Error::Cycle { signal: *input });
                        }
                        if level[d].is_none() {
                            stack.push((d, false));
                        }
                    }
                }
            }
        }

        let depth: HashMap<Signal, usize> = gates
            .iter()
            .zip(level)
            .filter_map(|(g, l)| l.map(|l| (g.output(), l)))
            .collect();
        let max_depth = depth.values().max().copied().unwrap_or(0);

        Ok(LogicDepth {
            _circuit: circuit,
            depth,
            max_depth,
        })
    }
}

/// A petgraph representation of the circuit: one node per signal and
/// one edge from each gate input to the gate output.
#[cfg(feature = "graph")]
pub struct DependencyGraph<'a> {
    _circuit: &'a Circuit,
    graph: DiGraph<Signal, usize>,
    nodes: HashMap<Signal, NodeIndex>,
}

#[cfg(feature = "graph")]
impl DependencyGraph<'_> {
    /// Return a reference to the graph constructed by this analysis.
    /// Edge weights are gate indices.
    pub fn get_graph(&self) -> &DiGraph<Signal, usize> {
        &self.graph
    }

    /// Returns the node of `signal`
    pub fn get_node(&self, signal: Signal) -> Option<NodeIndex> {
        self.nodes.get(&signal).copied()
    }

    /// Returns `true` if the graph has a directed cycle
    pub fn is_cyclic(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Returns the signals in a topological order, or the signal on a cycle
    pub fn topological_order(&self) -> std::result::Result<Vec<Signal>, Signal> {
        petgraph::algo::toposort(&self.graph, None)
            .map(|order| order.into_iter().map(|n| self.graph[n]).collect())
            .map_err(|cycle| self.graph[cycle.node_id()])
    }
}

#[cfg(feature = "graph")]
impl<'a> Analysis<'a> for DependencyGraph<'a> {
    fn build(circuit: &'a Circuit) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        let signals = circuit.inputs().iter().copied().chain(
            circuit
                .gates()
                .iter()
                .flat_map(|g| g.inputs().iter().copied().chain(std::iter::once(g.output()))),
        );
        for signal in signals {
            nodes
                .entry(signal)
                .or_insert_with(|| graph.add_node(signal));
        }

        for (i, gate) in circuit.gates().iter().enumerate() {
            let target = nodes[&gate.output()];
            for input in gate.inputs() {
                graph.add_edge(nodes[input], target, i);
            }
        }

        Ok(Self {
            _circuit: circuit,
            graph,
            nodes,
        })
    }
}
