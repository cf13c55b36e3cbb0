/*!

  The circuit model: signals, NOT/AND gates and the validated [Circuit] built from them.

*/

use crate::error::{Error, Result};
use crate::graph::{Analysis, LogicDepth};
use crate::store::SignalStore;
use std::collections::{BTreeSet, HashSet};

/// A binary wire, identified by its position in the [SignalStore].
/// Netlists name signals with a single letter, `a` being index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Signal(usize);

impl Signal {
    /// Creates a signal for store index `index`
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Maps a lowercase ASCII letter to its signal (`a` is 0)
    pub fn from_letter(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then(|| Self((c as u8 - b'a') as usize))
    }

    /// Returns the store index of the signal
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns the letter naming this signal, if it has one
    pub fn letter(&self) -> Option<char> {
        (self.0 < 26).then(|| (b'a' + self.0 as u8) as char)
    }
}

impl From<usize> for Signal {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "s{}", self.0),
        }
    }
}

/// The logic function of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum GateKind {
    /// Single-input inverter
    Not,
    /// Two-input conjunction
    And,
}

impl GateKind {
    /// Returns the number of inputs a gate of this kind reads
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Not => 1,
            GateKind::And => 2,
        }
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateKind::Not => write!(f, "NOT"),
            GateKind::And => write!(f, "AND"),
        }
    }
}

impl std::str::FromStr for GateKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "NOT" => Ok(GateKind::Not),
            "AND" => Ok(GateKind::And),
            _ => Err(format!("unknown gate type '{s}'")),
        }
    }
}

/// A single-output logic gate. The constructors fix the number of inputs to the gate's arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Gate {
    kind: GateKind,
    /// Input signals, order matters
    inputs: Vec<Signal>,
    output: Signal,
}

impl Gate {
    /// Creates an inverter driving `output` from `input`
    pub fn not(output: Signal, input: Signal) -> Self {
        Self {
            kind: GateKind::Not,
            inputs: vec![input],
            output,
        }
    }

    /// Creates an AND gate driving `output` from `a` and `b`
    pub fn and(output: Signal, a: Signal, b: Signal) -> Self {
        Self {
            kind: GateKind::And,
            inputs: vec![a, b],
            output,
        }
    }

    /// Returns the logic function of the gate
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Returns the input signals of the gate
    pub fn inputs(&self) -> &[Signal] {
        &self.inputs
    }

    /// Returns the signal driven by the gate
    pub fn output(&self) -> Signal {
        self.output
    }

    /// Applies the gate function to the current values in `store`
    pub fn evaluate(&self, store: &SignalStore) -> Result<bool> {
        Ok(match self.kind {
            GateKind::Not => !store.get(self.inputs[0])?,
            GateKind::And => store.get(self.inputs[0])? & store.get(self.inputs[1])?,
        })
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.output)?;
        for input in &self.inputs {
            write!(f, " {input}")?;
        }
        Ok(())
    }
}

/// An ordered list of gates plus the primary inputs that stimulate them.
///
/// A [Circuit] is validated on construction and never changes afterwards:
/// every gate has the inputs its kind requires, no gate reads its own output,
/// no signal has two drivers, declared inputs are never driven,
/// and the gate dependency graph is acyclic. Together these guarantee that
/// [settle](crate::sim::settle) reaches a fixed point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Circuit {
    gates: Vec<Gate>,
    /// Primary inputs, ascending by index
    inputs: Vec<Signal>,
    /// Whether `inputs` was declared rather than inferred
    declared: bool,
    /// Number of signals the store must hold
    width: usize,
}

impl Circuit {
    /// Builds a circuit from `gates`.
    ///
    /// With `declared_inputs` the primary inputs are exactly those signals.
    /// Without it they are inferred as every signal some gate reads but no gate drives.
    pub fn new(gates: Vec<Gate>, declared_inputs: Option<Vec<Signal>>) -> Result<Self> {
        let mut driven = HashSet::new();
        for gate in &gates {
            if gate.inputs().len() != gate.kind().arity() {
                return Err(Error::Arity {
                    signal: gate.output(),
                    kind: gate.kind(),
                    expected: gate.kind().arity(),
                    found: gate.inputs().len(),
                });
            }
            if gate.inputs().contains(&gate.output()) {
                return Err(Error::SelfLoop {
                    signal: gate.output(),
                });
            }
            if !driven.insert(gate.output()) {
                return Err(Error::MultipleDrivers {
                    signal: gate.output(),
                });
            }
        }

        let declared = declared_inputs.is_some();
        let inputs: BTreeSet<Signal> = match declared_inputs {
            Some(inputs) => {
                if let Some(signal) = inputs.iter().find(|s| driven.contains(*s)) {
                    return Err(Error::DrivenInput { signal: *signal });
                }
                inputs.into_iter().collect()
            }
            None => gates
                .iter()
                .flat_map(|g| g.inputs().iter().copied())
                .filter(|s| !driven.contains(s))
                .collect(),
        };

        let mut width: usize = 0;
        for signal in gates
            .iter()
            .flat_map(|g| g.inputs().iter().copied().chain(std::iter::once(g.output())))
            .chain(inputs.iter().copied())
        {
            let needed = signal
                .index()
                .checked_add(1)
                .ok_or(Error::IndexOutOfRange {
                    index: signal.index(),
                    len: usize::MAX,
                })?;
            width = width.max(needed);
        }

        let circuit = Self {
            gates,
            inputs: inputs.into_iter().collect(),
            declared,
            width,
        };

        // Rejects cycles
        circuit.get_analysis::<LogicDepth>()?;
        Ok(circuit)
    }

    /// Returns the gates in evaluation order
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the primary inputs in canonical (ascending) order
    pub fn inputs(&self) -> &[Signal] {
        &self.inputs
    }

    /// Returns `true` if the primary inputs were declared by the source rather than inferred
    pub fn has_declared_inputs(&self) -> bool {
        self.declared
    }

    /// Returns the gate output signals, in gate order
    pub fn outputs(&self) -> impl Iterator<Item = Signal> + '_ {
        self.gates.iter().map(|g| g.output())
    }

    /// Returns the gate driving `signal`, if any
    pub fn get_driver(&self, signal: Signal) -> Option<&Gate> {
        self.gates.iter().find(|g| g.output() == signal)
    }

    /// Returns the number of signals a store for this circuit must hold
    pub fn signal_count(&self) -> usize {
        self.width
    }

    /// Creates a zeroed signal store sized for this circuit
    pub fn new_store(&self) -> SignalStore {
        SignalStore::new(self.width)
    }

    /// Runs an analysis against the circuit
    pub fn get_analysis<'a, A: Analysis<'a>>(&'a self) -> Result<A> {
        A::build(self)
    }
}
