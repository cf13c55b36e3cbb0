/*!

  Error types for loading and simulating circuits.

*/

use crate::circuit::{GateKind, Signal};
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading a netlist and reporting on it.
/// All of these are fatal to a run; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A netlist or stimulus file could not be read
    #[error("unable to read '{}': {source}", .path.display())]
    Io {
        /// The offending path
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line of a netlist or stimulus file did not parse
    #[error("line {line}: {reason}: '{content}'")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The raw line text
        content: String,
        /// What was wrong with it
        reason: String,
    },

    /// A signal index lies outside the signal store
    #[error("signal index {index} is out of range for a store of {len} signals")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The store length
        len: usize,
    },

    /// A gate reads its own output
    #[error("gate driving '{signal}' uses its own output as an input")]
    SelfLoop {
        /// The output of the offending gate
        signal: Signal,
    },

    /// The gate dependency graph is not acyclic
    #[error("combinational cycle through signal '{signal}'")]
    Cycle {
        /// A signal on the cycle
        signal: Signal,
    },

    /// A gate has the wrong number of inputs for its kind
    #[error("{kind} gate driving '{signal}' has {found} input(s), expected {expected}")]
    Arity {
        /// The output of the offending gate
        signal: Signal,
        /// The gate function
        kind: GateKind,
        /// Inputs the kind requires
        expected: usize,
        /// Inputs the gate has
        found: usize,
    },

    /// More than one gate drives the same signal
    #[error("signal '{signal}' is driven by more than one gate")]
    MultipleDrivers {
        /// The multiply-driven signal
        signal: Signal,
    },

    /// A declared primary input is also a gate output
    #[error("primary input '{signal}' is driven by a gate")]
    DrivenInput {
        /// The declared input
        signal: Signal,
    },

    /// A probability vector is shorter than the primary-input list
    #[error("probability vector has {found} entries but the circuit has {expected} primary inputs")]
    StimulusWidth {
        /// Number of primary inputs
        expected: usize,
        /// Number of probabilities supplied
        found: usize,
    },

    /// A probability outside [0, 1]
    #[error("probability {value} is not within [0, 1]")]
    ProbabilityRange {
        /// The rejected value
        value: f64,
    },

    /// Too many primary inputs to enumerate exhaustively
    #[error("cannot enumerate {count} primary inputs")]
    TooManyInputs {
        /// Number of primary inputs
        count: usize,
    },

    /// The estimator was asked for zero trials
    #[error("the trial count must be at least 1")]
    ZeroTrials,
}

impl Error {
    /// Shorthand for a [Error::MalformedLine]
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
