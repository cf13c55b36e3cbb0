/*!

  Exhaustive truth-table enumeration.

*/

use crate::circuit::{Circuit, Signal};
use crate::error::{Error, Result};
use crate::sim::settle;
use crate::store::SignalStore;
use bitvec::vec::BitVec;
use tracing::debug;

/// The most primary inputs [TruthTable::enumerate] accepts, i.e. at most 2^24 rows
pub const MAX_ENUMERATED_INPUTS: usize = 24;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct TruthRow {
    /// Primary-input values, in canonical input order
    pub inputs: BitVec,
    /// Gate output values, in gate order
    pub outputs: BitVec,
}

/// The settled gate outputs for every primary-input combination.
///
/// Row `i` assigns bit `j` of `i` to the `j`-th primary input, so the first input toggles fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct TruthTable {
    inputs: Vec<Signal>,
    outputs: Vec<Signal>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Enumerates all `2^k` input combinations of `circuit`, driving `store` through each one.
    pub fn enumerate(circuit: &Circuit, store: &mut SignalStore) -> Result<Self> {
        let inputs = circuit.inputs().to_vec();
        let outputs: Vec<Signal> = circuit.outputs().collect();
        if inputs.len() > MAX_ENUMERATED_INPUTS {
            return Err(Error::TooManyInputs {
                count: inputs.len(),
            });
        }

        let combinations = 1u64 << inputs.len();
        let mut rows = Vec::new();
        for i in 0..combinations {
            for (j, input) in inputs.iter().enumerate() {
                store.set(*input, (i >> j) & 1 == 1)?;
            }
            settle(circuit, store)?;
            rows.push(TruthRow {
                inputs: store.sample(inputs.iter().copied())?,
                outputs: store.sample(outputs.iter().copied())?,
            });
        }

        debug!(inputs = inputs.len(), rows = rows.len(), "enumerated truth table");
        Ok(Self {
            inputs,
            outputs,
            rows,
        })
    }

    /// Enumerates the truth table of `circuit` on a fresh store
    pub fn build(circuit: &Circuit) -> Result<Self> {
        Self::enumerate(circuit, &mut circuit.new_store())
    }

    /// Returns the primary inputs labelling the input columns
    pub fn inputs(&self) -> &[Signal] {
        &self.inputs
    }

    /// Returns the gate outputs labelling the output columns
    pub fn outputs(&self) -> &[Signal] {
        &self.outputs
    }

    /// Returns the rows in enumeration order
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows. A table always has at least one.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn write_assignment(
    f: &mut std::fmt::Formatter<'_>,
    signals: &[Signal],
    values: &BitVec,
) -> std::fmt::Result {
    for (i, (signal, value)) in signals.iter().zip(values.iter()).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}={}", signal, u8::from(*value))?;
    }
    Ok(())
}

impl std::fmt::Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            write_assignment(f, &self.inputs, &row.inputs)?;
            write!(f, " => ")?;
            write_assignment(f, &self.outputs, &row.outputs)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
