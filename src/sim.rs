/*!

  The fixed-point evaluator.

  Gates are not required to be in topological order. Instead every gate is
  re-evaluated, in the order the circuit lists them, until one full pass
  changes nothing.

*/

use crate::circuit::Circuit;
use crate::error::Result;
use crate::store::SignalStore;
use tracing::trace;

/// A summary of one call to [settle]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Full passes over the gate list, including the final pass that changed nothing
    pub passes: usize,
    /// Number of gate outputs written with a new value
    pub changes: usize,
}

/// Brings `store` to the fixed point implied by its current primary-input values.
///
/// Only gate outputs are written. Because a [Circuit] is acyclic this terminates,
/// in at most `depth + 1` passes where `depth` is the circuit's
/// [logic depth](crate::graph::LogicDepth).
pub fn settle(circuit: &Circuit, store: &mut SignalStore) -> Result<Evaluation> {
    let mut eval = Evaluation {
        passes: 0,
        changes: 0,
    };

    loop {
        eval.passes += 1;
        let mut changed = false;
        for gate in circuit.gates() {
            let previous = store.get(gate.output())?;
            let next = gate.evaluate(store)?;
            if previous != next {
                store.set(gate.output(), next)?;
                eval.changes += 1;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    trace!(passes = eval.passes, changes = eval.changes, "settled");
    Ok(eval)
}
