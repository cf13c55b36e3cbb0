/*!

  A full run over one circuit: truth table plus one activity estimate per probability vector.

*/

use crate::activity::{EstimatorConfig, SwitchingActivity, estimate};
use crate::circuit::{Circuit, Signal};
use crate::error::Result;
use crate::stimulus::ProbabilityVector;
use crate::truth_table::TruthTable;
use tracing::info;

/// Everything printed for one circuit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Report {
    /// Where the circuit came from, usually the netlist path
    source: String,
    inputs: Vec<Signal>,
    truth_table: TruthTable,
    activities: Vec<SwitchingActivity>,
}

impl Report {
    /// Enumerates the truth table of `circuit` and estimates its switching activity
    /// under each of `vectors`. A single signal store and random source carry across the whole run.
    pub fn run(
        circuit: &Circuit,
        source: impl Into<String>,
        vectors: &[ProbabilityVector],
        config: &EstimatorConfig,
    ) -> Result<Self> {
        let mut store = circuit.new_store();
        let truth_table = TruthTable::enumerate(circuit, &mut store)?;

        let mut rng = config.rng();
        let activities = vectors
            .iter()
            .map(|v| estimate(circuit, &mut store, v, config.trials, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        let source = source.into();
        info!(%source, vectors = activities.len(), trials = config.trials, "finished run");
        Ok(Self {
            source,
            inputs: circuit.inputs().to_vec(),
            truth_table,
            activities,
        })
    }

    /// Returns the name of the circuit source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the primary inputs, declared or inferred
    pub fn inputs(&self) -> &[Signal] {
        &self.inputs
    }

    /// Returns the truth table
    pub fn truth_table(&self) -> &TruthTable {
        &self.truth_table
    }

    /// Returns one estimate per probability vector, in stimulus order
    pub fn activities(&self) -> &[SwitchingActivity] {
        &self.activities
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Inputs declared in '{}':", self.source)?;
        let names: Vec<String> = self.inputs.iter().map(|s| s.to_string()).collect();
        writeln!(f, "{}", names.join(", "))?;
        writeln!(f)?;

        writeln!(f, "Truth table verification:")?;
        write!(f, "{}", self.truth_table)?;
        writeln!(f)?;

        writeln!(f, "Average switching activity for outputs")?;
        for activity in &self.activities {
            write!(f, "{activity}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialize the report into the writer as pretty-printed JSON.
#[cfg(feature = "serde")]
pub fn report_serialize(
    report: &Report,
    writer: impl std::io::Write,
) -> std::result::Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, report)
}
