use gate_activity::activity::{EstimatorConfig, estimate};
use gate_activity::netlist::parse_netlist;
use gate_activity::stimulus::ProbabilityVector;
use gate_activity::truth_table::TruthTable;

fn main() {
    // A NAND gate built from an AND and an inverter
    let circuit = parse_netlist("AND c a b\nNOT d c\n").unwrap();

    // Print the truth table
    let table = TruthTable::build(&circuit).unwrap();
    print!("{table}");

    // Estimate how often each gate output switches
    let config = EstimatorConfig::default().with_seed(42);
    let probabilities = ProbabilityVector::new(vec![0.5, 0.5]).unwrap();
    let mut store = circuit.new_store();
    let activity = estimate(
        &circuit,
        &mut store,
        &probabilities,
        config.trials,
        &mut config.rng(),
    )
    .unwrap();
    print!("{activity}");
}
