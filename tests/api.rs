use gate_activity::Error;
use gate_activity::circuit::{Circuit, Gate, GateKind, Signal};
use gate_activity::netlist::{parse_netlist, read_netlist};
use gate_activity::stimulus::{STIMULUS_WIDTH, read_stimulus};
use std::path::PathBuf;

fn s(c: char) -> Signal {
    Signal::from_letter(c).unwrap()
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gate-activity-api-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_io() {
    let circuit = parse_netlist("AND c a b\nNOT d c\nAND e d a\n").unwrap();

    assert_eq!(circuit.inputs(), &[s('a'), s('b')]);
    assert_eq!(
        circuit.outputs().collect::<Vec<_>>(),
        vec![s('c'), s('d'), s('e')]
    );
    assert_eq!(circuit.signal_count(), 5);

    let driver = circuit.get_driver(s('d')).unwrap();
    assert_eq!(driver.kind(), GateKind::Not);
    assert_eq!(driver.inputs(), &[s('c')]);
    assert!(circuit.get_driver(s('a')).is_none());
}

#[test]
fn test_declared_inputs_win() {
    // 'c' would be inferred as well, but the declaration is authoritative
    let circuit = parse_netlist("top_inputs a b\nAND d a b\nNOT e c\n").unwrap();
    assert_eq!(circuit.inputs(), &[s('a'), s('b')]);
    assert!(circuit.has_declared_inputs());
}

#[test]
fn test_builder_matches_parser() {
    let built = Circuit::new(
        vec![Gate::and(s('c'), s('a'), s('b')), Gate::not(s('d'), s('c'))],
        None,
    )
    .unwrap();
    let parsed: Circuit = "AND c a b\nNOT d c".parse().unwrap();
    assert_eq!(built, parsed);
    assert_eq!(built.to_string(), "AND c a b\nNOT d c\n");
}

#[test]
fn test_wide_store() {
    // Store size follows the highest letter in use, not a fixed alphabet
    let circuit = parse_netlist("NOT z y\n").unwrap();
    assert_eq!(circuit.signal_count(), 26);
    assert_eq!(circuit.new_store().len(), 26);
}

#[test]
fn test_read_files() {
    let netlist = scratch_file("netlist.txt", "NOT d a\n");
    let stimulus = scratch_file("stimulus.txt", "0.5 0.5 0.5\n0.1 0.2 0.3\n");

    let circuit = read_netlist(&netlist).unwrap();
    assert_eq!(circuit.gates().len(), 1);
    let vectors = read_stimulus(&stimulus).unwrap();
    assert_eq!(vectors.len(), 2);
    assert!(vectors.iter().all(|v| v.len() == STIMULUS_WIDTH));

    std::fs::remove_file(netlist).unwrap();
    std::fs::remove_file(stimulus).unwrap();
}

#[test]
fn test_unreadable_files() {
    let missing = std::env::temp_dir().join("gate-activity-api-does-not-exist.txt");
    match read_netlist(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(matches!(read_stimulus(&missing), Err(Error::Io { .. })));
}

#[test]
fn test_error_messages_name_the_line() {
    let err = parse_netlist("NOT d a\nXOR e a b\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("line 2:"), "{msg}");
    assert!(msg.contains("XOR e a b"), "{msg}");
}

#[cfg(feature = "serde")]
#[test]
fn test_basic_serialize() {
    use gate_activity::activity::EstimatorConfig;
    use gate_activity::report::{Report, report_serialize};
    use gate_activity::stimulus::ProbabilityVector;

    let circuit = parse_netlist("NOT d a\n").unwrap();
    let vectors = vec![ProbabilityVector::new(vec![0.5, 0.5, 0.5]).unwrap()];
    let config = EstimatorConfig::default().with_trials(10).with_seed(1);
    let report = Report::run(&circuit, "not.txt", &vectors, &config).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    assert!(report_serialize(&report, &mut buf).is_ok());

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["source"], "not.txt");
    assert_eq!(value["inputs"].as_array().unwrap().len(), 1);
    assert_eq!(value["activities"].as_array().unwrap().len(), 1);
}
