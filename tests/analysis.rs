use gate_activity::Error;
use gate_activity::circuit::{Circuit, Gate, Signal};
use gate_activity::graph::{FanOutTable, LogicDepth};
use gate_activity::netlist::parse_netlist;

fn s(c: char) -> Signal {
    Signal::from_letter(c).unwrap()
}

fn get_simple_example() -> Circuit {
    parse_netlist("AND c a b\nNOT d c\n").unwrap()
}

#[test]
fn test_detect_cycles() {
    // No cycles yet.
    assert!(get_simple_example().get_analysis::<LogicDepth>().is_ok());

    // Feed the inverter back into the AND gate.
    // Simple combinational loop.
    let result = parse_netlist("AND c a d\nNOT d c\n");
    assert!(matches!(result, Err(Error::Cycle { .. })));
}

#[test]
fn test_detect_long_cycle() {
    let gates = vec![
        Gate::not(s('b'), s('a')),
        Gate::and(s('c'), s('b'), s('f')),
        Gate::not(s('d'), s('c')),
        Gate::not(s('e'), s('d')),
        Gate::not(s('a'), s('e')),
    ];
    assert!(matches!(Circuit::new(gates, None), Err(Error::Cycle { .. })));
}

#[test]
fn test_reconvergent_fanout_is_acyclic() {
    // Both AND inputs come from the same inverter
    let circuit = parse_netlist("AND c b b\nNOT b a\n").unwrap();
    let depth = circuit.get_analysis::<LogicDepth>().unwrap();
    assert_eq!(depth.get_comb_depth(s('c')), Some(2));
}

#[test]
fn test_comb_depth() {
    let circuit = get_simple_example();
    let depth_info = circuit.get_analysis::<LogicDepth>().unwrap();

    assert_eq!(depth_info.get_comb_depth(s('c')), Some(1));
    assert_eq!(depth_info.get_comb_depth(s('d')), Some(2));
    assert_eq!(depth_info.get_max_depth(), 2);
}

#[test]
fn test_unused_declared_input() {
    let circuit = parse_netlist("top_inputs a b c\nAND d a b\n").unwrap();
    let fan_out = circuit.get_analysis::<FanOutTable>().unwrap();
    assert_eq!(fan_out.unused_inputs().collect::<Vec<_>>(), vec![s('c')]);
}

#[cfg(feature = "graph")]
#[test]
fn test_petgraph() {
    use gate_activity::graph::DependencyGraph;

    let circuit = get_simple_example();

    let petgraph = circuit.get_analysis::<DependencyGraph>().unwrap();
    let graph = petgraph.get_graph();
    // One node per signal, one edge per gate input
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(!petgraph.is_cyclic());

    let order = petgraph.topological_order().unwrap();
    let position = |c| order.iter().position(|x| *x == s(c)).unwrap();
    assert!(position('a') < position('c'));
    assert!(position('c') < position('d'));
}
