#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, unreachable_pub)]
/*!

`gate-activity`

Simulates small combinational circuits of NOT and AND gates.
A [Circuit](circuit::Circuit) is read from a netlist, settled to its fixed point by
[settle](sim::settle), enumerated exhaustively into a [TruthTable](truth_table::TruthTable),
and driven with random inputs by [estimate](activity::estimate) to measure how often
each gate output switches.

*/
#![doc = "## Simple Example\n```"]
#![doc = include_str!("../demos/simple.rs")]
#![doc = "\n```"]

pub mod activity;
pub mod circuit;
pub mod error;
pub mod graph;
pub mod netlist;
pub mod report;
pub mod sim;
pub mod stimulus;
pub mod store;
pub mod truth_table;
pub mod util;

pub use error::{Error, Result};
