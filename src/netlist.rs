/*!

  Reading and writing the textual netlist format.

  ```text
  top_inputs a b
  AND c a b
  NOT d c
  ```

  Each gate line is `TYPE OUTPUT INPUTS...` with `TYPE` one of `AND` (two inputs)
  or `NOT` (one input). Signals are single lowercase letters, `a` being signal 0.
  `top_inputs` lines declare the primary inputs; without one they are inferred.
  Blank lines are ignored.

*/

use crate::circuit::{Circuit, Gate, GateKind, Signal};
use crate::error::{Error, Result};
use std::path::Path;
use tracing::info;

/// Keyword introducing a primary-input declaration
pub const TOP_INPUTS: &str = "top_inputs";

fn parse_signal(token: &str, line: usize, content: &str) -> Result<Signal> {
    let mut chars = token.chars();
    match (chars.next().and_then(Signal::from_letter), chars.next()) {
        (Some(signal), None) => Ok(signal),
        _ => Err(Error::malformed(
            line,
            content,
            format!("'{token}' is not a single-letter signal name"),
        )),
    }
}

fn parse_gate(tokens: &[&str], line: usize, content: &str) -> Result<Gate> {
    let kind: GateKind = tokens[0]
        .parse()
        .map_err(|e: String| Error::malformed(line, content, e))?;
    if tokens.len() != kind.arity() + 2 {
        return Err(Error::malformed(
            line,
            content,
            format!(
                "{kind} takes an output and {} input(s), found {} signal(s)",
                kind.arity(),
                tokens.len() - 1
            ),
        ));
    }

    let signals = tokens[1..]
        .iter()
        .map(|t| parse_signal(t, line, content))
        .collect::<Result<Vec<_>>>()?;
    Ok(match kind {
        GateKind::Not => Gate::not(signals[0], signals[1]),
        GateKind::And => Gate::and(signals[0], signals[1], signals[2]),
    })
}

/// Parses netlist text into a validated [Circuit]
pub fn parse_netlist(text: &str) -> Result<Circuit> {
    let mut gates = Vec::new();
    let mut declared: Option<Vec<Signal>> = None;

    for (n, content) in text.lines().enumerate() {
        let line = n + 1;
        let tokens: Vec<&str> = content.split_whitespace().collect();
        match tokens.first() {
            None => continue,
            Some(&TOP_INPUTS) => {
                let inputs = declared.get_or_insert_with(Vec::new);
                for token in &tokens[1..] {
                    inputs.push(parse_signal(token, line, content)?);
                }
            }
            Some(_) => gates.push(parse_gate(&tokens, line, content)?),
        }
    }

    Circuit::new(gates, declared)
}

/// Reads and parses a netlist file
pub fn read_netlist(path: impl AsRef<Path>) -> Result<Circuit> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let circuit = parse_netlist(&text)?;
    info!(
        path = %path.display(),
        gates = circuit.gates().len(),
        inputs = circuit.inputs().len(),
        declared = circuit.has_declared_inputs(),
        "read netlist"
    );
    Ok(circuit)
}

impl std::str::FromStr for Circuit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_netlist(s)
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_declared_inputs() {
            write!(f, "{TOP_INPUTS}")?;
            for input in self.inputs() {
                write!(f, " {input}")?;
            }
            writeln!(f)?;
        }
        for gate in self.gates() {
            writeln!(f, "{gate}")?;
        }
        Ok(())
    }
}
