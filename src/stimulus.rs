/*!

  Stimulus files: one probability vector per line.

*/

use crate::error::{Error, Result};
use std::path::Path;
use tracing::info;

/// Number of probabilities on each stimulus line
pub const STIMULUS_WIDTH: usize = 3;

/// Per-input probabilities of drawing a 1, applied to the primary inputs in canonical order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Creates a probability vector, checking every value lies in [0, 1]
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some(&value) = values.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::ProbabilityRange { value });
        }
        Ok(Self(values))
    }

    /// Returns the probabilities
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of probabilities
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses stimulus text. Blank lines are skipped; every other line must hold
/// exactly [STIMULUS_WIDTH] reals in [0, 1].
pub fn parse_stimulus(text: &str) -> Result<Vec<ProbabilityVector>> {
    let mut vectors = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|e| Error::malformed(n + 1, line, format!("'{tok}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        if values.len() != STIMULUS_WIDTH {
            return Err(Error::malformed(
                n + 1,
                line,
                format!("expected {STIMULUS_WIDTH} probabilities, found {}", values.len()),
            ));
        }
        vectors.push(ProbabilityVector::new(values)?);
    }
    Ok(vectors)
}

/// Reads and parses a stimulus file
pub fn read_stimulus(path: impl AsRef<Path>) -> Result<Vec<ProbabilityVector>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let vectors = parse_stimulus(&text)?;
    info!(path = %path.display(), vectors = vectors.len(), "read stimulus");
    Ok(vectors)
}
