/*!

  Monte Carlo estimation of gate output switching activity.

*/

use crate::circuit::{Circuit, Signal};
use crate::error::{Error, Result};
use crate::sim::settle;
use crate::stimulus::ProbabilityVector;
use crate::store::SignalStore;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Draws `true` with probability `p` from a uniform source.
/// Probabilities of 0 or below and 1 or above are certain and consume no randomness.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p <= 0.0 {
        false
    } else if p >= 1.0 {
        true
    } else {
        let u: f64 = Standard.sample(rng);
        u < p
    }
}

/// Knobs for the estimator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Trials per probability vector
    pub trials: usize,
    /// Seed for a reproducible random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: None,
        }
    }
}

impl EstimatorConfig {
    /// Sets the number of trials
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the random source described by this config
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Estimated switching activity of every gate output under one probability vector
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct SwitchingActivity {
    /// The probability applied to each primary input
    stimulus: Vec<(Signal, f64)>,
    /// The toggle rate of each gate output, in gate order
    rates: Vec<(Signal, f64)>,
    trials: usize,
}

impl SwitchingActivity {
    /// Returns the probability applied to each primary input
    pub fn stimulus(&self) -> &[(Signal, f64)] {
        &self.stimulus
    }

    /// Returns the toggle rate of each gate output, in gate order
    pub fn rates(&self) -> &[(Signal, f64)] {
        &self.rates
    }

    /// Returns the rate of `signal`, if a gate drives it
    pub fn get_rate(&self, signal: Signal) -> Option<f64> {
        self.rates
            .iter()
            .find(|(s, _)| *s == signal)
            .map(|(_, r)| *r)
    }

    /// Returns the number of counted trials
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl std::fmt::Display for SwitchingActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "with inputs (")?;
        for (i, (signal, p)) in self.stimulus.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{signal}={p}")?;
        }
        writeln!(f, "):")?;
        for (signal, rate) in &self.rates {
            writeln!(f, "{signal}: {rate}")?;
        }
        Ok(())
    }
}

fn randomize_inputs<R: Rng + ?Sized>(
    stimulus: &[(Signal, f64)],
    store: &mut SignalStore,
    rng: &mut R,
) -> Result<()> {
    for (signal, p) in stimulus {
        store.set(*signal, bernoulli(rng, *p))?;
    }
    Ok(())
}

/// Estimates how often each gate output changes between consecutive random trials.
///
/// Each trial draws every primary input independently from `probabilities`
/// (the `j`-th value applies to the `j`-th primary input), settles the circuit,
/// and compares every gate output with the previous trial.
/// One uncounted warm-up trial provides the predecessor of the first counted trial,
/// and the toggle counts are divided by `trials`.
pub fn estimate<R: Rng + ?Sized>(
    circuit: &Circuit,
    store: &mut SignalStore,
    probabilities: &ProbabilityVector,
    trials: usize,
    rng: &mut R,
) -> Result<SwitchingActivity> {
    if trials == 0 {
        return Err(Error::ZeroTrials);
    }
    let inputs = circuit.inputs();
    if probabilities.len() < inputs.len() {
        return Err(Error::StimulusWidth {
            expected: inputs.len(),
            found: probabilities.len(),
        });
    }
    if probabilities.len() > inputs.len() {
        warn!(
            unused = probabilities.len() - inputs.len(),
            "ignoring probabilities beyond the primary inputs"
        );
    }

    let stimulus: Vec<(Signal, f64)> = inputs
        .iter()
        .copied()
        .zip(probabilities.values().iter().copied())
        .collect();
    let outputs: Vec<Signal> = circuit.outputs().collect();

    debug!(trials, ?stimulus, "estimating switching activity");

    randomize_inputs(&stimulus, store, rng)?;
    settle(circuit, store)?;
    let mut previous = store.sample(outputs.iter().copied())?;
    let mut toggles = vec![0usize; outputs.len()];

    for _ in 0..trials {
        randomize_inputs(&stimulus, store, rng)?;
        settle(circuit, store)?;
        for (j, output) in outputs.iter().enumerate() {
            let value = store.get(*output)?;
            if value != previous[j] {
                toggles[j] += 1;
                previous.set(j, value);
            }
        }
    }

    let rates = outputs
        .into_iter()
        .zip(toggles)
        .map(|(s, t)| (s, t as f64 / trials as f64))
        .collect();

    Ok(SwitchingActivity {
        stimulus,
        rates,
        trials,
    })
}
