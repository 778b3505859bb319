// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Random source for the sensor simulator

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Randomness consumed by the simulator tick.
///
/// Any [`rand::Rng`] works; tests use [`ScriptedSource`] to fix outcomes.
pub trait TriggerSource {
    /// Bernoulli trial, true with the given probability.
    fn trial(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> TriggerSource for R {
    /// NaN counts as zero; values outside `[0, 1]` are clamped.
    fn trial(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.gen_bool(p)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Build the simulator's source: seeded and reproducible, or from entropy.
pub fn source_from_seed(seed: Option<u64>) -> Box<dyn TriggerSource + Send> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    }
}

/// Replays fixed outcomes. Once exhausted, trials fail and picks return 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    trials: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful trial followed by a pick of `index`.
    pub fn fire(mut self, index: usize) -> Self {
        self.trials.push_back(true);
        self.picks.push_back(index);
        self
    }

    /// Queue a failed trial.
    pub fn miss(mut self) -> Self {
        self.trials.push_back(false);
        self
    }
}

impl TriggerSource for ScriptedSource {
    fn trial(&mut self, _probability: f64) -> bool {
        self.trials.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}
