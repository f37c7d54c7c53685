use crate::{
    ranking::{Contender, Trial},
    search::SearchResult,
};
use std::fmt::{self, Display, Formatter};

/// Running totals of one contender over a batch of trials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    solved: usize,
    failed: usize,
    visited_states: usize,
    path_length: usize,
    seconds: f64,
}

/// Per-trial averages over the solved trials of a [`Tally`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub visited_states: f64,
    pub path_length: f64,
    pub seconds: f64,
}

impl Tally {
    pub fn record(&mut self, trial: &Trial) {
        match &trial.result {
            SearchResult::Success(solution) => {
                self.solved += 1;
                self.visited_states += solution.visited_states();
                self.path_length += solution.path_length();
                self.seconds += trial.elapsed.as_secs_f64();
            }
            _ => self.failed += 1,
        }
    }

    pub fn solved(&self) -> usize {
        self.solved
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// `None` if no trial was solved.
    pub fn averages(&self) -> Option<Averages> {
        if self.solved == 0 {
            return None;
        }
        let solved = self.solved as f64;
        Some(Averages {
            visited_states: self.visited_states as f64 / solved,
            path_length: self.path_length as f64 / solved,
            seconds: self.seconds / solved,
        })
    }
}

/// The averaged outcome of a batch comparison.
#[derive(Debug, Clone)]
pub struct RankingReport {
    trials: usize,
    tallies: Vec<(Contender, Tally)>,
}

impl RankingReport {
    pub fn new(trials: usize, tallies: Vec<(Contender, Tally)>) -> Self {
        Self { trials, tallies }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn tallies(&self) -> &[(Contender, Tally)] {
        &self.tallies
    }

    pub fn tally(&self, contender: Contender) -> Option<&Tally> {
        self.tallies
            .iter()
            .find(|(c, _)| *c == contender)
            .map(|(_, tally)| tally)
    }
}

const LABEL_WIDTH: usize = 68;

impl Display for RankingReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "---------------RESULTS---------------")?;
        writeln!(f, "Averages over {} trials", self.trials)?;
        writeln!(
            f,
            "{:<width$} {:>12} {:>12} {:>12} {:>8}",
            "Algorithm",
            "Visited",
            "Length",
            "Seconds",
            "Failed",
            width = LABEL_WIDTH
        )?;
        for (contender, tally) in &self.tallies {
            match tally.averages() {
                Some(averages) => writeln!(
                    f,
                    "{:<width$} {:>12.1} {:>12.2} {:>12.6} {:>8}",
                    contender.label(),
                    averages.visited_states,
                    averages.path_length,
                    averages.seconds,
                    tally.failed(),
                    width = LABEL_WIDTH
                )?,
                None => writeln!(
                    f,
                    "{:<width$} {:>12} {:>12} {:>12} {:>8}",
                    contender.label(),
                    "-",
                    "-",
                    "-",
                    tally.failed(),
                    width = LABEL_WIDTH
                )?,
            }
        }
        Ok(())
    }
}

/// Side by side outcome of several contenders on one instance.
#[derive(Debug)]
pub struct ComparisonTable<'a> {
    trials: &'a [Trial],
}

impl<'a> ComparisonTable<'a> {
    pub fn new(trials: &'a [Trial]) -> Self {
        Self { trials }
    }
}

impl Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<width$} {:>12} {:>16}",
            "",
            "Num Visited",
            "Solution Length",
            width = LABEL_WIDTH
        )?;
        for trial in self.trials {
            match &trial.result {
                SearchResult::Success(solution) => writeln!(
                    f,
                    "{:<width$} {:>12} {:>16}",
                    trial.contender.label(),
                    solution.visited_states(),
                    solution.path_length(),
                    width = LABEL_WIDTH
                )?,
                other => writeln!(
                    f,
                    "{:<width$} {:>12} {:>16}",
                    trial.contender.label(),
                    trial.statistics.visited_states(),
                    format!("{:?}", other),
                    width = LABEL_WIDTH
                )?,
            }
        }
        Ok(())
    }
}
