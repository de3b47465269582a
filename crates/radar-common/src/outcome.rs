//! Per-unit outcome types for batch operations.
//!
//! Batch drivers process many independent units (sweeps, files, messages).
//! Instead of catch-and-continue, each unit reports an explicit outcome so
//! the driver decides whether to keep going and can summarize at the end.

use std::path::PathBuf;

use serde::Serialize;

/// Why a unit was skipped rather than converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Sweep contained no samples (zero rays or zero gates).
    EmptySweep,
    /// Sweep index bounds inconsistent with the volume's ray/gate arrays.
    MalformedBounds(String),
    /// Required variable or attribute absent from the input.
    MissingVariable(String),
    /// Input file could not be opened or decoded.
    UnreadableInput(String),
    /// Filename did not match the expected token layout.
    UnrecognizedName(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmptySweep => write!(f, "empty sweep"),
            SkipReason::MalformedBounds(msg) => write!(f, "malformed sweep bounds: {}", msg),
            SkipReason::MissingVariable(name) => write!(f, "missing variable: {}", name),
            SkipReason::UnreadableInput(msg) => write!(f, "unreadable input: {}", msg),
            SkipReason::UnrecognizedName(name) => write!(f, "unrecognized filename: {}", name),
        }
    }
}

/// Outcome of converting one sweep.
#[derive(Debug)]
pub enum SweepOutcome {
    /// Sweep rendered and written to the given path.
    Converted(PathBuf),
    /// Sweep skipped; the rest of the volume is still processed.
    Skipped(SkipReason),
}

/// Outcome of processing one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// File processed; per-sweep outcomes attached.
    Processed(Vec<SweepOutcome>),
    /// Whole file skipped (unreadable, missing variables).
    Skipped(SkipReason),
}

/// Counters accumulated over a batch run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub units_converted: usize,
    pub units_skipped: usize,
}

impl BatchSummary {
    pub fn record_file(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed(sweeps) => {
                self.files_processed += 1;
                for sweep in sweeps {
                    match sweep {
                        SweepOutcome::Converted(_) => self.units_converted += 1,
                        SweepOutcome::Skipped(_) => self.units_skipped += 1,
                    }
                }
            }
            FileOutcome::Skipped(_) => self.files_skipped += 1,
        }
    }

    /// Paths of all outputs produced so far, in processing order.
    pub fn collect_outputs(outcomes: &[FileOutcome]) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for outcome in outcomes {
            if let FileOutcome::Processed(sweeps) = outcome {
                for sweep in sweeps {
                    if let SweepOutcome::Converted(path) = sweep {
                        paths.push(path.clone());
                    }
                }
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_sweeps_and_files() {
        let mut summary = BatchSummary::default();
        summary.record_file(&FileOutcome::Processed(vec![
            SweepOutcome::Converted(PathBuf::from("a.png")),
            SweepOutcome::Skipped(SkipReason::EmptySweep),
        ]));
        summary.record_file(&FileOutcome::Skipped(SkipReason::UnreadableInput(
            "bad magic".into(),
        )));

        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_skipped, 1);
        assert_eq!(summary.units_converted, 1);
        assert_eq!(summary.units_skipped, 1);
    }

    #[test]
    fn collect_outputs_preserves_order() {
        let outcomes = vec![
            FileOutcome::Processed(vec![
                SweepOutcome::Converted(PathBuf::from("x_sweep_0.png")),
                SweepOutcome::Converted(PathBuf::from("x_sweep_1.png")),
            ]),
            FileOutcome::Skipped(SkipReason::EmptySweep),
            FileOutcome::Processed(vec![SweepOutcome::Converted(PathBuf::from(
                "y_sweep_0.png",
            ))]),
        ];
        let paths = BatchSummary::collect_outputs(&outcomes);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("x_sweep_0.png"),
                PathBuf::from("x_sweep_1.png"),
                PathBuf::from("y_sweep_0.png"),
            ]
        );
    }
}
