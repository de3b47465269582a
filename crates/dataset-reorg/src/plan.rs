//! Lowest-sweep selection and case batching.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// One recognized sweep raster on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFile {
    pub timestamp: String,
    pub sweep: u32,
    pub path: PathBuf,
}

/// One planned case folder.
#[derive(Debug, Clone)]
pub struct Case {
    /// Zero-padded case id, e.g. `00003`.
    pub id: String,
    /// Frames in timestamp order.
    pub frames: Vec<SweepFile>,
}

/// Full batching plan.
#[derive(Debug, Default)]
pub struct CasePlan {
    pub cases: Vec<Case>,
    /// Qualifying timestamps left over after the last full case.
    pub dropped: usize,
}

/// Keep the file with the minimum sweep index per timestamp, ordered by
/// timestamp (lexicographic, which is chronological for the fixed-width
/// numeric timestamps in use).
///
/// Tie-break on equal sweep indices is first-encountered-wins; the source
/// format does not produce ties, so this is implementation-defined rather
/// than a guarantee.
pub fn select_lowest_sweeps(files: Vec<SweepFile>) -> Vec<SweepFile> {
    let mut by_timestamp: BTreeMap<String, SweepFile> = BTreeMap::new();
    for file in files {
        match by_timestamp.get(&file.timestamp) {
            Some(existing) if existing.sweep <= file.sweep => {}
            _ => {
                by_timestamp.insert(file.timestamp.clone(), file);
            }
        }
    }
    by_timestamp.into_values().collect()
}

/// Chunk the selected frames into complete cases of `frames_per_case`.
/// The remainder is dropped, never padded.
pub fn build_cases(selected: Vec<SweepFile>, frames_per_case: usize) -> CasePlan {
    if frames_per_case == 0 {
        return CasePlan {
            cases: Vec::new(),
            dropped: selected.len(),
        };
    }

    let total_cases = selected.len() / frames_per_case;
    let dropped = selected.len() - total_cases * frames_per_case;

    let mut cases = Vec::with_capacity(total_cases);
    let mut frames = selected.into_iter();
    for case_idx in 0..total_cases {
        cases.push(Case {
            id: format!("{:05}", case_idx),
            frames: frames.by_ref().take(frames_per_case).collect(),
        });
    }

    CasePlan { cases, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(timestamp: &str, sweep: u32) -> SweepFile {
        SweepFile {
            timestamp: timestamp.to_string(),
            sweep,
            path: PathBuf::from(format!("RDR_SSP_FQC_{}_sweep_{}.png", timestamp, sweep)),
        }
    }

    #[test]
    fn keeps_lowest_sweep_per_timestamp() {
        let selected = select_lowest_sweeps(vec![
            file("202501081335", 0),
            file("202501081335", 2),
            file("202501081335", 1),
            file("202501081340", 0),
        ]);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].timestamp, "202501081335");
        assert_eq!(selected[0].sweep, 0);
        assert_eq!(selected[1].timestamp, "202501081340");
        assert_eq!(selected[1].sweep, 0);
    }

    #[test]
    fn output_sorted_by_timestamp_regardless_of_input_order() {
        let selected = select_lowest_sweeps(vec![
            file("202501081400", 3),
            file("202501081335", 1),
            file("202501081350", 2),
        ]);
        let timestamps: Vec<&str> =
            selected.iter().map(|f| f.timestamp.as_str()).collect();
        assert_eq!(
            timestamps,
            vec!["202501081335", "202501081350", "202501081400"]
        );
    }

    #[test]
    fn tie_keeps_first_encountered() {
        let first = SweepFile {
            timestamp: "202501081335".into(),
            sweep: 0,
            path: PathBuf::from("a/first.png"),
        };
        let second = SweepFile {
            timestamp: "202501081335".into(),
            sweep: 0,
            path: PathBuf::from("b/second.png"),
        };
        let selected = select_lowest_sweeps(vec![first.clone(), second]);
        assert_eq!(selected, vec![first]);
    }

    #[test]
    fn exact_multiple_drops_nothing() {
        let files: Vec<SweepFile> = (0..58)
            .map(|i| file(&format!("20250108{:04}", i), 0))
            .collect();
        let plan = build_cases(files, 29);
        assert_eq!(plan.cases.len(), 2);
        assert_eq!(plan.dropped, 0);
        assert_eq!(plan.cases[0].id, "00000");
        assert_eq!(plan.cases[1].id, "00001");
        assert_eq!(plan.cases[1].frames.len(), 29);
    }

    #[test]
    fn remainder_is_dropped() {
        let files: Vec<SweepFile> = (0..60)
            .map(|i| file(&format!("20250108{:04}", i), 0))
            .collect();
        let plan = build_cases(files, 29);
        assert_eq!(plan.cases.len(), 2);
        assert_eq!(plan.dropped, 2);
    }

    #[test]
    fn fewer_than_one_case_yields_nothing() {
        let files: Vec<SweepFile> =
            (0..5).map(|i| file(&format!("2025010800{:02}", i), 0)).collect();
        let plan = build_cases(files, 29);
        assert!(plan.cases.is_empty());
        assert_eq!(plan.dropped, 5);
    }
}
