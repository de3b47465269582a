//! `grib-inspect`: message listing and value statistics.

use std::path::Path;

use anyhow::Result;

use radar_common::ValueStats;

use crate::gribfile::read_all;

pub fn run(input: &Path, stats: bool, lower: f32, upper: f32) -> Result<()> {
    let messages = read_all(input, stats)?;
    println!("{}: {} message(s)", input.display(), messages.len());

    for (info, values) in &messages {
        println!(
            "message {}: discipline={} grid_template={} product_template={}",
            info.number, info.discipline, info.grid_template, info.product_template
        );

        let Some(values) = values else { continue };
        println!("  decoded values: {}", values.len());

        let bounded: Vec<f32> = values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v >= lower && *v <= upper)
            .collect();
        let unique = unique_count(&bounded);

        match ValueStats::from_values(bounded) {
            Some(stats) => {
                println!("  within [{}, {}]: {} values, {} unique", lower, upper, stats.count, unique);
                println!(
                    "  range {:.10} ~ {:.10}",
                    stats.min, stats.max
                );
                println!("  mean {:.10}", stats.mean);
                println!("  median {:.10}", stats.median);
                println!("  std_dev {:.10}", stats.std_dev);
            }
            None => println!("  no values within [{}, {}]", lower, upper),
        }
    }

    Ok(())
}

fn unique_count(values: &[f32]) -> usize {
    let mut bits: Vec<u32> = values.iter().map(|v| v.to_bits()).collect();
    bits.sort_unstable();
    bits.dedup();
    bits.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_count_dedups() {
        assert_eq!(unique_count(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]), 3);
        assert_eq!(unique_count(&[]), 0);
    }
}
