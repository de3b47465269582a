//! `nc-inspect`: structural dump and per-sweep moment statistics.

use std::path::Path;

use anyhow::{Context, Result};

use cfradial_parser::{list_variables, open_volume, volume_stats, RADAR_MOMENTS};

pub fn run(input: &Path) -> Result<()> {
    let variables = list_variables(input)
        .with_context(|| format!("failed to open {}", input.display()))?;

    println!("=== Variables ===");
    for var in &variables {
        let dims: Vec<String> = var
            .dimensions
            .iter()
            .map(|(name, len)| format!("{}={}", name, len))
            .collect();
        println!("{}: ({})", var.name, dims.join(", "));
    }

    println!("\n=== Moment statistics ===");
    let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    for moment in RADAR_MOMENTS {
        if !names.contains(moment) {
            continue;
        }
        // Missing/broken moments are reported and skipped, not fatal.
        let volume = match open_volume(input, moment) {
            Ok(volume) => volume,
            Err(e) => {
                println!("\n{}: unreadable ({})", moment, e);
                continue;
            }
        };

        println!("\n{}:", moment);
        for sweep in volume_stats(&volume) {
            match sweep.stats {
                Some(stats) => println!(
                    "  sweep {} (elev {:.1}°): n={} range {:.2}..{:.2} mean {:.2} median {:.2}",
                    sweep.sweep_index,
                    sweep.elevation,
                    stats.count,
                    stats.min,
                    stats.max,
                    stats.mean,
                    stats.median
                ),
                None => println!(
                    "  sweep {} (elev {:.1}°): no valid samples",
                    sweep.sweep_index, sweep.elevation
                ),
            }
        }
    }

    Ok(())
}
