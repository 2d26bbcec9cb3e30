//! `summary` and `validate` subcommands.

use pkmn_filter::{aggregate, Dimension};
use pkmn_stats::Dataset;
use std::io::{self, Write};

/// Write unfiltered counts for each bar chart dimension.
pub fn write_summary<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} records", dataset.len())?;
    for dimension in Dimension::ALL {
        writeln!(out)?;
        writeln!(out, "{}", dimension.column())?;
        for bar in aggregate(dataset, dimension) {
            writeln!(out, "  {:<10} {:>5}", bar.label, bar.count)?;
        }
    }
    Ok(())
}

/// Write the rows whose `Stat Total` is not the sum of their base stats.
///
/// Line numbers count the header as line 1.
pub fn write_validation<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    let inconsistent = dataset.inconsistent_totals();
    writeln!(
        out,
        "{} records loaded, {} with an inconsistent Stat Total",
        dataset.len(),
        inconsistent.len()
    )?;
    for index in inconsistent {
        let record = &dataset.records()[index];
        writeln!(
            out,
            "  line {}: {} {} gen {}: Stat Total {} but base stats sum to {}",
            index + 2,
            record.primary_type,
            record.tier,
            record.generation,
            record.total,
            record.base_stat_sum()
        )?;
    }
    Ok(())
}
