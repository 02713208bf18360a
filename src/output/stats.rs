//! Statistics reporting.

use console::style;

use crate::download::ExportSummary;

/// Print statistics for a finished export.
pub fn print_export_stats(summary: &ExportSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Statistics:").bold());
    println!("  Directory:  {}", summary.root.display());
    println!("  Clips:      {} downloaded", summary.downloaded);
    if summary.failed > 0 {
        println!("  Failed:     {}", style(summary.failed).red());
    }
    println!("  Size:       {}", format_bytes(summary.bytes));
    println!("{}", style("═".repeat(50)).dim());
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
