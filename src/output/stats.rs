//! Statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print the summary of a download run.
pub fn print_download_stats(state: &DownloadState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Statistics:").bold());
    println!("  Coubs:           {}", state.items);
    println!("  Downloaded:      {} files ({})", state.downloaded, format_bytes(state.bytes_written));
    println!("  Already present: {}", state.already_present);
    if state.replaced > 0 {
        println!("  Replaced:        {}", state.replaced);
    }
    if state.size_mismatches > state.replaced {
        println!(
            "  Size mismatches: {} (kept, use --existing replace-mismatched to refetch)",
            style(state.size_mismatches - state.replaced).yellow()
        );
    }
    println!("  Not available:   {}", state.missing);
    println!("{}", style("═".repeat(50)).dim());
}

/// Human readable byte count.
pub fn format_bytes(bytes: u64) -> String {
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
