//! Statistics printing.

use log::info;

use crate::error_handling::LineStats;

/// Logs how every source line was classified.
///
/// Kinds with a zero count are omitted.
pub fn print_line_statistics(stats: &LineStats) {
    info!("Line Counts ({} total):", stats.total_lines());
    for (kind, count) in stats.iter() {
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
