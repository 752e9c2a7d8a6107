// Template method demonstration
//
// Runs every report through the same fixed pipeline and collects the
// exported summaries.

use crate::report::reports::{HrReport, InventoryReport, SalesReport};
use crate::report::trait_def::Report;

/// Compute the demonstration transcript without printing
pub fn lines() -> Vec<String> {
    let reports: [&dyn Report; 3] = [&SalesReport, &InventoryReport, &HrReport];

    let mut lines = Vec::new();
    lines.push("Generating reports:".to_string());
    for report in reports {
        lines.push(report.generate_report());
    }
    lines
}

/// Run the demonstration, printing each line
pub fn run() {
    for line in lines() {
        println!("{}", line);
    }
}
