// Concrete report implementations

use crate::report::record::Record;
use crate::report::trait_def::Report;
use chrono::{Local, NaiveDate};

/// Hours above which worked time counts as overtime
const OVERTIME_THRESHOLD: i64 = 150;

/// Upper bound accepted for reported hours
const MAX_REPORTABLE_HOURS: i64 = 200;

/// Date carried by the demonstration's raw sales records
fn sales_batch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Sales report: totals the transactions and stamps the processing date
///
/// The processed sequence carries the original records plus a trailer record
/// holding the running total; the trailer is excluded from the transaction
/// count at export.
pub struct SalesReport;

impl Report for SalesReport {
    fn name(&self) -> &'static str {
        "Sales"
    }

    fn collect_data(&self) -> Vec<Record> {
        vec![
            Record::new()
                .with("id", 1)
                .with("product", "Laptop")
                .with("amount", 1200)
                .with("date", sales_batch_date()),
            Record::new()
                .with("id", 2)
                .with("product", "Mouse")
                .with("amount", 25)
                .with("date", sales_batch_date()),
        ]
    }

    fn process_data(&self, data: &[Record]) -> Vec<Record> {
        let total_sales: i64 = data
            .iter()
            .filter_map(|record| record.int("amount"))
            .sum();

        let today = Local::now().date_naive();
        let mut processed: Vec<Record> = data.to_vec();
        for record in &mut processed {
            record.set("processed_date", today);
        }

        processed.push(Record::new().with("total_sales", total_sales));
        processed
    }

    fn validate_data(&self, data: &[Record]) -> bool {
        // Records without an amount field (the trailer) pass
        data.iter()
            .filter(|record| record.has("amount"))
            .all(|record| record.int("amount").unwrap_or(0) > 0)
    }

    fn export_report(&self, data: &[Record]) -> String {
        let total = data
            .last()
            .and_then(|record| record.int("total_sales"))
            .unwrap_or(0);
        format!(
            "Sales report generated with {} transactions. Total: ${}",
            data.len().saturating_sub(1),
            total
        )
    }
}

/// Inventory report: flags items at or below their minimum stock level
pub struct InventoryReport;

impl Report for InventoryReport {
    fn name(&self) -> &'static str {
        "Inventory"
    }

    fn collect_data(&self) -> Vec<Record> {
        vec![
            Record::new()
                .with("id", 1)
                .with("product", "Laptop")
                .with("stock", 50)
                .with("min_stock", 10),
            Record::new()
                .with("id", 2)
                .with("product", "Mouse")
                .with("stock", 100)
                .with("min_stock", 20),
        ]
    }

    fn process_data(&self, data: &[Record]) -> Vec<Record> {
        let mut processed: Vec<Record> = data.to_vec();
        for record in &mut processed {
            let stock = record.int("stock").unwrap_or(0);
            let min_stock = record.int("min_stock").unwrap_or(0);
            let status = if stock > min_stock { "OK" } else { "REORDER" };
            record.set("status", status);
        }
        processed
    }

    fn validate_data(&self, data: &[Record]) -> bool {
        data.iter()
            .all(|record| record.int("stock").unwrap_or(0) >= 0)
    }

    fn export_report(&self, data: &[Record]) -> String {
        let reorder_items = data
            .iter()
            .filter(|record| record.text("status") == Some("REORDER"))
            .count();
        format!(
            "Inventory report generated with {} products. Items to reorder: {}",
            data.len(),
            reorder_items
        )
    }
}

/// HR report: computes overtime hours per employee
pub struct HrReport;

impl Report for HrReport {
    fn name(&self) -> &'static str {
        "HR"
    }

    fn collect_data(&self) -> Vec<Record> {
        vec![
            Record::new()
                .with("id", 1)
                .with("name", "John Doe")
                .with("department", "IT")
                .with("hours_worked", 160),
            Record::new()
                .with("id", 2)
                .with("name", "Jane Smith")
                .with("department", "HR")
                .with("hours_worked", 152),
        ]
    }

    fn process_data(&self, data: &[Record]) -> Vec<Record> {
        let mut processed: Vec<Record> = data.to_vec();
        for record in &mut processed {
            let hours = record.int("hours_worked").unwrap_or(0);
            record.set("overtime", (hours - OVERTIME_THRESHOLD).max(0));
        }
        processed
    }

    fn validate_data(&self, data: &[Record]) -> bool {
        data.iter().all(|record| {
            let hours = record.int("hours_worked").unwrap_or(0);
            (0..=MAX_REPORTABLE_HOURS).contains(&hours)
        })
    }

    fn export_report(&self, data: &[Record]) -> String {
        let total_overtime: i64 = data
            .iter()
            .filter_map(|record| record.int("overtime"))
            .sum();
        format!(
            "HR report generated with {} employees. Total overtime hours: {}",
            data.len(),
            total_overtime
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_report_output() {
        assert_eq!(
            SalesReport.generate_report(),
            "Sales report generated with 2 transactions. Total: $1225"
        );
    }

    #[test]
    fn test_sales_process_appends_trailer_and_stamps_dates() {
        let report = SalesReport;
        let raw = report.collect_data();
        let processed = report.process_data(&raw);

        assert_eq!(processed.len(), raw.len() + 1);
        assert!(processed[0].has("processed_date"));
        assert!(processed[1].has("processed_date"));
        assert_eq!(processed[2].int("total_sales"), Some(1225));
    }

    #[test]
    fn test_sales_process_leaves_raw_records_unchanged() {
        let report = SalesReport;
        let raw = report.collect_data();
        let before = raw.clone();

        report.process_data(&raw);

        assert_eq!(raw, before);
        assert!(!raw[0].has("processed_date"));
    }

    #[test]
    fn test_sales_validation_rejects_non_positive_amounts() {
        let report = SalesReport;
        let records = vec![
            Record::new().with("id", 1).with("amount", 1200),
            Record::new().with("id", 2).with("amount", 0),
        ];
        assert!(!report.validate_data(&records));
    }

    #[test]
    fn test_sales_validation_skips_records_without_amount() {
        let report = SalesReport;
        let records = vec![
            Record::new().with("id", 1).with("amount", 10),
            Record::new().with("total_sales", 10),
        ];
        assert!(report.validate_data(&records));
    }

    #[test]
    fn test_inventory_report_output() {
        // 50 > 10 and 100 > 20: both OK, nothing to reorder
        assert_eq!(
            InventoryReport.generate_report(),
            "Inventory report generated with 2 products. Items to reorder: 0"
        );
    }

    #[test]
    fn test_inventory_flags_low_stock_for_reorder() {
        let report = InventoryReport;
        let records = vec![
            Record::new().with("product", "Cable").with("stock", 5).with("min_stock", 10),
            Record::new().with("product", "Hub").with("stock", 30).with("min_stock", 10),
        ];

        let processed = report.process_data(&records);
        assert_eq!(processed[0].text("status"), Some("REORDER"));
        assert_eq!(processed[1].text("status"), Some("OK"));
    }

    #[test]
    fn test_inventory_stock_at_minimum_needs_reorder() {
        let report = InventoryReport;
        let records = vec![
            Record::new().with("product", "Cable").with("stock", 10).with("min_stock", 10),
        ];

        let processed = report.process_data(&records);
        assert_eq!(processed[0].text("status"), Some("REORDER"));
    }

    #[test]
    fn test_inventory_validation_rejects_negative_stock() {
        let report = InventoryReport;
        let records = vec![Record::new().with("product", "Cable").with("stock", -1)];
        assert!(!report.validate_data(&records));
    }

    #[test]
    fn test_hr_report_output() {
        // Overtime: (160 - 150) + max(0, 152 - 150) = 12
        assert_eq!(
            HrReport.generate_report(),
            "HR report generated with 2 employees. Total overtime hours: 12"
        );
    }

    #[test]
    fn test_hr_overtime_never_negative() {
        let report = HrReport;
        let records = vec![Record::new().with("name", "Sam Lee").with("hours_worked", 120)];

        let processed = report.process_data(&records);
        assert_eq!(processed[0].int("overtime"), Some(0));
    }

    #[test]
    fn test_hr_validation_bounds_hours() {
        let report = HrReport;

        let over = vec![Record::new().with("name", "Sam Lee").with("hours_worked", 201)];
        assert!(!report.validate_data(&over));

        let under = vec![Record::new().with("name", "Sam Lee").with("hours_worked", -1)];
        assert!(!report.validate_data(&under));

        let edge = vec![Record::new().with("name", "Sam Lee").with("hours_worked", 200)];
        assert!(report.validate_data(&edge));
    }
}
