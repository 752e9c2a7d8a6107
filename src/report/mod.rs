// Template Method Pattern for the report demonstration
//
// generate_report() fixes the pipeline (collect -> process -> validate ->
// export); each concrete report supplies the four steps and its own record
// schema. Records flow through the pipeline as field-name -> typed-value
// maps so the skeleton stays uniform across report types.

pub mod demo;
pub mod record;
pub mod reports;
pub mod trait_def;

pub use record::{FieldValue, Record};
pub use reports::{HrReport, InventoryReport, SalesReport};
pub use trait_def::{Report, ReportError};
