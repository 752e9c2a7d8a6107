// Report trait definition - the template method skeleton

use crate::report::record::Record;

/// Errors a report pipeline can surface
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The processed records failed the report's validation step
    #[error("report data failed validation")]
    InvalidData,
}

/// Template skeleton for report generation
///
/// `generate_report` fixes the pipeline; implementors supply the four steps
/// and do not override the skeleton itself.
///
/// `process_data` takes the collected records by shared borrow and returns
/// a new sequence, so the raw data is never mutated in place. Validation
/// always runs over the processed records, never the raw ones.
pub trait Report {
    /// Report name for display
    fn name(&self) -> &'static str;

    /// Gather the raw records for this report
    fn collect_data(&self) -> Vec<Record>;

    /// Derive the processed records from the raw ones
    fn process_data(&self, data: &[Record]) -> Vec<Record>;

    /// Check the processed records before export
    fn validate_data(&self, data: &[Record]) -> bool;

    /// Render the final report message
    fn export_report(&self, data: &[Record]) -> String;

    /// Run the fixed pipeline: collect -> process -> validate -> export
    ///
    /// Validation failure yields a fixed error string; the pipeline never
    /// panics and never partially exports.
    fn generate_report(&self) -> String {
        match self.try_generate() {
            Ok(report) => report,
            Err(err) => format!("Error: {}", err),
        }
    }

    /// Fallible form of the pipeline
    fn try_generate(&self) -> Result<String, ReportError> {
        let data = self.collect_data();
        let processed = self.process_data(&data);
        if !self.validate_data(&processed) {
            return Err(ReportError::InvalidData);
        }
        Ok(self.export_report(&processed))
    }
}
