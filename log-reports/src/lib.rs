pub mod error;
pub mod files;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

pub use error::ReportError;

// Every run reads and writes the same fixed filenames; there is no
// configuration surface.
pub const INPUT_LOG: &str = "ch4_web_access_events.log";
pub const FILENAME_REPORT: &str = "result_query1.json";
pub const TIMELINE_REPORT: &str = "result_query2.json";
pub const TIMELINE_TARGET: &str = "/uploads/sp-client-document-manager/3/project-plan.php";
