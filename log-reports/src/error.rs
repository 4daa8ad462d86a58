use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, From)]
pub enum ReportError {
    #[display("could not read input log: {_0}")]
    Io(std::io::Error),
    #[display("could not serialize report: {_0}")]
    Json(serde_json::Error),
}
