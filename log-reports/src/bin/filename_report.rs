use log_reports::{
    FILENAME_REPORT, INPUT_LOG, ReportError,
    files::{self, Indent},
    report,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ReportError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let requests = files::read_requests(INPUT_LOG)?;
    let counts = report::filename_frequencies(&requests);
    files::write_json(FILENAME_REPORT, &counts, Indent::Four)?;
    info!(
        filenames = counts.len(),
        requests = requests.len(),
        "wrote {FILENAME_REPORT}"
    );
    Ok(())
}
