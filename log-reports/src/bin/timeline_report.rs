use log_reports::{
    INPUT_LOG, ReportError, TIMELINE_REPORT, TIMELINE_TARGET,
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
    let entries = report::path_timeline(&requests, TIMELINE_TARGET);
    files::write_json(TIMELINE_REPORT, &entries, Indent::Two)?;
    info!(
        entries = entries.len(),
        requests = requests.len(),
        "wrote {TIMELINE_REPORT}"
    );
    Ok(())
}
