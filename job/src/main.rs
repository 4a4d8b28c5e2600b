use follow_graph_job::{run, JobConfig, ReqwestClient, TokioSleeper};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting follow-graph-job v{}", env!("CARGO_PKG_VERSION"));

    let config = JobConfig::default();
    let client = ReqwestClient::new(config.request_timeout)?;

    let envelope = run(&config, &client, &TokioSleeper).await?;
    info!(
        reg_no = %envelope.reg_no,
        results = envelope.outcome.len(),
        "job finished"
    );
    Ok(())
}
