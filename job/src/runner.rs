use follow_graph_core::Graph;
use tracing::{debug, info};

use crate::config::JobConfig;
use crate::delivery::{deliver, Sleeper};
use crate::error::{JobError, Result};
use crate::http::HttpClient;
use crate::outcome::{compute, ResultEnvelope};
use crate::payload::{parse_response_body, TaskPayload};
use crate::select::select;

/// Run the whole job: fetch the task, analyse it, deliver the result.
///
/// Returns the envelope that was delivered.
pub async fn run<C, S>(config: &JobConfig, client: &C, sleeper: &S) -> Result<ResultEnvelope>
where
    C: HttpClient,
    S: Sleeper,
{
    let task = fetch_task(config, client).await?;
    info!(records = task.users.users().len(), "task fetched");

    let reg_no = config.applicant.reg_no.clone();
    let selection = select(&reg_no, task.users)?;

    let graph = Graph::build(selection.users);
    info!(
        users = graph.node_count(),
        follows = graph.edge_count(),
        "follow graph built"
    );

    let envelope = ResultEnvelope {
        reg_no,
        outcome: compute(&graph, selection.mode),
    };

    let headers = vec![("Authorization".to_string(), task.access_token)];
    let payload = serde_json::to_value(&envelope)?;
    deliver(
        client,
        sleeper,
        &task.webhook,
        &headers,
        &payload,
        config.retry,
    )
    .await?;

    info!(webhook = %task.webhook, "result delivered");
    Ok(envelope)
}

/// POST the applicant identity to the generate URL and parse the task.
pub async fn fetch_task<C: HttpClient>(config: &JobConfig, client: &C) -> Result<TaskPayload> {
    let body = serde_json::to_value(&config.applicant)?;
    info!(url = %config.generate_url, "fetching task");

    let response = client
        .post(&config.generate_url, &[], &body)
        .await
        .map_err(|e| JobError::Fetch(e.to_string()))?;
    debug!(status = response.status, body = %response.body, "task response");

    if !response.is_success() {
        return Err(JobError::Fetch(format!(
            "generate endpoint returned status {}",
            response.status
        )));
    }
    parse_response_body(&response.body)
}
