//! Result delivery with bounded retry and exponential backoff.
//!
//! Delivery is a small state machine. Each attempt either gets a response
//! (any status counts as delivered) or fails at the transport level. A
//! failure with attempts remaining moves to an explicit `Suspended` step
//! carrying the backoff delay; the driver hands that delay to a [`Sleeper`],
//! so the machine itself never blocks.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::RetryPolicy;
use crate::error::{JobError, TransportError};
use crate::http::{HttpClient, HttpResponse};

/// Timed suspension between delivery attempts.
pub trait Sleeper {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> + Send;
}

/// Suspends on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    /// About to make attempt `k` (0-based).
    Attempting(u32),
    /// Waiting `delay` before attempt `next_attempt`.
    Suspended { next_attempt: u32, delay: Duration },
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct DeliveryMachine {
    policy: RetryPolicy,
    state: DeliveryState,
}

impl DeliveryMachine {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            state: DeliveryState::Attempting(0),
        }
    }

    pub fn state(&self) -> DeliveryState {
        self.state
    }

    /// At least one attempt is always made.
    pub fn max_attempts(&self) -> u32 {
        self.policy.max_attempts.max(1)
    }

    /// The current attempt received a response.
    pub fn on_response(&mut self) -> DeliveryState {
        if let DeliveryState::Attempting(_) = self.state {
            self.state = DeliveryState::Succeeded;
        }
        self.state
    }

    /// The current attempt failed at the transport level.
    pub fn on_transport_error(&mut self) -> DeliveryState {
        if let DeliveryState::Attempting(k) = self.state {
            let failures = k + 1;
            self.state = if failures >= self.max_attempts() {
                DeliveryState::Failed
            } else {
                DeliveryState::Suspended {
                    next_attempt: failures,
                    delay: self.policy.backoff(failures),
                }
            };
        }
        self.state
    }

    /// The suspension elapsed; move on to the next attempt.
    pub fn resume(&mut self) -> DeliveryState {
        if let DeliveryState::Suspended { next_attempt, .. } = self.state {
            self.state = DeliveryState::Attempting(next_attempt);
        }
        self.state
    }
}

/// POST `payload` to `url`, retrying transport failures per `policy`.
///
/// Returns the first response received. When every attempt fails, the last
/// transport error is returned as [`JobError::Delivery`].
pub async fn deliver<C, S>(
    client: &C,
    sleeper: &S,
    url: &str,
    headers: &[(String, String)],
    payload: &Value,
    policy: RetryPolicy,
) -> Result<HttpResponse, JobError>
where
    C: HttpClient,
    S: Sleeper,
{
    let mut machine = DeliveryMachine::new(policy);
    let mut last_error: Option<TransportError> = None;

    loop {
        match machine.state() {
            DeliveryState::Attempting(attempt) => {
                info!(attempt, url, ?headers, %payload, "webhook attempt");
                match client.post(url, headers, payload).await {
                    Ok(response) => {
                        info!(
                            attempt,
                            status = response.status,
                            body = %response.body,
                            "webhook response"
                        );
                        machine.on_response();
                        return Ok(response);
                    }
                    Err(e) => {
                        warn!(attempt, url, error = %e, "webhook attempt failed");
                        last_error = Some(e);
                        machine.on_transport_error();
                    }
                }
            }
            DeliveryState::Suspended { next_attempt, delay } => {
                info!(
                    next_attempt,
                    delay_ms = delay.as_millis() as u64,
                    "waiting before retrying"
                );
                sleeper.sleep(delay).await;
                machine.resume();
            }
            DeliveryState::Failed => {
                let source = last_error
                    .take()
                    .unwrap_or_else(|| TransportError::Other("no attempt made".to_string()));
                return Err(JobError::Delivery {
                    url: url.to_string(),
                    attempts: machine.max_attempts(),
                    source,
                });
            }
            DeliveryState::Succeeded => {
                unreachable!("delivery returns as soon as a response arrives")
            }
        }
    }
}
