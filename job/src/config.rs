use std::time::Duration;

use serde::Serialize;

pub const GENERATE_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook";

pub const APPLICANT_NAME: &str = "John Doe";
pub const APPLICANT_REG_NO: &str = "REG12347";
pub const APPLICANT_EMAIL: &str = "john@example.com";

pub const MAX_DELIVERY_ATTEMPTS: u32 = 4;
pub const BASE_DELAY_MS: u64 = 1000;
pub const REQUEST_TIMEOUT_SEC: u64 = 30;

/// Identity sent with the initial fetch; `reg_no` also drives task selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

/// Bounded exponential backoff for result delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Wait after the `failures`-th consecutive failure: `base_delay * 2^failures`.
    pub fn backoff(&self, failures: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(failures))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_DELIVERY_ATTEMPTS,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }
}

/// Everything the job needs that is fixed at build time.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub generate_url: String,
    pub applicant: Applicant,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            generate_url: GENERATE_URL.to_string(),
            applicant: Applicant {
                name: APPLICANT_NAME.to_string(),
                reg_no: APPLICANT_REG_NO.to_string(),
                email: APPLICANT_EMAIL.to_string(),
            },
            retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SEC),
        }
    }
}
