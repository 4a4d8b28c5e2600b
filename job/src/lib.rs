//! follow-graph-job: One-shot follow-graph task runner.
//!
//! Fetches a task from the generate endpoint, picks an analysis from the
//! registration number, runs it with follow-graph-core, and posts the result
//! to the returned webhook with bounded exponential backoff.

pub mod config;
pub mod delivery;
pub mod error;
pub mod http;
pub mod outcome;
pub mod payload;
pub mod runner;
pub mod select;
mod util;

pub use config::{Applicant, JobConfig, RetryPolicy};
pub use delivery::{deliver, DeliveryMachine, DeliveryState, Sleeper, TokioSleeper};
pub use error::{JobError, Result, TransportError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use outcome::{compute, Outcome, ResultEnvelope};
pub use payload::{parse_task, TaskPayload, UsersPayload};
pub use runner::{fetch_task, run};
pub use select::{select, Mode, Selection};
