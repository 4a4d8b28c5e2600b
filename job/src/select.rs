use follow_graph_core::{NodeId, UserRecord};
use tracing::{info, warn};

use crate::error::{JobError, Result};
use crate::payload::UsersPayload;

/// Which analysis to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MutualPairs,
    LevelSet { find_id: NodeId, n: i64 },
}

/// The chosen analysis together with its input records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mode: Mode,
    pub users: Vec<UserRecord>,
}

/// Parse the last two characters of `reg_no` as a decimal integer.
pub fn reg_no_suffix(reg_no: &str) -> Result<i64> {
    let chars: Vec<char> = reg_no.chars().collect();
    if chars.len() < 2 {
        return Err(JobError::InputShape(format!(
            "regNo '{}' is shorter than two characters",
            reg_no
        )));
    }
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    suffix.parse::<i64>().map_err(|_| {
        JobError::InputShape(format!(
            "regNo '{}' does not end in two digits",
            reg_no
        ))
    })
}

/// Choose the analysis from the registration number.
///
/// An odd suffix always selects mutual pairs. An even suffix selects the
/// level set, but only when both `findId` and `n` were supplied; otherwise
/// the job falls back to mutual pairs with a warning.
pub fn select(reg_no: &str, users: UsersPayload) -> Result<Selection> {
    let odd = reg_no_suffix(reg_no)? % 2 != 0;

    let (users, find_id, n) = match users {
        UsersPayload::Raw(users) => (users, None, None),
        UsersPayload::Grouped { users, find_id, n } => (users, find_id, n),
    };

    let mode = if odd {
        info!(reg_no, "regNo is odd, computing mutual follow pairs");
        Mode::MutualPairs
    } else {
        match (find_id, n) {
            (Some(find_id), Some(n)) => {
                info!(reg_no, find_id, n, "regNo is even, computing nth-level follows");
                Mode::LevelSet { find_id, n }
            }
            _ => {
                warn!(
                    reg_no,
                    "expected findId and n for an even regNo, falling back to mutual follow pairs"
                );
                Mode::MutualPairs
            }
        }
    };

    Ok(Selection { mode, users })
}
