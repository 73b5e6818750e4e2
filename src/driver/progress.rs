use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Idle,
    Pending,
    Done,
    Cancelled,
}

/// Snapshot handed to the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based index of the part most recently submitted (0 before the first)
    pub current: usize,
    pub total: usize,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { submitted: usize },
    Cancelled { submitted: usize },
}

impl RunOutcome {
    pub fn submitted(&self) -> usize {
        match self {
            RunOutcome::Completed { submitted } | RunOutcome::Cancelled { submitted } => *submitted,
        }
    }
}
