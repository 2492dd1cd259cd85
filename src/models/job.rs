use serde::{Deserialize, Serialize};

/// Status of a remote generation job.
///
/// The discriminants are the integer codes used by the SurveyMars API and
/// must not be reordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    None = 0,
    Created = 1,
    Running = 2,
    Canceled = 3,
    Success = 4,
    Failure = 5,
}

impl JobStatus {
    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Created),
            2 => Some(Self::Running),
            3 => Some(Self::Canceled),
            4 => Some(Self::Success),
            5 => Some(Self::Failure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Created => "created",
            Self::Running => "running",
            Self::Canceled => "canceled",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Whether the job can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Canceled)
    }
}
