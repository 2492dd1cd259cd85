//! Domain models for the SurveyMars API.
//!
//! - [`SurveyCreateRequest`]: what the caller asks for.
//! - [`AccessToken`]: per-call credential, never cached.
//! - [`JobStatus`]: state of the asynchronous generation job.
//! - [`SurveyOutcome`]: how a creation ended.
//! - [`SurveyType`], [`LocalizeLanguage`]: integer code tables.

mod catalog;
mod job;
mod survey;

pub use catalog::*;
pub use job::*;
pub use survey::*;
