mod job;
mod report;

pub use job::{JobManifest, ThumbnailJob};
pub use report::{JobOutcome, JobStatus, RunSummary};
