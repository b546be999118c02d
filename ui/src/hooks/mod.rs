pub mod use_job_feed;
pub mod use_logout;

pub use use_job_feed::{JobFeedHandle, use_job_feed};
pub use use_logout::use_logout;
