pub mod cli;
pub mod error;
pub mod github;
pub mod output;
pub mod starred;
pub mod types;

pub use error::{BoxError, Result, StarredExportError};
pub use github::GitHubClient;
pub use starred::PageSink;
pub use types::{ApiErrorPayload, Page, StarredRepo, FIRST_PAGE, PER_PAGE};
