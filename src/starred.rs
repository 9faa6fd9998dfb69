use crate::error::{BoxError, Result, StarredExportError};
use crate::github::GitHubClient;
use crate::types::{StarredRepo, FIRST_PAGE, PER_PAGE};
use tracing::info;

/// Consumer handed each page as soon as it has been fetched.
pub trait PageSink {
    fn write_page(&mut self, repos: &[StarredRepo]) -> std::result::Result<(), BoxError>;
}

impl<F> PageSink for F
where
    F: FnMut(&[StarredRepo]) -> std::result::Result<(), BoxError>,
{
    fn write_page(&mut self, repos: &[StarredRepo]) -> std::result::Result<(), BoxError> {
        self(repos)
    }
}

impl GitHubClient {
    /// Walk every page of a user's starred repositories.
    ///
    /// Pages are requested one at a time starting at page 1. An empty page or
    /// a page shorter than [`PER_PAGE`] ends the walk. Each non-empty page is
    /// passed to `sink` before it is appended to the returned list. The first
    /// error, from the API or from the sink, stops the walk and is returned;
    /// pages already handed to the sink stay written.
    pub async fn fetch_all_starred(
        &self,
        username: &str,
        mut sink: Option<&mut dyn PageSink>,
    ) -> Result<Vec<StarredRepo>> {
        let mut all_repos = Vec::new();
        let mut page = FIRST_PAGE;

        loop {
            let repos = self.fetch_starred_page(username, page).await?;
            let count = repos.len();
            info!(username, page, count, "Fetched starred repositories page");

            if repos.is_empty() {
                break;
            }

            if let Some(sink) = sink.as_deref_mut() {
                sink.write_page(&repos)
                    .map_err(|source| StarredExportError::SinkError { page, source })?;
            }

            all_repos.extend(repos);

            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        info!(
            username,
            total = all_repos.len(),
            last_page = page,
            "Finished fetching starred repositories"
        );
        Ok(all_repos)
    }
}
