pub mod commit;
pub mod github_client;
mod handler;
pub(crate) mod macros;
pub mod release;
mod request;
mod response;
pub mod tag;

use self::{github_client::GithubClient, release::Release, tag::Tag};
use crate::{git::remote::Remote, http};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No release found for tag {tag}")]
    ReleaseNotFound { tag: String },
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
    #[error(transparent)]
    Http(#[from] http::Error),
}

/// Looks up the release published for `tag` and, when `promote` is set, turns it from a
/// prerelease into a full release.
///
/// The returned release carries the notes the API echoed back from the promotion. A failed
/// promotion is logged and the release from the lookup is returned instead.
pub async fn fetch_release(
    client: &GithubClient,
    remote: &Remote,
    tag: &Tag,
    promote: bool,
) -> Result<Release, Error> {
    let releases = client.repo(&remote.owner, &remote.repo).releases();

    let release = releases.get_by_tag(tag).await?;
    log::info!("Found release {} for tag {}", release.id, tag);

    if !promote {
        return Ok(release);
    }

    log::info!("Promoting release {} to a full release", release.id);
    match releases.promote(&release).await {
        Ok(promoted) => Ok(promoted),
        Err(err) => {
            log::error!("Cannot promote release {}: {}", release.id, err);
            Ok(release)
        }
    }
}
