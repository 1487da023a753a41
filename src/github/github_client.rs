use super::{
    commit::Commit,
    handler::repository_handler::RepositoryHandler,
    release::Release,
    request::UpdateReleaseRequest,
    response::{CommitResponse, ReleaseResponse},
    tag::Tag,
    Error,
};
use crate::{
    get,
    http::{self, HttpClient},
    patch,
};
use reqwest::StatusCode;
use url::Url;

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(http: HttpClient, api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url: String = api_url.into();

        GithubClient {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    /// `{api}/repos/{owner}/{repo}/{path..}` with every segment percent-encoded, so tag names
    /// holding `#`, `%` or `?` stay in the path.
    fn endpoint(&self, owner: &str, repo: &str, path: &[&str]) -> Result<Url, Error> {
        let invalid = || Error::InvalidApiUrl(self.api_url.clone());

        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("repos")
            .extend(owner.split('/'))
            .push(repo)
            .extend(path);

        Ok(url)
    }

    pub(super) async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &Tag,
    ) -> Result<Release, Error> {
        let uri = self.endpoint(owner, repo, &["releases", "tags", tag.value()])?;
        log::debug!("Getting release for tag {} from {}", tag, uri);

        let response = get!(self, uri.as_str()).map_err(|err| match err.status() {
            Some(StatusCode::NOT_FOUND) => Error::ReleaseNotFound {
                tag: tag.value().to_owned(),
            },
            _ => Error::from(err),
        })?;

        let release = http::parse::<ReleaseResponse>(&response)?;

        Ok(release.into())
    }

    pub(super) async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        request: UpdateReleaseRequest,
    ) -> Result<Release, Error> {
        let id = release_id.to_string();
        let uri = self.endpoint(owner, repo, &["releases", id.as_str()])?;
        log::debug!("Updating release {} at {}", release_id, uri);

        let response = patch!(self, uri.as_str(), &request)?;
        let release = http::parse::<ReleaseResponse>(&response)?;

        Ok(release.into())
    }

    pub(super) async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Commit, Error> {
        let uri = self.endpoint(owner, repo, &["commits", sha])?;
        log::debug!("Getting commit {} from {}", sha, uri);

        let response = get!(self, uri.as_str())?;
        let commit = http::parse::<CommitResponse>(&response)?;

        Ok(commit.into())
    }
}
