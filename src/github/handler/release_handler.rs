use crate::github::{
    github_client::GithubClient, release::Release, request::UpdateReleaseRequest, tag::Tag, Error,
};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn get_by_tag(&self, tag: &Tag) -> Result<Release, Error> {
        self.client
            .get_release_by_tag(&self.owner, &self.repo, tag)
            .await
    }

    /// Clears the prerelease flag of an existing release and returns the release as the API
    /// echoes it back.
    pub async fn promote(&self, release: &Release) -> Result<Release, Error> {
        self.client
            .update_release(
                &self.owner,
                &self.repo,
                release.id,
                UpdateReleaseRequest::promote(),
            )
            .await
    }
}
