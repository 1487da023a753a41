use super::{commit_handler::CommitHandler, release_handler::ReleaseHandler};
use crate::github::github_client::GithubClient;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn releases(&self) -> ReleaseHandler<'a> {
        ReleaseHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn commits(&self) -> CommitHandler<'a> {
        CommitHandler::new(self.client, &self.owner, &self.repo)
    }
}
