use crate::github::{commit::Commit, github_client::GithubClient, Error};

pub struct CommitHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> CommitHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CommitHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn get(&self, sha: &str) -> Result<Commit, Error> {
        self.client.get_commit(&self.owner, &self.repo, sha).await
    }
}
