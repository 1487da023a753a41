use super::response::CommitResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: Option<String>,
    pub html_url: Option<String>,
}

impl From<CommitResponse> for Commit {
    fn from(response: CommitResponse) -> Self {
        Commit {
            sha: response.sha,
            message: response.commit.message,
            author: response.commit.author.map(|author| author.name),
            html_url: response.html_url,
        }
    }
}
