use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    pub sha: String,
    pub html_url: Option<String>,
    pub commit: CommitDetailResponse,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetailResponse {
    pub message: String,
    pub author: Option<CommitAuthorResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CommitAuthorResponse {
    pub name: String,
}
