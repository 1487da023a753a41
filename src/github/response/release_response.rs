use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    #[serde(default)]
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    pub html_url: Option<String>,
    pub author: Option<AuthorResponse>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub login: String,
}
