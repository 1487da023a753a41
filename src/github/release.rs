use super::response::ReleaseResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub body: String,
    pub prerelease: bool,
    pub html_url: Option<String>,
    pub author: Option<String>,
}

impl Release {
    /// Release notes with surrounding whitespace removed; empty when the release has none.
    pub fn changelog(&self) -> &str {
        self.body.trim()
    }
}

impl From<ReleaseResponse> for Release {
    fn from(response: ReleaseResponse) -> Self {
        Release {
            id: response.id,
            tag_name: response.tag_name,
            name: response.name,
            body: response.body.unwrap_or_default(),
            prerelease: response.prerelease,
            html_url: response.html_url,
            author: response.author.map(|author| author.login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_a_null_body_to_an_empty_changelog() {
        let response: ReleaseResponse =
            serde_json::from_str(r#"{"id": 1, "tag_name": "v1.0.0", "body": null}"#).unwrap();

        let release = Release::from(response);

        assert_eq!(release.changelog(), "");
        assert!(!release.prerelease);
        assert_eq!(release.author, None);
    }

    #[test]
    fn should_trim_the_changelog() {
        let response: ReleaseResponse = serde_json::from_str(
            r#"{"id": 1, "body": "\n* fix things\r\n", "author": {"login": "octocat"}}"#,
        )
        .unwrap();

        let release = Release::from(response);

        assert_eq!(release.changelog(), "* fix things");
        assert_eq!(release.author.as_deref(), Some("octocat"));
    }
}
