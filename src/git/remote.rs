use crate::github::tag::Tag;
use std::{fmt, str::FromStr};
use thiserror::Error;
use url::Url;

const GITHUB_HOST: &str = "github.com";
const GITHUB_API_URL: &str = "https://api.github.com";

/// A repository on a git hosting service, as named by its remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRemoteError {
    #[error("Invalid git repository URL format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported git repository URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Missing owner or repository in git repository URL: {0}")]
    MissingPath(String),
}

impl Remote {
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Remote {
            host: host.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `owner/repo`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn web_url(&self) -> String {
        format!("https://{}/{}", self.host, self.slug())
    }

    pub fn release_url(&self, tag: &Tag) -> String {
        self.web_link(&["releases", "tag", tag.value()])
    }

    pub fn commit_url(&self, commit_hash: &str) -> String {
        self.web_link(&["commit", commit_hash])
    }

    // Segments are percent-encoded; a `#` in a tag name must not become a fragment.
    fn web_link(&self, segments: &[&str]) -> String {
        let mut url = match Url::parse(&self.web_url()) {
            Ok(url) => url,
            Err(_) => return format!("{}/{}", self.web_url(), segments.join("/")),
        };

        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }

        url.into()
    }

    /// REST API root of the hosting service: the public GitHub API for github.com and
    /// the Enterprise layout for every other host.
    pub fn api_url(&self) -> String {
        if self.host.eq_ignore_ascii_case(GITHUB_HOST) {
            GITHUB_API_URL.to_owned()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    fn from_parts(original: &str, host: &str, path: &str) -> Result<Self, ParseRemoteError> {
        if Url::parse(&format!("https://{}/", host)).is_err() {
            return Err(ParseRemoteError::InvalidFormat(original.to_owned()));
        }

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        match path.rsplit_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Remote::new(host, owner, repo))
            }
            _ => Err(ParseRemoteError::MissingPath(original.to_owned())),
        }
    }

    fn parse_url(original: &str) -> Result<Self, ParseRemoteError> {
        let url =
            Url::parse(original).map_err(|_| ParseRemoteError::InvalidFormat(original.to_owned()))?;

        let host = url
            .host_str()
            .ok_or_else(|| ParseRemoteError::InvalidFormat(original.to_owned()))?;

        let host = match (url.scheme(), url.port()) {
            ("http" | "https", Some(port)) => format!("{}:{}", host, port),
            ("http" | "https" | "ssh" | "git", _) => host.to_owned(),
            (scheme, _) => return Err(ParseRemoteError::UnsupportedScheme(scheme.to_owned())),
        };

        Remote::from_parts(original, &host, url.path())
    }

    // scp-like syntax, e.g. git@github.com:org/repo.git
    fn parse_scp(original: &str) -> Result<Self, ParseRemoteError> {
        let (authority, path) = original
            .split_once(':')
            .ok_or_else(|| ParseRemoteError::InvalidFormat(original.to_owned()))?;

        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);

        if host.is_empty() || authority.contains('/') {
            return Err(ParseRemoteError::InvalidFormat(original.to_owned()));
        }

        Remote::from_parts(original, host, path)
    }
}

/// `url` without its password and, for HTTP(S), without the user name that carries tokens
/// such as `x-access-token:<token>@`. Anything that is not a URL is returned as is.
pub fn without_credentials(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() || !parsed.username().is_empty() => {
            let _ = parsed.set_password(None);
            if matches!(parsed.scheme(), "http" | "https") {
                let _ = parsed.set_username("");
            }
            parsed.into()
        }
        _ => url.to_owned(),
    }
}

impl FromStr for Remote {
    type Err = ParseRemoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains("://") {
            Remote::parse_url(s)
        } else {
            Remote::parse_scp(s)
        }
    }
}

impl fmt::Display for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.slug())
    }
}
