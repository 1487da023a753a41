use crate::git::remote::{ParseRemoteError, Remote};
use clap::{error::ErrorKind, Parser};
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

const WEBHOOK_URL_FALLBACK_ENV: &str = "SLACK_WEBHOOK_URL";
const TOKEN_FALLBACK_ENV: &str = "GIT_TOKEN";
const WEBHOOK_URL_DELIMITER: char = ',';

/// Notify Slack when a release has been deployed.
#[derive(Debug, Parser)]
#[command(name = "release-notifier", version)]
pub struct Cli {
    /// The git repository URL (SSH or HTTPS form)
    #[arg(long, env = "GIT_REPO_URL")]
    pub git_repo_url: String,

    /// The commit hash of the build, ideally tagged
    #[arg(long, env = "GIT_HASH")]
    pub git_hash: String,

    /// The project name shown as the notification title
    #[arg(long, env = "PROJECT_NAME")]
    pub project_name: String,

    /// The user who released
    #[arg(long, env = "RELEASED_BY")]
    pub released_by: String,

    /// One or more Slack webhook URLs, separated by commas
    #[arg(
        long = "slack-url-release",
        visible_alias = "webhook-url",
        env = "SLACK_URL_RELEASE",
        value_delimiter = WEBHOOK_URL_DELIMITER,
        hide_env_values = true
    )]
    pub webhook_urls: Vec<String>,

    /// Token for the hosting API and the git remote
    #[arg(
        long = "release-bot-token",
        visible_alias = "token",
        env = "RELEASE_BOT_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Promote the release from prerelease to release before notifying
    #[arg(long, env = "PROMOTE_RELEASE")]
    pub release: bool,

    /// Base URL of the hosting API, derived from the repository host when omitted
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// File path to dump the release information to
    #[arg(long, env = "DUMP_RELEASE_INFO")]
    pub dump_release_info: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses the command line, printing help or the error and exiting when parsing stops.
    /// Help and version exit with 0, every other parse error with 1.
    pub fn parse_or_exit() -> Cli {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required value: {0}")]
    MissingValue(&'static str),
    #[error(transparent)]
    InvalidRepositoryUrl(#[from] ParseRemoteError),
    #[error("No Slack webhook URL provided")]
    MissingWebhookUrl,
    #[error("Invalid Slack webhook URL: {0}")]
    InvalidWebhookUrl(String),
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
}

/// Everything a single run needs, resolved once at startup.
pub struct Config {
    pub remote_url: String,
    pub remote: Remote,
    pub commit_hash: String,
    pub project_name: String,
    pub released_by: String,
    pub webhook_urls: Vec<String>,
    pub token: Option<String>,
    pub promote: bool,
    pub api_url: String,
    pub dump_release_info: Option<PathBuf>,
}

impl Config {
    /// Validates the parsed command line. `env` resolves the legacy variables that have no
    /// flag of their own.
    pub fn from_cli<F>(cli: Cli, env: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let remote_url = required(cli.git_repo_url, "git repository URL")?;
        let remote = remote_url.parse::<Remote>()?;

        let webhook_urls = if cli.webhook_urls.iter().any(|url| !url.trim().is_empty()) {
            cli.webhook_urls
        } else {
            env(WEBHOOK_URL_FALLBACK_ENV)
                .map(|urls| {
                    urls.split(WEBHOOK_URL_DELIMITER)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default()
        };

        let api_url = match cli.api_url.filter(|url| !url.trim().is_empty()) {
            Some(url) if is_http_url(&url) => url,
            Some(url) => return Err(Error::InvalidApiUrl(url)),
            None => remote.api_url(),
        };

        let token = cli
            .token
            .or_else(|| env(TOKEN_FALLBACK_ENV))
            .filter(|token| !token.trim().is_empty());

        Ok(Config {
            commit_hash: required(cli.git_hash, "git hash")?,
            project_name: required(cli.project_name, "project name")?,
            released_by: required(cli.released_by, "released by")?,
            webhook_urls: webhook_urls_from(webhook_urls)?,
            remote_url,
            remote,
            token,
            promote: cli.release,
            api_url,
            dump_release_info: cli.dump_release_info,
        })
    }
}

fn required(value: String, name: &'static str) -> Result<String, Error> {
    let value = value.trim();

    if value.is_empty() {
        return Err(Error::MissingValue(name));
    }

    Ok(value.to_owned())
}

fn webhook_urls_from(urls: Vec<String>) -> Result<Vec<String>, Error> {
    let urls = urls
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(|url| {
            if is_http_url(url) {
                Ok(url.to_owned())
            } else {
                Err(Error::InvalidWebhookUrl(crate::slack::redact(url)))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if urls.is_empty() {
        return Err(Error::MissingWebhookUrl);
    }

    Ok(urls)
}

fn is_http_url(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
        .unwrap_or(false)
}
