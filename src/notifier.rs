use crate::{
    config::Config,
    git::{self, remote, ResolvedTag},
    github::{self, commit::Commit, github_client::GithubClient, release::Release},
    http::HttpClient,
    slack::{self, payload::NotificationPayload, DeliveryReport},
};
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::{fs, path::Path};

pub struct Notification {
    pub resolved: ResolvedTag,
    pub release: Option<Release>,
    pub payload: NotificationPayload,
    pub report: DeliveryReport,
    /// Set when `--dump-release-info` was requested and the file could not be written.
    pub dump_error: Option<anyhow::Error>,
}

/// Document written by `--dump-release-info`.
#[derive(Serialize)]
struct ReleaseInfo<'a> {
    project: &'a str,
    released_by: &'a str,
    tag: &'a str,
    url: &'a str,
    commit_hash: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    release: Option<&'a Release>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<Commit>,
}

pub async fn run(config: &Config) -> Result<()> {
    let notification = notify(config).await?;
    log::debug!(
        "Announced text:\n{}",
        notification.payload.attachments[0].text
    );

    let report = notification.report;

    let mut failures = Vec::new();
    if !report.is_success() {
        failures.push(format!(
            "{} of {} Slack notifications failed:\n{}",
            report.failed.len(),
            report.attempted(),
            report.failed.iter().join("\n")
        ));
    }
    if let Some(err) = &notification.dump_error {
        failures.push(format!("{:#}", err));
    }
    if !failures.is_empty() {
        bail!("{}", failures.join("\n"));
    }

    log::info!(
        "Release notification for {} {} completed successfully ({} webhook(s), {})",
        config.project_name,
        notification.resolved.label(),
        report.delivered.len(),
        if notification.release.is_some() {
            "with release notes"
        } else {
            "without release notes"
        }
    );

    Ok(())
}

/// Resolves the release, announces it on every webhook and optionally dumps what was found.
///
/// Only the ref listing is fatal. Missing release metadata leaves the changelog empty, while
/// failed deliveries and a failed dump are returned for the caller to report.
pub async fn notify(config: &Config) -> Result<Notification> {
    log_inputs(config);

    let resolved = git::resolve_tag(
        &config.remote_url,
        &config.remote,
        &config.commit_hash,
        config.token.as_deref(),
    )
    .await
    .context("Cannot resolve the release tag")?;
    log::info!("Releasing {} ({})", resolved.label(), resolved.url);

    let http = HttpClient::new().context("Cannot create the HTTP client")?;
    let github = GithubClient::new(http.clone(), &config.api_url, config.token.clone());

    let release = release_metadata(&github, config, &resolved).await;
    let changelog = release.as_ref().map(Release::changelog).unwrap_or_default();
    if changelog.is_empty() {
        log::info!("No changelog available");
    } else {
        log::info!("Changelog:\n{}", changelog);
    }

    let payload = NotificationPayload::release(
        &config.released_by,
        &config.project_name,
        resolved.label(),
        &resolved.url,
        changelog,
    )
    .context("Cannot build the notification")?;

    let report = slack::dispatch(&http, &config.webhook_urls, &payload)
        .await
        .context("Cannot serialize the notification")?;

    let dump_error = match &config.dump_release_info {
        Some(path) => dump_release_info(&github, config, &resolved, release.as_ref(), path)
            .await
            .with_context(|| format!("Cannot dump the release info to {}", path.display()))
            .err(),
        None => None,
    };

    Ok(Notification {
        resolved,
        release,
        payload,
        report,
        dump_error,
    })
}

fn log_inputs(config: &Config) {
    log::info!("Project: {}", config.project_name);
    log::info!("Released by: {}", config.released_by);
    log::info!(
        "Repository: {} ({})",
        remote::without_credentials(&config.remote_url),
        config.remote
    );
    log::info!("Commit: {}", config.commit_hash);
    log::info!("API: {}", config.api_url);
    log::info!(
        "Token: {}",
        if config.token.is_some() { "set" } else { "not set" }
    );
    log::info!("Promote release: {}", config.promote);
    log::info!(
        "Webhooks: {}",
        config.webhook_urls.iter().map(|url| slack::redact(url)).join(", ")
    );
}

async fn release_metadata(
    github: &GithubClient,
    config: &Config,
    resolved: &ResolvedTag,
) -> Option<Release> {
    let Some(tag) = resolved.tag() else {
        if config.promote {
            log::warn!("No tag for commit {}, nothing to promote", config.commit_hash);
        }
        return None;
    };

    match github::fetch_release(github, &config.remote, tag, config.promote).await {
        Ok(release) => Some(release),
        Err(github::Error::ReleaseNotFound { .. }) => {
            log::warn!("No release published for tag {}", tag);
            None
        }
        Err(err) => {
            log::warn!("Cannot fetch the release for tag {}: {}", tag, err);
            None
        }
    }
}

async fn dump_release_info(
    github: &GithubClient,
    config: &Config,
    resolved: &ResolvedTag,
    release: Option<&Release>,
    path: &Path,
) -> Result<()> {
    log::info!("Dumping release info into {}", path.display());

    let commit = match release {
        Some(_) => None,
        None => match github
            .repo(&config.remote.owner, &config.remote.repo)
            .commits()
            .get(&config.commit_hash)
            .await
        {
            Ok(commit) => Some(commit),
            Err(err) => {
                log::warn!("Cannot fetch commit {}: {}", config.commit_hash, err);
                None
            }
        },
    };

    let info = ReleaseInfo {
        project: &config.project_name,
        released_by: &config.released_by,
        tag: resolved.label(),
        url: &resolved.url,
        commit_hash: &config.commit_hash,
        release,
        commit,
    };

    let data = serde_json::to_string_pretty(&info)?;
    fs::write(path, data)?;

    Ok(())
}
