use super::template::{self, ReleaseText};
use anyhow::Result;
use serde::Serialize;

/// Body of a Slack incoming-webhook message carrying a single attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPayload {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub author_name: String,
    pub title: String,
    pub text: String,
}

impl NotificationPayload {
    pub fn new(
        released_by: impl AsRef<str>,
        project_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        NotificationPayload {
            attachments: vec![Attachment {
                author_name: format!("Released by: {}", released_by.as_ref()),
                title: project_name.into(),
                text: text.into(),
            }],
        }
    }

    /// Builds the release announcement. An empty `changelog` leaves the notes section out.
    pub fn release(
        released_by: &str,
        project_name: &str,
        tag: &str,
        url: &str,
        changelog: &str,
    ) -> Result<Self> {
        let text = template::render(&ReleaseText {
            tag,
            url,
            changelog: changelog.trim(),
        })?;

        Ok(NotificationPayload::new(released_by, project_name, text))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
