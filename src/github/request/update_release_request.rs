use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateReleaseRequest {
    pub prerelease: bool,
}

impl UpdateReleaseRequest {
    pub fn promote() -> Self {
        UpdateReleaseRequest { prerelease: false }
    }
}
