mod commit_response;
mod release_response;

pub use commit_response::CommitResponse;
pub use release_response::ReleaseResponse;
