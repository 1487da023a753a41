mod update_release_request;

pub use update_release_request::UpdateReleaseRequest;
