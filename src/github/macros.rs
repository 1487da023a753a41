use crate::http::USER_AGENT as USER_AGENT_VALUE;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self, token: Option<&str>) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: Option<&str>) -> RequestBuilder {
        let builder = self
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, USER_AGENT_VALUE);

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .get($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! patch {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $client
            .http()
            .patch($url)
            .default_headers($client.token())
            .json($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use crate::github::{github_client::GithubClient, request::UpdateReleaseRequest};
    use crate::http::HttpClient;
    use anyhow::Result;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new(HttpClient::new()?, server.url(), Some("token".to_owned()));

        let expected_body = "test_body";
        let m = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", Matcher::Regex("^release-notifier/".to_owned()))
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(client, server.url())?;

        m.assert_async().await;
        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_without_token() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new(HttpClient::new()?, server.url(), None);

        let m = server
            .mock("GET", "/")
            .match_header("authorization", Matcher::Missing)
            .with_body("public")
            .create_async()
            .await;

        let response = get!(client, server.url())?;

        m.assert_async().await;
        assert_eq!(response, "public");

        Ok(())
    }

    #[tokio::test]
    async fn patch_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new(HttpClient::new()?, server.url(), Some("token".to_owned()));

        let m = server
            .mock("PATCH", "/")
            .match_header("authorization", "Bearer token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(r#"{"prerelease":false}"#.to_owned()))
            .with_body("patched")
            .create_async()
            .await;

        let response = patch!(client, server.url(), &UpdateReleaseRequest::promote())?;

        m.assert_async().await;
        assert_eq!(response, "patched");

        Ok(())
    }
}
