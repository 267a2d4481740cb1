use crate::api::{ApiResponse, RecipeApi, STATUS_UNAVAILABLE};
use crate::config::ApiConfig;
use crate::error::FinderError;
use crate::model::SortPreference;
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;

const SEARCH_PATH: &str = "/api/search";
const GET_RECIPE_PATH: &str = "/api/get";

/// Client for the Food2Fork `search` and `get` endpoints.
///
/// Every request is a urlencoded POST carrying the API key. Failures are
/// reported through [`ApiResponse`] rather than as errors so that the caller
/// can decide whether to retry.
pub struct Food2ForkClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl Food2ForkClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig, api_key: String) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Food2ForkClient {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Food2ForkClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    fn post_form(&self, path: &str, mut params: Vec<(&str, String)>) -> ApiResponse {
        params.insert(0, ("key", self.api_key.clone()));
        let url = format!("{}{}", self.base_url, path);

        let response = match self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", path, e);
                return ApiResponse::failed(STATUS_UNAVAILABLE);
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!("{} answered {}", path, status);
            return ApiResponse::failed(i32::from(status.as_u16()));
        }

        match response.json::<Value>() {
            Ok(payload) => {
                debug!("{:?}", payload);
                ApiResponse::ok(payload)
            }
            Err(e) => {
                warn!("Undecodable response from {}: {}", path, e);
                ApiResponse::failed(STATUS_UNAVAILABLE)
            }
        }
    }
}

impl RecipeApi for Food2ForkClient {
    fn search(&self, ingredients: &str, sort: SortPreference, page: Option<u32>) -> ApiResponse {
        let mut params = Vec::new();
        if !ingredients.is_empty() {
            params.push(("q", ingredients.to_string()));
        }
        params.push(("sort", sort.as_query().to_string()));
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        self.post_form(SEARCH_PATH, params)
    }

    fn get_recipe(&self, recipe_id: &str) -> ApiResponse {
        self.post_form(GET_RECIPE_PATH, vec![("rId", recipe_id.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_search_posts_form() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/search")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "fake_api_key".into()),
                Matcher::UrlEncoded("q".into(), "broth,chicken".into()),
                Matcher::UrlEncoded("sort".into(), "r".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 1, "recipes": [{"recipe_id": "35382"}]}"#)
            .create();

        let client = Food2ForkClient::with_base_url("fake_api_key".to_string(), server.url());
        let response = client.search("broth,chicken", SortPreference::ByRating, None);

        assert!(response.is_success());
        assert_eq!(
            response.payload.unwrap()["recipes"][0]["recipe_id"],
            "35382"
        );
        mock.assert();
    }

    #[test]
    fn test_search_sends_page() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/search")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sort".into(), "t".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"count": 0, "recipes": []}"#)
            .create();

        let client = Food2ForkClient::with_base_url("k".to_string(), server.url());
        let response = client.search("", SortPreference::ByTrending, Some(2));

        assert!(response.is_success());
        mock.assert();
    }

    #[test]
    fn test_get_recipe() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/get")
            .match_body(Matcher::UrlEncoded("rId".into(), "035865".into()))
            .with_status(200)
            .with_body(r#"{"recipe": {"title": "The Best Chocolate Cake"}}"#)
            .create();

        let client = Food2ForkClient::with_base_url("k".to_string(), server.url());
        let response = client.get_recipe("035865");

        assert_eq!(response.status, 200);
        assert_eq!(
            response.payload.unwrap()["recipe"]["title"],
            "The Best Chocolate Cake"
        );
        mock.assert();
    }

    #[test]
    fn test_error_status_has_no_payload() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/get")
            .with_status(403)
            .with_body("Forbidden")
            .create();

        let client = Food2ForkClient::with_base_url("k".to_string(), server.url());
        let response = client.get_recipe("1");

        assert_eq!(response, ApiResponse::failed(403));
        mock.assert();
    }

    #[test]
    fn test_bad_json_is_unavailable() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/api/search")
            .with_status(200)
            .with_body("{test}")
            .create();

        let client = Food2ForkClient::with_base_url("k".to_string(), server.url());
        let response = client.search("milk", SortPreference::ByRating, None);

        assert_eq!(response, ApiResponse::failed(STATUS_UNAVAILABLE));
        mock.assert();
    }

    #[test]
    fn test_connection_failure_is_unavailable() {
        // Nothing listens on port 9 of localhost
        let client =
            Food2ForkClient::with_base_url("k".to_string(), "http://127.0.0.1:9".to_string());
        let response = client.get_recipe("1");

        assert_eq!(response, ApiResponse::failed(STATUS_UNAVAILABLE));
    }
}
