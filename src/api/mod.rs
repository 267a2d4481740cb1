mod food2fork;

pub use food2fork::Food2ForkClient;

use crate::model::SortPreference;
use serde_json::Value;

/// Status reported when no HTTP status is available (transport failure or
/// an undecodable body)
pub const STATUS_UNAVAILABLE: i32 = -1;

/// Raw result of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: i32,
    pub payload: Option<Value>,
}

impl ApiResponse {
    pub fn ok(payload: Value) -> Self {
        ApiResponse {
            status: 200,
            payload: Some(payload),
        }
    }

    pub fn failed(status: i32) -> Self {
        ApiResponse {
            status,
            payload: None,
        }
    }

    /// Status 200 with a decoded payload
    pub fn is_success(&self) -> bool {
        self.status == 200 && self.payload.is_some()
    }
}

/// Recipe search service
pub trait RecipeApi {
    /// Search recipes containing the comma separated `ingredients`
    fn search(&self, ingredients: &str, sort: SortPreference, page: Option<u32>) -> ApiResponse;

    /// Fetch the full record of one recipe
    fn get_recipe(&self, recipe_id: &str) -> ApiResponse;
}
