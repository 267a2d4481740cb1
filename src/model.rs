use serde::Deserialize;
use serde_json::Value;

/// How the recipe search ranks its results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPreference {
    ByRating,
    ByTrending,
}

impl SortPreference {
    /// Value of the `sort` search parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            SortPreference::ByRating => "r",
            SortPreference::ByTrending => "t",
        }
    }
}

/// Id of the best-ranked recipe in a search payload.
///
/// Only the first record is looked at; later records may hold anything.
/// Numeric ids are kept as their decimal string. Payloads that are not a
/// search response at all yield `None`, the same as an empty recipe list.
pub fn top_recipe_id(payload: &Value) -> Option<String> {
    let first = payload.get("recipes")?.as_array()?.first()?;
    match first.get("recipe_id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RecipeDetail {
    title: Option<String>,
    f2f_url: Option<String>,
    ingredients: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RecipeEnvelope {
    recipe: Option<Value>,
}

/// A recipe fetched in full: search hit plus its detail record
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeResult {
    pub id: String,
    pub title: String,
    pub url: String,
    pub ingredients: Vec<String>,
}

impl RecipeResult {
    /// Build from a get-recipe payload; `None` when title, URL or
    /// ingredients are missing.
    pub fn from_detail(id: &str, payload: &Value) -> Option<Self> {
        let envelope = RecipeEnvelope::deserialize(payload).ok()?;
        // The API answers unknown ids with `{"recipe": []}`
        let detail = RecipeDetail::deserialize(envelope.recipe?).ok()?;

        Some(RecipeResult {
            id: id.to_string(),
            title: detail.title?,
            url: detail.f2f_url?,
            ingredients: detail.ingredients?,
        })
    }
}
