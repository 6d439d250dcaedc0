use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// Endpoint root of TheMealDB's free JSON API (developer key "1").
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Minimal recipe record used in list views.
#[derive(Debug, Clone, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
}

/// Full recipe record returned by the lookup and random endpoints.
///
/// The ingredient and measure pairs arrive as twenty positional fields
/// (`strIngredient1`..`strIngredient20`); they are kept in the flattened
/// field map and extracted through [`MealDetail::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct MealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, serde_json::Value>,
}

/// One ingredient entry of a meal detail. The measure may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub measure: String,
}

impl MealDetail {
    /// Ingredient lines from the positional field pairs, in field order.
    /// A line is emitted only when the ingredient name is non-blank after
    /// trimming; a missing or blank measure becomes an empty string.
    pub fn ingredients(&self) -> Vec<IngredientLine> {
        let mut lines = Vec::new();
        for i in 1..=20 {
            let Some(name) = self.positional("strIngredient", i) else {
                continue;
            };
            if name.trim().is_empty() {
                continue;
            }
            let measure = self.positional("strMeasure", i).unwrap_or_default();
            lines.push(IngredientLine {
                name: name.trim().to_string(),
                measure: measure.trim().to_string(),
            });
        }
        lines
    }

    fn positional(&self, prefix: &str, index: usize) -> Option<String> {
        self.fields
            .get(&format!("{prefix}{index}"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

/// One facet the results can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Area,
    Ingredient,
}

impl Facet {
    pub fn query_key(self) -> &'static str {
        match self {
            Self::Category => "c",
            Self::Area => "a",
            Self::Ingredient => "i",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Area => "Area",
            Self::Ingredient => "Ingredient",
        }
    }
}

/// Every endpoint answers `{"meals": [...]}` with `null` for no matches.
#[derive(Debug, Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    #[serde(rename = "strCategory")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct AreaEntry {
    #[serde(rename = "strArea")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct IngredientEntry {
    #[serde(rename = "strIngredient")]
    name: String,
}

/// Errors from the remote recipe API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Remote lookup capability used by the app. Implemented by
/// [`MealDbClient`] for the real API and by stubs in tests.
pub trait MealSource {
    async fn search_meals(&self, name: &str) -> Result<Option<Vec<MealSummary>>, ApiError>;
    async fn filter_meals(
        &self,
        facet: Facet,
        value: &str,
    ) -> Result<Option<Vec<MealSummary>>, ApiError>;
    async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ApiError>;
    async fn random_meal(&self) -> Result<Option<MealDetail>, ApiError>;
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;
    async fn list_areas(&self) -> Result<Vec<String>, ApiError>;
    async fn list_ingredients(&self) -> Result<Vec<String>, ApiError>;
}

/// HTTP client for TheMealDB, bound to one endpoint root.
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("meal-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET one endpoint and unwrap the `meals` envelope. `None` means the
    /// API answered `{"meals": null}`, which every endpoint uses for
    /// "no matches"; it is not an error.
    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Vec<T>>, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let envelope: MealsEnvelope<T> = response.json().await?;
        Ok(envelope.meals)
    }
}

impl MealSource for MealDbClient {
    async fn search_meals(&self, name: &str) -> Result<Option<Vec<MealSummary>>, ApiError> {
        self.get_meals("search.php", &[("s", name)]).await
    }

    async fn filter_meals(
        &self,
        facet: Facet,
        value: &str,
    ) -> Result<Option<Vec<MealSummary>>, ApiError> {
        self.get_meals("filter.php", &[(facet.query_key(), value)])
            .await
    }

    async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ApiError> {
        let meals: Option<Vec<MealDetail>> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.and_then(|m| m.into_iter().next()))
    }

    async fn random_meal(&self) -> Result<Option<MealDetail>, ApiError> {
        let meals: Option<Vec<MealDetail>> = self.get_meals("random.php", &[]).await?;
        Ok(meals.and_then(|m| m.into_iter().next()))
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let entries: Option<Vec<CategoryEntry>> =
            self.get_meals("list.php", &[("c", "list")]).await?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.name)
            .collect())
    }

    async fn list_areas(&self) -> Result<Vec<String>, ApiError> {
        let entries: Option<Vec<AreaEntry>> = self.get_meals("list.php", &[("a", "list")]).await?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.name)
            .collect())
    }

    async fn list_ingredients(&self) -> Result<Vec<String>, ApiError> {
        let entries: Option<Vec<IngredientEntry>> =
            self.get_meals("list.php", &[("i", "list")]).await?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.name)
            .collect())
    }
}
