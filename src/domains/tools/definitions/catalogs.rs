//! Catalog browsing tools.
//!
//! Public, unauthenticated view of everything rentable across all shops.

use std::fmt;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{json_result, prefixed_error, route, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

/// Result ordering accepted by the catalog set listing.
///
/// The leading underscore on average rate is mandatory upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub enum CatalogSort {
    #[serde(rename = "-_average_rate")]
    AverageRateDesc,
    #[serde(rename = "-name")]
    NameDesc,
    #[serde(rename = "-release_year")]
    ReleaseYearDesc,
    #[serde(rename = "-rental_price")]
    RentalPriceDesc,
    #[serde(rename = "_average_rate")]
    AverageRate,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "release_year")]
    ReleaseYear,
    #[serde(rename = "rental_price")]
    RentalPrice,
}

impl CatalogSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AverageRateDesc => "-_average_rate",
            Self::NameDesc => "-name",
            Self::ReleaseYearDesc => "-release_year",
            Self::RentalPriceDesc => "-rental_price",
            Self::AverageRate => "_average_rate",
            Self::Name => "name",
            Self::Newest => "newest",
            Self::ReleaseYear => "release_year",
            Self::RentalPrice => "rental_price",
        }
    }
}

impl fmt::Display for CatalogSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the physical parts of a set are sorted into bags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub enum SortingType {
    #[serde(rename = "BAG_NUMBER")]
    BagNumber,
    #[serde(rename = "COLOR")]
    Color,
    #[serde(rename = "OTHER")]
    Other,
}

impl SortingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BagNumber => "BAG_NUMBER",
            Self::Color => "COLOR",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for SortingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// catalog_list
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogListParams {}

/// Lists the available catalog entry points.
pub struct CatalogListTool;

impl CatalogListTool {
    pub const NAME: &'static str = "catalog_list";

    pub const DESCRIPTION: &'static str =
        "List all our catalogs. Returns links to different available catalogs.";

    pub async fn execute(_params: &CatalogListParams, client: &ApiClient) -> CallToolResult {
        match client.send(ApiRequest::get("/api/catalogs/")).await {
            Ok(body) => json_result(&body),
            Err(err) => prefixed_error("Could not fetch catalogs", &err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<CatalogListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: CatalogListParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// catalog_list_sets
// ============================================================================

/// Parameters for the catalog set listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogListSetsParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(description = "Number of results to return per page.")]
    pub page_size: Option<u32>,

    #[schemars(
        description = "Limit results to sets proposed for at least the given price (in euros)"
    )]
    pub min_price: Option<f64>,

    #[schemars(
        description = "Limit results to sets proposed for at most the given price (in euros)."
    )]
    pub max_price: Option<f64>,

    #[schemars(
        description = "Limit results to sets whose average rating is at least the given number"
    )]
    pub min_rate: Option<f64>,

    #[schemars(
        description = "Limit results to sets whose average rating is at most the given number"
    )]
    pub max_rate: Option<f64>,

    #[schemars(description = "Limit results to sets whose age category is at least the given one")]
    pub min_age: Option<u32>,

    #[schemars(
        description = "Limit results to sets whose age category is at most the given one. 19 is used for '18+'"
    )]
    pub max_age: Option<u32>,

    #[schemars(description = "Limit results to sets containing at least this number of parts")]
    pub min_part_count: Option<u32>,

    #[schemars(description = "Limit results to sets containing at most this number of parts")]
    pub max_part_count: Option<u32>,

    #[schemars(
        description = "Limit results to sets matching this parameter in their name, headline, description or lego_id (and some custom keywords we might add based on our users common spelling mistakes !). If multiple words are specified, they will be splited and resulting sets will match every word."
    )]
    pub searched_string: Option<String>,

    #[schemars(
        description = "Limit results to sets if their theme (or parent theme) matches parameter (slug is used instead of name)."
    )]
    pub theme: Option<String>,

    #[schemars(
        description = "Result ordering. Newest means most recently added to our catalog first. The underscore before average rate is mandatory."
    )]
    pub sort: Option<CatalogSort>,

    #[schemars(description = "Limit results to sets available with specific sorting types")]
    pub sorting_type: Option<Vec<SortingType>>,

    #[schemars(
        description = "If you are authenticated and own a shop, exclude from results the sets present in your shop inventory"
    )]
    pub exclude_mine: Option<bool>,

    #[schemars(description = "Limit results to sets that have at least one review")]
    pub exclude_no_rates: Option<bool>,

    #[schemars(
        description = "Limit results to sets currently available (set to 'true' to enable)"
    )]
    pub exclude_not_available: Option<bool>,

    #[schemars(
        description = "Include availabilities for the sets. Set to 'true' to activate"
    )]
    pub include_availability: Option<bool>,

    #[schemars(description = "Include all images for the sets. Set to 'true' to activate")]
    pub include_images: Option<bool>,
}

/// Searches the rental catalog with the full filter set.
pub struct CatalogListSetsTool;

impl CatalogListSetsTool {
    pub const NAME: &'static str = "catalog_list_sets";

    pub const DESCRIPTION: &'static str = "List all LEGO® sets available for rental in our owners' shops. Supports extensive filtering by price, rating, age, theme, and more.";

    pub async fn execute(params: &CatalogListSetsParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("page_size", &params.page_size)
            .push("min_price", &params.min_price)
            .push("max_price", &params.max_price)
            .push("min_rate", &params.min_rate)
            .push("max_rate", &params.max_rate)
            .push("min_age", &params.min_age)
            .push("max_age", &params.max_age)
            .push("min_part_count", &params.min_part_count)
            .push("max_part_count", &params.max_part_count)
            .push("searched_string", &params.searched_string)
            .push("theme", &params.theme)
            .push("sort", &params.sort)
            .push_each("sorting_type", &params.sorting_type)
            .push("exclude_mine", &params.exclude_mine)
            .push("exclude_no_rates", &params.exclude_no_rates)
            .push("exclude_not_available", &params.exclude_not_available)
            .push("include_availability", &params.include_availability)
            .push("include_images", &params.include_images);

        match client
            .send(ApiRequest::get("/api/catalogs/sets/").query(query))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => prefixed_error("Could not fetch catalog sets", &err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<CatalogListSetsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: CatalogListSetsParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// catalog_retrieve_set
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CatalogRetrieveSetParams {
    #[schemars(description = "The LEGO® identifier of the set to retrieve")]
    pub lego_id: String,
}

/// Retrieves one rentable set by its LEGO identifier.
pub struct CatalogRetrieveSetTool;

impl CatalogRetrieveSetTool {
    pub const NAME: &'static str = "catalog_retrieve_set";

    pub const DESCRIPTION: &'static str = "Retrieve a LEGO® set present in at least one of our shops. Returns detailed information about a specific set available for rental.";

    pub async fn execute(params: &CatalogRetrieveSetParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/catalogs/sets/{}/", params.lego_id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => prefixed_error(
                &format!("Could not fetch catalog set '{}'", params.lego_id),
                &err,
            ),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<CatalogRetrieveSetParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: CatalogRetrieveSetParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::testing::{client_for, text_of};
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::{Value, json};

    #[test]
    fn test_sort_wire_values() {
        let sort: CatalogSort = serde_json::from_value(json!("-_average_rate")).unwrap();
        assert_eq!(sort.as_str(), "-_average_rate");
        let sort: CatalogSort = serde_json::from_value(json!("newest")).unwrap();
        assert_eq!(sort.as_str(), "newest");
        assert!(serde_json::from_value::<CatalogSort>(json!("price")).is_err());
    }

    #[tokio::test]
    async fn test_list_sets_filters_passed_verbatim() {
        let server = MockServer::start_async().await;
        let body = json!({"count": 1, "results": [{"lego_id": "10297-1"}]});
        let expected = body.clone();
        let mock = server
            .mock_async(move |when, then| {
                when.method(GET)
                    .path("/api/catalogs/sets/")
                    .query_param("min_price", "5")
                    .query_param("max_price", "20.5")
                    .query_param("theme", "modular-buildings")
                    .query_param("sort", "-rental_price")
                    .query_param("exclude_not_available", "true")
                    .query_param_missing("page")
                    .query_param_missing("searched_string");
                then.status(200).json_body(body.clone());
            })
            .await;

        let client = client_for(&server);
        let params: CatalogListSetsParams = serde_json::from_value(json!({
            "min_price": 5,
            "max_price": 20.5,
            "theme": "modular-buildings",
            "sort": "-rental_price",
            "exclude_not_available": true
        }))
        .unwrap();
        let result = CatalogListSetsTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
        let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed, expected);
    }

    #[tokio::test]
    async fn test_list_sets_repeats_sorting_type() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/catalogs/sets/")
                    .query_param("sorting_type", "BAG_NUMBER")
                    .query_param("sorting_type", "COLOR");
                then.status(200).json_body(json!({"count": 0, "results": []}));
            })
            .await;

        let client = client_for(&server);
        let params: CatalogListSetsParams =
            serde_json::from_value(json!({ "sorting_type": ["BAG_NUMBER", "COLOR"] })).unwrap();
        CatalogListSetsTool::execute(&params, &client).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_retrieve_set_path_contains_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/catalogs/sets/10297-1/");
                then.status(200).json_body(json!({"lego_id": "10297-1"}));
            })
            .await;

        let client = client_for(&server);
        let params = CatalogRetrieveSetParams {
            lego_id: "10297-1".to_string(),
        };
        let result = CatalogRetrieveSetTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_retrieve_set_error_format() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/catalogs/sets/0000-0/");
                then.status(404).json_body(json!({"detail": "Not found."}));
            })
            .await;

        let client = client_for(&server);
        let params = CatalogRetrieveSetParams {
            lego_id: "0000-0".to_string(),
        };
        let result = CatalogRetrieveSetTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Could not fetch catalog set '0000-0': LocaBriques API Error [404]: Not Found"
        );
    }

    #[tokio::test]
    async fn test_catalog_list_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/catalogs/");
                then.status(200)
                    .json_body(json!({"sets": "/api/catalogs/sets/"}));
            })
            .await;

        let client = client_for(&server);
        let result = CatalogListTool::execute(&CatalogListParams {}, &client).await;
        let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed["sets"], "/api/catalogs/sets/");
    }
}
