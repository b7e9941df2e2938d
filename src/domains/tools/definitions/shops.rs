//! Shop directory tools.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{json_result, prefixed_error, route, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

// ============================================================================
// list_shops
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListShopsParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(description = "Number of results to return per page.")]
    pub page_size: Option<u32>,

    #[schemars(description = "Limit results to shop currently open (set to 'true' to enable)")]
    pub open_only: Option<bool>,
}

pub struct ListShopsTool;

impl ListShopsTool {
    pub const NAME: &'static str = "list_shops";

    pub const DESCRIPTION: &'static str =
        "List all shops registered on LocaBriques. Allows filtering by open status and pagination.";

    pub async fn execute(params: &ListShopsParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("page_size", &params.page_size)
            .push("open_only", &params.open_only);

        match client.send(ApiRequest::get("/api/shops/").query(query)).await {
            Ok(body) => json_result(&body),
            Err(err) => prefixed_error("Could not fetch shops", &err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<ListShopsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: ListShopsParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// get_shop
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetShopParams {
    #[schemars(description = "The unique slug identifier of the shop.")]
    pub slug: String,
}

pub struct GetShopTool;

impl GetShopTool {
    pub const NAME: &'static str = "get_shop";

    pub const DESCRIPTION: &'static str =
        "Retrieve a specific shop registered on LocaBriques by its slug.";

    pub async fn execute(params: &GetShopParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/shops/{}/", params.slug);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => {
                prefixed_error(&format!("Could not fetch shop '{}'", params.slug), &err)
            }
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<GetShopParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: GetShopParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}
