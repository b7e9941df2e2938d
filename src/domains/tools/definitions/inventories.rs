//! Public per-bags inventory tools.
//!
//! Read-only view of published inventories. This family reports failures as
//! `Error: [<status>] - <response body>` with the body compact-serialized.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{json_result, route, status_data_error, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

// ============================================================================
// inventory_list
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InventoryListParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(description = "Number of results to return per page.")]
    pub page_size: Option<u32>,

    #[schemars(description = "Search inventories by set name or reference.")]
    pub search: Option<String>,
}

pub struct InventoryListTool;

impl InventoryListTool {
    pub const NAME: &'static str = "inventory_list";

    pub const DESCRIPTION: &'static str = "Search sets in our inventory database.";

    pub async fn execute(params: &InventoryListParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("page_size", &params.page_size)
            .push("search", &params.search);

        match client
            .send(ApiRequest::get("/api/inventories/").query(query))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => status_data_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<InventoryListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: InventoryListParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// inventory_retrieve
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InventoryRetrieveParams {
    #[schemars(description = "A unique integer value identifying this Per-bags inventory.")]
    pub id: u64,
}

pub struct InventoryRetrieveTool;

impl InventoryRetrieveTool {
    pub const NAME: &'static str = "inventory_retrieve";

    pub const DESCRIPTION: &'static str = "Retrieve a specific inventory.";

    pub async fn execute(params: &InventoryRetrieveParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/inventories/{}/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => status_data_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<InventoryRetrieveParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: InventoryRetrieveParams, c| async move { Self::execute(&p, &c).await },
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

    #[tokio::test]
    async fn test_list_query_omits_unset() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/inventories/")
                    .query_param("search", "castle")
                    .query_param_missing("page")
                    .query_param_missing("page_size");
                then.status(200).json_body(json!({"count": 0, "results": []}));
            })
            .await;

        let client = client_for(&server);
        let params = InventoryListParams {
            page: None,
            page_size: None,
            search: Some("castle".to_string()),
        };
        InventoryListTool::execute(&params, &client).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_error_includes_status_and_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/inventories/");
                then.status(400).json_body(json!({"page": ["invalid"]}));
            })
            .await;

        let client = client_for(&server);
        let params = InventoryListParams {
            page: Some(0),
            page_size: None,
            search: None,
        };
        let result = InventoryListTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), r#"Error: [400] - {"page":["invalid"]}"#);
    }

    #[tokio::test]
    async fn test_retrieve_round_trip() {
        let server = MockServer::start_async().await;
        let body = json!({"id": 12, "set_num": "10305-1", "bags": 14});
        let expected = body.clone();
        server
            .mock_async(move |when, then| {
                when.method(GET).path("/api/inventories/12/");
                then.status(200).json_body(body.clone());
            })
            .await;

        let client = client_for(&server);
        let params = InventoryRetrieveParams { id: 12 };
        let result = InventoryRetrieveTool::execute(&params, &client).await;

        let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed, expected);
    }
}
