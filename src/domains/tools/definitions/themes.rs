//! LEGO theme browsing tools.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{json_result, route, status_error, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

// ============================================================================
// theme_search
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThemeSearchParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<u32>,

    #[schemars(
        description = "Search theme by slug. Only themes matching the whole string will be returned. This database only contains themes from sets that have been previously integrated by a user."
    )]
    pub search: Option<String>,
}

pub struct ThemeSearchTool;

impl ThemeSearchTool {
    pub const NAME: &'static str = "theme_search";

    pub const DESCRIPTION: &'static str = "Search themes in our LEGO® sets database";

    pub async fn execute(params: &ThemeSearchParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("search", &params.search);

        match client.send(ApiRequest::get("/api/themes/").query(query)).await {
            Ok(body) => json_result(&body),
            Err(err) => status_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<ThemeSearchParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: ThemeSearchParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// theme_retrieve
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ThemeRetrieveParams {
    #[schemars(description = "A unique integer value identifying this theme.")]
    pub id: u64,
}

pub struct ThemeRetrieveTool;

impl ThemeRetrieveTool {
    pub const NAME: &'static str = "theme_retrieve";

    pub const DESCRIPTION: &'static str = "Retrieve a LEGO® theme from our database";

    pub async fn execute(params: &ThemeRetrieveParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/themes/{}/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => status_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<ThemeRetrieveParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: ThemeRetrieveParams, c| async move {
            Self::execute(&p, &c).await
        })
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
    async fn test_search_round_trip() {
        let server = MockServer::start_async().await;
        let body = json!({"count": 1, "results": [{"id": 4, "slug": "technic"}]});
        let expected = body.clone();
        let mock = server
            .mock_async(move |when, then| {
                when.method(GET)
                    .path("/api/themes/")
                    .query_param("search", "technic")
                    .query_param_missing("page");
                then.status(200).json_body(body.clone());
            })
            .await;

        let client = client_for(&server);
        let params = ThemeSearchParams {
            page: None,
            search: Some("technic".to_string()),
        };
        let result = ThemeSearchTool::execute(&params, &client).await;

        mock.assert_async().await;
        let parsed: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(parsed, expected);
    }

    #[tokio::test]
    async fn test_retrieve_error_includes_status_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/themes/888/");
                then.status(404).json_body(json!({"detail": "Not found."}));
            })
            .await;

        let client = client_for(&server);
        let params = ThemeRetrieveParams { id: 888 };
        let result = ThemeRetrieveTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error: [404] - LocaBriques API Error [404]: Not Found"
        );
    }
}
