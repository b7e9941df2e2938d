//! Per-bags inventory tools (authenticated).
//!
//! Bags are addressed by their slug inside an inventory. The upstream write
//! endpoints for bags accept the mutated fields in the query string as well
//! as the JSON body, and both carriers are populated on every write.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{json_result, plain_error, route, text_result, tool_model};
use crate::api::{ApiClient, ApiRequest, Query};

// ============================================================================
// myinventory_list
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryListParams {
    #[schemars(description = "A page number within the paginated result set.")]
    pub page: Option<i64>,

    #[schemars(description = "Number of results to return per page.")]
    pub page_size: Option<i64>,
}

pub struct MyInventoryListTool;

impl MyInventoryListTool {
    pub const NAME: &'static str = "myinventory_list";

    pub const DESCRIPTION: &'static str = "List your own per-bags set inventories";

    pub async fn execute(params: &MyInventoryListParams, client: &ApiClient) -> CallToolResult {
        let query = Query::new()
            .push("page", &params.page)
            .push("page_size", &params.page_size);

        match client
            .send(ApiRequest::get("/api/inventories/mine/").query(query))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryListParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyInventoryListParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// myinventory_create
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryCreateParams {
    #[schemars(
        description = "LEGO® identifier of the set to add",
        regex(pattern = r"^[0-9]{3,}-[0-9]$")
    )]
    pub set_num: String,
}

pub struct MyInventoryCreateTool;

impl MyInventoryCreateTool {
    pub const NAME: &'static str = "myinventory_create";

    pub const DESCRIPTION: &'static str = "Register a new per-bags set inventory";

    pub async fn execute(params: &MyInventoryCreateParams, client: &ApiClient) -> CallToolResult {
        let body = json!({ "set_num": params.set_num });
        match client
            .send(ApiRequest::post("/api/inventories/mine/").json(body))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryCreateParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyInventoryCreateParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// myinventory_retrieve / myinventory_delete
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryRetrieveParams {
    #[schemars(description = "A unique integer value identifying this Per-bags inventory.")]
    pub id: i64,
}

pub struct MyInventoryRetrieveTool;

impl MyInventoryRetrieveTool {
    pub const NAME: &'static str = "myinventory_retrieve";

    pub const DESCRIPTION: &'static str = "Retrieve one of your own per-bags set inventories";

    pub async fn execute(params: &MyInventoryRetrieveParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/inventories/mine/{}/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryRetrieveParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryRetrieveParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryDeleteParams {
    #[schemars(description = "A unique integer value identifying this Per-bags inventory.")]
    pub id: i64,
}

pub struct MyInventoryDeleteTool;

impl MyInventoryDeleteTool {
    pub const NAME: &'static str = "myinventory_delete";

    pub const DESCRIPTION: &'static str = "Delete one of your per-bag inventories";

    pub async fn execute(params: &MyInventoryDeleteParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/inventories/mine/{}/", params.id);
        match client.send(ApiRequest::delete(path)).await {
            Ok(_) => text_result("Inventory deleted".to_string()),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryDeleteParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyInventoryDeleteParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

// ============================================================================
// myinventory_list_bags / myinventory_create_bag
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryListBagsParams {
    #[schemars(description = "ID of the inventory to look up")]
    pub id: i64,
}

pub struct MyInventoryListBagsTool;

impl MyInventoryListBagsTool {
    pub const NAME: &'static str = "myinventory_list_bags";

    pub const DESCRIPTION: &'static str = "List all bags from an inventory";

    pub async fn execute(
        params: &MyInventoryListBagsParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!("/api/inventories/mine/{}/bags/", params.id);
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryListBagsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryListBagsParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryCreateBagParams {
    #[schemars(description = "ID of the inventory to add bag to")]
    pub id: i64,

    #[schemars(description = "Bag number", length(min = 1, max = 32))]
    pub bag_number: String,
}

pub struct MyInventoryCreateBagTool;

impl MyInventoryCreateBagTool {
    pub const NAME: &'static str = "myinventory_create_bag";

    pub const DESCRIPTION: &'static str = "Create a new bag in your inventory";

    pub async fn execute(
        params: &MyInventoryCreateBagParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!("/api/inventories/mine/{}/bags/", params.id);
        let query = Query::new().set("bag_number", &params.bag_number);

        match client
            .send(
                ApiRequest::post(path)
                    .query(query)
                    .json(json!({ "bag_number": params.bag_number })),
            )
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryCreateBagParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryCreateBagParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// myinventory_retrieve_bag / myinventory_delete_bag
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryRetrieveBagParams {
    #[schemars(description = "ID of the inventory to look up")]
    pub id: i64,

    #[schemars(description = "bag number to retrieve")]
    pub bag_number_slug: String,
}

pub struct MyInventoryRetrieveBagTool;

impl MyInventoryRetrieveBagTool {
    pub const NAME: &'static str = "myinventory_retrieve_bag";

    pub const DESCRIPTION: &'static str = "Retrieve a bag present in an inventory";

    pub async fn execute(
        params: &MyInventoryRetrieveBagParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!(
            "/api/inventories/mine/{}/bags/{}/",
            params.id, params.bag_number_slug
        );
        match client.send(ApiRequest::get(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryRetrieveBagParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryRetrieveBagParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryDeleteBagParams {
    #[schemars(description = "ID of the inventory to delete bag from")]
    pub id: i64,

    #[schemars(description = "Slug of the bag to delete")]
    pub bag_number_slug: String,
}

pub struct MyInventoryDeleteBagTool;

impl MyInventoryDeleteBagTool {
    pub const NAME: &'static str = "myinventory_delete_bag";

    pub const DESCRIPTION: &'static str = "Delete a bag from one of your inventories";

    pub async fn execute(
        params: &MyInventoryDeleteBagParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!(
            "/api/inventories/mine/{}/bags/{}/",
            params.id, params.bag_number_slug
        );
        match client.send(ApiRequest::delete(path)).await {
            Ok(_) => text_result("Bag deleted".to_string()),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryDeleteBagParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryDeleteBagParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// myinventory_update_bag_number / myinventory_partial_update_bag
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryUpdateBagNumberParams {
    #[schemars(description = "ID of the inventory containing the bag to update")]
    pub id: i64,

    #[schemars(description = "Slug of the name of the bag to update")]
    pub bag_number_slug: String,

    #[schemars(description = "Bag number", length(min = 1, max = 32))]
    pub bag_number: String,
}

pub struct MyInventoryUpdateBagNumberTool;

impl MyInventoryUpdateBagNumberTool {
    pub const NAME: &'static str = "myinventory_update_bag_number";

    pub const DESCRIPTION: &'static str = "Change number of a bag in an inventory";

    pub async fn execute(
        params: &MyInventoryUpdateBagNumberParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!(
            "/api/inventories/mine/{}/bags/{}/",
            params.id, params.bag_number_slug
        );
        let query = Query::new().set("bag_number", &params.bag_number);

        match client
            .send(
                ApiRequest::put(path)
                    .query(query)
                    .json(json!({ "bag_number": params.bag_number })),
            )
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryUpdateBagNumberParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryUpdateBagNumberParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryPartialUpdateBagParams {
    #[schemars(description = "ID of the inventory containing the bag to update")]
    pub id: i64,

    #[schemars(description = "Slug of the name of the bag to update")]
    pub bag_number_slug: String,

    #[schemars(description = "Rebrickable part reference", regex(pattern = r"^[-a-zA-Z0-9_]+$"))]
    pub part_num: String,

    #[schemars(description = "Rebrickable color reference", regex(pattern = r"^[-a-zA-Z0-9_]+$"))]
    pub color_id: String,

    #[schemars(description = "Quantity of part (part_num+color) present in the bag")]
    pub quantity_used: i64,
}

pub struct MyInventoryPartialUpdateBagTool;

impl MyInventoryPartialUpdateBagTool {
    pub const NAME: &'static str = "myinventory_partial_update_bag";

    pub const DESCRIPTION: &'static str =
        "Update content of a bag in one of your own (not yet published) per-bags inventories";

    pub async fn execute(
        params: &MyInventoryPartialUpdateBagParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!(
            "/api/inventories/mine/{}/bags/{}/",
            params.id, params.bag_number_slug
        );
        let query = Query::new()
            .set("part_num", &params.part_num)
            .set("color_id", &params.color_id)
            .set("quantity_used", params.quantity_used);

        let body = json!({
            "part_num": params.part_num,
            "color_id": params.color_id,
            "quantity_used": params.quantity_used,
        });

        match client
            .send(ApiRequest::patch(path).query(query).json(body))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryPartialUpdateBagParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: MyInventoryPartialUpdateBagParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// myinventory_publish
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MyInventoryPublishParams {
    #[schemars(description = "A unique integer value identifying this Per-bags inventory.")]
    pub id: i64,
}

pub struct MyInventoryPublishTool;

impl MyInventoryPublishTool {
    pub const NAME: &'static str = "myinventory_publish";

    pub const DESCRIPTION: &'static str = "Publish one of you per-bags set inventory";

    pub async fn execute(params: &MyInventoryPublishParams, client: &ApiClient) -> CallToolResult {
        let path = format!("/api/inventories/mine/{}/publish/", params.id);
        match client.send(ApiRequest::post(path)).await {
            Ok(body) => json_result(&body),
            Err(err) => plain_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<MyInventoryPublishParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(Self::to_tool(), client, |p: MyInventoryPublishParams, c| async move {
            Self::execute(&p, &c).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::testing::{client_for, text_of};
    use super::*;
    use httpmock::Method::{DELETE, GET, PATCH, POST, PUT};
    use httpmock::MockServer;

    #[tokio::test]
    async fn test_create_sends_set_num_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/inventories/mine/")
                    .json_body(json!({ "set_num": "10312-1" }));
                then.status(201).json_body(json!({"id": 3, "set_num": "10312-1"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryCreateParams {
            set_num: "10312-1".to_string(),
        };
        let result = MyInventoryCreateTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_create_bag_duplicates_number_in_query_and_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/inventories/mine/3/bags/")
                    .query_param("bag_number", "2A")
                    .json_body(json!({ "bag_number": "2A" }));
                then.status(201).json_body(json!({"bag_number": "2A"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryCreateBagParams {
            id: 3,
            bag_number: "2A".to_string(),
        };
        MyInventoryCreateBagTool::execute(&params, &client).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_partial_update_bag_duplicates_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/inventories/mine/3/bags/2a/")
                    .query_param("part_num", "3001")
                    .query_param("color_id", "4")
                    .query_param("quantity_used", "6")
                    .json_body(json!({
                        "part_num": "3001",
                        "color_id": "4",
                        "quantity_used": 6
                    }));
                then.status(200).json_body(json!({"quantity_used": 6}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryPartialUpdateBagParams {
            id: 3,
            bag_number_slug: "2a".to_string(),
            part_num: "3001".to_string(),
            color_id: "4".to_string(),
            quantity_used: 6,
        };
        MyInventoryPartialUpdateBagTool::execute(&params, &client).await;

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_bag_fixed_confirmation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/inventories/mine/3/bags/2a/");
                then.status(204);
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryDeleteBagParams {
            id: 3,
            bag_number_slug: "2a".to_string(),
        };
        let result = MyInventoryDeleteBagTool::execute(&params, &client).await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Bag deleted");
    }

    #[tokio::test]
    async fn test_delete_inventory_fixed_confirmation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/inventories/mine/3/");
                then.status(204);
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryDeleteParams { id: 3 };
        let result = MyInventoryDeleteTool::execute(&params, &client).await;

        assert_eq!(text_of(&result), "Inventory deleted");
    }

    #[tokio::test]
    async fn test_publish_posts_without_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/inventories/mine/3/publish/");
                then.status(200).json_body(json!({"status": "published"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryPublishParams { id: 3 };
        let result = MyInventoryPublishTool::execute(&params, &client).await;

        mock.assert_async().await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_list_error_family_format() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/inventories/mine/");
                then.status(403).json_body(json!({"message": "Forbidden"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryListParams {
            page: None,
            page_size: None,
        };
        let result = MyInventoryListTool::execute(&params, &client).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: LocaBriques API Error [403]: Forbidden");
    }

    #[tokio::test]
    async fn test_update_bag_number_hits_slug_path() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/inventories/mine/3/bags/old-1/")
                    .query_param("bag_number", "1B")
                    .json_body(json!({ "bag_number": "1B" }));
                then.status(200).json_body(json!({"bag_number": "1B"}));
            })
            .await;

        let client = client_for(&server);
        let params = MyInventoryUpdateBagNumberParams {
            id: 3,
            bag_number_slug: "old-1".to_string(),
            bag_number: "1B".to_string(),
        };
        MyInventoryUpdateBagNumberTool::execute(&params, &client).await;

        mock.assert_async().await;
    }
}
