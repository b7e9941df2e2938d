//! Account tools (authenticated): back-in-stock alerts and wish list.
//!
//! Failures from this family carry the bare upstream message with no prefix.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::common::{bare_error, json_result, route, text_result, tool_model};
use crate::api::{ApiClient, ApiRequest};

// ============================================================================
// account_list_stock_alerts / account_delete_stock_alert
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountListStockAlertsParams {}

pub struct AccountListStockAlertsTool;

impl AccountListStockAlertsTool {
    pub const NAME: &'static str = "account_list_stock_alerts";

    pub const DESCRIPTION: &'static str = "List all your 'back in stock' alerts. This action allows you to list all sets in your 'back in stock' alerts.";

    pub async fn execute(
        _params: &AccountListStockAlertsParams,
        client: &ApiClient,
    ) -> CallToolResult {
        match client
            .send(ApiRequest::get("/api/my_account/backinstockalerts/"))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => bare_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AccountListStockAlertsParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: AccountListStockAlertsParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountDeleteStockAlertParams {
    #[schemars(description = "A unique integer value identifying this back in stock alert.")]
    pub id: i64,
}

pub struct AccountDeleteStockAlertTool;

impl AccountDeleteStockAlertTool {
    pub const NAME: &'static str = "account_delete_stock_alert";

    pub const DESCRIPTION: &'static str =
        "Remove a 'back in stock' alert. This action allows you to remove a 'back in stock' alert.";

    pub async fn execute(
        params: &AccountDeleteStockAlertParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!("/api/my_account/backinstockalerts/{}/", params.id);
        match client.send(ApiRequest::delete(path)).await {
            Ok(_) => text_result("Alert removed from your list".to_string()),
            Err(err) => bare_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AccountDeleteStockAlertParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: AccountDeleteStockAlertParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

// ============================================================================
// account_list_wishlist / account_create_wishlist_item /
// account_delete_wishlist_item
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountListWishlistParams {}

pub struct AccountListWishlistTool;

impl AccountListWishlistTool {
    pub const NAME: &'static str = "account_list_wishlist";

    pub const DESCRIPTION: &'static str =
        "List all sets in your wish list. This action allows you to list all sets in your wish list.";

    pub async fn execute(
        _params: &AccountListWishlistParams,
        client: &ApiClient,
    ) -> CallToolResult {
        match client.send(ApiRequest::get("/api/my_account/wishlist/")).await {
            Ok(body) => json_result(&body),
            Err(err) => bare_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AccountListWishlistParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: AccountListWishlistParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountCreateWishlistItemParams {
    #[schemars(
        description = "LEGO® identifier of the set to add",
        regex(pattern = r"^[0-9]{3,}-[0-9]$")
    )]
    pub legoset_lego_id: String,
}

pub struct AccountCreateWishlistItemTool;

impl AccountCreateWishlistItemTool {
    pub const NAME: &'static str = "account_create_wishlist_item";

    pub const DESCRIPTION: &'static str =
        "Add a new set in your wish list. This action allows you to add a new set in your wish list.";

    pub async fn execute(
        params: &AccountCreateWishlistItemParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let body = json!({ "legoset_lego_id": params.legoset_lego_id });
        match client
            .send(ApiRequest::post("/api/my_account/wishlist/").json(body))
            .await
        {
            Ok(body) => json_result(&body),
            Err(err) => bare_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AccountCreateWishlistItemParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: AccountCreateWishlistItemParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountDeleteWishlistItemParams {
    #[schemars(description = "A unique integer value identifying this wish list item.")]
    pub id: i64,
}

pub struct AccountDeleteWishlistItemTool;

impl AccountDeleteWishlistItemTool {
    pub const NAME: &'static str = "account_delete_wishlist_item";

    pub const DESCRIPTION: &'static str =
        "Remove a set from your wish list. This action allows you to remove a set present in your wish list.";

    pub async fn execute(
        params: &AccountDeleteWishlistItemParams,
        client: &ApiClient,
    ) -> CallToolResult {
        let path = format!("/api/my_account/wishlist/{}/", params.id);
        match client.send(ApiRequest::delete(path)).await {
            Ok(_) => text_result("Set removed from your wish list".to_string()),
            Err(err) => bare_error(&err),
        }
    }

    pub fn to_tool() -> Tool {
        tool_model::<AccountDeleteWishlistItemParams>(Self::NAME, Self::DESCRIPTION)
    }

    pub fn create_route<S>(client: Arc<ApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        route(
            Self::to_tool(),
            client,
            |p: AccountDeleteWishlistItemParams, c| async move { Self::execute(&p, &c).await },
        )
    }
}
