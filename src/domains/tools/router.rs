//! Tool router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them and hands every route a clone of the shared API client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::api::ApiClient;

use super::definitions::{
    AccountCreateWishlistItemTool, AccountDeleteStockAlertTool, AccountDeleteWishlistItemTool,
    AccountListStockAlertsTool, AccountListWishlistTool, CatalogListSetsTool, CatalogListTool,
    CatalogRetrieveSetTool, GetShopTool, InventoryListTool, InventoryRetrieveTool,
    LegosetRegisterTool, LegosetRetrieveTool, LegosetSearchTool, ListShopsTool,
    MyInventoryCreateBagTool, MyInventoryCreateTool, MyInventoryDeleteBagTool,
    MyInventoryDeleteTool, MyInventoryListBagsTool, MyInventoryListTool,
    MyInventoryPartialUpdateBagTool, MyInventoryPublishTool, MyInventoryRetrieveBagTool,
    MyInventoryRetrieveTool, MyInventoryUpdateBagNumberTool, MyShopCreateCouponTool,
    MyShopDeleteCouponTool, MyShopListCouponsTool, MyShopPartialUpdateCouponTool,
    MyShopPartialUpdateTool, MyShopRetrieveCouponTool, MyShopRetrieveTool, MyShopUpdateCouponTool,
    MyShopUpdateTool, ThemeRetrieveTool, ThemeSearchTool, UserListTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        // Catalogs
        .with_route(CatalogListTool::create_route(client.clone()))
        .with_route(CatalogListSetsTool::create_route(client.clone()))
        .with_route(CatalogRetrieveSetTool::create_route(client.clone()))
        // LEGO sets
        .with_route(LegosetSearchTool::create_route(client.clone()))
        .with_route(LegosetRetrieveTool::create_route(client.clone()))
        .with_route(LegosetRegisterTool::create_route(client.clone()))
        // Public inventories
        .with_route(InventoryListTool::create_route(client.clone()))
        .with_route(InventoryRetrieveTool::create_route(client.clone()))
        // Themes
        .with_route(ThemeSearchTool::create_route(client.clone()))
        .with_route(ThemeRetrieveTool::create_route(client.clone()))
        // Shops
        .with_route(ListShopsTool::create_route(client.clone()))
        .with_route(GetShopTool::create_route(client.clone()))
        // Users
        .with_route(UserListTool::create_route(client.clone()))
        // My shop
        .with_route(MyShopRetrieveTool::create_route(client.clone()))
        .with_route(MyShopUpdateTool::create_route(client.clone()))
        .with_route(MyShopPartialUpdateTool::create_route(client.clone()))
        .with_route(MyShopListCouponsTool::create_route(client.clone()))
        .with_route(MyShopCreateCouponTool::create_route(client.clone()))
        .with_route(MyShopRetrieveCouponTool::create_route(client.clone()))
        .with_route(MyShopUpdateCouponTool::create_route(client.clone()))
        .with_route(MyShopPartialUpdateCouponTool::create_route(client.clone()))
        .with_route(MyShopDeleteCouponTool::create_route(client.clone()))
        // My inventories
        .with_route(MyInventoryListTool::create_route(client.clone()))
        .with_route(MyInventoryCreateTool::create_route(client.clone()))
        .with_route(MyInventoryRetrieveTool::create_route(client.clone()))
        .with_route(MyInventoryDeleteTool::create_route(client.clone()))
        .with_route(MyInventoryListBagsTool::create_route(client.clone()))
        .with_route(MyInventoryCreateBagTool::create_route(client.clone()))
        .with_route(MyInventoryRetrieveBagTool::create_route(client.clone()))
        .with_route(MyInventoryDeleteBagTool::create_route(client.clone()))
        .with_route(MyInventoryUpdateBagNumberTool::create_route(client.clone()))
        .with_route(MyInventoryPartialUpdateBagTool::create_route(client.clone()))
        .with_route(MyInventoryPublishTool::create_route(client.clone()))
        // My account
        .with_route(AccountListStockAlertsTool::create_route(client.clone()))
        .with_route(AccountDeleteStockAlertTool::create_route(client.clone()))
        .with_route(AccountListWishlistTool::create_route(client.clone()))
        .with_route(AccountCreateWishlistItemTool::create_route(client.clone()))
        .with_route(AccountDeleteWishlistItemTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use std::collections::HashSet;

    struct TestServer {}

    fn test_client() -> Arc<ApiClient> {
        Arc::new(ApiClient::new(&ApiConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 38);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"catalog_list"));
        assert!(names.contains(&"legoset_register"));
        assert!(names.contains(&"theme_retrieve"));
        assert!(names.contains(&"myshop_partial_update_coupon"));
        assert!(names.contains(&"myinventory_update_bag_number"));
        assert!(names.contains(&"account_delete_wishlist_item"));
    }

    #[test]
    fn test_tool_names_unique() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        let names: HashSet<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_every_tool_has_description() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{} has no description", tool.name);
        }
    }
}
