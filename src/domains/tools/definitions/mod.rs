//! Tool definitions module.
//!
//! One file per LocaBriques resource family. Every tool exposes the same
//! surface: `NAME`, `DESCRIPTION`, `execute()`, `to_tool()` and
//! `create_route()`; the shared plumbing lives in `common`.

pub mod common;

pub mod catalogs;
pub mod inventories;
pub mod legosets;
pub mod my_account;
pub mod my_inventories;
pub mod my_shop;
pub mod shops;
pub mod themes;
pub mod users;

pub use catalogs::{CatalogListSetsTool, CatalogListTool, CatalogRetrieveSetTool};
pub use inventories::{InventoryListTool, InventoryRetrieveTool};
pub use legosets::{LegosetRegisterTool, LegosetRetrieveTool, LegosetSearchTool};
pub use my_account::{
    AccountCreateWishlistItemTool, AccountDeleteStockAlertTool, AccountDeleteWishlistItemTool,
    AccountListStockAlertsTool, AccountListWishlistTool,
};
pub use my_inventories::{
    MyInventoryCreateBagTool, MyInventoryCreateTool, MyInventoryDeleteBagTool,
    MyInventoryDeleteTool, MyInventoryListBagsTool, MyInventoryListTool,
    MyInventoryPartialUpdateBagTool, MyInventoryPublishTool, MyInventoryRetrieveBagTool,
    MyInventoryRetrieveTool, MyInventoryUpdateBagNumberTool,
};
pub use my_shop::{
    MyShopCreateCouponTool, MyShopDeleteCouponTool, MyShopListCouponsTool,
    MyShopPartialUpdateCouponTool, MyShopPartialUpdateTool, MyShopRetrieveCouponTool,
    MyShopRetrieveTool, MyShopUpdateCouponTool, MyShopUpdateTool,
};
pub use shops::{GetShopTool, ListShopsTool};
pub use themes::{ThemeRetrieveTool, ThemeSearchTool};
pub use users::UserListTool;
