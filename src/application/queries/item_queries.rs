//! Item Queries

use crate::domain::item::ItemId;

/// 获取商品详情查询
#[derive(Debug, Clone)]
pub struct GetItem {
    pub item_id: ItemId,
}

/// 列出所有商品查询
#[derive(Debug, Clone)]
pub struct ListItems;
