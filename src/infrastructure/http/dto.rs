//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::item::{Item, ItemDraft, ItemId};

// ============================================================================
// 通用响应
// ============================================================================

/// 只带提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Item DTOs
// ============================================================================

/// 创建/更新商品请求体
///
/// 未知字段被忽略；description 和 is_available 可省略
#[derive(Debug, Deserialize)]
pub struct ItemCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default = "default_is_available")]
    pub is_available: bool,
}

fn default_is_available() -> bool {
    true
}

impl From<ItemCreateRequest> for ItemDraft {
    fn from(req: ItemCreateRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            is_available: req.is_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
            price: item.price(),
            is_available: item.is_available(),
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub username: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: ItemCreateRequest =
            serde_json::from_str(r#"{"name": "Book", "price": 9.99}"#).unwrap();
        let draft = ItemDraft::from(req);
        assert_eq!(draft, ItemDraft::new("Book", 9.99));
    }

    #[test]
    fn test_create_request_accepts_integer_price_and_null_description() {
        let req: ItemCreateRequest = serde_json::from_str(
            r#"{"name": "Lamp", "description": null, "price": 25, "is_available": false, "color": "red"}"#,
        )
        .unwrap();
        assert_eq!(req.price, 25.0);
        assert_eq!(req.description, None);
        assert!(!req.is_available);
    }

    #[test]
    fn test_create_request_rejects_missing_price() {
        let result = serde_json::from_str::<ItemCreateRequest>(r#"{"name": "Book"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_does_not_coerce_types() {
        let string_price =
            serde_json::from_str::<ItemCreateRequest>(r#"{"name": "Book", "price": "9.99"}"#);
        assert!(string_price.is_err());

        let numeric_flag = serde_json::from_str::<ItemCreateRequest>(
            r#"{"name": "Book", "price": 9.99, "is_available": 1}"#,
        );
        assert!(numeric_flag.is_err());
    }

    #[test]
    fn test_item_response_shape() {
        let item = Item::new(ItemId::FIRST, ItemDraft::new("Book", 9.99));
        let value = serde_json::to_value(ItemResponse::from(item)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Book",
                "description": null,
                "price": 9.99,
                "is_available": true
            })
        );
    }
}
