//! Persisted record types.
//!
//! Field names follow the stored JSON layout (`bun`, `toppings`, `subtotal`,
//! `tax`, `total`, ...), so records written by earlier versions of the
//! builder stay readable.

pub mod favorite;
pub mod order;
pub mod session;

pub use favorite::Favorite;
pub use order::OrderRecord;
pub use session::{SessionUser, keys as storage_keys};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brgrr_core::{Amount, BaseId, Breakdown, ToppingId, Username};

    use super::*;

    #[test]
    fn test_favorite_json_layout() {
        let fav = Favorite {
            base: BaseId::new("classic"),
            toppings: vec![ToppingId::new("cheese"), ToppingId::new("bacon")],
            price: Breakdown::from_subtotal(Amount::new(80)),
            name: Some("Usual".to_string()),
        };

        let value = serde_json::to_value(&fav).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "bun": "classic",
                "toppings": ["cheese", "bacon"],
                "subtotal": 80,
                "tax": 4,
                "total": 84,
                "name": "Usual"
            })
        );
    }

    #[test]
    fn test_favorite_accepts_null_or_missing_name() {
        let with_null: Favorite = serde_json::from_str(
            r#"{"bun":"sesame","toppings":[],"subtotal":35,"tax":2,"total":37,"name":null}"#,
        )
        .unwrap();
        assert_eq!(with_null.name, None);

        let missing: Favorite = serde_json::from_str(
            r#"{"bun":"sesame","toppings":[],"subtotal":35,"tax":2,"total":37}"#,
        )
        .unwrap();
        assert_eq!(missing, with_null);
    }

    #[test]
    fn test_order_record_json_layout() {
        let order: OrderRecord = serde_json::from_str(
            r#"{"bun":"glutenFree","toppings":["tomato"],"subtotal":50,"tax":3,"total":53,
                "username":"Guest","timestamp":1700000000000}"#,
        )
        .unwrap();

        assert_eq!(order.base, BaseId::new("glutenFree"));
        assert_eq!(order.price.total, Amount::new(53));
        assert_eq!(order.username, "Guest");
        assert_eq!(order.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_session_user_rejects_blank_username() {
        let user: SessionUser = serde_json::from_str(r#"{"username":"ada"}"#).unwrap();
        assert_eq!(user.username, Username::parse("ada").unwrap());

        assert!(serde_json::from_str::<SessionUser>(r#"{"username":""}"#).is_err());
    }
}
