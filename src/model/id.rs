//! Store-assigned identifiers.
//!
//! Every record kind has its own newtype over the store's `u32` sequence, so a `ReviewId` can
//! never be passed where a `ProductId` is expected. The string form is `<prefix>_<n>`
//! (e.g. `product_3`) and is what goes over the wire. Parsing also accepts the bare number.

use std::fmt::Display;
use std::str::FromStr;

/// Error returned when a string is not a valid identifier for the record kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid {kind} id: {raw}")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub raw: String,
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                let digits = trimmed
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(trimmed);
                digits.parse::<u32>().map(Self).map_err(|_| ParseIdError {
                    kind: $prefix,
                    raw: raw.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                raw.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }
    };
}

record_id!(
    /// Identifier of a catalog product.
    ProductId,
    "product"
);
record_id!(
    /// Identifier of a product review.
    ReviewId,
    "review"
);
record_id!(
    /// Identifier of a customer order.
    OrderId,
    "order"
);
record_id!(
    /// Identifier of a registered user.
    UserId,
    "user"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(ProductId(3).to_string(), "product_3");
        assert_eq!("product_3".parse::<ProductId>().unwrap(), ProductId(3));
        assert_eq!("3".parse::<ProductId>().unwrap(), ProductId(3));
        assert_eq!(" order_12 ".parse::<OrderId>().unwrap(), OrderId(12));
    }

    #[test]
    fn test_rejects_other_kinds_and_garbage() {
        let err = "order_3".parse::<ProductId>().unwrap_err();
        assert_eq!(err.kind, "product");
        assert!("".parse::<UserId>().is_err());
        assert!("review_-1".parse::<ReviewId>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ProductId(8)).unwrap();
        assert_eq!(json, "\"product_8\"");
        let back: ProductId = serde_json::from_str("\"product_8\"").unwrap();
        assert_eq!(back, ProductId(8));
    }
}
