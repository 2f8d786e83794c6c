//! Newtype keys for type-safe catalog references.
//!
//! Use the `define_key!` macro to create string-keyed wrappers that prevent
//! accidentally passing a topping id where a base id is expected.

/// Macro to define a type-safe catalog key.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, `Display` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use brgrr_core::define_key;
/// define_key!(SauceId);
/// define_key!(SideId);
///
/// let sauce = SauceId::new("mayo");
/// let side = SideId::new("mayo");
///
/// // These are different types, so this won't compile:
/// // let _: SauceId = side;
/// assert_eq!(sauce.as_str(), side.as_str());
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the key and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog keys
define_key!(BaseId);
define_key!(ToppingId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_serializes_as_plain_string() {
        let id = BaseId::new("glutenFree");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"glutenFree\"");

        let parsed: ToppingId = serde_json::from_str("\"cheese\"").unwrap();
        assert_eq!(parsed, ToppingId::from("cheese"));
    }

    #[test]
    fn test_key_display_and_ordering() {
        let a = ToppingId::new("bacon");
        let b = ToppingId::new("cheese");
        assert!(a < b);
        assert_eq!(format!("{a}"), "bacon");
        assert_eq!(b.into_inner(), "cheese");
    }
}
