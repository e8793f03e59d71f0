//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Menu data is produced outside this workspace, so IDs are opaque strings
/// rather than database sequences. The generated type has:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use qr_menu_core::define_id;
/// define_id!(TableId);
/// define_id!(WaiterId);
///
/// let table = TableId::new("12");
/// let waiter = WaiterId::new("12");
///
/// // These are different types, so this won't compile:
/// // let _: TableId = waiter;
/// assert_eq!(table.as_str(), waiter.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
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
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
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

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(MenuItemId);
define_id!(OrderId);

/// Prefix carried by every generated order ID.
pub const ORDER_ID_PREFIX: &str = "ORD-";

impl OrderId {
    /// Build an order ID from a creation timestamp in epoch milliseconds.
    ///
    /// ```
    /// use qr_menu_core::OrderId;
    ///
    /// assert_eq!(OrderId::from_timestamp_millis(1_700_000_000_123).as_str(), "ORD-1700000000123");
    /// ```
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("{ORDER_ID_PREFIX}{millis}"))
    }

    /// Recover the creation timestamp from a generated ID.
    ///
    /// Returns `None` for IDs that were not produced by
    /// [`OrderId::from_timestamp_millis`].
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.strip_prefix(ORDER_ID_PREFIX)?.parse().ok()
    }
}
