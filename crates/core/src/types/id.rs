//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `AsRef<str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use nutrition_tracker_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("u-1");
/// let order_id = OrderId::new("u-1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// assert_eq!(user_id.as_str(), order_id.as_str());
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

            /// Consume the ID and return the inner string.
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

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CustomerId);
define_id!(CatalogItemId);

impl CustomerId {
    /// Prefix shared by every generated customer ID.
    pub const PREFIX: &'static str = "customer-";

    /// Build a time-based customer ID of the form `customer-<unix-millis>`.
    ///
    /// `is_taken` is consulted for each candidate; while it returns `true` the
    /// millisecond suffix is bumped, so two customers created within the same
    /// millisecond still receive distinct IDs.
    #[must_use]
    pub fn generate(now: DateTime<Utc>, is_taken: impl Fn(&Self) -> bool) -> Self {
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = Self(format!("{}{millis}", Self::PREFIX));
            if !is_taken(&candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}
