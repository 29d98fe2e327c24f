//! Newtype IDs for type-safe entity references.
//!
//! The ISP backend hands out opaque string identifiers (numeric strings for
//! some collections, `CMP-1042`-style codes for others). Use the `define_id!`
//! macro to wrap them so that, for example, a `TechnicianId` cannot be passed
//! where a `CustomerId` is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `FromStr` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use isp_console_core::define_id;
/// define_id!(TicketId);
/// define_id!(RouterId);
///
/// let ticket = TicketId::new("T-1");
/// let router = RouterId::new("T-1");
///
/// // These are different types, so this won't compile:
/// // let _: TicketId = router;
/// # assert_eq!(ticket.as_str(), router.as_str());
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
            Default,
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

            /// Whether the backend left this ID blank.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
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

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_owned()))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(CustomerId);
define_id!(OperatorId);
define_id!(TechnicianId);
define_id!(VendorId);
define_id!(InvoiceId);
define_id!(ComplaintId);
define_id!(PlanId);
define_id!(FollowUpId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_inner_value() {
        let id = ComplaintId::new("CMP-1042");
        assert_eq!(id.to_string(), "CMP-1042");
        assert_eq!(id.as_str(), "CMP-1042");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = CustomerId::from("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let parsed: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(TechnicianId::default().is_empty());
    }
}
