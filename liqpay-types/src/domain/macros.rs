//! Declarative generator for the gateway's string-backed value sets.

/// Defines an open, string-backed value set.
///
/// The generated type is a transparent wrapper over the wire token: any string
/// can be stored (and deserialized), while `is_valid()` reports whether it is
/// one of the declared members.
///
/// # Syntax
/// ```ignore
/// define_wire_values! {
///     /// Docs for the type
///     Name {
///         /// Docs for the member
///         CONST_NAME => "wire_token",
///     }
/// }
/// ```
macro_rules! define_wire_values {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        #[schema(value_type = String)]
        pub struct $name(std::borrow::Cow<'static, str>);

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self(std::borrow::Cow::Borrowed($token));
            )+

            /// Every member of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$member),+];

            /// Wraps a raw token without checking it against the set.
            pub fn new(value: impl Into<String>) -> Self {
                Self(std::borrow::Cow::Owned(value.into()))
            }

            /// Returns the exact wire token.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true iff the token is a member of the set (case-sensitive).
            pub fn is_valid(&self) -> bool {
                matches!(self.as_str(), $($token)|+)
            }
        }

        impl crate::domain::WireValue for $name {
            fn token(&self) -> &str {
                &self.0
            }

            fn is_member(&self) -> bool {
                self.is_valid()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}
