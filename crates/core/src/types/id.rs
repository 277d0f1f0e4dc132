//! Integer identifiers.

/// Declare an `i32`-backed identifier newtype.
///
/// Attributes written before the name (usually doc comments) are forwarded
/// to the generated struct. Each identifier is its own type, so a product id
/// can't be handed to something expecting another kind of id.
///
/// ```rust
/// # use shophub_core::define_id;
/// define_id! {
///     /// Identifies a gift card.
///     GiftCardId
/// }
///
/// let card = GiftCardId::new(12);
/// assert_eq!(card.as_i32(), 12);
/// assert_eq!("12".parse::<GiftCardId>().ok(), Some(card));
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Key of a catalog product, stable for the life of a session.
    ProductId
}
