/// Declares a strongly-typed identifier as a newtype over an integer scalar.
///
/// Generates the usual id derives plus `Display` and lossless conversions
/// to and from the inner type, so ids never mix across entities:
///
/// ```
/// fms_scheduling::id_type!(
///     /// Identifier for a service provider.
///     ProviderId(i64)
/// );
///
/// let id = ProviderId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[macro_export]
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub $inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> $inner {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(v: $inner) -> Self {
                Self(v)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}
