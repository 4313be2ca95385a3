/// Adds conversions `from` and `into` integer to enums
///
/// Takes an enum that must have a `#[repr()]` as first meta field and assigns a
/// value to all enum variants. Values that have no variant end up in an
/// additional `Unknown` variant.
///
/// ```
/// # use aiffmid_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u32)]
///     #[derive(Debug, PartialEq)]
///     pub enum Tag {
///         Form = 0x464F_524D,
///         Aiff = 0x4149_4646,
///     }
/// );
/// let int: u32 = Tag::Aiff.into();
/// assert_eq!(int, 0x4149_4646);
/// assert_eq!(Tag::from(0x464F_524D), Tag::Form);
/// assert_eq!(Tag::from(3), Tag::Unknown(3));
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($type:ty)]$(#[$meta:meta])* $visibility:vis enum $enum_name:ident {
        $($(#[$variant_meta:meta])* $variant_name:ident = $variant_value:expr,)*
    }) => {
        #[repr($type)]
        $(#[$meta])*
        $visibility enum $enum_name {
            $($(#[$variant_meta])* $variant_name = $variant_value,)*
            Unknown($type)
        }

        impl std::convert::From<$type> for $enum_name {
            fn from(v: $type) -> Self {
                match v {
                    $(x if x == $variant_value => Self::$variant_name,)*
                    other => Self::Unknown(other),
                }
            }
        }

        impl std::convert::From<$enum_name> for $type {
            fn from(v: $enum_name) -> $type {
                match v {
                    $($enum_name::$variant_name => $variant_value,)*
                    $enum_name::Unknown(other) => other,
                }
            }
        }
    }
}

pub use convertible_enum;
