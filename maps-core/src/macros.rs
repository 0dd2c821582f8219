//! Declarative helpers for closed integer-coded enums.

/// Declare an enum with a closed range of integer codes.
///
/// The generated type derives the usual value traits and gains
/// `ALL`, `code()` and `name()`. It also implements `TryFrom<i32>`, which
/// returns [`MapsError::InvalidParameter`](crate::MapsError::InvalidParameter)
/// for codes outside the range.
///
/// # Examples
/// ```
/// use maps_core::closed_enum;
///
/// closed_enum! {
///     /// Compass quadrant.
///     pub enum Quadrant: "quadrant" {
///         /// North-east.
///         NorthEast = 0,
///         /// South-west.
///         SouthWest = 1,
///     }
/// }
///
/// assert_eq!(Quadrant::try_from(1), Ok(Quadrant::SouthWest));
/// assert!(Quadrant::try_from(2).is_err());
/// assert_eq!(Quadrant::NorthEast.name(), "NorthEast");
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $what:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Integer code of this variant.
            #[must_use]
            pub const fn code(self) -> i32 {
                self as i32
            }

            /// Variant name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::core::convert::TryFrom<i32> for $name {
            type Error = $crate::MapsError;

            fn try_from(code: i32) -> ::core::result::Result<Self, Self::Error> {
                match code {
                    $($value => Ok(Self::$variant),)+
                    _ => Err($crate::MapsError::InvalidParameter {
                        reason: concat!("unknown ", $what, " code"),
                    }),
                }
            }
        }
    };
}
