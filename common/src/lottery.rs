//! # Lottery Model
//!
//! Value types describing the 49 balls of the game.
//!
//! * [`ball::Ball`]: one number together with its year-dependent attributes.
//! * [`zodiac::Zodiac`]: the 12-symbol cycle and the static per-symbol traits.
//! * [`catalog`]: the fixed number → color and number → element tables.
//! * [`composite`]: two-axis keys (half wave, half head, half parity).
//! * [`draw::DrawResult`]: a published draw as read from the data source.

use thiserror::Error;

/// Smallest ball number.
pub const MIN_NUMBER: u8 = 1;
/// Largest ball number, also the size of the table.
pub const MAX_NUMBER: u8 = 49;

pub fn is_ball_number(value: u32) -> bool {
    (u32::from(MIN_NUMBER)..=u32::from(MAX_NUMBER)).contains(&value)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed attribute domain.
///
/// The first literal is the canonical label used by `Display`; the following
/// ones are accepted aliases. Matching is ASCII case-insensitive.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Position inside [`Self::ALL`].
            pub fn index(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::lottery::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($label) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::lottery::UnknownLabel {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

pub mod attribute;
pub mod ball;
pub mod catalog;
pub mod composite;
pub mod draw;
pub mod zodiac;
