// Closed enumerations with a fixed wire spelling per member

/// Declares an enum together with its bidirectional wire table.
///
/// Each member is listed exactly once next to its wire string, so
/// `as_wire` and `from_wire` are generated from the same table and cannot
/// drift apart. Unknown strings parse into [`Error::UnknownEnumValue`].
///
/// [`Error::UnknownEnumValue`]: crate::error::Error::UnknownEnumValue
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_wire(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire(value).ok_or_else(|| $crate::error::Error::UnknownEnumValue {
                    kind: $label,
                    value: value.to_string(),
                })
            }
        }
    };
}

pub(crate) use wire_enum;
