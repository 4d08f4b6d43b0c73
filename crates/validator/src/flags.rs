//! Built-in type flags for flag validators.
//!
//! Option definitions describe the expected shape of a value with a bitmask
//! of [`TypeFlags`]. Internally the bitmask is resolved once into a
//! [`TypeSpec`], which is what validation actually dispatches on.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

bitflags! {
    /// Bitmask of built-in value types.
    ///
    /// Constants are bit-disjoint and may be combined, e.g.
    /// `TypeFlags::INT | TypeFlags::ARRAY` for a comma-separated list of
    /// integers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        /// Base-10 integer.
        const INT = 0b0000_0001;
        /// Floating-point number.
        const FLOAT = 0b0000_0010;
        /// Boolean (`true`/`false`/`yes`/`no`/`1`/`0`).
        const BOOL = 0b0000_0100;
        /// Comma-separated list of the leaf type.
        const ARRAY = 0b0000_1000;

        /// Alias of [`TypeFlags::INT`].
        const INTEGER = Self::INT.bits();
        /// Alias of [`TypeFlags::BOOL`].
        const BOOLEAN = Self::BOOL.bits();
        /// Alias of [`TypeFlags::ARRAY`].
        const LIST = Self::ARRAY.bits();
    }
}

impl TypeFlags {
    /// Keeps only the known bits of a raw mask.
    ///
    /// Returns `None` when no known flag is set, which is the condition for
    /// an invalid flag validator.
    #[must_use]
    pub fn from_raw(bits: u32) -> Option<Self> {
        let flags = Self::from_bits_truncate(bits);
        (!flags.is_empty()).then_some(flags)
    }

    /// Resolves the mask into its tagged form.
    #[must_use]
    pub fn type_spec(self) -> TypeSpec {
        TypeSpec::from(self)
    }
}

/// Error returned when a flag name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type flag '{0}'")]
pub struct UnknownFlag(pub String);

impl FromStr for TypeFlags {
    type Err = UnknownFlag;

    /// Parses names separated by `|` or `,`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(['|', ','])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |acc, name| {
                let flag = match name.to_ascii_lowercase().as_str() {
                    "int" | "integer" => Self::INT,
                    "float" => Self::FLOAT,
                    "bool" | "boolean" => Self::BOOL,
                    "array" | "list" => Self::ARRAY,
                    _ => return Err(UnknownFlag(name.to_owned())),
                };
                Ok(acc | flag)
            })
    }
}

impl fmt::Display for TypeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::INT, "int"),
            (Self::FLOAT, "float"),
            (Self::BOOL, "bool"),
            (Self::ARRAY, "array"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();
        f.write_str(&names.join("|"))
    }
}

impl Serialize for TypeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = TypeFlags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flag mask, a list of flag names or a string like \"int|array\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TypeFlags, E> {
                let bits = u32::try_from(v).map_err(E::custom)?;
                Ok(TypeFlags::from_bits_retain(bits))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TypeFlags, E> {
                let bits = u32::try_from(v).map_err(E::custom)?;
                Ok(TypeFlags::from_bits_retain(bits))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeFlags, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<TypeFlags, A::Error> {
                let mut flags = TypeFlags::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    flags |= name.parse::<TypeFlags>().map_err(de::Error::custom)?;
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_any(FlagsVisitor)
    }
}

// ============================================================================
// TAGGED FORM
// ============================================================================

/// Scalar type a single (non-list) value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafType {
    /// Base-10 integer.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
}

impl LeafType {
    /// Upper-case label used in error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved flag validator: an optional leaf type plus an "is a list" modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    /// Leaf coercion, `None` when only [`TypeFlags::ARRAY`] was given.
    pub leaf: Option<LeafType>,
    /// Split string input on commas and validate each element.
    pub array: bool,
}

impl From<TypeFlags> for TypeSpec {
    fn from(flags: TypeFlags) -> Self {
        // INT wins over FLOAT wins over BOOL.
        let leaf = if flags.contains(TypeFlags::INT) {
            Some(LeafType::Int)
        } else if flags.contains(TypeFlags::FLOAT) {
            Some(LeafType::Float)
        } else if flags.contains(TypeFlags::BOOL) {
            Some(LeafType::Bool)
        } else {
            None
        };
        Self {
            leaf,
            array: flags.contains(TypeFlags::ARRAY),
        }
    }
}
