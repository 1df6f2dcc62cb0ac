use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid {kind} id '{value}': expected '{kind}_<n>' with n >= 1")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            pub(crate) const fn new(n: u64) -> Self {
                Self(n)
            }

            /// The counter value this id was minted from.
            pub const fn index(self) -> u64 {
                self.0
            }

            /// Parses `s` only when it is exactly the display form of an id, so padded or
            /// signed numbers such as `atom_07` are rejected.
            pub(crate) fn from_canonical(s: &str) -> Option<Self> {
                s.parse::<Self>().ok().filter(|id| id.to_string() == s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let err = || ParseIdError {
                    kind: $prefix,
                    value: s.to_string(),
                };
                let digits = s
                    .strip_prefix(concat!($prefix, "_"))
                    .ok_or_else(err)?;
                match digits.parse::<u64>() {
                    Ok(n) if n >= 1 => Ok(Self(n)),
                    _ => Err(err()),
                }
            }
        }
    };
}

define_id!(
    /// Stable identifier of an atom within a [`MoleculeGraph`](super::graph::MoleculeGraph).
    ///
    /// Ids are minted from a monotone counter and never reused, so ordering by id is
    /// ordering by creation.
    AtomId,
    "atom"
);

define_id!(
    /// Stable identifier of a bond within a [`MoleculeGraph`](super::graph::MoleculeGraph).
    BondId,
    "bond"
);
