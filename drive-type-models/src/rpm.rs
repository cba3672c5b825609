// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Rotational speed label of a drive
///
/// Callers supply either a number (`7200`, `-1`, `7200.0`) or free text (`"SSD"`); both are
/// kept as text so the label renders exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rpm(String);

impl Rpm {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Rpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! rpm_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Rpm {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

rpm_from_integer!(u16, u32, u64, i32, i64);

impl From<&str> for Rpm {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Rpm {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for Rpm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl Serialize for Rpm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Rpm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Unsigned(u64),
            Signed(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
            // Whole floats keep their fractional digit: 7200.0 stays "7200.0"
            Raw::Float(n) if n.is_finite() && n.fract() == 0.0 => Self(format!("{n:.1}")),
            Raw::Float(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}
