//! String-backed identifiers used by the tables and the room registry.
//!
//! Each identifier is a distinct newtype so a room id can never be passed
//! where a state id is expected, even though both come from the same data
//! files.

use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Node in the adventure's transition graph.
    StateId
);
string_id!(
    /// Key into the [`RoomRegistry`](crate::room::RoomRegistry).
    RoomId
);
string_id!(
    /// Name of a clickable region in the layout.
    RegionId
);
string_id!(
    /// Name of a trigger prop inside a level room.
    PropId
);
string_id!(
    /// Reference to a background, sprite or dialogue asset.
    AssetKey
);

/// Normalized name of a key press as seen by the state machine.
///
/// Named keys are upper-case (`SPACE`, `ENTER`, `LEFT`), printable
/// characters are a single lower-case character (`f`, `1`). Normalization
/// happens on construction so `"space"`, `" "` and `"SPACE"` all compare
/// equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct KeySymbol(String);

impl KeySymbol {
    pub const SPACE: &'static str = "SPACE";

    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_key(raw.as_ref()))
    }

    /// Symbol for a single printable character.
    pub fn from_char(ch: char) -> Self {
        if ch == ' ' {
            return Self(Self::SPACE.to_string());
        }
        Self(ch.to_lowercase().collect())
    }

    pub fn space() -> Self {
        Self(Self::SPACE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize_key(raw: &str) -> String {
    if raw == " " {
        return KeySymbol::SPACE.to_string();
    }
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => String::new(),
        (Some(ch), None) => ch.to_lowercase().collect(),
        _ => trimmed.to_ascii_uppercase(),
    }
}

impl fmt::Display for KeySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeySymbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for KeySymbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<KeySymbol> for String {
    fn from(value: KeySymbol) -> Self {
        value.0
    }
}
