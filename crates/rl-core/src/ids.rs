//! Typed ID wrappers providing compile-time safety for entity identifiers.
//!
//! Internal entities (users, list entries, reference records) use random v4
//! UUIDs behind newtype wrappers, preventing accidental misuse (e.g.,
//! passing a `UserId` where a `StudioId` is expected). Movies are the
//! exception: their identity is an external short-string identifier, so
//! [`MovieId`] wraps a `String` instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Generate a newtype ID wrapper over `Uuid`.
///
/// The macro produces a struct with:
/// - `new()` to create a random v4 UUID
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Serialize`, `Deserialize`
/// - `Display` and `FromStr` delegating to the inner UUID
/// - `From<Uuid>` and `Into<Uuid>` conversions
/// - `Default` that generates a new random ID
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(Uuid);

            impl $name {
                /// Create a new random ID.
                #[must_use]
                pub fn new() -> Self {
                    Self(Uuid::new_v4())
                }

                /// Return the inner UUID value.
                #[must_use]
                pub fn as_uuid(&self) -> &Uuid {
                    &self.0
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = uuid::Error;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    Uuid::parse_str(s).map(Self)
                }
            }

            impl From<Uuid> for $name {
                fn from(uuid: Uuid) -> Self {
                    Self(uuid)
                }
            }

            impl From<$name> for Uuid {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

typed_id! {
    /// Unique identifier for a user account.
    UserId,
    /// Unique identifier for a favorite-list entry.
    ListEntryId,
    /// Unique identifier for a studio.
    StudioId,
    /// Unique identifier for an actor.
    ActorId,
    /// Unique identifier for a director.
    DirectorId,
}

/// External movie identifier.
///
/// Movie records carry no attributes of their own; full movie data lives in
/// an external catalog, and this ID is the key into it. At most
/// [`MovieId::MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Maximum length of an external movie identifier.
    pub const MAX_LEN: usize = 15;

    /// Wrap a raw external identifier. Length is enforced at the storage
    /// boundary, not here.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_unique() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn user_id_round_trips_through_string() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn list_entry_id_serde() {
        let id = ListEntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: ListEntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn movie_id_display() {
        let id = MovieId::from("tt0111161");
        assert_eq!(id.to_string(), "tt0111161");
        assert_eq!(id.as_str(), "tt0111161");
    }

    #[test]
    fn movie_id_serde_is_transparent() {
        let id = MovieId::from("tt0111161");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tt0111161\"");
    }
}
