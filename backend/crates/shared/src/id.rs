//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Feature crates declare a
//! marker type per entity and alias it:
//!
//! ```
//! use kernel::id::Id;
//!
//! pub struct CompanyMarker;
//! pub type CompanyId = Id<CompanyMarker>;
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Prevents mixing up IDs of different entities (a `CompanyId` cannot be
/// passed where a `JobId` is expected) while storing a plain UUID v4.
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

// Manual impls: markers are bare unit types, so derives would put
// unnecessary bounds on `T`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse from a string representation
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CompanyMarker;
    struct JobMarker;
    type CompanyId = Id<CompanyMarker>;
    type JobId = Id<JobMarker>;

    #[test]
    fn test_id_type_safety() {
        let company_id: CompanyId = Id::new();
        let job_id: JobId = Id::new();

        // These are different types, cannot be mixed
        let _c: Uuid = company_id.into_uuid();
        let _j: Uuid = job_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: CompanyId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_parse_str() {
        let uuid = Uuid::new_v4();
        let id: JobId = Id::parse_str(&uuid.to_string()).unwrap();
        assert_eq!(id.into_uuid(), uuid);

        assert!(JobId::parse_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_id_new_is_v4() {
        let id: CompanyId = Id::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }
}
