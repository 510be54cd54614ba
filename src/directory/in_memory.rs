//! Directory - HashMap-backed record store.

use std::collections::HashMap;
use std::fmt;

use super::{DirectoryError, RecordStore, Versioned};
use crate::id::IdGenerator;
use crate::record::{Book, Record, User};

/// How many identifiers to try before giving up on finding a free one.
const MAX_ID_ATTEMPTS: u32 = 1024;

/// Internal stored representation of a record.
struct StoredRecord {
    bytes: Vec<u8>,
    version: u64,
    seq: u64,
}

/// Owner of all users and books for the lifetime of a session.
///
/// Storage key is `"collection:id"`.
pub struct Directory {
    storage: HashMap<String, StoredRecord>,
    next_seq: u64,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("records", &self.storage.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

impl Directory {
    /// Create an empty directory drawing identifiers from `ids`.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            storage: HashMap::new(),
            next_seq: 0,
            ids,
        }
    }

    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    fn encode<R: Record>(record: &R) -> Result<Vec<u8>, DirectoryError> {
        serde_json::to_vec(record).map_err(|e| DirectoryError::Serde(e.to_string()))
    }

    fn decode<R: Record>(stored: &StoredRecord) -> Result<Versioned<R>, DirectoryError> {
        let data: R =
            serde_json::from_slice(&stored.bytes).map_err(|e| DirectoryError::Serde(e.to_string()))?;
        Ok(Versioned {
            data,
            version: stored.version,
        })
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// An identifier not yet used in `R`'s collection.
    pub fn fresh_id<R: Record>(&mut self) -> Result<String, DirectoryError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = format!("{}{}", R::ID_PREFIX, self.ids.next_suffix());
            if !self.contains::<R>(&candidate) {
                return Ok(candidate);
            }
            tracing::debug!(collection = R::COLLECTION, id = %candidate, "identifier collision, retrying");
        }

        Err(DirectoryError::IdsExhausted {
            collection: R::COLLECTION.to_string(),
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Every user, in sign-up order.
    pub fn users(&self) -> Result<Vec<User>, DirectoryError> {
        self.all()
    }

    /// Every book, in cataloguing order.
    pub fn books(&self) -> Result<Vec<Book>, DirectoryError> {
        self.all()
    }

    fn all<R: Record>(&self) -> Result<Vec<R>, DirectoryError> {
        Ok(self
            .find_records::<R>(&|_| true)?
            .into_iter()
            .map(|versioned| versioned.data)
            .collect())
    }
}

impl RecordStore for Directory {
    fn get_record<R: Record>(&self, id: &str) -> Result<Option<Versioned<R>>, DirectoryError> {
        let key = Self::make_key(R::COLLECTION, id);
        match self.storage.get(&key) {
            Some(stored) => Ok(Some(Self::decode(stored)?)),
            None => Ok(None),
        }
    }

    fn save_record<R: Record>(&mut self, record: &R) -> Result<Versioned<R>, DirectoryError> {
        let key = Self::make_key(R::COLLECTION, record.id());
        let bytes = Self::encode(record)?;

        let existing = self.storage.get(&key).map(|s| (s.version, s.seq));
        let (version, seq) = match existing {
            Some((version, seq)) => (version + 1, seq),
            None => (1, self.take_seq()),
        };

        self.storage.insert(
            key,
            StoredRecord {
                bytes,
                version,
                seq,
            },
        );

        Ok(Versioned {
            data: record.clone(),
            version,
        })
    }

    fn insert_record<R: Record>(&mut self, record: &R) -> Result<Versioned<R>, DirectoryError> {
        let key = Self::make_key(R::COLLECTION, record.id());
        if self.storage.contains_key(&key) {
            return Err(DirectoryError::DuplicateId {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }

        let bytes = Self::encode(record)?;
        let seq = self.take_seq();
        self.storage.insert(
            key,
            StoredRecord {
                bytes,
                version: 1,
                seq,
            },
        );
        tracing::debug!(collection = R::COLLECTION, id = record.id(), "record inserted");

        Ok(Versioned {
            data: record.clone(),
            version: 1,
        })
    }

    fn update_record<R: Record>(
        &mut self,
        record: &R,
        expected_version: u64,
    ) -> Result<Versioned<R>, DirectoryError> {
        let key = Self::make_key(R::COLLECTION, record.id());
        let bytes = Self::encode(record)?;

        let stored = self
            .storage
            .get_mut(&key)
            .ok_or_else(|| DirectoryError::NotFound {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
            })?;

        if stored.version != expected_version {
            return Err(DirectoryError::VersionConflict {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.bytes = bytes;
        stored.version += 1;

        Ok(Versioned {
            data: record.clone(),
            version: stored.version,
        })
    }

    fn find_records<R: Record>(
        &self,
        predicate: &dyn Fn(&R) -> bool,
    ) -> Result<Vec<Versioned<R>>, DirectoryError> {
        let prefix = format!("{}:", R::COLLECTION);

        let mut matching: Vec<&StoredRecord> = self
            .storage
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, stored)| stored)
            .collect();
        matching.sort_by_key(|stored| stored.seq);

        let mut results = Vec::new();
        for stored in matching {
            let versioned = Self::decode::<R>(stored)?;
            if predicate(&versioned.data) {
                results.push(versioned);
            }
        }

        Ok(results)
    }

    fn contains<R: Record>(&self, id: &str) -> bool {
        self.storage.contains_key(&Self::make_key(R::COLLECTION, id))
    }
}
