//! Encoding of the persisted collections.
//!
//! Each collection is stored as a JSON array of flat records. Decoding never
//! fails: an absent slot is an empty collection and an unreadable payload is
//! discarded as a whole, with a warning, rather than partially recovered.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};

pub fn decode_collection<T: DeserializeOwned>(collection: &'static str, bytes: Option<&[u8]>) -> Vec<T> {
    let Some(bytes) = bytes else {
        tracing::debug!("No stored {} found, starting empty", collection);
        return Vec::new();
    };

    match serde_json::from_slice::<Vec<T>>(bytes) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                "Stored {} could not be read ({}), starting with an empty collection",
                collection,
                e
            );
            Vec::new()
        }
    }
}

pub fn encode_collection<T: Serialize>(collection: &'static str, items: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec(items).map_err(|source| CatalogError::Serialization { collection, source })
}
