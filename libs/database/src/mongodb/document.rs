//! Conversions between API models and stored documents.
//!
//! Models carry `_id` as a hex string so they serialize cleanly to JSON;
//! in the store the same field is a native ObjectId.

use mongodb::bson::{
    self, Bson, Document, doc,
    oid::{self, ObjectId},
};
use serde::{Serialize, de::DeserializeOwned};

const ID_FIELD: &str = "_id";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Parse a 24-char hex identifier
pub fn parse_object_id(raw: &str) -> Result<ObjectId, oid::Error> {
    ObjectId::parse_str(raw)
}

/// Filter matching a single document by identifier
pub fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Replace a native ObjectId `_id` with its hex string
pub fn expose_id(mut document: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = document.get(ID_FIELD) {
        let hex = oid.to_hex();
        document.insert(ID_FIELD, Bson::String(hex));
    }
    document
}

/// Replace a hex string `_id` with a native ObjectId; other values are kept verbatim
pub fn restore_id(mut document: Document) -> Document {
    if let Some(Bson::String(raw)) = document.get(ID_FIELD) {
        if let Ok(oid) = ObjectId::parse_str(raw) {
            document.insert(ID_FIELD, oid);
        }
    }
    document
}

/// Decode a stored document into an API model
pub fn from_stored<T: DeserializeOwned>(document: Document) -> Result<T, bson::de::Error> {
    bson::from_document(expose_id(document))
}

/// Encode an API model into a document ready for insertion
pub fn to_storable<T: Serialize>(value: &T) -> Result<Document, bson::ser::Error> {
    bson::to_document(value).map(restore_id)
}

/// Whether a driver error is a unique-index violation
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
