//! Batch-write wire types.
//!
//! These mirror the key-value store's `BatchWriteItem` request shape: a
//! table name mapped to a list of `PutRequest` envelopes, each holding an
//! `Item` of type-tagged attribute values.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single attribute value tagged with its primitive kind.
///
/// Numbers travel as strings, so `N` holds the decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    S(String),
    N(String),
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::S(value.into())
    }

    pub fn number(value: impl ToString) -> Self {
        AttributeValue::N(value.to_string())
    }

    /// The raw value regardless of tag.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeValue::S(s) | AttributeValue::N(s) => s,
        }
    }
}

/// One generated pet, in store attribute encoding. Field order is the
/// serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PetItem {
    pub pet_id: AttributeValue,
    pub age: AttributeValue,
    pub breed: AttributeValue,
    pub created_at: AttributeValue,
    pub description: AttributeValue,
    pub gender: AttributeValue,
    pub name: AttributeValue,
    pub shelter_id: AttributeValue,
    pub species: AttributeValue,
    pub status: AttributeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutRequest {
    #[serde(rename = "Item")]
    pub item: PetItem,
}

/// The create envelope around one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    #[serde(rename = "PutRequest")]
    pub put_request: PutRequest,
}

impl WriteRequest {
    pub fn put(item: PetItem) -> Self {
        WriteRequest {
            put_request: PutRequest { item },
        }
    }

    pub fn item(&self) -> &PetItem {
        &self.put_request.item
    }
}

/// The complete payload: `{ "<table>": [ <WriteRequest>, ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWritePayload {
    pub table_name: String,
    pub requests: Vec<WriteRequest>,
}

impl BatchWritePayload {
    pub fn new(table_name: impl Into<String>, items: impl IntoIterator<Item = PetItem>) -> Self {
        BatchWritePayload {
            table_name: table_name.into(),
            requests: items.into_iter().map(WriteRequest::put).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl Serialize for BatchWritePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.table_name, &self.requests)?;
        map.end()
    }
}
