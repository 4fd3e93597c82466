/**
 * JSON Rendering Helpers for BSON Types
 *
 * Documents keep real `ObjectId` values, but API clients expect plain hex
 * strings (`"66f2..."`), not the extended-JSON `{"$oid": ...}` form the
 * default `Serialize` impl produces. These functions are wired into entity
 * structs with `#[serde(serialize_with = ...)]` on the serialize side only,
 * so deserialization from BSON keeps working untouched.
 */

use bson::oid::ObjectId;
use serde::Serializer;

/// Serialize an `ObjectId` as its 24-char hex string
pub fn serialize_object_id<S>(oid: &ObjectId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&oid.to_hex())
}

/// Serialize a `Vec<ObjectId>` as an array of hex strings
pub fn serialize_object_id_vec<S>(ids: &[ObjectId], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(ids.iter().map(|id| id.to_hex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Probe {
        #[serde(serialize_with = "serialize_object_id")]
        id: ObjectId,
        #[serde(serialize_with = "serialize_object_id_vec")]
        refs: Vec<ObjectId>,
    }

    #[test]
    fn test_object_id_renders_as_hex_string() {
        let id = ObjectId::parse_str("65f1a2b3c4d5e6f7a8b9c0d1").unwrap();
        let probe = Probe {
            id,
            refs: vec![id, id],
        };

        let value = serde_json::to_value(&probe).unwrap();
        assert_eq!(value["id"], "65f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(value["refs"][0], "65f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(value["refs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_vec_renders_as_empty_array() {
        let probe = Probe {
            id: ObjectId::new(),
            refs: vec![],
        };
        let value = serde_json::to_value(&probe).unwrap();
        assert!(value["refs"].as_array().unwrap().is_empty());
    }
}
