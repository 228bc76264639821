//! Versioned blob envelope
//!
//! ```text
//! {"version": 1, "data": <payload>}
//! ```
//!
//! A blob without the envelope is read as a legacy (version 0) payload.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{PersistenceError, PersistenceResult};

/// Envelope version written by this build
pub const BLOB_VERSION: u64 = 1;

const VERSION_FIELD: &str = "version";
const DATA_FIELD: &str = "data";

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u64,
    data: &'a T,
}

/// Serialize `data` inside the current envelope
pub fn encode_blob<T: Serialize>(data: &T) -> PersistenceResult<Vec<u8>> {
    Ok(serde_json::to_vec(&Envelope {
        version: BLOB_VERSION,
        data,
    })?)
}

/// Decode a blob written by any supported version
pub fn decode_blob<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> PersistenceResult<T> {
    let value: Value = serde_json::from_slice(bytes)?;

    let mut map = match value {
        Value::Object(map) if map.contains_key(VERSION_FIELD) && map.contains_key(DATA_FIELD) => {
            map
        }
        legacy => return Ok(serde_json::from_value(legacy)?),
    };

    let found = map
        .get(VERSION_FIELD)
        .and_then(Value::as_u64)
        .unwrap_or(u64::MAX);
    if found > BLOB_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            key: key.to_string(),
            found,
        });
    }

    let data = map.remove(DATA_FIELD).unwrap_or(Value::Null);
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;

    #[test]
    fn test_encode_wraps_in_envelope() {
        let bytes = encode_blob(&vec![1, 2, 3]).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_decode_current_version() {
        let bytes = encode_blob(&vec!["a".to_string()]).unwrap();
        let decoded: Vec<String> = decode_blob("tags", &bytes).unwrap();
        assert_eq!(decoded, vec!["a"]);
    }

    #[test]
    fn test_decode_legacy_payload() {
        let decoded: UserProfile =
            decode_blob("profile", br#"{"username":"alex","averageDailySpend":15}"#).unwrap();
        assert_eq!(decoded.username, "alex");
        assert_eq!(decoded.average_daily_spend, 15.0);

        let list: Vec<u32> = decode_blob("numbers", b"[4,5]").unwrap();
        assert_eq!(list, vec![4, 5]);
    }

    #[test]
    fn test_decode_rejects_newer_version() {
        let err = decode_blob::<Vec<u32>>("cravings", br#"{"version":2,"data":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_decode_garbage_is_error() {
        assert!(decode_blob::<Vec<u32>>("cravings", b"not json").is_err());
        assert!(decode_blob::<Vec<u32>>("cravings", br#"{"version":1,"data":"x"}"#).is_err());
    }
}
