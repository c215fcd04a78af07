use crate::prelude::*;

/// md5 hash stored as a single integer, so comparisons are O(1)
/// 
/// Note that this item is serialized and deserialized as a string, in the usual md5 hash format
#[derive(Copy, Clone, Eq, Default, Debug, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from="String", into="String")]
pub struct Md5Hash(u128);

impl TryFrom<String> for Md5Hash {
    type Error = std::num::ParseIntError;

    fn try_from(s:String) -> Result<Self, Self::Error> {
        Ok(Self(u128::from_str_radix(&s, 16)?))
    }
}

impl From<Md5Hash> for String {
    fn from(hash: Md5Hash) -> String {
        hash.to_string()
    }
}

impl From<u128> for Md5Hash {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Md5Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}


#[test]
fn beatmap_hash_serializes_as_hex() {
    let map = Beatmap::parse_str("").unwrap();
    assert_eq!(map.beatmap_hash.to_string(), "d41d8cd98f00b204e9800998ecf8427e");

    let json = serde_json::to_string(&map.beatmap_hash).unwrap();
    assert_eq!(json, "\"d41d8cd98f00b204e9800998ecf8427e\"");
    let back: Md5Hash = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map.beatmap_hash);

    assert!(serde_json::from_str::<Md5Hash>("\"not hex\"").is_err());
}

#[test]
fn md5_of_known_input() {
    // md5("") is a well known value
    assert_eq!(md5(b"").to_string(), "d41d8cd98f00b204e9800998ecf8427e");
}
