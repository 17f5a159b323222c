//! Arbitrary precision quantities.

use alloc::string::String;
use alloy_primitives::U256;
use core::{fmt, str::FromStr};
use serde::{
    Deserializer,
    de::{self, MapAccess, Visitor},
};

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = U256;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer, or a decimal or 0x-prefixed hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(U256::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(U256::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v).map(U256::from).map_err(|_| E::custom("quantity must be non-negative"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        U256::from_str(v.trim()).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        self.visit_str(&crate::number::number_text(map)?)
    }
}

/// Deserializes a non-negative [`U256`] quantity from an integer or a string.
pub fn deserialize_quantity<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuantityVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Block {
        #[serde(deserialize_with = "deserialize_quantity")]
        number: U256,
    }

    #[test]
    fn test_quantity_forms() {
        for raw in [
            r#"{"number": 17422590}"#,
            r#"{"number": "17422590"}"#,
            r#"{"number": "0x109d8fe"}"#,
        ] {
            let block: Block = serde_json::from_str(raw).unwrap();
            assert_eq!(block.number, U256::from(17422590u64));
        }
    }

    #[test]
    fn test_quantity_above_u64() {
        let expected = U256::from(u64::MAX) + U256::from(1u64);

        let block: Block = serde_json::from_str(r#"{"number": 18446744073709551616}"#).unwrap();
        assert_eq!(block.number, expected);

        let block: Block = serde_yaml::from_str("number: 18446744073709551616").unwrap();
        assert_eq!(block.number, expected);

        let raw = alloc::format!(r#"{{"number": {}}}"#, U256::MAX);
        let block: Block = serde_json::from_str(&raw).unwrap();
        assert_eq!(block.number, U256::MAX);
    }

    #[test]
    fn test_quantity_negative() {
        assert!(serde_json::from_str::<Block>(r#"{"number": -1}"#).is_err());
    }
}
