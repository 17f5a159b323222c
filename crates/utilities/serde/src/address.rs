//! Address decoding helpers.

use alloc::{collections::BTreeMap, string::String};
use alloy_primitives::{Address, U256};
use core::{fmt, str::FromStr};
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

/// An [`Address`] that may be written as a `0x`-prefixed hex string, a decimal string, or an
/// integer.
///
/// YAML loaders interpret unquoted `0x…` scalars as integers when they fit, so implementation
/// maps cannot rely on every address arriving as a string. Hex strings are validated strictly
/// (exactly 20 bytes); numeric forms are left-padded and must fit in 160 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientAddress(pub Address);

impl From<LenientAddress> for Address {
    fn from(value: LenientAddress) -> Self {
        value.0
    }
}

impl FromStr for LenientAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("0x") || s.starts_with("0X") {
            return Address::from_str(s).map(Self).map_err(|e| alloc::format!("{s}: {e}"));
        }
        let value = U256::from_str_radix(s, 10).map_err(|e| alloc::format!("{s}: {e}"))?;
        from_word(value).ok_or_else(|| alloc::format!("{s}: value does not fit in 20 bytes"))
    }
}

fn from_word(value: U256) -> Option<LenientAddress> {
    if value.bit_len() > 160 {
        return None;
    }
    let bytes = value.to_be_bytes::<32>();
    Some(LenientAddress(Address::from_slice(&bytes[12..])))
}

struct LenientAddressVisitor;

impl<'de> Visitor<'de> for LenientAddressVisitor {
    type Value = LenientAddress;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex address, a decimal string, or an unsigned integer")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        from_word(U256::from(v)).ok_or_else(|| E::custom("address out of range"))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        from_word(U256::from(v)).ok_or_else(|| E::custom("address out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        LenientAddress::from_str(v).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let text = crate::number::number_text(map)?;
        LenientAddress::from_str(&text).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for LenientAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientAddressVisitor)
    }
}

/// Deserializes an optional [`Address`], treating `null`, a missing value and the empty string
/// as unset.
pub fn deserialize_optional_address<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Address::from_str(s).map(Some).map_err(de::Error::custom),
    }
}

/// Deserializes a version tag to address mapping. A `null` mapping decodes as empty.
pub fn deserialize_versioned_addresses<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, LenientAddress>>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().map(|(tag, addr)| (tag, addr.0)).collect())
}

/// Deserializes an optional version tag to address mapping.
///
/// Both `null` and an empty mapping decode as [`None`]: a category is only present when it
/// holds at least one entry.
pub fn deserialize_optional_versioned_addresses<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, Address>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = deserialize_versioned_addresses(deserializer)?;
    Ok((!map.is_empty()).then_some(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_address")]
        addr: Option<Address>,
    }

    #[test]
    fn test_lenient_address_hex() {
        let addr: LenientAddress =
            serde_json::from_str(r#""0x5fb5139834df283b6a4bd7267952f3ea21a573f4""#).unwrap();
        assert_eq!(addr.0, address!("5fb5139834df283b6a4bd7267952f3ea21a573f4"));
    }

    #[test]
    fn test_lenient_address_rejects_short_hex() {
        assert!(serde_json::from_str::<LenientAddress>(r#""0x1234""#).is_err());
    }

    #[test]
    fn test_lenient_address_integer() {
        let addr: LenientAddress = serde_json::from_str("4096").unwrap();
        assert_eq!(addr.0, address!("0000000000000000000000000000000000001000"));
    }

    #[test]
    fn test_lenient_address_integer_above_u128() {
        // 2^128
        let addr: LenientAddress =
            serde_json::from_str("340282366920938463463374607431768211456").unwrap();
        assert_eq!(addr.0, address!("0000000100000000000000000000000000000000"));
    }

    #[test]
    fn test_lenient_address_decimal_string() {
        let addr: LenientAddress = serde_json::from_str(r#""255""#).unwrap();
        assert_eq!(addr.0, address!("00000000000000000000000000000000000000ff"));
    }

    #[test]
    fn test_lenient_address_decimal_overflow() {
        // 2^160
        let raw = r#""1461501637330902918203684832716283019655932542976""#;
        assert!(serde_json::from_str::<LenientAddress>(raw).is_err());
    }

    #[test]
    fn test_lenient_address_unquoted_yaml_hex() {
        let addr: LenientAddress =
            serde_yaml::from_str("0x5fb5139834df283b6a4bd7267952f3ea21a573f4").unwrap();
        assert_eq!(addr.0, address!("5fb5139834df283b6a4bd7267952f3ea21a573f4"));
    }

    #[test]
    fn test_optional_address_empty_is_unset() {
        let holder: Holder = serde_json::from_str(r#"{ "addr": "" }"#).unwrap();
        assert_eq!(holder.addr, None);
        let holder: Holder = serde_json::from_str(r#"{ "addr": null }"#).unwrap();
        assert_eq!(holder.addr, None);
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.addr, None);
    }

    #[test]
    fn test_optional_address_invalid() {
        assert!(serde_json::from_str::<Holder>(r#"{ "addr": "0xzz" }"#).is_err());
    }
}
