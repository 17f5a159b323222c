//! Arbitrary precision numbers handed over as maps.

use alloc::string::String;
use serde::de::{self, IgnoredAny, MapAccess};

/// Reads the decimal text of a number that does not fit a native integer.
///
/// Self-describing formats that keep numbers lossless (`serde_json` with
/// `arbitrary_precision`) pass such a number to `deserialize_any` as a map with a single entry
/// whose value is the number's text.
pub(crate) fn number_text<'de, A: MapAccess<'de>>(mut map: A) -> Result<String, A::Error> {
    let Some((IgnoredAny, text)) = map.next_entry::<IgnoredAny, String>()? else {
        return Err(de::Error::invalid_length(0, &"a single entry number map"));
    };
    if map.next_key::<IgnoredAny>()?.is_some() {
        return Err(de::Error::invalid_length(2, &"a single entry number map"));
    }
    Ok(text)
}
