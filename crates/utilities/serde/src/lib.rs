#![doc = include_str!("../README.md")]
#![doc(
    issue_tracker_base_url = "https://github.com/ethereum-optimism/superchain-registry/issues/"
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod address;
pub use address::{
    LenientAddress, deserialize_optional_address, deserialize_optional_versioned_addresses,
    deserialize_versioned_addresses,
};

mod number;

mod quantity;
pub use quantity::deserialize_quantity;
