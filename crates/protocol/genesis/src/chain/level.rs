//! Level of integration with the superchain.

/// Level of integration with the superchain.
///
/// Encoded on disk as a small integer. Values outside the two known levels are rejected
/// rather than mapped to a default.
#[derive(Debug, Clone, Copy, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(u8)]
pub enum SuperchainLevel {
    /// Frontier chains are chains with customizations beyond the
    /// standard OP Stack configuration and are considered "advanced".
    Frontier = 1,
    /// Standard chains don't have any customizations beyond the
    /// standard OP Stack configuration and are considered "vanilla".
    #[default]
    Standard = 2,
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;

    #[test]
    fn test_level_deserialize_out_of_domain() {
        let level = serde_json::from_str::<SuperchainLevel>("1").unwrap();
        assert_eq!(level, SuperchainLevel::Frontier);
        let level = serde_json::from_str::<SuperchainLevel>("2").unwrap();
        assert_eq!(level, SuperchainLevel::Standard);
        assert!(serde_json::from_str::<SuperchainLevel>("0").is_err());
        assert!(serde_json::from_str::<SuperchainLevel>("7").is_err());
    }
}
