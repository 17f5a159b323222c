//! Helpers for building registry trees in tests.

use crate::layout::{
    ADDRESSES_DIR, CONFIGS_DIR, EXTRA_DIR, GENESIS_SYSTEM_CONFIGS_DIR,
    GLOBAL_IMPLEMENTATIONS_FILE, IMPLEMENTATIONS_DIR, NETWORK_IMPLEMENTATIONS_DIR,
    SUPERCHAIN_CONFIG_FILE,
};
use alloy_primitives::Address;
use std::{fs, path::Path};
use tempfile::TempDir;

/// A deterministic address: `seed` in the first byte, `index` in the last.
pub(crate) fn addr(seed: u8, index: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = seed;
    bytes[19] = index;
    Address::from(bytes)
}

pub(crate) fn superchain_yaml(name: &str, canyon_time: Option<u64>) -> String {
    let mut out = format!(
        r#"name: {name}
l1:
  chain_id: 11155111
  public_rpc: https://rpc.example
  explorer: https://explorer.example
protocol_versions_addr: "{}"
superchain_config_addr: ""
"#,
        addr(0xee, 1)
    );
    if let Some(canyon) = canyon_time {
        out.push_str(&format!("canyon_time: {canyon}\n"));
    }
    out
}

pub(crate) fn chain_yaml(
    name: &str,
    chain_id: u64,
    superchain_time: Option<u64>,
    canyon_time: Option<u64>,
) -> String {
    let mut out = format!(
        r#"name: {name}
chain_id: {chain_id}
public_rpc: https://rpc.{chain_id}.example
sequencer_rpc: https://sequencer.{chain_id}.example
explorer: https://explorer.{chain_id}.example
superchain_level: 2
batch_inbox_addr: "0xff00000000000000000000000000000000000001"
genesis:
  l1:
    hash: "0x438335a20d98863a4c0c97999eb2481921ccd28553eac6f913af7c12aec04108"
    number: 17422590
  l2:
    hash: "0xdbf6a80fef073de06add9b0d14026d6e5a86c85f6d102c36d3d8e9cf89c2afd3"
    number: 0
  l2_time: 1686068903
"#
    );
    if let Some(time) = superchain_time {
        out.push_str(&format!("superchain_time: {time}\n"));
    }
    if let Some(canyon) = canyon_time {
        out.push_str(&format!("canyon_time: {canyon}\n"));
    }
    out
}

pub(crate) fn address_list_json(seed: u8) -> String {
    let keys = [
        "AddressManager",
        "L1CrossDomainMessengerProxy",
        "L1ERC721BridgeProxy",
        "L1StandardBridgeProxy",
        "OptimismMintableERC20FactoryProxy",
        "OptimismPortalProxy",
        "SystemConfigProxy",
        "SystemConfigOwner",
        "ProxyAdmin",
        "ProxyAdminOwner",
        "Guardian",
    ];
    let entries = keys
        .iter()
        .zip(1u8..)
        .map(|(key, index)| format!("  \"{key}\": \"{}\"", addr(seed, index)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{\n{entries}\n}}\n")
}

pub(crate) fn genesis_system_config_json(batcher: Address) -> String {
    format!(
        r#"{{
  "batcherAddr": "{batcher}",
  "overhead": "0x00000000000000000000000000000000000000000000000000000000000000bc",
  "scalar": "0x00000000000000000000000000000000000000000000000000000000000a6fe0",
  "gasLimit": 30000000,
  "baseFeeScalar": 1368,
  "blobBaseFeeScalar": 810949
}}
"#
    )
}

/// A registry tree rooted in a temporary directory.
#[derive(Debug)]
pub(crate) struct RegistryFixture {
    dir: TempDir,
}

impl RegistryFixture {
    /// Creates an empty tree with an empty global implementations file.
    pub(crate) fn new() -> Self {
        let fixture = Self { dir: tempfile::tempdir().expect("tempdir") };
        fs::create_dir_all(fixture.root().join(CONFIGS_DIR)).expect("configs dir");
        fixture.implementations("");
        fixture
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn write(&self, relative: impl AsRef<Path>, contents: &str) -> &Self {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(path, contents).expect("write fixture file");
        self
    }

    pub(crate) fn superchain(&self, network: &str, canyon_time: Option<u64>) -> &Self {
        self.write(
            Path::new(CONFIGS_DIR).join(network).join(SUPERCHAIN_CONFIG_FILE),
            &superchain_yaml(network, canyon_time),
        )
    }

    pub(crate) fn chain_config(&self, network: &str, chain: &str, yaml: &str) -> &Self {
        self.write(Path::new(CONFIGS_DIR).join(network).join(format!("{chain}.yaml")), yaml)
    }

    pub(crate) fn addresses(&self, network: &str, chain: &str, json: &str) -> &Self {
        self.write(
            Path::new(EXTRA_DIR).join(ADDRESSES_DIR).join(network).join(format!("{chain}.json")),
            json,
        )
    }

    pub(crate) fn system_config(&self, network: &str, chain: &str, json: &str) -> &Self {
        self.write(
            Path::new(EXTRA_DIR)
                .join(GENESIS_SYSTEM_CONFIGS_DIR)
                .join(network)
                .join(format!("{chain}.json")),
            json,
        )
    }

    /// Writes a complete chain: config, address list and genesis system config.
    pub(crate) fn chain(
        &self,
        network: &str,
        chain: &str,
        chain_id: u64,
        superchain_time: Option<u64>,
        canyon_time: Option<u64>,
    ) -> &Self {
        let seed = (chain_id % 251) as u8;
        let yaml = chain_yaml(chain, chain_id, superchain_time, canyon_time);
        self.chain_config(network, chain, &yaml)
            .addresses(network, chain, &address_list_json(seed))
            .system_config(network, chain, &genesis_system_config_json(addr(seed, 0xba)))
    }

    pub(crate) fn implementations(&self, yaml: &str) -> &Self {
        self.write(Path::new(IMPLEMENTATIONS_DIR).join(GLOBAL_IMPLEMENTATIONS_FILE), yaml)
    }

    pub(crate) fn network_implementations(&self, network: &str, yaml: &str) -> &Self {
        self.write(
            Path::new(IMPLEMENTATIONS_DIR)
                .join(NETWORK_IMPLEMENTATIONS_DIR)
                .join(format!("{network}.yaml")),
            yaml,
        )
    }
}
