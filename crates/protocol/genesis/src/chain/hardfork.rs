//! Contains the hardfork schedule for a chain and the default propagation policy.

use core::fmt;

/// The hardforks tracked by a [`HardForkSchedule`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum HardFork {
    /// Canyon
    Canyon,
    /// Delta
    Delta,
    /// Ecotone
    Ecotone,
    /// Fjord
    Fjord,
}

impl HardFork {
    /// All tracked hardforks, in activation order.
    pub const ALL: [Self; 4] = [Self::Canyon, Self::Delta, Self::Ecotone, Self::Fjord];
}

impl fmt::Display for HardFork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canyon => f.write_str("canyon"),
            Self::Delta => f.write_str("delta"),
            Self::Ecotone => f.write_str("ecotone"),
            Self::Fjord => f.write_str("fjord"),
        }
    }
}

/// Hardfork activation schedule.
///
/// Every fork is independently optional: `None` means the fork is not scheduled. No ordering
/// between forks is enforced. On disk the times are flat `<fork>_time` keys in both network
/// defaults and chain configs.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardForkSchedule {
    /// Canyon hardfork activation time
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub canyon_time: Option<u64>,
    /// Delta hardfork activation time
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub delta_time: Option<u64>,
    /// Ecotone hardfork activation time
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ecotone_time: Option<u64>,
    /// Fjord hardfork activation time
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fjord_time: Option<u64>,
}

impl HardForkSchedule {
    /// Returns the activation time of `fork`, if scheduled.
    pub const fn activation(&self, fork: HardFork) -> Option<u64> {
        match fork {
            HardFork::Canyon => self.canyon_time,
            HardFork::Delta => self.delta_time,
            HardFork::Ecotone => self.ecotone_time,
            HardFork::Fjord => self.fjord_time,
        }
    }

    const fn activation_mut(&mut self, fork: HardFork) -> &mut Option<u64> {
        match fork {
            HardFork::Canyon => &mut self.canyon_time,
            HardFork::Delta => &mut self.delta_time,
            HardFork::Ecotone => &mut self.ecotone_time,
            HardFork::Fjord => &mut self.fjord_time,
        }
    }

    /// Reconciles this (chain) schedule with the network-wide `defaults`.
    ///
    /// A chain that joined the superchain at `superchain_time` inherits the network default
    /// for every fork it had scheduled strictly after joining; the default may be unset, which
    /// clears the fork. Forks that are unset, or scheduled at or before `superchain_time`, are
    /// kept. Without a `superchain_time` the schedule is returned unchanged.
    pub fn resolve(&self, superchain_time: Option<u64>, defaults: &Self) -> Self {
        let mut resolved = *self;
        let Some(superchain_time) = superchain_time else {
            return resolved;
        };

        for fork in HardFork::ALL {
            if self.activation(fork).is_some_and(|t| t > superchain_time) {
                *resolved.activation_mut(fork) = defaults.activation(fork);
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DEFAULTS: HardForkSchedule = HardForkSchedule {
        canyon_time: Some(1000),
        delta_time: Some(2000),
        ecotone_time: Some(3000),
        fjord_time: None,
    };

    #[test]
    fn test_resolve_without_superchain_time_is_noop() {
        let chain = HardForkSchedule {
            canyon_time: Some(10_000),
            delta_time: None,
            ecotone_time: Some(1),
            fjord_time: Some(99_999),
        };
        assert_eq!(chain.resolve(None, &DEFAULTS), chain);
    }

    #[rstest]
    #[case::later_than_join(Some(900), 500, Some(1000))]
    #[case::before_join(Some(900), 2000, Some(900))]
    #[case::at_join(Some(500), 500, Some(500))]
    #[case::unset(None, 500, None)]
    fn test_resolve_canyon(
        #[case] canyon: Option<u64>,
        #[case] superchain_time: u64,
        #[case] expected: Option<u64>,
    ) {
        let chain = HardForkSchedule { canyon_time: canyon, ..Default::default() };
        let resolved = chain.resolve(Some(superchain_time), &DEFAULTS);
        assert_eq!(resolved.canyon_time, expected);
    }

    #[test]
    fn test_resolve_clears_when_default_unset() {
        let chain = HardForkSchedule { fjord_time: Some(5000), ..Default::default() };
        let resolved = chain.resolve(Some(100), &DEFAULTS);
        assert_eq!(resolved.fjord_time, None);
    }

    #[test]
    fn test_resolve_forks_are_independent() {
        let chain = HardForkSchedule {
            canyon_time: Some(100),
            delta_time: Some(600),
            ecotone_time: None,
            fjord_time: Some(400),
        };
        let resolved = chain.resolve(Some(500), &DEFAULTS);
        assert_eq!(
            resolved,
            HardForkSchedule {
                canyon_time: Some(100),
                delta_time: Some(2000),
                ecotone_time: None,
                fjord_time: Some(400),
            }
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let chain = HardForkSchedule {
            canyon_time: Some(100),
            delta_time: Some(600),
            ecotone_time: Some(7000),
            fjord_time: Some(400),
        };
        let once = chain.resolve(Some(500), &DEFAULTS);
        let twice = once.resolve(Some(500), &DEFAULTS);
        assert_eq!(once, twice);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_hardforks_deserialize_yaml() {
        let raw = r#"
        canyon_time: 1699981200 # Tue 14 Nov 2023 17:00:00 UTC
        delta_time: 1703203200 # Fri 22 Dec 2023 00:00:00 UTC
        ecotone_time: 1708534800 # Wed 21 Feb 2024 17:00:00 UTC
        "#;
        let schedule: HardForkSchedule = serde_yaml::from_str(raw).unwrap();
        assert_eq!(
            schedule,
            HardForkSchedule {
                canyon_time: Some(1699981200),
                delta_time: Some(1703203200),
                ecotone_time: Some(1708534800),
                fjord_time: None,
            }
        );
    }
}
