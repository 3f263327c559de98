use soroban_sdk::{contractclient, Address, Env};

use crate::storage_types::Tier;

/// Membership lookup consulted once per lock. Any contract exposing
/// `tier_of(account) -> Tier` can be configured as the oracle.
#[contractclient(name = "TierOracleClient")]
pub trait TierOracle {
    fn tier_of(env: Env, account: Address) -> Tier;
}
