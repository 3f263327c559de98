use soroban_sdk::{Address, Env, Vec};

use crate::errors::FreezingError;
use crate::storage_types::*;
use crate::utils::{extend_instance, extend_persistent};

pub fn read_admin(env: &Env) -> Result<Address, FreezingError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(FreezingError::NotInitialized)
}

pub fn read_token(env: &Env) -> Result<Address, FreezingError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(FreezingError::NotInitialized)
}

pub fn read_tier_oracle(env: &Env) -> Result<Address, FreezingError> {
    env.storage()
        .instance()
        .get(&DataKey::TierOracle)
        .ok_or(FreezingError::NotInitialized)
}

pub fn read_freezing_period(env: &Env) -> Result<u64, FreezingError> {
    env.storage()
        .instance()
        .get(&DataKey::FreezingPeriod)
        .ok_or(FreezingError::NotInitialized)
}

/// Fails with `Unauthorized` unless `caller` is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), FreezingError> {
    caller.require_auth();
    if read_admin(env)? != *caller {
        return Err(FreezingError::Unauthorized);
    }
    Ok(())
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn active_campaign_id(env: &Env) -> Option<CampaignId> {
    env.storage().instance().get(&DataKey::ActiveCampaign)
}

/// Append a campaign id and make it the one receiving new locks.
pub fn activate_next_campaign(env: &Env) -> CampaignId {
    let id = campaign_count(env);
    env.storage().instance().set(&DataKey::CampaignCount, &(id + 1));
    env.storage().instance().set(&DataKey::ActiveCampaign, &id);
    extend_instance(env);
    id
}

pub fn is_creator(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Creator(account.clone()))
        .unwrap_or(false)
}

pub fn set_creator(env: &Env, account: &Address, allowed: bool) {
    let key = PersistentKey::Creator(account.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
        extend_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Campaigns `owner` ever locked in, oldest first.
pub fn campaigns_of(env: &Env, owner: &Address) -> Vec<CampaignId> {
    env.storage()
        .persistent()
        .get(&PersistentKey::AccountCampaigns(owner.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn record_participation(env: &Env, owner: &Address, campaign_id: CampaignId) {
    let key = PersistentKey::AccountCampaigns(owner.clone());
    let mut campaigns = campaigns_of(env, owner);
    if !campaigns.contains(&campaign_id) {
        campaigns.push_back(campaign_id);
        env.storage().persistent().set(&key, &campaigns);
    }
    extend_persistent(env, &key);
}
