use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignId, Tick};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub threshold_limit: i128,
    pub max_freezable_per_account: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFundedEvent {
    pub campaign_id: CampaignId,
    pub funder: Address,
    pub amount: i128,
    pub funded_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockCreatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub tick: Tick,
    pub amount: i128,
    pub rate: u32,
    pub tier_index: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub tick: Tick,
    pub amount: i128,
    pub rate: u32,
    pub tier_index: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrincipalReturnedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub tick: Tick,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub owner: Address,
    pub reward: i128,
    pub principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorRoleEvent {
    pub admin: Address,
    pub account: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_funded"),), event);
}

pub fn emit_lock_created(env: &Env, event: LockCreatedEvent) {
    env.events().publish((Symbol::new(env, "lock_created"),), event);
}

pub fn emit_reward_paid(env: &Env, event: RewardPaidEvent) {
    env.events().publish((Symbol::new(env, "reward_paid"),), event);
}

pub fn emit_principal_returned(env: &Env, event: PrincipalReturnedEvent) {
    env.events()
        .publish((Symbol::new(env, "principal_returned"),), event);
}

pub fn emit_claimed(env: &Env, event: ClaimedEvent) {
    env.events().publish((Symbol::new(env, "claimed"),), event);
}

pub fn emit_role_granted(env: &Env, event: CreatorRoleEvent) {
    env.events().publish((Symbol::new(env, "role_granted"),), event);
}

pub fn emit_role_revoked(env: &Env, event: CreatorRoleEvent) {
    env.events().publish((Symbol::new(env, "role_revoked"),), event);
}
