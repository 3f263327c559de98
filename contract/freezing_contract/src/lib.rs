#![no_std]

mod budget;
mod campaign;
mod errors;
mod events;
mod oracle;
mod registry;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};
use storage_types::*;

pub use errors::FreezingError;
pub use oracle::{TierOracle, TierOracleClient};
pub use storage_types::{
    BudgetLedger, Campaign, CampaignId, ClaimReceipt, FreezeInfo, Lock, Tick, Tier, MAX_OPEN_LOCKS,
    ONE_YEAR,
};
pub use utils::{accrued_reward, interest_potential};

#[contract]
pub struct FreezingContract;

#[contractimpl]
impl FreezingContract {
    /// Initialize the registry with its admin, staking token, tier oracle and
    /// lock duration in seconds.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        tier_oracle: Address,
        freezing_period: u64,
    ) -> Result<(), FreezingError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(FreezingError::AlreadyInitialized);
        }
        if freezing_period == 0 {
            return Err(FreezingError::InvalidConfig);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::TierOracle, &tier_oracle);
        env.storage()
            .instance()
            .set(&DataKey::FreezingPeriod, &freezing_period);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        registry::set_creator(&env, &admin, true);
        utils::extend_instance(&env);

        Ok(())
    }

    /// Allow `account` to start campaigns
    pub fn grant_creator(env: Env, admin: Address, account: Address) -> Result<(), FreezingError> {
        registry::require_admin(&env, &admin)?;
        registry::set_creator(&env, &account, true);

        events::emit_role_granted(&env, events::CreatorRoleEvent { admin, account });
        Ok(())
    }

    pub fn revoke_creator(env: Env, admin: Address, account: Address) -> Result<(), FreezingError> {
        registry::require_admin(&env, &admin)?;
        registry::set_creator(&env, &account, false);

        events::emit_role_revoked(&env, events::CreatorRoleEvent { admin, account });
        Ok(())
    }

    pub fn is_creator(env: Env, account: Address) -> bool {
        registry::is_creator(&env, &account)
    }

    /// Start a new campaign and make it the active one.
    ///
    /// Only allowed once the active campaign is exhausted, i.e. its available
    /// freezing budget has reached zero.
    pub fn add_campaign(
        env: Env,
        creator: Address,
        threshold_limit: i128,
        max_freezable_per_account: i128,
    ) -> Result<CampaignId, FreezingError> {
        creator.require_auth();
        registry::read_admin(&env)?;

        if !registry::is_creator(&env, &creator) {
            return Err(FreezingError::Unauthorized);
        }
        if threshold_limit < 0 || max_freezable_per_account <= 0 {
            return Err(FreezingError::InvalidAmount);
        }

        if let Some(active_id) = registry::active_campaign_id(&env) {
            let active = Campaign::load(&env, active_id)?;
            if !active.is_exhausted() {
                return Err(FreezingError::CampaignStillActive);
            }
        }

        let campaign_id = registry::activate_next_campaign(&env);
        let campaign = Campaign::new(&env, campaign_id, threshold_limit, max_freezable_per_account);
        campaign.save(&env);

        log!(&env, "campaign created", campaign_id);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                creator,
                threshold_limit,
                max_freezable_per_account,
            },
        );

        Ok(campaign_id)
    }

    /// Fund the reward budget of the active campaign
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FreezingError> {
        funder.require_auth();
        let campaign_id =
            registry::active_campaign_id(&env).ok_or(FreezingError::NoActiveCampaign)?;
        Self::fund_budget(&env, &funder, campaign_id, amount)
    }

    /// Fund the reward budget of any campaign, including superseded ones
    pub fn fund_campaign(
        env: Env,
        funder: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), FreezingError> {
        funder.require_auth();
        Self::fund_budget(&env, &funder, campaign_id, amount)
    }

    /// Lock `amount` in the active campaign. Returns the tick keying the lock.
    pub fn lock(env: Env, owner: Address, amount: i128) -> Result<Tick, FreezingError> {
        owner.require_auth();
        let campaign_id =
            registry::active_campaign_id(&env).ok_or(FreezingError::NoActiveCampaign)?;
        utils::validate_amount(amount)?;

        let oracle = TierOracleClient::new(&env, &registry::read_tier_oracle(&env)?);
        let token = registry::read_token(&env)?;

        let mut campaign = Campaign::load(&env, campaign_id)?;
        let lock = campaign.lock(&env, &owner, amount, &oracle)?;
        campaign.save(&env);
        registry::record_participation(&env, &owner, campaign_id);
        utils::extend_instance(&env);

        token::Client::new(&env, &token).transfer(&owner, &env.current_contract_address(), &amount);

        Ok(lock.tick)
    }

    /// Collect due rewards and matured principal from every campaign `owner`
    /// ever locked in.
    pub fn claim(env: Env, owner: Address) -> Result<ClaimReceipt, FreezingError> {
        owner.require_auth();
        let period = registry::read_freezing_period(&env)?;
        let token = registry::read_token(&env)?;
        let now = utils::get_current_timestamp(&env);

        let mut receipt = ClaimReceipt::empty();
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            let mut campaign = Campaign::load(&env, campaign_id)?;
            let settled = campaign.claim(&env, &owner, now, period)?;
            if settled.total() > 0 {
                campaign.save(&env);
                receipt.absorb(&settled);
            }
        }

        let total = receipt.total();
        if total == 0 {
            return Ok(receipt);
        }

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &owner, &total);

        events::emit_claimed(
            &env,
            events::ClaimedEvent {
                owner,
                reward: receipt.reward,
                principal: receipt.principal,
            },
        );

        Ok(receipt)
    }

    pub fn active_campaign_id(env: Env) -> Option<CampaignId> {
        registry::active_campaign_id(&env)
    }

    pub fn campaign_count(env: Env) -> u32 {
        registry::campaign_count(&env)
    }

    /// Lock duration in seconds
    pub fn freezing_period(env: Env) -> Result<u64, FreezingError> {
        registry::read_freezing_period(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, FreezingError> {
        Campaign::load(&env, campaign_id)
    }

    /// Funded balance not reserved for open locks
    pub fn available_amount(env: Env, campaign_id: CampaignId) -> Result<i128, FreezingError> {
        Ok(Campaign::load(&env, campaign_id)?.budget.available_amount())
    }

    pub fn available_freezing_budget(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<i128, FreezingError> {
        Ok(Campaign::load(&env, campaign_id)?.available_freezing_budget())
    }

    /// Principal currently locked by `owner` across all campaigns
    pub fn total_frozen_amount(env: Env, owner: Address) -> Result<i128, FreezingError> {
        let mut total = 0i128;
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            total += Campaign::load(&env, campaign_id)?.frozen_of(&env, &owner);
        }
        Ok(total)
    }

    /// How much more `owner` may lock; only the active campaign accepts locks.
    pub fn freezable_amount(env: Env, owner: Address) -> Result<i128, FreezingError> {
        match registry::active_campaign_id(&env) {
            Some(campaign_id) => {
                Ok(Campaign::load(&env, campaign_id)?.freezable_amount(&env, &owner))
            }
            None => Ok(0),
        }
    }

    /// Reward accrued and not yet paid, excluding principal
    pub fn reward_due(env: Env, owner: Address) -> Result<i128, FreezingError> {
        let period = registry::read_freezing_period(&env)?;
        let now = utils::get_current_timestamp(&env);

        let mut due = 0i128;
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            due += Campaign::load(&env, campaign_id)?.reward_due(&env, &owner, now, period)?;
        }
        Ok(due)
    }

    /// Reward due plus principal of matured locks
    pub fn claimable_amount(env: Env, owner: Address) -> Result<i128, FreezingError> {
        let period = registry::read_freezing_period(&env)?;
        let now = utils::get_current_timestamp(&env);

        let mut claimable = 0i128;
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            claimable +=
                Campaign::load(&env, campaign_id)?.claimable_amount(&env, &owner, now, period)?;
        }
        Ok(claimable)
    }

    pub fn total_reward_withdrawn(env: Env, owner: Address) -> Result<i128, FreezingError> {
        let mut withdrawn = 0i128;
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            withdrawn += Campaign::load(&env, campaign_id)?.reward_withdrawn_of(&env, &owner);
        }
        Ok(withdrawn)
    }

    /// Details of the open lock `owner` created at `tick`
    pub fn freeze_info(env: Env, owner: Address, tick: Tick) -> Result<FreezeInfo, FreezingError> {
        let period = registry::read_freezing_period(&env)?;
        let now = utils::get_current_timestamp(&env);

        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            let campaign = Campaign::load(&env, campaign_id)?;
            if let Some(lock) = campaign.get_lock(&env, &owner, tick) {
                return campaign.freeze_info(&lock, now, period);
            }
        }
        Err(FreezingError::LockNotFound)
    }

    /// All open locks of `owner`, oldest campaign first
    pub fn locks_of(env: Env, owner: Address) -> Result<Vec<FreezeInfo>, FreezingError> {
        let period = registry::read_freezing_period(&env)?;
        let now = utils::get_current_timestamp(&env);

        let mut infos = Vec::new(&env);
        for campaign_id in registry::campaigns_of(&env, &owner).iter() {
            let campaign = Campaign::load(&env, campaign_id)?;
            infos.append(&campaign.locks_info(&env, &owner, now, period)?);
        }
        Ok(infos)
    }
}

impl FreezingContract {
    fn fund_budget(
        env: &Env,
        funder: &Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), FreezingError> {
        utils::validate_amount(amount)?;
        let token = registry::read_token(env)?;

        let mut campaign = Campaign::load(env, campaign_id)?;
        campaign.budget.fund(amount)?;
        campaign.save(env);
        utils::extend_instance(env);

        token::Client::new(env, &token).transfer(funder, &env.current_contract_address(), &amount);

        events::emit_campaign_funded(
            env,
            events::CampaignFundedEvent {
                campaign_id,
                funder: funder.clone(),
                amount,
                funded_balance: campaign.budget.funded_balance,
            },
        );
        Ok(())
    }
}
