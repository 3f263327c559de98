use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::FreezingError;
use crate::events;
use crate::oracle::TierOracleClient;
use crate::storage_types::*;
use crate::utils::{self, extend_persistent};

impl Lock {
    /// Seconds since creation, capped at `period`.
    pub fn elapsed(&self, now: u64, period: u64) -> u64 {
        now.saturating_sub(self.created_at).min(period)
    }

    pub fn is_matured(&self, now: u64, period: u64) -> bool {
        now.saturating_sub(self.created_at) >= period
    }

    pub fn interest_potential(&self) -> Result<i128, FreezingError> {
        utils::interest_potential(self.amount, self.rate)
    }

    /// Accrued interest not yet paid out.
    pub fn reward_due(&self, now: u64, period: u64) -> Result<i128, FreezingError> {
        let accrued =
            utils::accrued_reward(self.amount, self.rate, self.elapsed(now, period), period)?;
        Ok((accrued - self.reward_withdrawn).max(0))
    }
}

impl Campaign {
    pub(crate) fn new(
        env: &Env,
        id: CampaignId,
        threshold_limit: i128,
        max_freezable_per_account: i128,
    ) -> Self {
        Campaign {
            id,
            threshold_limit,
            max_freezable_per_account,
            budget: BudgetLedger::new(),
            total_frozen: 0,
            created_at: utils::get_current_timestamp(env),
            created_tick: utils::get_current_tick(env),
        }
    }

    pub(crate) fn load(env: &Env, id: CampaignId) -> Result<Campaign, FreezingError> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Campaign(id))
            .ok_or(FreezingError::CampaignNotFound)
    }

    pub(crate) fn save(&self, env: &Env) {
        let key = PersistentKey::Campaign(self.id);
        env.storage().persistent().set(&key, self);
        extend_persistent(env, &key);
    }

    /// Reporting-only budget: the pool's free amount minus the safety margin.
    /// `lock` does not consult it.
    pub fn available_freezing_budget(&self) -> i128 {
        (self.budget.available_amount() - self.threshold_limit).max(0)
    }

    /// No budget remains to back further locks, so a successor may take over.
    pub fn is_exhausted(&self) -> bool {
        self.available_freezing_budget() == 0
    }

    pub fn frozen_of(&self, env: &Env, owner: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&PersistentKey::Frozen(self.id, owner.clone()))
            .unwrap_or(0)
    }

    pub fn reward_withdrawn_of(&self, env: &Env, owner: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&PersistentKey::RewardWithdrawn(self.id, owner.clone()))
            .unwrap_or(0)
    }

    pub fn freezable_amount(&self, env: &Env, owner: &Address) -> i128 {
        (self.max_freezable_per_account - self.frozen_of(env, owner) - self.threshold_limit).max(0)
    }

    fn open_ticks(&self, env: &Env, owner: &Address) -> Vec<Tick> {
        env.storage()
            .persistent()
            .get(&PersistentKey::OpenLocks(self.id, owner.clone()))
            .unwrap_or(Vec::new(env))
    }

    fn open_locks(&self, env: &Env, owner: &Address) -> Vec<Lock> {
        let mut locks = Vec::new(env);
        for tick in self.open_ticks(env, owner).iter() {
            if let Some(lock) = env
                .storage()
                .persistent()
                .get::<PersistentKey, Lock>(&PersistentKey::Lock(self.id, owner.clone(), tick))
            {
                locks.push_back(lock);
            }
        }
        locks
    }

    pub fn get_lock(&self, env: &Env, owner: &Address, tick: Tick) -> Option<Lock> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Lock(self.id, owner.clone(), tick))
    }

    /// Record a new lock of `amount` for `owner` at the current tick and
    /// reserve its full-period interest. Token custody is taken by the caller.
    pub(crate) fn lock(
        &mut self,
        env: &Env,
        owner: &Address,
        amount: i128,
        oracle: &TierOracleClient,
    ) -> Result<Lock, FreezingError> {
        let tick = utils::get_current_tick(env);
        let lock_key = PersistentKey::Lock(self.id, owner.clone(), tick);
        if env.storage().persistent().has(&lock_key) {
            return Err(FreezingError::DuplicateLockInTick);
        }

        let mut ticks = self.open_ticks(env, owner);
        if ticks.len() >= MAX_OPEN_LOCKS {
            return Err(FreezingError::TooManyOpenLocks);
        }

        let frozen = self
            .frozen_of(env, owner)
            .checked_add(amount)
            .ok_or(FreezingError::ArithmeticOverflow)?;
        if frozen > self.max_freezable_per_account {
            return Err(FreezingError::CapExceeded);
        }

        let tier = oracle.tier_of(owner);
        let rate = tier.rate();
        let potential = utils::interest_potential(amount, rate)?;
        self.budget.reserve(potential).map_err(|err| match err {
            FreezingError::InsufficientBudget => FreezingError::NoBudgetRemaining,
            other => other,
        })?;
        self.total_frozen += amount;

        let lock = Lock {
            owner: owner.clone(),
            tick,
            created_at: utils::get_current_timestamp(env),
            amount,
            rate,
            tier,
            reward_withdrawn: 0,
        };
        env.storage().persistent().set(&lock_key, &lock);
        extend_persistent(env, &lock_key);

        ticks.push_back(tick);
        self.write_open_ticks(env, owner, &ticks);
        self.write_frozen(env, owner, frozen);

        log!(env, "lock created", self.id, tick, amount, rate);
        events::emit_lock_created(
            env,
            events::LockCreatedEvent {
                campaign_id: self.id,
                owner: owner.clone(),
                tick,
                amount,
                rate,
                tier_index: tier.index(),
            },
        );

        Ok(lock)
    }

    /// Reward accrued and unpaid over all open locks of `owner`.
    pub fn reward_due(
        &self,
        env: &Env,
        owner: &Address,
        now: u64,
        period: u64,
    ) -> Result<i128, FreezingError> {
        let mut due = 0i128;
        for lock in self.open_locks(env, owner).iter() {
            due += lock.reward_due(now, period)?;
        }
        Ok(due)
    }

    /// What `claim` would move right now: reward due plus matured principal.
    pub fn claimable_amount(
        &self,
        env: &Env,
        owner: &Address,
        now: u64,
        period: u64,
    ) -> Result<i128, FreezingError> {
        let mut claimable = 0i128;
        for lock in self.open_locks(env, owner).iter() {
            claimable += lock.reward_due(now, period)?;
            if lock.is_matured(now, period) {
                claimable += lock.amount;
            }
        }
        Ok(claimable)
    }

    pub fn freeze_info(
        &self,
        lock: &Lock,
        now: u64,
        period: u64,
    ) -> Result<FreezeInfo, FreezingError> {
        Ok(FreezeInfo {
            campaign_id: self.id,
            tick: lock.tick,
            created_at: lock.created_at,
            amount: lock.amount,
            rate: lock.rate,
            tier: lock.tier,
            reward_due: lock.reward_due(now, period)?,
            reward_withdrawn: lock.reward_withdrawn,
            matured: lock.is_matured(now, period),
        })
    }

    pub fn locks_info(
        &self,
        env: &Env,
        owner: &Address,
        now: u64,
        period: u64,
    ) -> Result<Vec<FreezeInfo>, FreezingError> {
        let mut infos = Vec::new(env);
        for lock in self.open_locks(env, owner).iter() {
            infos.push_back(self.freeze_info(&lock, now, period)?);
        }
        Ok(infos)
    }

    /// Settle every open lock of `owner`: book the reward due and close the
    /// matured ones. Only bookkeeping happens here; the caller transfers
    /// `ClaimReceipt::total` afterwards.
    pub(crate) fn claim(
        &mut self,
        env: &Env,
        owner: &Address,
        now: u64,
        period: u64,
    ) -> Result<ClaimReceipt, FreezingError> {
        let mut receipt = ClaimReceipt::empty();
        let ticks = self.open_ticks(env, owner);
        if ticks.is_empty() {
            return Ok(receipt);
        }

        let mut remaining: Vec<Tick> = Vec::new(env);
        let mut frozen = self.frozen_of(env, owner);

        for tick in ticks.iter() {
            let lock_key = PersistentKey::Lock(self.id, owner.clone(), tick);
            let mut lock: Lock = match env.storage().persistent().get(&lock_key) {
                Some(lock) => lock,
                None => continue,
            };

            let owed = lock.reward_due(now, period)?;
            if owed > 0 {
                self.budget.pay_reward(owed)?;
                lock.reward_withdrawn += owed;
                receipt.reward += owed;

                events::emit_reward_paid(
                    env,
                    events::RewardPaidEvent {
                        campaign_id: self.id,
                        owner: owner.clone(),
                        tick,
                        amount: owed,
                        rate: lock.rate,
                        tier_index: lock.tier.index(),
                    },
                );
            }

            if lock.is_matured(now, period) {
                // Full potential is paid by now; release whatever is left anyway.
                self.budget
                    .release(lock.interest_potential()? - lock.reward_withdrawn);
                self.total_frozen -= lock.amount;
                frozen -= lock.amount;
                receipt.principal += lock.amount;
                receipt.locks_closed += 1;
                env.storage().persistent().remove(&lock_key);

                events::emit_principal_returned(
                    env,
                    events::PrincipalReturnedEvent {
                        campaign_id: self.id,
                        owner: owner.clone(),
                        tick,
                        amount: lock.amount,
                    },
                );
            } else {
                if owed > 0 {
                    env.storage().persistent().set(&lock_key, &lock);
                    extend_persistent(env, &lock_key);
                }
                remaining.push_back(tick);
            }
        }

        if receipt.total() == 0 {
            return Ok(receipt);
        }

        self.write_open_ticks(env, owner, &remaining);
        self.write_frozen(env, owner, frozen);
        if receipt.reward > 0 {
            let withdrawn = self.reward_withdrawn_of(env, owner) + receipt.reward;
            let key = PersistentKey::RewardWithdrawn(self.id, owner.clone());
            env.storage().persistent().set(&key, &withdrawn);
            extend_persistent(env, &key);
        }

        log!(env, "claim settled", self.id, receipt.reward, receipt.principal);
        Ok(receipt)
    }

    fn write_open_ticks(&self, env: &Env, owner: &Address, ticks: &Vec<Tick>) {
        let key = PersistentKey::OpenLocks(self.id, owner.clone());
        if ticks.is_empty() {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, ticks);
            extend_persistent(env, &key);
        }
    }

    fn write_frozen(&self, env: &Env, owner: &Address, frozen: i128) {
        let key = PersistentKey::Frozen(self.id, owner.clone());
        if frozen == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &frozen);
            extend_persistent(env, &key);
        }
    }
}
