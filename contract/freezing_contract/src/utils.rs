use soroban_sdk::Env;

use crate::errors::FreezingError;
use crate::storage_types::{PersistentKey, PERCENT, TTL_INSTANCE, TTL_PERSISTENT};

/// Full-period interest of `amount` at `rate` percent.
pub fn interest_potential(amount: i128, rate: u32) -> Result<i128, FreezingError> {
    amount
        .checked_mul(rate as i128)
        .map(|value| value / PERCENT)
        .ok_or(FreezingError::ArithmeticOverflow)
}

/// Interest earned after `elapsed` seconds, linear and capped at `period`.
pub fn accrued_reward(
    amount: i128,
    rate: u32,
    elapsed: u64,
    period: u64,
) -> Result<i128, FreezingError> {
    if period == 0 {
        return Err(FreezingError::InvalidConfig);
    }
    let elapsed = elapsed.min(period);
    interest_potential(amount, rate)?
        .checked_mul(elapsed as i128)
        .map(|value| value / period as i128)
        .ok_or(FreezingError::ArithmeticOverflow)
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Get current tick
pub fn get_current_tick(env: &Env) -> u32 {
    env.ledger().sequence()
}

pub fn validate_amount(amount: i128) -> Result<(), FreezingError> {
    if amount <= 0 {
        return Err(FreezingError::InvalidAmount);
    }
    Ok(())
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub(crate) fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
