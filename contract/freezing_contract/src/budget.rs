use crate::errors::FreezingError;
use crate::storage_types::BudgetLedger;

impl BudgetLedger {
    pub fn new() -> Self {
        BudgetLedger {
            funded_balance: 0,
            reserved_obligation: 0,
        }
    }

    /// Add value to the pool. Reservations are untouched.
    pub(crate) fn fund(&mut self, amount: i128) -> Result<(), FreezingError> {
        self.funded_balance = self
            .funded_balance
            .checked_add(amount)
            .ok_or(FreezingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Commit future payout capacity. Rejects any reservation that would leave
    /// the pool short, by even one unit.
    pub(crate) fn reserve(&mut self, amount: i128) -> Result<(), FreezingError> {
        let reserved = self
            .reserved_obligation
            .checked_add(amount)
            .ok_or(FreezingError::ArithmeticOverflow)?;
        if reserved > self.funded_balance {
            return Err(FreezingError::InsufficientBudget);
        }
        self.reserved_obligation = reserved;
        Ok(())
    }

    /// Drop an unrealised obligation. Clamped at zero.
    pub(crate) fn release(&mut self, amount: i128) {
        self.reserved_obligation = self.reserved_obligation.saturating_sub(amount).max(0);
    }

    /// Book a reward payout. The paid part stops being reserved.
    ///
    /// The caller moves the tokens once all bookkeeping of the invocation has
    /// succeeded.
    pub(crate) fn pay_reward(&mut self, amount: i128) -> Result<(), FreezingError> {
        if amount > self.funded_balance {
            return Err(FreezingError::InsufficientFunds);
        }
        self.funded_balance -= amount;
        self.release(amount);
        Ok(())
    }

    pub fn available_amount(&self) -> i128 {
        (self.funded_balance - self.reserved_obligation).max(0)
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}
