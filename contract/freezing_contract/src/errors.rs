use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FreezingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NoActiveCampaign = 4,
    CampaignStillActive = 5,
    CampaignNotFound = 6,
    DuplicateLockInTick = 7,
    CapExceeded = 8,
    NoBudgetRemaining = 9,
    InsufficientBudget = 10,
    InsufficientFunds = 11,
    InvalidAmount = 12,
    InvalidConfig = 13,
    LockNotFound = 14,
    ArithmeticOverflow = 15,
    TooManyOpenLocks = 16,
}
