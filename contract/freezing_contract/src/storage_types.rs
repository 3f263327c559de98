use soroban_sdk::{contracttype, Address};

pub type CampaignId = u32;
/// Ledger sequence number at which a lock was created.
pub type Tick = u32;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    TierOracle,
    FreezingPeriod,
    CampaignCount,
    ActiveCampaign,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Creator(Address),
    Campaign(CampaignId),
    Lock(CampaignId, Address, Tick),
    OpenLocks(CampaignId, Address),       // ticks of the owner's open locks
    Frozen(CampaignId, Address),          // principal currently locked by the owner
    RewardWithdrawn(CampaignId, Address), // reward ever paid to the owner
    AccountCampaigns(Address),            // campaigns the owner ever locked in
}

/// Membership tier; the discriminant is the tier index reported in events.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Tier {
    Standard = 0,
    Gold = 1,
    Platinum = 2,
}

impl Tier {
    /// Yearly interest in percent.
    pub fn rate(&self) -> u32 {
        match self {
            Tier::Standard => STANDARD_RATE,
            Tier::Gold => GOLD_RATE,
            Tier::Platinum => PLATINUM_RATE,
        }
    }

    pub fn index(&self) -> u32 {
        *self as u32
    }
}

/// Reward pool of one campaign.
///
/// `reserved_obligation` is the unpaid part of the full-period interest of
/// every open lock in the campaign. It never exceeds `funded_balance` after a
/// successful reservation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BudgetLedger {
    pub funded_balance: i128,
    pub reserved_obligation: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub threshold_limit: i128,
    pub max_freezable_per_account: i128,
    pub budget: BudgetLedger,
    pub total_frozen: i128,
    pub created_at: u64,
    pub created_tick: Tick,
}

/// One freezing. Keyed by (campaign, owner, tick).
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Lock {
    pub owner: Address,
    pub tick: Tick,
    pub created_at: u64,
    pub amount: i128,
    pub rate: u32,
    pub tier: Tier,
    pub reward_withdrawn: i128,
}

/// Read-only view of an open lock.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FreezeInfo {
    pub campaign_id: CampaignId,
    pub tick: Tick,
    pub created_at: u64,
    pub amount: i128,
    pub rate: u32,
    pub tier: Tier,
    pub reward_due: i128,
    pub reward_withdrawn: i128,
    pub matured: bool,
}

/// Value moved to the owner by a claim.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClaimReceipt {
    pub reward: i128,
    pub principal: i128,
    pub locks_closed: u32,
}

impl ClaimReceipt {
    pub fn empty() -> Self {
        ClaimReceipt {
            reward: 0,
            principal: 0,
            locks_closed: 0,
        }
    }

    pub fn total(&self) -> i128 {
        self.reward + self.principal
    }

    pub(crate) fn absorb(&mut self, other: &ClaimReceipt) {
        self.reward += other.reward;
        self.principal += other.principal;
        self.locks_closed += other.locks_closed;
    }
}

// Constants
pub const ONE_YEAR: u64 = 31_536_000; // seconds
pub const PERCENT: i128 = 100;
pub const STANDARD_RATE: u32 = 2;
pub const GOLD_RATE: u32 = 3;
pub const PLATINUM_RATE: u32 = 6;
// Bounds the work a single claim does per campaign
pub const MAX_OPEN_LOCKS: u32 = 20;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
