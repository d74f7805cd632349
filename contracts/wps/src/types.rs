use soroban_sdk::{contracttype, Address, Bytes, Map, String};

pub use shared::types::{ProposalStatus, TokenAmount, VoteChoice};

/// A worker proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub proposer: Address,
    pub proposal_name: String,
    pub title: String,
    /// Amount requested per voting period, in the deposit token's base units
    pub monthly_budget: i128,
    /// Number of voting periods the budget is requested for
    pub payments: u32,
    /// Refundable stake currently held by the contract
    pub deposit: i128,
    pub status: ProposalStatus,
    /// Set only by the allocation pass
    pub eligible: bool,
    /// Set only by the net-vote recompute
    pub total_net_votes: i32,
    pub proposal_json: Bytes,
    pub created_at: u64,
}

/// Votes cast on an active proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub proposal_name: String,
    pub start: u64,
    pub end: u64,
    pub votes: Map<Address, VoteChoice>,
}

/// Global WPS settings
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub deposit_required: i128,
    pub max_monthly_budget: i128,
    pub vote_margin: i32,
    /// Length of a voting period in seconds
    pub voting_interval: u64,
    /// Start timestamp of the current voting period
    pub current_voting_period: u64,
}

impl Settings {
    /// Timestamp at which the current voting period ends
    pub fn current_period_end(&self) -> u64 {
        self.current_voting_period.saturating_add(self.voting_interval)
    }
}

/// Addresses fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub token: Address,
    pub producer_registry: Address,
}

/// A proposal's position in the net-vote ranking
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RankedProposal {
    pub proposal_name: String,
    pub total_net_votes: i32,
    pub monthly_budget: i128,
}
