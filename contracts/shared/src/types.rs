//! Common types and data structures for the worker proposal contracts
//!
//! These types cross contract boundaries: the WPS contract stores them and
//! the producer registry returns them.

use soroban_sdk::{contracttype, Address};

// ===== Amounts =====

/// An amount denominated in a specific token contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAmount {
    /// Token contract the amount is denominated in
    pub token: Address,
    /// Amount in the token's base units
    pub amount: i128,
}

// ===== Status Enums =====

/// Represents the lifecycle status of a proposal
///
/// # Transitions
/// - `Draft` → `Active`
/// - `Draft` → erased (cancelled with zero deposit)
/// - `Active` → Terminal within this contract
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Created, accepting deposits, not yet open for voting
    Draft = 0,

    /// Open for voting and considered by the allocation engine
    Active = 1,
}

/// A producer's vote on a proposal
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteChoice {
    Yes = 0,
    No = 1,
    Abstain = 2,
}

impl VoteChoice {
    /// Contribution of this choice to a proposal's net score
    pub fn weight(&self) -> i32 {
        match self {
            VoteChoice::Yes => 1,
            VoteChoice::No => -1,
            VoteChoice::Abstain => 0,
        }
    }
}

// ===== Producer Registry Types =====

/// A block producer as reported by the producer registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProducerInfo {
    /// Whether the producer is currently active
    pub is_active: bool,
    /// Total vote weight backing the producer (fixed-point)
    pub total_votes: i128,
}

/// Global producer pay state as reported by the producer registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalState {
    /// Amount available for per-vote producer pay
    pub pervote_bucket: i128,
    /// Sum of all producers' vote weight (fixed-point, same scale as `total_votes`)
    pub total_producer_vote_weight: i128,
}
