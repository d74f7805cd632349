//! Voter eligibility derived from the producer registry.
//!
//! A voter must be a registered, active producer with a non-zero vote weight
//! whose per-vote pay reaches [`MIN_PRODUCER_VOTE_PAY`]. Nothing is cached
//! across invocations: every call builds a fresh [`EligibilitySnapshot`].

use shared::constants::MIN_PRODUCER_VOTE_PAY;
use shared::{safe_div, safe_mul, ContractError, GlobalState, ProducerInfo};
use soroban_sdk::{Address, Env, Map};

use crate::registry::ProducerRegistryClient;
use crate::storage;

/// Per-vote pay a producer earns: `floor(pervote_bucket * total_votes / total_producer_vote_weight)`
///
/// A registry reporting zero total weight pays nothing.
pub fn producer_per_vote_pay(state: &GlobalState, total_votes: i128) -> Result<i128, ContractError> {
    if state.total_producer_vote_weight <= 0 {
        return Ok(0);
    }
    safe_div(
        safe_mul(state.pervote_bucket, total_votes)?,
        state.total_producer_vote_weight,
    )
}

/// Apply the voter gate to a registry lookup
pub fn check_producer(
    producer: Option<ProducerInfo>,
    state: &GlobalState,
) -> Result<(), ContractError> {
    let producer = producer.ok_or(ContractError::NotAProducer)?;

    if !producer.is_active {
        return Err(ContractError::ProducerNotActive);
    }
    if producer.total_votes <= 0 {
        return Err(ContractError::ProducerHasNoVotes);
    }
    if producer_per_vote_pay(state, producer.total_votes)? < MIN_PRODUCER_VOTE_PAY {
        return Err(ContractError::InsufficientVotePay);
    }
    Ok(())
}

/// Registry state as seen by a single invocation.
///
/// The global state is read once and per-voter verdicts are memoised, so
/// every voter scored within one call is judged against the same data.
pub struct EligibilitySnapshot {
    env: Env,
    registry: Address,
    state: GlobalState,
    verdicts: Map<Address, bool>,
}

impl EligibilitySnapshot {
    pub fn load(env: &Env) -> Result<Self, ContractError> {
        let registry = storage::get_config(env)?.producer_registry;
        let state = ProducerRegistryClient::new(env, &registry).get_global_state();

        Ok(Self {
            env: env.clone(),
            registry,
            state,
            verdicts: Map::new(env),
        })
    }

    /// Check a voter, reporting why they are rejected
    pub fn check_voter(&mut self, voter: &Address) -> Result<(), ContractError> {
        let producer = ProducerRegistryClient::new(&self.env, &self.registry).get_producer(voter);
        let result = check_producer(producer, &self.state);
        self.verdicts.set(voter.clone(), result.is_ok());
        result
    }

    /// Whether a voter's stored choice counts towards net votes
    pub fn is_eligible(&mut self, voter: &Address) -> bool {
        if let Some(verdict) = self.verdicts.get(voter.clone()) {
            return verdict;
        }
        self.check_voter(voter).is_ok()
    }
}
