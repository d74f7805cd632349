//! Vote ledger and net-vote scoring.

use shared::ContractError;
use soroban_sdk::{Address, Env, Map, String};

use crate::allocation;
use crate::eligibility::EligibilitySnapshot;
use crate::events;
use crate::settings;
use crate::storage;
use crate::types::{ProposalStatus, VoteChoice};

/// Signed sum of the votes cast by currently eligible voters
///
/// Ineligible voters keep their entry in the map but count as zero.
pub fn calculate_total_net_votes<F>(votes: &Map<Address, VoteChoice>, mut is_eligible: F) -> i32
where
    F: FnMut(&Address) -> bool,
{
    let mut total_net_votes: i32 = 0;
    for (voter, vote) in votes.iter() {
        if !is_eligible(&voter) {
            continue;
        }
        total_net_votes = total_net_votes.saturating_add(vote.weight());
    }
    total_net_votes
}

/// Recompute and store a proposal's net votes; returns the new score
fn update_total_net_votes(
    env: &Env,
    proposal_name: &String,
    votes: &Map<Address, VoteChoice>,
    snapshot: &mut EligibilitySnapshot,
) -> Result<i32, ContractError> {
    let mut proposal = storage::get_proposal(env, proposal_name)?;
    let total_net_votes = calculate_total_net_votes(votes, |voter| snapshot.is_eligible(voter));

    if proposal.total_net_votes != total_net_votes {
        proposal.total_net_votes = total_net_votes;
        storage::set_proposal(env, &proposal);
    }
    Ok(total_net_votes)
}

pub fn vote(env: &Env, voter: Address, proposal_name: String, vote: VoteChoice) -> Result<i32, ContractError> {
    voter.require_auth();
    let settings = settings::load_current(env)?;
    let now = env.ledger().timestamp();

    // proposal must be open for voting
    let proposal = storage::get_proposal(env, &proposal_name)?;
    if proposal.status != ProposalStatus::Active {
        return Err(ContractError::ProposalNotActive);
    }
    let mut record = storage::get_votes(env, &proposal_name)?;
    if record.start > now {
        return Err(ContractError::VotingNotStarted);
    }
    if now > record.end {
        return Err(ContractError::VotingPeriodEnded);
    }

    // voter must be an active producer earning the minimum per-vote pay
    let mut snapshot = EligibilitySnapshot::load(env)?;
    snapshot.check_voter(&voter)?;

    if record.votes.get(voter.clone()) == Some(vote) {
        return Err(ContractError::VoteNotModified);
    }
    record.votes.set(voter.clone(), vote);
    storage::set_votes(env, &record);

    let total_net_votes = update_total_net_votes(env, &proposal_name, &record.votes, &mut snapshot)?;
    events::voted(env, &voter, &proposal_name, vote, total_net_votes);

    allocation::update_eligible_proposals(env, &settings)?;
    Ok(total_net_votes)
}

/// Re-score every active proposal against the current registry state and
/// rerun the allocation pass
pub fn refresh(env: &Env) -> Result<(), ContractError> {
    let settings = settings::load_current(env)?;
    let mut snapshot = EligibilitySnapshot::load(env)?;

    for proposal_name in storage::get_status_index(env, ProposalStatus::Active).iter() {
        let record = storage::get_votes(env, &proposal_name)?;
        update_total_net_votes(env, &proposal_name, &record.votes, &mut snapshot)?;
    }

    allocation::update_eligible_proposals(env, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_net_votes_count_only_eligible_voters() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let carol = Address::generate(&env);
        let dave = Address::generate(&env);

        let mut votes = Map::new(&env);
        votes.set(alice.clone(), VoteChoice::Yes);
        votes.set(bob.clone(), VoteChoice::Yes);
        votes.set(carol.clone(), VoteChoice::No);
        votes.set(dave.clone(), VoteChoice::Abstain);

        assert_eq!(calculate_total_net_votes(&votes, |_| true), 1);
        assert_eq!(calculate_total_net_votes(&votes, |voter| *voter != carol), 2);
        assert_eq!(calculate_total_net_votes(&votes, |voter| *voter == carol), -1);
        assert_eq!(calculate_total_net_votes(&votes, |_| false), 0);
    }

    #[test]
    fn test_net_votes_recompute_is_idempotent() {
        let env = Env::default();
        let mut votes = Map::new(&env);
        for _ in 0..5 {
            votes.set(Address::generate(&env), VoteChoice::No);
        }

        let first = calculate_total_net_votes(&votes, |_| true);
        let second = calculate_total_net_votes(&votes, |_| true);
        assert_eq!(first, -5);
        assert_eq!(first, second);
    }
}
