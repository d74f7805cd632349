//! Eligibility allocation engine.
//!
//! Active proposals are ranked by net votes (highest first, ties broken by
//! proposal name) and walked once. A proposal is funded when it reaches the
//! vote margin and its monthly budget still fits under the cap. A proposal
//! that does not fit does not end the walk; smaller proposals further down
//! may still use the remaining headroom. Every pass is a full recompute.

use shared::ContractError;
use soroban_sdk::{Env, Vec};

use crate::events;
use crate::storage;
use crate::types::{ProposalStatus, RankedProposal, Settings};

/// Whether `a` is ranked strictly ahead of `b`
fn ranks_before(a: &RankedProposal, b: &RankedProposal) -> bool {
    if a.total_net_votes != b.total_net_votes {
        return a.total_net_votes > b.total_net_votes;
    }
    a.proposal_name < b.proposal_name
}

/// Order candidates by net votes descending, then proposal name ascending
pub fn rank_proposals(env: &Env, candidates: &Vec<RankedProposal>) -> Vec<RankedProposal> {
    let mut ranked: Vec<RankedProposal> = Vec::new(env);

    for candidate in candidates.iter() {
        let mut position = ranked.len();
        for (i, existing) in ranked.iter().enumerate() {
            if ranks_before(&candidate, &existing) {
                position = i as u32;
                break;
            }
        }
        ranked.insert(position, candidate);
    }

    ranked
}

/// Decide eligibility for an already ranked list
///
/// Returns one flag per entry of `ranked`, in the same order.
pub fn allocate(
    env: &Env,
    ranked: &Vec<RankedProposal>,
    vote_margin: i32,
    max_monthly_budget: i128,
) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::new(env);
    let mut total_payout: i128 = 0;

    for proposal in ranked.iter() {
        let is_min_vote_margin = proposal.total_net_votes >= vote_margin;
        // a budget that overflows the running total cannot fit under the cap
        let with_proposal = total_payout
            .checked_add(proposal.monthly_budget)
            .filter(|total| *total <= max_monthly_budget);

        match with_proposal {
            Some(total) if is_min_vote_margin => {
                total_payout = total;
                flags.push_back(true);
            }
            _ => flags.push_back(false),
        }
    }

    flags
}

/// Recompute `eligible` for every active proposal
///
/// Only proposals whose flag changes are written back.
pub fn update_eligible_proposals(env: &Env, settings: &Settings) -> Result<(), ContractError> {
    let mut candidates: Vec<RankedProposal> = Vec::new(env);
    for proposal_name in storage::get_status_index(env, ProposalStatus::Active).iter() {
        let proposal = storage::get_proposal(env, &proposal_name)?;
        candidates.push_back(RankedProposal {
            proposal_name,
            total_net_votes: proposal.total_net_votes,
            monthly_budget: proposal.monthly_budget,
        });
    }

    let ranked = rank_proposals(env, &candidates);
    let flags = allocate(
        env,
        &ranked,
        settings.vote_margin,
        settings.max_monthly_budget,
    );

    for (entry, eligible) in ranked.iter().zip(flags.iter()) {
        let mut proposal = storage::get_proposal(env, &entry.proposal_name)?;
        if proposal.eligible != eligible {
            proposal.eligible = eligible;
            storage::set_proposal(env, &proposal);
            events::eligibility_changed(env, &entry.proposal_name, eligible);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, String};

    fn entry(env: &Env, name: &str, total_net_votes: i32, monthly_budget: i128) -> RankedProposal {
        RankedProposal {
            proposal_name: String::from_str(env, name),
            total_net_votes,
            monthly_budget,
        }
    }

    fn names(env: &Env, ranked: &Vec<RankedProposal>) -> Vec<String> {
        let mut out = Vec::new(env);
        for entry in ranked.iter() {
            out.push_back(entry.proposal_name);
        }
        out
    }

    #[test]
    fn test_rank_by_score_then_name() {
        let env = Env::default();
        let candidates = vec![
            &env,
            entry(&env, "delta", 1, 10),
            entry(&env, "bravo", 3, 10),
            entry(&env, "charlie", 3, 10),
            entry(&env, "alpha", -2, 10),
            entry(&env, "echo", 5, 10),
        ];

        let ranked = rank_proposals(&env, &candidates);
        assert_eq!(
            names(&env, &ranked),
            vec![
                &env,
                String::from_str(&env, "echo"),
                String::from_str(&env, "bravo"),
                String::from_str(&env, "charlie"),
                String::from_str(&env, "delta"),
                String::from_str(&env, "alpha"),
            ]
        );
    }

    #[test]
    fn test_rank_is_independent_of_input_order() {
        let env = Env::default();
        let forward = vec![
            &env,
            entry(&env, "aaa", 2, 10),
            entry(&env, "bbb", 2, 10),
            entry(&env, "ccc", 4, 10),
        ];
        let backward = vec![
            &env,
            entry(&env, "ccc", 4, 10),
            entry(&env, "bbb", 2, 10),
            entry(&env, "aaa", 2, 10),
        ];
        assert_eq!(rank_proposals(&env, &forward), rank_proposals(&env, &backward));
    }

    #[test]
    fn test_second_proposal_exceeds_cap() {
        let env = Env::default();
        let ranked = rank_proposals(
            &env,
            &vec![&env, entry(&env, "bbb", 3, 80), entry(&env, "aaa", 5, 80)],
        );

        let flags = allocate(&env, &ranked, 1, 100);
        // aaa (5) is funded, bbb (3) would bring the total to 160
        assert_eq!(flags, vec![&env, true, false]);
    }

    #[test]
    fn test_smaller_proposal_fills_gap() {
        let env = Env::default();
        let ranked = rank_proposals(
            &env,
            &vec![
                &env,
                entry(&env, "big", 9, 70),
                entry(&env, "huge", 8, 50),
                entry(&env, "small", 2, 30),
            ],
        );

        let flags = allocate(&env, &ranked, 1, 100);
        assert_eq!(flags, vec![&env, true, false, true]);
    }

    #[test]
    fn test_oversized_budget_is_skipped() {
        let env = Env::default();
        let ranked = rank_proposals(
            &env,
            &vec![
                &env,
                entry(&env, "first", 4, 60),
                entry(&env, "greedy", 3, i128::MAX),
                entry(&env, "last", 1, 40),
            ],
        );

        let flags = allocate(&env, &ranked, 1, 100);
        assert_eq!(flags, vec![&env, true, false, true]);
    }

    #[test]
    fn test_vote_margin_is_inclusive() {
        let env = Env::default();
        let ranked = rank_proposals(
            &env,
            &vec![
                &env,
                entry(&env, "at", 2, 10),
                entry(&env, "below", 1, 10),
                entry(&env, "negative", -4, 10),
            ],
        );

        let flags = allocate(&env, &ranked, 2, 1_000);
        assert_eq!(flags, vec![&env, true, false, false]);
    }

    #[test]
    fn test_exact_cap_is_allowed() {
        let env = Env::default();
        let ranked = rank_proposals(
            &env,
            &vec![&env, entry(&env, "one", 1, 60), entry(&env, "two", 1, 40)],
        );

        let flags = allocate(&env, &ranked, 0, 100);
        assert_eq!(flags, vec![&env, true, true]);
    }

    #[test]
    fn test_empty_ranking() {
        let env = Env::default();
        let ranked = rank_proposals(&env, &Vec::new(&env));
        assert!(allocate(&env, &ranked, 0, 100).is_empty());
    }
}
