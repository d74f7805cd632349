use authorization::ensure_owner;
use shared::constants::ACTIVATION_CUTOFF_SECONDS;
use shared::{
    validate_budget_asset, validate_monthly_budget, validate_payments,
    validate_proposal_json, validate_proposal_name, validate_title, ContractError,
};
use soroban_sdk::{Address, Bytes, Env, Map, String, Vec};

use crate::events;
use crate::settings;
use crate::storage;
use crate::types::{Proposal, ProposalStatus, TokenAmount, VoteRecord};

pub fn propose(
    env: &Env,
    proposer: Address,
    proposal_name: String,
    title: String,
    budget: TokenAmount,
    payments: u32,
    proposal_json: Bytes,
) -> Result<(), ContractError> {
    proposer.require_auth();
    storage::get_settings(env)?;
    let config = storage::get_config(env)?;

    if storage::has_proposal(env, &proposal_name) {
        return Err(ContractError::ProposalAlreadyExists);
    }
    validate_proposal_name(&proposal_name)?;
    validate_title(&title)?;
    validate_budget_asset(&budget.token, &config.token)?;
    validate_monthly_budget(budget.amount)?;
    validate_payments(payments)?;
    validate_proposal_json(&proposal_json)?;

    let proposal = Proposal {
        proposer: proposer.clone(),
        proposal_name: proposal_name.clone(),
        title,
        monthly_budget: budget.amount,
        payments,
        deposit: 0,
        status: ProposalStatus::Draft,
        eligible: false,
        total_net_votes: 0,
        proposal_json,
        created_at: env.ledger().timestamp(),
    };

    storage::set_proposal(env, &proposal);
    storage::add_to_status_index(env, ProposalStatus::Draft, &proposal_name);

    events::proposed(env, &proposer, &proposal_name, budget.amount, payments);
    Ok(())
}

pub fn activate(env: &Env, proposer: Address, proposal_name: String) -> Result<(), ContractError> {
    proposer.require_auth();
    let settings = settings::load_current(env)?;
    let mut proposal = storage::get_proposal(env, &proposal_name)?;

    ensure_owner(&proposer, &proposal.proposer)?;
    if proposal.status != ProposalStatus::Draft {
        return Err(ContractError::ProposalNotDraft);
    }
    if proposal.deposit < settings.deposit_required {
        return Err(ContractError::InsufficientDeposit);
    }

    // cannot activate within 7 days of the current voting period ending
    let now = env.ledger().timestamp();
    let in_one_week = now.saturating_add(ACTIVATION_CUTOFF_SECONDS);
    if in_one_week >= settings.current_period_end() {
        return Err(ContractError::ActivationTooLate);
    }

    // voting spans `payments` periods starting from the current one
    let end = settings
        .voting_interval
        .checked_mul(proposal.payments as u64)
        .and_then(|duration| settings.current_voting_period.checked_add(duration))
        .ok_or(ContractError::Overflow)?;

    proposal.status = ProposalStatus::Active;
    storage::set_proposal(env, &proposal);
    storage::move_status_index(env, ProposalStatus::Draft, ProposalStatus::Active, &proposal_name);

    storage::set_votes(
        env,
        &VoteRecord {
            proposal_name: proposal_name.clone(),
            start: now,
            end,
            votes: Map::new(env),
        },
    );

    events::activated(env, &proposal_name, now, end);
    Ok(())
}

pub fn cancel_draft(env: &Env, proposer: Address, proposal_name: String) -> Result<(), ContractError> {
    proposer.require_auth();
    let proposal = storage::get_proposal(env, &proposal_name)?;

    ensure_owner(&proposer, &proposal.proposer)?;
    if proposal.status != ProposalStatus::Draft {
        return Err(ContractError::ProposalNotDraft);
    }
    if proposal.deposit != 0 {
        return Err(ContractError::DepositNotEmpty);
    }

    storage::remove_proposal(env, &proposal_name);
    storage::remove_from_status_index(env, ProposalStatus::Draft, &proposal_name);

    events::cancelled(env, &proposer, &proposal_name);
    Ok(())
}

pub fn get_proposals_by_status(env: &Env, status: ProposalStatus) -> Result<Vec<Proposal>, ContractError> {
    let mut proposals = Vec::new(env);
    for proposal_name in storage::get_status_index(env, status).iter() {
        proposals.push_back(storage::get_proposal(env, &proposal_name)?);
    }
    Ok(proposals)
}
