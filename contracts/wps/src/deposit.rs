use authorization::ensure_owner;
use shared::{safe_add, validate_positive_amount, ContractError};
use soroban_sdk::{token, Address, Env, String};

use crate::events;
use crate::storage;
use crate::types::ProposalStatus;

/// Pull `amount` of the deposit token from the proposer and record it
pub fn deposit(env: &Env, from: Address, proposal_name: String, amount: i128) -> Result<i128, ContractError> {
    from.require_auth();
    validate_positive_amount(amount)?;

    let config = storage::get_config(env)?;
    let mut proposal = storage::get_proposal(env, &proposal_name)?;

    ensure_owner(&from, &proposal.proposer)?;
    if proposal.status != ProposalStatus::Draft {
        return Err(ContractError::ProposalNotDraft);
    }

    proposal.deposit = safe_add(proposal.deposit, amount)?;
    storage::set_proposal(env, &proposal);

    token::Client::new(env, &config.token).transfer(&from, &env.current_contract_address(), &amount);

    events::deposited(env, &from, &proposal_name, amount, proposal.deposit);
    Ok(proposal.deposit)
}

/// Return the whole deposit of a draft proposal to its proposer
pub fn refund(env: &Env, proposer: Address, proposal_name: String) -> Result<i128, ContractError> {
    proposer.require_auth();

    let config = storage::get_config(env)?;
    let mut proposal = storage::get_proposal(env, &proposal_name)?;

    ensure_owner(&proposer, &proposal.proposer)?;
    if proposal.status != ProposalStatus::Draft {
        return Err(ContractError::ProposalNotDraft);
    }
    if proposal.deposit <= 0 {
        return Err(ContractError::NoDepositToRefund);
    }

    let amount = proposal.deposit;
    proposal.deposit = 0;
    storage::set_proposal(env, &proposal);

    token::Client::new(env, &config.token).transfer(&env.current_contract_address(), &proposer, &amount);

    events::refunded(env, &proposer, &proposal_name, amount);
    Ok(amount)
}
