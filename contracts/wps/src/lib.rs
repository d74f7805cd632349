#![no_std]

//! Worker proposal system (WPS).
//!
//! Proposers submit funding proposals, stake a refundable deposit and
//! activate them for voting. Active block producers vote yes/no/abstain;
//! after every vote the contract ranks all active proposals by net votes and
//! marks as `eligible` those that reach the vote margin and fit under the
//! monthly budget cap.

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, String, Vec};

mod allocation;
mod deposit;
mod eligibility;
mod events;
mod proposal;
mod registry;
mod settings;
mod storage;
mod types;
mod vote;

pub use registry::{ProducerRegistryClient, ProducerRegistryInterface};
pub use shared::ContractError;
pub use types::{
    Config, Proposal, ProposalStatus, RankedProposal, Settings, TokenAmount, VoteChoice,
    VoteRecord,
};

#[contract]
pub struct WpsContract;

#[contractimpl]
impl WpsContract {
    // -------------------------------
    // Setup
    // -------------------------------
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        producer_registry: Address,
    ) -> Result<(), ContractError> {
        settings::initialize(&env, admin, token, producer_registry)
    }

    pub fn set_settings(env: Env, admin: Address, settings: Settings) -> Result<(), ContractError> {
        settings::set_settings(&env, admin, settings)
    }

    // -------------------------------
    // Proposals
    // -------------------------------
    pub fn propose(
        env: Env,
        proposer: Address,
        proposal_name: String,
        title: String,
        budget: TokenAmount,
        payments: u32,
        proposal_json: Bytes,
    ) -> Result<(), ContractError> {
        proposal::propose(&env, proposer, proposal_name, title, budget, payments, proposal_json)
    }

    pub fn activate(env: Env, proposer: Address, proposal_name: String) -> Result<(), ContractError> {
        proposal::activate(&env, proposer, proposal_name)
    }

    pub fn cancel_draft(env: Env, proposer: Address, proposal_name: String) -> Result<(), ContractError> {
        proposal::cancel_draft(&env, proposer, proposal_name)
    }

    // -------------------------------
    // Deposits
    // -------------------------------
    pub fn deposit(env: Env, from: Address, proposal_name: String, amount: i128) -> Result<i128, ContractError> {
        deposit::deposit(&env, from, proposal_name, amount)
    }

    pub fn refund(env: Env, proposer: Address, proposal_name: String) -> Result<i128, ContractError> {
        deposit::refund(&env, proposer, proposal_name)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(env: Env, voter: Address, proposal_name: String, vote: VoteChoice) -> Result<i32, ContractError> {
        vote::vote(&env, voter, proposal_name, vote)
    }

    pub fn refresh(env: Env) -> Result<(), ContractError> {
        vote::refresh(&env)
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env)
    }

    pub fn get_settings(env: Env) -> Result<Settings, ContractError> {
        storage::get_settings(&env)
    }

    pub fn get_proposal(env: Env, proposal_name: String) -> Result<Proposal, ContractError> {
        storage::get_proposal(&env, &proposal_name)
    }

    pub fn get_proposals_by_status(env: Env, status: ProposalStatus) -> Result<Vec<Proposal>, ContractError> {
        proposal::get_proposals_by_status(&env, status)
    }

    pub fn get_votes(env: Env, proposal_name: String) -> Result<VoteRecord, ContractError> {
        storage::get_votes(&env, &proposal_name)
    }
}
