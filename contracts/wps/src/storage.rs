use shared::constants::{PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use shared::ContractError;
use soroban_sdk::{contracttype, Env, String, Vec};

use crate::types::{Config, Proposal, ProposalStatus, Settings, VoteRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Settings,
    Proposal(String),
    Votes(String),
    /// Proposal names grouped by status, in insertion order.
    ///
    /// One ledger entry per status; the active list only grows, since
    /// proposals never leave the active state.
    StatusIndex(ProposalStatus),
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

// ── Settings ─────────────────────────────────────────────────────────────────

pub fn set_settings(env: &Env, settings: &Settings) {
    env.storage().instance().set(&DataKey::Settings, settings);
    extend_instance(env);
}

pub fn get_settings(env: &Env) -> Result<Settings, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Settings)
        .ok_or(ContractError::SettingsNotInitialized)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn has_proposal(env: &Env, proposal_name: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Proposal(proposal_name.clone()))
}

pub fn get_proposal(env: &Env, proposal_name: &String) -> Result<Proposal, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_name.clone()))
        .ok_or(ContractError::ProposalNotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.proposal_name.clone());
    env.storage().persistent().set(&key, proposal);
    extend_persistent(env, &key);
}

pub fn remove_proposal(env: &Env, proposal_name: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Proposal(proposal_name.clone()));
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn get_votes(env: &Env, proposal_name: &String) -> Result<VoteRecord, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Votes(proposal_name.clone()))
        .ok_or(ContractError::VotesNotFound)
}

pub fn set_votes(env: &Env, record: &VoteRecord) {
    let key = DataKey::Votes(record.proposal_name.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

// ── Status index ─────────────────────────────────────────────────────────────

pub fn get_status_index(env: &Env, status: ProposalStatus) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::StatusIndex(status))
        .unwrap_or_else(|| Vec::new(env))
}

fn set_status_index(env: &Env, status: ProposalStatus, names: &Vec<String>) {
    let key = DataKey::StatusIndex(status);
    env.storage().persistent().set(&key, names);
    extend_persistent(env, &key);
}

pub fn add_to_status_index(env: &Env, status: ProposalStatus, proposal_name: &String) {
    let mut names = get_status_index(env, status);
    names.push_back(proposal_name.clone());
    set_status_index(env, status, &names);
}

pub fn remove_from_status_index(env: &Env, status: ProposalStatus, proposal_name: &String) {
    let mut names = get_status_index(env, status);
    if let Some(index) = names.first_index_of(proposal_name) {
        names.remove(index);
        set_status_index(env, status, &names);
    }
}

/// Move a proposal between status buckets of the index
pub fn move_status_index(
    env: &Env,
    from: ProposalStatus,
    to: ProposalStatus,
    proposal_name: &String,
) {
    remove_from_status_index(env, from, proposal_name);
    add_to_status_index(env, to, proposal_name);
}
