//! Contract events published by the WPS contract.

use soroban_sdk::{symbol_short, Address, Env, String};

use crate::types::{Settings, VoteChoice};

pub fn initialized(env: &Env, admin: &Address, token: &Address, producer_registry: &Address) {
    env.events().publish(
        (symbol_short!("init"), admin.clone()),
        (token.clone(), producer_registry.clone()),
    );
}

pub fn settings_updated(env: &Env, settings: &Settings) {
    env.events()
        .publish((symbol_short!("settings"),), settings.clone());
}

pub fn period_rolled(env: &Env, current_voting_period: u64) {
    env.events()
        .publish((symbol_short!("period"),), current_voting_period);
}

pub fn proposed(env: &Env, proposer: &Address, proposal_name: &String, monthly_budget: i128, payments: u32) {
    env.events().publish(
        (symbol_short!("proposed"), proposer.clone()),
        (proposal_name.clone(), monthly_budget, payments),
    );
}

pub fn deposited(env: &Env, from: &Address, proposal_name: &String, amount: i128, deposit: i128) {
    env.events().publish(
        (symbol_short!("deposit"), from.clone()),
        (proposal_name.clone(), amount, deposit),
    );
}

pub fn refunded(env: &Env, proposer: &Address, proposal_name: &String, amount: i128) {
    env.events().publish(
        (symbol_short!("refund"), proposer.clone()),
        (proposal_name.clone(), amount),
    );
}

pub fn activated(env: &Env, proposal_name: &String, start: u64, end: u64) {
    env.events().publish(
        (symbol_short!("activate"), proposal_name.clone()),
        (start, end),
    );
}

pub fn cancelled(env: &Env, proposer: &Address, proposal_name: &String) {
    env.events().publish(
        (symbol_short!("cancel"), proposer.clone()),
        proposal_name.clone(),
    );
}

pub fn voted(env: &Env, voter: &Address, proposal_name: &String, vote: VoteChoice, total_net_votes: i32) {
    env.events().publish(
        (symbol_short!("vote"), voter.clone(), proposal_name.clone()),
        (vote, total_net_votes),
    );
}

pub fn eligibility_changed(env: &Env, proposal_name: &String, eligible: bool) {
    env.events().publish(
        (symbol_short!("eligible"), proposal_name.clone()),
        eligible,
    );
}
