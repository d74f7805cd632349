use authorization::{initialize_admin, require_admin};
use shared::{validate_not_initialized, ContractError};
use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage;
use crate::types::{Config, Settings};

pub fn initialize(
    env: &Env,
    admin: Address,
    token: Address,
    producer_registry: Address,
) -> Result<(), ContractError> {
    validate_not_initialized(storage::has_config(env))?;
    initialize_admin(env, &admin)?;

    storage::set_config(
        env,
        &Config {
            admin: admin.clone(),
            token: token.clone(),
            producer_registry: producer_registry.clone(),
        },
    );

    events::initialized(env, &admin, &token, &producer_registry);
    Ok(())
}

pub fn validate_settings(settings: &Settings) -> Result<(), ContractError> {
    if settings.deposit_required < 0
        || settings.max_monthly_budget <= 0
        || settings.voting_interval == 0
        || settings
            .current_voting_period
            .checked_add(settings.voting_interval)
            .is_none()
    {
        return Err(ContractError::InvalidSettings);
    }
    Ok(())
}

pub fn set_settings(env: &Env, admin: Address, settings: Settings) -> Result<(), ContractError> {
    require_admin(env, &admin)?;
    validate_settings(&settings)?;

    storage::set_settings(env, &settings);
    events::settings_updated(env, &settings);
    Ok(())
}

/// Advance `current_voting_period` by whole intervals until it covers `now`.
///
/// Returns `true` if the period moved.
pub fn roll_voting_period(settings: &mut Settings, now: u64) -> bool {
    if settings.voting_interval == 0 || now < settings.current_period_end() {
        return false;
    }
    let elapsed = now - settings.current_voting_period;
    let periods = elapsed / settings.voting_interval;
    settings.current_voting_period += periods * settings.voting_interval;
    true
}

/// Load settings, applying and persisting any pending period rollover
pub fn load_current(env: &Env) -> Result<Settings, ContractError> {
    let mut settings = storage::get_settings(env)?;
    if roll_voting_period(&mut settings, env.ledger().timestamp()) {
        storage::set_settings(env, &settings);
        events::period_rolled(env, settings.current_voting_period);
    }
    Ok(settings)
}
