//! Authorization Module for the Worker Proposal System
//!
//! Admin gating and owner checks shared by the WPS contract and the producer
//! registry. `require_admin` also demands the caller's signature; owner
//! checks only compare addresses, so callers that already ran
//! `require_auth` on the same address do not ask for it twice.

#![no_std]

use shared::ContractError;
use soroban_sdk::{contracttype, Address, Env};

/// Persistent entries are bumped to roughly one year of ledgers
const ADMIN_TTL_LEDGERS: u32 = 6_312_000;

/// Storage keys owned by this module
#[contracttype]
#[derive(Clone)]
pub enum AuthKey {
    /// Contract-level admin address
    ContractAdmin,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    /// Caller does not match the required address
    Unauthorized,
    /// No admin has been configured yet
    AdminNotSet,
    /// Admin was already configured
    AdminAlreadySet,
}

impl From<AuthError> for ContractError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => ContractError::Unauthorized,
            AuthError::AdminNotSet => ContractError::NotInitialized,
            AuthError::AdminAlreadySet => ContractError::AlreadyInitialized,
        }
    }
}

/// Initialize contract admin (call once during contract initialization)
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), AuthError> {
    if has_admin(env) {
        return Err(AuthError::AdminAlreadySet);
    }
    admin.require_auth();

    env.storage().persistent().set(&AuthKey::ContractAdmin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&AuthKey::ContractAdmin, ADMIN_TTL_LEDGERS, ADMIN_TTL_LEDGERS);
    Ok(())
}

/// Whether an admin has been configured
pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&AuthKey::ContractAdmin)
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&AuthKey::ContractAdmin)
}

/// Require that `caller` is the configured admin and has signed
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), AuthError> {
    let admin = get_admin(env).ok_or(AuthError::AdminNotSet)?;
    caller.require_auth();

    if *caller != admin {
        return Err(AuthError::Unauthorized);
    }
    Ok(())
}

/// Require that `caller` is the recorded `owner` of a resource
pub fn ensure_owner(caller: &Address, owner: &Address) -> Result<(), AuthError> {
    if caller != owner {
        return Err(AuthError::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, contractimpl, testutils::Address as _};

    #[contract]
    pub struct AuthHarness;

    #[contractimpl]
    impl AuthHarness {}

    #[test]
    fn test_admin_lifecycle() {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();
        let contract_id = env.register(AuthHarness, ());
        let admin = Address::generate(&env);
        let stranger = Address::generate(&env);

        // each frame may authorize an address only once
        env.as_contract(&contract_id, || {
            assert_eq!(require_admin(&env, &admin), Err(AuthError::AdminNotSet));

            initialize_admin(&env, &admin).unwrap();
            assert_eq!(get_admin(&env), Some(admin.clone()));
            assert_eq!(
                initialize_admin(&env, &stranger),
                Err(AuthError::AdminAlreadySet)
            );
        });

        env.as_contract(&contract_id, || {
            assert!(require_admin(&env, &admin).is_ok());
        });

        env.as_contract(&contract_id, || {
            assert_eq!(require_admin(&env, &stranger), Err(AuthError::Unauthorized));
        });
    }

    #[test]
    fn test_auth_errors_map_to_contract_errors() {
        assert_eq!(ContractError::from(AuthError::Unauthorized), ContractError::Unauthorized);
        assert_eq!(ContractError::from(AuthError::AdminNotSet), ContractError::NotInitialized);
        assert_eq!(
            ContractError::from(AuthError::AdminAlreadySet),
            ContractError::AlreadyInitialized
        );
    }

    #[test]
    fn test_ensure_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let other = Address::generate(&env);

        assert!(ensure_owner(&owner, &owner).is_ok());
        assert_eq!(ensure_owner(&other, &owner), Err(AuthError::Unauthorized));
    }
}
