#![no_std]

//! Producer registry: the read-only stake-weight oracle the WPS contract
//! consults when deciding who may vote.
//!
//! The registry is admin-fed. It records, per producer, whether the producer
//! is active and the vote weight backing it, plus the global per-vote pay
//! bucket and total producer vote weight.

use authorization::{initialize_admin, require_admin};
use shared::constants::{PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use shared::{ContractError, GlobalState, ProducerInfo};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env};

// ============================================================================
// Storage
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Producer(Address),
    GlobalState,
}

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

// ============================================================================
// Producer Registry Contract
// ============================================================================

#[contract]
pub struct ProducerRegistryContract;

#[contractimpl]
impl ProducerRegistryContract {
    /// Initialize the registry with an admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        initialize_admin(&env, &admin)?;

        let empty = GlobalState {
            pervote_bucket: 0,
            total_producer_vote_weight: 0,
        };
        env.storage().persistent().set(&DataKey::GlobalState, &empty);
        extend_ttl(&env, &DataKey::GlobalState);

        Ok(())
    }

    /// Register or update a producer
    pub fn set_producer(
        env: Env,
        admin: Address,
        producer: Address,
        is_active: bool,
        total_votes: i128,
    ) -> Result<(), ContractError> {
        require_admin(&env, &admin)?;

        if total_votes < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let key = DataKey::Producer(producer.clone());
        let info = ProducerInfo {
            is_active,
            total_votes,
        };
        env.storage().persistent().set(&key, &info);
        extend_ttl(&env, &key);

        env.events()
            .publish((symbol_short!("producer"), producer), (is_active, total_votes));

        Ok(())
    }

    /// Remove a producer from the registry
    pub fn remove_producer(env: Env, admin: Address, producer: Address) -> Result<(), ContractError> {
        require_admin(&env, &admin)?;

        let key = DataKey::Producer(producer.clone());
        if !env.storage().persistent().has(&key) {
            return Err(ContractError::ProducerNotFound);
        }
        env.storage().persistent().remove(&key);

        env.events()
            .publish((symbol_short!("unreg"), producer), ());

        Ok(())
    }

    /// Update the global per-vote pay state
    pub fn set_global_state(
        env: Env,
        admin: Address,
        pervote_bucket: i128,
        total_producer_vote_weight: i128,
    ) -> Result<(), ContractError> {
        require_admin(&env, &admin)?;

        if pervote_bucket < 0 || total_producer_vote_weight < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let state = GlobalState {
            pervote_bucket,
            total_producer_vote_weight,
        };
        env.storage().persistent().set(&DataKey::GlobalState, &state);
        extend_ttl(&env, &DataKey::GlobalState);

        env.events().publish(
            (symbol_short!("global"),),
            (pervote_bucket, total_producer_vote_weight),
        );

        Ok(())
    }

    /// Look up a producer; `None` if not registered
    pub fn get_producer(env: Env, producer: Address) -> Option<ProducerInfo> {
        env.storage()
            .persistent()
            .get(&DataKey::Producer(producer))
    }

    /// Current global per-vote pay state
    pub fn get_global_state(env: Env) -> GlobalState {
        env.storage()
            .persistent()
            .get(&DataKey::GlobalState)
            .unwrap_or(GlobalState {
                pervote_bucket: 0,
                total_producer_vote_weight: 0,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn setup() -> (Env, Address, ProducerRegistryContractClient<'static>) {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(ProducerRegistryContract, ());
        let client = ProducerRegistryContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin);

        (env, admin, client)
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_env, admin, client) = setup();
        assert_eq!(
            client.try_initialize(&admin),
            Err(Ok(ContractError::AlreadyInitialized))
        );
    }

    #[test]
    fn test_register_and_update_producer() {
        let (env, admin, client) = setup();
        let producer = Address::generate(&env);

        assert_eq!(client.get_producer(&producer), None);

        client.set_producer(&admin, &producer, &true, &1_000);
        assert_eq!(
            client.get_producer(&producer),
            Some(ProducerInfo {
                is_active: true,
                total_votes: 1_000
            })
        );

        client.set_producer(&admin, &producer, &false, &1_000);
        assert!(!client.get_producer(&producer).unwrap().is_active);

        client.remove_producer(&admin, &producer);
        assert_eq!(client.get_producer(&producer), None);
        assert_eq!(
            client.try_remove_producer(&admin, &producer),
            Err(Ok(ContractError::ProducerNotFound))
        );
    }

    #[test]
    fn test_only_admin_can_write() {
        let (env, _admin, client) = setup();
        let stranger = Address::generate(&env);
        let producer = Address::generate(&env);

        assert_eq!(
            client.try_set_producer(&stranger, &producer, &true, &1),
            Err(Ok(ContractError::Unauthorized))
        );
        assert_eq!(
            client.try_set_global_state(&stranger, &1, &1),
            Err(Ok(ContractError::Unauthorized))
        );
    }

    #[test]
    fn test_global_state() {
        let (_env, admin, client) = setup();

        assert_eq!(client.get_global_state().total_producer_vote_weight, 0);

        client.set_global_state(&admin, &5_000, &10_000);
        assert_eq!(
            client.get_global_state(),
            GlobalState {
                pervote_bucket: 5_000,
                total_producer_vote_weight: 10_000
            }
        );

        assert_eq!(
            client.try_set_global_state(&admin, &-1, &10_000),
            Err(Ok(ContractError::InvalidAmount))
        );
    }
}
