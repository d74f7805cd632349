//! Interface of the external producer registry.
//!
//! Only the read side is consumed. Any contract exposing these two functions
//! can serve as the registry.

use shared::{GlobalState, ProducerInfo};
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "ProducerRegistryClient")]
pub trait ProducerRegistryInterface {
    /// Look up a producer; `None` if not registered
    fn get_producer(env: Env, producer: Address) -> Option<ProducerInfo>;

    /// Current per-vote pay bucket and total producer vote weight
    fn get_global_state(env: Env) -> GlobalState;
}
