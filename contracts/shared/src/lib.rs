#![no_std]
//! # Shared Worker Proposal Contracts Library
//!
//! Reusable types, errors, constants, and validation helpers for the worker
//! proposal system (WPS) contract and the producer registry it reads from.
//!
//! ## Modules
//!
//! - `errors` - Error codes and messages shared by all contracts
//! - `types` - Cross-contract data types (ProposalStatus, VoteChoice, ProducerInfo, ...)
//! - `constants` - Limits and configuration constants
//! - `validation` - Reusable validation helper functions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::types::{ProposalStatus, VoteChoice};
//! use shared::validation::validate_proposal_name;
//! use shared::constants::MIN_MONTHLY_BUDGET;
//! ```

pub mod errors;
pub mod types;
pub mod constants;
pub mod validation;

// Re-export commonly used types
pub use errors::ContractError;
pub use types::{GlobalState, ProducerInfo, ProposalStatus, TokenAmount, VoteChoice};
pub use validation::{
    safe_add, safe_div, safe_mul, validate_budget_asset, validate_monthly_budget,
    validate_not_initialized, validate_payments,
    validate_positive_amount, validate_proposal_json, validate_proposal_name, validate_title,
};
