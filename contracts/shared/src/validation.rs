//! Validation helper utilities for the worker proposal contracts
//!
//! This module provides the precondition checks shared by the proposal
//! store and the settings singleton, plus checked arithmetic on amounts.

use crate::constants::{
    is_payments_valid, MAX_PROPOSAL_JSON_LENGTH, MAX_PROPOSAL_NAME_LENGTH, MAX_TITLE_LENGTH,
    MIN_MONTHLY_BUDGET, MIN_PROPOSAL_NAME_LENGTH,
};
use crate::errors::ContractError;
use soroban_sdk::{Address, Bytes, String};

// ===== Proposal Validation =====

/// Validate the proposal name length
pub fn validate_proposal_name(proposal_name: &String) -> Result<(), ContractError> {
    let len = proposal_name.len();
    if len < MIN_PROPOSAL_NAME_LENGTH || len > MAX_PROPOSAL_NAME_LENGTH {
        return Err(ContractError::InvalidProposalName);
    }
    Ok(())
}

/// Validate the proposal title length
pub fn validate_title(title: &String) -> Result<(), ContractError> {
    if title.len() >= MAX_TITLE_LENGTH {
        return Err(ContractError::InvalidTitle);
    }
    Ok(())
}

/// Validate that a budget is denominated in the expected token
pub fn validate_budget_asset(token: &Address, expected: &Address) -> Result<(), ContractError> {
    if token != expected {
        return Err(ContractError::InvalidBudgetAsset);
    }
    Ok(())
}

/// Validate the monthly budget against the minimum
pub fn validate_monthly_budget(amount: i128) -> Result<(), ContractError> {
    if amount < MIN_MONTHLY_BUDGET {
        return Err(ContractError::BudgetBelowMinimum);
    }
    Ok(())
}

/// Validate the number of monthly payments
pub fn validate_payments(payments: u32) -> Result<(), ContractError> {
    if !is_payments_valid(payments) {
        return Err(ContractError::InvalidPayments);
    }
    Ok(())
}

/// Cheap structural check on the proposal JSON
///
/// An empty blob is accepted. Anything else must start with `{`, end with `}`
/// and stay under the size limit. The content itself is never parsed.
pub fn validate_proposal_json(json: &Bytes) -> Result<(), ContractError> {
    if json.is_empty() {
        return Ok(());
    }
    if json.len() >= MAX_PROPOSAL_JSON_LENGTH {
        return Err(ContractError::InvalidProposalJson);
    }
    if json.first() != Some(b'{') || json.last() != Some(b'}') {
        return Err(ContractError::InvalidProposalJson);
    }
    Ok(())
}

// ===== Amount Validation =====

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

// ===== State Validation =====

/// Validate that contract is not already initialized
pub fn validate_not_initialized(is_initialized: bool) -> Result<(), ContractError> {
    if is_initialized {
        return Err(ContractError::AlreadyInitialized);
    }
    Ok(())
}

// ===== Arithmetic Validation =====

/// Safely add two amounts, returning error on overflow
pub fn safe_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Safely multiply two amounts, returning error on overflow
pub fn safe_mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Safely divide two amounts, returning error on division by zero
pub fn safe_div(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::Overflow);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_proposal_name_bounds() {
        let env = Env::default();
        assert_eq!(
            validate_proposal_name(&String::from_str(&env, "ab")),
            Err(ContractError::InvalidProposalName)
        );
        assert!(validate_proposal_name(&String::from_str(&env, "abc")).is_ok());
        assert_eq!(
            validate_proposal_name(&String::from_str(
                &env,
                "this-name-is-far-too-long-for-a-proposal"
            )),
            Err(ContractError::InvalidProposalName)
        );
    }

    #[test]
    fn test_title_must_be_shorter_than_limit() {
        let env = Env::default();
        let ok = [b'a'; 1023];
        let too_long = [b'a'; 1024];
        assert!(validate_title(&String::from_bytes(&env, &ok)).is_ok());
        assert_eq!(
            validate_title(&String::from_bytes(&env, &too_long)),
            Err(ContractError::InvalidTitle)
        );
    }

    #[test]
    fn test_budget_checks() {
        let env = Env::default();
        let token = Address::generate(&env);
        let other = Address::generate(&env);
        assert!(validate_budget_asset(&token, &token).is_ok());
        assert_eq!(
            validate_budget_asset(&other, &token),
            Err(ContractError::InvalidBudgetAsset)
        );
        assert!(validate_monthly_budget(MIN_MONTHLY_BUDGET).is_ok());
        assert_eq!(
            validate_monthly_budget(MIN_MONTHLY_BUDGET - 1),
            Err(ContractError::BudgetBelowMinimum)
        );
    }

    #[test]
    fn test_payments_range() {
        assert_eq!(validate_payments(0), Err(ContractError::InvalidPayments));
        assert!(validate_payments(1).is_ok());
        assert!(validate_payments(6).is_ok());
        assert_eq!(validate_payments(7), Err(ContractError::InvalidPayments));
    }

    #[test]
    fn test_proposal_json_structure() {
        let env = Env::default();
        assert!(validate_proposal_json(&Bytes::new(&env)).is_ok());
        assert!(validate_proposal_json(&Bytes::from_slice(&env, b"{\"a\":1}")).is_ok());
        assert_eq!(
            validate_proposal_json(&Bytes::from_slice(&env, b"[1,2]")),
            Err(ContractError::InvalidProposalJson)
        );
        assert_eq!(
            validate_proposal_json(&Bytes::from_slice(&env, b"{\"a\":1")),
            Err(ContractError::InvalidProposalJson)
        );
    }

    #[test]
    fn test_safe_arithmetic() {
        assert_eq!(safe_add(1, 2), Ok(3));
        assert_eq!(safe_add(i128::MAX, 1), Err(ContractError::Overflow));
        assert_eq!(safe_div(10, 0), Err(ContractError::Overflow));
        assert_eq!(safe_mul(3, 4), Ok(12));
    }
}
