//! Common error types for the worker proposal contracts
//!
//! This module defines a unified set of error codes shared by the WPS contract
//! and the producer registry so that every rejection carries a stable code and
//! a human-readable reason.

use soroban_sdk::contracterror;

/// Error type for the worker proposal contracts
///
/// Error ranges are organized by category:
/// - 1-19: General/Authorization errors
/// - 20-39: Not-found and state-machine errors
/// - 40-59: Input validation errors
/// - 60-79: Voter and deposit eligibility errors
/// - 80-99: Temporal and idempotence errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not authorized to perform this action
    Unauthorized = 1,

    /// Contract not initialized
    NotInitialized = 2,

    /// Contract already initialized
    AlreadyInitialized = 3,

    /// Arithmetic overflow occurred
    Overflow = 4,

    // ===== Not-found / State-machine Errors (20-39) =====
    /// Proposal not found
    ProposalNotFound = 20,

    /// A proposal with this name already exists
    ProposalAlreadyExists = 21,

    /// Proposal must be in draft status
    ProposalNotDraft = 22,

    /// Proposal must be in active status
    ProposalNotActive = 23,

    /// Vote record for the proposal not found
    VotesNotFound = 24,

    /// Deposit must be refunded before the draft can be cancelled
    DepositNotEmpty = 25,

    /// Nothing left to refund
    NoDepositToRefund = 26,

    /// Producer not found in the registry
    ProducerNotFound = 27,

    // ===== Input Validation Errors (40-59) =====
    /// Proposal name length out of bounds
    InvalidProposalName = 40,

    /// Title too long
    InvalidTitle = 41,

    /// Budget is not denominated in the configured token
    InvalidBudgetAsset = 42,

    /// Budget below the minimum monthly amount
    BudgetBelowMinimum = 43,

    /// Payments outside the allowed range
    InvalidPayments = 44,

    /// Proposal JSON is not an object or is too large
    InvalidProposalJson = 45,

    /// Amount must be positive
    InvalidAmount = 46,

    /// Settings values out of bounds
    InvalidSettings = 47,

    // ===== Eligibility Errors (60-79) =====
    /// Voter is not registered as a producer
    NotAProducer = 60,

    /// Voter is not an active producer
    ProducerNotActive = 61,

    /// Voter has no votes
    ProducerHasNoVotes = 62,

    /// Voter's per-vote pay is below the minimum
    InsufficientVotePay = 63,

    /// Deposit does not meet the required amount
    InsufficientDeposit = 64,

    // ===== Temporal / Idempotence Errors (80-99) =====
    /// Settings must be initialized first
    SettingsNotInitialized = 80,

    /// Too close to the end of the current voting period
    ActivationTooLate = 81,

    /// Voting on the proposal has not started yet
    VotingNotStarted = 82,

    /// Voting period has ended
    VotingPeriodEnded = 83,

    /// Vote is identical to the one already recorded
    VoteNotModified = 84,
}

/// Detailed error message provider
impl ContractError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            // General/Authorization
            ContractError::Unauthorized => "Caller is not authorized",
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",
            ContractError::Overflow => "Arithmetic overflow",

            // Not-found / State-machine
            ContractError::ProposalNotFound => "[proposal_name] does not exist",
            ContractError::ProposalAlreadyExists => "[proposal_name] already exists",
            ContractError::ProposalNotDraft => "proposal `status` must be in `draft`",
            ContractError::ProposalNotActive => "[proposal_name] must be active",
            ContractError::VotesNotFound => "[proposal_name] votes does not exist",
            ContractError::DepositNotEmpty => "must `refund` remaining balance before closing",
            ContractError::NoDepositToRefund => "proposal has no more deposit to refund",
            ContractError::ProducerNotFound => "[producer] is not registered",

            // Input validation
            ContractError::InvalidProposalName => {
                "[proposal_name] should be between 3 and 32 characters long"
            }
            ContractError::InvalidTitle => "[title] should be less than 1024 characters long",
            ContractError::InvalidBudgetAsset => "[budget] must use the deposit token",
            ContractError::BudgetBelowMinimum => "[budget] must be a minimum of 100 units",
            ContractError::InvalidPayments => "[payments] must be between 1 and 6 monthly periods",
            ContractError::InvalidProposalJson => {
                "[proposal_json] must be a JSON object shorter than 32768 bytes"
            }
            ContractError::InvalidAmount => "[amount] must be positive",
            ContractError::InvalidSettings => "[settings] values are out of bounds",

            // Eligibility
            ContractError::NotAProducer => "[voter] must be registered as a producer",
            ContractError::ProducerNotActive => "[voter] must be an active producer",
            ContractError::ProducerHasNoVotes => "[voter] must have votes",
            ContractError::InsufficientVotePay => "[voter] must have a vpay of 100 units or above",
            ContractError::InsufficientDeposit => {
                "deposit does not meet minimum required amount"
            }

            // Temporal / Idempotence
            ContractError::SettingsNotInitialized => "settings must first be initialized",
            ContractError::ActivationTooLate => {
                "cannot activate within 7 days of next voting period ending"
            }
            ContractError::VotingNotStarted => "[proposal_name] has not yet started",
            ContractError::VotingPeriodEnded => "[proposal_name] voting period has ended",
            ContractError::VoteNotModified => "[vote] has not been modified",
        }
    }
}
