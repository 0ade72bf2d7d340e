use rust_decimal::Decimal;
use thiserror::Error;

/// A bet invariant that failed during construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("target participant '{target}' must be one of the participants")]
    TargetNotParticipant { target: String },

    #[error("invalid timezone '{0}'")]
    UnknownTimezone(String),

    #[error("participants cannot be empty")]
    NoParticipants,

    #[error("stake must be positive, got {0}")]
    NonPositiveStake(Decimal),

    #[error("odds {odds} are not valid {unit} odds")]
    InvalidOdds { odds: Decimal, unit: String },

    #[error("unknown odds unit '{0}', expected decimal, fractional or american")]
    UnknownOddsUnit(String),
}

/// Errors returned while building a [`Bet`](crate::bet::Bet).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BetError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The bet was not created through the builder, or the builder was incomplete.
    #[error("{0}; use Bet::builder() to create a bet")]
    Usage(String),
}

impl BetError {
    pub fn is_validation(&self) -> bool {
        matches!(self, BetError::Validation(_))
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, BetError::Usage(_))
    }
}

/// Errors surfaced by a [`Bookmaker`](crate::bookmaker::Bookmaker) implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookmakerError {
    #[error("access denied: not authenticated with {bookmaker}")]
    NotAuthenticated { bookmaker: String },

    #[error("authentication with {bookmaker} failed: {reason}")]
    AuthenticationFailed { bookmaker: String, reason: String },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),
}
