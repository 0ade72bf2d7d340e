//! The capability contract every bookmaker integration implements.
//!
//! Callers hold a `dyn Bookmaker` and never the concrete client, so adding a
//! brokerage means adding one more implementation of this trait.

pub mod dto;
pub mod session;
pub mod sportsbet_au;

pub use dto::*;
pub use session::{Session, SessionState};
pub use sportsbet_au::SportsBetAu;

use crate::error::BookmakerError;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait Bookmaker: Send + Sync {
    /// Bookmaker name for logging.
    fn name(&self) -> &str;

    fn is_authenticated(&self) -> bool;

    /// Establish a session. On success `is_authenticated` returns true afterwards.
    async fn authenticate(&mut self) -> Result<(), BookmakerError>;

    /// List the events currently on offer.
    async fn get_available_events(&self) -> Result<Vec<Event>, BookmakerError>;

    /// Place a wager.
    ///
    /// Fails with [`BookmakerError::NotAuthenticated`] when called before `authenticate`.
    async fn place_bet(
        &self,
        request: &PlaceBetRequest,
    ) -> Result<PlacementReceipt, BookmakerError>;

    /// Withdraw funds from the account.
    ///
    /// Fails with [`BookmakerError::NotAuthenticated`] when called before `authenticate`.
    async fn withdraw_funds(&self, amount: Decimal) -> Result<WithdrawalReceipt, BookmakerError>;
}
