use super::dto::{Event, PlaceBetRequest, PlacementReceipt, WithdrawalReceipt};
use super::session::Session;
use super::Bookmaker;
use crate::config::BookmakerCredentials;
use crate::error::BookmakerError;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

const NAME: &str = "SportsBetAU";

/// SportsBet Australia client.
///
/// No network calls are made yet: authentication always succeeds unless blank
/// credentials were configured, and placements are only logged.
#[derive(Debug, Default)]
pub struct SportsBetAu {
    session: Session,
    credentials: Option<BookmakerCredentials>,
    next_ref: AtomicU64,
}

impl SportsBetAu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: BookmakerCredentials) -> Self {
        Self {
            credentials: Some(credentials),
            ..Self::default()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn ensure_authenticated(&self) -> Result<(), BookmakerError> {
        if self.session.is_authenticated() {
            return Ok(());
        }
        warn!("Access denied: not authenticated with {}", NAME);
        Err(BookmakerError::NotAuthenticated {
            bookmaker: NAME.to_string(),
        })
    }

    fn next_reference(&self, prefix: &str) -> String {
        let n = self.next_ref.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{:06}", prefix, n)
    }
}

#[async_trait]
impl Bookmaker for SportsBetAu {
    fn name(&self) -> &str {
        NAME
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    async fn authenticate(&mut self) -> Result<(), BookmakerError> {
        if let Some(credentials) = &self.credentials {
            if credentials.username.trim().is_empty() || credentials.password.is_empty() {
                return Err(BookmakerError::AuthenticationFailed {
                    bookmaker: NAME.to_string(),
                    reason: "username and password must not be blank".to_string(),
                });
            }
        }

        self.session.mark_authenticated();
        info!("Authenticated with {}", NAME);
        Ok(())
    }

    async fn get_available_events(&self) -> Result<Vec<Event>, BookmakerError> {
        // TODO: fetch the racing and sports event lists once the API client exists
        Ok(Vec::new())
    }

    async fn place_bet(
        &self,
        request: &PlaceBetRequest,
    ) -> Result<PlacementReceipt, BookmakerError> {
        self.ensure_authenticated()?;

        info!(
            "Placing bet on event {} with stake {} at odds {}",
            request.event_id, request.stake, request.odds
        );

        let participants = request
            .participants
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        info!("Bet summary:");
        info!("  Event ID: {}", request.event_id);
        info!("  Bookmaker ID: {}", request.bookmaker_id);
        info!("  Sport: {}", request.sport);
        info!(
            "  Event Date & Timezone: {} ({})",
            request.event_date.format("%Y-%m-%d %H:%M:%S"),
            request.event_tz
        );
        info!("  Participants: {}", participants);
        info!("  Outcome Wagered: {}", request.outcome);
        info!("  Target: {}", request.target);
        info!("  Stake: {:.2}", request.stake.round_dp(2));
        info!("  Odds: {:.2} {}", request.odds.round_dp(2), request.odds_unit);

        Ok(PlacementReceipt {
            bookmaker: NAME.to_string(),
            bet_ref: self.next_reference("SBAU-BET"),
            event_id: request.event_id,
            stake: request.stake,
            odds: request.odds,
            odds_unit: request.odds_unit,
            placed_at: Utc::now(),
        })
    }

    async fn withdraw_funds(&self, amount: Decimal) -> Result<WithdrawalReceipt, BookmakerError> {
        self.ensure_authenticated()?;

        if amount <= Decimal::ZERO {
            return Err(BookmakerError::InvalidAmount(amount));
        }

        info!("Requesting withdrawal of {:.2} from {}", amount.round_dp(2), NAME);

        Ok(WithdrawalReceipt {
            bookmaker: NAME.to_string(),
            withdrawal_ref: self.next_reference("SBAU-WD"),
            amount,
            requested_at: Utc::now(),
        })
    }
}
