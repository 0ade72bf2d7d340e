use crate::bookmaker::{BetType, Bookmaker, PlaceBetRequest, PlacementReceipt};
use crate::error::{BetError, BookmakerError, ValidationError};
use crate::odds::OddsUnit;
use crate::timezone::{IanaTimezones, TimezoneRegistry};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A validated wager on one outcome of an event.
///
/// Fields are private and there are no mutating methods; the only way to get a
/// `Bet` is [`Bet::builder`], which checks every invariant before returning.
///
/// A struct literal does not compile outside this module:
///
/// ```compile_fail
/// use bet_middleware::{Bet, OddsUnit};
/// use std::collections::BTreeSet;
///
/// let bet = Bet {
///     event_id: 1,
///     bookmaker_id: 1,
///     sport: "duck duck goose".to_string(),
///     event_date: chrono::NaiveDateTime::default(),
///     event_tz: "Australia/Perth".to_string(),
///     participants: BTreeSet::new(),
///     outcome: "win".to_string(),
///     target: "Bugs Bunny".to_string(),
///     stake: rust_decimal::Decimal::ONE,
///     odds: rust_decimal::Decimal::ONE,
///     odds_unit: OddsUnit::Decimal,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bet {
    event_id: i64,
    bookmaker_id: i64,
    sport: String,
    event_date: NaiveDateTime,
    event_tz: String,
    participants: BTreeSet<String>,
    outcome: String,
    target: String,
    stake: Decimal,
    odds: Decimal,
    odds_unit: OddsUnit,
}

impl Bet {
    pub fn builder() -> BetBuilder {
        BetBuilder::default()
    }

    pub fn event_id(&self) -> i64 {
        self.event_id
    }

    pub fn bookmaker_id(&self) -> i64 {
        self.bookmaker_id
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn event_date(&self) -> NaiveDateTime {
        self.event_date
    }

    pub fn event_tz(&self) -> &str {
        &self.event_tz
    }

    pub fn participants(&self) -> &BTreeSet<String> {
        &self.participants
    }

    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn stake(&self) -> Decimal {
        self.stake
    }

    pub fn odds(&self) -> Decimal {
        self.odds
    }

    pub fn odds_unit(&self) -> OddsUnit {
        self.odds_unit
    }

    /// The event start resolved in its own timezone.
    ///
    /// `None` when the zone came from a custom registry that `chrono-tz` does not
    /// know, or when the local time does not exist (DST gap).
    pub fn localized_event_date(&self) -> Option<DateTime<Tz>> {
        let tz: Tz = self.event_tz.parse().ok()?;
        tz.from_local_datetime(&self.event_date).earliest()
    }

    /// Total payout if the bet wins, stake included. `None` if it overflows.
    pub fn potential_return(&self) -> Option<Decimal> {
        let decimal_odds = self.odds_unit.to_decimal(self.odds)?;
        Some(self.stake.checked_mul(decimal_odds)?.round_dp(2))
    }

    /// Builds the request a bookmaker receives for this bet.
    pub fn to_place_request(&self, bet_type: BetType) -> PlaceBetRequest {
        PlaceBetRequest {
            event_id: self.event_id,
            bookmaker_id: self.bookmaker_id,
            sport: self.sport.clone(),
            event_date: self.event_date,
            event_tz: self.event_tz.clone(),
            participants: self.participants.clone(),
            outcome: self.outcome.clone(),
            target: self.target.clone(),
            stake: self.stake,
            odds: self.odds,
            odds_unit: self.odds_unit,
            bet_type,
        }
    }

    /// Places this bet with `bookmaker`, authenticating first if needed.
    ///
    /// An already authenticated bookmaker is not re-authenticated.
    pub async fn place_with_bookmaker(
        &self,
        bookmaker: &mut dyn Bookmaker,
    ) -> Result<PlacementReceipt, BookmakerError> {
        if !bookmaker.is_authenticated() {
            bookmaker.authenticate().await?;
        }

        bookmaker.place_bet(&PlaceBetRequest::from(self)).await
    }
}

impl From<&Bet> for PlaceBetRequest {
    fn from(bet: &Bet) -> Self {
        bet.to_place_request(BetType::default())
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let participants = self
            .participants
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "Bet(")?;
        writeln!(f, "    event_id={},", self.event_id)?;
        writeln!(f, "    bookmaker_id={},", self.bookmaker_id)?;
        writeln!(f, "    sport='{}',", self.sport)?;
        writeln!(f, "    event_date={},", self.event_date.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "    event_tz='{}',", self.event_tz)?;
        writeln!(f, "    participants={},", participants)?;
        writeln!(f, "    outcome='{}',", self.outcome)?;
        writeln!(f, "    target='{}',", self.target)?;
        writeln!(f, "    stake={:.2},", self.stake.round_dp(2))?;
        writeln!(f, "    odds={:.2},", self.odds.round_dp(2))?;
        writeln!(f, "    odds_unit='{}'", self.odds_unit)?;
        write!(f, ")")
    }
}

/// Collects the fields of a [`Bet`] and validates them in [`BetBuilder::build`].
///
/// Also deserializable, so a bet can be described in a TOML or JSON file. Every
/// field is optional here; a missing one is reported when building.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BetBuilder {
    event_id: Option<i64>,
    bookmaker_id: Option<i64>,
    sport: Option<String>,
    #[serde(deserialize_with = "crate::datetime_serde::option::deserialize")]
    event_date: Option<NaiveDateTime>,
    event_tz: Option<String>,
    participants: Option<BTreeSet<String>>,
    outcome: Option<String>,
    target: Option<String>,
    stake: Option<Decimal>,
    odds: Option<Decimal>,
    odds_unit: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, BetError> {
    value.ok_or_else(|| BetError::Usage(format!("missing required field `{}`", field)))
}

impl BetBuilder {
    pub fn event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }

    pub fn bookmaker_id(mut self, bookmaker_id: i64) -> Self {
        self.bookmaker_id = Some(bookmaker_id);
        self
    }

    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn event_date(mut self, event_date: NaiveDateTime) -> Self {
        self.event_date = Some(event_date);
        self
    }

    pub fn event_tz(mut self, event_tz: impl Into<String>) -> Self {
        self.event_tz = Some(event_tz.into());
        self
    }

    pub fn participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = Some(participants.into_iter().map(Into::into).collect());
        self
    }

    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn stake(mut self, stake: Decimal) -> Self {
        self.stake = Some(stake);
        self
    }

    pub fn odds(mut self, odds: Decimal) -> Self {
        self.odds = Some(odds);
        self
    }

    /// One of `decimal`, `fractional` or `american`, checked when building.
    pub fn odds_unit(mut self, odds_unit: impl Into<String>) -> Self {
        self.odds_unit = Some(odds_unit.into());
        self
    }

    /// Validates against the IANA timezone database.
    pub fn build(self) -> Result<Bet, BetError> {
        self.build_with(&IanaTimezones)
    }

    pub fn build_with(self, timezones: &dyn TimezoneRegistry) -> Result<Bet, BetError> {
        let bet = Bet {
            event_id: required(self.event_id, "event_id")?,
            bookmaker_id: required(self.bookmaker_id, "bookmaker_id")?,
            sport: required(self.sport, "sport")?,
            event_date: required(self.event_date, "event_date")?,
            event_tz: required(self.event_tz, "event_tz")?,
            participants: required(self.participants, "participants")?,
            outcome: required(self.outcome, "outcome")?,
            target: required(self.target, "target")?,
            stake: required(self.stake, "stake")?,
            odds: required(self.odds, "odds")?,
            odds_unit: required(self.odds_unit, "odds_unit")?.parse()?,
        };

        debug!(
            "post init checks - target: {}, participants: {:?}",
            bet.target, bet.participants
        );

        if bet.participants.is_empty() {
            return Err(ValidationError::NoParticipants.into());
        }
        if !bet.participants.contains(&bet.target) {
            return Err(ValidationError::TargetNotParticipant {
                target: bet.target,
            }
            .into());
        }
        if !timezones.contains(&bet.event_tz) {
            return Err(ValidationError::UnknownTimezone(bet.event_tz).into());
        }
        if bet.stake <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveStake(bet.stake).into());
        }
        bet.odds_unit.validate(bet.odds)?;

        Ok(bet)
    }
}
