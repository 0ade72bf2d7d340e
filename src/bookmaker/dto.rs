use crate::odds::OddsUnit;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    #[default]
    Single,
    Multi,
}

/// An event a bookmaker is currently offering markets on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub event_id: i64,
    pub sport: String,
    pub name: String,
    pub start_time: NaiveDateTime,
    pub event_tz: String,
    pub participants: BTreeSet<String>,
}

/// Everything a bookmaker needs to place one wager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceBetRequest {
    pub event_id: i64,
    pub bookmaker_id: i64,
    pub sport: String,
    pub event_date: NaiveDateTime,
    pub event_tz: String,
    pub participants: BTreeSet<String>,
    pub outcome: String,
    pub target: String,
    pub stake: Decimal,
    pub odds: Decimal,
    pub odds_unit: OddsUnit,
    #[serde(default)]
    pub bet_type: BetType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacementReceipt {
    pub bookmaker: String,
    pub bet_ref: String,
    pub event_id: i64,
    pub stake: Decimal,
    pub odds: Decimal,
    pub odds_unit: OddsUnit,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalReceipt {
    pub bookmaker: String,
    pub withdrawal_ref: String,
    pub amount: Decimal,
    pub requested_at: DateTime<Utc>,
}
