//! # bet-middleware
//!
//! A bookmaker-agnostic layer for describing wagers once and placing them with
//! any bookmaker that implements the common [`Bookmaker`] contract.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bet_middleware::{Bet, SportsBetAu};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let bet = Bet::builder()
//!     .event_id(1)
//!     .bookmaker_id(1)
//!     .sport("duck duck goose")
//!     .event_date(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap())
//!     .event_tz("Australia/Perth")
//!     .participants(["Silly Goose", "Daffy Duck"])
//!     .outcome("win")
//!     .target("Silly Goose")
//!     .stake(Decimal::new(990, 1))
//!     .odds(Decimal::new(14, 1))
//!     .odds_unit("decimal")
//!     .build()?;
//!
//! // Authenticates on first use, then places the bet
//! let mut bookmaker = SportsBetAu::new();
//! let receipt = bet.place_with_bookmaker(&mut bookmaker).await?;
//! println!("placed as {}", receipt.bet_ref);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Bookmaker credentials are read from `config.toml`:
//!
//! ```toml
//! [sportsbet_au]
//! username = "your_username"
//! password = "your_password"
//! api_key = "optional_api_key"
//! ```

pub mod bet;
pub mod bookmaker;
pub mod config;
pub mod datetime_serde;
pub mod error;
pub mod odds;
pub mod timezone;

// Re-export commonly used types at the crate root
pub use bet::{Bet, BetBuilder};
pub use bookmaker::{Bookmaker, SportsBetAu};
pub use config::Config;
pub use error::{BetError, BookmakerError, ValidationError};
pub use odds::OddsUnit;
pub use timezone::{IanaTimezones, StaticTimezones, TimezoneRegistry};
