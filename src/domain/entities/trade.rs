use crate::domain::error::DomainError;
use crate::domain::values::trade_direction::TradeDirection;
use crate::domain::values::trade_outcome::TradeOutcome;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A validated journal trade. Built from a `TradeInput` at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    /// Trade date as "YYYY-MM-DD". Ordering uses plain string comparison.
    pub date: String,
    pub time: String,
    pub symbol: String,
    pub direction: TradeDirection,
    pub price: Decimal,
    pub quantity: Decimal,
    pub stop_price: Option<Decimal>,
    pub target_price: Option<Decimal>,
    pub outcome: TradeOutcome,
    pub pnl: Decimal,
    pub note: String,
}

impl TradeRecord {
    pub fn is_open(&self) -> bool {
        self.outcome == TradeOutcome::Open
    }
}

/// A numeric field as it arrives from JSON: a number or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    fn raw(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.trim().to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(s) if s.trim().is_empty())
    }
}

impl From<Decimal> for NumericInput {
    fn from(d: Decimal) -> Self {
        NumericInput::Text(d.to_string())
    }
}

/// Unvalidated trade as supplied by a caller or a legacy journal file.
///
/// The legacy journal stored trades as maps with Chinese keys; those keys are
/// accepted as aliases so old `trades.json` files import unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeInput {
    #[serde(alias = "日期")]
    pub date: String,
    #[serde(default, alias = "时间")]
    pub time: String,
    #[serde(alias = "标的")]
    pub symbol: String,
    #[serde(alias = "方向")]
    pub direction: TradeDirection,
    #[serde(alias = "价格")]
    pub price: Option<NumericInput>,
    #[serde(default, alias = "数量")]
    pub quantity: Option<NumericInput>,
    #[serde(default, alias = "止损价", alias = "stopPrice")]
    pub stop_price: Option<NumericInput>,
    #[serde(default, alias = "目标价", alias = "targetPrice")]
    pub target_price: Option<NumericInput>,
    #[serde(default, alias = "结果")]
    pub outcome: TradeOutcome,
    #[serde(default, alias = "盈亏")]
    pub pnl: Option<NumericInput>,
    #[serde(default, alias = "备注")]
    pub note: String,
}

/// Largest accepted magnitude for a price, quantity or pnl (10^15).
pub const MAX_MAGNITUDE: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Decimal places kept from input; float noise in legacy files is rounded off.
pub const MAX_SCALE: u32 = 8;

fn parse_decimal(field: &str, input: &NumericInput) -> Result<Decimal, DomainError> {
    let raw = input.raw();
    let invalid = |value: String| DomainError::InvalidNumber {
        field: field.to_string(),
        value,
    };
    let value = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| invalid(raw.clone()))?;
    if value.abs() > MAX_MAGNITUDE {
        return Err(invalid(raw));
    }
    Ok(value.round_dp_with_strategy(MAX_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

fn required(field: &str, input: &Option<NumericInput>) -> Result<Decimal, DomainError> {
    match input {
        Some(v) if !v.is_blank() => parse_decimal(field, v),
        _ => Err(DomainError::InvalidInput(format!("{field} is required"))),
    }
}

fn optional(field: &str, input: &Option<NumericInput>) -> Result<Option<Decimal>, DomainError> {
    match input {
        Some(v) if !v.is_blank() => parse_decimal(field, v).map(Some),
        _ => Ok(None),
    }
}

impl TradeInput {
    /// Validate and convert into a `TradeRecord` with the given id.
    ///
    /// Missing or blank pnl reads as zero (an open trade has none yet); any
    /// other unparsable number is an error.
    pub fn into_record(self, id: String) -> Result<TradeRecord, DomainError> {
        let date = self.date.trim().to_string();
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(DomainError::InvalidInput(format!(
                "Invalid date: {date:?}. Use YYYY-MM-DD"
            )));
        }
        let symbol = self.symbol.trim().to_string();
        if symbol.is_empty() {
            return Err(DomainError::InvalidInput("symbol is required".into()));
        }

        let price = required("price", &self.price)?;
        let quantity = required("quantity", &self.quantity)?;
        let stop_price = optional("stop_price", &self.stop_price)?;
        let target_price = optional("target_price", &self.target_price)?;
        let pnl = optional("pnl", &self.pnl)?.unwrap_or(Decimal::ZERO);

        Ok(TradeRecord {
            id,
            date,
            time: self.time.trim().to_string(),
            symbol,
            direction: self.direction,
            price,
            quantity,
            stop_price,
            target_price,
            outcome: self.outcome,
            pnl,
            note: self.note,
        })
    }
}
