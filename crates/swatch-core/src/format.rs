//! Store-level money formatting.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    Left,
    Right,
    LeftSpace,
    RightSpace,
}

impl FromStr for CurrencyPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(CurrencyPosition::Left),
            "right" => Ok(CurrencyPosition::Right),
            "left_space" => Ok(CurrencyPosition::LeftSpace),
            "right_space" => Ok(CurrencyPosition::RightSpace),
            other => Err(format!(
                "unknown currency position '{other}'; expected left, right, left_space or right_space"
            )),
        }
    }
}

impl fmt::Display for CurrencyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyPosition::Left => write!(f, "left"),
            CurrencyPosition::Right => write!(f, "right"),
            CurrencyPosition::LeftSpace => write!(f, "left_space"),
            CurrencyPosition::RightSpace => write!(f, "right_space"),
        }
    }
}

/// How prices are printed: symbol, its position, decimals and separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub currency_symbol: String,
    pub position: CurrencyPosition,
    pub decimals: u32,
    pub decimal_separator: String,
    pub thousand_separator: String,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            position: CurrencyPosition::Left,
            decimals: 2,
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
        }
    }
}

impl PriceFormat {
    /// Formats `amount`, rounding half away from zero to `decimals` places.
    ///
    /// `1234.5` with the default format becomes `"$1,234.50"`.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.*}", self.decimals as usize, rounded.abs());

        let (whole, fraction) = match plain.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (plain.as_str(), None),
        };

        let mut number = group_thousands(whole, &self.thousand_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        let symbol = &self.currency_symbol;
        let placed = match self.position {
            CurrencyPosition::Left => format!("{symbol}{number}"),
            CurrencyPosition::Right => format!("{number}{symbol}"),
            CurrencyPosition::LeftSpace => format!("{symbol} {number}"),
            CurrencyPosition::RightSpace => format!("{number} {symbol}"),
        };

        if negative {
            format!("-{placed}")
        } else {
            placed
        }
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
