//! Money types with precise decimal arithmetic
//!
//! Claim amounts, category values and particular line items are all carried
//! as [`Money`], backed by rust_decimal so that summing line items never
//! drifts the way floating point would.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    NPR,
    USD,
}

/// Digit grouping used when rendering an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Lakh,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the display symbol
    ///
    /// Nepalese rupees render as "Rs" rather than the ISO code.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::NPR => "Rs",
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::NPR => "NPR",
            Currency::USD => "USD",
        }
    }

    /// Returns the digit grouping conventional for this currency
    pub fn grouping(&self) -> DigitGrouping {
        match self {
            Currency::NPR => DigitGrouping::Lakh,
            Currency::USD => DigitGrouping::Thousands,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a Nepalese rupee amount from whole rupees
    pub fn npr(rupees: i64) -> Self {
        Self::new(Decimal::from(rupees), Currency::NPR)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Sums an iterator of amounts, starting from zero in `currency`
    pub fn sum<'a, I>(items: I, currency: Currency) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    /// Expresses `self` as a percentage of `base`, rounded to one decimal place
    ///
    /// Used for the vehicle variance badge: `(invoice - quote) / quote * 100`.
    pub fn percent_of(&self, base: &Money) -> Result<Decimal, MoneyError> {
        self.ensure_same_currency(base)?;
        if base.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok((self.amount / base.amount * dec!(100)).round_dp(1))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

/// Groups the digits of a non-negative integer string
pub fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let group = match grouping {
        DigitGrouping::Thousands => 3,
        DigitGrouping::Lakh => 2,
    };

    let mut parts: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        parts.push(&head[start..end]);
        end = start;
    }
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

impl fmt::Display for Money {
    /// Renders with no minimum fraction digits: `Rs 1,07,000`, `Rs 850.5`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.round_dp(self.currency.decimal_places()).normalize();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let text = rounded.abs().to_string();
        let (whole, fraction) = match text.split_once('.') {
            Some((w, fr)) => (w, Some(fr)),
            None => (text.as_str(), None),
        };

        write!(
            f,
            "{}{} {}",
            sign,
            self.currency.symbol(),
            group_digits(whole, self.currency.grouping())
        )?;
        if let Some(fraction) = fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}
