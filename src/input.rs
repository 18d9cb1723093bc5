//! Turning user-entered text into debts.

use log::warn;
use thiserror::Error;

use crate::debt::Debt;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("expected NAME:BALANCE:RATE:MINIMUM, got '{0}'")]
    MalformedSpec(String),
    #[error("unknown strategy '{0}', expected snowball or avalanche")]
    UnknownStrategy(String),
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::MissingField { field });
    }
    Ok(value)
}

fn number(field: &'static str, value: &str) -> Result<f64, InputError> {
    required(field, value)?
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

/// Builds a debt from the four entry fields. All of them must be filled in
/// and the numeric ones must parse; nothing else is checked.
pub fn parse_debt(
    name: &str,
    balance: &str,
    interest_rate: &str,
    minimum_payment: &str,
) -> Result<Debt, InputError> {
    let name = required("name", name)?;
    let balance = number("balance", balance)?;
    let interest_rate = number("interest rate", interest_rate)?;
    let minimum_payment = number("minimum payment", minimum_payment)?;
    Ok(Debt::new(name, balance, interest_rate, minimum_payment))
}

/// Parses `NAME:BALANCE:RATE:MINIMUM`. The name may itself contain colons.
pub fn parse_debt_spec(spec: &str) -> Result<Debt, InputError> {
    let mut parts = spec.rsplitn(4, ':');
    let (Some(minimum), Some(rate), Some(balance), Some(name)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(InputError::MalformedSpec(spec.to_string()));
    };
    parse_debt(name, balance, rate, minimum)
}

/// Extra monthly payment; blank or unparseable text counts as no extra.
pub fn parse_extra_payment(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.;
    }
    match text.parse::<f64>() {
        Ok(amount) if !amount.is_nan() => amount,
        _ => {
            warn!("ignoring extra payment '{}', not a number", text);
            0.
        }
    }
}
