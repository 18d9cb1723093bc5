use log::debug;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::input::InputError;

/// Which debt receives the extra monthly payment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// lowest remaining balance first
    Snowball,
    /// highest annual interest rate first
    Avalanche,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Snowball => write!(f, "snowball"),
            Strategy::Avalanche => write!(f, "avalanche"),
        }
    }
}

impl FromStr for Strategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            _ => Err(InputError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub balance: f64,
    /// annual percentage, i.e. 18.99 for 18.99%
    pub interest_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            balance,
            interest_rate,
            minimum_payment,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
        }
    }

    /// Interest rate applied to the balance each month.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100. / 12.
    }
}

/// The debts a user has entered, kept in entry order.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DebtList {
    debts: Vec<Debt>,
}

impl DebtList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a debt and returns its id.
    pub fn add(&mut self, debt: Debt) -> String {
        debug!("adding debt {} ({})", debt.name, debt.id);
        let id = debt.id.clone();
        self.debts.push(debt);
        id
    }

    /// Removes the debt with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Debt> {
        let pos = self.debts.iter().position(|d| d.id == id)?;
        debug!("removing debt {}", id);
        Some(self.debts.remove(pos))
    }

    pub fn as_slice(&self) -> &[Debt] {
        &self.debts
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance).sum()
    }

    pub fn total_minimum_payment(&self) -> f64 {
        self.debts.iter().map(|d| d.minimum_payment).sum()
    }
}

impl From<Vec<Debt>> for DebtList {
    fn from(debts: Vec<Debt>) -> Self {
        Self { debts }
    }
}

#[cfg(test)]
mod tests {
    use super::{Debt, DebtList, Strategy};
    use test_log::test;

    #[test]
    fn test_strategy_display_and_parse() {
        assert_eq!(Strategy::Snowball.to_string(), "snowball");
        assert_eq!(Strategy::Avalanche.to_string(), "avalanche");
        assert_eq!("Snowball".parse::<Strategy>().unwrap(), Strategy::Snowball);
        assert_eq!(" avalanche ".parse::<Strategy>().unwrap(), Strategy::Avalanche);
        assert!("waterfall".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_new_debts_get_distinct_ids() {
        let a = Debt::new("Visa", 5000., 18.99, 150.);
        let b = Debt::new("Visa", 5000., 18.99, 150.);
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_monthly_rate() {
        let debt = Debt::with_id("1", "Loan", 1200., 12., 103.);
        assert!((debt.monthly_rate() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_debt_list() {
        let mut list = DebtList::new();
        assert!(list.is_empty());

        let card = list.add(Debt::new("Card", 3000., 24., 90.));
        list.add(Debt::new("Car", 1500., 6., 60.));
        assert_eq!(list.len(), 2);
        assert_eq!(list.total_balance(), 4500.);
        assert_eq!(list.total_minimum_payment(), 150.);

        let removed = list.remove(&card).unwrap();
        assert_eq!(removed.name, "Card");
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].name, "Car");
        assert!(list.remove(&card).is_none());
    }
}
