use log::info;

use crate::debt::{Debt, Strategy};
use crate::plan::{calculate_repayment_plan, RepaymentPlan};

/// Both strategies run over the same debts and extra payment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanComparison {
    pub snowball: RepaymentPlan,
    pub avalanche: RepaymentPlan,
}

impl PlanComparison {
    /// Interest avalanche saves over snowball, negative if it costs more.
    pub fn interest_savings(&self) -> f64 {
        self.snowball.total_interest - self.avalanche.total_interest
    }

    /// Months avalanche saves over snowball.
    pub fn month_savings(&self) -> i64 {
        i64::from(self.snowball.total_months) - i64::from(self.avalanche.total_months)
    }

    pub fn avalanche_saves(&self) -> bool {
        self.interest_savings() > 0.
    }

    pub fn plan(&self, strategy: Strategy) -> &RepaymentPlan {
        match strategy {
            Strategy::Snowball => &self.snowball,
            Strategy::Avalanche => &self.avalanche,
        }
    }
}

/// `None` when there is nothing to pay off.
pub fn compare_plans(debts: &[Debt], extra_payment: f64) -> Option<PlanComparison> {
    if debts.is_empty() {
        return None;
    }

    let comparison = PlanComparison {
        snowball: calculate_repayment_plan(debts, extra_payment, Strategy::Snowball),
        avalanche: calculate_repayment_plan(debts, extra_payment, Strategy::Avalanche),
    };
    info!(
        "compared {} debts: avalanche saves {:.2} interest and {} months",
        debts.len(),
        comparison.interest_savings(),
        comparison.month_savings()
    );
    Some(comparison)
}
