use chrono::{Months, NaiveDate};
use log::{debug, trace, warn};
use std::{cmp::Ordering, fmt};

use crate::debt::{Debt, Strategy};

/// Simulations stop after this many months even if balances remain.
pub const MAX_MONTHS: u32 = 600;

/// One payment made to one debt in one month.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentSchedule {
    pub month: u32,
    pub debt_name: String,
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub remaining_balance: f64,
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, {}, payment ${:.2}, principal ${:.2}, interest ${:.2}, remaining balance ${:.2}",
            self.month,
            self.debt_name,
            self.payment,
            self.principal_payment,
            self.interest_payment,
            self.remaining_balance
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepaymentPlan {
    pub strategy: Strategy,
    pub total_interest: f64,
    pub total_months: u32,
    pub total_paid: f64,
    pub monthly_payments: Vec<PaymentSchedule>,
}

impl RepaymentPlan {
    /// True when the simulation stopped at [`MAX_MONTHS`] rather than at a
    /// zero balance, i.e. the minimum payments never caught up with interest.
    pub fn is_capped(&self) -> bool {
        self.total_months >= MAX_MONTHS
            && self
                .monthly_payments
                .iter()
                .rev()
                .take_while(|p| p.month == self.total_months)
                .any(|p| p.remaining_balance > 0.)
    }

    /// Month in which the last payment falls when the first payment is made
    /// in `first_payment`'s month. `None` for an empty plan.
    pub fn payoff_date(&self, first_payment: NaiveDate) -> Option<NaiveDate> {
        if self.total_months == 0 {
            return None;
        }
        first_payment.checked_add_months(Months::new(self.total_months - 1))
    }
}

// per-debt working copy, the caller's debts are never touched
struct WorkingDebt<'a> {
    debt: &'a Debt,
    current_balance: f64,
}

fn rank(order: &mut [usize], working: &[WorkingDebt], strategy: Strategy) {
    // slice::sort_by is stable, ties keep their previous relative order
    order.sort_by(|&a, &b| {
        let (a, b) = (&working[a], &working[b]);
        let ordering = match strategy {
            Strategy::Snowball => a.current_balance.partial_cmp(&b.current_balance),
            Strategy::Avalanche => b.debt.interest_rate.partial_cmp(&a.debt.interest_rate),
        };
        ordering.unwrap_or(Ordering::Equal)
    });
}

/// Simulates paying off `debts` month by month. Every debt receives its
/// minimum payment; the whole of `extra_payment` goes to the single
/// highest-priority debt that still has a balance.
pub fn calculate_repayment_plan(
    debts: &[Debt],
    extra_payment: f64,
    strategy: Strategy,
) -> RepaymentPlan {
    let mut working: Vec<WorkingDebt> = debts
        .iter()
        .map(|debt| WorkingDebt {
            debt,
            current_balance: debt.balance,
        })
        .collect();
    let mut order: Vec<usize> = (0..working.len()).collect();
    rank(&mut order, &working, strategy);

    let mut monthly_payments = Vec::new();
    let mut month = 0;
    let mut total_interest = 0.;

    while working.iter().any(|w| w.current_balance > 0.) {
        if month == MAX_MONTHS {
            warn!(
                "{} plan did not pay off within {} months, stopping",
                strategy, MAX_MONTHS
            );
            break;
        }
        month += 1;

        let priority = order
            .iter()
            .copied()
            .find(|&i| working[i].current_balance > 0.);
        let mut remaining_extra = extra_payment;

        for (i, w) in working.iter_mut().enumerate() {
            if w.current_balance <= 0. {
                continue;
            }

            let interest = w.current_balance * w.debt.monthly_rate();
            let mut payment = w.debt.minimum_payment;
            if priority == Some(i) {
                payment += remaining_extra;
                remaining_extra = 0.;
            }

            // never pay more than clears the debt
            payment = payment.min(w.current_balance + interest);
            let principal = payment - interest;
            w.current_balance -= principal;
            // rounding residue can leave a tiny balance, paid off next month
            if w.current_balance < 0. {
                w.current_balance = 0.;
            }
            total_interest += interest;

            trace!(
                "month {}, {}, payment {}, interest {}, balance {}",
                month,
                w.debt.name,
                payment,
                interest,
                w.current_balance
            );

            monthly_payments.push(PaymentSchedule {
                month,
                debt_name: w.debt.name.clone(),
                payment,
                principal_payment: principal,
                interest_payment: interest,
                remaining_balance: w.current_balance,
            });
        }

        rank(&mut order, &working, strategy);
    }

    let total_paid = debts.iter().map(|d| d.balance).sum::<f64>() + total_interest;
    debug!(
        "{} plan: {} months, interest {:.2}, paid {:.2}",
        strategy, month, total_interest, total_paid
    );

    RepaymentPlan {
        strategy,
        total_interest,
        total_months: month,
        total_paid,
        monthly_payments,
    }
}
