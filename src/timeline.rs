use crate::plan::{PaymentSchedule, RepaymentPlan};

/// Months shown before the full timeline is asked for.
pub const PREVIEW_MONTHS: usize = 12;

#[derive(PartialEq, Debug)]
pub struct TimelineMonth<'a> {
    pub month: u32,
    pub payments: Vec<&'a PaymentSchedule>,
}

impl TimelineMonth<'_> {
    pub fn total_payment(&self) -> f64 {
        self.payments.iter().map(|p| p.payment).sum()
    }
}

/// Groups the schedule by month, ascending.
pub fn group_by_month(plan: &RepaymentPlan) -> Vec<TimelineMonth<'_>> {
    let mut months: Vec<TimelineMonth> = Vec::new();
    for pmt in &plan.monthly_payments {
        match months.last_mut() {
            Some(last) if last.month == pmt.month => last.payments.push(pmt),
            _ => months.push(TimelineMonth {
                month: pmt.month,
                payments: vec![pmt],
            }),
        }
    }
    months
}

pub fn preview<'a, 'b>(
    months: &'b [TimelineMonth<'a>],
    show_all: bool,
) -> &'b [TimelineMonth<'a>] {
    if show_all {
        months
    } else {
        &months[..months.len().min(PREVIEW_MONTHS)]
    }
}

#[cfg(test)]
mod tests {
    use super::{group_by_month, preview, PREVIEW_MONTHS};
    use crate::debt::{Debt, Strategy};
    use crate::plan::calculate_repayment_plan;
    use test_log::test;

    #[test]
    fn test_group_by_month() {
        let debts = vec![
            Debt::with_id("a", "A", 1000., 5., 50.),
            Debt::with_id("b", "B", 500., 20., 50.),
        ];
        let plan = calculate_repayment_plan(&debts, 100., Strategy::Avalanche);
        let months = group_by_month(&plan);

        assert_eq!(months.len(), 10);
        assert_eq!(months[0].month, 1);
        assert_eq!(months[0].payments.len(), 2);
        assert_eq!(months[0].payments[0].debt_name, "A");
        assert!((months[0].total_payment() - 200.).abs() < 1e-9);
        // only A is left from month 5
        assert_eq!(months[4].payments.len(), 1);
        assert_eq!(months[9].month, 10);
        assert_eq!(
            months.iter().map(|m| m.payments.len()).sum::<usize>(),
            plan.monthly_payments.len()
        );
    }

    #[test]
    fn test_preview() {
        let debts = vec![Debt::with_id("1", "Loan", 5000., 10., 100.)];
        let plan = calculate_repayment_plan(&debts, 0., Strategy::Snowball);
        let months = group_by_month(&plan);
        assert!(months.len() > PREVIEW_MONTHS);

        assert_eq!(preview(&months, false).len(), PREVIEW_MONTHS);
        assert_eq!(preview(&months, true).len(), months.len());

        let short = &months[..3];
        assert_eq!(preview(short, false).len(), 3);
    }

    #[test]
    fn test_empty_plan() {
        let plan = calculate_repayment_plan(&[], 0., Strategy::Snowball);
        assert!(group_by_month(&plan).is_empty());
    }
}
