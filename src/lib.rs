pub mod compare;
pub mod debt;
pub mod format;
pub mod input;
pub mod plan;
pub mod timeline;

pub use compare::{compare_plans, PlanComparison};
pub use debt::{Debt, DebtList, Strategy};
pub use input::InputError;
pub use plan::{calculate_repayment_plan, PaymentSchedule, RepaymentPlan, MAX_MONTHS};
