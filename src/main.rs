use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use payoff::{
    compare_plans,
    debt::{Debt, DebtList, Strategy},
    format::{format_currency, format_duration, format_percent},
    input::{parse_debt_spec, parse_extra_payment},
    timeline::{group_by_month, preview, PREVIEW_MONTHS},
    PlanComparison, RepaymentPlan,
};
use simple_logger::SimpleLogger;

/// Compare snowball and avalanche payoff plans for a set of debts.
#[derive(Parser)]
#[command(version, about, name = "payoff")]
struct Args {
    /// A debt as NAME:BALANCE:RATE:MINIMUM, rate as an annual percentage.
    /// Repeat for each debt.
    #[arg(long = "debt", value_name = "NAME:BALANCE:RATE:MINIMUM", required = true)]
    debts: Vec<String>,

    /// Extra amount paid each month on top of the minimums
    #[arg(long)]
    extra: Option<String>,

    /// Plan whose payment timeline is printed
    #[arg(long, default_value = "avalanche")]
    strategy: Strategy,

    /// Print every month of the timeline instead of the first 12
    #[arg(long)]
    all: bool,

    /// Month of the first payment, used to project the debt-free date
    #[arg(long, value_name = "YYYY-MM-DD")]
    start: Option<NaiveDate>,

    #[arg(long, default_value = "warn")]
    log_level: log::LevelFilter,
}

fn print_debts(debts: &DebtList) {
    println!("Debts");
    for debt in debts.as_slice() {
        println!(
            "  {}: {} at {}, minimum {}",
            debt.name,
            format_currency(debt.balance),
            format_percent(debt.interest_rate),
            format_currency(debt.minimum_payment)
        );
    }
    println!(
        "  Total: {}, minimum payments {}",
        format_currency(debts.total_balance()),
        format_currency(debts.total_minimum_payment())
    );
}

fn print_plan(title: &str, plan: &RepaymentPlan, start: Option<NaiveDate>) {
    println!("{}", title);
    println!("  Time to debt-free: {}", format_duration(plan.total_months));
    if plan.is_capped() {
        println!("  (not paid off, minimum payments do not cover interest)");
    } else if let Some(date) = start.and_then(|s| plan.payoff_date(s)) {
        println!("  Debt-free by: {}", date.format("%B %Y"));
    }
    println!("  Total interest: {}", format_currency(plan.total_interest));
    println!("  Total paid: {}", format_currency(plan.total_paid));
}

fn print_comparison(comparison: &PlanComparison, start: Option<NaiveDate>) {
    print_plan("Snowball method (lowest balance first)", &comparison.snowball, start);
    print_plan("Avalanche method (highest interest first)", &comparison.avalanche, start);
    if comparison.avalanche_saves() {
        println!("Savings with avalanche method");
        println!(
            "  Interest savings: {}",
            format_currency(comparison.interest_savings())
        );
        println!("  Time savings: {} months", comparison.month_savings());
    }
}

fn print_timeline(plan: &RepaymentPlan, show_all: bool) {
    let months = group_by_month(plan);
    println!("Payment timeline ({} method)", plan.strategy);
    for month in preview(&months, show_all) {
        println!(
            "  Month {}: total {}",
            month.month,
            format_currency(month.total_payment())
        );
        for pmt in &month.payments {
            println!(
                "    {}: {} (balance {})",
                pmt.debt_name,
                format_currency(pmt.payment),
                format_currency(pmt.remaining_balance)
            );
        }
    }
    if !show_all && months.len() > PREVIEW_MONTHS {
        println!("  ... {} months in total, use --all to show all", months.len());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("Failed to initialize logger")?;

    let debts: Vec<Debt> = args
        .debts
        .iter()
        .map(|spec| parse_debt_spec(spec).with_context(|| format!("Invalid debt '{}'", spec)))
        .collect::<Result<_>>()?;
    let debts = DebtList::from(debts);
    let extra = parse_extra_payment(args.extra.as_deref().unwrap_or(""));
    info!("planning {} debts with extra payment {}", debts.len(), extra);

    let Some(comparison) = compare_plans(debts.as_slice(), extra) else {
        bail!("No debts to plan");
    };

    print_debts(&debts);
    if extra > 0. {
        println!("Extra monthly payment: {}", format_currency(extra));
    }
    println!();
    print_comparison(&comparison, args.start);
    println!();
    print_timeline(comparison.plan(args.strategy), args.all);

    Ok(())
}

// result types can be handed across threads
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<Debt>();
    is_normal::<RepaymentPlan>();
    is_normal::<PlanComparison>();
}
