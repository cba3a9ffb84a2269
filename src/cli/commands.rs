//! Subcommand handlers. Each handler runs one store round trip and prints the view.

use crate::{
    cli::{
        AnnualArgs, AppContext, Command, CompareArgs, ExpenseCommand, MonthlyArgs, SalaryCommand,
        format::{bar_chart, expense_table, format_currency, salary_table, share_bar},
    },
    core::{
        aggregate::{available_months, available_years},
        expense::{NewExpense, create_expense, delete_expense, list_expenses},
        report,
        salary::{create_salary, delete_salary, list_salaries},
    },
    errors::{Error, Result},
};
use tracing::{error, info, warn};

const USAGE: &str = "\
Usage:
  salary add --date YYYY-MM-DD --amount N        record a salary deposit
  salary delete --id ID                          delete a salary record
  salary list                                    show salary records
  expense add --date YYYY-MM-DD --category C --amount N [--installments K]
              [--establishment E]                record an expense
  expense delete --id ID                         delete one expense record
  expense list                                   show expense records
  monthly [--year Y] [--month M] [--category C]  spending by category
  annual [--year Y]                              spending by month
  compare [--year Y] [--month M]                 salary against expenses";

/// Runs `command` and prints its view.
pub async fn run(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Overview => overview(ctx).await,
        Command::Salary(cmd) => salary(ctx, cmd).await,
        Command::Expense(cmd) => expense(ctx, cmd).await,
        Command::Monthly(args) => monthly(ctx, args).await,
        Command::Annual(args) => annual(ctx, args).await,
        Command::Compare(args) => compare(ctx, args).await,
    }
}

/// Prints advisory outcomes (nothing selected, no data for the filter) and turns
/// them into success; anything else is logged and passed on.
pub fn report_outcome(result: Result<()>) -> Result<()> {
    match result {
        Err(e @ Error::EmptySelection { .. }) => {
            warn!("{e}");
            println!("Warning: {e}");
            Ok(())
        }
        Err(e @ Error::NoDataForFilter { .. }) => {
            info!("{e}");
            println!("{e}.");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
        Ok(()) => Ok(()),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

async fn overview(ctx: &AppContext) -> Result<()> {
    let summary = report::overview(&ctx.database).await?;
    let symbol = &ctx.config.currency_symbol;

    println!("Finance Buddy - salary and expense tracking");
    println!();
    println!("Salary records:   {}", summary.salary_count);
    println!("Expense records:  {}", summary.expense_count);
    println!("Total salary:     {}", format_currency(summary.total_salary, symbol));
    println!("Total expenses:   {}", format_currency(summary.total_expenses, symbol));
    if summary.years.is_empty() {
        println!("Years with data:  none yet");
    } else {
        println!("Years with data:  {}", summary.years.join(", "));
    }
    if let Some(latest) = summary.latest_date {
        println!("Latest entry:     {latest}");
    }
    println!();
    println!("{USAGE}");
    Ok(())
}

async fn salary(ctx: &AppContext, command: SalaryCommand) -> Result<()> {
    let db = &ctx.database;
    match command {
        SalaryCommand::Add { date, amount } => {
            let created = create_salary(db, date, amount).await?;
            println!("Salary recorded (id {}).", created.id);
        }
        SalaryCommand::Delete { id } => {
            delete_salary(db, id).await?;
            println!("Salary deleted.");
        }
        SalaryCommand::List => {}
    }

    println!();
    println!("Salary records");
    print_lines(&salary_table(
        &list_salaries(db).await?,
        &ctx.config.currency_symbol,
    ));
    Ok(())
}

async fn expense(ctx: &AppContext, command: ExpenseCommand) -> Result<()> {
    let db = &ctx.database;
    match command {
        ExpenseCommand::Add {
            date,
            category,
            establishment,
            amount,
            installments,
        } => {
            let created = create_expense(
                db,
                NewExpense {
                    date,
                    category,
                    establishment,
                    total: amount,
                    installments,
                },
            )
            .await?;
            println!("Expense recorded ({} row(s)).", created.len());
        }
        ExpenseCommand::Delete { id } => {
            delete_expense(db, id).await?;
            println!("Expense deleted.");
        }
        ExpenseCommand::List => {}
    }

    println!();
    println!("Expense records");
    print_lines(&expense_table(
        &list_expenses(db).await?,
        &ctx.config.currency_symbol,
    ));
    Ok(())
}

/// Latest year with expenses when `year` is not given.
async fn resolve_year(ctx: &AppContext, year: Option<String>) -> Result<String> {
    if let Some(year) = year {
        return Ok(year);
    }
    let expenses = list_expenses(&ctx.database).await?;
    available_years(&expenses)
        .pop()
        .ok_or_else(|| Error::NoDataForFilter {
            filter: "any year".to_string(),
        })
}

/// Latest month with expenses in `year` when `month` is not given.
async fn resolve_month(ctx: &AppContext, year: &str, month: Option<String>) -> Result<String> {
    if let Some(month) = month {
        return Ok(month);
    }
    let expenses = list_expenses(&ctx.database).await?;
    available_months(&expenses, year)
        .pop()
        .ok_or_else(|| Error::NoDataForFilter {
            filter: format!("any month of {year}"),
        })
}

async fn monthly(ctx: &AppContext, args: MonthlyArgs) -> Result<()> {
    let year = resolve_year(ctx, args.year).await?;
    let month = resolve_month(ctx, &year, args.month).await?;
    let monthly = report::monthly_report(&ctx.database, &year, &month, &args.categories).await?;
    let symbol = &ctx.config.currency_symbol;

    println!("Monthly report {}/{}", monthly.month, monthly.year);
    println!(
        "Total spent: {} ({} record(s))",
        format_currency(monthly.total, symbol),
        monthly.record_count
    );
    println!("Categories: {}", monthly.categories.join(", "));
    println!();
    println!("Spending by category");
    if monthly.by_category.is_empty() {
        println!("None of the selected categories have spending this month.");
    } else {
        print_lines(&bar_chart(
            &monthly.by_category,
            ctx.config.chart_width,
            symbol,
        ));
    }
    Ok(())
}

async fn annual(ctx: &AppContext, args: AnnualArgs) -> Result<()> {
    let year = resolve_year(ctx, args.year).await?;
    let annual = report::annual_report(&ctx.database, &year).await?;
    let symbol = &ctx.config.currency_symbol;

    println!("Annual report {}", annual.year);
    println!("Total spent: {}", format_currency(annual.total, symbol));
    println!();
    println!("Spending by month");
    print_lines(&bar_chart(&annual.by_month, ctx.config.chart_width, symbol));
    Ok(())
}

async fn compare(ctx: &AppContext, args: CompareArgs) -> Result<()> {
    let year = resolve_year(ctx, args.year).await?;
    let month = resolve_month(ctx, &year, args.month).await?;
    let comparison = report::comparison_report(&ctx.database, &year, &month).await?;
    let symbol = &ctx.config.currency_symbol;
    let width = ctx.config.chart_width;

    println!("Salary vs expenses {}/{}", comparison.month, comparison.year);
    println!(
        "Total expenses: {}",
        format_currency(comparison.total_expenses, symbol)
    );
    println!("Net salary:     {}", format_currency(comparison.net_salary, symbol));
    println!("Balance:        {}", format_currency(comparison.balance, symbol));
    println!();
    println!("Expenses {}", share_bar(comparison.expense_share, width));
    println!("Salary   {}", share_bar(comparison.salary_share, width));
    Ok(())
}
