use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use api_types::{asset, transaction};
use engine::{
    Amount, AmountField, AssetKind, SavingsAccount, format_amount, parse_amount, resolve_amount,
};

use crate::error::{AppError, Result};

mod config;
mod error;

#[derive(Parser, Debug)]
#[command(name = "sotien")]
#[command(about = "Inspect the VND shorthand codec and the finance estimates behind Sotien")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the configured log level.
    #[arg(long)]
    level: Option<String>,
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Literal shorthand parse ("50k", "1,5tr", "1.000.000").
    Parse(TextArg),
    /// Commit-time resolution: bare numbers under 10.000 read as thousands.
    Resolve(TextArg),
    /// Render a canonical amount in display form.
    Format(FormatArgs),
    /// Show the editing and display views of an input field.
    Field(TextArg),
    /// Build the JSON body for a new transaction from shorthand input.
    Tx(TxArgs),
    /// Estimate savings interest, final value and term progress.
    Interest(InterestArgs),
}

#[derive(Args, Debug)]
struct TextArg {
    text: String,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Canonical amount in đồng.
    amount: f64,
}

#[derive(Args, Debug)]
struct TxArgs {
    /// Amount in shorthand (resolved before it goes on the wire).
    #[arg(long)]
    amount: String,
    #[arg(long)]
    category: String,
    /// "income" or "expense".
    #[arg(long, default_value = "expense")]
    kind: String,
    #[arg(long, default_value = "")]
    description: String,
    /// `YYYY-MM-DD HH:MM:SS`; the server fills it in when omitted.
    #[arg(long)]
    date: Option<String>,
    /// Savings asset this expense funds.
    #[arg(long)]
    asset_id: Option<i64>,
}

#[derive(Args, Debug)]
struct InterestArgs {
    /// Read the account from an asset JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["amount", "rate", "term_months", "start", "end", "cumulative", "monthly"])]
    file: Option<String>,
    /// Principal in shorthand.
    #[arg(long, default_value = "0")]
    amount: String,
    /// Annual rate in percent.
    #[arg(long, default_value_t = 0.0)]
    rate: f64,
    #[arg(long)]
    term_months: Option<u32>,
    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    start: Option<chrono::NaiveDate>,
    /// Maturity date (YYYY-MM-DD).
    #[arg(long)]
    end: Option<chrono::NaiveDate>,
    /// Treat the account as a cumulative fund.
    #[arg(long)]
    cumulative: bool,
    /// Monthly contribution in shorthand (cumulative funds only).
    #[arg(long, default_value = "0")]
    monthly: String,
}

/// JSON shape for the codec subcommands.
#[derive(Debug, Serialize)]
struct Resolved<'a> {
    input: &'a str,
    amount: f64,
    display: String,
}

impl<'a> Resolved<'a> {
    fn new(input: &'a str, amount: Amount) -> Self {
        Self {
            input,
            amount: amount.value(),
            display: amount.to_display(),
        }
    }
}

fn parse_kind(raw: &str) -> Result<transaction::TransactionKind> {
    match raw {
        "income" => Ok(transaction::TransactionKind::Income),
        "expense" => Ok(transaction::TransactionKind::Expense),
        other => Err(AppError::InvalidInput(format!(
            "unsupported kind: {other} (expected income or expense)"
        ))),
    }
}

fn account_from_asset(asset: asset::Asset) -> Result<SavingsAccount> {
    let kind = match asset.kind {
        asset::AssetKind::Savings => AssetKind::Savings,
        asset::AssetKind::Cumulative => AssetKind::Cumulative,
        other => {
            return Err(AppError::InvalidInput(format!(
                "asset kind {other:?} earns no interest"
            )));
        }
    };
    Ok(SavingsAccount {
        kind,
        principal: Amount::try_new(asset.amount)?,
        interest_rate: asset.interest_rate,
        term_months: asset.term_months.filter(|months| *months > 0),
        start_date: asset.start_date,
        end_date: asset.end_date,
        auto_contribution: Amount::try_new(asset.auto_contribution)?,
    })
}

fn print_resolved(input: &str, amount: Amount, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Resolved::new(input, amount))?);
    } else {
        println!("{} ₫", amount.to_display());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse(TextArg { text }) => {
            let amount = parse_amount(&text);
            tracing::debug!(input = %text, value = amount.value(), "parsed shorthand");
            print_resolved(&text, amount, cli.json)?;
        }
        Command::Resolve(TextArg { text }) => {
            let amount = resolve_amount(&text);
            tracing::debug!(input = %text, value = amount.value(), "resolved entry");
            print_resolved(&text, amount, cli.json)?;
        }
        Command::Format(FormatArgs { amount }) => {
            let amount = Amount::try_new(amount)?;
            if cli.json {
                let view = serde_json::json!({
                    "amount": amount.value(),
                    "display": amount.to_display(),
                });
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", format_amount(Some(amount)));
            }
        }
        Command::Field(TextArg { text }) => {
            let mut field = AmountField::with_text(&text);
            field.focus();
            let editing = field.text().to_string();
            field.blur();
            if cli.json {
                let view = serde_json::json!({
                    "input": text,
                    "editing": editing,
                    "display": field.text(),
                    "amount": field.amount().value(),
                });
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("editing: {editing}");
                println!("display: {}", field.text());
            }
        }
        Command::Tx(args) => {
            let body = transaction::TransactionNew {
                amount: resolve_amount(&args.amount).value(),
                category: args.category,
                kind: parse_kind(&args.kind)?,
                description: args.description,
                date: args.date,
                asset_id: args.asset_id,
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Interest(args) => {
            let account = match &args.file {
                Some(path) => {
                    let payload = std::fs::read_to_string(path)?;
                    account_from_asset(serde_json::from_str(&payload)?)?
                }
                None => SavingsAccount {
                    kind: if args.cumulative {
                        AssetKind::Cumulative
                    } else {
                        AssetKind::Savings
                    },
                    principal: resolve_amount(&args.amount),
                    interest_rate: args.rate,
                    term_months: args.term_months,
                    start_date: args.start,
                    end_date: args.end,
                    auto_contribution: resolve_amount(&args.monthly),
                },
            };
            account.validate()?;

            let today = chrono::Local::now().date_naive();
            let estimate = account.estimate(today);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!(
                    "principal: {} ₫",
                    format_amount(Some(account.principal))
                );
                println!(
                    "expected interest: {} ₫",
                    format_amount(Some(Amount::from_raw(
                        estimate.expected_interest.value().round()
                    )))
                );
                println!(
                    "final value: {} ₫",
                    format_amount(Some(Amount::from_raw(estimate.final_value.value().round())))
                );
                match estimate.maturity {
                    Some(date) => println!(
                        "maturity: {date} ({:.0}% elapsed)",
                        estimate.progress_percent
                    ),
                    None => println!("maturity: open-ended"),
                }
            }
        }
    }
    Ok(())
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = config::load(cli.config.as_deref())?;
    if let Some(level) = cli.level.as_deref() {
        settings.level = level.to_string();
    }
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sotien={level},engine={level}",
            level = settings.level
        ))
        .init();

    run(cli)
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
