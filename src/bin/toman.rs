//! CLI for formatting Toman amounts and browsing a sample ledger.

use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use toman_ledger::amount::{display_toman, normalize_input, parse_amount};
use toman_ledger::calendar::{self, JalaliDate};
use toman_ledger::catalog::Seed;
use toman_ledger::config::LedgerConfig;
use toman_ledger::dashboard::{DashboardSummary, Kpi, Period};
use toman_ledger::draft::TransactionDraft;
use toman_ledger::filter::TransactionFilter;
use toman_ledger::ledger::Ledger;
use toman_ledger::models::{AccountId, CategoryId, NaiveDate, Transaction, TransactionKind};
use toman_ledger::storage::InMemoryStorage;
use toman_ledger::words::to_words;

/// Toman amount formatter and personal finance ledger.
#[derive(Debug, Parser)]
#[command(name = "toman", version, about)]
struct Cli {
    /// Load categories, accounts and transactions from a JSON file
    /// instead of the built-in sample data.
    #[arg(long, global = true, value_name = "FILE")]
    seed: Option<PathBuf>,
    /// Treat this date as today (YYYY-MM-DD).
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Group raw amount input with thousands separators.
    Format {
        /// Raw text as typed.
        raw: String,
    },
    /// Read the numeric value of grouped amount text.
    Parse {
        /// Grouped or raw amount text.
        text: String,
    },
    /// Spell an amount in Persian words.
    Words {
        /// Amount, grouped or not.
        amount: String,
    },
    /// Show the Jalali label of a date.
    Date {
        /// Gregorian date (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Show income and expense for the current period and the latest
    /// transactions.
    Dashboard {
        /// Reporting period.
        #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
        period: PeriodArg,
    },
    /// List transactions, optionally filtered.
    Transactions(TransactionArgs),
    /// Validate and record a transaction, then list the ledger.
    Add(AddArgs),
}

/// Reporting period choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PeriodArg {
    /// Current Jalali month.
    Month,
    /// Current Jalali season.
    Quarter,
    /// Current Jalali year.
    Year,
}

impl From<PeriodArg> for Period {
    #[inline]
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Month => Self::Month,
            PeriodArg::Quarter => Self::Quarter,
            PeriodArg::Year => Self::Year,
        }
    }
}

/// Transaction kind choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// Money in.
    Income,
    /// Money out.
    Expense,
    /// Money moved between accounts.
    Transfer,
}

impl From<KindArg> for TransactionKind {
    #[inline]
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => Self::Income,
            KindArg::Expense => Self::Expense,
            KindArg::Transfer => Self::Transfer,
        }
    }
}

/// Arguments for the `transactions` subcommand.
#[derive(Debug, Args)]
struct TransactionArgs {
    /// Only this kind.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
    /// Start date (inclusive, YYYY-MM-DD). Requires --to.
    #[arg(long, requires = "to", value_parser = parse_date)]
    from: Option<NaiveDate>,
    /// End date (inclusive, YYYY-MM-DD). Requires --from.
    #[arg(long, requires = "from", value_parser = parse_date)]
    to: Option<NaiveDate>,
    /// Filter by category ID.
    #[arg(long)]
    category: Option<String>,
    /// Filter by account ID (either side of a transfer).
    #[arg(long)]
    account: Option<String>,
    /// Minimum amount in Toman.
    #[arg(long)]
    min_amount: Option<u64>,
    /// Maximum amount in Toman.
    #[arg(long)]
    max_amount: Option<u64>,
}

/// Arguments for the `add` subcommand.
#[derive(Debug, Args)]
struct AddArgs {
    /// Transaction kind.
    #[arg(long, value_enum, default_value_t = KindArg::Expense)]
    kind: KindArg,
    /// Amount as typed; separators and stray characters are ignored.
    #[arg(long)]
    amount: String,
    /// Booking date (YYYY-MM-DD, default today).
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Category ID for income and expense.
    #[arg(long)]
    category: Option<String>,
    /// Source account ID for transfers.
    #[arg(long)]
    from_account: Option<String>,
    /// Destination account ID for transfers.
    #[arg(long)]
    to_account: Option<String>,
    /// Free-form note.
    #[arg(long)]
    note: Option<String>,
}

/// Parses a date string in `YYYY-MM-DD` format for clap.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    calendar::parse_iso_date(s).map_err(|err| err.to_string())
}

/// Prints an error line to stderr.
fn report(context: &str, err: &dyn core::fmt::Display) -> io::Result<()> {
    writeln!(
        io::stderr().lock(),
        "{} {context}: {err}",
        "error:".red().bold()
    )
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match LedgerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            report("failed to read configuration", &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.today.is_some() {
        config.today = cli.today;
    }

    let today = config.today();
    match cli.command {
        Command::Format { raw } => cmd_format(&raw),
        Command::Parse { text } => cmd_parse(&text),
        Command::Words { amount } => cmd_words(&amount),
        Command::Date { date } => cmd_date(date, today),
        Command::Dashboard { period } => with_ledger(&config, |ledger| {
            cmd_dashboard(ledger, period.into(), today)
        }),
        Command::Transactions(args) => {
            with_ledger(&config, |ledger| cmd_transactions(ledger, &args))
        }
        Command::Add(args) => with_ledger(&config, |ledger| cmd_add(ledger, &args, today)),
    }
}

/// Loads the ledger and runs `f` on it, reporting load failures.
fn with_ledger<F>(config: &LedgerConfig, f: F) -> io::Result<ExitCode>
where
    F: FnOnce(&Ledger<InMemoryStorage>) -> io::Result<ExitCode>,
{
    match create_ledger(config) {
        Ok(ledger) => f(&ledger),
        Err(err) => {
            report("failed to load ledger", &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Builds a ledger seeded from the configured file or the sample data.
fn create_ledger(config: &LedgerConfig) -> toman_ledger::error::Result<Ledger<InMemoryStorage>> {
    let seed = match config.seed.as_deref() {
        Some(path) => Seed::from_path(path)?,
        None => Seed::sample(),
    };
    let ledger = Ledger::builder()
        .storage(InMemoryStorage::new())
        .recent_limit(config.recent_limit)
        .build()?;
    ledger.seed(seed)?;
    Ok(ledger)
}

/// Executes the `format` subcommand.
fn cmd_format(raw: &str) -> io::Result<ExitCode> {
    let mut out = io::stdout().lock();
    let grouped = normalize_input(raw);
    if grouped.is_empty() {
        writeln!(out, "{}", "(no digits)".dimmed())?;
        return Ok(ExitCode::SUCCESS);
    }
    writeln!(out, "{grouped}")?;
    writeln!(out, "{}", display_toman(parse_amount(&grouped)).dimmed())?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `parse` subcommand.
fn cmd_parse(text: &str) -> io::Result<ExitCode> {
    writeln!(io::stdout().lock(), "{}", parse_amount(text))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `words` subcommand.
fn cmd_words(amount: &str) -> io::Result<ExitCode> {
    writeln!(io::stdout().lock(), "{}", to_words(parse_amount(amount)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `date` subcommand.
fn cmd_date(date: NaiveDate, today: NaiveDate) -> io::Result<ExitCode> {
    let mut out = io::stdout().lock();
    let jalali = JalaliDate::from_gregorian(date);
    writeln!(out, "{} {jalali}", "Jalali:".bold())?;
    writeln!(out, "{} {}", "Label:".bold(), calendar::short_label(date))?;
    writeln!(out, "{} {}", "Picker:".bold(), calendar::day_label(date, today))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `dashboard` subcommand.
fn cmd_dashboard(
    ledger: &Ledger<InMemoryStorage>,
    period: Period,
    today: NaiveDate,
) -> io::Result<ExitCode> {
    let summary = match ledger.dashboard(period, today) {
        Ok(summary) => summary,
        Err(err) => {
            report("failed to build dashboard", &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    let rows = match labelled_rows(ledger, &summary.recent) {
        Ok(rows) => rows,
        Err(err) => {
            report("failed to read catalog", &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    print_dashboard(&summary, &rows, today)?;
    Ok(ExitCode::SUCCESS)
}

/// Pairs each transaction with its dashboard row title.
fn labelled_rows(
    ledger: &Ledger<InMemoryStorage>,
    txs: &[Transaction],
) -> toman_ledger::error::Result<Vec<(String, Transaction)>> {
    txs.iter()
        .map(|tx| Ok((ledger.row_label(tx)?, tx.clone())))
        .collect()
}

/// Builds a [`TransactionFilter`] from CLI arguments.
fn build_transaction_filter(args: &TransactionArgs) -> TransactionFilter {
    let mut filter = TransactionFilter::new();
    if let Some(kind) = args.kind {
        filter = filter.kind(kind.into());
    }
    if let Some((from_date, to_date)) = args.from.zip(args.to) {
        filter = filter.date_range(from_date, to_date);
    }
    if let Some(id) = args.category.as_deref() {
        filter = filter.category(CategoryId::from(id));
    }
    if let Some(id) = args.account.as_deref() {
        filter = filter.account(AccountId::from(id));
    }
    match (args.min_amount, args.max_amount) {
        (Some(min), Some(max)) => filter = filter.amount_range(min, max),
        (Some(min), None) => filter.min_amount = Some(min),
        (None, Some(max)) => filter.max_amount = Some(max),
        (None, None) => {}
    }
    filter
}

/// Executes the `transactions` subcommand.
fn cmd_transactions(
    ledger: &Ledger<InMemoryStorage>,
    args: &TransactionArgs,
) -> io::Result<ExitCode> {
    let filter = build_transaction_filter(args);
    match ledger.filter_transactions(&filter) {
        Ok(txs) => print_history(ledger, &txs),
        Err(err) => {
            report("failed to read transactions", &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Fills a form draft from `add` arguments.
fn build_draft(args: &AddArgs, today: NaiveDate) -> TransactionDraft {
    let mut draft = TransactionDraft::new(args.date.unwrap_or(today));
    draft.kind = args.kind.into();
    draft.set_amount_input(&args.amount);
    draft.category_id = args.category.as_deref().map(CategoryId::from);
    draft.from_account_id = args.from_account.as_deref().map(AccountId::from);
    draft.to_account_id = args.to_account.as_deref().map(AccountId::from);
    draft.note = args.note.clone().unwrap_or_default();
    draft
}

/// Executes the `add` subcommand.
fn cmd_add(
    ledger: &Ledger<InMemoryStorage>,
    args: &AddArgs,
    today: NaiveDate,
) -> io::Result<ExitCode> {
    let draft = build_draft(args, today);
    if let Some(hint) = draft.validation_hint() {
        let mut err = io::stderr().lock();
        writeln!(err, "{} {hint}", "error:".red().bold())?;
        if let Err(reason) = draft.submit() {
            writeln!(err, "  {} {reason}", "hint:".cyan())?;
        }
        return Ok(ExitCode::FAILURE);
    }
    if let Some(words) = draft.amount_words() {
        writeln!(
            io::stdout().lock(),
            "{} {} ({words})",
            "Amount:".bold(),
            draft.amount_input()
        )?;
    }
    let added = draft
        .submit()
        .map_err(Into::into)
        .and_then(|payload| ledger.add_transaction(payload));
    match added {
        Ok(tx) => {
            tracing::info!(id = %tx.id, "recorded");
            match ledger.transactions() {
                Ok(txs) => print_history(ledger, &txs),
                Err(err) => {
                    report("failed to read transactions", &err)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Err(err) => {
            report("failed to add transaction", &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Renders an amount cell coloured by kind.
fn amount_cell(tx: &Transaction) -> Cell {
    let text = display_toman(tx.amount_toman);
    match tx.kind {
        TransactionKind::Income => Cell::new(format!("+{text}")).fg(Color::Green),
        TransactionKind::Expense => Cell::new(format!("-{text}")).fg(Color::Red),
        TransactionKind::Transfer => Cell::new(text).fg(Color::Blue),
    }
}

/// Formats a KPI line: value, arrow and percent, coloured by whether the
/// trend is good.
fn kpi_line(label: &str, kpi: &Kpi, up_good: bool) -> String {
    let change = format!("{} {}", kpi.arrow(), kpi.percent_label());
    let trend = if kpi.is_good(up_good) {
        change.green().to_string()
    } else {
        change.red().to_string()
    };
    format!("{label} {} {trend}", display_toman(kpi.value))
}

/// Prints the dashboard summary and recent rows.
fn print_dashboard(
    summary: &DashboardSummary,
    rows: &[(String, Transaction)],
    today: NaiveDate,
) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} {}",
        format_args!("Dashboard ({})", summary.period.label()).green().bold(),
        format_args!(
            "({} – {})",
            JalaliDate::from_gregorian(summary.window.start),
            JalaliDate::from_gregorian(summary.window.end)
        )
        .dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "  {}", kpi_line("درآمد", &summary.income, true))?;
    writeln!(out, "  {}", kpi_line("هزینه", &summary.expense, false))?;
    writeln!(out)?;

    if rows.is_empty() {
        writeln!(out, "{}", "No transactions yet.".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Amount").fg(Color::Cyan),
    ]);
    for (title, tx) in rows {
        _ = table.add_row(vec![
            Cell::new(calendar::day_label(tx.date, today)),
            Cell::new(title),
            amount_cell(tx),
        ]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints transactions in a table with history titles.
fn print_history(ledger: &Ledger<InMemoryStorage>, txs: &[Transaction]) -> io::Result<ExitCode> {
    let titles = match txs
        .iter()
        .map(|tx| ledger.history_title(tx))
        .collect::<toman_ledger::error::Result<Vec<_>>>()
    {
        Ok(titles) => titles,
        Err(err) => {
            report("failed to read catalog", &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut out = io::stdout().lock();
    if txs.is_empty() {
        writeln!(out, "{}", "No transactions found.".dimmed())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Kind").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Amount").fg(Color::Cyan),
        Cell::new("Note").fg(Color::Cyan),
    ]);

    for (tx, title) in txs.iter().zip(titles) {
        _ = table.add_row(vec![
            Cell::new(tx.date),
            Cell::new(tx.kind.label()),
            Cell::new(title),
            amount_cell(tx),
            Cell::new(tx.note.as_deref().unwrap_or("")),
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Transactions".green().bold(),
        format_args!("({})", txs.len()).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(ExitCode::SUCCESS)
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // stderr itself failed; nothing left to report to.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toman_ledger::models::Category;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_transaction_args() -> TransactionArgs {
        TransactionArgs {
            kind: None,
            from: None,
            to: None,
            category: None,
            account: None,
            min_amount: None,
            max_amount: None,
        }
    }

    fn add_args(kind: KindArg, amount: &str) -> AddArgs {
        AddArgs {
            kind,
            amount: amount.to_owned(),
            date: None,
            category: None,
            from_account: None,
            to_account: None,
            note: None,
        }
    }

    fn category_ids(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.id.as_str()).collect()
    }

    fn sample_ledger() -> Ledger<InMemoryStorage> {
        create_ledger(&LedgerConfig::default()).unwrap()
    }

    // ── parse_date tests ──────────────────────────────────────────────

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2026-02-19").unwrap(), ymd(2026, 2, 19));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("19-02-2026").is_err());
    }

    // ── CLI parsing tests ─────────────────────────────────────────────

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "toman",
            "dashboard",
            "--period",
            "quarter",
            "--today",
            "2026-02-19",
        ])
        .unwrap();
        assert_eq!(cli.today, Some(ymd(2026, 2, 19)));
        assert!(matches!(
            cli.command,
            Command::Dashboard {
                period: PeriodArg::Quarter
            }
        ));
    }

    #[test]
    fn cli_rejects_half_date_range() {
        assert!(Cli::try_parse_from(["toman", "transactions", "--from", "2026-02-01"]).is_err());
    }

    #[test]
    fn period_arg_maps_to_period() {
        assert_eq!(Period::from(PeriodArg::Year), Period::Year);
        assert_eq!(TransactionKind::from(KindArg::Transfer), TransactionKind::Transfer);
    }

    // ── Ledger creation ───────────────────────────────────────────────

    #[test]
    fn create_ledger_uses_sample_by_default() {
        let ledger = sample_ledger();
        assert_eq!(ledger.transactions().unwrap().len(), 4);
        assert_eq!(
            category_ids(&ledger.categories().unwrap()).first().copied(),
            Some("c_exp_food")
        );
    }

    #[test]
    fn create_ledger_from_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"accounts": [{"id": "a_x", "title": "X"}]}"#).unwrap();
        let config = LedgerConfig {
            seed: Some(path),
            ..LedgerConfig::default()
        };
        let ledger = create_ledger(&config).unwrap();
        assert!(ledger.transactions().unwrap().is_empty());
        assert_eq!(ledger.accounts().unwrap().len(), 1);
    }

    #[test]
    fn create_ledger_missing_seed_fails() {
        let config = LedgerConfig {
            seed: Some(PathBuf::from("/nonexistent/seed.json")),
            ..LedgerConfig::default()
        };
        assert!(create_ledger(&config).is_err());
    }

    // ── build_transaction_filter tests ────────────────────────────────

    #[test]
    fn build_filter_no_args() {
        let filter = build_transaction_filter(&empty_transaction_args());
        assert_eq!(filter, TransactionFilter::new());
    }

    #[test]
    fn build_filter_with_all_args() {
        let args = TransactionArgs {
            kind: Some(KindArg::Expense),
            from: Some(ymd(2026, 2, 1)),
            to: Some(ymd(2026, 2, 28)),
            category: Some("c_exp_food".to_owned()),
            account: None,
            min_amount: Some(10),
            max_amount: None,
        };
        let filter = build_transaction_filter(&args);
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.date_from, Some(ymd(2026, 2, 1)));
        assert_eq!(filter.category, Some(CategoryId::from("c_exp_food")));
        assert_eq!(filter.min_amount, Some(10));
        assert_eq!(filter.max_amount, None);

        let ledger = sample_ledger();
        let txs = ledger.filter_transactions(&filter).unwrap();
        assert_eq!(txs.len(), 1);
    }

    // ── add tests ─────────────────────────────────────────────────────

    #[test]
    fn build_draft_defaults_date_to_today() {
        let mut args = add_args(KindArg::Income, "1,890,000");
        args.category = Some("c_inc_salary".to_owned());
        args.note = Some(" bonus ".to_owned());
        let draft = build_draft(&args, ymd(2026, 2, 19));
        assert_eq!(draft.date, ymd(2026, 2, 19));
        assert_eq!(draft.amount(), 1_890_000);
        let payload = draft.submit().unwrap();
        assert_eq!(payload.note.as_deref(), Some("bonus"));
    }

    #[test]
    fn build_draft_transfer_without_accounts_is_incomplete() {
        let draft = build_draft(&add_args(KindArg::Transfer, "5000"), ymd(2026, 2, 19));
        assert_eq!(draft.validation_hint(), Some("فیلدهای لازم را کامل کن."));
    }

    #[test]
    fn cmd_add_records_transaction() {
        let ledger = sample_ledger();
        let mut args = add_args(KindArg::Transfer, "70000");
        args.from_account = Some("a_iman".to_owned());
        args.to_account = Some("a_saving".to_owned());
        let code = cmd_add(&ledger, &args, ymd(2026, 2, 20)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let txs = ledger.transactions().unwrap();
        assert_eq!(txs.len(), 5);
        assert_eq!(txs[0].amount_toman, 70_000);
    }

    #[test]
    fn cmd_add_rejects_zero_amount() {
        let ledger = sample_ledger();
        let code = cmd_add(&ledger, &add_args(KindArg::Expense, "0"), ymd(2026, 2, 20)).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(ledger.transactions().unwrap().len(), 4);
    }

    // ── Output helpers ────────────────────────────────────────────────

    #[test]
    fn labelled_rows_use_row_titles() {
        let ledger = sample_ledger();
        let txs = ledger.recent(4).unwrap();
        let rows = labelled_rows(&ledger, &txs).unwrap();
        assert_eq!(rows[0].0, "خوراک");
        assert_eq!(rows[3].0, "جابجایی: موجودی نقدی \u{2192} حساب ایمان");
    }

    #[test]
    fn kpi_line_includes_percent() {
        let kpi = Kpi {
            value: 1_100,
            previous: 1_000,
        };
        let line = kpi_line("درآمد", &kpi, true);
        assert!(line.contains("10.0%"));
        assert!(line.contains("۱٬۱۰۰"));
    }
}
