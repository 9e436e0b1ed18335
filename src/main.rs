use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_optimizer::application::allocator::Allocator;
use payment_optimizer::domain::catalog::Catalog;
use payment_optimizer::domain::payment_method::DEFAULT_POINTS_METHOD_ID;
use payment_optimizer::interfaces::csv::assignment_writer::AssignmentWriter;
use payment_optimizer::interfaces::csv::usage_writer::UsageWriter;
use payment_optimizer::interfaces::json::reader::{OrderReader, PaymentMethodReader};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders JSON file
    orders: PathBuf,

    /// Payment methods JSON file
    payment_methods: PathBuf,

    /// Identifier of the loyalty-points payment method
    #[arg(long, default_value = DEFAULT_POINTS_METHOD_ID)]
    points_method: String,

    /// Also write the per-order assignment as CSV to this file
    #[arg(long)]
    assignments: Option<PathBuf>,

    /// Exit with an error when any order is left unpaid
    #[arg(long)]
    fail_on_unpaid: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();

    let cli = Cli::parse();

    let orders = OrderReader::new(File::open(&cli.orders).into_diagnostic()?)
        .orders()
        .into_diagnostic()?;
    let methods = PaymentMethodReader::new(File::open(&cli.payment_methods).into_diagnostic()?)
        .payment_methods()
        .into_diagnostic()?;

    let catalog = Catalog::new(methods, cli.points_method.as_str()).into_diagnostic()?;
    let report = Allocator::new(catalog).allocate(&orders);

    let stdout = io::stdout();
    let mut writer = UsageWriter::new(stdout.lock());
    writer.write_usage(&report.usage).into_diagnostic()?;

    if let Some(path) = &cli.assignments {
        let file = File::create(path).into_diagnostic()?;
        AssignmentWriter::new(file)
            .write_assignments(&report.assignments, &cli.points_method)
            .into_diagnostic()?;
    }

    let unpaid: Vec<&str> = report.unpaid().map(|a| a.order_id.as_str()).collect();
    if cli.fail_on_unpaid && !unpaid.is_empty() {
        miette::bail!("{} order(s) left unpaid: {}", unpaid.len(), unpaid.join(", "));
    }

    Ok(())
}
