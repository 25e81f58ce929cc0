use budget_bom::cli::{self, RunOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};
use budget_bom::error::BudgetResult;
use budget_bom::layout::SheetLayout;
use budget_bom::types::{Bounds, DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "create-budget")]
#[command(version)]
#[command(about = "Expand a BOM budget sheet into shuffled, randomly priced line items")]
#[command(long_about = "create-budget - randomized BOM expansion

Reads the 'BOM' sheet of the input workbook, keeps the range (B2) and
budget (C2) values, and collects (item, price) rows from row 3 until the
first empty item cell.

Every item gets between --min and --max extra rows with the same name and
a price raised by a random 100..=10000. Originals and extra rows are
shuffled and written to a new workbook under Item / Cost / Budget labels.

EXAMPLES:
  create-budget                               # base.xlsx → budget.xlsx
  create-budget -i parts.xlsx -o out.xlsx --min 2 --max 5
  create-budget --seed 42                     # reproducible output
  create-budget --layout layout.yaml          # custom cell positions")]
struct Args {
    /// Source workbook (.xlsx) with a BOM sheet
    #[arg(short, long, default_value = DEFAULT_INPUT, env = "BUDGET_INPUT")]
    input: PathBuf,

    /// Output workbook (.xlsx)
    #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "BUDGET_OUTPUT")]
    output: PathBuf,

    /// Fewest extra rows per item
    #[arg(long, default_value_t = DEFAULT_MINIMUM, env = "BUDGET_MIN")]
    min: u32,

    /// Most extra rows per item
    #[arg(long, default_value_t = DEFAULT_MAXIMUM, env = "BUDGET_MAX")]
    max: u32,

    /// Seed for the random generator (random when omitted)
    #[arg(long, env = "BUDGET_SEED")]
    seed: Option<u64>,

    /// YAML file overriding cell positions
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> BudgetResult<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "budget_bom=info"
    } else {
        "budget_bom=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let layout = match &args.layout {
        Some(path) => SheetLayout::from_yaml_file(path)?,
        None => SheetLayout::default(),
    };

    let options = RunOptions {
        input: args.input,
        output: args.output,
        bounds: Bounds::new(args.min, args.max)?,
        seed: args.seed,
        layout,
        verbose: args.verbose,
    };

    cli::create_budget(&options)?;
    Ok(())
}
