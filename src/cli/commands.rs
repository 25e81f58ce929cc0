use crate::error::BudgetResult;
use crate::excel::{BomExporter, BomImporter};
use crate::layout::SheetLayout;
use crate::types::Bounds;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

/// Default source workbook
pub const DEFAULT_INPUT: &str = "base.xlsx";

/// Default output workbook
pub const DEFAULT_OUTPUT: &str = "budget.xlsx";

/// Options for a single create-budget run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bounds: Bounds,
    /// Generator seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
    pub layout: SheetLayout,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            bounds: Bounds::default(),
            seed: None,
            layout: SheetLayout::default(),
            verbose: false,
        }
    }
}

/// What a run read and wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub original_items: usize,
    pub output_rows: usize,
    pub seed: u64,
}

/// Execute the create-budget run: read, expand, shuffle, write
pub fn create_budget(options: &RunOptions) -> BudgetResult<RunSummary> {
    println!("{}", "🔥 Budget - Expanding BOM".bold().green());
    println!("   Input:  {}", options.input.display());
    println!("   Output: {}\n", options.output.display());

    if options.verbose {
        println!("{}", "📖 Reading source workbook...".cyan());
    }

    let importer = BomImporter::new(&options.input, options.layout.clone());
    let data = importer.import(options.bounds)?;

    if options.verbose {
        println!("   Found {} line items", data.len());
        println!(
            "   Range: {}  Budget: {}\n",
            data.subheader.range, data.subheader.budget
        );
    }

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    if options.verbose {
        println!(
            "{}",
            format!(
                "🎲 Expanding each item by {}..={} rows (seed {})",
                data.bounds.minimum(),
                data.bounds.maximum(),
                seed
            )
            .cyan()
        );
    }

    let rows = data.expanded(&mut rng);

    if options.verbose {
        println!("{}", "💾 Writing output workbook...".cyan());
    }

    let exporter = BomExporter::new(options.layout.clone());
    exporter.export(&data.header, &data.subheader, &rows, &options.output)?;

    let summary = RunSummary {
        original_items: data.len(),
        output_rows: rows.len(),
        seed,
    };

    info!(
        input = %options.input.display(),
        output = %options.output.display(),
        original_items = summary.original_items,
        output_rows = summary.output_rows,
        seed = summary.seed,
        "budget written"
    );

    println!("{}", "✅ Budget Complete!".bold().green());
    println!(
        "   {} items → {} rows",
        summary.original_items.to_string().bright_blue(),
        summary.output_rows.to_string().bright_blue().bold()
    );
    println!("   Seed: {}\n", summary.seed);

    Ok(summary)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
