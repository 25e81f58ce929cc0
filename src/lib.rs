//! Budget BOM - randomized line item expansion for budget spreadsheets
//!
//! Reads the `BOM` sheet of a source workbook, expands every line item into
//! a random number of derived items with higher prices, shuffles the result
//! and writes a new workbook with the same header and subheader.
//!
//! # Example
//!
//! ```no_run
//! use budget_bom::excel::{BomExporter, BomImporter};
//! use budget_bom::layout::SheetLayout;
//! use budget_bom::types::Bounds;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let layout = SheetLayout::default();
//! let data = BomImporter::new("base.xlsx", layout.clone()).import(Bounds::default())?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let rows = data.expanded(&mut rng);
//!
//! BomExporter::new(layout).export(&data.header, &data.subheader, &rows, Path::new("budget.xlsx"))?;
//! # Ok::<(), budget_bom::error::BudgetError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod layout;
pub mod types;

// Re-export commonly used types
pub use error::{BudgetError, BudgetResult};
pub use types::{BomData, Bounds, CellValue, Header, Item, SubHeader};
