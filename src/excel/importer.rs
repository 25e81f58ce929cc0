//! BOM importer implementation - source workbook (.xlsx) → BomData

use crate::error::{BudgetError, BudgetResult};
use crate::layout::{CellRef, SheetLayout};
use crate::types::{BomData, Bounds, CellValue, Header, Item, SubHeader};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the subheader and line items from a source BOM sheet
pub struct BomImporter {
    path: PathBuf,
    layout: SheetLayout,
}

impl BomImporter {
    pub fn new<P: AsRef<Path>>(path: P, layout: SheetLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
        }
    }

    /// Import the BOM sheet, attaching `bounds` and the default header
    pub fn import(&self, bounds: Bounds) -> BudgetResult<BomData> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            BudgetError::Import(format!(
                "Failed to open Excel file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_name = &self.layout.sheet_name;
        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(BudgetError::Import(format!(
                "Sheet '{}' not found in {}",
                sheet_name,
                self.path.display()
            )));
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| BudgetError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

        debug!(path = %self.path.display(), sheet = %sheet_name, "opened source sheet");

        let mut data = BomData::new(bounds, Header::default(), self.read_subheader(&range));
        for item in self.read_items(&range)? {
            data.add_item(item);
        }

        debug!(items = data.len(), "read line items");
        Ok(data)
    }

    fn read_subheader(&self, range: &Range<Data>) -> SubHeader {
        let cell = |pos: CellRef| {
            range
                .get_value((pos.row, pos.col as u32))
                .map(convert_cell)
                .unwrap_or_default()
        };
        SubHeader::new(cell(self.layout.range), cell(self.layout.budget))
    }

    /// Scan data rows until the first blank item cell or the row cap
    fn read_items(&self, range: &Range<Data>) -> BudgetResult<Vec<Item>> {
        let item_col = self.layout.item_col() as u32;
        let price_col = self.layout.price_col() as u32;
        let mut items = Vec::new();

        for row in self.layout.data_rows() {
            let name = range
                .get_value((row, item_col))
                .map(convert_cell)
                .unwrap_or_default();
            if name.is_empty() {
                break;
            }

            let price_cell = range
                .get_value((row, price_col))
                .map(convert_cell)
                .unwrap_or_default();
            let price = price_cell.as_number().ok_or_else(|| {
                BudgetError::Import(format!(
                    "Row {}: price for '{}' is not a number: '{}'",
                    row + 1,
                    name,
                    price_cell
                ))
            })?;

            items.push(Item::new(name.to_string(), price));
        }

        Ok(items)
    }
}

/// Convert a calamine cell into a CellValue
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::String(s) => CellValue::Text(s.clone()),
        other => CellValue::Text(other.to_string()),
    }
}
