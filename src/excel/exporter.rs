//! BOM exporter implementation

use crate::error::{BudgetError, BudgetResult};
use crate::layout::{CellRef, SheetLayout};
use crate::types::{CellValue, Header, Item, SubHeader};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Writes the header, subheader and expanded rows to a new workbook
pub struct BomExporter {
    layout: SheetLayout,
}

impl BomExporter {
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    /// Create a single-sheet workbook and save it to `output_path`
    pub fn export(
        &self,
        header: &Header,
        subheader: &SubHeader,
        rows: &[Item],
        output_path: &Path,
    ) -> BudgetResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.layout.sheet_name)
            .map_err(|e| BudgetError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_header(worksheet, header)?;
        self.write_subheader(worksheet, subheader)?;
        self.write_rows(worksheet, rows)?;

        workbook
            .save(output_path)
            .map_err(|e| BudgetError::Export(format!("Failed to save Excel file: {}", e)))?;

        debug!(path = %output_path.display(), rows = rows.len(), "saved output workbook");
        Ok(())
    }

    fn write_header(&self, worksheet: &mut Worksheet, header: &Header) -> BudgetResult<()> {
        let labels = [
            (self.layout.item_label, &header.item_label),
            (self.layout.cost_label, &header.cost_label),
            (self.layout.budget_label, &header.budget_label),
        ];
        for (cell, label) in labels {
            worksheet
                .write_string(cell.row, cell.col, label.as_str())
                .map_err(|e| BudgetError::Export(format!("Failed to write header {}: {}", cell, e)))?;
        }
        Ok(())
    }

    fn write_subheader(&self, worksheet: &mut Worksheet, subheader: &SubHeader) -> BudgetResult<()> {
        Self::write_cell_value(worksheet, self.layout.range, &subheader.range)?;
        Self::write_cell_value(worksheet, self.layout.budget, &subheader.budget)
    }

    fn write_rows(&self, worksheet: &mut Worksheet, rows: &[Item]) -> BudgetResult<()> {
        let item_col = self.layout.item_col();
        let price_col = self.layout.price_col();

        for (offset, item) in rows.iter().enumerate() {
            let row = u32::try_from(offset)
                .ok()
                .and_then(|offset| self.layout.data_start.row.checked_add(offset))
                .ok_or_else(|| BudgetError::Export(format!("Too many rows: {}", rows.len())))?;

            worksheet
                .write_string(row, item_col, &item.name)
                .map_err(|e| BudgetError::Export(format!("Failed to write item: {}", e)))?;
            worksheet
                .write_number(row, price_col, item.price)
                .map_err(|e| BudgetError::Export(format!("Failed to write price: {}", e)))?;
        }
        Ok(())
    }

    /// Write a verbatim cell value; empty values leave the cell blank
    fn write_cell_value(
        worksheet: &mut Worksheet,
        cell: CellRef,
        value: &CellValue,
    ) -> BudgetResult<()> {
        let result = match value {
            CellValue::Empty => return Ok(()),
            CellValue::Bool(b) => worksheet.write_boolean(cell.row, cell.col, *b),
            CellValue::Number(n) => worksheet.write_number(cell.row, cell.col, *n),
            CellValue::DateTime(serial) => {
                let format = Format::new().set_num_format(date_format(*serial));
                worksheet.write_number_with_format(cell.row, cell.col, *serial, &format)
            }
            CellValue::Text(s) => worksheet.write_string(cell.row, cell.col, s),
        };
        result
            .map(|_| ())
            .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", cell, e)))
    }
}

/// Date-only format for whole serials, date and time otherwise
fn date_format(serial: f64) -> &'static str {
    if serial.fract() == 0.0 {
        "yyyy-mm-dd"
    } else {
        "yyyy-mm-dd hh:mm:ss"
    }
}
