//! Named cell positions for the BOM sheet
//!
//! Every coordinate the reader and writer touch lives in [`SheetLayout`], so
//! the mapping can be checked (or overridden from YAML) without opening a
//! workbook.

use crate::error::{BudgetError, BudgetResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Highest 1-based row number an .xlsx sheet can hold
const MAX_XLSX_ROW: u32 = 1_048_576;

/// Highest 0-based column index an .xlsx sheet can hold (XFD)
const MAX_XLSX_COL: u16 = 16_383;

/// A cell position, 0-indexed internally and written as A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse A1 notation. Absolute markers (`$B$2`) are accepted and ignored.
    pub fn parse(reference: &str) -> BudgetResult<Self> {
        let pattern = Regex::new(r"^\$?([A-Za-z]{1,3})\$?([0-9]+)$")
            .map_err(|e| BudgetError::Layout(format!("Regex error: {}", e)))?;

        let captures = pattern
            .captures(reference.trim())
            .ok_or_else(|| BudgetError::Layout(format!("Invalid cell reference '{}'", reference)))?;

        let col = Self::letter_to_column_index(&captures[1]).ok_or_else(|| {
            BudgetError::Layout(format!("Column out of range in '{}'", reference))
        })?;

        let row: u32 = captures[2]
            .parse()
            .map_err(|_| BudgetError::Layout(format!("Invalid row in '{}'", reference)))?;
        if row == 0 || row > MAX_XLSX_ROW {
            return Err(BudgetError::Layout(format!(
                "Row out of range in '{}'",
                reference
            )));
        }

        Ok(Self::new(row - 1, col))
    }

    /// Convert column index to Excel column letter (0→A, 25→Z, 26→AA)
    pub fn column_index_to_letter(index: u16) -> String {
        let mut result = String::new();
        let mut idx = index as usize;

        loop {
            let remainder = idx % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if idx < 26 {
                break;
            }
            idx = idx / 26 - 1;
        }

        result
    }

    fn letter_to_column_index(letters: &str) -> Option<u16> {
        let mut index: u32 = 0;
        for c in letters.chars() {
            let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            index = index * 26 + digit;
        }
        let index = index.checked_sub(1)?;
        if index > MAX_XLSX_COL as u32 {
            return None;
        }
        Some(index as u16)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            Self::column_index_to_letter(self.col),
            self.row + 1
        )
    }
}

impl TryFrom<String> for CellRef {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CellRef> for String {
    fn from(value: CellRef) -> Self {
        value.to_string()
    }
}

/// Where each piece of the BOM sheet lives, in both source and output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Worksheet read from the source and created in the output
    pub sheet_name: String,
    pub item_label: CellRef,
    pub cost_label: CellRef,
    pub budget_label: CellRef,
    /// Range value, copied verbatim from source to output
    pub range: CellRef,
    /// Budget value, copied verbatim from source to output
    pub budget: CellRef,
    /// First item cell; the price sits in the next column
    pub data_start: CellRef,
    /// Last 1-based row the reader will scan
    pub max_row: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet_name: "BOM".to_string(),
            item_label: CellRef::new(0, 0),
            cost_label: CellRef::new(0, 1),
            budget_label: CellRef::new(0, 2),
            range: CellRef::new(1, 1),
            budget: CellRef::new(1, 2),
            data_start: CellRef::new(2, 0),
            max_row: 10_000,
        }
    }
}

impl SheetLayout {
    /// Load a layout from YAML. Missing fields keep their defaults.
    pub fn from_yaml_file(path: &Path) -> BudgetResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> BudgetResult<Self> {
        let layout: SheetLayout = serde_yaml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> BudgetResult<()> {
        if self.sheet_name.is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(BudgetError::Layout(format!(
                "Sheet name '{}' must be 1-31 characters",
                self.sheet_name
            )));
        }
        if self.data_start.col >= MAX_XLSX_COL {
            return Err(BudgetError::Layout(format!(
                "No room for a price column after {}",
                self.data_start
            )));
        }
        if self.max_row < self.data_start.row + 1 || self.max_row > MAX_XLSX_ROW {
            return Err(BudgetError::Layout(format!(
                "max_row {} must be between {} and {}",
                self.max_row,
                self.data_start.row + 1,
                MAX_XLSX_ROW
            )));
        }
        Ok(())
    }

    pub fn item_col(&self) -> u16 {
        self.data_start.col
    }

    pub fn price_col(&self) -> u16 {
        self.data_start.col + 1
    }

    /// 0-indexed rows the reader scans, inclusive of `max_row`
    pub fn data_rows(&self) -> std::ops::Range<u32> {
        self.data_start.row..self.max_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(CellRef::parse("A1").unwrap(), CellRef::new(0, 0));
        assert_eq!(CellRef::parse("B2").unwrap(), CellRef::new(1, 1));
        assert_eq!(CellRef::parse("c3").unwrap(), CellRef::new(2, 2));
        assert_eq!(CellRef::parse("$AA$10").unwrap(), CellRef::new(9, 26));
        assert_eq!(CellRef::parse("XFD1").unwrap(), CellRef::new(0, 16_383));
    }

    #[test]
    fn test_parse_cell_ref_rejects_garbage() {
        assert!(CellRef::parse("").is_err());
        assert!(CellRef::parse("A0").is_err());
        assert!(CellRef::parse("1A").is_err());
        assert!(CellRef::parse("XFE1").is_err());
        assert!(CellRef::parse("A1048577").is_err());
        assert!(CellRef::parse("B2:C3").is_err());
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(1, 2).to_string(), "C2");
        assert_eq!(CellRef::new(99, 27).to_string(), "AB100");
    }

    #[test]
    fn test_column_index_to_letter() {
        assert_eq!(CellRef::column_index_to_letter(0), "A");
        assert_eq!(CellRef::column_index_to_letter(25), "Z");
        assert_eq!(CellRef::column_index_to_letter(26), "AA");
        assert_eq!(CellRef::column_index_to_letter(52), "BA");
        assert_eq!(CellRef::column_index_to_letter(702), "AAA");
    }

    #[test]
    fn test_default_layout_positions() {
        let layout = SheetLayout::default();
        assert_eq!(layout.sheet_name, "BOM");
        assert_eq!(layout.item_label.to_string(), "A1");
        assert_eq!(layout.cost_label.to_string(), "B1");
        assert_eq!(layout.budget_label.to_string(), "C1");
        assert_eq!(layout.range.to_string(), "B2");
        assert_eq!(layout.budget.to_string(), "C2");
        assert_eq!(layout.data_start.to_string(), "A3");
        assert_eq!(layout.item_col(), 0);
        assert_eq!(layout.price_col(), 1);
        assert_eq!(layout.data_rows(), 2..10_000);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_from_partial_yaml() {
        let yaml = "sheet_name: Parts\nrange: D4\ndata_start: B6\nmax_row: 50\n";
        let layout = SheetLayout::from_yaml_str(yaml).unwrap();
        assert_eq!(layout.sheet_name, "Parts");
        assert_eq!(layout.range, CellRef::new(3, 3));
        assert_eq!(layout.data_start, CellRef::new(5, 1));
        assert_eq!(layout.max_row, 50);
        // Untouched fields keep their defaults
        assert_eq!(layout.budget, CellRef::new(1, 2));
        assert_eq!(layout.item_label, CellRef::new(0, 0));
    }

    #[test]
    fn test_layout_yaml_rejects_bad_reference() {
        let result = SheetLayout::from_yaml_str("range: nowhere\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_layout_rejects_max_row_before_data() {
        let result = SheetLayout::from_yaml_str("data_start: A10\nmax_row: 5\n");
        assert!(matches!(result, Err(BudgetError::Layout(_))));
    }

    #[test]
    fn test_layout_serializes_a1_notation() {
        let yaml = serde_yaml::to_string(&SheetLayout::default()).unwrap();
        assert!(yaml.contains("range: B2"));
        assert!(yaml.contains("data_start: A3"));
    }
}
