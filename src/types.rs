use crate::error::{BudgetError, BudgetResult};
use std::fmt;

/// Lowest number of derived rows generated per item by default
pub const DEFAULT_MINIMUM: u32 = 50;

/// Highest number of derived rows generated per item by default
pub const DEFAULT_MAXIMUM: u32 = 150;

//==============================================================================
// Cell values
//==============================================================================

/// A single cell's content, kept as read so it can be written back verbatim
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    /// Excel serial date, written back with a date format
    DateTime(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Finite numeric view of the cell. Text is accepted when it parses as a
    /// finite number, so "NaN", "inf" and overflowing literals are rejected.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|n| n.is_finite())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) | CellValue::DateTime(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

//==============================================================================
// BOM records
//==============================================================================

/// One line of the bill of materials
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Column labels written to the first row of the output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub item_label: String,
    pub cost_label: String,
    pub budget_label: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            item_label: "Item".to_string(),
            cost_label: "Cost".to_string(),
            budget_label: "Budget".to_string(),
        }
    }
}

/// The range and budget values carried over from the source sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubHeader {
    pub range: CellValue,
    pub budget: CellValue,
}

impl SubHeader {
    pub fn new(range: CellValue, budget: CellValue) -> Self {
        Self { range, budget }
    }
}

//==============================================================================
// Expansion bounds
//==============================================================================

/// Inclusive range for the number of derived rows per item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    minimum: u32,
    maximum: u32,
}

impl Bounds {
    pub fn new(minimum: u32, maximum: u32) -> BudgetResult<Self> {
        if minimum > maximum {
            return Err(BudgetError::Validation(format!(
                "minimum ({minimum}) must not exceed maximum ({maximum})"
            )));
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
        }
    }
}

//==============================================================================
// Run data
//==============================================================================

/// Everything read from the source workbook for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct BomData {
    pub bounds: Bounds,
    pub header: Header,
    pub subheader: SubHeader,
    pub items: Vec<Item>,
}

impl BomData {
    pub fn new(bounds: Bounds, header: Header, subheader: SubHeader) -> Self {
        Self {
            bounds,
            header,
            subheader,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
