//! Excel access for the BOM sheet
//!
//! - Import: source workbook (.xlsx) → BomData (calamine)
//! - Export: header, subheader and expanded rows → new workbook (rust_xlsxwriter)

mod exporter;
mod importer;

pub use exporter::BomExporter;
pub use importer::BomImporter;
