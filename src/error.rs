use thiserror::Error;

pub type BudgetResult<T> = Result<T, BudgetError>;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
