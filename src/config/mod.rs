use crate::core::engine::{DEFAULT_CONCURRENT_STORES, DEFAULT_CURRENCY, DEFAULT_MAX_RESULTS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{
    validate_currency_code, validate_path, validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shoplist")]
#[command(about = "Compare a shopping list's total cost across local stores")]
pub struct CliConfig {
    #[arg(long, default_value = "./prices.toml", help = "TOML price catalog")]
    pub catalog: String,

    #[arg(long, value_delimiter = ',', help = "Shopping list items, comma separated")]
    pub items: Vec<String>,

    #[arg(long, help = "File with one shopping list item per line")]
    pub list_file: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    #[arg(long, default_value_t = DEFAULT_CONCURRENT_STORES)]
    pub concurrent_stores: usize,

    #[arg(long, help = "Directory to write a JSON comparison report into")]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn max_results(&self) -> usize {
        self.max_results
    }

    fn currency_code(&self) -> &str {
        &self.currency
    }

    fn concurrent_stores(&self) -> usize {
        self.concurrent_stores
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", &self.catalog)?;
        validate_positive_number("max_results", self.max_results, 1)?;
        validate_positive_number("concurrent_stores", self.concurrent_stores, 1)?;
        validate_currency_code("currency", &self.currency)?;

        if let Some(path) = &self.list_file {
            validate_path("list_file", path)?;
        }

        if self.items.is_empty() && self.list_file.is_none() {
            return Err(CompareError::MissingConfigError {
                field: "items (or list_file)".to_string(),
            });
        }

        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }

        Ok(())
    }
}
