//! Output formatting

use clap::ValueEnum;
use record_forms::ReferenceOption;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }

    pub fn print<T: Serialize + Tabled>(&self, items: &[T]) {
        println!("{}", self.render(items));
    }

    pub fn render<T: Serialize + Tabled>(&self, items: &[T]) -> String {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(items).unwrap_or_default(),
            OutputFormat::Yaml => serde_yaml::to_string(items).unwrap_or_default(),
            OutputFormat::Table => Table::new(items).with(Style::psql()).to_string(),
        }
    }
}

/// One category as listed by `categories list`.
#[derive(Debug, Serialize, Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "CATEGORY")]
    pub category: String,
}

impl From<ReferenceOption> for CategoryRow {
    fn from(option: ReferenceOption) -> Self {
        Self {
            id: option.id,
            category: option.label,
        }
    }
}
