pub mod cli;
pub mod config;
pub mod generate;
pub mod order;
pub mod output;
pub mod platform;
pub mod render;
pub mod report;
pub mod schema;
pub mod templates;

// Convenience re-exports
pub use config::{Config, RunSettings};
pub use generate::{generate, generate_with};
pub use output::{write_output_set, OutputSet};
pub use platform::TargetPlatform;
pub use report::GenerationReport;
pub use schema::{load_schemas, SchemaType};
pub use templates::JniTemplates;
