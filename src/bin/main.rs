//! schemadoc CLI - render a schema document as a Markdown dictionary
//!
//! Usage:
//!   schemadoc generate <schema.json>
//!   schemadoc tables <schema.json>
//!   schemadoc fields <schema.json> <table>
//!
//! Examples:
//!   schemadoc generate schema.json
//!   schemadoc fields schema.json user_table

use clap::{Parser, Subcommand};
use schemadoc::{EntityService, JsonSchemaSource};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(about = "Render ORM schema metadata as a Markdown data dictionary")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full database dictionary
    Generate {
        /// Path to the schema document
        file: PathBuf,
    },

    /// List all tables and their comments
    Tables {
        /// Path to the schema document
        file: PathBuf,
    },

    /// Show one table's fields
    Fields {
        /// Path to the schema document
        file: PathBuf,

        /// Table name
        table: String,
    },
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays clean Markdown.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { file } => cmd_generate(file),
        Commands::Tables { file } => cmd_tables(file),
        Commands::Fields { file, table } => cmd_fields(file, table),
    }
}

fn load_service(file: &Path) -> Result<EntityService<JsonSchemaSource>, ExitCode> {
    match JsonSchemaSource::from_path(file) {
        Ok(source) => Ok(EntityService::new(source)),
        Err(e) => {
            eprintln!("Error loading schema '{}': {}", file.display(), e);
            Err(ExitCode::FAILURE)
        }
    }
}

fn cmd_generate(file: PathBuf) -> ExitCode {
    let service = match load_service(&file) {
        Ok(service) => service,
        Err(code) => return code,
    };

    print!("# 数据库字典\n\n{}", service.generate_database_markdown());
    ExitCode::SUCCESS
}

fn cmd_tables(file: PathBuf) -> ExitCode {
    let service = match load_service(&file) {
        Ok(service) => service,
        Err(code) => return code,
    };

    print!("{}", service.all_table_names());
    ExitCode::SUCCESS
}

fn cmd_fields(file: PathBuf, table: String) -> ExitCode {
    let service = match load_service(&file) {
        Ok(service) => service,
        Err(code) => return code,
    };

    println!("{}", service.table_fields(&table));
    ExitCode::SUCCESS
}
