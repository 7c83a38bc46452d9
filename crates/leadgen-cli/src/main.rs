mod explore;
mod export;
mod load;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use leadgen_core::LeadField;
use leadgen_explorer::LeadFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadgen")]
#[command(about = "Explore, filter and export French business leads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show one page of leads matching the filters
    Explore {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Page to show (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Leads per page (defaults to LEADGEN_PAGE_SIZE)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Write the leads matching the filters to a CSV or JSON file
    Export {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output path (defaults to leads_YYYY-MM-DD.<format> in the current directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the distinct values of a field, as offered by the exact-match filters
    Values {
        #[arg(long, value_enum)]
        field: ValueField,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Count leads by status
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Where the raw records come from. Without either flag the configured
/// `LEADGEN_DATA_URL`, then `LEADGEN_DATA_PATH`, is used.
#[derive(Debug, Clone, Default, Args)]
struct SourceArgs {
    /// Local JSON or CSV file
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Base URL serving prospects-data-light.json / prospects-data.json
    #[arg(long)]
    url: Option<String>,
    /// Drop repeated leads (same name and address)
    #[arg(long)]
    dedupe: bool,
}

#[derive(Debug, Clone, Default, Args)]
struct FilterArgs {
    /// Case-insensitive text searched in name, address, city and category
    #[arg(long)]
    search: Option<String>,
    /// Exact category
    #[arg(long)]
    category: Option<String>,
    /// Exact city
    #[arg(long)]
    city: Option<String>,
    /// Exact department code or name, as stored on the lead
    #[arg(long)]
    department: Option<String>,
    /// Exact region
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    has_phone: bool,
    #[arg(long)]
    has_email: bool,
    #[arg(long)]
    has_website: bool,
    /// Minimum rating; unrated leads are excluded
    #[arg(long)]
    min_rating: Option<f64>,
}

impl From<FilterArgs> for LeadFilter {
    fn from(args: FilterArgs) -> Self {
        LeadFilter {
            search: args.search,
            category: args.category,
            city: args.city,
            department: args.department,
            region: args.region,
            has_phone: args.has_phone,
            has_email: args.has_email,
            has_website: args.has_website,
            min_rating: args.min_rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueField {
    Category,
    City,
    Department,
    Region,
}

impl From<ValueField> for LeadField {
    fn from(field: ValueField) -> Self {
        match field {
            ValueField::Category => LeadField::Category,
            ValueField::City => LeadField::City,
            ValueField::Department => LeadField::Department,
            ValueField::Region => LeadField::Region,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leadgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, "leadgen starting");

    match cli.command {
        Commands::Explore {
            source,
            filter,
            page,
            page_size,
        } => {
            let leads = load::load_leads(&config, &source).await?;
            explore::run_explore(
                leads,
                filter.into(),
                page,
                page_size.unwrap_or(config.page_size),
            );
        }
        Commands::Export {
            source,
            filter,
            format,
            output,
        } => {
            let leads = load::load_leads(&config, &source).await?;
            export::run_export(&leads, &filter.into(), format, output)?;
        }
        Commands::Values { field, source } => {
            let leads = load::load_leads(&config, &source).await?;
            report::run_values(&leads, field.into());
        }
        Commands::Stats { source, filter } => {
            let leads = load::load_leads(&config, &source).await?;
            report::run_stats(&leads, &filter.into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
