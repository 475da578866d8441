//! The translator command line: set up a configuration, translate requests against
//! it, and describe its format.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;

use graphql_translator_configuration as configuration;
use query_engine_translation::translation;
use query_engine_translation::translation::request::TranslationRequest;

/// The commands the translator understands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write an initial configuration into a directory.
    Initialize {
        /// The directory to write the configuration into.
        #[arg(long, env = "GRAPHQL_TRANSLATOR_CONFIGURATION", value_name = "DIR")]
        configuration: PathBuf,
    },
    /// Translate the operations of a request into QL queries.
    Translate {
        /// The directory holding the configuration.
        #[arg(long, env = "GRAPHQL_TRANSLATOR_CONFIGURATION", value_name = "DIR")]
        configuration: PathBuf,
        /// A JSON file holding the document and the values of its variables.
        request: PathBuf,
    },
    /// Print the JSON schema of the configuration format.
    PrintSchema,
}

/// Run a command, returning what it prints.
pub async fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Initialize { configuration } => initialize(&configuration).await,
        Command::Translate {
            configuration,
            request,
        } => translate(&configuration, &request).await,
        Command::PrintSchema => print_schema(),
    }
}

async fn initialize(configuration_dir: &Path) -> anyhow::Result<String> {
    let configuration_file = configuration_dir.join(configuration::CONFIGURATION_FILENAME);
    if tokio::fs::try_exists(&configuration_file).await? {
        anyhow::bail!(
            "A configuration already exists at {}",
            configuration_file.display()
        );
    }

    configuration::write_parsed_configuration(
        configuration::ParsedConfiguration::initial(),
        configuration_dir,
    )
    .await?;
    tracing::info!("initialized {}", configuration_dir.display());
    Ok(format!(
        "Wrote an initial configuration to {}",
        configuration_file.display()
    ))
}

async fn translate(configuration_dir: &Path, request_file: &Path) -> anyhow::Result<String> {
    let parsed_configuration = configuration::parse_configuration(configuration_dir).await?;
    let configuration = configuration::make_runtime_configuration(parsed_configuration)?;

    let request_contents = tokio::fs::read_to_string(request_file)
        .await
        .with_context(|| format!("reading {}", request_file.display()))?;
    let request: TranslationRequest = serde_json::from_str(&request_contents)
        .with_context(|| format!("parsing {}", request_file.display()))?;

    let translated = translation::translate_request(&configuration, &request)?;
    Ok(serde_json::to_string_pretty(&translated)?)
}

fn print_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(configuration::ParsedConfiguration);
    Ok(serde_json::to_string_pretty(&schema)?)
}
