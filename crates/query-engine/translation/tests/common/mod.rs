use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;

use graphql_translator_configuration::Configuration;
use query_engine_translation::translation;
use query_engine_translation::translation::query::TranslatedOperation;
use query_engine_translation::translation::request::TranslationRequest;

const GOLDENFILES: &str = "tests/goldenfiles";

/// Load the catalog all goldenfile requests are translated against.
pub async fn configuration() -> anyhow::Result<Configuration> {
    let parsed_configuration =
        graphql_translator_configuration::parse_configuration(GOLDENFILES).await?;
    Ok(graphql_translator_configuration::make_runtime_configuration(
        parsed_configuration,
    )?)
}

/// Read the request of a goldenfile test.
pub fn request(testname: &str) -> anyhow::Result<TranslationRequest> {
    let file = PathBuf::from(GOLDENFILES)
        .join(testname)
        .join("request.json");
    Ok(serde_json::from_str(&fs::read_to_string(file)?)?)
}

/// Translate the request of a goldenfile test.
pub async fn test_translation(
    testname: &str,
) -> anyhow::Result<IndexMap<String, TranslatedOperation>> {
    let configuration = configuration().await?;
    let request = request(testname)?;
    Ok(translation::translate_request(&configuration, &request)?)
}

/// Translate the request of a goldenfile test, which is expected to fail.
pub async fn test_translation_error(testname: &str) -> anyhow::Result<translation::error::Error> {
    let configuration = configuration().await?;
    let request = request(testname)?;
    match translation::translate_request(&configuration, &request) {
        Ok(translated) => anyhow::bail!("expected an error, got {translated:?}"),
        Err(error) => Ok(error),
    }
}

/// The translation of the only operation of a goldenfile test.
pub async fn test_single_translation(testname: &str) -> anyhow::Result<TranslatedOperation> {
    let mut translated = test_translation(testname).await?;
    anyhow::ensure!(
        translated.len() == 1,
        "expected one operation, got {}",
        translated.len()
    );
    translated
        .pop()
        .map(|(_, operation)| operation)
        .ok_or_else(|| anyhow::anyhow!("no operation was translated"))
}
