//! Configuration for the translator.

use query_engine_metadata::metadata;

use crate::values::Settings;

/// The 'Configuration' type collects all the information necessary to translate
/// documents at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which checks that the catalog is consistent, so
/// the translation logic can rely on every base type and pointer target existing.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub settings: Settings,
}
