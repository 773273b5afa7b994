//! Configuration for the initialization normalizer.

use serde::{Deserialize, Serialize};
use xlate_common::LiteralEncoding;
use xlate_common::names::CLASS_INITIALIZER_NAME;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Name of the synthesized per-type static initialization routine.
    pub class_initializer_name: String,
    /// Which string values may stay as declarative literals.
    pub literal_encoding: LiteralEncoding,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        NormalizerOptions {
            class_initializer_name: CLASS_INITIALIZER_NAME.to_string(),
            literal_encoding: LiteralEncoding::default(),
        }
    }
}
