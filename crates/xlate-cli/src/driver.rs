//! Load, bind, normalize and render one compilation unit.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info_span};

use crate::args::{CliArgs, OutputFormat};
use xlate_ast::{AstPrinter, CompilationUnit};
use xlate_binder::{BindStats, BindingTable, bind_field_constants, bind_unit};
use xlate_common::Diagnostic;
use xlate_lowering::{NormalizeStats, NormalizerOptions, normalize_unit};

/// Input document: a compilation unit plus the bindings it refers to.
/// Handles missing from the tree are declared by the name binder.
#[derive(Deserialize)]
pub struct NormalizeInput {
    #[serde(default)]
    pub bindings: BindingTable,
    pub unit: CompilationUnit,
}

/// What one run produced.
#[derive(Serialize)]
pub struct NormalizeResult {
    pub unit: CompilationUnit,
    pub bind_stats: BindStats,
    pub bound_constants: usize,
    /// `None` when normalization failed; see `diagnostics`.
    pub stats: Option<NormalizeStats>,
    pub diagnostics: Vec<Diagnostic>,
}

impl NormalizeResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(AstPrinter::unit_to_string(&self.unit)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.unit).context("failed to serialize unit")
            }
        }
    }
}

/// Normalizer options: defaults, then the config file, then flags.
pub fn resolve_options(args: &CliArgs) -> Result<NormalizerOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => NormalizerOptions::default(),
    };
    if let Some(name) = &args.class_init_name {
        options.class_initializer_name = name.clone();
    }
    if let Some(encoding) = args.literal_encoding {
        options.literal_encoding = encoding.into();
    }
    Ok(options)
}

pub fn load_input(path: &Path) -> Result<NormalizeInput> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Bind and normalize `input`. Binding failures are errors; normalization
/// failures are reported as diagnostics and leave the unit as bound.
pub fn normalize(input: NormalizeInput, options: &NormalizerOptions) -> Result<NormalizeResult> {
    let NormalizeInput {
        mut bindings,
        mut unit,
    } = input;
    let _span = info_span!("normalize_file", file = %unit.file_name).entered();

    let bind_stats = bind_unit(&mut bindings, &mut unit)
        .with_context(|| format!("failed to bind {}", unit.file_name))?;
    let bound_constants = bind_field_constants(&mut bindings, &unit)
        .with_context(|| format!("failed to fold constants of {}", unit.file_name))?;
    debug!(?bind_stats, bound_constants, "unit bound");

    let (stats, diagnostics) = match normalize_unit(&mut bindings, &mut unit, options) {
        Ok(stats) => (Some(stats), Vec::new()),
        Err(err) => (None, vec![err.to_diagnostic(&unit.file_name)]),
    };
    Ok(NormalizeResult {
        unit,
        bind_stats,
        bound_constants,
        stats,
        diagnostics,
    })
}

pub fn run(args: &CliArgs) -> Result<NormalizeResult> {
    let options = resolve_options(args)?;
    let input = load_input(&args.input)?;
    normalize(input, &options)
}
