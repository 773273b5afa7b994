use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

use xlate_ast::{AstFactory, AstPrinter, CompilationUnit, PrimitiveType, TypeKind, TypeRef};
use xlate_cli::args::{CliArgs, OutputFormat};
use xlate_cli::driver::{load_input, normalize, resolve_options, run};
use xlate_cli::tracing_config::LogFormat;
use xlate_common::diagnostics::diagnostic_codes;
use xlate_common::{LiteralEncoding, Modifiers};
use xlate_lowering::NormalizerOptions;

/// ```java
/// class Counter {
///     int count = 1;
///     static int seed = next();
/// }
/// ```
fn counter_unit(with_user_initialize: bool) -> CompilationUnit {
    let mut unit = CompilationUnit {
        file_name: "Counter.java".to_string(),
        ..Default::default()
    };
    let mut f = AstFactory::new(&mut unit.node_ids);
    let int = TypeRef::Primitive(PrimitiveType::Int);
    let one = f.int(1);
    let count = f.field(Modifiers::empty(), int.clone(), "count", Some(one));
    let next = f.call(None, "next", Vec::new());
    let seed = f.field(Modifiers::STATIC, int, "seed", Some(next));
    let mut members = vec![count, seed];
    if with_user_initialize {
        members.push(f.declared_method(
            "initialize",
            Modifiers::STATIC,
            TypeRef::VOID,
            false,
            Vec::new(),
            Vec::new(),
        ));
    }
    let decl = f.type_declaration(TypeKind::Class, "Counter", Modifiers::empty(), members);
    unit.types.push(decl);
    unit
}

fn write_input(dir: &TempDir, unit: &CompilationUnit) -> std::path::PathBuf {
    let path = dir.path().join("input.json");
    let doc = serde_json::json!({ "unit": unit });
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
    path
}

fn parse_args(input: &Path, extra: &[&str]) -> CliArgs {
    let mut argv = vec!["xlate-normalize".to_string(), input.display().to_string()];
    argv.extend(extra.iter().map(|s| (*s).to_string()));
    CliArgs::parse_from(argv)
}

#[test]
fn test_run_renders_normalized_text() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &counter_unit(false));
    let args = parse_args(&input, &[]);

    let result = run(&args).unwrap();
    assert!(!result.has_errors());
    assert_eq!(
        result.render(OutputFormat::Text).unwrap(),
        "class Counter {\n  int count;\n  static int seed;\n  Counter() {\n    super();\n    count = 1;\n  }\n  public static void initialize() {\n    seed = next();\n  }\n}\n"
    );
    let stats = result.stats.unwrap();
    assert_eq!(stats.default_constructors, 1);
    assert_eq!(stats.class_initializers, 1);
    assert_eq!(result.bind_stats.types, 1);
}

#[test]
fn test_json_output_reloads() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &counter_unit(false));
    let result = run(&parse_args(&input, &["--format", "json"])).unwrap();

    let json = result.render(OutputFormat::Json).unwrap();
    let unit: CompilationUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(unit.types[0].constructors().count(), 1);
    assert!(unit.types[0].find_method("initialize", 0).is_some());
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &counter_unit(false));
    let config = dir.path().join("options.json");
    std::fs::write(
        &config,
        r#"{ "class_initializer_name": "clinit", "literal_encoding": "cpp" }"#,
    )
    .unwrap();

    let config_arg = config.display().to_string();
    let args = parse_args(&input, &["--config", &config_arg, "--literal-encoding", "ascii"]);
    let options = resolve_options(&args).unwrap();
    assert_eq!(
        options,
        NormalizerOptions {
            class_initializer_name: "clinit".to_string(),
            literal_encoding: LiteralEncoding::Ascii,
        }
    );

    let args = parse_args(&input, &["--config", &config_arg, "--class-init-name", "setup"]);
    let options = resolve_options(&args).unwrap();
    assert_eq!(options.class_initializer_name, "setup");
    assert_eq!(options.literal_encoding, LiteralEncoding::Cpp);
}

#[test]
fn test_collision_is_reported_as_diagnostic() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &counter_unit(true));
    let loaded = load_input(&input).unwrap();
    let source = AstPrinter::unit_to_string(&loaded.unit);

    let result = normalize(loaded, &NormalizerOptions::default()).unwrap();
    assert!(result.has_errors());
    assert!(result.stats.is_none());
    assert_eq!(result.render(OutputFormat::Text).unwrap(), source);
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, diagnostic_codes::RESERVED_NAME_COLLISION);
    assert_eq!(diagnostic.file, "Counter.java");
}

#[test]
fn test_malformed_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{ \"unit\": [").unwrap();
    let err = load_input(&input).err().unwrap();
    assert!(err.to_string().starts_with("failed to parse"));

    let missing = dir.path().join("missing.json");
    let err = load_input(&missing).err().unwrap();
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("TREE"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
}
