use super::*;
use xlate_ast::{AstFactory, BinaryOp, PrimitiveType, TypeKind, TypeName};
use xlate_common::names::OBJECT_TYPE_NAME;

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

fn fragment_binding(decl: &TypeDeclaration, name: &str) -> VariableId {
    decl.find_field(name)
        .and_then(|(_, frag)| frag.binding)
        .unwrap_or_else(|| panic!("field {name} not bound"))
}

/// ```java
/// package p;
/// class Outer {
///     static final int BASE = 1;
///     int total = BASE + 1;
///     class Inner { int twice = BASE * 2; }
///     void run(int total) { int local = total; this.total = local; }
/// }
/// ```
fn sample_unit() -> CompilationUnit {
    let mut unit = CompilationUnit {
        file_name: "Outer.java".to_string(),
        package: Some("p".to_string()),
        ..Default::default()
    };
    let mut f = AstFactory::new(&mut unit.node_ids);

    let one = f.int(1);
    let base = f.field(Modifiers::STATIC | Modifiers::FINAL, int(), "BASE", Some(one));
    let base_ref = f.name("BASE", None);
    let one = f.int(1);
    let sum = f.binary(base_ref, BinaryOp::Add, one);
    let total = f.field(Modifiers::empty(), int(), "total", Some(sum));

    let base_ref = f.name("BASE", None);
    let two = f.int(2);
    let product = f.binary(base_ref, BinaryOp::Mul, two);
    let twice = f.field(Modifiers::empty(), int(), "twice", Some(product));
    let inner = f.type_declaration(TypeKind::Class, "Inner", Modifiers::empty(), vec![twice]);

    let param_ref = f.name("total", None);
    let local = f.local_variable(int(), "local", Some(param_ref));
    let this = f.this();
    let target = f.expr(ExpressionKind::FieldAccess {
        target: Box::new(this),
        name: "total".to_string(),
        binding: None,
    });
    let local_ref = f.name("local", None);
    let store = f.assignment(target, local_ref);
    let store = f.expression_statement(store);
    let run = f.declared_method(
        "run",
        Modifiers::empty(),
        TypeRef::VOID,
        false,
        vec![Parameter {
            name: "total".to_string(),
            ty: int(),
            binding: None,
        }],
        vec![local, store],
    );

    let outer = f.type_declaration(
        TypeKind::Class,
        "Outer",
        Modifiers::empty(),
        vec![base, total, Member::Type(inner), run],
    );
    unit.types.push(outer);
    unit
}

#[test]
fn test_declares_types_with_qualified_names() {
    let mut table = BindingTable::new();
    let mut unit = sample_unit();
    let stats = bind_unit(&mut table, &mut unit).unwrap();
    assert_eq!(stats.types, 2);
    assert_eq!(stats.fields, 3);
    assert_eq!(stats.methods, 1);

    let outer = unit.types[0].binding.expect("outer bound");
    let desc = table.type_descriptor(outer).unwrap();
    assert_eq!(desc.name, "p.Outer");
    assert_eq!(table.superclass(outer).ok(), table.object_type());

    let inner = unit.types[0].member_types().next().unwrap();
    let inner_desc = table.type_descriptor(inner.binding.unwrap()).unwrap();
    assert_eq!(inner_desc.name, "p.Outer.Inner");
    assert_eq!(inner_desc.declaring_type, Some(outer));
}

#[test]
fn test_names_resolve_to_enclosing_fields() {
    let mut table = BindingTable::new();
    let mut unit = sample_unit();
    bind_unit(&mut table, &mut unit).unwrap();

    let outer = &unit.types[0];
    let base = fragment_binding(outer, "BASE");
    let (_, total) = outer.find_field("total").unwrap();
    let ExpressionKind::Binary { lhs, .. } = &total.initializer.as_ref().unwrap().kind else {
        panic!("expected binary initializer");
    };
    assert_eq!(lhs.as_name().unwrap().binding, Some(base));

    let inner = outer.member_types().next().unwrap();
    let (_, twice) = inner.find_field("twice").unwrap();
    let ExpressionKind::Binary { lhs, .. } = &twice.initializer.as_ref().unwrap().kind else {
        panic!("expected binary initializer");
    };
    assert_eq!(lhs.as_name().unwrap().binding, Some(base));
}

#[test]
fn test_parameters_and_locals_shadow_fields() {
    let mut table = BindingTable::new();
    let mut unit = sample_unit();
    bind_unit(&mut table, &mut unit).unwrap();

    let outer = &unit.types[0];
    let field = fragment_binding(outer, "total");
    let run = outer.find_method("run", 1).unwrap();
    let param = run.parameters[0].binding.expect("parameter bound");
    assert_ne!(param, field);
    assert!(!table.variable(param).unwrap().is_field);

    let StatementKind::LocalVariable { fragments, .. } = &run.statements()[0].kind else {
        panic!("expected local variable");
    };
    let init = fragments[0].initializer.as_ref().unwrap();
    assert_eq!(init.as_name().unwrap().binding, Some(param));

    let StatementKind::Expression(store) = &run.statements()[1].kind else {
        panic!("expected expression statement");
    };
    let ExpressionKind::Assignment { lhs, rhs, .. } = &store.kind else {
        panic!("expected assignment");
    };
    let ExpressionKind::FieldAccess { binding, .. } = &lhs.kind else {
        panic!("expected field access");
    };
    assert_eq!(*binding, Some(field));
    assert_eq!(rhs.as_name().unwrap().binding, fragments[0].binding);
}

#[test]
fn test_extends_resolves_declared_and_external_types() {
    let mut table = BindingTable::new();
    let mut unit = CompilationUnit {
        file_name: "Shapes.java".to_string(),
        ..Default::default()
    };
    let mut f = AstFactory::new(&mut unit.node_ids);
    let base = f.type_declaration(TypeKind::Class, "Shape", Modifiers::ABSTRACT, Vec::new());
    let mut circle = f.type_declaration(TypeKind::Class, "Circle", Modifiers::empty(), Vec::new());
    circle.extends = Some(TypeName::new("Shape"));
    let mut failure = f.type_declaration(TypeKind::Class, "Failure", Modifiers::empty(), Vec::new());
    failure.extends = Some(TypeName::new("java.io.IOException"));
    unit.types.extend([base, circle, failure]);

    bind_unit(&mut table, &mut unit).unwrap();

    let shape = unit.types[0].binding.unwrap();
    let circle = unit.types[1].binding.unwrap();
    assert_eq!(table.superclass(circle), Ok(shape));
    assert_eq!(unit.types[1].extends.as_ref().unwrap().binding, Some(shape));

    let failure = unit.types[2].binding.unwrap();
    let io = table.superclass(failure).unwrap();
    assert_eq!(table.type_descriptor(io).unwrap().name, "java.io.IOException");
    let io_parent = table.superclass(io).unwrap();
    assert_eq!(table.type_descriptor(io_parent).unwrap().name, OBJECT_TYPE_NAME);
}

#[test]
fn test_interface_fields_are_implicitly_static_final() {
    let mut table = BindingTable::new();
    let mut unit = CompilationUnit::default();
    let mut f = AstFactory::new(&mut unit.node_ids);
    let one = f.int(1);
    let limit = f.field(Modifiers::empty(), int(), "LIMIT", Some(one));
    let api = f.type_declaration(TypeKind::Interface, "Api", Modifiers::PUBLIC, vec![limit]);
    unit.types.push(api);

    bind_unit(&mut table, &mut unit).unwrap();
    let limit = fragment_binding(&unit.types[0], "LIMIT");
    let modifiers = table.variable(limit).unwrap().modifiers;
    assert!(modifiers.is_static());
    assert!(modifiers.is_final());
}

#[test]
fn test_local_types_are_declared_with_unique_names() {
    let mut table = BindingTable::new();
    let mut unit = CompilationUnit::default();
    let mut f = AstFactory::new(&mut unit.node_ids);
    let first = f.type_declaration(TypeKind::Class, "Helper", Modifiers::empty(), Vec::new());
    let first = f.statement(StatementKind::TypeDeclaration(Box::new(first)));
    let second = f.type_declaration(TypeKind::Class, "Helper", Modifiers::empty(), Vec::new());
    let second = f.statement(StatementKind::TypeDeclaration(Box::new(second)));
    let nested = f.block(vec![second]);
    let nested = f.statement(StatementKind::Block(nested));
    let a = f.declared_method("a", Modifiers::empty(), TypeRef::VOID, false, Vec::new(), vec![first]);
    let b = f.initializer(false, vec![nested]);
    let host = f.type_declaration(TypeKind::Class, "Host", Modifiers::empty(), vec![a, b]);
    unit.types.push(host);

    let stats = bind_unit(&mut table, &mut unit).unwrap();
    assert_eq!(stats.types, 3);
    assert!(table.lookup_type("Host.Helper").is_some());
    assert!(table.lookup_type("Host.Helper$1").is_some());
}

#[test]
fn test_existing_handles_are_kept() {
    let mut table = BindingTable::new();
    let mut unit = sample_unit();
    bind_unit(&mut table, &mut unit).unwrap();
    let types = table.type_count();
    let before = unit.types[0].binding;

    let stats = bind_unit(&mut table, &mut unit).unwrap();
    assert_eq!(stats, BindStats::default());
    assert_eq!(table.type_count(), types);
    assert_eq!(unit.types[0].binding, before);
}

#[test]
fn test_stale_type_handle_is_an_error() {
    let mut table = BindingTable::new();
    let mut unit = sample_unit();
    unit.types[0].binding = Some(TypeId(77));
    assert_eq!(
        bind_unit(&mut table, &mut unit),
        Err(ResolveError::UnknownType(TypeId(77)))
    );
}
