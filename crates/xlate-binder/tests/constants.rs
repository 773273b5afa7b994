use super::*;
use crate::binder::bind_unit;
use xlate_ast::{AstFactory, BinaryOp, Member, PrimitiveType, TypeKind};
use xlate_common::Modifiers;

const STATIC_FINAL: Modifiers = Modifiers::STATIC.union(Modifiers::FINAL);

fn prim(p: PrimitiveType) -> TypeRef {
    TypeRef::Primitive(p)
}

fn constant_of(table: &BindingTable, decl: &TypeDeclaration, name: &str) -> Option<ConstantValue> {
    let (_, frag) = decl.find_field(name)?;
    table.variable(frag.binding?).ok()?.constant_value.clone()
}

/// ```java
/// class Config {
///     static final int B = A + 1;      // forward reference
///     static final int A = 41;
///     static final long WIDE = A;      // int constant widened
///     static final String NAME = "v" + B;
///     static final int RUNTIME = compute();
///     static int NOT_FINAL = 3;
///     final double HALF = 0.5;
/// }
/// ```
fn config_unit() -> CompilationUnit {
    let mut unit = CompilationUnit::default();
    let mut f = AstFactory::new(&mut unit.node_ids);
    let a_ref = f.name("A", None);
    let one = f.int(1);
    let b_init = f.binary(a_ref, BinaryOp::Add, one);
    let b = f.field(STATIC_FINAL, prim(PrimitiveType::Int), "B", Some(b_init));
    let forty_one = f.int(41);
    let a = f.field(STATIC_FINAL, prim(PrimitiveType::Int), "A", Some(forty_one));
    let a_ref = f.name("A", None);
    let wide = f.field(STATIC_FINAL, prim(PrimitiveType::Long), "WIDE", Some(a_ref));
    let v = f.string("v");
    let b_ref = f.name("B", None);
    let name_init = f.binary(v, BinaryOp::Add, b_ref);
    let name = f.field(STATIC_FINAL, TypeRef::declared("String"), "NAME", Some(name_init));
    let call = f.call(None, "compute", Vec::new());
    let runtime = f.field(STATIC_FINAL, prim(PrimitiveType::Int), "RUNTIME", Some(call));
    let three = f.int(3);
    let not_final = f.field(Modifiers::STATIC, prim(PrimitiveType::Int), "NOT_FINAL", Some(three));
    let half_value = f.literal(xlate_ast::Literal::Number(xlate_ast::NumberLiteral::Double(0.5)));
    let half = f.field(Modifiers::FINAL, prim(PrimitiveType::Double), "HALF", Some(half_value));
    let config = f.type_declaration(
        TypeKind::Class,
        "Config",
        Modifiers::empty(),
        vec![b, a, wide, name, runtime, not_final, half],
    );
    unit.types.push(config);
    unit
}

#[test]
fn test_constants_resolve_to_fixed_point() {
    let mut table = BindingTable::new();
    let mut unit = config_unit();
    bind_unit(&mut table, &mut unit).unwrap();
    let bound = bind_field_constants(&mut table, &unit).unwrap();
    assert_eq!(bound, 5);

    let config = &unit.types[0];
    assert_eq!(constant_of(&table, config, "A"), Some(ConstantValue::Int(41)));
    assert_eq!(constant_of(&table, config, "B"), Some(ConstantValue::Int(42)));
    assert_eq!(constant_of(&table, config, "WIDE"), Some(ConstantValue::Long(41)));
    assert_eq!(
        constant_of(&table, config, "NAME"),
        Some(ConstantValue::String("v42".into()))
    );
    assert_eq!(constant_of(&table, config, "HALF"), Some(ConstantValue::Double(0.5)));
    assert_eq!(constant_of(&table, config, "RUNTIME"), None);
    assert_eq!(constant_of(&table, config, "NOT_FINAL"), None);
}

#[test]
fn test_only_static_primitive_constants_are_primitive_constants() {
    let mut table = BindingTable::new();
    let mut unit = config_unit();
    bind_unit(&mut table, &mut unit).unwrap();
    bind_field_constants(&mut table, &unit).unwrap();

    let config = &unit.types[0];
    let id = |name: &str| config.find_field(name).and_then(|(_, frag)| frag.binding).unwrap();
    assert!(table.is_primitive_constant(id("A")).unwrap());
    assert!(table.is_primitive_constant(id("WIDE")).unwrap());
    // String constants and instance constants are not primitive constants.
    assert!(!table.is_primitive_constant(id("NAME")).unwrap());
    assert!(!table.is_primitive_constant(id("HALF")).unwrap());
    assert!(!table.is_primitive_constant(id("RUNTIME")).unwrap());
}

#[test]
fn test_string_field_rejects_numeric_constant() {
    let mut table = BindingTable::new();
    let mut unit = CompilationUnit::default();
    let mut f = AstFactory::new(&mut unit.node_ids);
    let seven = f.int(7);
    let bad = f.field(STATIC_FINAL, TypeRef::declared("String"), "S", Some(seven));
    let decl = f.type_declaration(TypeKind::Class, "Odd", Modifiers::empty(), vec![bad]);
    unit.types.push(decl);
    bind_unit(&mut table, &mut unit).unwrap();

    assert_eq!(bind_field_constants(&mut table, &unit).unwrap(), 0);
    assert_eq!(constant_of(&table, &unit.types[0], "S"), None);
}

#[test]
fn test_constants_in_member_and_local_types() {
    let mut table = BindingTable::new();
    let mut unit = CompilationUnit::default();
    let mut f = AstFactory::new(&mut unit.node_ids);
    let two = f.int(2);
    let k = f.field(STATIC_FINAL, prim(PrimitiveType::Int), "K", Some(two));
    let member = f.type_declaration(TypeKind::Class, "Member", Modifiers::STATIC, vec![k]);
    let three = f.int(3);
    let j = f.field(STATIC_FINAL, prim(PrimitiveType::Int), "J", Some(three));
    let local = f.type_declaration(TypeKind::Class, "Local", Modifiers::empty(), vec![j]);
    let local = f.statement(xlate_ast::StatementKind::TypeDeclaration(Box::new(local)));
    let method = f.declared_method("m", Modifiers::empty(), TypeRef::VOID, false, Vec::new(), vec![local]);
    let host = f.type_declaration(
        TypeKind::Class,
        "Host",
        Modifiers::empty(),
        vec![Member::Type(member), method],
    );
    unit.types.push(host);
    bind_unit(&mut table, &mut unit).unwrap();

    assert_eq!(bind_field_constants(&mut table, &unit).unwrap(), 2);
}
