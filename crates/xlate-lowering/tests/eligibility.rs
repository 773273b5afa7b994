use super::*;
use xlate_ast::{BinaryOp, NodeIdAllocator, NumberLiteral, PrimitiveType, TypeKind};
use xlate_binder::{BindingTable, TypeDescriptor, VariableBinding};
use xlate_common::Modifiers;

struct Fixture {
    table: BindingTable,
    ids: NodeIdAllocator,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            table: BindingTable::new(),
            ids: NodeIdAllocator::new(),
        }
    }

    fn static_field(&mut self, name: &str, ty: TypeRef, value: Option<ConstantValue>) -> VariableId {
        let owner = self.table.lookup_type("Holder").unwrap_or_else(|| {
            self.table.add_type(TypeDescriptor {
                name: "Holder".to_string(),
                kind: TypeKind::Class,
                modifiers: Modifiers::empty(),
                superclass: None,
                declaring_type: None,
            })
        });
        let modifiers = if value.is_some() {
            Modifiers::STATIC | Modifiers::FINAL
        } else {
            Modifiers::STATIC
        };
        self.table.add_variable(VariableBinding {
            name: name.to_string(),
            ty,
            modifiers,
            declaring_type: Some(owner),
            is_field: true,
            constant_value: value,
        })
    }

    fn factory(&mut self) -> AstFactory<'_> {
        AstFactory::new(&mut self.ids)
    }
}

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

#[test]
fn test_plain_literals_are_kept() {
    let mut fx = Fixture::new();
    let var = fx.static_field("x", int(), None);
    let mut f = fx.factory();
    let literals = [
        f.literal(Literal::Boolean(true)),
        f.literal(Literal::Char(u16::from(b'c'))),
        f.literal(Literal::Null),
        f.literal(Literal::Number(NumberLiteral::Double(2.5))),
        f.string("plain"),
    ];
    for lit in &literals {
        assert_eq!(
            classify_initializer(&fx.table, lit, var, LiteralEncoding::Cpp).unwrap(),
            LiteralEligibility::Keep
        );
    }
}

#[test]
fn test_string_literal_outside_encoding_is_demoted() {
    let mut fx = Fixture::new();
    let var = fx.static_field("s", TypeRef::declared("String"), None);
    let nul = fx.factory().string("a\u{0}b");
    assert_eq!(
        classify_initializer(&fx.table, &nul, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Demote
    );

    // Representable for C++ literals, not for plain ASCII.
    let accented = fx.factory().string("caf\u{e9}");
    assert_eq!(
        classify_initializer(&fx.table, &accented, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Keep
    );
    assert_eq!(
        classify_initializer(&fx.table, &accented, var, LiteralEncoding::Ascii).unwrap(),
        LiteralEligibility::Demote
    );
}

#[test]
fn test_primitive_constant_is_kept_without_folding() {
    let mut fx = Fixture::new();
    let var = fx.static_field("K", int(), Some(ConstantValue::Int(3)));
    let mut f = fx.factory();
    let one = f.int(1);
    let two = f.int(2);
    let sum = f.binary(one, BinaryOp::Add, two);
    assert_eq!(
        classify_initializer(&fx.table, &sum, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Keep
    );
}

#[test]
fn test_constant_expression_folds() {
    let mut fx = Fixture::new();
    let var = fx.static_field("x", int(), None);
    let mut f = fx.factory();
    let six = f.int(6);
    let seven = f.int(7);
    let product = f.binary(six, BinaryOp::Mul, seven);
    let a = f.string("a");
    let b = f.string("b");
    let concat = f.binary(a, BinaryOp::Add, b);

    assert_eq!(
        classify_initializer(&fx.table, &product, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Fold(ConstantValue::Int(42))
    );
    assert_eq!(
        classify_initializer(&fx.table, &concat, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Fold(ConstantValue::String("ab".into()))
    );
}

#[test]
fn test_unrepresentable_string_constant_is_demoted() {
    let mut fx = Fixture::new();
    let var = fx.static_field("s", TypeRef::declared("String"), None);
    let mut f = fx.factory();
    let a = f.string("x");
    let b = f.string("\u{7f}");
    let concat = f.binary(a, BinaryOp::Add, b);
    assert_eq!(
        classify_initializer(&fx.table, &concat, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Demote
    );
}

#[test]
fn test_non_constant_is_demoted() {
    let mut fx = Fixture::new();
    let var = fx.static_field("x", int(), None);
    let call = fx.factory().call(None, "compute", Vec::new());
    assert_eq!(
        classify_initializer(&fx.table, &call, var, LiteralEncoding::Cpp).unwrap(),
        LiteralEligibility::Demote
    );
}

#[test]
fn test_unknown_variable_is_an_error() {
    let mut fx = Fixture::new();
    let call = fx.factory().call(None, "compute", Vec::new());
    let err = classify_initializer(&fx.table, &call, VariableId(99), LiteralEncoding::Cpp)
        .unwrap_err();
    assert_eq!(err, ResolveError::UnknownVariable(VariableId(99)));
}

#[test]
fn test_folded_literal_takes_field_type() {
    let mut ids = NodeIdAllocator::new();
    let mut f = AstFactory::new(&mut ids);
    let long = TypeRef::Primitive(PrimitiveType::Long);
    let lit = folded_literal(&mut f, &ConstantValue::Int(7), &long);
    assert_eq!(lit.as_literal(), Some(&Literal::Number(NumberLiteral::Long(7))));
    assert_eq!(lit.ty, Some(long));

    let string = TypeRef::declared("String");
    let lit = folded_literal(&mut f, &ConstantValue::String("s".into()), &string);
    assert_eq!(lit.as_literal(), Some(&Literal::String("s".into())));
}
