use super::*;
use crate::factory::AstFactory;
use crate::ids::{MethodId, NodeIdAllocator};
use crate::types::{PrimitiveType, TypeName, TypeRef};
use xlate_common::{Modifiers, Span};

fn expr(kind: ExpressionKind) -> Expression {
    Expression {
        id: Default::default(),
        span: Span::DUMMY,
        ty: None,
        kind,
    }
}

fn lit(literal: Literal) -> Expression {
    expr(ExpressionKind::Literal(literal))
}

#[test]
fn test_print_literals() {
    assert_eq!(AstPrinter::expression_to_string(&lit(Literal::Null)), "null");
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::Boolean(true))),
        "true"
    );
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::Number(NumberLiteral::Long(5)))),
        "5L"
    );
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::Number(NumberLiteral::Float(1.5)))),
        "1.5f"
    );
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::Number(NumberLiteral::Double(1e10)))),
        "1.0E10"
    );
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::Char(u16::from(b'\'')))),
        "'\\''"
    );
}

#[test]
fn test_print_string_escapes() {
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::String("a\"b\n".into()))),
        "\"a\\\"b\\n\""
    );
    assert_eq!(
        AstPrinter::expression_to_string(&lit(Literal::String("\u{e9}".into()))),
        "\"\\u00e9\""
    );
}

#[test]
fn test_print_calls_and_operators() {
    let mut ids = NodeIdAllocator::new();
    let mut f = AstFactory::new(&mut ids);
    let this = f.this();
    let arg = f.int(2);
    let call = f.call(Some(this), "compute", vec![arg]);
    let one = f.int(1);
    let sum = f.binary(call, BinaryOp::Add, one);
    assert_eq!(AstPrinter::expression_to_string(&sum), "this.compute(2) + 1");

    let created = f.new_instance(TypeName::new("java.util.ArrayList"), vec![]);
    assert_eq!(AstPrinter::expression_to_string(&created), "new ArrayList()");
}

#[test]
fn test_print_class_with_members() {
    let mut ids = NodeIdAllocator::new();
    let mut f = AstFactory::new(&mut ids);
    let super_call = f.super_constructor_call(MethodId(0));
    let value = f.int(1);
    let assign = f.assignment_statement("a", None, value);
    let ctor = f.method_declaration(
        "<init>",
        Modifiers::PUBLIC,
        TypeRef::VOID,
        true,
        MethodId(1),
        vec![super_call, assign],
    );
    let clinit = f.method_declaration(
        "initialize",
        Modifiers::PUBLIC | Modifiers::STATIC,
        TypeRef::VOID,
        false,
        MethodId(2),
        vec![],
    );
    let field = FieldDeclaration {
        id: f.fresh_id(),
        span: Span::DUMMY,
        modifiers: Modifiers::PRIVATE,
        ty: TypeRef::Primitive(PrimitiveType::Int),
        fragments: vec![VariableFragment {
            span: Span::DUMMY,
            name: "a".into(),
            initializer: None,
            binding: None,
        }],
    };
    let decl = TypeDeclaration {
        id: f.fresh_id(),
        span: Span::DUMMY,
        kind: TypeKind::Class,
        name: "Foo".into(),
        modifiers: Modifiers::PUBLIC,
        extends: Some(TypeName::new("java.lang.Object")),
        binding: None,
        enum_constants: vec![],
        members: vec![
            Member::Field(field),
            Member::Method(ctor),
            Member::Method(clinit),
        ],
    };

    let expected = "\
public class Foo extends Object {
  private int a;
  public Foo() {
    super();
    a = 1;
  }
  public static void initialize() {}
}
";
    assert_eq!(AstPrinter::type_to_string(&decl), expected);
}

#[test]
fn test_print_try_and_if() {
    let mut ids = NodeIdAllocator::new();
    let mut f = AstFactory::new(&mut ids);
    let load = f.call(None, "load", vec![]);
    let load_stmt = f.expression_statement(load);
    let body = f.block(vec![load_stmt]);
    let catch_body = f.block(vec![]);
    let try_stmt = f.statement(StatementKind::Try {
        body,
        catches: vec![CatchClause {
            span: Span::DUMMY,
            exception: Parameter {
                name: "e".into(),
                ty: TypeRef::declared("java.io.IOException"),
                binding: None,
            },
            body: catch_body,
        }],
        finally: None,
    });
    assert_eq!(
        AstPrinter::statement_to_string(&try_stmt),
        "try {\n  load();\n}\ncatch (IOException e) {}"
    );

    let cond = f.name("ready", None);
    let ret = f.statement(StatementKind::Return(None));
    let if_stmt = f.statement(StatementKind::If {
        condition: cond,
        then_branch: Box::new(ret),
        else_branch: None,
    });
    assert_eq!(
        AstPrinter::statement_to_string(&if_stmt),
        "if (ready)\n  return;"
    );
}
