use super::*;
use crate::factory::AstFactory;
use crate::ids::NodeIdAllocator;
use crate::types::TypeRef;
use xlate_common::{Modifiers, Span};

fn local_class(name: &str) -> TypeDeclaration {
    TypeDeclaration {
        id: Default::default(),
        span: Span::DUMMY,
        kind: TypeKind::Class,
        name: name.to_string(),
        modifiers: Modifiers::empty(),
        extends: None,
        binding: None,
        enum_constants: Vec::new(),
        members: Vec::new(),
    }
}

fn body(ids: &mut NodeIdAllocator) -> Vec<Statement> {
    let mut f = AstFactory::new(ids);
    let top = f.statement(StatementKind::TypeDeclaration(Box::new(local_class("Top"))));
    let in_block = f.statement(StatementKind::TypeDeclaration(Box::new(local_class("InBlock"))));
    let block = f.block(vec![in_block]);
    let block = f.statement(StatementKind::Block(block));
    let in_then = f.statement(StatementKind::TypeDeclaration(Box::new(local_class("InThen"))));
    let cond = f.name("flag", None);
    let branch = f.statement(StatementKind::If {
        condition: cond,
        then_branch: Box::new(in_then),
        else_branch: None,
    });
    let in_finally = f.statement(StatementKind::TypeDeclaration(Box::new(local_class("InFinally"))));
    let try_body = f.block(Vec::new());
    let finally = f.block(vec![in_finally]);
    let try_stmt = f.statement(StatementKind::Try {
        body: try_body,
        catches: Vec::new(),
        finally: Some(finally),
    });
    let ret = f.statement(StatementKind::Return(None));
    vec![top, block, branch, try_stmt, ret]
}

#[test]
fn test_for_each_local_type_reaches_nested_statements() {
    let mut ids = NodeIdAllocator::new();
    let statements = body(&mut ids);
    let mut names = Vec::new();
    for_each_local_type(&statements, &mut |decl| names.push(decl.name.clone()));
    assert_eq!(names, vec!["Top", "InBlock", "InThen", "InFinally"]);
}

#[test]
fn test_try_for_each_local_type_mut_stops_on_error() {
    let mut ids = NodeIdAllocator::new();
    let mut statements = body(&mut ids);
    let mut seen = 0;
    let result = try_for_each_local_type_mut(&mut statements, &mut |decl| {
        seen += 1;
        if decl.name == "InBlock" {
            return Err(decl.name.clone());
        }
        decl.modifiers = Modifiers::FINAL;
        Ok(())
    });
    assert_eq!(result, Err("InBlock".to_string()));
    assert_eq!(seen, 2);
    let StatementKind::TypeDeclaration(first) = &statements[0].kind else {
        panic!("expected a local type");
    };
    assert_eq!(first.modifiers, Modifiers::FINAL);
}

#[test]
fn test_body_statements_cover_methods_and_initializers() {
    let mut ids = NodeIdAllocator::new();
    let mut f = AstFactory::new(&mut ids);
    let ret = f.statement(StatementKind::Return(None));
    let run = f.method_declaration(
        "run",
        Modifiers::PUBLIC,
        TypeRef::VOID,
        false,
        crate::ids::MethodId(0),
        vec![ret],
    );
    let empty = f.statement(StatementKind::Empty);
    let init_body = f.block(vec![empty]);
    let mut decl = local_class("Holder");
    decl.members.push(Member::Method(run));
    decl.members.push(Member::Initializer(Initializer {
        id: Default::default(),
        span: Span::DUMMY,
        is_static: true,
        body: init_body,
    }));
    decl.members.push(Member::Type(local_class("Inner")));

    let lens: Vec<usize> = decl.body_statements().map(<[Statement]>::len).collect();
    assert_eq!(lens, vec![1, 1]);
    assert_eq!(decl.body_statements_mut().count(), 2);
}
