//! Node construction with fresh identities.
//!
//! Every node built here gets a new [`NodeId`] from the compilation unit's
//! allocator and a dummy span, which marks it as synthesized.

use crate::ids::{MethodId, NodeId, NodeIdAllocator, VariableId};
use crate::node::*;
use crate::types::{ConstantValue, TypeName, TypeRef};
use xlate_common::{Modifiers, Span};

pub struct AstFactory<'a> {
    ids: &'a mut NodeIdAllocator,
}

impl<'a> AstFactory<'a> {
    pub const fn new(ids: &'a mut NodeIdAllocator) -> Self {
        AstFactory { ids }
    }

    #[inline]
    pub fn fresh_id(&mut self) -> NodeId {
        self.ids.fresh()
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn expr(&mut self, kind: ExpressionKind) -> Expression {
        Expression {
            id: self.fresh_id(),
            span: Span::DUMMY,
            ty: None,
            kind,
        }
    }

    pub fn typed_expr(&mut self, kind: ExpressionKind, ty: TypeRef) -> Expression {
        Expression {
            ty: Some(ty),
            ..self.expr(kind)
        }
    }

    pub fn name(&mut self, identifier: impl Into<String>, binding: Option<VariableId>) -> Expression {
        self.expr(ExpressionKind::Name(Name {
            identifier: identifier.into(),
            binding,
        }))
    }

    pub fn literal(&mut self, literal: Literal) -> Expression {
        self.expr(ExpressionKind::Literal(literal))
    }

    /// Literal node for a folded constant, typed as `ty`.
    pub fn literal_from_constant(&mut self, value: &ConstantValue, ty: TypeRef) -> Expression {
        self.typed_expr(ExpressionKind::Literal(Literal::from_constant(value)), ty)
    }

    pub fn int(&mut self, value: i32) -> Expression {
        self.literal(Literal::Number(NumberLiteral::Int(value)))
    }

    pub fn string(&mut self, value: impl Into<String>) -> Expression {
        self.literal(Literal::String(value.into()))
    }

    pub fn this(&mut self) -> Expression {
        self.expr(ExpressionKind::This)
    }

    pub fn binary(&mut self, lhs: Expression, op: BinaryOp, rhs: Expression) -> Expression {
        self.expr(ExpressionKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn assignment(&mut self, lhs: Expression, rhs: Expression) -> Expression {
        self.expr(ExpressionKind::Assignment {
            op: AssignOp::Assign,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn call(
        &mut self,
        receiver: Option<Expression>,
        name: impl Into<String>,
        arguments: Vec<Expression>,
    ) -> Expression {
        self.expr(ExpressionKind::MethodCall {
            receiver: receiver.map(Box::new),
            name: name.into(),
            arguments,
            binding: None,
        })
    }

    pub fn new_instance(&mut self, ty: TypeName, arguments: Vec<Expression>) -> Expression {
        self.expr(ExpressionKind::New {
            ty,
            arguments,
            binding: None,
        })
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn statement(&mut self, kind: StatementKind) -> Statement {
        Statement {
            id: self.fresh_id(),
            span: Span::DUMMY,
            kind,
        }
    }

    pub fn expression_statement(&mut self, expr: Expression) -> Statement {
        self.statement(StatementKind::Expression(expr))
    }

    /// `name = value;`
    pub fn assignment_statement(
        &mut self,
        name: impl Into<String>,
        binding: Option<VariableId>,
        value: Expression,
    ) -> Statement {
        let target = self.name(name, binding);
        let assign = self.assignment(target, value);
        self.expression_statement(assign)
    }

    /// Argument-less `super()` bound to `binding`.
    pub fn super_constructor_call(&mut self, binding: MethodId) -> Statement {
        self.statement(StatementKind::SuperConstructorCall(ConstructorCall {
            arguments: Vec::new(),
            binding: Some(binding),
        }))
    }

    /// `this(args);`
    pub fn this_constructor_call(&mut self, arguments: Vec<Expression>) -> Statement {
        self.statement(StatementKind::ConstructorCall(ConstructorCall {
            arguments,
            binding: None,
        }))
    }

    /// `ty name = init;`
    pub fn local_variable(
        &mut self,
        ty: TypeRef,
        name: impl Into<String>,
        initializer: Option<Expression>,
    ) -> Statement {
        self.statement(StatementKind::LocalVariable {
            modifiers: Modifiers::empty(),
            ty,
            fragments: vec![VariableFragment {
                span: Span::DUMMY,
                name: name.into(),
                initializer,
                binding: None,
            }],
        })
    }

    pub fn block(&mut self, statements: Vec<Statement>) -> Block {
        Block {
            id: self.fresh_id(),
            span: Span::DUMMY,
            statements,
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn type_declaration(
        &mut self,
        kind: TypeKind,
        name: impl Into<String>,
        modifiers: Modifiers,
        members: Vec<Member>,
    ) -> TypeDeclaration {
        TypeDeclaration {
            id: self.fresh_id(),
            span: Span::DUMMY,
            kind,
            name: name.into(),
            modifiers,
            extends: None,
            binding: None,
            enum_constants: Vec::new(),
            members,
        }
    }

    /// Single-fragment field declaration.
    pub fn field(
        &mut self,
        modifiers: Modifiers,
        ty: TypeRef,
        name: impl Into<String>,
        initializer: Option<Expression>,
    ) -> Member {
        Member::Field(FieldDeclaration {
            id: self.fresh_id(),
            span: Span::DUMMY,
            modifiers,
            ty,
            fragments: vec![VariableFragment {
                span: Span::DUMMY,
                name: name.into(),
                initializer,
                binding: None,
            }],
        })
    }

    pub fn initializer(&mut self, is_static: bool, statements: Vec<Statement>) -> Member {
        let body = self.block(statements);
        Member::Initializer(Initializer {
            id: self.fresh_id(),
            span: Span::DUMMY,
            is_static,
            body,
        })
    }

    /// Unresolved method or constructor as written in source.
    pub fn declared_method(
        &mut self,
        name: impl Into<String>,
        modifiers: Modifiers,
        return_type: TypeRef,
        is_constructor: bool,
        parameters: Vec<Parameter>,
        statements: Vec<Statement>,
    ) -> Member {
        let body = self.block(statements);
        Member::Method(MethodDeclaration {
            id: self.fresh_id(),
            span: Span::DUMMY,
            name: name.into(),
            modifiers,
            return_type,
            parameters,
            is_constructor,
            body: Some(body),
            binding: None,
            is_synthetic: false,
        })
    }

    /// Synthetic method or constructor with the given body.
    pub fn method_declaration(
        &mut self,
        name: impl Into<String>,
        modifiers: Modifiers,
        return_type: TypeRef,
        is_constructor: bool,
        binding: MethodId,
        statements: Vec<Statement>,
    ) -> MethodDeclaration {
        let body = self.block(statements);
        MethodDeclaration {
            id: self.fresh_id(),
            span: Span::DUMMY,
            name: name.into(),
            modifiers,
            return_type,
            parameters: Vec::new(),
            is_constructor,
            body: Some(body),
            binding: Some(binding),
            is_synthetic: true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/factory.rs"]
mod tests;
