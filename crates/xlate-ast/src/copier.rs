//! Deep subtree copies with fresh node identities.
//!
//! A statement list spliced into several constructors must not alias: each
//! insertion site gets its own copy, and every copied node gets a new id.
//! Resolver handles and spans are carried over unchanged.

use crate::ids::NodeIdAllocator;
use crate::node::*;

pub struct NodeCopier<'a> {
    ids: &'a mut NodeIdAllocator,
}

impl<'a> NodeCopier<'a> {
    pub const fn new(ids: &'a mut NodeIdAllocator) -> Self {
        NodeCopier { ids }
    }

    pub fn copy_statements(&mut self, statements: &[Statement]) -> Vec<Statement> {
        statements.iter().map(|stmt| self.copy_statement(stmt)).collect()
    }

    pub fn copy_statement(&mut self, stmt: &Statement) -> Statement {
        let kind = match &stmt.kind {
            StatementKind::Expression(expr) => StatementKind::Expression(self.copy_expression(expr)),
            StatementKind::LocalVariable {
                modifiers,
                ty,
                fragments,
            } => StatementKind::LocalVariable {
                modifiers: *modifiers,
                ty: ty.clone(),
                fragments: fragments.iter().map(|f| self.copy_fragment(f)).collect(),
            },
            StatementKind::Block(block) => StatementKind::Block(self.copy_block(block)),
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => StatementKind::If {
                condition: self.copy_expression(condition),
                then_branch: Box::new(self.copy_statement(then_branch)),
                else_branch: else_branch
                    .as_ref()
                    .map(|stmt| Box::new(self.copy_statement(stmt))),
            },
            StatementKind::While { condition, body } => StatementKind::While {
                condition: self.copy_expression(condition),
                body: Box::new(self.copy_statement(body)),
            },
            StatementKind::For {
                init,
                condition,
                updates,
                body,
            } => StatementKind::For {
                init: self.copy_statements(init),
                condition: condition.as_ref().map(|c| self.copy_expression(c)),
                updates: self.copy_expressions(updates),
                body: Box::new(self.copy_statement(body)),
            },
            StatementKind::Try {
                body,
                catches,
                finally,
            } => StatementKind::Try {
                body: self.copy_block(body),
                catches: catches
                    .iter()
                    .map(|clause| CatchClause {
                        span: clause.span,
                        exception: clause.exception.clone(),
                        body: self.copy_block(&clause.body),
                    })
                    .collect(),
                finally: finally.as_ref().map(|block| self.copy_block(block)),
            },
            StatementKind::Return(expr) => {
                StatementKind::Return(expr.as_ref().map(|e| self.copy_expression(e)))
            }
            StatementKind::Throw(expr) => StatementKind::Throw(self.copy_expression(expr)),
            StatementKind::SuperConstructorCall(call) => {
                StatementKind::SuperConstructorCall(self.copy_constructor_call(call))
            }
            StatementKind::ConstructorCall(call) => {
                StatementKind::ConstructorCall(self.copy_constructor_call(call))
            }
            StatementKind::TypeDeclaration(decl) => {
                StatementKind::TypeDeclaration(Box::new(self.copy_type(decl)))
            }
            StatementKind::Empty => StatementKind::Empty,
        };
        Statement {
            id: self.ids.fresh(),
            span: stmt.span,
            kind,
        }
    }

    pub fn copy_block(&mut self, block: &Block) -> Block {
        Block {
            id: self.ids.fresh(),
            span: block.span,
            statements: self.copy_statements(&block.statements),
        }
    }

    pub fn copy_expressions(&mut self, exprs: &[Expression]) -> Vec<Expression> {
        exprs.iter().map(|e| self.copy_expression(e)).collect()
    }

    pub fn copy_expression(&mut self, expr: &Expression) -> Expression {
        let kind = match &expr.kind {
            ExpressionKind::Literal(lit) => ExpressionKind::Literal(lit.clone()),
            ExpressionKind::Name(name) => ExpressionKind::Name(name.clone()),
            ExpressionKind::This => ExpressionKind::This,
            ExpressionKind::FieldAccess {
                target,
                name,
                binding,
            } => ExpressionKind::FieldAccess {
                target: self.copy_boxed(target),
                name: name.clone(),
                binding: *binding,
            },
            ExpressionKind::Unary { op, operand } => ExpressionKind::Unary {
                op: *op,
                operand: self.copy_boxed(operand),
            },
            ExpressionKind::Postfix { op, operand } => ExpressionKind::Postfix {
                op: *op,
                operand: self.copy_boxed(operand),
            },
            ExpressionKind::Binary { op, lhs, rhs } => ExpressionKind::Binary {
                op: *op,
                lhs: self.copy_boxed(lhs),
                rhs: self.copy_boxed(rhs),
            },
            ExpressionKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => ExpressionKind::Conditional {
                condition: self.copy_boxed(condition),
                then_expr: self.copy_boxed(then_expr),
                else_expr: self.copy_boxed(else_expr),
            },
            ExpressionKind::Parenthesized(inner) => {
                ExpressionKind::Parenthesized(self.copy_boxed(inner))
            }
            ExpressionKind::Cast { ty, expr } => ExpressionKind::Cast {
                ty: ty.clone(),
                expr: self.copy_boxed(expr),
            },
            ExpressionKind::Assignment { op, lhs, rhs } => ExpressionKind::Assignment {
                op: *op,
                lhs: self.copy_boxed(lhs),
                rhs: self.copy_boxed(rhs),
            },
            ExpressionKind::MethodCall {
                receiver,
                name,
                arguments,
                binding,
            } => ExpressionKind::MethodCall {
                receiver: receiver.as_ref().map(|r| self.copy_boxed(r)),
                name: name.clone(),
                arguments: self.copy_expressions(arguments),
                binding: *binding,
            },
            ExpressionKind::New {
                ty,
                arguments,
                binding,
            } => ExpressionKind::New {
                ty: ty.clone(),
                arguments: self.copy_expressions(arguments),
                binding: *binding,
            },
        };
        Expression {
            id: self.ids.fresh(),
            span: expr.span,
            ty: expr.ty.clone(),
            kind,
        }
    }

    fn copy_boxed(&mut self, expr: &Expression) -> Box<Expression> {
        Box::new(self.copy_expression(expr))
    }

    fn copy_fragment(&mut self, frag: &VariableFragment) -> VariableFragment {
        VariableFragment {
            span: frag.span,
            name: frag.name.clone(),
            initializer: frag.initializer.as_ref().map(|e| self.copy_expression(e)),
            binding: frag.binding,
        }
    }

    fn copy_constructor_call(&mut self, call: &ConstructorCall) -> ConstructorCall {
        ConstructorCall {
            arguments: self.copy_expressions(&call.arguments),
            binding: call.binding,
        }
    }

    pub fn copy_type(&mut self, decl: &TypeDeclaration) -> TypeDeclaration {
        TypeDeclaration {
            id: self.ids.fresh(),
            span: decl.span,
            kind: decl.kind,
            name: decl.name.clone(),
            modifiers: decl.modifiers,
            extends: decl.extends.clone(),
            binding: decl.binding,
            enum_constants: decl
                .enum_constants
                .iter()
                .map(|constant| EnumConstant {
                    name: constant.name.clone(),
                    arguments: self.copy_expressions(&constant.arguments),
                    span: constant.span,
                })
                .collect(),
            members: decl.members.iter().map(|m| self.copy_member(m)).collect(),
        }
    }

    pub fn copy_member(&mut self, member: &Member) -> Member {
        match member {
            Member::Type(decl) => Member::Type(self.copy_type(decl)),
            Member::Method(method) => Member::Method(MethodDeclaration {
                id: self.ids.fresh(),
                span: method.span,
                name: method.name.clone(),
                modifiers: method.modifiers,
                return_type: method.return_type.clone(),
                parameters: method.parameters.clone(),
                is_constructor: method.is_constructor,
                body: method.body.as_ref().map(|b| self.copy_block(b)),
                binding: method.binding,
                is_synthetic: method.is_synthetic,
            }),
            Member::Initializer(init) => Member::Initializer(Initializer {
                id: self.ids.fresh(),
                span: init.span,
                is_static: init.is_static,
                body: self.copy_block(&init.body),
            }),
            Member::Field(field) => Member::Field(FieldDeclaration {
                id: self.ids.fresh(),
                span: field.span,
                modifiers: field.modifiers,
                ty: field.ty.clone(),
                fragments: field.fragments.iter().map(|f| self.copy_fragment(f)).collect(),
            }),
        }
    }
}

impl CompilationUnit {
    /// Give every node of the unit a fresh id.
    ///
    /// Trees deserialized without ids start out with every node at
    /// [`NodeId::UNASSIGNED`](crate::ids::NodeId::UNASSIGNED).
    pub fn renumber(&mut self) {
        let types = std::mem::take(&mut self.types);
        let mut copier = NodeCopier::new(&mut self.node_ids);
        self.types = types.iter().map(|decl| copier.copy_type(decl)).collect();
    }
}

#[cfg(test)]
#[path = "../tests/copier.rs"]
mod tests;
