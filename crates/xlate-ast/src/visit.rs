//! Walks over statement trees that stop at type boundaries.
//!
//! Local class declarations can appear at any block depth of a body. These
//! helpers reach every such declaration directly nested in a statement list
//! (inside blocks, branches, loops and `try` clauses) without descending
//! into the declarations themselves.

use crate::node::*;

pub fn for_each_local_type<'a>(
    statements: &'a [Statement],
    f: &mut impl FnMut(&'a TypeDeclaration),
) {
    for stmt in statements {
        local_types_in(stmt, f);
    }
}

fn local_types_in<'a>(stmt: &'a Statement, f: &mut impl FnMut(&'a TypeDeclaration)) {
    match &stmt.kind {
        StatementKind::TypeDeclaration(decl) => f(&**decl),
        StatementKind::Block(block) => for_each_local_type(&block.statements, f),
        StatementKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            local_types_in(then_branch, f);
            if let Some(stmt) = else_branch {
                local_types_in(stmt, f);
            }
        }
        StatementKind::While { body, .. } => local_types_in(body, f),
        StatementKind::For { init, body, .. } => {
            for_each_local_type(init, f);
            local_types_in(body, f);
        }
        StatementKind::Try {
            body,
            catches,
            finally,
        } => {
            for_each_local_type(&body.statements, f);
            for clause in catches {
                for_each_local_type(&clause.body.statements, f);
            }
            if let Some(block) = finally {
                for_each_local_type(&block.statements, f);
            }
        }
        StatementKind::Expression(_)
        | StatementKind::LocalVariable { .. }
        | StatementKind::Return(_)
        | StatementKind::Throw(_)
        | StatementKind::SuperConstructorCall(_)
        | StatementKind::ConstructorCall(_)
        | StatementKind::Empty => {}
    }
}

/// Mutable counterpart of [`for_each_local_type`]; stops at the first error.
pub fn try_for_each_local_type_mut<E>(
    statements: &mut [Statement],
    f: &mut impl FnMut(&mut TypeDeclaration) -> Result<(), E>,
) -> Result<(), E> {
    for stmt in statements {
        local_types_in_mut(stmt, f)?;
    }
    Ok(())
}

fn local_types_in_mut<E>(
    stmt: &mut Statement,
    f: &mut impl FnMut(&mut TypeDeclaration) -> Result<(), E>,
) -> Result<(), E> {
    match &mut stmt.kind {
        StatementKind::TypeDeclaration(decl) => f(&mut **decl),
        StatementKind::Block(block) => try_for_each_local_type_mut(&mut block.statements, f),
        StatementKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            local_types_in_mut(then_branch, f)?;
            match else_branch {
                Some(stmt) => local_types_in_mut(stmt, f),
                None => Ok(()),
            }
        }
        StatementKind::While { body, .. } => local_types_in_mut(body, f),
        StatementKind::For { init, body, .. } => {
            try_for_each_local_type_mut(init, f)?;
            local_types_in_mut(body, f)
        }
        StatementKind::Try {
            body,
            catches,
            finally,
        } => {
            try_for_each_local_type_mut(&mut body.statements, f)?;
            for clause in catches {
                try_for_each_local_type_mut(&mut clause.body.statements, f)?;
            }
            match finally {
                Some(block) => try_for_each_local_type_mut(&mut block.statements, f),
                None => Ok(()),
            }
        }
        StatementKind::Expression(_)
        | StatementKind::LocalVariable { .. }
        | StatementKind::Return(_)
        | StatementKind::Throw(_)
        | StatementKind::SuperConstructorCall(_)
        | StatementKind::ConstructorCall(_)
        | StatementKind::Empty => Ok(()),
    }
}

impl TypeDeclaration {
    /// Bodies that may declare local types: methods and initializer blocks.
    pub fn body_statements_mut(&mut self) -> impl Iterator<Item = &mut Vec<Statement>> {
        self.members.iter_mut().filter_map(|member| match member {
            Member::Method(method) => method.body.as_mut().map(|b| &mut b.statements),
            Member::Initializer(init) => Some(&mut init.body.statements),
            Member::Type(_) | Member::Field(_) => None,
        })
    }

    pub fn body_statements(&self) -> impl Iterator<Item = &[Statement]> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => method.body.as_ref().map(|b| b.statements.as_slice()),
            Member::Initializer(init) => Some(init.body.statements.as_slice()),
            Member::Type(_) | Member::Field(_) => None,
        })
    }
}

#[cfg(test)]
#[path = "../tests/visit.rs"]
mod tests;
