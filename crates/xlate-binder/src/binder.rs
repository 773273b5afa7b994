//! Name binding for compilation units whose handles are not yet resolved.
//!
//! Two walks over the unit:
//! 1. declare every type (member and local), field and method, and record
//!    the handle on the declaring node;
//! 2. resolve `extends` clauses and bind names in initializers and bodies
//!    to fields of the enclosing types, parameters and locals.
//!
//! Handles already present on the tree are kept. Names that do not resolve
//! stay unbound; passes that need a binding report the missing handle.

use crate::bindings::{MethodBinding, TypeDescriptor, VariableBinding};
use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::table::BindingTable;
use serde::Serialize;
use tracing::{debug, trace};
use xlate_ast::visit::try_for_each_local_type_mut;
use xlate_ast::{
    Block, CompilationUnit, Expression, ExpressionKind, Member, Parameter, Statement,
    StatementKind, TypeDeclaration, TypeId, TypeRef, VariableFragment, VariableId,
};
use xlate_common::Modifiers;
use xlate_common::limits::MAX_TYPE_NESTING_DEPTH;
use xlate_common::names::CONSTRUCTOR_NAME;

/// Counts of what one [`bind_unit`] call declared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BindStats {
    pub types: usize,
    pub fields: usize,
    pub methods: usize,
    pub locals: usize,
    pub names: usize,
}

/// Declare and bind everything in `unit` against `table`.
pub fn bind_unit(
    table: &mut BindingTable,
    unit: &mut CompilationUnit,
) -> Result<BindStats, ResolveError> {
    let mut binder = UnitBinder {
        table,
        type_scopes: Vec::new(),
        local_scopes: Vec::new(),
        stats: BindStats::default(),
    };
    let prefix = unit.package.clone();
    for decl in &mut unit.types {
        binder.declare_type(decl, prefix.as_deref(), None, 0)?;
    }
    for decl in &mut unit.types {
        binder.bind_type(decl)?;
    }
    debug!(file = %unit.file_name, stats = ?binder.stats, "bound compilation unit");
    Ok(binder.stats)
}

struct UnitBinder<'a> {
    table: &'a mut BindingTable,
    /// Enclosing types, innermost last.
    type_scopes: Vec<TypeId>,
    /// Parameter and local variable scopes, innermost last.
    local_scopes: Vec<Vec<(String, VariableId)>>,
    stats: BindStats,
}

impl UnitBinder<'_> {
    // =========================================================================
    // Declaration
    // =========================================================================

    fn declare_type(
        &mut self,
        decl: &mut TypeDeclaration,
        prefix: Option<&str>,
        outer: Option<TypeId>,
        depth: u32,
    ) -> Result<(), ResolveError> {
        if depth > MAX_TYPE_NESTING_DEPTH {
            return Err(ResolveError::NestingTooDeep {
                name: decl.name.clone(),
            });
        }
        let id = match decl.binding {
            Some(id) => {
                self.table.type_descriptor(id)?;
                id
            }
            None => {
                let name = self.unique_type_name(prefix, &decl.name);
                let id = self.table.add_type(TypeDescriptor {
                    name,
                    kind: decl.kind,
                    modifiers: decl.modifiers,
                    superclass: None,
                    declaring_type: outer,
                });
                decl.binding = Some(id);
                self.stats.types += 1;
                id
            }
        };
        let qualified = self.table.type_descriptor(id)?.name.clone();
        let interface_like = decl.is_interface_like();

        for member in &mut decl.members {
            match member {
                Member::Type(inner) => {
                    self.declare_type(inner, Some(&qualified), Some(id), depth + 1)?;
                }
                Member::Field(field) => {
                    let mut modifiers = field.modifiers;
                    if interface_like {
                        modifiers |= Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;
                    }
                    for frag in &mut field.fragments {
                        if frag.binding.is_none() {
                            frag.binding = Some(self.table.add_variable(VariableBinding {
                                name: frag.name.clone(),
                                ty: field.ty.clone(),
                                modifiers,
                                declaring_type: Some(id),
                                is_field: true,
                                constant_value: None,
                            }));
                            self.stats.fields += 1;
                        }
                    }
                }
                Member::Method(method) => {
                    if method.binding.is_none() {
                        let name = if method.is_constructor {
                            CONSTRUCTOR_NAME.to_string()
                        } else {
                            method.name.clone()
                        };
                        method.binding = Some(self.table.add_method(MethodBinding {
                            name,
                            declaring_type: id,
                            modifiers: method.modifiers,
                            return_type: method.return_type.clone(),
                            parameter_types: method.parameters.iter().map(|p| p.ty.clone()).collect(),
                            is_constructor: method.is_constructor,
                            is_synthetic: method.is_synthetic,
                        }));
                        self.stats.methods += 1;
                    }
                }
                Member::Initializer(_) => {}
            }
        }

        for statements in decl.body_statements_mut() {
            try_for_each_local_type_mut(statements, &mut |local| {
                self.declare_type(local, Some(&qualified), Some(id), depth + 1)
            })?;
        }
        Ok(())
    }

    /// `prefix.name`, with a `$n` suffix when two local types share a name.
    fn unique_type_name(&self, prefix: Option<&str>, name: &str) -> String {
        let base = match prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}.{name}"),
            _ => name.to_string(),
        };
        if self.table.lookup_type(&base).is_none() {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}${n}");
            if self.table.lookup_type(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    // =========================================================================
    // Binding
    // =========================================================================

    fn bind_type(&mut self, decl: &mut TypeDeclaration) -> Result<(), ResolveError> {
        let Some(id) = decl.binding else {
            return Err(ResolveError::UnresolvedTypeName {
                name: decl.name.clone(),
            });
        };
        if let Some(extends) = &mut decl.extends {
            let superclass = match extends.binding {
                Some(sup) => sup,
                None => {
                    let sup = self.resolve_type_name(&extends.name);
                    extends.binding = Some(sup);
                    sup
                }
            };
            self.table.set_superclass(id, superclass)?;
        }

        self.type_scopes.push(id);
        let result = self.bind_members(decl);
        self.type_scopes.pop();
        result
    }

    fn bind_members(&mut self, decl: &mut TypeDeclaration) -> Result<(), ResolveError> {
        for constant in &mut decl.enum_constants {
            for arg in &mut constant.arguments {
                self.bind_expression(arg);
            }
        }
        for member in &mut decl.members {
            match member {
                Member::Type(inner) => self.bind_type(inner)?,
                Member::Field(field) => {
                    for frag in &mut field.fragments {
                        if let Some(init) = &mut frag.initializer {
                            self.bind_expression(init);
                        }
                    }
                }
                Member::Initializer(init) => self.bind_block(&mut init.body)?,
                Member::Method(method) => {
                    self.local_scopes.push(Vec::new());
                    for param in &mut method.parameters {
                        self.declare_parameter(param);
                    }
                    let result = match &mut method.body {
                        Some(body) => self.bind_statements(&mut body.statements),
                        None => Ok(()),
                    };
                    self.local_scopes.pop();
                    result?;
                }
            }
        }
        Ok(())
    }

    fn resolve_type_name(&mut self, name: &str) -> TypeId {
        if let Some(id) = self.table.lookup_type(name) {
            return id;
        }
        if !name.contains('.')
            && let Some(id) = self.table.lookup_simple_type(name)
        {
            return id;
        }
        self.table.intern_external_class(name)
    }

    fn declare_parameter(&mut self, param: &mut Parameter) {
        let id = match param.binding {
            Some(id) => id,
            None => {
                let id = self.add_local(&param.name, &param.ty);
                param.binding = Some(id);
                id
            }
        };
        self.push_local(&param.name, id);
    }

    fn declare_local(&mut self, frag: &mut VariableFragment, ty: &TypeRef, modifiers: Modifiers) {
        let id = match frag.binding {
            Some(id) => id,
            None => {
                let id = self.table.add_variable(VariableBinding {
                    name: frag.name.clone(),
                    ty: ty.clone(),
                    modifiers,
                    declaring_type: None,
                    is_field: false,
                    constant_value: None,
                });
                self.stats.locals += 1;
                frag.binding = Some(id);
                id
            }
        };
        self.push_local(&frag.name, id);
    }

    fn add_local(&mut self, name: &str, ty: &TypeRef) -> VariableId {
        self.stats.locals += 1;
        self.table.add_variable(VariableBinding {
            name: name.to_string(),
            ty: ty.clone(),
            modifiers: Modifiers::empty(),
            declaring_type: None,
            is_field: false,
            constant_value: None,
        })
    }

    fn push_local(&mut self, name: &str, id: VariableId) {
        if let Some(scope) = self.local_scopes.last_mut() {
            scope.push((name.to_string(), id));
        }
    }

    fn bind_block(&mut self, block: &mut Block) -> Result<(), ResolveError> {
        self.local_scopes.push(Vec::new());
        let result = self.bind_statements(&mut block.statements);
        self.local_scopes.pop();
        result
    }

    fn bind_statements(&mut self, statements: &mut [Statement]) -> Result<(), ResolveError> {
        for stmt in statements {
            self.bind_statement(stmt)?;
        }
        Ok(())
    }

    fn bind_statement(&mut self, stmt: &mut Statement) -> Result<(), ResolveError> {
        match &mut stmt.kind {
            StatementKind::Expression(expr) | StatementKind::Throw(expr) => {
                self.bind_expression(expr);
            }
            StatementKind::LocalVariable {
                modifiers,
                ty,
                fragments,
            } => {
                for frag in fragments {
                    if let Some(init) = &mut frag.initializer {
                        self.bind_expression(init);
                    }
                    self.declare_local(frag, ty, *modifiers);
                }
            }
            StatementKind::Block(block) => self.bind_block(block)?,
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.bind_expression(condition);
                self.bind_scoped(then_branch)?;
                if let Some(stmt) = else_branch {
                    self.bind_scoped(stmt)?;
                }
            }
            StatementKind::While { condition, body } => {
                self.bind_expression(condition);
                self.bind_scoped(body)?;
            }
            StatementKind::For {
                init,
                condition,
                updates,
                body,
            } => {
                self.local_scopes.push(Vec::new());
                let result = self.bind_for(init, condition.as_mut(), updates, body);
                self.local_scopes.pop();
                result?;
            }
            StatementKind::Try {
                body,
                catches,
                finally,
            } => {
                self.bind_block(body)?;
                for clause in catches {
                    self.local_scopes.push(Vec::new());
                    self.declare_parameter(&mut clause.exception);
                    let result = self.bind_block(&mut clause.body);
                    self.local_scopes.pop();
                    result?;
                }
                if let Some(block) = finally {
                    self.bind_block(block)?;
                }
            }
            StatementKind::Return(expr) => {
                if let Some(expr) = expr {
                    self.bind_expression(expr);
                }
            }
            StatementKind::SuperConstructorCall(call) | StatementKind::ConstructorCall(call) => {
                for arg in &mut call.arguments {
                    self.bind_expression(arg);
                }
            }
            StatementKind::TypeDeclaration(decl) => self.bind_type(decl)?,
            StatementKind::Empty => {}
        }
        Ok(())
    }

    /// Sub-statement in its own scope (`if (c) int x = 1;` does not leak `x`).
    fn bind_scoped(&mut self, stmt: &mut Statement) -> Result<(), ResolveError> {
        self.local_scopes.push(Vec::new());
        let result = self.bind_statement(stmt);
        self.local_scopes.pop();
        result
    }

    fn bind_for(
        &mut self,
        init: &mut [Statement],
        condition: Option<&mut Expression>,
        updates: &mut [Expression],
        body: &mut Statement,
    ) -> Result<(), ResolveError> {
        self.bind_statements(init)?;
        if let Some(condition) = condition {
            self.bind_expression(condition);
        }
        for update in updates {
            self.bind_expression(update);
        }
        self.bind_scoped(body)
    }

    fn bind_expression(&mut self, expr: &mut Expression) {
        match &mut expr.kind {
            ExpressionKind::Literal(_) | ExpressionKind::This => {}
            ExpressionKind::Name(name) => {
                if name.binding.is_none() {
                    name.binding = self.resolve_name(&name.identifier);
                    if name.binding.is_some() {
                        self.stats.names += 1;
                    }
                    trace!(name = %name.identifier, resolved = name.binding.is_some(), "bind name");
                }
            }
            ExpressionKind::FieldAccess {
                target,
                name,
                binding,
            } => {
                self.bind_expression(target);
                if binding.is_none() {
                    *binding = self.resolve_member_field(target, name);
                }
            }
            ExpressionKind::Unary { operand, .. } | ExpressionKind::Postfix { operand, .. } => {
                self.bind_expression(operand);
            }
            ExpressionKind::Binary { lhs, rhs, .. } | ExpressionKind::Assignment { lhs, rhs, .. } => {
                self.bind_expression(lhs);
                self.bind_expression(rhs);
            }
            ExpressionKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                self.bind_expression(condition);
                self.bind_expression(then_expr);
                self.bind_expression(else_expr);
            }
            ExpressionKind::Parenthesized(inner) | ExpressionKind::Cast { expr: inner, .. } => {
                self.bind_expression(inner);
            }
            ExpressionKind::MethodCall {
                receiver,
                arguments,
                ..
            } => {
                if let Some(receiver) = receiver {
                    self.bind_expression(receiver);
                }
                for arg in arguments {
                    self.bind_expression(arg);
                }
            }
            ExpressionKind::New { ty, arguments, .. } => {
                if ty.binding.is_none() {
                    ty.binding = self.table.lookup_simple_type(ty.simple_name());
                }
                for arg in arguments {
                    self.bind_expression(arg);
                }
            }
        }
    }

    /// Simple name: innermost local first, then fields of the enclosing
    /// types from the innermost outwards. Qualified name: `Type.field`.
    fn resolve_name(&self, identifier: &str) -> Option<VariableId> {
        if let Some((qualifier, field)) = identifier.rsplit_once('.') {
            let owner = self
                .table
                .lookup_type(qualifier)
                .or_else(|| self.table.lookup_simple_type(qualifier))?;
            return self.table.find_field(owner, field);
        }
        let local = self
            .local_scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(name, _)| name == identifier)
            .map(|(_, id)| *id);
        local.or_else(|| {
            self.type_scopes
                .iter()
                .rev()
                .find_map(|ty| self.table.find_field(*ty, identifier))
        })
    }

    /// `this.f` or `Type.f`.
    fn resolve_member_field(&self, target: &Expression, name: &str) -> Option<VariableId> {
        match &target.skip_parens().kind {
            ExpressionKind::This => self
                .type_scopes
                .last()
                .and_then(|ty| self.table.find_field(*ty, name)),
            ExpressionKind::Name(qualifier) if qualifier.binding.is_none() => {
                let owner = self
                    .table
                    .lookup_type(&qualifier.identifier)
                    .or_else(|| self.table.lookup_simple_type(&qualifier.identifier))?;
                self.table.find_field(owner, name)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/binder.rs"]
mod tests;
