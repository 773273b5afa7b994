//! Read-side accessors over members and statement lists.

use crate::node::*;

impl TypeDeclaration {
    #[inline]
    pub const fn is_interface_like(&self) -> bool {
        self.kind.is_interface_like()
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.methods().filter(|method| method.is_constructor)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    pub fn initializers(&self) -> impl Iterator<Item = &Initializer> {
        self.members.iter().filter_map(|member| match member {
            Member::Initializer(init) => Some(init),
            _ => None,
        })
    }

    pub fn member_types(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.members.iter().filter_map(|member| match member {
            Member::Type(decl) => Some(decl),
            _ => None,
        })
    }

    /// Non-constructor method with the given name and arity.
    pub fn find_method(&self, name: &str, arity: usize) -> Option<&MethodDeclaration> {
        self.methods()
            .find(|m| !m.is_constructor && m.name == name && m.parameters.len() == arity)
    }

    /// Field fragment with the given name.
    pub fn find_field(&self, name: &str) -> Option<(&FieldDeclaration, &VariableFragment)> {
        self.fields().find_map(|field| {
            field
                .fragments
                .iter()
                .find(|frag| frag.name == name)
                .map(|frag| (field, frag))
        })
    }
}

impl Member {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Member::Type(_) => "type",
            Member::Method(_) => "method",
            Member::Initializer(_) => "initializer",
            Member::Field(_) => "field",
        }
    }
}

impl MethodDeclaration {
    /// Body statements; empty when the method has no body.
    pub fn statements(&self) -> &[Statement] {
        self.body.as_ref().map_or(&[], |body| body.statements.as_slice())
    }

    pub fn first_statement(&self) -> Option<&Statement> {
        self.statements().first()
    }

    /// Index of the first `super(...)` statement.
    pub fn super_call_index(&self) -> Option<usize> {
        self.statements()
            .iter()
            .position(Statement::is_super_constructor_call)
    }
}

impl Statement {
    #[inline]
    pub const fn is_super_constructor_call(&self) -> bool {
        matches!(self.kind, StatementKind::SuperConstructorCall(_))
    }

    #[inline]
    pub const fn is_constructor_call(&self) -> bool {
        matches!(self.kind, StatementKind::ConstructorCall(_))
    }
}

impl Expression {
    pub const fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExpressionKind::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub const fn as_name(&self) -> Option<&Name> {
        match &self.kind {
            ExpressionKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Expression with any enclosing parentheses removed.
    pub fn skip_parens(&self) -> &Expression {
        let mut expr = self;
        while let ExpressionKind::Parenthesized(inner) = &expr.kind {
            expr = inner;
        }
        expr
    }
}
