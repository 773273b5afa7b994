//! Source-like rendering of the syntax tree.
//!
//! Used to inspect what a pass produced: synthesized constructors and
//! static initializers print like hand-written members. The output is not
//! meant to be re-parsed; operator precedence follows the tree shape and
//! parentheses only appear where the tree has a `Parenthesized` node.

use crate::node::*;
use crate::types::ConstantValue;

pub struct AstPrinter {
    out: String,
    indent: usize,
    indent_width: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter {
            out: String::new(),
            indent: 0,
            indent_width: 2,
        }
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn unit_to_string(unit: &CompilationUnit) -> String {
        let mut printer = AstPrinter::new();
        printer.print_unit(unit);
        printer.finish()
    }

    pub fn type_to_string(decl: &TypeDeclaration) -> String {
        let mut printer = AstPrinter::new();
        printer.print_type(decl);
        printer.finish()
    }

    pub fn statement_to_string(stmt: &Statement) -> String {
        let mut printer = AstPrinter::new();
        printer.print_statement(stmt);
        printer.finish().trim_end().to_string()
    }

    pub fn expression_to_string(expr: &Expression) -> String {
        let mut printer = AstPrinter::new();
        printer.print_expression(expr);
        printer.finish()
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn print_unit(&mut self, unit: &CompilationUnit) {
        if let Some(package) = &unit.package {
            self.line(&format!("package {package};"));
            self.out.push('\n');
        }
        for (i, decl) in unit.types.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.print_type(decl);
        }
    }

    pub fn print_type(&mut self, decl: &TypeDeclaration) {
        let mut header = modifier_prefix(decl.modifiers);
        header.push_str(decl.kind.keyword());
        header.push(' ');
        header.push_str(&decl.name);
        if let Some(extends) = &decl.extends {
            header.push_str(" extends ");
            header.push_str(extends.simple_name());
        }
        header.push_str(" {");
        self.line(&header);
        self.indent += 1;

        if !decl.enum_constants.is_empty() {
            let constants: Vec<String> = decl
                .enum_constants
                .iter()
                .map(|constant| {
                    if constant.arguments.is_empty() {
                        constant.name.clone()
                    } else {
                        format!("{}({})", constant.name, self.argument_list(&constant.arguments))
                    }
                })
                .collect();
            self.line(&format!("{};", constants.join(", ")));
        }

        for member in &decl.members {
            self.print_member(member, &decl.name);
        }

        self.indent -= 1;
        self.line("}");
    }

    fn print_member(&mut self, member: &Member, type_name: &str) {
        match member {
            Member::Type(decl) => self.print_type(decl),
            Member::Field(field) => {
                let fragments: Vec<String> = field
                    .fragments
                    .iter()
                    .map(|frag| self.fragment(frag))
                    .collect();
                self.line(&format!(
                    "{}{} {};",
                    modifier_prefix(field.modifiers),
                    field.ty.display_name(),
                    fragments.join(", ")
                ));
            }
            Member::Initializer(init) => {
                let head = if init.is_static { "static " } else { "" };
                self.print_block_with_head(head, &init.body);
            }
            Member::Method(method) => {
                let params: Vec<String> = method
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", p.ty.display_name(), p.name))
                    .collect();
                let signature = if method.is_constructor {
                    format!(
                        "{}{}({})",
                        modifier_prefix(method.modifiers),
                        type_name,
                        params.join(", ")
                    )
                } else {
                    format!(
                        "{}{} {}({})",
                        modifier_prefix(method.modifiers),
                        method.return_type.display_name(),
                        method.name,
                        params.join(", ")
                    )
                };
                match &method.body {
                    Some(body) => self.print_block_with_head(&format!("{signature} "), body),
                    None => self.line(&format!("{signature};")),
                }
            }
        }
    }

    fn fragment(&self, frag: &VariableFragment) -> String {
        match &frag.initializer {
            Some(init) => format!("{} = {}", frag.name, Self::expression_to_string(init)),
            None => frag.name.clone(),
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn print_block_with_head(&mut self, head: &str, block: &Block) {
        if block.statements.is_empty() {
            self.line(&format!("{head}{{}}"));
            return;
        }
        self.line(&format!("{head}{{"));
        self.indent += 1;
        for stmt in &block.statements {
            self.print_statement(stmt);
        }
        self.indent -= 1;
        self.line("}");
    }

    pub fn print_statement(&mut self, stmt: &Statement) {
        match &stmt.kind {
            StatementKind::Expression(expr) => {
                let text = Self::expression_to_string(expr);
                self.line(&format!("{text};"));
            }
            StatementKind::LocalVariable {
                modifiers,
                ty,
                fragments,
            } => {
                let fragments: Vec<String> = fragments.iter().map(|f| self.fragment(f)).collect();
                self.line(&format!(
                    "{}{} {};",
                    modifier_prefix(*modifiers),
                    ty.display_name(),
                    fragments.join(", ")
                ));
            }
            StatementKind::Block(block) => self.print_block_with_head("", block),
            StatementKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(&format!("if ({})", Self::expression_to_string(condition)));
                self.print_nested(then_branch);
                if let Some(else_branch) = else_branch {
                    self.line("else");
                    self.print_nested(else_branch);
                }
            }
            StatementKind::While { condition, body } => {
                self.line(&format!("while ({})", Self::expression_to_string(condition)));
                self.print_nested(body);
            }
            StatementKind::For {
                init,
                condition,
                updates,
                body,
            } => {
                let init: Vec<String> = init
                    .iter()
                    .map(|s| Self::statement_to_string(s).trim_end_matches(';').to_string())
                    .collect();
                let condition = condition
                    .as_ref()
                    .map(Self::expression_to_string)
                    .unwrap_or_default();
                let updates: Vec<String> = updates.iter().map(Self::expression_to_string).collect();
                self.line(&format!(
                    "for ({}; {}; {})",
                    init.join(", "),
                    condition,
                    updates.join(", ")
                ));
                self.print_nested(body);
            }
            StatementKind::Try {
                body,
                catches,
                finally,
            } => {
                self.print_block_with_head("try ", body);
                for clause in catches {
                    let head = format!(
                        "catch ({} {}) ",
                        clause.exception.ty.display_name(),
                        clause.exception.name
                    );
                    self.print_block_with_head(&head, &clause.body);
                }
                if let Some(finally) = finally {
                    self.print_block_with_head("finally ", finally);
                }
            }
            StatementKind::Return(expr) => match expr {
                Some(expr) => {
                    let text = Self::expression_to_string(expr);
                    self.line(&format!("return {text};"));
                }
                None => self.line("return;"),
            },
            StatementKind::Throw(expr) => {
                let text = Self::expression_to_string(expr);
                self.line(&format!("throw {text};"));
            }
            StatementKind::SuperConstructorCall(call) => {
                let args = self.argument_list(&call.arguments);
                self.line(&format!("super({args});"));
            }
            StatementKind::ConstructorCall(call) => {
                let args = self.argument_list(&call.arguments);
                self.line(&format!("this({args});"));
            }
            StatementKind::TypeDeclaration(decl) => self.print_type(decl),
            StatementKind::Empty => self.line(";"),
        }
    }

    fn print_nested(&mut self, stmt: &Statement) {
        if matches!(stmt.kind, StatementKind::Block(_)) {
            self.print_statement(stmt);
        } else {
            self.indent += 1;
            self.print_statement(stmt);
            self.indent -= 1;
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn print_expression(&mut self, expr: &Expression) {
        match &expr.kind {
            ExpressionKind::Literal(lit) => self.out.push_str(&literal_text(lit)),
            ExpressionKind::Name(name) => self.out.push_str(&name.identifier),
            ExpressionKind::This => self.out.push_str("this"),
            ExpressionKind::FieldAccess { target, name, .. } => {
                self.print_expression(target);
                self.out.push('.');
                self.out.push_str(name);
            }
            ExpressionKind::Unary { op, operand } => {
                self.out.push_str(op.as_str());
                self.print_expression(operand);
            }
            ExpressionKind::Postfix { op, operand } => {
                self.print_expression(operand);
                self.out.push_str(op.as_str());
            }
            ExpressionKind::Binary { op, lhs, rhs } => {
                self.print_expression(lhs);
                self.out.push(' ');
                self.out.push_str(op.as_str());
                self.out.push(' ');
                self.print_expression(rhs);
            }
            ExpressionKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                self.print_expression(condition);
                self.out.push_str(" ? ");
                self.print_expression(then_expr);
                self.out.push_str(" : ");
                self.print_expression(else_expr);
            }
            ExpressionKind::Parenthesized(inner) => {
                self.out.push('(');
                self.print_expression(inner);
                self.out.push(')');
            }
            ExpressionKind::Cast { ty, expr } => {
                self.out.push('(');
                self.out.push_str(&ty.display_name());
                self.out.push_str(") ");
                self.print_expression(expr);
            }
            ExpressionKind::Assignment { op, lhs, rhs } => {
                self.print_expression(lhs);
                self.out.push(' ');
                self.out.push_str(op.as_str());
                self.out.push(' ');
                self.print_expression(rhs);
            }
            ExpressionKind::MethodCall {
                receiver,
                name,
                arguments,
                ..
            } => {
                if let Some(receiver) = receiver {
                    self.print_expression(receiver);
                    self.out.push('.');
                }
                self.out.push_str(name);
                self.out.push('(');
                let args = self.argument_list(arguments);
                self.out.push_str(&args);
                self.out.push(')');
            }
            ExpressionKind::New { ty, arguments, .. } => {
                self.out.push_str("new ");
                self.out.push_str(ty.simple_name());
                self.out.push('(');
                let args = self.argument_list(arguments);
                self.out.push_str(&args);
                self.out.push(')');
            }
        }
    }

    fn argument_list(&self, arguments: &[Expression]) -> String {
        arguments
            .iter()
            .map(Self::expression_to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent * self.indent_width {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn modifier_prefix(modifiers: xlate_common::Modifiers) -> String {
    modifiers
        .keywords()
        .into_iter()
        .map(|kw| format!("{kw} "))
        .collect()
}

fn literal_text(lit: &Literal) -> String {
    match lit {
        Literal::Boolean(b) => b.to_string(),
        Literal::Null => "null".to_string(),
        Literal::Char(c) => format!("'{}'", escape_unit(*c, '\'')),
        Literal::String(s) => {
            let mut text = String::with_capacity(s.len() + 2);
            text.push('"');
            for unit in s.encode_utf16() {
                text.push_str(&escape_unit(unit, '"'));
            }
            text.push('"');
            text
        }
        Literal::Number(NumberLiteral::Int(i)) => i.to_string(),
        Literal::Number(NumberLiteral::Long(l)) => format!("{l}L"),
        Literal::Number(NumberLiteral::Float(f)) => {
            floating_text(f64::from(*f), ConstantValue::Float(*f), "f")
        }
        Literal::Number(NumberLiteral::Double(d)) => floating_text(*d, ConstantValue::Double(*d), ""),
    }
}

fn floating_text(value: f64, constant: ConstantValue, suffix: &str) -> String {
    if value.is_nan() {
        format!("(0.0{suffix} / 0.0{suffix})")
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("({sign}1.0{suffix} / 0.0{suffix})")
    } else {
        format!("{}{suffix}", constant.to_java_string())
    }
}

fn escape_unit(unit: u16, quote: char) -> String {
    match unit {
        0x08 => "\\b".to_string(),
        0x09 => "\\t".to_string(),
        0x0A => "\\n".to_string(),
        0x0C => "\\f".to_string(),
        0x0D => "\\r".to_string(),
        0x5C => "\\\\".to_string(),
        0x20..=0x7E => {
            let c = char::from(unit as u8);
            if c == quote {
                format!("\\{c}")
            } else {
                c.to_string()
            }
        }
        _ => format!("\\u{unit:04x}"),
    }
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
