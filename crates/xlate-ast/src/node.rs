//! Syntax tree nodes.
//!
//! The tree is owned: every statement and expression belongs to exactly one
//! parent list or box. Passes that need the same subtree in two places copy
//! it with [`NodeCopier`](crate::copier::NodeCopier).
//!
//! Resolver handles (`binding` fields) are optional because the parser
//! produces them unresolved; passes running after resolution treat a missing
//! handle as an inconsistent tree.

use crate::ids::{MethodId, NodeId, NodeIdAllocator, TypeId, VariableId};
use crate::types::{ConstantValue, TypeName, TypeRef};
use serde::{Deserialize, Serialize};
use xlate_common::{Modifiers, Span};

// =============================================================================
// Compilation unit and type declarations
// =============================================================================

/// One source file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub file_name: String,
    #[serde(default)]
    pub package: Option<String>,
    pub types: Vec<TypeDeclaration>,
    #[serde(default)]
    pub node_ids: NodeIdAllocator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Annotation => "@interface",
        }
    }

    /// Interfaces and annotation types: all fields are implicitly static
    /// and no instance state exists.
    pub const fn is_interface_like(self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Annotation)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub extends: Option<TypeName>,
    #[serde(default)]
    pub binding: Option<TypeId>,
    #[serde(default)]
    pub enum_constants: Vec<EnumConstant>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub span: Span,
}

/// Body declaration of a type, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Member {
    Type(TypeDeclaration),
    Method(MethodDeclaration),
    Initializer(Initializer),
    Field(FieldDeclaration),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default = "void_type")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub is_constructor: bool,
    /// `None` for abstract, native and interface methods.
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub binding: Option<MethodId>,
    /// Set on members created by translator passes.
    #[serde(default)]
    pub is_synthetic: bool,
}

fn void_type() -> TypeRef {
    TypeRef::VOID
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub binding: Option<VariableId>,
}

/// `static { ... }` or `{ ... }` inside a type body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub is_static: bool,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub fragments: Vec<VariableFragment>,
}

/// One declarator of a field or local variable declaration: `x = 1` in
/// `int x = 1, y;`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableFragment {
    #[serde(default)]
    pub span: Span,
    pub name: String,
    #[serde(default)]
    pub initializer: Option<Expression>,
    #[serde(default)]
    pub binding: Option<VariableId>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    pub kind: StatementKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Expression(Expression),
    LocalVariable {
        #[serde(default)]
        modifiers: Modifiers,
        ty: TypeRef,
        fragments: Vec<VariableFragment>,
    },
    Block(Block),
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        #[serde(default)]
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    For {
        #[serde(default)]
        init: Vec<Statement>,
        #[serde(default)]
        condition: Option<Expression>,
        #[serde(default)]
        updates: Vec<Expression>,
        body: Box<Statement>,
    },
    Try {
        body: Block,
        #[serde(default)]
        catches: Vec<CatchClause>,
        #[serde(default)]
        finally: Option<Block>,
    },
    Return(Option<Expression>),
    Throw(Expression),
    /// `super(...)` as the first statement of a constructor.
    SuperConstructorCall(ConstructorCall),
    /// `this(...)`: delegation to a sibling constructor.
    ConstructorCall(ConstructorCall),
    /// Local class declaration.
    TypeDeclaration(Box<TypeDeclaration>),
    Empty,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructorCall {
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub binding: Option<MethodId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    #[serde(default)]
    pub span: Span,
    pub exception: Parameter,
    pub body: Block,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default)]
    pub span: Span,
    /// Resolved static type, when known.
    #[serde(default)]
    pub ty: Option<TypeRef>,
    pub kind: ExpressionKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    Literal(Literal),
    Name(Name),
    This,
    FieldAccess {
        target: Box<Expression>,
        name: String,
        #[serde(default)]
        binding: Option<VariableId>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Conditional {
        condition: Box<Expression>,
        then_expr: Box<Expression>,
        else_expr: Box<Expression>,
    },
    Parenthesized(Box<Expression>),
    Cast {
        ty: TypeRef,
        expr: Box<Expression>,
    },
    Assignment {
        op: AssignOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    MethodCall {
        #[serde(default)]
        receiver: Option<Box<Expression>>,
        name: String,
        #[serde(default)]
        arguments: Vec<Expression>,
        #[serde(default)]
        binding: Option<MethodId>,
    },
    New {
        ty: TypeName,
        #[serde(default)]
        arguments: Vec<Expression>,
        #[serde(default)]
        binding: Option<MethodId>,
    },
}

/// Simple (`x`) or qualified (`Outer.X`) name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub identifier: String,
    #[serde(default)]
    pub binding: Option<VariableId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Boolean(bool),
    /// UTF-16 code unit.
    Char(u16),
    Null,
    Number(NumberLiteral),
    String(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLiteral {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Literal {
    /// Literal spelling a constant value. `byte` and `short` values become
    /// `int` literals; the literal's expression type carries the narrower
    /// type.
    pub fn from_constant(value: &ConstantValue) -> Literal {
        match value {
            ConstantValue::Boolean(b) => Literal::Boolean(*b),
            ConstantValue::Char(c) => Literal::Char(*c),
            ConstantValue::Byte(b) => Literal::Number(NumberLiteral::Int(i32::from(*b))),
            ConstantValue::Short(s) => Literal::Number(NumberLiteral::Int(i32::from(*s))),
            ConstantValue::Int(i) => Literal::Number(NumberLiteral::Int(*i)),
            ConstantValue::Long(l) => Literal::Number(NumberLiteral::Long(*l)),
            ConstantValue::Float(f) => Literal::Number(NumberLiteral::Float(*f)),
            ConstantValue::Double(d) => Literal::Number(NumberLiteral::Double(*d)),
            ConstantValue::String(s) => Literal::String(s.clone()),
        }
    }

    /// Constant value of the literal; `null` is not a constant.
    pub fn constant_value(&self) -> Option<ConstantValue> {
        Some(match self {
            Literal::Boolean(b) => ConstantValue::Boolean(*b),
            Literal::Char(c) => ConstantValue::Char(*c),
            Literal::Null => return None,
            Literal::Number(NumberLiteral::Int(i)) => ConstantValue::Int(*i),
            Literal::Number(NumberLiteral::Long(l)) => ConstantValue::Long(*l),
            Literal::Number(NumberLiteral::Float(f)) => ConstantValue::Float(*f),
            Literal::Number(NumberLiteral::Double(d)) => ConstantValue::Double(*d),
            Literal::String(s) => ConstantValue::String(s.clone()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    Complement,
    PreIncrement,
    PreDecrement,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "~",
            UnaryOp::PreIncrement => "++",
            UnaryOp::PreDecrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PostfixOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Increment => "++",
            PostfixOp::Decrement => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    UShr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl AssignOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::RemAssign => "%=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
            AssignOp::UShrAssign => ">>>=",
            AssignOp::BitAndAssign => "&=",
            AssignOp::BitOrAssign => "|=",
            AssignOp::BitXorAssign => "^=",
        }
    }
}
