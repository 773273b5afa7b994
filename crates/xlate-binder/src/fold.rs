//! Compile-time constant evaluation.
//!
//! Follows the constant-expression rules of the source language: literals
//! other than `null`, names of constant variables, casts to primitive types
//! and `String`, and the unary, binary and conditional operators over
//! constant operands. Integer arithmetic wraps at 32 or 64 bits; integer
//! division by zero is not a constant.

use xlate_ast::{
    BinaryOp, ConstantValue, Expression, ExpressionKind, PrimitiveType, TypeRef, UnaryOp,
    VariableId,
};
use xlate_common::limits::MAX_CONSTANT_FOLD_DEPTH;

/// Source of constant values for named variables.
pub trait ConstantEnv {
    fn variable_constant(&self, id: VariableId) -> Option<ConstantValue>;
}

pub struct ConstantFolder<'a, E: ConstantEnv + ?Sized> {
    env: &'a E,
}

impl<'a, E: ConstantEnv + ?Sized> ConstantFolder<'a, E> {
    pub const fn new(env: &'a E) -> Self {
        ConstantFolder { env }
    }

    pub fn fold(&self, expr: &Expression) -> Option<ConstantValue> {
        self.fold_at(expr, 0)
    }

    fn fold_at(&self, expr: &Expression, depth: u32) -> Option<ConstantValue> {
        if depth > MAX_CONSTANT_FOLD_DEPTH {
            return None;
        }
        let depth = depth + 1;
        match &expr.kind {
            ExpressionKind::Literal(lit) => lit.constant_value(),
            ExpressionKind::Name(name) => self.env.variable_constant(name.binding?),
            // `Outer.X` is a qualified name; `this.x` is not a constant.
            ExpressionKind::FieldAccess {
                target, binding, ..
            } => match target.skip_parens().kind {
                ExpressionKind::This => None,
                _ => self.env.variable_constant((*binding)?),
            },
            ExpressionKind::Parenthesized(inner) => self.fold_at(inner, depth),
            ExpressionKind::Unary { op, operand } => {
                let value = self.fold_at(operand, depth)?;
                fold_unary(*op, &value)
            }
            ExpressionKind::Binary { op, lhs, rhs } => {
                let lhs = self.fold_at(lhs, depth)?;
                let rhs = self.fold_at(rhs, depth)?;
                fold_binary(*op, &lhs, &rhs)
            }
            ExpressionKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                let condition = self.fold_at(condition, depth)?.as_bool()?;
                let then_value = self.fold_at(then_expr, depth)?;
                let else_value = self.fold_at(else_expr, depth)?;
                fold_conditional(condition, then_value, else_value)
            }
            ExpressionKind::Cast { ty, expr } => {
                let value = self.fold_at(expr, depth)?;
                fold_cast(ty, value)
            }
            ExpressionKind::This
            | ExpressionKind::Postfix { .. }
            | ExpressionKind::Assignment { .. }
            | ExpressionKind::MethodCall { .. }
            | ExpressionKind::New { .. } => None,
        }
    }
}

fn fold_cast(ty: &TypeRef, value: ConstantValue) -> Option<ConstantValue> {
    match ty {
        TypeRef::Primitive(target) => value.convert_to(*target),
        _ if ty.is_string() && value.is_string() => Some(value),
        _ => None,
    }
}

/// Unary numeric promotion: `byte`, `short` and `char` widen to `int`.
fn promote_unary(value: &ConstantValue) -> Option<ConstantValue> {
    match value.primitive_type()? {
        PrimitiveType::Byte | PrimitiveType::Short | PrimitiveType::Char => {
            value.convert_to(PrimitiveType::Int)
        }
        PrimitiveType::Int | PrimitiveType::Long | PrimitiveType::Float | PrimitiveType::Double => {
            Some(value.clone())
        }
        PrimitiveType::Boolean | PrimitiveType::Void => None,
    }
}

/// Binary numeric promotion: the wider of the two operand types, at least
/// `int`.
fn promoted_type(lhs: &ConstantValue, rhs: &ConstantValue) -> Option<PrimitiveType> {
    let (l, r) = (lhs.primitive_type()?, rhs.primitive_type()?);
    if !l.is_numeric() || !r.is_numeric() {
        return None;
    }
    Some(if l == PrimitiveType::Double || r == PrimitiveType::Double {
        PrimitiveType::Double
    } else if l == PrimitiveType::Float || r == PrimitiveType::Float {
        PrimitiveType::Float
    } else if l == PrimitiveType::Long || r == PrimitiveType::Long {
        PrimitiveType::Long
    } else {
        PrimitiveType::Int
    })
}

fn fold_unary(op: UnaryOp, value: &ConstantValue) -> Option<ConstantValue> {
    match op {
        UnaryOp::Not => value.as_bool().map(|b| ConstantValue::Boolean(!b)),
        UnaryOp::Plus => promote_unary(value),
        UnaryOp::Minus => Some(match promote_unary(value)? {
            ConstantValue::Int(i) => ConstantValue::Int(i.wrapping_neg()),
            ConstantValue::Long(l) => ConstantValue::Long(l.wrapping_neg()),
            ConstantValue::Float(f) => ConstantValue::Float(-f),
            ConstantValue::Double(d) => ConstantValue::Double(-d),
            _ => return None,
        }),
        UnaryOp::Complement => Some(match promote_unary(value)? {
            ConstantValue::Int(i) => ConstantValue::Int(!i),
            ConstantValue::Long(l) => ConstantValue::Long(!l),
            _ => return None,
        }),
        UnaryOp::PreIncrement | UnaryOp::PreDecrement => None,
    }
}

fn fold_binary(op: BinaryOp, lhs: &ConstantValue, rhs: &ConstantValue) -> Option<ConstantValue> {
    if op == BinaryOp::Add && (lhs.is_string() || rhs.is_string()) {
        let mut text = lhs.to_java_string();
        text.push_str(&rhs.to_java_string());
        return Some(ConstantValue::String(text));
    }
    if lhs.is_string() || rhs.is_string() {
        // Reference comparison of strings is not a constant expression.
        return None;
    }
    if let (Some(l), Some(r)) = (lhs.as_bool(), rhs.as_bool()) {
        return fold_boolean(op, l, r);
    }
    if matches!(op, BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr) {
        return fold_shift(op, lhs, rhs);
    }
    match promoted_type(lhs, rhs)? {
        PrimitiveType::Double => fold_f64(op, lhs.as_f64()?, rhs.as_f64()?),
        PrimitiveType::Float => fold_f32(op, lhs.as_f32()?, rhs.as_f32()?),
        PrimitiveType::Long => fold_i64(op, lhs.as_i64()?, rhs.as_i64()?),
        _ => fold_i32(op, lhs.as_i32()?, rhs.as_i32()?),
    }
}

fn fold_boolean(op: BinaryOp, l: bool, r: bool) -> Option<ConstantValue> {
    let value = match op {
        BinaryOp::And | BinaryOp::BitAnd => l && r,
        BinaryOp::Or | BinaryOp::BitOr => l || r,
        BinaryOp::BitXor | BinaryOp::Ne => l != r,
        BinaryOp::Eq => l == r,
        _ => return None,
    };
    Some(ConstantValue::Boolean(value))
}

/// Shift distance is masked to the width of the promoted left operand.
fn fold_shift(op: BinaryOp, lhs: &ConstantValue, rhs: &ConstantValue) -> Option<ConstantValue> {
    let distance = match promote_unary(rhs)? {
        ConstantValue::Int(i) => i64::from(i),
        ConstantValue::Long(l) => l,
        _ => return None,
    };
    match promote_unary(lhs)? {
        ConstantValue::Int(value) => {
            let n = (distance & 0x1f) as u32;
            Some(ConstantValue::Int(match op {
                BinaryOp::Shl => value.wrapping_shl(n),
                BinaryOp::Shr => value >> n,
                _ => ((value as u32) >> n) as i32,
            }))
        }
        ConstantValue::Long(value) => {
            let n = (distance & 0x3f) as u32;
            Some(ConstantValue::Long(match op {
                BinaryOp::Shl => value.wrapping_shl(n),
                BinaryOp::Shr => value >> n,
                _ => ((value as u64) >> n) as i64,
            }))
        }
        _ => None,
    }
}

macro_rules! integral_fold {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(op: BinaryOp, l: $ty, r: $ty) -> Option<ConstantValue> {
            let value = match op {
                BinaryOp::Add => l.wrapping_add(r),
                BinaryOp::Sub => l.wrapping_sub(r),
                BinaryOp::Mul => l.wrapping_mul(r),
                BinaryOp::Div if r == 0 => return None,
                BinaryOp::Div => l.wrapping_div(r),
                BinaryOp::Rem if r == 0 => return None,
                BinaryOp::Rem => l.wrapping_rem(r),
                BinaryOp::BitAnd => l & r,
                BinaryOp::BitOr => l | r,
                BinaryOp::BitXor => l ^ r,
                _ => return compare(op, l, r),
            };
            Some(ConstantValue::$variant(value))
        }
    };
}

macro_rules! floating_fold {
    ($name:ident, $ty:ty, $variant:ident) => {
        fn $name(op: BinaryOp, l: $ty, r: $ty) -> Option<ConstantValue> {
            let value = match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Rem => l % r,
                _ => return compare(op, l, r),
            };
            Some(ConstantValue::$variant(value))
        }
    };
}

integral_fold!(fold_i32, i32, Int);
integral_fold!(fold_i64, i64, Long);
floating_fold!(fold_f32, f32, Float);
floating_fold!(fold_f64, f64, Double);

fn compare<T: PartialOrd>(op: BinaryOp, l: T, r: T) -> Option<ConstantValue> {
    let value = match op {
        BinaryOp::Lt => l < r,
        BinaryOp::Gt => l > r,
        BinaryOp::Le => l <= r,
        BinaryOp::Ge => l >= r,
        BinaryOp::Eq => l == r,
        BinaryOp::Ne => l != r,
        _ => return None,
    };
    Some(ConstantValue::Boolean(value))
}

fn fold_conditional(
    condition: bool,
    then_value: ConstantValue,
    else_value: ConstantValue,
) -> Option<ConstantValue> {
    let target = match (then_value.primitive_type(), else_value.primitive_type()) {
        (None, None) => None,
        (Some(t), Some(e)) if t == e => None,
        (Some(_), Some(_)) => Some(promoted_type(&then_value, &else_value)?),
        _ => return None,
    };
    let chosen = if condition { then_value } else { else_value };
    match target {
        Some(ty) => chosen.convert_to(ty),
        None => Some(chosen),
    }
}

#[cfg(test)]
#[path = "../tests/fold.rs"]
mod tests;
