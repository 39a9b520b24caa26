use std::sync::Arc;

use miette::NamedSource;

use crate::ast::{BecValue, BinOp, Expr};
use crate::error::{BecError, SemanticError, TypeError};
use crate::symbols::SymbolTable;

/// Evaluates a constant expression to a number.
///
/// Expressions are evaluated while the document is being parsed, against the
/// constants declared so far. All arithmetic is checked; an intermediate
/// result outside the `i64` range is an error, not a wrap-around.
///
/// # Errors
///
/// Returns a semantic error for names that have no declaration and a type
/// error for string operands, misuse of `ord` or overflow.
pub fn evaluate(
    expr: &Expr,
    symbols: &SymbolTable,
    source: &Arc<NamedSource<String>>,
) -> Result<i64, BecError> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),

        Expr::StringLit { span, .. } => Err(TypeError::NonNumericOperand {
            src: (**source).clone(),
            span: *span,
            found: "a string literal".to_string(),
        }
        .into()),

        Expr::Name { name, span } => match symbols.lookup(name) {
            None => Err(SemanticError::UndefinedConstant {
                src: (**source).clone(),
                span: *span,
                name: name.clone(),
            }
            .into()),
            Some(BecValue::Number(v)) => Ok(*v),
            Some(other) => Err(TypeError::NonNumericOperand {
                src: (**source).clone(),
                span: *span,
                found: format!("the constant '{name}', which is {}", other.kind_name()),
            }
            .into()),
        },

        Expr::Ord { arg, span } => {
            let text = evaluate_string(arg, symbols, source)?;
            match text.chars().next() {
                Some(c) => Ok(i64::from(u32::from(c))),
                None => Err(TypeError::OrdEmptyString {
                    src: (**source).clone(),
                    span: *span,
                }
                .into()),
            }
        }

        Expr::Binary { op, lhs, rhs, span } => {
            let l = evaluate(lhs, symbols, source)?;
            let r = evaluate(rhs, symbols, source)?;
            let result = match op {
                BinOp::Add => l.checked_add(r),
                BinOp::Sub => l.checked_sub(r),
                BinOp::Mul => l.checked_mul(r),
            };
            result.ok_or_else(|| {
                TypeError::Overflow {
                    src: (**source).clone(),
                    span: *span,
                }
                .into()
            })
        }
    }
}

/// Evaluates the argument of `ord`, which must name a string.
fn evaluate_string(
    expr: &Expr,
    symbols: &SymbolTable,
    source: &Arc<NamedSource<String>>,
) -> Result<String, BecError> {
    match expr {
        Expr::StringLit { value, .. } => Ok(value.clone()),

        Expr::Name { name, span } => match symbols.lookup(name) {
            None => Err(SemanticError::UndefinedConstant {
                src: (**source).clone(),
                span: *span,
                name: name.clone(),
            }
            .into()),
            Some(BecValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(TypeError::OrdArgument {
                src: (**source).clone(),
                span: *span,
                found: format!("the constant '{name}', which is {}", other.kind_name()),
            }
            .into()),
        },

        // Everything else evaluates to a number. Evaluate it anyway so that
        // an undefined name or an overflow inside the argument is reported
        // ahead of the type mismatch.
        other => {
            evaluate(other, symbols, source)?;
            Err(TypeError::OrdArgument {
                src: (**source).clone(),
                span: other.span(),
                found: "a number".to_string(),
            }
            .into())
        }
    }
}
