//! Integer expression evaluation
//!
//! Implements the arithmetic behind `\numexpr`-style arguments: integers,
//! binary `+ - * /`, parentheses and unary signs. Evaluation runs in three
//! passes:
//!
//! ```text
//! text -> sign folding + tokens -> shunting-yard postfix -> stack evaluation
//! ```
//!
//! A run of `+`/`-` at the start of the expression, after `(` or after another
//! operator is a sign, not a binary operator. The run collapses to nothing when
//! it has an even number of `-` and to a single unary minus otherwise, so
//! `--3` is `3` and `-+-3` is `3`.

use std::fmt;

use tracing::trace;

use crate::utils::error::{StateError, StateResult};

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// Unary minus
    Neg,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Neg => 3,
        }
    }

    fn is_left_associative(self) -> bool {
        !matches!(self, Op::Neg)
    }

    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Neg => "neg",
        }
    }
}

/// Token produced by the folding tokenizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(Op),
    LParen,
    RParen,
}

/// One element of a postfix expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    Number(f64),
    Op(Op),
}

/// An expression in postfix order, together with the text it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Postfix {
    source: String,
    items: Vec<PostfixItem>,
}

impl Postfix {
    /// The postfix items
    pub fn items(&self) -> &[PostfixItem] {
        &self.items
    }

    /// The expression text as given
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match item {
                PostfixItem::Number(n) => write!(f, "{}", n)?,
                PostfixItem::Op(op) => f.write_str(op.symbol())?,
            }
        }
        Ok(())
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Split an expression into tokens, folding sign runs into unary minus.
///
/// Whitespace is removed before anything else, so `1 2` reads as `12`.
pub fn tokenize(text: &str) -> StateResult<Vec<Token>> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let starts_sign_run = i == 0 || matches!(chars[i - 1], '+' | '-' | '*' | '/' | '(');

        match c {
            '+' | '-' if starts_sign_run => {
                let mut minus_count = 0;
                while i < chars.len() && matches!(chars[i], '+' | '-') {
                    if chars[i] == '-' {
                        minus_count += 1;
                    }
                    i += 1;
                }
                if minus_count % 2 == 1 {
                    tokens.push(Token::Op(Op::Neg));
                }
                continue;
            }
            '+' => tokens.push(Token::Op(Op::Add)),
            '-' => tokens.push(Token::Op(Op::Sub)),
            '*' => tokens.push(Token::Op(Op::Mul)),
            '/' => tokens.push(Token::Op(Op::Div)),
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            _ => {
                let start = i;
                while i < chars.len() && !is_operator_char(chars[i]) {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token::Number(parse_literal(&literal)?));
                continue;
            }
        }
        i += 1;
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> StateResult<f64> {
    if !literal.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(StateError::invalid_number(literal));
    }
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(StateError::invalid_number(literal)),
    }
}

/// Whether `top` must be moved to the output before pushing `incoming`
fn should_pop(incoming: Op, top: Op) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && incoming.is_left_associative())
}

#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Op(Op),
    LParen,
}

/// Convert an expression to postfix order with the shunting-yard algorithm
pub fn to_postfix(text: &str) -> StateResult<Postfix> {
    let mismatched = || StateError::MismatchedParentheses(text.to_string());
    let mut output = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokenize(text)? {
        match token {
            Token::Number(n) => output.push(PostfixItem::Number(n)),
            Token::Op(op) => {
                while let Some(StackEntry::Op(top)) = stack.last().copied() {
                    if !should_pop(op, top) {
                        break;
                    }
                    output.push(PostfixItem::Op(top));
                    stack.pop();
                }
                stack.push(StackEntry::Op(op));
            }
            Token::LParen => stack.push(StackEntry::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op(op)) => output.push(PostfixItem::Op(op)),
                    Some(StackEntry::LParen) => break,
                    None => return Err(mismatched()),
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op(op) => output.push(PostfixItem::Op(op)),
            StackEntry::LParen => return Err(mismatched()),
        }
    }

    let postfix = Postfix {
        source: text.to_string(),
        items: output,
    };
    trace!(expression = text, postfix = %postfix, "converted to postfix");
    Ok(postfix)
}

/// Evaluate a postfix expression with floating-point arithmetic
///
/// Division is true division; the caller decides how to turn the result
/// into an integer (see [`numexpr`]).
pub fn evaluate_postfix(postfix: &Postfix) -> StateResult<f64> {
    let invalid = || StateError::InvalidExpression(postfix.source.clone());
    let mut stack: Vec<f64> = Vec::new();

    for item in &postfix.items {
        match *item {
            PostfixItem::Number(n) => stack.push(n),
            PostfixItem::Op(Op::Neg) => {
                let operand = stack.pop().ok_or_else(invalid)?;
                stack.push(-operand);
            }
            PostfixItem::Op(op) => {
                let right = stack.pop().ok_or_else(invalid)?;
                let left = stack.pop().ok_or_else(invalid)?;
                let result = match op {
                    Op::Add => left + right,
                    Op::Sub => left - right,
                    Op::Mul => left * right,
                    Op::Div => left / right,
                    Op::Neg => unreachable!("unary minus handled above"),
                };
                stack.push(result);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(invalid()),
    }
}

/// Evaluate an arithmetic expression
///
/// # Example
///
/// ```rust
/// use texstate::numexpr::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("7/2").unwrap(), 3.5);
/// ```
pub fn evaluate(text: &str) -> StateResult<f64> {
    evaluate_postfix(&to_postfix(text)?)
}

/// How [`numexpr`] turns a real result into an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionMode {
    /// Round half away from zero, like e-TeX's `\numexpr`
    #[default]
    Rounded,
    /// Truncate toward zero
    Truncated,
    /// Require an integral result
    Real,
}

/// Evaluate an expression to an integer
pub fn numexpr(text: &str, mode: DivisionMode) -> StateResult<i64> {
    let value = evaluate(text)?;
    if !value.is_finite() {
        return Err(StateError::invalid_number(text));
    }

    let integral = match mode {
        DivisionMode::Rounded => value.round(),
        DivisionMode::Truncated => value.trunc(),
        DivisionMode::Real if value.fract() != 0.0 => {
            return Err(StateError::invalid_number(text))
        }
        DivisionMode::Real => value,
    };

    if integral < i64::MIN as f64 || integral >= i64::MAX as f64 {
        return Err(StateError::invalid_number(text));
    }
    Ok(integral as i64)
}
