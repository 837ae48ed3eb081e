//! # quadratic-core
//!
//! Разбор и решение квадратных уравнений с целыми коэффициентами.
//!
//! Этот крейт содержит:
//!
//! - [`parser`] — разбор строки вида `x^2-3x+2` в коэффициенты `(a, b, c)`
//! - [`solver`] — вещественные корни по дискриминанту
//! - [`term`] — одночлен `coefficient * x^exponent`
//! - [`types`] — тройка коэффициентов
//! - [`source`] — чтение списка уравнений из текста/файла
//! - [`error`] — типы ошибок
//!
//! ## Быстрый пример
//!
//! ```rust
//! use quadratic_core::{parse_equation, CoefficientTriple, RootSet};
//!
//! let eq = parse_equation("X^2 - 3X + 2").unwrap();
//! assert_eq!(eq, CoefficientTriple { a: 1, b: -3, c: 2 });
//! assert_eq!(eq.solve(), RootSet::Two(2.0, 1.0));
//! ```
//!
//! ## Пример: ошибки разбора
//!
//! ```rust
//! use quadratic_core::{parse_equation, ParseError};
//!
//! assert_eq!(parse_equation("2+3"), Err(ParseError::NotQuadratic));
//!
//! let err = parse_equation("x^3").unwrap_err();
//! assert_eq!(err.to_string(), "invalid term: x^3");
//! ```
//!
//! ## Пример: чтение уравнений
//!
//! ```rust
//! use quadratic_core::source::read_equations;
//! use std::io::Cursor;
//!
//! let input = "x^2-1\n# comment\n\nx^2+1 # no roots\n";
//! let eqs = read_equations(Cursor::new(input)).unwrap();
//! assert_eq!(eqs, vec!["x^2-1".to_string(), "x^2+1".to_string()]);
//! ```
//!
//! ## Грамматика
//!
//! ```text
//! equation := term+
//! term     := (sign)? (number)? (variable (caret number)?)?
//! sign     := '+' | '-'
//! variable := 'x'
//! number   := digit+
//! ```
//!
//! Знак первого члена можно опустить, у остальных он обязателен.
//! Ввод и вывод (консоль, CLI) сюда не входят: крейт только
//! превращает строки в коэффициенты и коэффициенты в корни.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Разбор уравнения.
pub mod parser;

/// Решение по дискриминанту.
pub mod solver;

/// Одночлены.
pub mod term;

/// Тройка коэффициентов.
pub mod types;

/// Чтение уравнений из текста и файлов.
pub mod source;

/// Ошибки `quadratic-core`.
pub mod error;

/// Константы грамматики
mod constants;
pub use constants::{CARET, MAX_EXPONENT, VARIABLE};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::{Found, ParseError, TermError};
pub use crate::parser::parse_equation;
pub use crate::solver::{RootSet, solve};
pub use crate::term::Term;
pub use crate::types::CoefficientTriple;
