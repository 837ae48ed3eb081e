use std::fmt;

use thiserror::Error;

/// Что парсер увидел на месте ошибки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// Конкретный символ
    Char(char),
    /// Строка закончилась
    End,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Found::End, Found::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{c}'"),
            Found::End => f.write_str("end of input"),
        }
    }
}

/// Ошибки разбора уравнения.
///
/// Позиции считаются в символах нормализованной строки
/// (нижний регистр, без пробелов), начиная с нуля.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Ожидалось число (например, после `^`)
    #[error("expected a number at position {position}")]
    ExpectedNumber {
        /// Где ожидалась первая цифра
        position: usize,
    },

    /// Член (кроме первого) начинается не с `+`/`-`
    #[error("expected +/- at position {position} of the equation but found {found}")]
    ExpectedSign {
        /// Начало члена без знака
        position: usize,
        /// Символ на этой позиции
        found: Found,
    },

    /// После знака нет ни цифры, ни переменной
    #[error("expected x/digit at position {position} of the equation but found {found}")]
    ExpectedTermStart {
        /// Позиция сразу после знака
        position: usize,
        /// Символ на этой позиции
        found: Found,
    },

    /// Степень вне диапазона [0, 2]
    #[error("invalid term: {term}")]
    InvalidExponent {
        /// Член в записи вида `x^3`
        term: String,
    },

    /// Нет ненулевого члена второй степени
    #[error("this equation is not a quadratic equation")]
    NotQuadratic,

    /// Число не помещается в i32
    #[error("number at position {position} is too large")]
    NumberTooLarge {
        /// Позиция первой цифры
        position: usize,
    },

    /// Переполнение при сложении подобных членов
    #[error("coefficient of x^{exponent} overflows")]
    CoefficientOverflow {
        /// Степень, при которой переполнилась сумма
        exponent: i32,
    },

    /// Внутренняя ошибка сложения членов, кроме переполнения
    #[error(transparent)]
    Term(TermError),
}

/// Ошибки операций над членами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TermError {
    /// Складывать можно только члены одной степени
    #[error("can't add terms with different exponents ({left} and {right})")]
    ExponentMismatch {
        /// Степень члена, к которому прибавляем
        left: i32,
        /// Степень прибавляемого члена
        right: i32,
    },

    /// Сумма коэффициентов не помещается в i32
    #[error("coefficient overflow")]
    Overflow,
}
