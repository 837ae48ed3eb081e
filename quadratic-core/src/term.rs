use std::fmt;

use crate::constants::{MAX_EXPONENT, VARIABLE};
use crate::error::TermError;

/// Одночлен `coefficient * x^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Коэффициент со знаком
    pub coefficient: i32,
    /// Степень переменной
    pub exponent: i32,
}

impl Term {
    /// Новый член
    pub fn new(coefficient: i32, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Индекс слота для допустимой степени, `None` вне [0, MAX_EXPONENT]
    pub fn slot(&self) -> Option<usize> {
        if (0..=MAX_EXPONENT).contains(&self.exponent) {
            usize::try_from(self.exponent).ok()
        } else {
            None
        }
    }

    /// Прибавляет коэффициент подобного члена
    pub fn merge(&mut self, other: Term) -> Result<(), TermError> {
        if self.exponent != other.exponent {
            return Err(TermError::ExponentMismatch {
                left: self.exponent,
                right: other.exponent,
            });
        }

        self.coefficient = self
            .coefficient
            .checked_add(other.coefficient)
            .ok_or(TermError::Overflow)?;
        Ok(())
    }
}

/// `5`, `-3`, `x`, `-x^2`, `4x^23`
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 0 {
            return write!(f, "{}", self.coefficient);
        }

        match self.coefficient {
            1 => {}
            -1 => f.write_str("-")?,
            c => write!(f, "{c}")?,
        }
        write!(f, "{VARIABLE}")?;
        if self.exponent != 1 {
            write!(f, "^{}", self.exponent)?;
        }
        Ok(())
    }
}
