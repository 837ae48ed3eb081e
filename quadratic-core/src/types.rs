use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::parse_equation;
use crate::solver::{RootSet, solve};
use crate::term::Term;

/// Коэффициенты нормализованного уравнения `a*x^2 + b*x + c = 0`.
///
/// Получаются только через парсер, который гарантирует `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientTriple {
    /// При `x^2`, всегда ненулевой
    pub a: i32,
    /// При `x`
    pub b: i32,
    /// Свободный член
    pub c: i32,
}

impl CoefficientTriple {
    /// Вещественные корни уравнения.
    ///
    /// # Panics
    ///
    /// В debug-сборке, если `a == 0` (тройка собрана вручную, не парсером),
    /// см. [`solve`](crate::solve).
    pub fn solve(&self) -> RootSet {
        solve(self.a, self.b, self.c)
    }
}

impl FromStr for CoefficientTriple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_equation(s)
    }
}

/// Каноническая запись, которую парсер принимает обратно: `x^2-3x+2`
impl fmt::Display for CoefficientTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Term::new(self.a, 2))?;
        for term in [Term::new(self.b, 1), Term::new(self.c, 0)] {
            if term.coefficient == 0 {
                continue;
            }
            if term.coefficient > 0 {
                f.write_str("+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_skips_zero_coefficients() {
        let t = CoefficientTriple { a: 1, b: 0, c: 0 };
        assert_eq!(t.to_string(), "x^2");

        let t = CoefficientTriple { a: -2, b: 0, c: 7 };
        assert_eq!(t.to_string(), "-2x^2+7");
    }

    #[test]
    fn display_is_accepted_by_parser() {
        for t in [
            CoefficientTriple { a: 1, b: -3, c: 2 },
            CoefficientTriple { a: -1, b: 1, c: -1 },
            CoefficientTriple { a: 12, b: -1, c: 0 },
        ] {
            let back: CoefficientTriple = t.to_string().parse().unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn from_str_uses_parser() {
        let t: CoefficientTriple = "X^2 - 3X + 2".parse().unwrap();
        assert_eq!(t, CoefficientTriple { a: 1, b: -3, c: 2 });
        assert_eq!(t.solve(), RootSet::Two(2.0, 1.0));
    }
}
