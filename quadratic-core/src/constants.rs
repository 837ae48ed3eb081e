/// Буква, обозначающая переменную
pub const VARIABLE: char = 'x';

/// Разделитель между переменной и степенью: `x^2`
pub const CARET: char = '^';

/// Максимальная степень члена квадратного уравнения
pub const MAX_EXPONENT: i32 = 2;

/// Число слотов для накопления членов (степени 0..=MAX_EXPONENT)
pub(crate) const SLOTS: usize = MAX_EXPONENT as usize + 1;
