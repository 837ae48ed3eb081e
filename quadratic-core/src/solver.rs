use std::cmp::Ordering;

/// Вещественные корни квадратного уравнения
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootSet {
    /// Дискриминант отрицательный
    None,
    /// Двойной корень
    One(f64),
    /// Два корня: сначала ветка с `+√D`, затем с `-√D`
    Two(f64, f64),
}

impl RootSet {
    /// Количество корней
    pub fn count(&self) -> usize {
        match self {
            RootSet::None => 0,
            RootSet::One(_) => 1,
            RootSet::Two(..) => 2,
        }
    }
}

/// Решает `a*x^2 + b*x + c = 0` по формуле через дискриминант.
///
/// Дискриминант считается точно в `i128`, сравнение с нулём без epsilon.
/// Корень и деления — в `f64`.
///
/// # Panics
///
/// В debug-сборке паникует при `a == 0`: такое уравнение не квадратное.
/// [`parse_equation`](crate::parse_equation) никогда не возвращает `a == 0`;
/// при ручной сборке коэффициентов проверка остаётся на вызывающем.
/// В release-сборке проверки нет, и результат при `a == 0` не определён
/// (деление на ноль в `f64`).
pub fn solve(a: i32, b: i32, c: i32) -> RootSet {
    debug_assert!(a != 0, "leading coefficient must be non-zero");

    let (a, b, c) = (i128::from(a), i128::from(b), i128::from(c));
    let discriminant = b * b - 4 * a * c;
    let denominator = (2 * a) as f64;
    let minus_b = (-b) as f64;

    match discriminant.cmp(&0) {
        Ordering::Less => RootSet::None,
        Ordering::Equal => RootSet::One(minus_b / denominator),
        Ordering::Greater => {
            let sqrt = (discriminant as f64).sqrt();
            RootSet::Two((minus_b + sqrt) / denominator, (minus_b - sqrt) / denominator)
        }
    }
}
