use quadratic_core::RootSet;

/// `2.0`, `-0.5`, `1.4142135623730951`
fn format_root(x: f64) -> String {
    format!("{x:?}")
}

/// Текстовое представление корней, по строке на корень
pub(crate) fn render_roots(roots: &RootSet) -> String {
    match *roots {
        RootSet::None => "No roots".to_string(),
        RootSet::One(x) => format!("x = {}", format_root(x)),
        RootSet::Two(x1, x2) => format!("x1 = {}\nx2 = {}", format_root(x1), format_root(x2)),
    }
}
