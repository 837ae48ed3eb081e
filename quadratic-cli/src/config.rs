/// Строка, завершающая интерактивный режим
pub(crate) const EXIT_TOKEN: &str = "0";

pub(crate) fn prompt(exit_token: &str) -> String {
    format!("Enter equation({exit_token} for exit): ")
}
