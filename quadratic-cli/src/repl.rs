use std::io::{BufRead, Write};

use log::{debug, warn};
use quadratic_core::{ParseError, RootSet, parse_equation};

use crate::render::render_roots;

/// Настройки интерактивного режима
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReplSettings {
    /// `None` — приглашение не печатается
    pub(crate) prompt: Option<String>,
    pub(crate) exit_token: String,
}

/// Итоги обработки
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) solved: usize,
    pub(crate) failed: usize,
}

/// Разбирает и решает одно уравнение, печатая корни в `out`,
/// а ошибку разбора — в `err`. Ошибки разбора не прерывают работу.
fn process<W: Write, E: Write>(
    equation: &str,
    out: &mut W,
    err: &mut E,
    summary: &mut Summary,
) -> std::io::Result<()> {
    match solve_line(equation) {
        Ok(roots) => {
            summary.solved += 1;
            writeln!(out, "{}", render_roots(&roots))?;
            writeln!(out)?;
        }
        Err(e) => {
            summary.failed += 1;
            warn!("rejected equation {equation:?}: {e}");
            writeln!(err, "Error: {e}")?;
            writeln!(err)?;
        }
    }
    Ok(())
}

fn solve_line(equation: &str) -> Result<RootSet, ParseError> {
    let triple = parse_equation(equation)?;
    let roots = triple.solve();
    debug!("{triple}: {} root(s)", roots.count());
    Ok(roots)
}

/// Интерактивный цикл: приглашение, строка, результат.
///
/// Завершается на EOF или строке, равной exit-token.
/// Пустые строки пропускаются.
pub(crate) fn run_interactive<R: BufRead, W: Write, E: Write>(
    mut input: R,
    out: &mut W,
    err: &mut E,
    settings: &ReplSettings,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();
    let mut line = String::new();

    loop {
        if let Some(prompt) = &settings.prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        line.clear();
        let n = input.read_line(&mut line)?;
        if n == 0 {
            debug!("end of input");
            break;
        }

        let equation = line.trim();
        if equation == settings.exit_token {
            break;
        }
        if equation.is_empty() {
            continue;
        }

        process(equation, out, err, &mut summary)?;
    }

    Ok(summary)
}

/// Пакетный режим: каждое уравнение печатается заголовком,
/// затем его корни или ошибка
pub(crate) fn run_batch<W: Write, E: Write>(
    equations: &[String],
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for equation in equations {
        writeln!(out, "{equation}")?;
        out.flush()?;
        process(equation, out, err, &mut summary)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(prompt: Option<&str>) -> ReplSettings {
        ReplSettings {
            prompt: prompt.map(str::to_string),
            exit_token: "0".to_string(),
        }
    }

    fn run(input: &str, s: &ReplSettings) -> (String, String, Summary) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run_interactive(Cursor::new(input), &mut out, &mut err, s).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    #[test]
    fn prints_roots_for_each_line() {
        let (out, err, summary) = run("x^2-3x+2\nx^2+2x+1\nx^2+1\n0\n", &settings(None));
        assert_eq!(out, "x1 = 2.0\nx2 = 1.0\n\nx = -1.0\n\nNo roots\n\n");
        assert!(err.is_empty());
        assert_eq!(summary, Summary { solved: 3, failed: 0 });
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let (out, err, summary) = run("x^3\n2+3\nx^2-1\n", &settings(None));
        assert_eq!(out, "x1 = 1.0\nx2 = -1.0\n\n");
        assert_eq!(
            err,
            "Error: invalid term: x^3\n\nError: this equation is not a quadratic equation\n\n"
        );
        assert_eq!(summary, Summary { solved: 1, failed: 2 });
    }

    #[test]
    fn exit_token_stops_before_remaining_lines() {
        let (out, _, summary) = run(" 0 \nx^2-1\n", &settings(None));
        assert!(out.is_empty());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn exit_token_is_compared_to_whole_line() {
        // "10" не совпадает с "0" и разбирается как уравнение
        let (_, err, summary) = run("10\n", &settings(None));
        assert_eq!(err, "Error: this equation is not a quadratic equation\n\n");
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, err, summary) = run("\n   \nx^2\n", &settings(None));
        assert_eq!(out, "x = 0.0\n\n");
        assert!(err.is_empty());
        assert_eq!(summary.solved, 1);
    }

    #[test]
    fn prompt_is_printed_before_every_read() {
        let (out, _, _) = run("x^2-1\n", &settings(Some("> ")));
        // второе приглашение печатается перед EOF
        assert_eq!(out, "> x1 = 1.0\nx2 = -1.0\n\n> ");
    }

    #[test]
    fn batch_echoes_equations_and_counts_failures() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let eqs = vec!["X^2 - 4".to_string(), "x^2x".to_string()];

        let summary = run_batch(&eqs, &mut out, &mut err).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "X^2 - 4\nx1 = 2.0\nx2 = -2.0\n\nx^2x\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: expected +/- at position 3 of the equation but found 'x'\n\n"
        );
        assert_eq!(summary, Summary { solved: 1, failed: 1 });
    }
}
