use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Error)]
pub(crate) enum EquationsError {
    #[error("equations list is empty (file: {path:?})")]
    EmptyFromFile { path: PathBuf },

    #[error("failed to read equations file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) type Result<T> = std::result::Result<T, EquationsError>;

/// Режим работы, выбранный в CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Читаем stdin до exit-token или EOF
    Interactive,
    /// Решаем готовый список и выходим
    Batch(Vec<String>),
}

/// Выбирает режим по аргументам:
/// - `EQUATION...`   -> список из аргументов
/// - `--input-file`  -> quadratic_core::source::read_equations_from_path
/// - иначе           -> интерактивный режим
pub(crate) fn load_mode(args: &Args) -> Result<Mode> {
    if !args.equations.is_empty() {
        Ok(Mode::Batch(args.equations.clone()))
    } else if let Some(path) = &args.input_file {
        load_from_file(path).map(Mode::Batch)
    } else {
        Ok(Mode::Interactive)
    }
}

fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref().to_path_buf();

    let equations = quadratic_core::source::read_equations_from_path(&path).map_err(|e| {
        EquationsError::ReadFile {
            path: path.clone(),
            source: e,
        }
    })?;

    if equations.is_empty() {
        return Err(EquationsError::EmptyFromFile { path });
    }

    Ok(equations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quadratic-cli").chain(extra.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_input_means_interactive() {
        assert_eq!(load_mode(&args(&[])).unwrap(), Mode::Interactive);
    }

    #[test]
    fn positional_equations_are_batch() {
        let mode = load_mode(&args(&["x^2-1", "x^2+1"])).unwrap();
        assert_eq!(
            mode,
            Mode::Batch(vec!["x^2-1".to_string(), "x^2+1".to_string()])
        );
    }

    #[test]
    fn file_equations_are_batch() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "# demo\nx^2-3x+2\n\nx^2+2x+1 # double").unwrap();

        let path = f.path().to_str().unwrap().to_string();
        let mode = load_mode(&args(&["--input-file", &path])).unwrap();
        assert_eq!(
            mode,
            Mode::Batch(vec!["x^2-3x+2".to_string(), "x^2+2x+1".to_string()])
        );
    }

    #[test]
    fn file_without_equations_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "# only comments\n\n").unwrap();

        let path = f.path().to_str().unwrap().to_string();
        let err = load_mode(&args(&["--input-file", &path])).unwrap_err();
        assert!(matches!(err, EquationsError::EmptyFromFile { .. }));
    }

    #[test]
    fn unreadable_file_keeps_source() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        match err {
            EquationsError::ReadFile { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
