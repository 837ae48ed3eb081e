use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config;
use crate::repl::ReplSettings;

/// Quadratic CLI - решает квадратные уравнения вида `x^2-3x+2`.
///
/// Без аргументов запускается интерактивный режим: уравнения читаются
/// со stdin по одному на строку. Уравнения, начинающиеся с `-`,
/// передавайте после `--`.
#[derive(Parser, Debug, Clone)]
#[command(name = "quadratic-cli", version, about)]
pub(crate) struct Args {
    /// Уравнения для решения, например "x^2-3x+2" или "X^2 + 2X - 3"
    #[arg(value_name = "EQUATION", conflicts_with = "input_file")]
    pub(crate) equations: Vec<String>,

    /// Файл уравнений (по одному на строку, поддержка # комментариев)
    #[arg(long, conflicts_with = "equations")]
    pub(crate) input_file: Option<PathBuf>,

    /// Строка, по которой интерактивный режим завершается
    #[arg(long, default_value = config::EXIT_TOKEN)]
    pub(crate) exit_token: String,

    /// Не печатать приглашение в интерактивном режиме
    #[arg(long)]
    pub(crate) no_prompt: bool,
}

impl Args {
    /// Валидация аргументов (файл существует, exit-token не пустой)
    pub(crate) fn validate(&self) -> Result<()> {
        if self.exit_token.trim().is_empty() {
            bail!("--exit-token is empty");
        }

        if let Some(path) = &self.input_file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("input file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--input-file must point to a file: {:?}", path);
            }
        }

        if self.input_file.is_some() && !self.equations.is_empty() {
            bail!("--input-file and EQUATION arguments are mutually exclusive");
        }

        Ok(())
    }

    pub(crate) fn repl_settings(&self) -> ReplSettings {
        let exit_token = self.exit_token.trim().to_string();
        ReplSettings {
            prompt: (!self.no_prompt).then(|| config::prompt(&exit_token)),
            exit_token,
        }
    }
}
