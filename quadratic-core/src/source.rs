use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

/// Чтение уравнений: по одному на строку, порядок сохраняется
pub fn read_equations<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    let buf = BufReader::new(reader);

    for (n, line) in buf.lines().enumerate() {
        let line = line?;
        match normalize_line(&line) {
            Some(eq) => out.push(eq),
            None => debug!("skipping line {}", n + 1),
        }
    }

    Ok(out)
}

/// Чтение уравнений из файла
pub fn read_equations_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    read_equations(f)
}

fn normalize_line(line: &str) -> Option<String> {
    // Поддержка inline-комментариев: "x^2-1 # два корня"
    let s = line.split('#').next().unwrap_or("").trim();
    if s.is_empty() {
        return None;
    }

    Some(s.to_string())
}
