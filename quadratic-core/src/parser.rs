use log::{debug, trace};

use crate::constants::{CARET, SLOTS, VARIABLE};
use crate::error::{Found, ParseError, TermError};
use crate::term::Term;
use crate::types::CoefficientTriple;

/// Нижний регистр + удаление всех пробельных символов
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Курсор по нормализованной строке; живёт ровно один разбор
struct Cursor {
    source: Vec<char>,
    position: usize,
}

impl Cursor {
    fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            position: 0,
        }
    }

    /// Текущий символ, `None` за концом строки
    fn peek(&self) -> Option<char> {
        self.source.get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn bump(&mut self) {
        self.position += 1;
    }

    /// Съедает `expected`, если он под курсором
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_digit(&self) -> bool {
        self.peek().is_some_and(|c| c.is_ascii_digit())
    }

    fn found(&self) -> Found {
        self.peek().into()
    }
}

/// Парсит уравнение вида `x^2-3x+2` в коэффициенты `(a, b, c)`.
///
/// Строка нормализуется внутри (см. [`normalize`]), поэтому разбор
/// не зависит от регистра и пробелов. Подобные члены складываются,
/// степень каждого члена должна быть в диапазоне [0, 2],
/// член второй степени обязан быть ненулевым.
pub fn parse_equation(raw: &str) -> Result<CoefficientTriple, ParseError> {
    let normalized = normalize(raw);
    let mut cursor = Cursor::new(&normalized);
    let mut slots: [Option<Term>; SLOTS] = [None; SLOTS];
    let mut is_first = true;

    while !cursor.at_end() {
        let term = parse_term(&mut cursor, is_first)?;
        let slot = term.slot().ok_or_else(|| ParseError::InvalidExponent {
            term: term.to_string(),
        })?;
        trace!("term {term} -> slot {slot}");

        merge_into(&mut slots[slot], term)?;

        is_first = false;
    }

    let a = match slots[2] {
        Some(t) if t.coefficient != 0 => t.coefficient,
        _ => return Err(ParseError::NotQuadratic),
    };
    let coefficient = |slot: Option<Term>| slot.map_or(0, |t| t.coefficient);

    let triple = CoefficientTriple {
        a,
        b: coefficient(slots[1]),
        c: coefficient(slots[0]),
    };
    debug!("parsed {normalized:?} as {triple}");
    Ok(triple)
}

/// Один член: `[+|-] [digits] [x [^ digits]]`.
/// Знак обязателен для всех членов, кроме первого.
fn parse_term(cursor: &mut Cursor, is_first: bool) -> Result<Term, ParseError> {
    let sign = match cursor.peek() {
        Some('+') => {
            cursor.bump();
            1
        }
        Some('-') => {
            cursor.bump();
            -1
        }
        _ if is_first => 1,
        _ => {
            return Err(ParseError::ExpectedSign {
                position: cursor.position,
                found: cursor.found(),
            });
        }
    };

    if cursor.peek() != Some(VARIABLE) && !cursor.at_digit() {
        return Err(ParseError::ExpectedTermStart {
            position: cursor.position,
            found: cursor.found(),
        });
    }

    let mut coefficient = sign;
    if cursor.at_digit() {
        let start = cursor.position;
        let magnitude = parse_number(cursor)?;
        coefficient = narrow(i64::from(sign) * magnitude, start)?;
    }

    let mut exponent = 0;
    if cursor.eat(VARIABLE) {
        exponent = 1;
        if cursor.eat(CARET) {
            let start = cursor.position;
            exponent = narrow(parse_number(cursor)?, start)?;
        }
    }

    Ok(Term::new(coefficient, exponent))
}

/// Складывает член в его слот.
/// Переполнение суммы сообщается вместе со степенью.
fn merge_into(slot: &mut Option<Term>, term: Term) -> Result<(), ParseError> {
    match slot {
        Some(existing) => existing.merge(term).map_err(|e| match e {
            TermError::Overflow => ParseError::CoefficientOverflow {
                exponent: term.exponent,
            },
            other => ParseError::Term(other),
        }),
        empty => {
            *empty = Some(term);
            Ok(())
        }
    }
}

/// Модуль числа до применения знака: `-2147483648` ещё должен влезть
const MAX_MAGNITUDE: i64 = i32::MAX as i64 + 1;

/// Максимальная непрерывная последовательность цифр.
/// Пустая последовательность — ошибка; слишком длинная обрывается сразу,
/// не дочитывая цифры до конца.
fn parse_number(cursor: &mut Cursor) -> Result<i64, ParseError> {
    let start = cursor.position;
    let mut value: i64 = 0;

    while let Some(digit) = cursor.peek().and_then(|c| c.to_digit(10)) {
        value = value * 10 + i64::from(digit);
        if value > MAX_MAGNITUDE {
            return Err(ParseError::NumberTooLarge { position: start });
        }
        cursor.bump();
    }

    if cursor.position == start {
        return Err(ParseError::ExpectedNumber { position: start });
    }

    Ok(value)
}

/// Значение со знаком в i32, `position` — начало числа
fn narrow(value: i64, position: usize) -> Result<i32, ParseError> {
    i32::try_from(value).map_err(|_| ParseError::NumberTooLarge { position })
}
