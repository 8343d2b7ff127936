use thiserror::Error;

use crate::validation::Violation;

/// ошибки запроса информации о кодпоинте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodepointError
{
    /// значение за пределами U+0000 ..= U+10FFFF
    #[error("0x{0:X} за пределами кодового пространства Unicode")]
    OutOfRange(u32),
    /// кодпоинт допустим, но записи о нём нет. это ожидаемая ситуация, а не ошибка данных
    #[error("U+{0:04X} не назначен")]
    Unassigned(u32),
}

/// ошибки разбора файлов UCD
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError
{
    #[error("{file}, строка {line}: некорректное количество полей")]
    FieldCount
    {
        file: &'static str,
        line: usize,
    },

    #[error("{file}, строка {line}: некорректный код `{value}`")]
    InvalidCode
    {
        file: &'static str,
        line: usize,
        value: String,
    },

    #[error("{file}, строка {line}: неизвестное значение свойства `{value}`")]
    UnknownPropertyValue
    {
        file: &'static str,
        line: usize,
        value: String,
    },

    #[error("{file}, строка {line}: у диапазона `{label}` нет пары")]
    UnpairedRange
    {
        file: &'static str,
        line: usize,
        label: String,
    },

    #[error("{file}, строка {line}: неизвестно, как именовать кодпоинты диапазона `{label}`")]
    UnsupportedRange
    {
        file: &'static str,
        line: usize,
        label: String,
    },

    #[error("{file}, строка {line}: U+{code:04X} отсутствует в UnicodeData.txt")]
    OrphanAlias
    {
        file: &'static str,
        line: usize,
        code: u32,
    },
}

/// полный список нарушенных инвариантов набора данных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolations(Vec<Violation>);

impl InvariantViolations
{
    pub fn new(violations: Vec<Violation>) -> Self
    {
        Self(violations)
    }

    pub fn violations(&self) -> &[Violation]
    {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Violation>
    {
        self.0
    }
}

impl core::fmt::Display for InvariantViolations
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "нарушено инвариантов: {}", self.0.len())?;

        for violation in self.0.iter() {
            write!(f, "\n  - {}", violation)?;
        }

        Ok(())
    }
}

impl std::error::Error for InvariantViolations {}

/// ошибка загрузки реестра: данные не удалось разобрать или они не прошли проверку
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError
{
    #[error("не удалось разобрать данные UCD: {0}")]
    Dataset(#[from] DatasetError),
    #[error("данные UCD не прошли проверку: {0}")]
    Invariants(#[from] InvariantViolations),
}
