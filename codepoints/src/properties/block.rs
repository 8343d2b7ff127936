use core::ops::RangeInclusive;

use super::Plane;

/// блок Unicode - именованный непрерывный диапазон кодпоинтов в пределах одной плоскости
/// источник - UCD, Blocks.txt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block
{
    /// первый кодпоинт блока
    from_codepoint: u32,
    /// последний кодпоинт блока (включительно)
    to_codepoint: u32,
    /// название
    name: String,
    /// плоскость
    plane: Plane,
    /// кодовое имя, получаемое из названия
    codename: String,
}

impl Block
{
    pub fn new(from_codepoint: u32, to_codepoint: u32, name: impl Into<String>, plane: Plane) -> Self
    {
        let name = name.into();
        let codename = codename(&name);

        Self {
            from_codepoint,
            to_codepoint,
            name,
            plane,
            codename,
        }
    }

    #[inline]
    pub fn from_codepoint(&self) -> u32
    {
        self.from_codepoint
    }

    #[inline]
    pub fn to_codepoint(&self) -> u32
    {
        self.to_codepoint
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    #[inline]
    pub fn plane(&self) -> Plane
    {
        self.plane
    }

    pub fn codename(&self) -> &str
    {
        &self.codename
    }

    #[inline]
    pub fn range(&self) -> RangeInclusive<u32>
    {
        self.from_codepoint ..= self.to_codepoint
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.from_codepoint <= code && code <= self.to_codepoint
    }
}

impl core::fmt::Display for Block
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(
            f,
            "{} (U+{:04X} ..= U+{:04X})",
            self.name, self.from_codepoint, self.to_codepoint
        )
    }
}

/// кодовое имя блока: пробелы заменяются на подчеркивания, дефисы удаляются
pub fn codename(name: &str) -> String
{
    name.chars()
        .filter(|&c| c != '-')
        .map(|c| match c {
            ' ' => '_',
            c => c,
        })
        .collect()
}
