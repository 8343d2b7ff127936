use super::{Block, Category};

/// запись о кодпоинте, в том виде, в котором она хранится в реестре
/// источник - UCD: UnicodeData.txt, NameAliases.txt, NamesList.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord
{
    /// код символа
    pub id: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub category: Category,
    /// дополнительные названия управляющих символов (NameAliases.txt, control)
    pub control_names: Vec<String>,
    /// сокращения (NameAliases.txt, abbreviation)
    pub abbreviations: Vec<String>,
    /// название из Unicode 1.0 (UnicodeData.txt, колонка 10)
    pub unicode1_name: Option<String>,
    /// информативные псевдонимы (NamesList.txt, строки "=")
    pub informative_aliases: Vec<String>,
}

impl CodepointRecord
{
    pub fn new(id: u32, name: impl Into<String>, category: Category) -> Self
    {
        Self {
            id,
            name: name.into(),
            category,
            control_names: vec![],
            abbreviations: vec![],
            unicode1_name: None,
            informative_aliases: vec![],
        }
    }

    /// псевдонимы в порядке проверки при поиске по имени:
    /// control names, сокращения, название Unicode 1.0, информативные псевдонимы
    pub fn aliases(&self) -> impl Iterator<Item = &str>
    {
        self.control_names
            .iter()
            .chain(self.abbreviations.iter())
            .chain(self.unicode1_name.iter())
            .chain(self.informative_aliases.iter())
            .map(String::as_str)
    }

    /// название, а за ним - псевдонимы
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        core::iter::once(self.name.as_str()).chain(self.aliases())
    }
}

/// информация о кодпоинте
///
/// блок указывается только при запросе из общего представления - в представлении блока он известен из контекста
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointInfo<'a>
{
    record: &'a CodepointRecord,
    block: Option<&'a Block>,
}

impl<'a> CodepointInfo<'a>
{
    #[inline]
    pub(crate) fn new(record: &'a CodepointRecord, block: Option<&'a Block>) -> Self
    {
        Self { record, block }
    }

    #[inline]
    pub fn id(&self) -> u32
    {
        self.record.id
    }

    #[inline]
    pub fn name(&self) -> &'a str
    {
        &self.record.name
    }

    #[inline]
    pub fn category(&self) -> Category
    {
        self.record.category
    }

    #[inline]
    pub fn block(&self) -> Option<&'a Block>
    {
        self.block
    }

    pub fn control_names(&self) -> &'a [String]
    {
        &self.record.control_names
    }

    pub fn abbreviations(&self) -> &'a [String]
    {
        &self.record.abbreviations
    }

    pub fn unicode1_name(&self) -> Option<&'a str>
    {
        self.record.unicode1_name.as_deref()
    }

    pub fn informative_aliases(&self) -> &'a [String]
    {
        &self.record.informative_aliases
    }

    /// запись без привязки к представлению
    #[inline]
    pub fn record(&self) -> &'a CodepointRecord
    {
        self.record
    }

    /// символ, если код - не суррогат
    #[inline]
    pub fn as_char(&self) -> Option<char>
    {
        char::from_u32(self.record.id)
    }
}

impl core::fmt::Display for CodepointInfo<'_>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "U+{:04X} {}", self.id(), self.name())
    }
}
