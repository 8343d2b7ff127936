use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::properties::{Block, CategoryTree, CodepointRecord};
use crate::DatasetError;

mod blocks;
mod name_aliases;
mod names_list;
mod property_value_aliases;
mod unicode_data;

/// именование слогов хангыль
pub mod hangul;

/// версия Unicode данных, входящих в состав крейта
pub const BUNDLED_UNICODE_VERSION: &str = "14.0.0";

macro_rules! ucd_file {
    ($name: literal) => {
        include_str!(concat!("./../../data/ucd/14.0.0/", $name))
    };
}

/// исходные тексты UCD, из которых собирается набор данных
#[derive(Debug, Clone, Copy)]
pub struct UcdSources<'a>
{
    /// версия Unicode, формат - X.Y.Z
    pub unicode_version: &'a str,
    /// UnicodeData.txt
    pub unicode_data: &'a str,
    /// Blocks.txt
    pub blocks: &'a str,
    /// NameAliases.txt
    pub name_aliases: &'a str,
    /// NamesList.txt
    pub names_list: &'a str,
    /// PropertyValueAliases.txt
    pub property_value_aliases: &'a str,
}

impl UcdSources<'static>
{
    /// данные из состава крейта
    pub fn bundled() -> Self
    {
        Self {
            unicode_version: BUNDLED_UNICODE_VERSION,
            unicode_data: ucd_file!("UnicodeData.txt"),
            blocks: ucd_file!("Blocks.txt"),
            name_aliases: ucd_file!("NameAliases.txt"),
            names_list: ucd_file!("NamesList.txt"),
            property_value_aliases: ucd_file!("PropertyValueAliases.txt"),
        }
    }
}

/// разобранный, но еще не проверенный набор данных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset
{
    pub unicode_version: String,
    /// блоки, в порядке следования в данных
    pub blocks: Vec<Block>,
    pub categories: CategoryTree,
    /// записи о кодпоинтах, в порядке следования в данных
    pub codepoints: Vec<CodepointRecord>,
}

impl Dataset
{
    /// разбор текстов UCD
    pub fn parse(sources: &UcdSources) -> Result<Self, DatasetError>
    {
        let blocks = blocks::parse(sources.blocks)?;
        let categories = property_value_aliases::parse(sources.property_value_aliases)?;
        let mut codepoints = unicode_data::parse(sources.unicode_data)?;

        // позиции записей по коду, для привязки псевдонимов
        let positions: HashMap<u32, usize> = codepoints
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id, i))
            .collect();

        name_aliases::apply(sources.name_aliases, &mut codepoints, &positions)?;
        names_list::apply(sources.names_list, &mut codepoints, &positions)?;
        drop_ambiguous_informative_names(&mut codepoints);

        Ok(Self {
            unicode_version: sources.unicode_version.to_owned(),
            blocks,
            categories,
            codepoints,
        })
    }
}

/// названия Unicode 1.0 и информативные псевдонимы не обязаны быть уникальными: например, U+0007
/// в Unicode 1.0 называлась BELL, а сейчас это название U+1F514
///
/// такое название отбрасывается, если это название или нормативный псевдоним (control, abbreviation)
/// другого кодпоинта. из совпадающих между собой информативных названий остается первое.
/// совпадения нормативных названий не трогаем - это нарушение инварианта, его найдет проверка реестра
fn drop_ambiguous_informative_names(records: &mut [CodepointRecord])
{
    let mut owners: HashMap<&str, u32> = HashMap::with_capacity(records.len());

    for record in records.iter() {
        let normative = core::iter::once(&record.name)
            .chain(record.control_names.iter())
            .chain(record.abbreviations.iter());

        for name in normative {
            owners.entry(name.as_str()).or_insert(record.id);
        }
    }

    let mut ambiguous: Vec<(usize, String)> = vec![];

    for (position, record) in records.iter().enumerate() {
        let informative = record
            .unicode1_name
            .iter()
            .chain(record.informative_aliases.iter());

        for name in informative {
            match owners.entry(name.as_str()) {
                Entry::Occupied(entry) if *entry.get() != record.id => {
                    trace!(
                        "`{}`: U+{:04X} уступает название U+{:04X}",
                        name,
                        record.id,
                        entry.get()
                    );
                    ambiguous.push((position, name.clone()));
                }
                Entry::Occupied(_) => (),
                Entry::Vacant(entry) => {
                    entry.insert(record.id);
                }
            }
        }
    }

    if !ambiguous.is_empty() {
        debug!("отброшено неоднозначных информативных названий: {}", ambiguous.len());
    }

    for (position, name) in ambiguous {
        let record = &mut records[position];

        if record.unicode1_name.as_ref() == Some(&name) {
            record.unicode1_name = None;
        }

        record.informative_aliases.retain(|alias| *alias != name);
    }
}

/// разбор шестнадцатеричного кода
fn parse_code(value: &str, file: &'static str, line: usize) -> Result<u32, DatasetError>
{
    u32::from_str_radix(value.trim(), 16).map_err(|_| DatasetError::InvalidCode {
        file,
        line,
        value: value.to_owned(),
    })
}

/// строки файла с номерами, без пустых строк и комментариев
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)>
{
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
}
