use std::fs;

use unicode_codepoints::UcdSources;

/// файлы UCD, входящие в состав крейта
const DIR: &str = "./../codepoints/data/ucd";

/// тексты файлов UCD одной версии
pub struct Files
{
    pub version: String,
    pub unicode_data: String,
    pub blocks: String,
    pub name_aliases: String,
    pub names_list: String,
    pub property_value_aliases: String,
}

impl Files
{
    pub fn sources(&self) -> UcdSources
    {
        UcdSources {
            unicode_version: &self.version,
            unicode_data: &self.unicode_data,
            blocks: &self.blocks,
            name_aliases: &self.name_aliases,
            names_list: &self.names_list,
            property_value_aliases: &self.property_value_aliases,
        }
    }
}

/// прочитать файлы UCD версии
pub fn files(version: &str) -> Files
{
    Files {
        version: version.to_owned(),
        unicode_data: read(version, "UnicodeData.txt"),
        blocks: read(version, "Blocks.txt"),
        name_aliases: read(version, "NameAliases.txt"),
        names_list: read(version, "NamesList.txt"),
        property_value_aliases: read(version, "PropertyValueAliases.txt"),
    }
}

/// прочитать файл
fn read(version: &str, name: &str) -> String
{
    fs::read_to_string(format!("{}/{}/{}", DIR, version, name)).unwrap()
}
