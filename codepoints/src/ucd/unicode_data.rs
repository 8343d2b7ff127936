use tracing::trace;

use super::{data_lines, hangul, parse_code};
use crate::properties::{Category, CodepointRecord};
use crate::DatasetError;

const FILE: &str = "UnicodeData.txt";

/// название управляющих символов в UnicodeData.txt, настоящее название берется из NameAliases.txt
pub const CONTROL_LABEL: &str = "<control>";

/// начало диапазона: код и метка
type RangeStart<'a> = (u32, &'a str);

/// разбор UnicodeData.txt из UCD
///
/// используются колонки 0 (код), 1 (название), 2 (категория) и 10 (название Unicode 1.0),
/// остальные колонки к модели не относятся
pub fn parse(text: &str) -> Result<Vec<CodepointRecord>, DatasetError>
{
    let mut records = vec![];

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<RangeStart> = None;

    for (line, data) in data_lines(text) {
        let props: Vec<&str> = data.split(';').collect();

        if props.len() != 15 {
            return Err(DatasetError::FieldCount { file: FILE, line });
        }

        let code = parse_code(props[0], FILE, line)?;
        let name = props[1];

        let category =
            Category::try_from(props[2]).map_err(|_| DatasetError::UnknownPropertyValue {
                file: FILE,
                line,
                value: props[2].to_owned(),
            })?;

        // различные диапазоны:
        //
        // U+3400 ..= U+4DBF CJK Ideograph Extension A
        // U+4E00 ..= U+9FFF CJK Ideograph
        // U+AC00 ..= U+D7A3 Hangul Syllable
        // U+D800 ..= U+DB7F Non Private Use High Surrogate
        // U+DB80 ..= U+DBFF Private Use High Surrogate
        // U+DC00 ..= U+DFFF Low Surrogate
        // U+E000 ..= U+F8FF Private Use
        // U+17000 ..= U+187F7 Tangut Ideograph
        // ...
        if name.starts_with('<') && name != CONTROL_LABEL {
            let label = name.trim_start_matches('<').trim_end_matches('>');

            if let Some(label) = label.strip_suffix(", First") {
                if let Some((_, open)) = range_start {
                    return Err(unpaired(line, open));
                }

                range_start = Some((code, label));
                continue;
            }

            if let Some(label) = label.strip_suffix(", Last") {
                let first = match range_start.take() {
                    Some((first, open)) if open == label => first,
                    _ => return Err(unpaired(line, label)),
                };

                expand_range(first, code, label, category, line, &mut records)?;
                continue;
            }

            return Err(DatasetError::UnsupportedRange {
                file: FILE,
                line,
                label: label.to_owned(),
            });
        }

        if let Some((_, open)) = range_start {
            return Err(unpaired(line, open));
        }

        let mut record = CodepointRecord::new(code, name, category);

        if !props[10].is_empty() {
            record.unicode1_name = Some(props[10].to_owned());
        }

        records.push(record);
    }

    if let Some((_, open)) = range_start {
        return Err(unpaired(text.lines().count(), open));
    }

    Ok(records)
}

/// диапазон кодпоинтов, заданный парой строк <..., First> / <..., Last>
fn expand_range(
    first: u32,
    last: u32,
    label: &str,
    category: Category,
    line: usize,
    records: &mut Vec<CodepointRecord>,
) -> Result<(), DatasetError>
{
    // суррогаты и символы для приватного использования не являются символами и не имеют названий
    if matches!(category, Category::Surrogate | Category::PrivateUse) {
        trace!(
            "{}: пропускаем диапазон {} (U+{:04X} ..= U+{:04X})",
            FILE,
            label,
            first,
            last
        );
        return Ok(());
    }

    // названия идеограмм составляются из префикса и кода (правило NR2)
    let prefix = match label {
        _ if label.starts_with("CJK Ideograph") => Some("CJK UNIFIED IDEOGRAPH-"),
        _ if label.starts_with("Tangut Ideograph") => Some("TANGUT IDEOGRAPH-"),
        "Hangul Syllable" => None,
        _ => {
            return Err(DatasetError::UnsupportedRange {
                file: FILE,
                line,
                label: label.to_owned(),
            })
        }
    };

    for code in first ..= last {
        let name = match prefix {
            Some(prefix) => format!("{}{:04X}", prefix, code),
            None => hangul::syllable_name(code).ok_or_else(|| DatasetError::UnsupportedRange {
                file: FILE,
                line,
                label: label.to_owned(),
            })?,
        };

        records.push(CodepointRecord::new(code, name, category));
    }

    Ok(())
}

fn unpaired(line: usize, label: &str) -> DatasetError
{
    DatasetError::UnpairedRange {
        file: FILE,
        line,
        label: label.to_owned(),
    }
}
