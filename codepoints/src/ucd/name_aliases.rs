use std::collections::HashMap;

use tracing::trace;

use super::unicode_data::CONTROL_LABEL;
use super::{data_lines, parse_code};
use crate::properties::CodepointRecord;
use crate::DatasetError;

const FILE: &str = "NameAliases.txt";

/// псевдонимы из NameAliases.txt: строки вида `000A;LINE FEED;control`
///
/// типы псевдонимов:
///     control - первый становится названием управляющего символа, остальные - дополнительными названиями
///     abbreviation - сокращения
///     figment - используется как название, только если других вариантов нет (U+0080, U+0081, ...)
///     correction, alternate - не используются
pub fn apply(
    text: &str,
    records: &mut [CodepointRecord],
    positions: &HashMap<u32, usize>,
) -> Result<(), DatasetError>
{
    let mut figments: HashMap<usize, String> = HashMap::new();

    for (line, data) in data_lines(text) {
        let props: Vec<&str> = data.split(';').collect();

        if props.len() != 3 {
            return Err(DatasetError::FieldCount { file: FILE, line });
        }

        let code = parse_code(props[0], FILE, line)?;
        let alias = props[1].trim();

        let &position = positions.get(&code).ok_or(DatasetError::OrphanAlias {
            file: FILE,
            line,
            code,
        })?;

        let record = &mut records[position];

        match props[2].trim() {
            "control" => {
                if record.name == CONTROL_LABEL {
                    record.name = alias.to_owned();
                } else {
                    record.control_names.push(alias.to_owned());
                }
            }
            "abbreviation" => record.abbreviations.push(alias.to_owned()),
            "figment" => {
                figments.entry(position).or_insert_with(|| alias.to_owned());
            }
            "correction" | "alternate" => {
                trace!("{}, строка {}: псевдоним `{}` не используется", FILE, line, alias);
            }
            other => {
                return Err(DatasetError::UnknownPropertyValue {
                    file: FILE,
                    line,
                    value: other.to_owned(),
                })
            }
        }
    }

    // управляющие символы, не получившие названия
    for (position, record) in records.iter_mut().enumerate() {
        if record.name != CONTROL_LABEL {
            continue;
        }

        record.name = match figments.remove(&position) {
            Some(figment) => figment,
            None => format!("control-{:04X}", record.id),
        };
    }

    Ok(())
}
