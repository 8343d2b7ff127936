use std::collections::HashMap;

use super::{data_lines, parse_code};
use crate::properties::CodepointRecord;
use crate::DatasetError;

const FILE: &str = "NamesList.txt";

/// информативные псевдонимы из NamesList.txt
///
/// 000A	<control>
/// 	= LINE FEED (LF)
/// 	= new line (NL)
///
/// строка с кодом открывает запись, строки `= ...` относятся к последней открытой записи,
/// заголовки (@, @@, ...) запись закрывают. перекрестные ссылки, примечания и т.п. не используются
pub fn apply(
    text: &str,
    records: &mut [CodepointRecord],
    positions: &HashMap<u32, usize>,
) -> Result<(), DatasetError>
{
    let mut current: Option<u32> = None;

    for (line, data) in data_lines(text) {
        if data.starts_with('@') || data.starts_with(';') {
            current = None;
            continue;
        }

        if let Some(alias) = data.strip_prefix("\t= ") {
            let code = match current {
                Some(code) => code,
                None => continue,
            };

            let &position = positions.get(&code).ok_or(DatasetError::OrphanAlias {
                file: FILE,
                line,
                code,
            })?;

            records[position].informative_aliases.push(alias.trim().to_owned());
            continue;
        }

        if data.starts_with('\t') {
            continue;
        }

        let (code, _) = data
            .split_once('\t')
            .ok_or(DatasetError::FieldCount { file: FILE, line })?;

        current = Some(parse_code(code, FILE, line)?);
    }

    Ok(())
}
