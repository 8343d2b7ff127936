use super::{data_lines, parse_code};
use crate::properties::{Block, Plane};
use crate::DatasetError;

const FILE: &str = "Blocks.txt";

/// разбор Blocks.txt: строки вида `0000..007F; Basic Latin`
///
/// плоскость блока определяется по его первому кодпоинту, корректность диапазонов
/// проверяется позже, при построении реестра
pub fn parse(text: &str) -> Result<Vec<Block>, DatasetError>
{
    let mut blocks = vec![];

    for (line, data) in data_lines(text) {
        let (range, name) = data
            .split_once(';')
            .ok_or(DatasetError::FieldCount { file: FILE, line })?;

        let (from, to) = range
            .split_once("..")
            .ok_or(DatasetError::FieldCount { file: FILE, line })?;

        let from = parse_code(from, FILE, line)?;
        let to = parse_code(to, FILE, line)?;

        let plane = Plane::for_codepoint(from).map_err(|_| DatasetError::InvalidCode {
            file: FILE,
            line,
            value: format!("{:X}", from),
        })?;

        blocks.push(Block::new(from, to, name.trim(), plane));
    }

    Ok(blocks)
}
