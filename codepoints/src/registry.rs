use std::collections::HashMap;

use tracing::{debug, warn};

use crate::enumerate::{Enumeration, Scope};
use crate::properties::{Block, CategoryTree, CodepointInfo, CodepointRecord, Plane};
use crate::ucd::{Dataset, UcdSources};
use crate::validation::{self, Violation};
use crate::{CodepointError, InvariantViolations, LoadError, LAST_CODEPOINT};

/// неизменяемый реестр метаданных кодпоинтов
///
/// создается один раз из набора данных и отдается читателям только после успешной проверки
/// всех инвариантов. все запросы - чтение без побочных эффектов
#[derive(Debug)]
pub struct Registry
{
    unicode_version: String,
    /// блоки, в порядке следования в данных
    blocks: Vec<Block>,
    /// индексы блоков, упорядоченные по первому кодпоинту
    blocks_lookup: Vec<usize>,
    /// индексы блоков по кодовым именам
    by_codename: HashMap<String, usize>,
    categories: CategoryTree,
    /// записи, в порядке следования в данных
    records: Vec<CodepointRecord>,
    /// позиции записей по коду
    by_code: HashMap<u32, usize>,
    /// блок каждой записи
    record_blocks: Vec<Option<usize>>,
    /// позиции записей каждого блока
    block_records: Vec<Vec<usize>>,
    /// позиции записей по названию
    names: HashMap<String, usize>,
    /// позиции записей по псевдонимам, при совпадении остается первый
    aliases: HashMap<String, usize>,
}

impl Registry
{
    /// реестр из разобранных данных. данные с нарушенными инвариантами отвергаются целиком,
    /// с перечнем всех найденных нарушений
    pub fn build(dataset: Dataset) -> Result<Self, InvariantViolations>
    {
        let registry = Self::index(dataset);
        let violations = validation::validate(&registry);

        if !violations.is_empty() {
            for violation in violations.iter() {
                warn!("{}", violation);
            }

            return Err(InvariantViolations::new(violations));
        }

        debug!(
            "Unicode {}: блоков - {}, кодпоинтов - {}",
            registry.unicode_version,
            registry.blocks.len(),
            registry.records.len()
        );

        Ok(registry)
    }

    /// разбор текстов UCD и построение реестра
    pub fn load(sources: &UcdSources) -> Result<Self, LoadError>
    {
        let dataset = Dataset::parse(sources)?;

        Ok(Self::build(dataset)?)
    }

    fn index(dataset: Dataset) -> Self
    {
        let Dataset {
            unicode_version,
            blocks,
            categories,
            codepoints: records,
        } = dataset;

        let mut blocks_lookup: Vec<usize> = (0 .. blocks.len()).collect();
        blocks_lookup.sort_by_key(|&i| blocks[i].from_codepoint());

        let mut by_codename = HashMap::new();

        for (i, block) in blocks.iter().enumerate() {
            by_codename.entry(block.codename().to_owned()).or_insert(i);
        }

        let mut registry = Self {
            unicode_version,
            block_records: vec![vec![]; blocks.len()],
            blocks,
            blocks_lookup,
            by_codename,
            categories,
            by_code: HashMap::with_capacity(records.len()),
            record_blocks: Vec::with_capacity(records.len()),
            names: HashMap::with_capacity(records.len()),
            aliases: HashMap::new(),
            records: vec![],
        };

        for (position, record) in records.iter().enumerate() {
            registry.by_code.entry(record.id).or_insert(position);
            registry.names.entry(record.name.clone()).or_insert(position);

            for alias in record.aliases() {
                registry.aliases.entry(alias.to_owned()).or_insert(position);
            }

            let block = registry.block_index(record.id);

            if let Some(block) = block {
                registry.block_records[block].push(position);
            }

            registry.record_blocks.push(block);
        }

        registry.records = records;
        registry
    }

    /// версия Unicode набора данных
    pub fn unicode_version(&self) -> &str
    {
        &self.unicode_version
    }

    /// все плоскости, по возрастанию номера
    pub fn planes(&self) -> [Plane; 17]
    {
        Plane::all()
    }

    pub fn plane_for_codepoint(&self, code: u32) -> Result<Plane, CodepointError>
    {
        Plane::for_codepoint(code)
    }

    /// все блоки, по возрастанию первого кодпоинта
    pub fn blocks(&self) -> &[Block]
    {
        &self.blocks
    }

    /// блок, в который входит кодпоинт. кодпоинты вне блоков существуют (U+0870 и т.д.)
    pub fn block_for_codepoint(&self, code: u32) -> Option<&Block>
    {
        self.block_index(code).map(|i| &self.blocks[i])
    }

    /// блок по кодовому имени, например Latin1_Supplement
    pub fn block_by_codename(&self, codename: &str) -> Option<&Block>
    {
        self.by_codename.get(codename).map(|&i| &self.blocks[i])
    }

    /// иерархия категорий
    pub fn categories(&self) -> &CategoryTree
    {
        &self.categories
    }

    /// информация о кодпоинте
    ///
    /// в представлении блока кодпоинты за пределами блока считаются неназначенными,
    /// как и любые кодпоинты блока, не принадлежащего реестру (см. enumerate)
    pub fn info_for(&self, code: u32, scope: Scope) -> Result<CodepointInfo, CodepointError>
    {
        if code > LAST_CODEPOINT {
            return Err(CodepointError::OutOfRange(code));
        }

        let &position = self
            .by_code
            .get(&code)
            .ok_or(CodepointError::Unassigned(code))?;

        match scope {
            Scope::Global => Ok(self.info_at(position, true)),
            Scope::Block(block) => match self.own_block(block) {
                Some(i) if self.record_blocks[position] == Some(i) => {
                    Ok(self.info_at(position, false))
                }
                _ => Err(CodepointError::Unassigned(code)),
            },
        }
    }

    /// поиск кодпоинта по названию, точное совпадение с учетом регистра
    ///
    /// псевдонимы проверяются после названий, в порядке: control names, сокращения,
    /// название Unicode 1.0, информативные псевдонимы
    pub fn resolve_by_name(&self, name: &str, include_aliases: bool) -> Option<CodepointInfo>
    {
        let position = match self.names.get(name) {
            Some(&position) => position,
            None if include_aliases => *self.aliases.get(name)?,
            None => return None,
        };

        Some(self.info_at(position, true))
    }

    /// количество назначенных кодпоинтов
    #[inline]
    pub fn len(&self) -> usize
    {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.records.is_empty()
    }

    /// перечисление кодпоинтов представления вместе с предыдущими
    ///
    /// блок, не принадлежащий реестру, дает пустое перечисление
    pub fn enumerate<'r>(&'r self, scope: Scope<'_>) -> Enumeration<'r>
    {
        match scope {
            Scope::Global => Enumeration::global(self),
            Scope::Block(block) => {
                let positions = match self.own_block(block) {
                    Some(i) => self.block_records[i].as_slice(),
                    None => &[],
                };

                Enumeration::listed(self, positions)
            }
        }
    }

    /// все представления, в которых есть кодпоинты: общее, затем блоки
    pub fn scopes(&self) -> impl Iterator<Item = Scope<'_>>
    {
        let blocks = self
            .blocks
            .iter()
            .zip(self.block_records.iter())
            .filter(|(_, records)| !records.is_empty())
            .map(|(block, _)| Scope::Block(block));

        core::iter::once(Scope::Global).chain(blocks)
    }

    /// повторная проверка инвариантов. для построенного реестра список всегда пуст
    pub fn audit(&self) -> Vec<Violation>
    {
        validation::validate(self)
    }

    /// информация о записи по ее позиции
    pub(crate) fn info_at(&self, position: usize, with_block: bool) -> CodepointInfo
    {
        let block = match with_block {
            true => self.record_blocks[position].map(|i| &self.blocks[i]),
            false => None,
        };

        CodepointInfo::new(&self.records[position], block)
    }

    /// записи в порядке следования в данных
    pub(crate) fn records(&self) -> &[CodepointRecord]
    {
        &self.records
    }

    /// блоки по возрастанию первого кодпоинта, независимо от порядка в данных
    pub(crate) fn blocks_by_start(&self) -> impl Iterator<Item = &Block>
    {
        self.blocks_lookup.iter().map(move |&i| &self.blocks[i])
    }

    /// индекс блока, содержащего кодпоинт
    fn block_index(&self, code: u32) -> Option<usize>
    {
        let after = self
            .blocks_lookup
            .partition_point(|&i| self.blocks[i].from_codepoint() <= code);

        let &candidate = self.blocks_lookup.get(after.checked_sub(1)?)?;

        match self.blocks[candidate].contains(code) {
            true => Some(candidate),
            false => None,
        }
    }

    /// индекс блока, если это блок этого реестра
    fn own_block(&self, block: &Block) -> Option<usize>
    {
        self.by_codename
            .get(block.codename())
            .copied()
            .filter(|&i| self.blocks[i] == *block)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::Category;

    fn dataset() -> Dataset
    {
        let mut line_feed = CodepointRecord::new(0x000A, "LINE FEED", Category::Control);
        line_feed.abbreviations = vec!["LF".to_owned(), "EOL".to_owned()];
        line_feed.unicode1_name = Some("LINE FEED (LF)".to_owned());

        let mut nbsp = CodepointRecord::new(0x00A0, "NO-BREAK SPACE", Category::SpaceSeparator);
        nbsp.abbreviations = vec!["NBSP".to_owned()];

        Dataset {
            unicode_version: "14.0.0".to_owned(),
            blocks: vec![
                Block::new(0x0000, 0x007F, "Basic Latin", Plane::BasicMultilingual),
                Block::new(0x0080, 0x00FF, "Latin-1 Supplement", Plane::BasicMultilingual),
                Block::new(0x0100, 0x017F, "Latin Extended-A", Plane::BasicMultilingual),
            ],
            categories: CategoryTree::new([
                (Category::Other, vec![Category::Control, Category::Surrogate]),
                (Category::Separator, vec![Category::SpaceSeparator]),
            ]),
            codepoints: vec![
                line_feed,
                CodepointRecord::new(0x0020, "SPACE", Category::SpaceSeparator),
                nbsp,
            ],
        }
    }

    #[test]
    fn lookup()
    {
        let registry = Registry::build(dataset()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.block_for_codepoint(0x00FF).unwrap().codename(), "Latin1_Supplement");
        assert_eq!(registry.block_for_codepoint(0x0180), None);

        let info = registry.info_for(0x000A, Scope::Global).unwrap();

        assert_eq!(info.name(), "LINE FEED");
        assert_eq!(info.block().unwrap().name(), "Basic Latin");

        let basic_latin = registry.block_by_codename("Basic_Latin").unwrap();
        let info = registry.info_for(0x000A, Scope::Block(basic_latin)).unwrap();

        assert_eq!(info.block(), None);
        assert_eq!(info.abbreviations(), ["LF", "EOL"]);

        assert_eq!(
            registry.info_for(0x00A0, Scope::Block(basic_latin)),
            Err(CodepointError::Unassigned(0x00A0))
        );
        assert_eq!(
            registry.info_for(0x0041, Scope::Global),
            Err(CodepointError::Unassigned(0x0041))
        );
        assert_eq!(
            registry.info_for(0x110000, Scope::Global),
            Err(CodepointError::OutOfRange(0x110000))
        );
    }

    #[test]
    fn resolve_by_name()
    {
        let registry = Registry::build(dataset()).unwrap();

        assert_eq!(registry.resolve_by_name("SPACE", false).unwrap().id(), 0x20);
        assert_eq!(registry.resolve_by_name("space", true), None);

        assert_eq!(registry.resolve_by_name("NBSP", false), None);
        assert_eq!(registry.resolve_by_name("NBSP", true).unwrap().id(), 0xA0);
        assert_eq!(registry.resolve_by_name("LINE FEED (LF)", true).unwrap().id(), 0x0A);

        // найденная по названию запись - из общего представления
        assert!(registry.resolve_by_name("SPACE", false).unwrap().block().is_some());
    }

    #[test]
    fn scopes_skip_empty_blocks()
    {
        let registry = Registry::build(dataset()).unwrap();
        let scopes: Vec<String> = registry.scopes().map(|s| s.to_string()).collect();

        assert_eq!(scopes, ["Global", "Basic_Latin", "Latin1_Supplement"]);
        assert!(registry.audit().is_empty());
    }

    #[test]
    fn foreign_block()
    {
        let registry = Registry::build(dataset()).unwrap();
        let foreign = Block::new(0x0000, 0x00FF, "Basic Latin", Plane::BasicMultilingual);

        assert_eq!(registry.enumerate(Scope::Block(&foreign)).count(), 0);

        // тот же ответ и при запросе отдельного кодпоинта, даже если он попадает в диапазон блока
        for code in [0x000A, 0x0020, 0x00A0] {
            assert!(foreign.contains(code));
            assert_eq!(
                registry.info_for(code, Scope::Block(&foreign)),
                Err(CodepointError::Unassigned(code))
            );
        }

        // блок с тем же диапазоном и названием, что и у блока реестра, считается своим
        let same = Block::new(0x0000, 0x007F, "Basic Latin", Plane::BasicMultilingual);

        assert_eq!(registry.info_for(0x000A, Scope::Block(&same)).unwrap().id(), 0x0A);
        assert_eq!(registry.enumerate(Scope::Block(&same)).count(), 2);
    }

    #[test]
    fn rejects_invalid_dataset()
    {
        let mut dataset = dataset();
        dataset.codepoints[1].category = Category::Surrogate;

        let violations = Registry::build(dataset).unwrap_err().into_inner();

        assert_eq!(violations, [Violation::SurrogateAssigned { id: 0x20 }]);
    }
}
