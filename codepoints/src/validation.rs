//! проверка инвариантов набора данных
//!
//! проверка не останавливается на первом нарушении: собираются все найденные нарушения,
//! чтобы испорченные данные можно было исправить за один проход

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::properties::{Block, Category, CategoryTree};
use crate::{Registry, Scope, LAST_CODEPOINT};

/// нарушенный инвариант
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation
{
    #[error("некорректная версия Unicode: `{version}`")]
    InvalidUnicodeVersion
    {
        version: String,
    },

    #[error("блок {codename}: первый кодпоинт больше последнего")]
    InvertedBlockRange
    {
        codename: String,
    },

    #[error("блок {codename} выходит за пределы своей плоскости")]
    BlockOutsidePlane
    {
        codename: String,
    },

    #[error("блок {codename} следует раньше блока {previous}")]
    BlocksOutOfOrder
    {
        previous: String,
        codename: String,
    },

    #[error("блок {codename} пересекается с блоком {previous}")]
    OverlappingBlocks
    {
        previous: String,
        codename: String,
    },

    #[error("кодовое имя {codename} встречается больше одного раза")]
    DuplicateCodename
    {
        codename: String,
    },

    #[error("категория {category} входит в несколько групп")]
    CategoryWithSeveralParents
    {
        category: Category,
    },

    #[error("категория {category}: глубина иерархии больше двух уровней")]
    CategoryTooDeep
    {
        category: Category,
    },

    #[error("категория Cs не может иметь подкатегорий")]
    SurrogateNotLeaf,

    #[error("0x{id:X} за пределами кодового пространства Unicode")]
    CodepointOutOfRange
    {
        id: u32,
    },

    #[error("U+{id:04X}: пустое название")]
    EmptyName
    {
        id: u32,
    },

    #[error("U+{id:04X}: категория {category} не является листом иерархии")]
    NonLeafCategory
    {
        id: u32,
        category: Category,
    },

    #[error("U+{id:04X}: кодпоинту назначена категория Cs")]
    SurrogateAssigned
    {
        id: u32,
    },

    #[error("U+{id:04X} не входит ни в один блок")]
    CodepointWithoutBlock
    {
        id: u32,
    },

    #[error("{scope}: U+{id:04X} следует за U+{previous:04X}")]
    IdOrderBroken
    {
        scope: String,
        previous: u32,
        id: u32,
    },

    #[error("{codename}: перечисление блока отличается от общего перечисления")]
    BlockViewMismatch
    {
        codename: String,
    },

    #[error("{codename}: у U+{id:04X} в представлении блока указан блок")]
    BlockFieldInBlockView
    {
        codename: String,
        id: u32,
    },

    #[error("U+{id:04X}: в общем представлении указан блок, отличный от {codename}")]
    BlockFieldMismatch
    {
        codename: String,
        id: u32,
    },

    #[error("`{name}` - название или псевдоним и U+{first:04X}, и U+{second:04X}")]
    NameCollision
    {
        name: String,
        first: u32,
        second: u32,
    },
}

/// проверка всех инвариантов реестра
pub fn validate(registry: &Registry) -> Vec<Violation>
{
    let mut violations = vec![];

    if !is_valid_version(registry.unicode_version()) {
        violations.push(Violation::InvalidUnicodeVersion {
            version: registry.unicode_version().to_owned(),
        });
    }

    check_blocks(registry, &mut violations);
    check_categories(registry.categories(), &mut violations);
    check_records(registry, &mut violations);
    check_enumerations(registry, &mut violations);
    check_names(registry, &mut violations);

    violations
}

/// версия вида 14.0.0: числа через точку, первое - без ведущего нуля
fn is_valid_version(version: &str) -> bool
{
    !version.starts_with('0')
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// диапазоны блоков, их порядок и уникальность кодовых имен
fn check_blocks(registry: &Registry, violations: &mut Vec<Violation>)
{
    let mut codenames: HashMap<&str, usize> = HashMap::new();

    for block in registry.blocks() {
        if block.from_codepoint() > block.to_codepoint() {
            violations.push(Violation::InvertedBlockRange {
                codename: block.codename().to_owned(),
            });
        }

        if !block.plane().contains(block.from_codepoint())
            || !block.plane().contains(block.to_codepoint())
        {
            violations.push(Violation::BlockOutsidePlane {
                codename: block.codename().to_owned(),
            });
        }

        let count = codenames.entry(block.codename()).or_default();
        *count += 1;

        if *count == 2 {
            violations.push(Violation::DuplicateCodename {
                codename: block.codename().to_owned(),
            });
        }
    }

    for pair in registry.blocks().windows(2) {
        let (previous, block) = (&pair[0], &pair[1]);

        if previous.from_codepoint() >= block.from_codepoint() {
            violations.push(Violation::BlocksOutOfOrder {
                previous: previous.codename().to_owned(),
                codename: block.codename().to_owned(),
            });
        }
    }

    // пересечения ищем по блокам, упорядоченным по началу: блок пересекается с тем из предыдущих,
    // который заканчивается дальше всех, если начинается не позже его конца
    let mut widest: Option<&Block> = None;

    for block in registry.blocks_by_start() {
        if block.from_codepoint() > block.to_codepoint() {
            continue;
        }

        if let Some(widest) = widest {
            if widest.to_codepoint() >= block.from_codepoint() {
                violations.push(Violation::OverlappingBlocks {
                    previous: widest.codename().to_owned(),
                    codename: block.codename().to_owned(),
                });
            }
        }

        if widest.map_or(true, |widest| block.to_codepoint() > widest.to_codepoint()) {
            widest = Some(block);
        }
    }
}

/// иерархия категорий - лес глубиной не больше двух уровней, Cs - лист
fn check_categories(tree: &CategoryTree, violations: &mut Vec<Violation>)
{
    let mut parents: HashMap<Category, Vec<Category>> = HashMap::new();

    for (group, child) in tree.edges() {
        let groups = parents.entry(child).or_default();

        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    for category in tree.all() {
        if parents.get(&category).map_or(0, Vec::len) > 1 {
            violations.push(Violation::CategoryWithSeveralParents { category });
        }

        let too_deep = match tree.parent(category) {
            Some(parent) => parent == category || tree.parent(parent).is_some(),
            None => false,
        };

        if too_deep {
            violations.push(Violation::CategoryTooDeep { category });
        }
    }

    if !tree.is_leaf(Category::Surrogate) {
        violations.push(Violation::SurrogateNotLeaf);
    }
}

/// каждая запись по отдельности
fn check_records(registry: &Registry, violations: &mut Vec<Violation>)
{
    let tree = registry.categories();

    for record in registry.records() {
        let id = record.id;

        if id > LAST_CODEPOINT {
            violations.push(Violation::CodepointOutOfRange { id });
        }

        if record.name.is_empty() {
            violations.push(Violation::EmptyName { id });
        }

        if !tree.is_leaf(record.category) {
            violations.push(Violation::NonLeafCategory {
                id,
                category: record.category,
            });
        }

        if record.category == Category::Surrogate {
            violations.push(Violation::SurrogateAssigned { id });
        }

        if registry.block_for_codepoint(id).is_none() {
            violations.push(Violation::CodepointWithoutBlock { id });
        }
    }
}

/// возрастание кодов в каждом перечислении и согласованность представлений блоков с общим
fn check_enumerations(registry: &Registry, violations: &mut Vec<Violation>)
{
    check_order(registry, Scope::Global, violations);

    // общее представление: коды и блоки в порядке перечисления, и позиции в нем по возрастанию кода
    let global: Vec<(u32, Option<&Block>)> = registry
        .enumerate(Scope::Global)
        .map(|(info, _)| (info.id(), info.block()))
        .collect();

    let mut by_code: Vec<usize> = (0 .. global.len()).collect();
    by_code.sort_by_key(|&i| global[i].0);

    for block in registry.blocks() {
        let scope = Scope::Block(block);
        check_order(registry, scope, violations);

        let codename = block.codename();
        let mut block_ids = vec![];

        for (info, _) in registry.enumerate(scope) {
            if info.block().is_some() {
                violations.push(Violation::BlockFieldInBlockView {
                    codename: codename.to_owned(),
                    id: info.id(),
                });
            }

            block_ids.push(info.id());
        }

        // кодпоинты из диапазона блока, в порядке общего перечисления
        let from = by_code.partition_point(|&i| global[i].0 < block.from_codepoint());
        let to = by_code.partition_point(|&i| global[i].0 <= block.to_codepoint());

        let mut positions = by_code[from .. to.max(from)].to_vec();
        positions.sort_unstable();

        let mut global_ids = Vec::with_capacity(positions.len());

        for (id, global_block) in positions.into_iter().map(|i| global[i]) {
            if global_block != Some(block) {
                violations.push(Violation::BlockFieldMismatch {
                    codename: codename.to_owned(),
                    id,
                });
            }

            global_ids.push(id);
        }

        if block_ids != global_ids {
            violations.push(Violation::BlockViewMismatch {
                codename: codename.to_owned(),
            });
        }
    }
}

fn check_order(registry: &Registry, scope: Scope, violations: &mut Vec<Violation>)
{
    for (info, previous) in registry.enumerate(scope) {
        let previous = match previous {
            Some(previous) => previous,
            None => continue,
        };

        if info.id() <= previous.id() {
            violations.push(Violation::IdOrderBroken {
                scope: scope.to_string(),
                previous: previous.id(),
                id: info.id(),
            });
        }
    }
}

/// название или псевдоним не может принадлежать двум разным записям
///
/// совпадения в пределах одной записи допустимы (название Unicode 1.0 часто повторяется
/// в информативных псевдонимах)
fn check_names(registry: &Registry, violations: &mut Vec<Violation>)
{
    let mut owners: HashMap<&str, u32> = HashMap::with_capacity(registry.len());

    for record in registry.records() {
        for name in record.names() {
            match owners.entry(name) {
                Entry::Occupied(entry) if *entry.get() != record.id => {
                    violations.push(Violation::NameCollision {
                        name: name.to_owned(),
                        first: *entry.get(),
                        second: record.id,
                    });
                }
                Entry::Occupied(_) => (),
                Entry::Vacant(entry) => {
                    entry.insert(record.id);
                }
            }
        }
    }
}
