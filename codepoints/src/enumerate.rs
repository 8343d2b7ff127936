use core::iter::FusedIterator;
use core::ops::Range;

use crate::properties::{Block, CodepointInfo};
use crate::Registry;

/// представление, в котором запрашиваются и перечисляются кодпоинты
///
/// в общем представлении у информации о кодпоинте указан блок, в представлении блока - нет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'r>
{
    /// все кодпоинты набора данных
    Global,
    /// кодпоинты одного блока
    Block(&'r Block),
}

impl core::fmt::Display for Scope<'_>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Scope::Global => write!(f, "Global"),
            Scope::Block(block) => write!(f, "{}", block.codename()),
        }
    }
}

/// позиции записей реестра, которые обходит перечисление
#[derive(Debug, Clone)]
enum Positions<'r>
{
    All(Range<usize>),
    Listed(core::slice::Iter<'r, usize>),
}

/// последовательность пар (кодпоинт, предыдущий кодпоинт той же последовательности)
///
/// порядок - порядок записей в данных. перечисление ленивое и конечное, повторный вызов
/// Registry::enumerate (или clone) начинает обход заново
#[derive(Debug, Clone)]
pub struct Enumeration<'r>
{
    registry: &'r Registry,
    positions: Positions<'r>,
    with_block: bool,
    previous: Option<CodepointInfo<'r>>,
}

impl<'r> Enumeration<'r>
{
    pub(crate) fn global(registry: &'r Registry) -> Self
    {
        Self {
            registry,
            positions: Positions::All(0 .. registry.len()),
            with_block: true,
            previous: None,
        }
    }

    pub(crate) fn listed(registry: &'r Registry, positions: &'r [usize]) -> Self
    {
        Self {
            registry,
            positions: Positions::Listed(positions.iter()),
            with_block: false,
            previous: None,
        }
    }
}

impl<'r> Iterator for Enumeration<'r>
{
    type Item = (CodepointInfo<'r>, Option<CodepointInfo<'r>>);

    fn next(&mut self) -> Option<Self::Item>
    {
        let position = match &mut self.positions {
            Positions::All(range) => range.next()?,
            Positions::Listed(iter) => *iter.next()?,
        };

        let info = self.registry.info_at(position, self.with_block);

        Some((info, self.previous.replace(info)))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = match &self.positions {
            Positions::All(range) => range.len(),
            Positions::Listed(iter) => iter.len(),
        };

        (len, Some(len))
    }
}

impl ExactSizeIterator for Enumeration<'_> {}

impl FusedIterator for Enumeration<'_> {}
