use core::ops::RangeInclusive;

use super::PropertiesError;
use crate::{CodepointError, LAST_CODEPOINT};

/// плоскость Unicode - одна из 17 частей кодового пространства по 0x10000 кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plane(u8);

#[allow(non_upper_case_globals)]
impl Plane
{
    pub const BasicMultilingual: Self = Self(0);
    pub const SupplementaryMultilingual: Self = Self(1);
    pub const SupplementaryIdeographic: Self = Self(2);
    pub const TertiaryIdeographic: Self = Self(3);
    pub const SupplementarySpecialPurpose: Self = Self(14);
    pub const SupplementaryPrivateUseA: Self = Self(15);
    pub const SupplementaryPrivateUseB: Self = Self(16);
}

/// количество плоскостей
const PLANES_COUNT: usize = 17;

/// количество кодпоинтов в плоскости
const PLANE_SIZE: u32 = 0x10000;

const NAMES: [&str; PLANES_COUNT] = [
    "Basic Multilingual Plane",
    "Supplementary Multilingual Plane",
    "Supplementary Ideographic Plane",
    "Tertiary Ideographic Plane",
    "Unassigned Plane 4",
    "Unassigned Plane 5",
    "Unassigned Plane 6",
    "Unassigned Plane 7",
    "Unassigned Plane 8",
    "Unassigned Plane 9",
    "Unassigned Plane 10",
    "Unassigned Plane 11",
    "Unassigned Plane 12",
    "Unassigned Plane 13",
    "Supplementary Special-purpose Plane",
    "Supplementary Private Use Area-A",
    "Supplementary Private Use Area-B",
];

impl Plane
{
    /// все плоскости, по возрастанию индекса
    pub fn all() -> [Plane; PLANES_COUNT]
    {
        core::array::from_fn(|i| Self(i as u8))
    }

    /// плоскость, которой принадлежит кодпоинт
    #[inline]
    pub fn for_codepoint(code: u32) -> Result<Self, CodepointError>
    {
        if code > LAST_CODEPOINT {
            return Err(CodepointError::OutOfRange(code));
        }

        Ok(Self((code / PLANE_SIZE) as u8))
    }

    #[inline]
    pub fn index(&self) -> u8
    {
        self.0
    }

    pub fn name(&self) -> &'static str
    {
        NAMES[self.0 as usize]
    }

    /// общепринятое сокращение, у неназначенных плоскостей его нет
    pub fn abbreviation(&self) -> Option<&'static str>
    {
        Some(match self.0 {
            0 => "BMP",
            1 => "SMP",
            2 => "SIP",
            3 => "TIP",
            14 => "SSP",
            15 => "SPUA-A",
            16 => "SPUA-B",
            _ => return None,
        })
    }

    /// кодпоинты плоскости
    #[inline]
    pub fn range(&self) -> RangeInclusive<u32>
    {
        let first = self.0 as u32 * PLANE_SIZE;

        first ..= first + PLANE_SIZE - 1
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.range().contains(&code)
    }
}

impl TryFrom<u8> for Plane
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match (value as usize) < PLANES_COUNT {
            true => Ok(Self(value)),
            false => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}

impl From<Plane> for u8
{
    #[inline]
    fn from(value: Plane) -> Self
    {
        value.0
    }
}

impl core::fmt::Display for Plane
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{} ({})", self.name(), self.0)
    }
}
