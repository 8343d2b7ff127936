use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt, иерархия - PropertyValueAliases.txt
///
/// 30 категорий-листьев и 7 групп:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
/// LC (Lu, Ll, Lt) - буквы, имеющие регистр, пересекается с L и в иерархию не входит
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Category
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3,
    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Zs - разделитель-пробел
    SpaceSeparator = 12,
    /// Zl - разделитель строки
    LineSeparator = 13,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14,

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 15,
    /// Cf - управляющий символ форматирования
    Format = 16,
    /// Cs - символ-суррогат. зарезервирована, кодпоинтам не назначается
    Surrogate = 17,
    /// Co - символ для приватного использования
    PrivateUse = 18,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 19,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 20,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 21,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 22,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 23,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 24,
    /// Po - знак препинания другого типа
    OtherPunctuation = 25,

    /// Sm - математический символ
    MathSymbol = 26,
    /// Sc - символ валюты
    CurrencySymbol = 27,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 28,
    /// So - прочие символы
    OtherSymbol = 29,

    /// L - буквы
    Letter = 30,
    /// M - комбинирующие символы
    Mark = 31,
    /// N - числовые символы
    Number = 32,
    /// P - пунктуация
    Punctuation = 33,
    /// S - символы
    Symbol = 34,
    /// Z - разделители
    Separator = 35,
    /// C - системные символы
    Other = 36,
}

impl Category
{
    /// количество вариантов
    pub const COUNT: usize = 37;

    /// все варианты, по возрастанию числового значения
    pub const ALL: [Category; Self::COUNT] = [
        Self::Unassigned,
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::Letter,
        Self::Mark,
        Self::Number,
        Self::Punctuation,
        Self::Symbol,
        Self::Separator,
        Self::Other,
    ];

    /// порядковый номер, пригодный для индексации таблиц
    #[inline]
    pub fn index(&self) -> usize
    {
        u8::from(*self) as usize
    }

    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter | Self::LowercaseLetter | Self::TitlecaseLetter
        )
    }

    /// сокращение, как в UnicodeData.txt
    pub fn abbreviation(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::Letter => "L",
            Self::Mark => "M",
            Self::Number => "N",
            Self::Punctuation => "P",
            Self::Symbol => "S",
            Self::Separator => "Z",
            Self::Other => "C",
        }
    }

    /// полное название, как в PropertyValueAliases.txt
    pub fn long_name(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Unassigned",
            Self::UppercaseLetter => "Uppercase_Letter",
            Self::LowercaseLetter => "Lowercase_Letter",
            Self::TitlecaseLetter => "Titlecase_Letter",
            Self::ModifierLetter => "Modifier_Letter",
            Self::OtherLetter => "Other_Letter",
            Self::NonspacingMark => "Nonspacing_Mark",
            Self::SpacingMark => "Spacing_Mark",
            Self::EnclosingMark => "Enclosing_Mark",
            Self::DecimalNumber => "Decimal_Number",
            Self::LetterNumber => "Letter_Number",
            Self::OtherNumber => "Other_Number",
            Self::SpaceSeparator => "Space_Separator",
            Self::LineSeparator => "Line_Separator",
            Self::ParagraphSeparator => "Paragraph_Separator",
            Self::Control => "Control",
            Self::Format => "Format",
            Self::Surrogate => "Surrogate",
            Self::PrivateUse => "Private_Use",
            Self::ConnectorPunctuation => "Connector_Punctuation",
            Self::DashPunctuation => "Dash_Punctuation",
            Self::OpenPunctuation => "Open_Punctuation",
            Self::ClosePunctuation => "Close_Punctuation",
            Self::InitialPunctuation => "Initial_Punctuation",
            Self::FinalPunctuation => "Final_Punctuation",
            Self::OtherPunctuation => "Other_Punctuation",
            Self::MathSymbol => "Math_Symbol",
            Self::CurrencySymbol => "Currency_Symbol",
            Self::ModifierSymbol => "Modifier_Symbol",
            Self::OtherSymbol => "Other_Symbol",
            Self::Letter => "Letter",
            Self::Mark => "Mark",
            Self::Number => "Number",
            Self::Punctuation => "Punctuation",
            Self::Symbol => "Symbol",
            Self::Separator => "Separator",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<&str> for Category
{
    type Error = PropertiesError;

    /// принимается как сокращение (Lu), так и полное название (Uppercase_Letter)
    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            "L" => Self::Letter,
            "M" => Self::Mark,
            "N" => Self::Number,
            "P" => Self::Punctuation,
            "S" => Self::Symbol,
            "Z" => Self::Separator,
            "C" => Self::Other,
            _ => {
                return Self::ALL
                    .iter()
                    .find(|c| c.long_name() == abbr)
                    .copied()
                    .ok_or(PropertiesError::UnknownPropertyValue)
            }
        })
    }
}

impl TryFrom<u8> for Category
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(PropertiesError::UnknownPropertyValue)
    }
}

impl From<Category> for u8
{
    #[inline]
    fn from(value: Category) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for Category
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbreviation())
    }
}
