use icu_properties::maps;
use icu_properties::GeneralCategory as Icu;
use unicode_codepoints::{bundled, Category, Scope};

/// сравниваем категории с данными ICU
#[test]
fn icu_general_category()
{
    let registry = bundled().unwrap();
    let icu = maps::general_category();

    let mut compared = 0;

    for (info, _) in registry.enumerate(Scope::Global) {
        let expected = icu.get32(info.id());

        // в более новых версиях Unicode категория могла быть уточнена, но не снята
        assert_ne!(expected, Icu::Unassigned, "{}", info);

        assert_eq!(
            Some(info.category()),
            category(expected),
            "{} - {:?}",
            info,
            expected
        );

        compared += 1;
    }

    assert_eq!(compared, registry.len());
}

/// категория ICU в терминах реестра
fn category(value: Icu) -> Option<Category>
{
    Some(match value {
        Icu::Unassigned => Category::Unassigned,
        Icu::UppercaseLetter => Category::UppercaseLetter,
        Icu::LowercaseLetter => Category::LowercaseLetter,
        Icu::TitlecaseLetter => Category::TitlecaseLetter,
        Icu::ModifierLetter => Category::ModifierLetter,
        Icu::OtherLetter => Category::OtherLetter,
        Icu::NonspacingMark => Category::NonspacingMark,
        Icu::SpacingMark => Category::SpacingMark,
        Icu::EnclosingMark => Category::EnclosingMark,
        Icu::DecimalNumber => Category::DecimalNumber,
        Icu::LetterNumber => Category::LetterNumber,
        Icu::OtherNumber => Category::OtherNumber,
        Icu::SpaceSeparator => Category::SpaceSeparator,
        Icu::LineSeparator => Category::LineSeparator,
        Icu::ParagraphSeparator => Category::ParagraphSeparator,
        Icu::Control => Category::Control,
        Icu::Format => Category::Format,
        Icu::Surrogate => Category::Surrogate,
        Icu::PrivateUse => Category::PrivateUse,
        Icu::ConnectorPunctuation => Category::ConnectorPunctuation,
        Icu::DashPunctuation => Category::DashPunctuation,
        Icu::OpenPunctuation => Category::OpenPunctuation,
        Icu::ClosePunctuation => Category::ClosePunctuation,
        Icu::InitialPunctuation => Category::InitialPunctuation,
        Icu::FinalPunctuation => Category::FinalPunctuation,
        Icu::OtherPunctuation => Category::OtherPunctuation,
        Icu::MathSymbol => Category::MathSymbol,
        Icu::CurrencySymbol => Category::CurrencySymbol,
        Icu::ModifierSymbol => Category::ModifierSymbol,
        Icu::OtherSymbol => Category::OtherSymbol,
        #[allow(unreachable_patterns)]
        _ => return None,
    })
}

/// суррогаты и символы для приватного использования в реестр не попадают
#[test]
fn icu_skipped_ranges()
{
    let registry = bundled().unwrap();
    let icu = maps::general_category();

    for code in [0xD800, 0xDBFF, 0xDC00, 0xDFFF, 0xE000, 0xF8FF, 0xF0000, 0x10FFFD] {
        assert!(matches!(icu.get32(code), Icu::Surrogate | Icu::PrivateUse));
        assert!(registry.info_for(code, Scope::Global).is_err());
    }
}
