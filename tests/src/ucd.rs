use unicode_codepoints::{
    bundled, DatasetError, LoadError, Registry, Scope, UcdSources, Violation,
};

use crate::data::files;

/// данные, прочитанные с диска, совпадают с данными из состава крейта
#[test]
fn ucd_files_on_disk()
{
    let files = files("14.0.0");
    let registry = Registry::load(&files.sources()).unwrap();
    let bundled = bundled().unwrap();

    assert_eq!(registry.unicode_version(), bundled.unicode_version());
    assert_eq!(registry.blocks(), bundled.blocks());
    assert_eq!(registry.categories(), bundled.categories());

    let ours = registry.enumerate(Scope::Global).map(|(info, _)| info.record());
    let theirs = bundled.enumerate(Scope::Global).map(|(info, _)| info.record());

    assert!(ours.eq(theirs));
}

/// версия из имени папки проверяется
#[test]
fn ucd_invalid_version()
{
    let files = files("14.0.0");
    let sources = UcdSources {
        unicode_version: "14.0.0-draft",
        ..files.sources()
    };

    match Registry::load(&sources) {
        Err(LoadError::Invariants(error)) => assert_eq!(
            error.violations(),
            [Violation::InvalidUnicodeVersion {
                version: "14.0.0-draft".to_owned()
            }]
        ),
        other => panic!("{:?}", other.map(|r| r.len())),
    }
}

/// пересекающиеся блоки и блок с тем же кодовым именем
#[test]
fn ucd_broken_blocks()
{
    let files = files("14.0.0");
    let blocks = files
        .blocks
        .replace("0080..00FF; Latin-1 Supplement", "0070..00FF; Latin-1 Supplement")
        .replace(
            "2F00..2FDF; Kangxi Radicals",
            "2F00..2FDF; Kangxi Radicals\n2FE0..2FEF; Cyrillic Supple-ment",
        );

    let sources = UcdSources {
        blocks: &blocks,
        ..files.sources()
    };

    let error = match Registry::load(&sources) {
        Err(LoadError::Invariants(error)) => error,
        other => panic!("{:?}", other.map(|r| r.len())),
    };

    let violations = error.violations();

    // новый блок лежит в промежутке между блоками и ни с чем не пересекается
    let overlaps: Vec<&Violation> = violations
        .iter()
        .filter(|v| {
            matches!(
                v,
                Violation::OverlappingBlocks { .. } | Violation::BlocksOutOfOrder { .. }
            )
        })
        .collect();

    assert_eq!(
        overlaps,
        [&Violation::OverlappingBlocks {
            previous: "Basic_Latin".to_owned(),
            codename: "Latin1_Supplement".to_owned()
        }]
    );
    assert!(violations.contains(&Violation::DuplicateCodename {
        codename: "Cyrillic_Supplement".to_owned()
    }));

    // U+0070 ..= U+007F отошли к Latin-1 Supplement, в представлении Basic Latin их нет
    assert!(violations.contains(&Violation::BlockViewMismatch {
        codename: "Basic_Latin".to_owned()
    }));
    assert!(violations.contains(&Violation::BlockFieldMismatch {
        codename: "Basic_Latin".to_owned(),
        id: 0x0070
    }));
}

/// неизвестная категория - ошибка разбора, до проверки инвариантов дело не доходит
#[test]
fn ucd_parse_error()
{
    let files = files("14.0.0");
    let unicode_data = files.unicode_data.replacen(";Lu;", ";Lx;", 1);

    let sources = UcdSources {
        unicode_data: &unicode_data,
        ..files.sources()
    };

    match Registry::load(&sources) {
        Err(LoadError::Dataset(DatasetError::UnknownPropertyValue { file, value, .. })) => {
            assert_eq!(file, "UnicodeData.txt");
            assert_eq!(value, "Lx");
        }
        other => panic!("{:?}", other.map(|r| r.len())),
    }
}
