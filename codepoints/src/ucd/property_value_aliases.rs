use super::data_lines;
use crate::properties::{Category, CategoryTree};
use crate::DatasetError;

const FILE: &str = "PropertyValueAliases.txt";

/// разбор раздела General_Category из PropertyValueAliases.txt
///
/// состав групп указан в комментарии в конце строки:
///
/// gc ; L  ; Letter  # Ll | Lm | Lo | Lt | Lu
///
/// LC (Cased_Letter) пересекается с L, поэтому в дерево не попадает
pub fn parse(text: &str) -> Result<CategoryTree, DatasetError>
{
    let mut groups = vec![];

    for (line, data) in data_lines(text) {
        let (data, comment) = match data.split_once('#') {
            Some((data, comment)) => (data, Some(comment)),
            None => (data, None),
        };

        let props: Vec<&str> = data.split(';').map(str::trim).collect();

        if props.len() < 3 {
            return Err(DatasetError::FieldCount { file: FILE, line });
        }

        if props[0] != "gc" || props[1] == "LC" {
            continue;
        }

        let group = category(props[1], line)?;

        let members = match comment {
            Some(comment) => comment
                .split('|')
                .map(|member| category(member.trim(), line))
                .collect::<Result<Vec<_>, _>>()?,
            None => continue,
        };

        groups.push((group, members));
    }

    Ok(CategoryTree::new(groups))
}

fn category(value: &str, line: usize) -> Result<Category, DatasetError>
{
    Category::try_from(value).map_err(|_| DatasetError::UnknownPropertyValue {
        file: FILE,
        line,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn groups()
    {
        let tree = parse(
            "gc ; C  ; Other         # Cc | Cf | Cn | Co | Cs\n\
             gc ; Cc ; Control       ; cntrl\n\
             gc ; L  ; Letter        # Ll | Lm | Lo | Lt | Lu\n\
             gc ; LC ; Cased_Letter  # Ll | Lt | Lu\n\
             sc ; Latn ; Latin\n",
        )
        .unwrap();

        assert_eq!(tree.children(Category::Other).len(), 5);
        assert_eq!(tree.parent(Category::Surrogate), Some(Category::Other));
        assert_eq!(tree.parent(Category::TitlecaseLetter), Some(Category::Letter));
        assert!(tree.is_leaf(Category::Control));
        assert_eq!(tree.edges().count(), 10);
    }

    #[test]
    fn unknown_member()
    {
        assert_eq!(
            parse("gc ; L ; Letter # Ll | Lx\n"),
            Err(DatasetError::UnknownPropertyValue {
                file: FILE,
                line: 1,
                value: "Lx".to_owned()
            })
        );
        assert_eq!(
            parse("gc ; L\n"),
            Err(DatasetError::FieldCount { file: FILE, line: 1 })
        );
    }
}
