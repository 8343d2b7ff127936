use std::collections::HashMap;

use unicode_codepoints::{bundled, Category, Scope};

/// как кодпоинты распределены по категориям и группам категорий?
fn main()
{
    let registry = bundled().unwrap();
    let categories = registry.categories();

    let mut counts: HashMap<Category, usize> = HashMap::new();

    for (info, _) in registry.enumerate(Scope::Global) {
        *counts.entry(info.category()).or_default() += 1;
    }

    for group in categories.roots() {
        let total: usize = categories
            .children(group)
            .iter()
            .map(|c| counts.get(c).copied().unwrap_or_default())
            .sum();

        println!("{} ({}): {}", group, group.long_name(), total);

        for child in categories.children(group) {
            if let Some(count) = counts.get(child) {
                println!("    {} {}", child, count);
            }
        }
    }
}

/*

результат:

L (Letter): 131756
    Ll 2227
    Lm 334
    Lo 127333
    Lt 31
    Lu 1831
M (Mark): 2408
    Mc 445
    Me 13
    Mn 1950
N (Number): 1791
    Nd 660
    Nl 236
    No 895
P (Punctuation): 819
    Pc 10
    Pd 26
    Pe 77
    Pf 10
    Pi 12
    Po 605
    Ps 79
S (Symbol): 7741
    Sc 63
    Sk 125
    Sm 948
    So 6605
Z (Separator): 19
    Zl 1
    Zp 1
    Zs 17
C (Other): 228
    Cc 65
    Cf 163

*/
