use unicode_codepoints::{bundled, ucd::hangul, Scope};

/// сколько кодпоинтов в каждом блоке? какие блоки пусты?
fn main()
{
    let registry = bundled().unwrap();

    let mut empty = vec![];

    for block in registry.blocks() {
        let count = registry.enumerate(Scope::Block(block)).len();

        if count == 0 {
            empty.push(block.codename());
            continue;
        }

        println!("{:<45} {:>6}  {}", block.to_string(), count, block.plane());
    }

    let hangul = registry
        .enumerate(Scope::Global)
        .filter(|(info, _)| hangul::is_hangul_syllable(info.id()))
        .count();

    println!(
        "\nблоков: {}, кодпоинтов: {}, из них слогов хангыль: {}",
        registry.blocks().len(),
        registry.len(),
        hangul
    );
    println!("блоки без кодпоинтов: {}\n", empty.join(", "));
}

/*

результат (окончание):

блоков: 320, кодпоинтов: 144762, из них слогов хангыль: 11172
блоки без кодпоинтов: High_Surrogates, High_Private_Use_Surrogates, Low_Surrogates, Private_Use_Area, Supplementary_Private_Use_AreaA, Supplementary_Private_Use_AreaB

*/
