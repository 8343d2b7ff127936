/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (на 1 больше)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;

/// краткие имена ведущих согласных чамо (Jamo.txt)
const JAMO_L: [&str; HANGUL_L_COUNT as usize] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];

/// краткие имена гласных
const JAMO_V: [&str; HANGUL_V_COUNT as usize] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];

/// краткие имена завершающих согласных, первая - отсутствие согласной
const JAMO_T: [&str; HANGUL_T_COUNT as usize] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// является ли кодпоинт слогом хангыль?
#[inline]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// название слога хангыль, составленное из кратких имен чамо (правило NR1, раздел 4.8 стандарта)
pub fn syllable_name(code: u32) -> Option<String>
{
    let s = code.wrapping_sub(HANGUL_S_BASE);

    if s >= HANGUL_S_COUNT {
        return None;
    }

    let l = (s / HANGUL_N_COUNT) as usize;
    let v = ((s % HANGUL_N_COUNT) / HANGUL_T_COUNT) as usize;
    let t = (s % HANGUL_T_COUNT) as usize;

    Some(format!(
        "HANGUL SYLLABLE {}{}{}",
        JAMO_L[l], JAMO_V[v], JAMO_T[t]
    ))
}
