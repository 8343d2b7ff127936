use criterion::measurement::WallTime;
use criterion::BenchmarkGroup;
use unicode_codepoints::{Registry, Scope};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// настройки времени для группы бенчмарков
pub fn configure(group: &mut BenchmarkGroup<WallTime>)
{
    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));
}

/// каждый n-й кодпоинт кодового пространства, назначенные и нет вперемешку
pub fn codepoints(step: usize) -> Vec<u32>
{
    (0 ..= unicode_codepoints::LAST_CODEPOINT).step_by(step).collect()
}

/// названия каждого n-го назначенного кодпоинта
pub fn names(registry: &Registry, step: usize) -> Vec<String>
{
    registry
        .enumerate(Scope::Global)
        .step_by(step)
        .map(|(info, _)| info.name().to_owned())
        .collect()
}
