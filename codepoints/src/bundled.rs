use crate::{LoadError, Registry, UcdSources};

lazy_static! {
    /// реестр над данными из состава крейта, загружается при первом обращении
    static ref BUNDLED: Result<Registry, LoadError> = Registry::load(&UcdSources::bundled());
}

/// общий для процесса реестр над данными из состава крейта
///
/// загрузка и проверка выполняются один раз, даже при одновременном первом обращении
/// из нескольких потоков. если данные не прошли проверку, каждое обращение возвращает ту же ошибку
#[inline]
pub fn bundled() -> Result<&'static Registry, &'static LoadError>
{
    BUNDLED.as_ref()
}
