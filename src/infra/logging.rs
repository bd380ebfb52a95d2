//! Инициализация структурированного логирования (`tracing`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Поставить fmt-подписчик с фильтром из `RUST_LOG` (по умолчанию `info`).
///
/// Повторный вызов ничего не ломает: второй подписчик просто не ставится.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
