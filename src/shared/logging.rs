//! Logger-Konfiguration für den Editor.

/// Standard-Level, falls die Umgebungsvariable nicht gesetzt ist.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Baut den env_logger aus der angegebenen Umgebungsvariable.
///
/// Ein gesetzter Filter (z.B. `RUST_LOG=debug`) ersetzt das Standard-Level vollständig.
pub fn logger_builder(filter_var: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or(filter_var, DEFAULT_LOG_FILTER),
    )
}

/// Initialisiert das globale Logging über `RUST_LOG`.
pub fn init() {
    logger_builder(env_logger::DEFAULT_FILTER_ENV).init();
}
