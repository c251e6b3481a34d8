// [libs/shared/telemetry/src/lib.rs]
//!
//! =================================================================
//! APARATO: INICIALIZACIÓN DE TELEMETRÍA (V1.0)
//! CLASIFICACIÓN: COMPARTIDO (ESTRATO L3)
//! RESPONSABILIDAD: CONSTRUCCIÓN DEL SUSCRIPTOR DE TRAZAS
//! =================================================================
//!
//! Construye el suscriptor de `tracing` para un binario de este monorepo:
//! salida compacta y legible en compilaciones de depuración, JSON
//! aplanado en compilaciones de lanzamiento, ambas gobernadas por
//! `RUST_LOG` vía [`tracing_subscriber::EnvFilter`].
//!
//! A diferencia del aparato de telemetría original del que este se
//! desprende, aquí no se instala un gancho de pánico: ese mecanismo
//! existía para sobrevivir a la terminación abrupta de hosts efímeros en
//! un enjambre distribuido, y no tiene contraparte en un binario de un
//! solo proceso.

use tracing_subscriber::EnvFilter;

/// Inicializa el suscriptor global de trazas para `service_name`. Seguro
/// de llamar una sola vez por proceso; llamadas subsecuentes son
/// ignoradas silenciosamente por `tracing_subscriber::fmt`'s `try_init`.
pub fn init_tracing(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if cfg!(debug_assertions) {
        builder.compact().try_init()
    } else {
        builder.json().flatten_event(true).try_init()
    };

    if result.is_err() {
        tracing::debug!(service_name, "el suscriptor de trazas ya estaba inicializado");
    }
}
