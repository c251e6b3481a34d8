// [apps/vanity-search/src/main.rs]
//!
//! =================================================================
//! APARATO: CLI DE BÚSQUEDA VANITY (V1.0)
//! CLASIFICACIÓN: APLICACIÓN (ESTRATO L4)
//! RESPONSABILIDAD: SUPERFICIE DE LÍNEA DE COMANDOS
//! =================================================================
//!
//! Envuelve [`vanguard_domain_search::VanitySearch`]: parsea los
//! directivas de búsqueda, arranca el conjunto de trabajadores, escucha
//! Ctrl-C para una cancelación cooperativa, y reporta las coincidencias a
//! medida que cada trabajador las persiste por su cuenta en `--out-dir`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vanguard_domain_search::{SearchError, SearchParams, VanitySearch};

/// Directivas de una búsqueda de claves Ed25519 vanity.
#[derive(Parser, Debug)]
#[command(name = "vanity-search", version, about = "Búsqueda de claves públicas Solana con prefijo/sufijo Base58")]
struct SearchDirectives {
    /// Prefijo Base58 requerido en la clave pública.
    #[arg(long = "begins-with", env = "VANITY_BEGINS_WITH")]
    begins_with: Option<String>,

    /// Sufijo Base58 requerido en la clave pública.
    #[arg(long = "ends-with", env = "VANITY_ENDS_WITH")]
    ends_with: Option<String>,

    /// Si la comparación distingue mayúsculas de minúsculas.
    #[arg(long = "case-sensitive", env = "VANITY_CASE_SENSITIVE")]
    case_sensitive: bool,

    /// Cuántas coincidencias encontrar antes de que los trabajadores se
    /// detengan por sí mismos.
    #[arg(long = "count", env = "VANITY_COUNT", default_value_t = 1)]
    count: u64,

    /// Número de hilos trabajadores. Por defecto, el número de CPUs lógicas.
    #[arg(long = "threads", env = "VANITY_THREADS")]
    threads: Option<usize>,

    /// Si se debe autoverificar cada candidato firmando y validando un
    /// mensaje fijo antes de aceptarlo.
    #[arg(long = "sig-verify", env = "VANITY_SIG_VERIFY")]
    sig_verify: bool,

    /// Directorio donde cada coincidencia se persiste como su propio
    /// archivo `<basePublicKey58>.json`.
    #[arg(long = "out-dir", env = "VANITY_OUT_DIR", default_value = "./vanity-keys")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directives = SearchDirectives::parse();
    vanguard_shared_telemetry::init_tracing("vanity-search");

    let params = SearchParams {
        begins_with: directives.begins_with.clone(),
        ends_with: directives.ends_with.clone(),
        case_sensitive: directives.case_sensitive,
        thread_count: directives.threads,
        sig_verify: directives.sig_verify,
        find_keys: directives.count,
        key_path: directives.out_dir.clone(),
        rng_factory: None,
    };

    let search = VanitySearch::launch(params).context("failed to launch vanity search")?;
    let shared_state = search.shared_state();

    let signal_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("🛑 señal de interrupción recibida, deteniendo búsqueda");
            signal_state.request_stop();
        }
    });

    let search_task = tokio::task::spawn_blocking(move || {
        let mut matches = Vec::new();
        loop {
            match search.take() {
                Ok(found) => matches.push(found),
                Err(SearchError::Interrupted) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(matches)
    });

    let matches = match search_task.await.context("search worker pool panicked")? {
        Ok(matches) => matches,
        Err(e) => return Err(e.into()),
    };

    for found in &matches {
        if found.persisted {
            println!("{}", found.public_key_base58);
        } else {
            tracing::warn!(public_key = %found.public_key_base58, "⚠️ coincidencia entregada pero no persistida en disco");
            println!("{} (not persisted)", found.public_key_base58);
        }
    }
    tracing::info!(path = %directives.out_dir.display(), count = matches.len(), "💠 búsqueda completa");

    Ok(())
}
