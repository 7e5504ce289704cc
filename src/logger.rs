//! Inicializacion del registro de eventos de los generadores. Los eventos van
//! a stderr, para no mezclarse con el resumen que se imprime por stdout.

use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

use crate::errores::Error;

#[derive(Clone, Copy)]
struct Reloj;

impl FormatTime for Reloj {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let ahora = Local::now();
        write!(w, "{}", ahora.format("%m%dT%H:%M:%S%.3f"))
    }
}

/// Instala el subscriber global con el nivel dado (por ejemplo `warn` o `rutero=debug`)
pub fn init(nivel: &str) -> Result<(), Error> {
    let filtro = EnvFilter::try_new(nivel).map_err(|_| Error::ErrorDeLogger)?;

    tracing_subscriber::fmt()
        .with_timer(Reloj)
        .with_writer(std::io::stderr)
        .with_env_filter(filtro)
        .try_init()
        .map_err(|_| Error::ErrorDeLogger)
}
