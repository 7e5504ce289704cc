//! Genera un archivo csv de envios con puntos de entrega y ventanas horarias
//! aleatorias. Ver `envios --help` para las opciones disponibles.

use clap::Parser;
use rutero::envios::generador::GeneradorEnvios;
use rutero::errores::Error;
use rutero::logger;

fn main() -> Result<(), Error> {
    let generador = GeneradorEnvios::parse();
    logger::init(&generador.nivel_log)?;
    generador.ejecutar()
}
