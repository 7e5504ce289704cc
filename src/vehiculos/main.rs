//! Genera un archivo csv de vehiculos identicos, todos saliendo y volviendo
//! al deposito. Ver `vehiculos --help` para las opciones disponibles.

use clap::Parser;
use rutero::errores::Error;
use rutero::logger;
use rutero::vehiculos::generador::GeneradorVehiculos;

fn main() -> Result<(), Error> {
    let generador = GeneradorVehiculos::parse();
    logger::init(&generador.nivel_log)?;
    generador.ejecutar()
}
