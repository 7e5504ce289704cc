//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion de los generadores

use std::io;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeGeneracion(ErrorGeneracion),
    ErrorDeEscritura(ErrorEscritura),
    ErrorDeLogger,
}

impl From<ErrorGeneracion> for Error {
    fn from(err: ErrorGeneracion) -> Self {
        Error::ErrorDeGeneracion(err)
    }
}

impl From<ErrorEscritura> for Error {
    fn from(err: ErrorEscritura) -> Self {
        Error::ErrorDeEscritura(err)
    }
}

/// Enumerativo que define los errores por parametros invalidos
/// al generar coordenadas, ventanas horarias o cargas
#[derive(Debug, PartialEq)]
pub enum ErrorGeneracion {
    LadoCuadradoInvalido,
    CentroInvalido,
    LatitudPolar,
    RangoHorarioInvalido,
    HoraFijaInvalida,
    DuracionInvalida,
    MaxPalletsInvalido,
}

/// Enumerativo que define los errores que pueden darse al escribir
/// el archivo de salida. El error de archivo se conserva sin modificar
#[derive(Debug)]
pub enum ErrorEscritura {
    Archivo(io::Error),
    Csv(csv::Error),
}

impl From<io::Error> for ErrorEscritura {
    fn from(err: io::Error) -> Self {
        ErrorEscritura::Archivo(err)
    }
}

impl From<csv::Error> for ErrorEscritura {
    fn from(err: csv::Error) -> Self {
        ErrorEscritura::Csv(err)
    }
}
