//! Este modulo escribe los registros generados en formato csv. El encabezado se
//! escribe siempre, aunque no haya registros, y los campos con comas (como los
//! waypoints) quedan entre comillas.

use std::{fs::File, io::Write, path::Path};

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::info;

use crate::errores::ErrorEscritura;

/// Escribe el encabezado y todos los registros en el destino dado
pub fn escribir_registros<W: Write, T: Serialize>(
    destino: W,
    encabezados: &[&str],
    registros: &[T],
) -> Result<(), ErrorEscritura> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(destino);

    writer.write_record(encabezados)?;
    for registro in registros {
        writer.serialize(registro)?;
    }
    writer.flush()?;

    Ok(())
}

/// Crea (o pisa) el archivo en la ruta dada y escribe los registros. No se crean
/// directorios intermedios: si no existen, se devuelve el error del sistema de archivos.
pub fn guardar_registros<P: AsRef<Path>, T: Serialize>(
    ruta: P,
    encabezados: &[&str],
    registros: &[T],
) -> Result<(), ErrorEscritura> {
    let archivo = File::create(ruta.as_ref())?;
    escribir_registros(archivo, encabezados, registros)?;
    info!(
        ruta = %ruta.as_ref().display(),
        registros = registros.len(),
        "archivo csv escrito"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Serialize)]
    struct Fila {
        nombre: &'static str,
        lugar: &'static str,
        vacio: Option<u32>,
    }

    #[test]
    fn test_encabezado_sin_registros() {
        let mut buf = Vec::new();
        let filas: Vec<Fila> = Vec::new();
        escribir_registros(&mut buf, &["nombre", "lugar", "vacio"], &filas).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "nombre,lugar,vacio\r\n");
    }

    #[test]
    fn test_comillas_y_campos_vacios() {
        let mut buf = Vec::new();
        let filas = vec![Fila {
            nombre: "Order - 1",
            lugar: "44.5, 26.1",
            vacio: None,
        }];
        escribir_registros(&mut buf, &["nombre", "lugar", "vacio"], &filas).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "nombre,lugar,vacio\r\nOrder - 1,\"44.5, 26.1\",\r\n"
        );
    }

    #[test]
    fn test_directorio_inexistente() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("no_existe").join("salida.csv");
        let filas: Vec<Fila> = Vec::new();

        match guardar_registros(&ruta, &["nombre"], &filas) {
            Err(ErrorEscritura::Archivo(err)) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
            otro => panic!("se esperaba un error de archivo, se obtuvo {:?}", otro),
        }
    }
}
