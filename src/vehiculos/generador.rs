//! Este modulo contiene el generador de archivos de vehiculos. Todos los vehiculos
//! son iguales: manejan, salen y vuelven al deposito, no tienen costos y estan
//! disponibles todo el dia.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::debug;

use super::registro::{
    Booleano, RegistroVehiculo, ENCABEZADOS_VEHICULOS, MODO_MANEJO, POLITICA_DESCARGA,
};
use crate::aliases::{CantidadPallets, Grados};
use crate::envios::registro::TIPO_PALLETS;
use crate::errores::Error;
use crate::punto::PuntoGeo;
use crate::{salida, CANTIDAD_RESUMEN, LATITUD_DEPOSITO, LONGITUD_DEPOSITO};

/// Parametros del generador de vehiculos
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Genera un csv de vehiculos con una configuracion simple",
    long_about = None
)]
pub struct GeneradorVehiculos {
    /// Ruta del csv a generar
    #[arg(short = 'o', long = "output", default_value = "data/vehicles_generated.csv")]
    pub salida: PathBuf,

    /// Cantidad de vehiculos a generar
    #[arg(short = 'n', long = "num-vehicles", default_value_t = 5)]
    pub cantidad: usize,

    #[arg(long = "depot-lat", default_value_t = LATITUD_DEPOSITO, allow_negative_numbers = true)]
    pub latitud_deposito: Grados,

    #[arg(long = "depot-lon", default_value_t = LONGITUD_DEPOSITO, allow_negative_numbers = true)]
    pub longitud_deposito: Grados,

    /// Capacidad de cada vehiculo, en pallets
    #[arg(long = "capacity-pallets", default_value_t = 100)]
    pub capacidad_pallets: CantidadPallets,

    /// Usar el vehiculo aunque su ruta quede vacia
    #[arg(long = "use-if-empty", default_value_t = false)]
    pub usar_si_vacio: bool,

    /// Filtro de los eventos que se registran por stderr
    #[arg(long = "log-level", default_value = "warn")]
    pub nivel_log: String,
}

impl GeneradorVehiculos {
    pub fn deposito(&self) -> PuntoGeo {
        PuntoGeo::new(self.latitud_deposito, self.longitud_deposito)
    }

    /// Arma las filas de todos los vehiculos
    pub fn generar_registros(&self) -> Vec<RegistroVehiculo> {
        let deposito = self.deposito();

        (0..self.cantidad)
            .map(|i| {
                let registro = self.armar_registro(i + 1, deposito);
                debug!(vehiculo = %registro.label, "vehiculo generado");
                registro
            })
            .collect()
    }

    fn armar_registro(&self, numero: usize, deposito: PuntoGeo) -> RegistroVehiculo {
        RegistroVehiculo {
            label: format!("Vehicle - {}", numero),
            travel_mode: MODO_MANEJO,
            start_waypoint: deposito,
            end_waypoint: deposito,
            unloading_policy: POLITICA_DESCARGA,
            cost_per_hour: 0,
            cost_per_traveled_hour: 0,
            cost_per_kilometer: 0,
            fixed_cost: 0,
            used_if_route_is_empty: Booleano(self.usar_si_vacio),
            travel_duration_multiple: 1,
            start_time_window_cost_per_hour_before_soft_start_time: None,
            start_time_window_cost_per_hour_after_soft_end_time: None,
            start_time_window_start_time: None,
            start_time_window_soft_start_time: None,
            start_time_window_end_time: None,
            start_time_window_soft_end_time: None,
            end_time_window_cost_per_hour_before_soft_start_time: None,
            end_time_window_cost_per_hour_after_soft_end_time: None,
            end_time_window_start_time: None,
            end_time_window_soft_start_time: None,
            end_time_window_end_time: None,
            end_time_window_soft_end_time: None,
            load_limit1_type: TIPO_PALLETS,
            load_limit1_value: self.capacidad_pallets,
            load_limit2_type: None,
            load_limit2_value: None,
            load_limit3_type: None,
            load_limit3_value: None,
            load_limit4_type: None,
            load_limit4_value: None,
        }
    }

    /// Genera los vehiculos y los escribe como csv en el destino dado
    pub fn escribir<W: Write>(&self, destino: W) -> Result<Vec<RegistroVehiculo>, Error> {
        let registros = self.generar_registros();
        salida::escribir_registros(destino, &ENCABEZADOS_VEHICULOS, &registros)?;
        Ok(registros)
    }

    /// Genera el archivo de vehiculos en la ruta configurada e imprime un resumen
    pub fn ejecutar(&self) -> Result<(), Error> {
        let registros = self.generar_registros();
        salida::guardar_registros(&self.salida, &ENCABEZADOS_VEHICULOS, &registros)?;

        self.imprimir_resumen(&registros);
        Ok(())
    }

    fn imprimir_resumen(&self, registros: &[RegistroVehiculo]) {
        println!("{} Se generaron {} vehiculos", "✓".green(), registros.len());
        println!("{} Guardado en: {}", "✓".green(), self.salida.display());
        println!("\nConfiguracion:");
        println!("  Deposito: ({})", self.deposito());
        println!("  Modo de viaje: {}", MODO_MANEJO);
        println!("  Costos: $0 (todos en cero)");
        println!("  Capacidad por vehiculo:");
        println!("    - Pallets: {}", self.capacidad_pallets);
        println!("  Peso: ilimitado");
        println!("  Restricciones horarias: ninguna (disponible 24/7)");
        println!(
            "  Usar si la ruta esta vacia: {}",
            Booleano(self.usar_si_vacio).to_string().to_lowercase()
        );
        println!("\nPrimeros {} vehiculos:", CANTIDAD_RESUMEN);
        for registro in registros.iter().take(CANTIDAD_RESUMEN) {
            println!("  {}", registro);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    fn generador(args: &[&str]) -> GeneradorVehiculos {
        let mut todos = vec!["vehiculos"];
        todos.extend_from_slice(args);
        GeneradorVehiculos::try_parse_from(todos).unwrap()
    }

    #[test]
    fn test_valores_por_defecto() {
        let generador = generador(&[]);
        assert_eq!(generador.salida, PathBuf::from("data/vehicles_generated.csv"));
        assert_eq!(generador.cantidad, 5);
        assert_eq!(generador.deposito(), PuntoGeo::new(44.5279615, 26.1798147));
        assert_eq!(generador.capacidad_pallets, 100);
        assert!(!generador.usar_si_vacio);
    }

    #[test]
    fn test_contenido_de_un_vehiculo() {
        let generador = generador(&["-n", "3", "--capacity-pallets", "33", "--use-if-empty"]);
        let registros = generador.generar_registros();

        assert_eq!(registros.len(), 3);
        for (i, registro) in registros.iter().enumerate() {
            assert_eq!(registro.label, format!("Vehicle - {}", i + 1));
            assert_eq!(registro.travel_mode, "DRIVING");
            assert_eq!(registro.start_waypoint, generador.deposito());
            assert_eq!(registro.end_waypoint, generador.deposito());
            assert_eq!(registro.used_if_route_is_empty, Booleano(true));
            assert_eq!(registro.load_limit1_value, 33);
        }
    }

    #[test]
    fn test_fila_csv() {
        let generador = generador(&["-n", "1"]);
        let mut buf = Vec::new();
        generador.escribir(&mut buf).unwrap();
        let texto = String::from_utf8(buf).unwrap();
        let mut lineas = texto.lines();

        assert_eq!(lineas.next().unwrap(), ENCABEZADOS_VEHICULOS.join(","));
        assert_eq!(
            lineas.next().unwrap(),
            "Vehicle - 1,DRIVING,\"44.5279615, 26.1798147\",\"44.5279615, 26.1798147\",\
             UNLOADING_POLICY_UNSPECIFIED,0,0,0,0,FALSE,1,,,,,,,,,,,,,pallets,100,,,,,,"
        );
        assert_eq!(lineas.next(), None);
    }

    #[test]
    fn test_columnas_por_fila() {
        let generador = generador(&["-n", "7"]);
        let mut buf = Vec::new();
        generador.escribir(&mut buf).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let filas: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(filas.len(), 7);
        assert!(filas.iter().all(|fila| fila.len() == ENCABEZADOS_VEHICULOS.len()));
    }

    #[test]
    fn test_encabezados_coinciden_con_los_campos() {
        let generador = generador(&["-n", "1"]);
        let registros = generador.generar_registros();

        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.serialize(&registros[0]).unwrap();
            writer.flush().unwrap();
        }
        let texto = String::from_utf8(buf).unwrap();

        assert_eq!(texto.lines().next().unwrap(), ENCABEZADOS_VEHICULOS.join(","));
    }

    #[test]
    fn test_ejecutar_escribe_el_archivo() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("vehiculos.csv");
        let generador = generador(&["-o", ruta.to_str().unwrap(), "-n", "4"]);

        assert!(generador.ejecutar().is_ok());
        let contenido = fs::read_to_string(&ruta).unwrap();
        assert_eq!(contenido.lines().count(), 5);
    }
}
