//! Este modulo contiene el generador de archivos de envios. Cada envio se retira
//! en el deposito y se entrega en un punto aleatorio de un cuadrado alrededor del
//! centro de entregas, dentro de una ventana horaria del dia siguiente.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::registro::{RegistroEnvio, ENCABEZADOS_ENVIOS, TIPO_PALLETS};
use crate::aliases::{CantidadPallets, Costo, Grados, Hora, Kilometros, Minutos, Segundos};
use crate::errores::{Error, ErrorGeneracion};
use crate::generators::coordenadas;
use crate::generators::ventana_horaria::{fecha_de_manana, ParametrosVentana, VentanaHoraria};
use crate::punto::PuntoGeo;
use crate::{salida, CANTIDAD_RESUMEN, LATITUD_DEPOSITO, LONGITUD_DEPOSITO};

/// Parametros del generador de envios. Las opciones largas mantienen los nombres
/// en ingles que usan los scripts que consumen estos archivos.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Genera un csv de envios con coordenadas y ventanas horarias aleatorias",
    long_about = None
)]
pub struct GeneradorEnvios {
    /// Ruta del csv a generar
    #[arg(short = 'o', long = "output", default_value = "data/shipments_generated.csv")]
    pub salida: PathBuf,

    /// Cantidad de envios a generar
    #[arg(short = 'n', long = "num-shipments", default_value_t = 20)]
    pub cantidad: usize,

    #[arg(long = "depot-lat", default_value_t = LATITUD_DEPOSITO, allow_negative_numbers = true)]
    pub latitud_deposito: Grados,

    #[arg(long = "depot-lon", default_value_t = LONGITUD_DEPOSITO, allow_negative_numbers = true)]
    pub longitud_deposito: Grados,

    #[arg(long = "delivery-center-lat", default_value_t = 44.4268056, allow_negative_numbers = true)]
    pub latitud_centro: Grados,

    #[arg(long = "delivery-center-lon", default_value_t = 26.0999251, allow_negative_numbers = true)]
    pub longitud_centro: Grados,

    /// Lado, en kilometros, del cuadrado donde caen las entregas
    #[arg(long = "square-size", default_value_t = 20.0)]
    pub lado_km: Kilometros,

    /// Duracion de cada entrega, en segundos
    #[arg(long = "delivery-duration", default_value_t = 600)]
    pub duracion_entrega: Segundos,

    /// Costo por no cumplir el envio
    #[arg(long = "penalty-cost", default_value_t = 200)]
    pub costo_penalidad: Costo,

    /// Costo por hora de llegar antes o despues de la ventana
    #[arg(long = "penalty-per-hour", default_value_t = 1000)]
    pub penalidad_por_hora: Costo,

    #[arg(long = "max-pallets", default_value_t = 10)]
    pub max_pallets: CantidadPallets,

    /// Semilla para que la generacion sea reproducible
    #[arg(long = "seed")]
    pub semilla: Option<u64>,

    /// Hora fija para todas las ventanas (si no se da, se sortea por envio)
    #[arg(long = "pickup-hour")]
    pub hora_fija: Option<Hora>,

    /// Minuto de la hora fija. Las ventanas empiezan igual en el minuto 00
    #[arg(long = "pickup-minute", default_value_t = 0)]
    pub minuto_fijo: u32,

    #[arg(long = "window-start-hour", default_value_t = 6)]
    pub hora_inicio_ventana: Hora,

    #[arg(long = "window-end-hour", default_value_t = 22)]
    pub hora_fin_ventana: Hora,

    /// Duracion de la ventana horaria, en minutos
    #[arg(long = "window-duration", default_value_t = 60)]
    pub duracion_ventana: Minutos,

    /// Filtro de los eventos que se registran por stderr
    #[arg(long = "log-level", default_value = "warn")]
    pub nivel_log: String,
}

impl GeneradorEnvios {
    pub fn deposito(&self) -> PuntoGeo {
        PuntoGeo::new(self.latitud_deposito, self.longitud_deposito)
    }

    pub fn centro_entregas(&self) -> PuntoGeo {
        PuntoGeo::new(self.latitud_centro, self.longitud_centro)
    }

    pub fn parametros_ventana(&self) -> ParametrosVentana {
        ParametrosVentana {
            hora_inicio: self.hora_inicio_ventana,
            hora_fin: self.hora_fin_ventana,
            duracion_minutos: self.duracion_ventana,
            hora_fija: self.hora_fija,
            minuto_fijo: self.minuto_fijo,
        }
    }

    /// Crea el generador de numeros aleatorios, sembrado si se dio una semilla
    pub fn crear_rng(&self) -> StdRng {
        match self.semilla {
            Some(semilla) => StdRng::seed_from_u64(semilla),
            None => StdRng::from_entropy(),
        }
    }

    /// Genera todos los envios con ventanas en la fecha dada. Por cada envio se
    /// sortea, en este orden, el punto de entrega, la ventana y los pallets.
    pub fn generar_registros<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        fecha: NaiveDate,
    ) -> Result<Vec<RegistroEnvio>, ErrorGeneracion> {
        if self.max_pallets == 0 {
            return Err(ErrorGeneracion::MaxPalletsInvalido);
        }

        let deposito = self.deposito();
        let centro = self.centro_entregas();
        let parametros = self.parametros_ventana();
        let mut registros = Vec::with_capacity(self.cantidad);

        for i in 0..self.cantidad {
            let entrega = coordenadas::muestrear(rng, centro, self.lado_km)?;
            let ventana = VentanaHoraria::generar(rng, &parametros, fecha)?;
            let pallets = rng.gen_range(1..=self.max_pallets);

            let registro = self.armar_registro(i + 1, deposito, entrega, &ventana, pallets);
            debug!(envio = %registro.label, entrega = %entrega, pallets, "envio generado");
            registros.push(registro);
        }

        Ok(registros)
    }

    fn armar_registro(
        &self,
        numero: usize,
        deposito: PuntoGeo,
        entrega: PuntoGeo,
        ventana: &VentanaHoraria,
        pallets: CantidadPallets,
    ) -> RegistroEnvio {
        RegistroEnvio {
            label: format!("Order - {}", numero),
            penalty_cost: self.costo_penalidad,
            pickup_arrival_waypoint: deposito,
            pickup_duration: 0,
            pickup_cost: None,
            pickup_start_time: None,
            pickup_soft_start_time: None,
            pickup_end_time: None,
            pickup_soft_end_time: None,
            pickup_cost_per_hour_before_soft_start_time: None,
            pickup_cost_per_hour_after_soft_start_time: None,
            pickup_cost_per_hour_after_soft_end_time: None,
            delivery_arrival_waypoint: entrega,
            delivery_duration: self.duracion_entrega,
            delivery_cost: None,
            delivery_start_time: ventana.inicio_iso(),
            delivery_soft_start_time: ventana.inicio_suave_iso(),
            delivery_end_time: ventana.fin_iso(),
            delivery_soft_end_time: ventana.fin_suave_iso(),
            delivery_cost_per_hour_before_soft_start_time: self.penalidad_por_hora,
            delivery_cost_per_hour_after_soft_end_time: self.penalidad_por_hora,
            load_demand1_type: TIPO_PALLETS,
            load_demand1_value: pallets,
            load_demand2_type: None,
            load_demand2_value: None,
            load_demand3_type: None,
            load_demand3_value: None,
            load_demand4_type: None,
            load_demand4_value: None,
            allowed_vehicle_indices: None,
        }
    }

    /// Genera los envios y los escribe como csv en el destino dado
    pub fn escribir<R: Rng + ?Sized, W: Write>(
        &self,
        rng: &mut R,
        fecha: NaiveDate,
        destino: W,
    ) -> Result<Vec<RegistroEnvio>, Error> {
        let registros = self.generar_registros(rng, fecha)?;
        salida::escribir_registros(destino, &ENCABEZADOS_ENVIOS, &registros)?;
        Ok(registros)
    }

    /// Genera el archivo de envios en la ruta configurada e imprime un resumen
    pub fn ejecutar(&self) -> Result<(), Error> {
        if self.minuto_fijo != 0 {
            warn!(
                minuto = self.minuto_fijo,
                "las ventanas empiezan siempre en el minuto 00, se ignora el minuto fijo"
            );
        }

        let mut rng = self.crear_rng();
        let registros = self.generar_registros(&mut rng, fecha_de_manana())?;
        salida::guardar_registros(&self.salida, &ENCABEZADOS_ENVIOS, &registros)?;

        self.imprimir_resumen(&registros);
        Ok(())
    }

    fn imprimir_resumen(&self, registros: &[RegistroEnvio]) {
        println!("{} Se generaron {} envios", "✓".green(), registros.len());
        println!("{} Guardado en: {}", "✓".green(), self.salida.display());
        println!("\nConfiguracion:");
        println!("  Deposito: ({})", self.deposito());
        println!("  Area cuadrada: {}km", self.lado_km);
        println!(
            "  Duracion de entrega: {}s ({}m)",
            self.duracion_entrega,
            self.duracion_entrega / 60
        );
        println!("  Costo de penalidad: {}", self.costo_penalidad);
        println!("  Penalidad por hora: {}", self.penalidad_por_hora);
        println!("  Maximo de pallets: {}", self.max_pallets);
        println!("  Centro de entregas: ({})", self.centro_entregas());
        println!("\nPrimeros {} registros:", CANTIDAD_RESUMEN);
        for registro in registros.iter().take(CANTIDAD_RESUMEN) {
            println!("  {}", registro);
        }
    }
}
