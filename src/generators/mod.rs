//! Generadores aleatorios que usan los dos programas: coordenadas dentro de un
//! cuadrado y ventanas horarias para el dia siguiente

pub mod coordenadas;
pub mod ventana_horaria;
