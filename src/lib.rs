//! Car Share Pricing Service
//!
//! Motor de cotización de costos de car sharing: dado un tarifario por
//! niveles (hora/día/semana), una política de km gratis y una duración y
//! distancia pedidas, calcula la combinación de niveles más barata y el
//! desglose de precio completo. El servidor HTTP es una capa fina sobre
//! el motor puro en `services`.

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
