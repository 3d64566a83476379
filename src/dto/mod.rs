//! DTOs de la API
//!
//! Este módulo contiene los data transfer objects del protocolo HTTP,
//! separados de los modelos del catálogo.

pub mod catalog_dto;
pub mod quote_dto;
