//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de entradas
//! numéricas de las requests de cotización. Se enganchan a los DTOs
//! vía `#[validate(custom = "...")]`.

use validator::ValidationError;

/// Validar que un número sea finito y no negativo
pub fn validate_finite_non_negative(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        let mut error = ValidationError::new("finite_non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío (espacios no cuentan)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_non_negative() {
        assert!(validate_finite_non_negative(0.0).is_ok());
        assert!(validate_finite_non_negative(12.5).is_ok());
        assert!(validate_finite_non_negative(-1.0).is_err());
        assert!(validate_finite_non_negative(f64::NAN).is_err());
        assert!(validate_finite_non_negative(f64::INFINITY).is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("gocar-golocal").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
