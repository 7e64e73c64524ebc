//! Utilidades de validación
//!
//! Conversión tolerante de parámetros de query: un valor que no se puede
//! interpretar vuelve al valor por defecto en lugar de producir un error.

/// Parsear un f64 finito, o `default`
pub fn parse_f64_or(value: Option<&str>, default: f64) -> f64 {
    parse_finite(value).unwrap_or(default)
}

/// Parsear un f64 finito
pub fn parse_finite(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Parsear un porcentaje entero limitado a 0..=100.
///
/// Acepta "50" y también "50.7" (se trunca). Negativos cuentan como 0.
pub fn parse_percent_or(value: Option<&str>, default: u8) -> u8 {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };

    let parsed = raw
        .parse::<i64>()
        .ok()
        .or_else(|| parse_finite(Some(raw)).map(|f| f.trunc() as i64));

    match parsed {
        Some(v) => v.clamp(0, 100) as u8,
        None => default,
    }
}

/// Separar una lista por comas, en minúsculas y sin entradas vacías.
///
/// Devuelve None si no queda ningún elemento.
pub fn parse_csv_list(value: Option<&str>) -> Option<Vec<String>> {
    let items: Vec<String> = value?
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
