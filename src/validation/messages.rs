//! User-facing validation messages.
//!
//! The dashboard is Spanish-only, so every message is rendered in Spanish.

pub const INVALID_EMAIL: &str = "Email no válido";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Las contraseñas no coinciden";

/// Minimum length enforced for `type = "password"` fields
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// "<label> es requerido"
pub fn required(label: &str) -> String {
    format!("{} es requerido", label)
}

/// "<label> debe tener al menos <min> caracteres"
pub fn too_short(label: &str, min: usize) -> String {
    format!("{} debe tener al menos {} caracteres", label, min)
}
