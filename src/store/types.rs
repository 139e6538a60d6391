use serde::Serialize;
use sqlx::FromRow;

/// User row in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 digest, not exposed in JSON
    pub phone: i64,
}

/// Fields for a user insert. `password` must already be a digest.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: i64,
}

/// Recipe row in the database. Ingredients and preparation steps are stored
/// as opaque delimited text, not structured lists.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub ingredientes: String,
    pub pasos_preparacion: String,
    pub autor_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub titulo: String,
    pub descripcion: String,
    pub ingredientes: String,
    pub pasos_preparacion: String,
    pub autor_id: i64,
}

/// Partial recipe update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub ingredientes: Option<String>,
    pub pasos_preparacion: Option<String>,
}
