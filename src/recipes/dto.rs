use serde::{Deserialize, Serialize};

use crate::store::{NewRecipe, RecipePatch};

/// Body for recipe creation. Missing text fields fall back to the empty
/// string; a missing author falls back to user id 1. The author id is stored
/// as given, without checking that the user exists.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub ingredientes: String,
    #[serde(default)]
    pub pasos_preparacion: String,
    #[serde(default = "default_autor_id")]
    pub autor_id: i64,
}

fn default_autor_id() -> i64 {
    1
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(req: CreateRecipeRequest) -> Self {
        Self {
            titulo: req.titulo,
            descripcion: req.descripcion,
            ingredientes: req.ingredientes,
            pasos_preparacion: req.pasos_preparacion,
            autor_id: req.autor_id,
        }
    }
}

/// Body for partial update. Absent fields keep their stored values; the
/// author is never rewritten.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecipeRequest {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub ingredientes: Option<String>,
    pub pasos_preparacion: Option<String>,
}

impl From<UpdateRecipeRequest> for RecipePatch {
    fn from(req: UpdateRecipeRequest) -> Self {
        Self {
            titulo: req.titulo,
            descripcion: req.descripcion,
            ingredientes: req.ingredientes,
            pasos_preparacion: req.pasos_preparacion,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub mensaje: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_missing_fields() {
        let req: CreateRecipeRequest = serde_json::from_str(r#"{"titulo": "X"}"#).unwrap();
        assert_eq!(req.titulo, "X");
        assert_eq!(req.descripcion, "");
        assert_eq!(req.ingredientes, "");
        assert_eq!(req.pasos_preparacion, "");
        assert_eq!(req.autor_id, 1);
    }

    #[test]
    fn create_request_keeps_supplied_author() {
        let req: CreateRecipeRequest =
            serde_json::from_str(r#"{"titulo": "X", "autor_id": 7}"#).unwrap();
        assert_eq!(req.autor_id, 7);
    }

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let req: UpdateRecipeRequest =
            serde_json::from_str(r#"{"descripcion": ""}"#).unwrap();
        assert_eq!(req.descripcion.as_deref(), Some(""));
        assert!(req.titulo.is_none());
        assert!(req.ingredientes.is_none());
        assert!(req.pasos_preparacion.is_none());
    }
}
