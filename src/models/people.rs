// src/models/people.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Cliente do cadastro. `code` segue a mesma sequência de dois dígitos do
/// catálogo de serviços.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PersonPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O celular é obrigatório."))]
    pub phone: String,
}
