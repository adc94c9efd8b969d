// src/models/auth.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Representa um usuário vindo do armazenamento
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Dados para login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Resposta de autenticação: o que a interface conhece do usuário logado.
// A senha (mesmo o hash) nunca sai do serviço.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
