// src/services/auth.rs

use bcrypt::{hash, verify};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::auth::{LoggedUser, LoginUserPayload, RegisterUserPayload, User},
};

/// Costura com o colaborador de persistência: o único dado que sobrevive
/// ao processo são os usuários registrados. O núcleo só conhece este
/// contrato; um armazenamento durável implementa o trait do lado de fora.
pub trait UserStore {
    fn insert(&mut self, user: User) -> Result<(), AppError>;
    fn find_by_email(&self, email: &str) -> Option<User>;
    fn find_by_id(&self, id: Uuid) -> Option<User>;
}

/// Implementação em memória usada pela sessão padrão e pelos testes.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&mut self, user: User) -> Result<(), AppError> {
        self.users.push(user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.iter().find(|u| u.email == email).cloned()
    }

    fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

pub struct AuthService {
    store: Box<dyn UserStore>,
}

impl AuthService {
    pub fn new(store: Box<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn register_user(&mut self, payload: RegisterUserPayload) -> Result<LoggedUser, AppError> {
        payload.validate()?;

        // E-mail é a chave de unicidade do cadastro.
        if self.store.find_by_email(&payload.email).is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        // O núcleo só vê a senha em claro aqui; daqui pra frente, só o hash.
        let password_hash = hash(&payload.password, bcrypt::DEFAULT_COST)?;

        let user = User {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone,
            password_hash,
        };
        let logged = LoggedUser {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        };

        self.store.insert(user)?;
        tracing::info!("Usuário cadastrado: {}", logged.email);
        Ok(logged)
    }

    /// Resultados distintos, como o backend original: e-mail desconhecido
    /// e senha errada são erros diferentes.
    pub fn login_user(&self, payload: LoginUserPayload) -> Result<LoggedUser, AppError> {
        payload.validate()?;

        let user = self
            .store
            .find_by_email(&payload.email)
            .ok_or(AppError::UserNotFound)?;

        if !verify(&payload.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(LoggedUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
