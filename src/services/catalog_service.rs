// src/services/catalog_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{codes, error::AppError, money},
    models::catalog::{Service, ServicePayload},
};

/// Catálogo de serviços: o registro plano que alimenta a composição de
/// reservas. É a sessão que o possui; o motor só recebe referências.
#[derive(Debug, Default)]
pub struct CatalogService {
    services: Vec<Service>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cadastra um serviço com o próximo código sequencial. Valor e tempo
    /// chegam como texto livre e são canonicalizados aqui.
    pub fn add(&mut self, payload: ServicePayload) -> Result<Service, AppError> {
        payload.validate()?;

        let service = Service {
            id: Uuid::new_v4(),
            code: codes::next_code(self.services.iter().map(|s| s.code.as_str())),
            description: payload.description.trim().to_string(),
            price: money::parse_amount(&payload.price),
            duration_minutes: money::parse_duration(&payload.duration),
        };

        tracing::info!("Serviço {} cadastrado: {}", service.code, service.description);
        self.services.push(service.clone());
        Ok(service)
    }

    /// Alteração em lugar: id e código nunca mudam.
    pub fn update(&mut self, id: Uuid, payload: ServicePayload) -> Result<Service, AppError> {
        payload.validate()?;

        let service = self
            .services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::ServiceNotFound)?;

        service.description = payload.description.trim().to_string();
        service.price = money::parse_amount(&payload.price);
        service.duration_minutes = money::parse_duration(&payload.duration);

        Ok(service.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        if self.services.len() == before {
            return Err(AppError::ServiceNotFound);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Service] {
        &self.services
    }

    /// Resolução de uma linha de serviço na composição da reserva.
    /// Descrições não são únicas por contrato: vale a primeira cadastrada.
    pub fn find_by_description(&self, description: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.description == description)
    }
}
