// src/services/people_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{codes, error::AppError},
    models::people::{Barber, Customer, PersonPayload},
};

/// Cadastro de clientes. Além do CRUD, alimenta o autocomplete do
/// formulário de agendamento (busca por trecho do nome, sem caixa).
#[derive(Debug, Default)]
pub struct CustomerService {
    customers: Vec<Customer>,
}

impl CustomerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, payload: PersonPayload) -> Result<Customer, AppError> {
        payload.validate()?;

        let customer = Customer {
            id: Uuid::new_v4(),
            code: codes::next_code(self.customers.iter().map(|c| c.code.as_str())),
            name: payload.name.trim().to_string(),
            phone: payload.phone.trim().to_string(),
        };

        self.customers.push(customer.clone());
        Ok(customer)
    }

    pub fn update(&mut self, id: Uuid, payload: PersonPayload) -> Result<Customer, AppError> {
        payload.validate()?;

        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::CustomerNotFound)?;

        customer.name = payload.name.trim().to_string();
        customer.phone = payload.phone.trim().to_string();
        Ok(customer.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.customers.len();
        self.customers.retain(|c| c.id != id);
        if self.customers.len() == before {
            return Err(AppError::CustomerNotFound);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    /// Sugestões para o autocomplete: nomes contendo o trecho digitado.
    pub fn search(&self, fragment: &str) -> Vec<&Customer> {
        let needle = fragment.to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Customer> {
        let needle = name.to_lowercase();
        self.customers.iter().find(|c| c.name.to_lowercase() == needle)
    }
}

/// Cadastro de barbeiros, com a mesma sequência de códigos.
#[derive(Debug, Default)]
pub struct BarberService {
    barbers: Vec<Barber>,
}

impl BarberService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, payload: PersonPayload) -> Result<Barber, AppError> {
        payload.validate()?;

        let barber = Barber {
            id: Uuid::new_v4(),
            code: codes::next_code(self.barbers.iter().map(|b| b.code.as_str())),
            name: payload.name.trim().to_string(),
            phone: payload.phone.trim().to_string(),
        };

        self.barbers.push(barber.clone());
        Ok(barber)
    }

    pub fn update(&mut self, id: Uuid, payload: PersonPayload) -> Result<Barber, AppError> {
        payload.validate()?;

        let barber = self
            .barbers
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::BarberNotFound)?;

        barber.name = payload.name.trim().to_string();
        barber.phone = payload.phone.trim().to_string();
        Ok(barber.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.barbers.len();
        self.barbers.retain(|b| b.id != id);
        if self.barbers.len() == before {
            return Err(AppError::BarberNotFound);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Barber] {
        &self.barbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> PersonPayload {
        PersonPayload {
            name: name.to_string(),
            phone: "11 98888-0000".to_string(),
        }
    }

    #[test]
    fn cadastro_gera_codigos_sequenciais() {
        let mut customers = CustomerService::new();
        let ana = customers.add(payload("Ana")).unwrap();
        let bia = customers.add(payload("Bia")).unwrap();
        assert_eq!((ana.code.as_str(), bia.code.as_str()), ("01", "02"));

        let mut barbers = BarberService::new();
        let edson = barbers.add(payload("Edson")).unwrap();
        assert_eq!(edson.code, "01");
    }

    #[test]
    fn busca_por_trecho_ignora_caixa() {
        let mut customers = CustomerService::new();
        customers.add(payload("João Pedro")).unwrap();
        customers.add(payload("Pedro Luís")).unwrap();
        customers.add(payload("Marcos")).unwrap();

        let hits = customers.search("pedro");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["João Pedro", "Pedro Luís"]);

        assert!(customers.find_by_name("marcos").is_some());
        assert!(customers.find_by_name("Mar").is_none());
    }

    #[test]
    fn nome_e_celular_sao_obrigatorios() {
        let mut barbers = BarberService::new();
        let mut missing_phone = payload("Edson");
        missing_phone.phone = String::new();

        assert!(matches!(
            barbers.add(missing_phone),
            Err(AppError::ValidationError(_))
        ));
        assert!(barbers.list().is_empty());
    }

    #[test]
    fn excluir_exige_id_existente() {
        let mut customers = CustomerService::new();
        let ana = customers.add(payload("Ana")).unwrap();

        assert!(matches!(
            customers.remove(Uuid::new_v4()),
            Err(AppError::CustomerNotFound)
        ));
        customers.remove(ana.id).unwrap();
        assert!(customers.list().is_empty());
    }
}
