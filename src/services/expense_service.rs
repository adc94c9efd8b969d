// src/services/expense_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, money},
    models::expenses::{Expense, ExpensePayload},
};

/// Registro de despesas. Independente da agenda: nenhuma operação aqui
/// toca em agendamentos, e vice-versa.
#[derive(Debug, Default)]
pub struct ExpenseService {
    expenses: Vec<Expense>,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, payload: ExpensePayload) -> Result<Expense, AppError> {
        payload.validate()?;
        let date = payload
            .date
            .ok_or_else(|| missing_date_error())?;

        let expense = Expense {
            id: Uuid::new_v4(),
            description: payload.description.trim().to_string(),
            // Texto que não parseia vira zero — leniência assumida do fluxo
            // de entrada, não erro.
            amount: money::parse_amount(&payload.amount),
            date,
            category: payload.category,
        };

        tracing::info!("Despesa lançada: {} ({})", expense.description, expense.category);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn update(&mut self, id: Uuid, payload: ExpensePayload) -> Result<Expense, AppError> {
        payload.validate()?;
        let date = payload
            .date
            .ok_or_else(|| missing_date_error())?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::ExpenseNotFound)?;

        expense.description = payload.description.trim().to_string();
        expense.amount = money::parse_amount(&payload.amount);
        expense.date = date;
        expense.category = payload.category;

        Ok(expense.clone())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(AppError::ExpenseNotFound);
        }
        Ok(())
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

fn missing_date_error() -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new("required");
    error.message = Some("A data é obrigatória.".into());
    errors.add("date", error);
    AppError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expenses::ExpenseCategory;
    use chrono::NaiveDate;

    fn payload(description: &str, amount: &str, category: ExpenseCategory) -> ExpensePayload {
        ExpensePayload {
            description: description.to_string(),
            amount: amount.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1),
            category,
        }
    }

    #[test]
    fn lancamento_canonicaliza_o_valor() {
        let mut expenses = ExpenseService::new();
        let expense = expenses
            .add(payload("Produtos de limpeza", "15,00", ExpenseCategory::Produtos))
            .unwrap();

        assert_eq!(expense.amount, "15.00".parse::<Decimal>().unwrap());
        assert_eq!(expense.category.to_string(), "Produtos");
    }

    #[test]
    fn valor_ilegivel_vira_zero_sem_abortar() {
        let mut expenses = ExpenseService::new();
        let expense = expenses
            .add(payload("Rasura", "quinze reais", ExpenseCategory::Diversos))
            .unwrap();
        assert_eq!(expense.amount, Decimal::ZERO);
    }

    #[test]
    fn total_soma_todas_as_despesas() {
        let mut expenses = ExpenseService::new();
        expenses.add(payload("Aluguel", "800,00", ExpenseCategory::Fixa)).unwrap();
        expenses.add(payload("Contas", "120,50", ExpenseCategory::Contas)).unwrap();

        assert_eq!(expenses.total(), "920.50".parse::<Decimal>().unwrap());
    }

    #[test]
    fn alterar_e_excluir_exigem_id_existente() {
        let mut expenses = ExpenseService::new();
        let expense = expenses.add(payload("Aluguel", "800,00", ExpenseCategory::Fixa)).unwrap();

        let updated = expenses
            .update(expense.id, payload("Aluguel reajustado", "850,00", ExpenseCategory::Fixa))
            .unwrap();
        assert_eq!(updated.id, expense.id);
        assert_eq!(updated.amount, "850.00".parse::<Decimal>().unwrap());

        assert!(matches!(
            expenses.remove(Uuid::new_v4()),
            Err(AppError::ExpenseNotFound)
        ));
        expenses.remove(expense.id).unwrap();
        assert!(expenses.list().is_empty());
    }

    #[test]
    fn data_ausente_e_erro_de_validacao() {
        let mut expenses = ExpenseService::new();
        let mut no_date = payload("Aluguel", "800,00", ExpenseCategory::Fixa);
        no_date.date = None;
        assert!(matches!(
            expenses.add(no_date),
            Err(AppError::ValidationError(_))
        ));
        assert!(expenses.list().is_empty());
    }
}
