use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Nenhuma operação do núcleo deixa um erro "vazar" como panic: tudo que
// pode falhar devolve um AppError que o chamador transforma em mensagem.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Serviço não encontrado")]
    ServiceNotFound,

    #[error("Agendamento não encontrado")]
    AppointmentNotFound,

    #[error("Despesa não encontrada")]
    ExpenseNotFound,

    #[error("Cliente não encontrado")]
    CustomerNotFound,

    #[error("Barbeiro não encontrado")]
    BarberNotFound,

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl AppError {
    // Sem camada HTTP, o equivalente do antigo `IntoResponse`: a mensagem
    // que a interface mostra ao usuário. Erros inesperados são logados com
    // o detalhe completo e viram uma mensagem genérica.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(errors) => {
                let mut details = Vec::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.push(format!("{}: {}", field, messages.join(", ")));
                }
                if details.is_empty() {
                    "Um ou mais campos são inválidos.".to_string()
                } else {
                    format!("Um ou mais campos são inválidos ({}).", details.join("; "))
                }
            }
            AppError::EmailAlreadyExists => "Este e-mail já está em uso.".to_string(),
            AppError::InvalidCredentials => "Senha inválida.".to_string(),
            AppError::UserNotFound => "Usuário não encontrado.".to_string(),
            AppError::ServiceNotFound => "Serviço não encontrado.".to_string(),
            AppError::AppointmentNotFound => "Agendamento não encontrado.".to_string(),
            AppError::ExpenseNotFound => "Despesa não encontrada.".to_string(),
            AppError::CustomerNotFound => "Cliente não encontrado.".to_string(),
            AppError::BarberNotFound => "Barbeiro não encontrado.".to_string(),
            AppError::FontNotFound(detail) => {
                format!("Não foi possível gerar o PDF: {}", detail)
            }

            // Todos os outros erros viram mensagem genérica.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro interno: {}", e);
                "Ocorreu um erro inesperado.".to_string()
            }
        }
    }
}
