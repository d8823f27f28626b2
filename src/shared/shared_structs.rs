// src/shared/shared_structs.rs

use serde::Serialize;

/// Estrutura genérica para padronizar as respostas da API.
/// 'T' é o tipo do corpo da resposta, que pode ser opcional.
#[derive(Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'body' se for None
    pub body: Option<T>,
}

impl<T> GenericResponse<T> {
    /// Cria uma resposta de sucesso com corpo.
    pub fn sucesso(message: impl Into<String>, body: T) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: Some(body),
        }
    }
}

impl GenericResponse<()> {
    /// Cria uma resposta de sucesso sem corpo.
    pub fn sucesso_sem_corpo(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: None,
        }
    }

    /// Cria uma resposta de erro sem corpo.
    pub fn erro(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
            body: None,
        }
    }
}
