// src/shared/shared_structs.rs

use serde::Serialize;

/// Estrutura genérica para padronizar as respostas da API.
/// 'T' é o tipo do corpo da resposta, que pode ser opcional.
#[derive(Debug, Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'body' se for None
    pub body: Option<T>,
}

impl GenericResponse<()> {
    /// Resposta de confirmação sem corpo (ex.: exclusão de produto).
    pub fn sucesso(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            body: None,
        }
    }

    pub fn erro(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resposta_sem_corpo_omite_body() {
        let json = serde_json::to_value(GenericResponse::erro("Produto não encontrado")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "status": "error", "message": "Produto não encontrado" })
        );
    }

    #[test]
    fn resposta_com_corpo() {
        let resposta = GenericResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            body: Some(vec![1, 2]),
        };
        let json = serde_json::to_value(resposta).unwrap();

        assert_eq!(json["body"], serde_json::json!([1, 2]));
    }
}
