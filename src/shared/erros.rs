// src/shared/erros.rs

use actix_web::{
    error::{JsonPayloadError, PathError, UrlencodedError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use tracing::error;

use super::shared_structs::GenericResponse;
use crate::produtos::produtos_repositorio::ErroRepositorio;
use crate::usuarios::auth_service::ErroAuth;

/// Erros que chegam ao cliente HTTP.
///
/// Cada variante corresponde a um status: 422, 404, 401, 403 e 500.
/// A mensagem de `Interno` é genérica; o detalhe fica apenas no log.
#[derive(Debug, Error)]
pub enum ErroApi {
    #[error("{0}")]
    Validacao(String),

    #[error("{0}")]
    NaoEncontrado(String),

    #[error("{0}")]
    NaoAutorizado(String),

    #[error("{0}")]
    Proibido(String),

    #[error("Erro interno do servidor")]
    Interno,
}

impl ErroApi {
    /// Converte o resultado do repositório, usando `nao_encontrado` como mensagem do 404.
    pub fn do_repositorio(erro: ErroRepositorio, nao_encontrado: &str) -> Self {
        match erro {
            ErroRepositorio::NaoEncontrado => ErroApi::NaoEncontrado(nao_encontrado.to_string()),
            ErroRepositorio::Banco(e) => {
                error!(erro = %e, "falha no banco de dados");
                ErroApi::Interno
            }
        }
    }
}

impl ResponseError for ErroApi {
    fn status_code(&self) -> StatusCode {
        match self {
            ErroApi::Validacao(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ErroApi::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            ErroApi::NaoAutorizado(_) => StatusCode::UNAUTHORIZED,
            ErroApi::Proibido(_) => StatusCode::FORBIDDEN,
            ErroApi::Interno => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut resposta = HttpResponse::build(self.status_code());
        if let ErroApi::NaoAutorizado(_) = self {
            resposta.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        resposta.json(GenericResponse::erro(self.to_string()))
    }
}

impl From<ErroAuth> for ErroApi {
    fn from(erro: ErroAuth) -> Self {
        match erro {
            ErroAuth::UsuarioInativo => ErroApi::Proibido(ErroAuth::UsuarioInativo.to_string()),
            ErroAuth::Assinatura(e) => {
                error!(erro = %e, "falha ao assinar token");
                ErroApi::Interno
            }
            ErroAuth::ExpiracaoForaDoIntervalo => {
                error!("validade configurada do token excede o intervalo de datas");
                ErroApi::Interno
            }
            outro => ErroApi::NaoAutorizado(outro.to_string()),
        }
    }
}

// Handlers de erro dos extratores: payload inválido vira 422 antes de chegar ao repositório.

pub fn erro_json(erro: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ErroApi::Validacao(format!("Payload inválido: {erro}")).into()
}

pub fn erro_formulario(erro: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    ErroApi::Validacao(format!("Formulário inválido: {erro}")).into()
}

pub fn erro_caminho(erro: PathError, _req: &HttpRequest) -> actix_web::Error {
    ErroApi::Validacao(format!("Parâmetro de caminho inválido: {erro}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_por_variante() {
        assert_eq!(
            ErroApi::Validacao("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ErroApi::NaoEncontrado("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErroApi::NaoAutorizado("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErroApi::Proibido("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErroApi::Interno.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn nao_autorizado_envia_www_authenticate() {
        let resposta = ErroApi::NaoAutorizado("Token expirado".into()).error_response();

        assert_eq!(
            resposta.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn proibido_nao_envia_www_authenticate() {
        let resposta = ErroApi::Proibido("Usuário inativo".into()).error_response();

        assert!(resposta.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn usuario_inativo_vira_403_e_demais_falhas_401() {
        assert!(matches!(ErroApi::from(ErroAuth::UsuarioInativo), ErroApi::Proibido(_)));
        assert!(matches!(ErroApi::from(ErroAuth::TokenExpirado), ErroApi::NaoAutorizado(_)));
        assert!(matches!(ErroApi::from(ErroAuth::TokenInvalido), ErroApi::NaoAutorizado(_)));
        assert!(matches!(ErroApi::from(ErroAuth::TokenAusente), ErroApi::NaoAutorizado(_)));
        assert!(matches!(
            ErroApi::from(ErroAuth::UsuarioDesconhecido),
            ErroApi::NaoAutorizado(_)
        ));
    }

    #[test]
    fn expiracao_fora_do_intervalo_vira_500() {
        let erro = ErroApi::from(ErroAuth::ExpiracaoForaDoIntervalo);

        assert!(matches!(erro, ErroApi::Interno));
        assert_eq!(erro.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn nao_encontrado_usa_mensagem_do_contexto() {
        let erro = ErroApi::do_repositorio(ErroRepositorio::NaoEncontrado, "Produto não encontrado");

        assert_eq!(erro.to_string(), "Produto não encontrado");
        assert_eq!(erro.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn falha_de_banco_esconde_detalhes() {
        let erro = ErroApi::do_repositorio(
            ErroRepositorio::Banco(sqlx::Error::PoolTimedOut),
            "Produto não encontrado",
        );

        assert!(matches!(erro, ErroApi::Interno));
    }

    #[actix_web::test]
    async fn corpo_usa_resposta_generica() {
        let resposta = ErroApi::NaoEncontrado("Produto não encontrado".into()).error_response();
        let corpo = to_bytes(resposta.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&corpo).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Produto não encontrado");
    }
}
