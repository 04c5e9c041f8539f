// src/usuarios/auth_middleware.rs

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};

use futures::future::{ready, Ready};
use tracing::error;

use super::auth_service::ErroAuth;
use super::usuario_structs::Usuario;
use crate::shared::erros::ErroApi;
use crate::AppState;

/// Usuário autenticado e ativo, resolvido a partir do token Bearer.
///
/// Basta declarar `usuario: UsuarioAutenticado` no handler: se o token estiver
/// ausente, inválido ou expirado a requisição termina em 401, e se a conta
/// estiver desativada, em 403. O handler nunca é executado nesses casos.
#[derive(Debug, Clone)]
pub struct UsuarioAutenticado(pub Usuario);

impl FromRequest for UsuarioAutenticado {
    type Error = ErroApi;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolver_usuario(req).map(UsuarioAutenticado))
    }
}

fn resolver_usuario(req: &HttpRequest) -> Result<Usuario, ErroApi> {
    let estado = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        error!("AppState não registrado na aplicação");
        ErroApi::Interno
    })?;

    let token = token_bearer(req)?;
    Ok(estado.auth.usuario_ativo_atual(token)?)
}

/// Extrai o token do cabeçalho `Authorization: Bearer <token>`.
/// O esquema é comparado sem diferenciar maiúsculas.
pub fn token_bearer(req: &HttpRequest) -> Result<&str, ErroAuth> {
    let valor = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ErroAuth::TokenAusente)?;

    match valor.split_once(' ') {
        Some((esquema, token)) if esquema.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(ErroAuth::TokenAusente),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn extrai_token_bearer() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();

        assert_eq!(token_bearer(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn esquema_sem_diferenciar_maiusculas() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "bearer abc"))
            .to_http_request();

        assert_eq!(token_bearer(&req).unwrap(), "abc");
    }

    #[test]
    fn cabecalho_ausente() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(token_bearer(&req), Err(ErroAuth::TokenAusente)));
    }

    #[test]
    fn outro_esquema_e_rejeitado() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0"))
            .to_http_request();

        assert!(matches!(token_bearer(&req), Err(ErroAuth::TokenAusente)));
    }

    #[test]
    fn bearer_sem_token_e_rejeitado() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();

        assert!(matches!(token_bearer(&req), Err(ErroAuth::TokenAusente)));
    }
}
