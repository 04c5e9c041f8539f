// src/usuarios/usuario_router.rs

use actix_web::{post, web, HttpResponse};
use tracing::{error, info, warn};

// Importa as structs do módulo de usuários
use super::usuario_structs::FormularioLogin;
use crate::shared::erros::ErroApi;
// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

/// Rota de login: troca usuário e senha por um token de acesso.
///
/// A verificação bcrypt é custosa, por isso roda em `web::block` para não
/// travar o worker do actix.
#[post("/token")]
pub async fn login_para_token(
    data: web::Data<AppState>,
    formulario: web::Form<FormularioLogin>,
) -> Result<HttpResponse, ErroApi> {
    let FormularioLogin { username, password } = formulario.into_inner();

    let auth = data.auth.clone();
    let usuario_login = username.clone();
    let usuario = web::block(move || auth.autenticar_usuario(&usuario_login, &password))
        .await
        .map_err(|e| {
            error!(erro = %e, "falha ao verificar senha");
            ErroApi::Interno
        })?;

    let Some(usuario) = usuario else {
        warn!(username = %username, "credenciais rejeitadas");
        return Err(ErroApi::NaoAutorizado("Usuário ou senha incorretos".to_string()));
    };

    let token = data
        .auth
        .criar_token_de_acesso(&usuario.username, data.auth.duracao_token())?;
    info!(username = %usuario.username, "token emitido");

    Ok(HttpResponse::Ok().json(token))
}
