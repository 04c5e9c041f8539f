// src/usuarios/usuario_structs.rs

use serde::{Deserialize, Serialize};

/// Registro de credencial de um administrador.
/// A senha fica armazenada apenas como hash bcrypt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Usuario {
    pub username: String,
    pub hashed_password: String,
    pub nome_exibicao: String,
    #[serde(default)]
    pub desativado: bool,
}

/// Formulário (x-www-form-urlencoded) recebido em `POST /token`.
/// Campos extras do fluxo OAuth2 (grant_type, scope...) são ignorados.
#[derive(Deserialize)]
pub struct FormularioLogin {
    pub username: String,
    pub password: String,
}

/// Payload do JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub exp: i64,    // Expiration Time (timestamp Unix)
}

/// Resposta de `POST /token`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}
