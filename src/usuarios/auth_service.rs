// src/usuarios/auth_service.rs

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use super::credenciais::RepositorioCredenciais;
use super::usuario_structs::{Claims, Token, Usuario};

pub const TIPO_TOKEN: &str = "bearer";

/// Motivos de rejeição na emissão ou validação de um token.
/// `UsuarioInativo` é o único que resulta em 403; os demais viram 401.
#[derive(Debug, Error)]
pub enum ErroAuth {
    #[error("Token de autenticação ausente.")]
    TokenAusente,

    #[error("Não foi possível validar as credenciais.")]
    TokenInvalido,

    #[error("Token expirado.")]
    TokenExpirado,

    #[error("Não foi possível validar as credenciais.")]
    UsuarioDesconhecido,

    #[error("Usuário inativo.")]
    UsuarioInativo,

    #[error("expiração do token fora do intervalo de datas suportado")]
    ExpiracaoForaDoIntervalo,

    #[error("falha ao assinar token: {0}")]
    Assinatura(#[from] jsonwebtoken::errors::Error),
}

/// Autenticação por senha e emissão/validação de tokens HS256.
///
/// O segredo e a tabela de credenciais são fixados na construção e nunca
/// mudam depois disso.
#[derive(Clone)]
pub struct ServicoAuth {
    credenciais: Arc<RepositorioCredenciais>,
    chave_codificacao: EncodingKey,
    chave_decodificacao: DecodingKey,
    validacao: Validation,
    duracao_token: Duration,
}

impl ServicoAuth {
    pub fn new(credenciais: Arc<RepositorioCredenciais>, segredo: &[u8], duracao_token: Duration) -> Self {
        let mut validacao = Validation::new(Algorithm::HS256);
        // A expiração é conferida em `usuario_ativo_atual_em`, contra um instante explícito.
        validacao.validate_exp = false;
        validacao.leeway = 0;

        Self {
            credenciais,
            chave_codificacao: EncodingKey::from_secret(segredo),
            chave_decodificacao: DecodingKey::from_secret(segredo),
            validacao,
            duracao_token,
        }
    }

    /// Validade padrão dos tokens emitidos em `POST /token`.
    pub fn duracao_token(&self) -> Duration {
        self.duracao_token
    }

    pub fn autenticar_usuario(&self, username: &str, senha: &str) -> Option<Usuario> {
        self.credenciais.autenticar(username, senha)
    }

    pub fn criar_token_de_acesso(&self, sub: &str, ttl: Duration) -> Result<Token, ErroAuth> {
        self.criar_token_de_acesso_em(sub, ttl, Utc::now())
    }

    pub fn criar_token_de_acesso_em(
        &self,
        sub: &str,
        ttl: Duration,
        agora: DateTime<Utc>,
    ) -> Result<Token, ErroAuth> {
        let exp = agora
            .checked_add_signed(ttl)
            .ok_or(ErroAuth::ExpiracaoForaDoIntervalo)?;
        let claims = Claims {
            sub: sub.to_string(),
            exp: exp.timestamp(),
        };
        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.chave_codificacao)?;

        Ok(Token {
            access_token,
            token_type: TIPO_TOKEN.to_string(),
        })
    }

    pub fn usuario_ativo_atual(&self, token: &str) -> Result<Usuario, ErroAuth> {
        self.usuario_ativo_atual_em(token, Utc::now())
    }

    /// Resolve o usuário dono do token.
    ///
    /// Ordem das verificações: assinatura e formato, expiração (`agora < exp`),
    /// existência do usuário e, por último, conta desativada.
    pub fn usuario_ativo_atual_em(&self, token: &str, agora: DateTime<Utc>) -> Result<Usuario, ErroAuth> {
        let dados = decode::<Claims>(token, &self.chave_decodificacao, &self.validacao).map_err(|e| {
            debug!(erro = ?e.kind(), "token rejeitado");
            ErroAuth::TokenInvalido
        })?;
        let claims = dados.claims;

        if agora.timestamp() >= claims.exp {
            debug!(sub = %claims.sub, exp = claims.exp, "token expirado");
            return Err(ErroAuth::TokenExpirado);
        }

        let usuario = self
            .credenciais
            .buscar(&claims.sub)
            .ok_or(ErroAuth::UsuarioDesconhecido)?;

        if usuario.desativado {
            return Err(ErroAuth::UsuarioInativo);
        }

        Ok(usuario.clone())
    }
}
