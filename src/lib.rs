// src/lib.rs

//! Backend administrativo do catálogo de produtos de uma lanchonete.
//!
//! `POST /token` troca usuário e senha por um token Bearer; as rotas em
//! `/admin` exigem esse token e fazem o CRUD da tabela `produtos`.

use std::sync::Arc;

use actix_web::web;

pub mod config;
pub mod database;
pub mod produtos; // Módulo de produtos
pub mod shared;
pub mod usuarios; // Módulo de usuários e autenticação

use produtos::produtos_repositorio::ProdutoRepositorio;
use shared::erros;
use usuarios::auth_service::ServicoAuth;

/// Estado compartilhado entre as rotas: repositório de produtos e serviço de autenticação.
pub struct AppState {
    pub repositorio: Arc<dyn ProdutoRepositorio>,
    pub auth: ServicoAuth,
}

/// Registra os extratores e as rotas da API. O `AppState` é adicionado por quem monta o `App`.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(erros::erro_json))
        .app_data(web::FormConfig::default().error_handler(erros::erro_formulario))
        .app_data(web::PathConfig::default().error_handler(erros::erro_caminho))
        // Autenticação
        .service(usuarios::usuario_router::login_para_token)
        // Módulo de Produtos (rotas administrativas)
        .service(produtos::produtos_router::cadastrar_produto)
        .service(produtos::produtos_router::listar_produtos)
        .service(produtos::produtos_router::buscar_produtos_por_categoria)
        .service(produtos::produtos_router::buscar_produto_por_id)
        .service(produtos::produtos_router::atualizar_produto)
        .service(produtos::produtos_router::deletar_produto);
}
