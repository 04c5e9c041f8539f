// src/main.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fastfood_admin::config::Config;
use fastfood_admin::database::BancoDeDados;
use fastfood_admin::produtos::produtos_repositorio::ProdutoRepositorio;
use fastfood_admin::produtos::repositorio_memoria::MemoriaProdutoRepositorio;
use fastfood_admin::produtos::repositorio_postgres::PgProdutoRepositorio;
use fastfood_admin::usuarios::auth_service::ServicoAuth;
use fastfood_admin::usuarios::credenciais::RepositorioCredenciais;
use fastfood_admin::{configurar, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Lê o .env, se existir
    dotenvy::dotenv().ok();

    // Logs estruturados; respeita RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fastfood_admin=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::carregar()?;

    let repositorio: Arc<dyn ProdutoRepositorio> = match &config.database_url {
        Some(database_url) => {
            let banco = BancoDeDados::conectar(database_url, config.max_conexoes).await?;
            banco.garantir_esquema().await?;
            info!("Conectado ao PostgreSQL");
            Arc::new(PgProdutoRepositorio::new(banco))
        }
        None => {
            warn!("DATABASE_URL não definido, produtos serão mantidos apenas em memória");
            Arc::new(MemoriaProdutoRepositorio::new())
        }
    };

    let credenciais = match &config.credenciais_arquivo {
        Some(caminho) => RepositorioCredenciais::de_arquivo(caminho)?,
        None => {
            warn!("CREDENCIAIS_ARQUIVO não definido, usando a tabela de usuários embutida");
            RepositorioCredenciais::padrao(bcrypt::DEFAULT_COST)?
        }
    };
    info!(usuarios = credenciais.len(), "credenciais carregadas");

    let auth = ServicoAuth::new(
        Arc::new(credenciais),
        config.jwt_secret.as_bytes(),
        config.duracao_token(),
    );

    // web::Data é usado para compartilhar o estado entre as rotas.
    let app_state = web::Data::new(AppState { repositorio, auth });

    info!("Iniciando API na porta {}...", config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configurar)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
