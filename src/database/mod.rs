// src/database/mod.rs

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, Transaction};

/// Sessão com escopo de uma operação. Se não houver `commit`, o drop faz rollback
/// e devolve a conexão ao pool.
pub type Sessao = Transaction<'static, Postgres>;

const CRIAR_TABELA_PRODUTOS: &str = "
    CREATE TABLE IF NOT EXISTS produtos (
        id SERIAL PRIMARY KEY,
        nome VARCHAR NOT NULL,
        preco DOUBLE PRECISION NOT NULL,
        descricao VARCHAR NOT NULL,
        imagem VARCHAR NOT NULL,
        categoria VARCHAR NOT NULL,
        qnt_estoque INTEGER NOT NULL,
        disponibilidade BOOLEAN NOT NULL DEFAULT TRUE
    )";

/// Pool de conexões com o PostgreSQL.
#[derive(Clone)]
pub struct BancoDeDados {
    pool: PgPool,
}

impl BancoDeDados {
    pub async fn conectar(database_url: &str, max_conexoes: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_conexoes)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Cria a tabela `produtos` caso ainda não exista.
    pub async fn garantir_esquema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CRIAR_TABELA_PRODUTOS).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn sessao(&self) -> Result<Sessao, sqlx::Error> {
        self.pool.begin().await
    }
}
