// src/produtos/produtos_repositorio.rs

use async_trait::async_trait;
use thiserror::Error;

use super::produtos_structs::{NovoProduto, Produto};

#[derive(Debug, Error)]
pub enum ErroRepositorio {
    #[error("registro não encontrado")]
    NaoEncontrado,

    #[error("falha no banco de dados: {0}")]
    Banco(#[from] sqlx::Error),
}

/// Operações sobre a tabela `produtos`.
///
/// Cada chamada é atômica: ou a linha inteira é gravada, ou nada muda.
#[async_trait]
pub trait ProdutoRepositorio: Send + Sync {
    /// Insere um produto e devolve o registro com o id atribuído pelo banco.
    async fn criar(&self, novo: &NovoProduto) -> Result<Produto, ErroRepositorio>;

    /// Todos os produtos, sem garantia de ordem.
    async fn listar_todos(&self) -> Result<Vec<Produto>, ErroRepositorio>;

    async fn buscar_por_id(&self, id: i32) -> Result<Produto, ErroRepositorio>;

    /// Filtro exato por categoria. Nenhuma linha encontrada é `NaoEncontrado`,
    /// não uma lista vazia.
    async fn listar_por_categoria(&self, categoria: &str) -> Result<Vec<Produto>, ErroRepositorio>;

    /// Substitui todos os campos do produto.
    async fn substituir(&self, id: i32, campos: &NovoProduto) -> Result<Produto, ErroRepositorio>;

    async fn remover(&self, id: i32) -> Result<(), ErroRepositorio>;
}
