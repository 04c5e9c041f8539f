// src/produtos/repositorio_memoria.rs

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::produtos_repositorio::{ErroRepositorio, ProdutoRepositorio};
use super::produtos_structs::{NovoProduto, Produto};

#[derive(Debug, Default)]
struct Tabela {
    ultimo_id: i32,
    linhas: BTreeMap<i32, Produto>,
}

/// Tabela de produtos em memória, usada quando não há `DATABASE_URL`.
/// RwLock permite múltiplos leitores ou um único escritor.
#[derive(Debug, Default)]
pub struct MemoriaProdutoRepositorio {
    tabela: RwLock<Tabela>,
}

impl MemoriaProdutoRepositorio {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProdutoRepositorio for MemoriaProdutoRepositorio {
    async fn criar(&self, novo: &NovoProduto) -> Result<Produto, ErroRepositorio> {
        let mut tabela = self.tabela.write().unwrap_or_else(PoisonError::into_inner);
        tabela.ultimo_id += 1;
        let produto = Produto::com_id(tabela.ultimo_id, novo.clone());
        tabela.linhas.insert(produto.id, produto.clone());
        Ok(produto)
    }

    async fn listar_todos(&self) -> Result<Vec<Produto>, ErroRepositorio> {
        let tabela = self.tabela.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tabela.linhas.values().cloned().collect())
    }

    async fn buscar_por_id(&self, id: i32) -> Result<Produto, ErroRepositorio> {
        let tabela = self.tabela.read().unwrap_or_else(PoisonError::into_inner);
        tabela.linhas.get(&id).cloned().ok_or(ErroRepositorio::NaoEncontrado)
    }

    async fn listar_por_categoria(&self, categoria: &str) -> Result<Vec<Produto>, ErroRepositorio> {
        let tabela = self.tabela.read().unwrap_or_else(PoisonError::into_inner);
        let produtos: Vec<Produto> = tabela
            .linhas
            .values()
            .filter(|p| p.categoria == categoria)
            .cloned()
            .collect();

        if produtos.is_empty() {
            return Err(ErroRepositorio::NaoEncontrado);
        }
        Ok(produtos)
    }

    async fn substituir(&self, id: i32, campos: &NovoProduto) -> Result<Produto, ErroRepositorio> {
        let mut tabela = self.tabela.write().unwrap_or_else(PoisonError::into_inner);
        let linha = tabela.linhas.get_mut(&id).ok_or(ErroRepositorio::NaoEncontrado)?;
        *linha = Produto::com_id(id, campos.clone());
        Ok(linha.clone())
    }

    async fn remover(&self, id: i32) -> Result<(), ErroRepositorio> {
        let mut tabela = self.tabela.write().unwrap_or_else(PoisonError::into_inner);
        tabela
            .linhas
            .remove(&id)
            .map(|_| ())
            .ok_or(ErroRepositorio::NaoEncontrado)
    }
}
