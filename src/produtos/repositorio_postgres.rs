// src/produtos/repositorio_postgres.rs

use async_trait::async_trait;
use sqlx::query_as;

use super::produtos_repositorio::{ErroRepositorio, ProdutoRepositorio};
use super::produtos_structs::{NovoProduto, Produto};
use crate::database::BancoDeDados;

/// Repositório de produtos sobre o PostgreSQL.
///
/// Toda operação abre a própria sessão (transação) e só faz `commit` no
/// caminho de sucesso; qualquer `?` antes disso descarta a sessão com rollback.
#[derive(Clone)]
pub struct PgProdutoRepositorio {
    banco: BancoDeDados,
}

impl PgProdutoRepositorio {
    pub fn new(banco: BancoDeDados) -> Self {
        Self { banco }
    }
}

#[async_trait]
impl ProdutoRepositorio for PgProdutoRepositorio {
    async fn criar(&self, novo: &NovoProduto) -> Result<Produto, ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let produto = query_as::<_, Produto>(
            "INSERT INTO produtos (nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade",
        )
        .bind(&novo.nome)
        .bind(novo.preco)
        .bind(&novo.descricao)
        .bind(&novo.imagem)
        .bind(&novo.categoria)
        .bind(novo.qnt_estoque)
        .bind(novo.disponibilidade)
        .fetch_one(&mut *sessao)
        .await?;

        sessao.commit().await?;
        Ok(produto)
    }

    async fn listar_todos(&self) -> Result<Vec<Produto>, ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let produtos = query_as::<_, Produto>(
            "SELECT id, nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade FROM produtos",
        )
        .fetch_all(&mut *sessao)
        .await?;

        sessao.commit().await?;
        Ok(produtos)
    }

    async fn buscar_por_id(&self, id: i32) -> Result<Produto, ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let produto = query_as::<_, Produto>(
            "SELECT id, nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade
             FROM produtos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *sessao)
        .await?;

        sessao.commit().await?;
        produto.ok_or(ErroRepositorio::NaoEncontrado)
    }

    async fn listar_por_categoria(&self, categoria: &str) -> Result<Vec<Produto>, ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let produtos = query_as::<_, Produto>(
            "SELECT id, nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade
             FROM produtos WHERE categoria = $1",
        )
        .bind(categoria)
        .fetch_all(&mut *sessao)
        .await?;

        sessao.commit().await?;
        if produtos.is_empty() {
            return Err(ErroRepositorio::NaoEncontrado);
        }
        Ok(produtos)
    }

    async fn substituir(&self, id: i32, campos: &NovoProduto) -> Result<Produto, ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let produto = query_as::<_, Produto>(
            "UPDATE produtos
             SET nome = $1, preco = $2, descricao = $3, imagem = $4, categoria = $5,
                 qnt_estoque = $6, disponibilidade = $7
             WHERE id = $8
             RETURNING id, nome, preco, descricao, imagem, categoria, qnt_estoque, disponibilidade",
        )
        .bind(&campos.nome)
        .bind(campos.preco)
        .bind(&campos.descricao)
        .bind(&campos.imagem)
        .bind(&campos.categoria)
        .bind(campos.qnt_estoque)
        .bind(campos.disponibilidade)
        .bind(id)
        .fetch_optional(&mut *sessao)
        .await?
        .ok_or(ErroRepositorio::NaoEncontrado)?;

        sessao.commit().await?;
        Ok(produto)
    }

    async fn remover(&self, id: i32) -> Result<(), ErroRepositorio> {
        let mut sessao = self.banco.sessao().await?;

        let resultado = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&mut *sessao)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(ErroRepositorio::NaoEncontrado);
        }

        sessao.commit().await?;
        Ok(())
    }
}
