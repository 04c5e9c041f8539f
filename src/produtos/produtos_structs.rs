// src/produtos/produtos_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber os dados de um produto nas requisições POST/PUT.
/// Todos os campos são obrigatórios; um `id` enviado pelo cliente é ignorado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoProduto {
    pub nome: String,
    pub preco: f64,
    pub descricao: String,
    pub imagem: String,
    pub categoria: String,
    pub qnt_estoque: i32,
    pub disponibilidade: bool,
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub preco: f64,
    pub descricao: String,
    pub imagem: String,
    pub categoria: String,
    pub qnt_estoque: i32,
    pub disponibilidade: bool,
}

impl Produto {
    pub fn com_id(id: i32, campos: NovoProduto) -> Self {
        Self {
            id,
            nome: campos.nome,
            preco: campos.preco,
            descricao: campos.descricao,
            imagem: campos.imagem,
            categoria: campos.categoria,
            qnt_estoque: campos.qnt_estoque,
            disponibilidade: campos.disponibilidade,
        }
    }

    /// Campos editáveis, sem o id.
    pub fn campos(&self) -> NovoProduto {
        NovoProduto {
            nome: self.nome.clone(),
            preco: self.preco,
            descricao: self.descricao.clone(),
            imagem: self.imagem.clone(),
            categoria: self.categoria.clone(),
            qnt_estoque: self.qnt_estoque,
            disponibilidade: self.disponibilidade,
        }
    }
}
