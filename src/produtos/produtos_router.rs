// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::info;

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::NovoProduto;
use crate::shared::erros::ErroApi;
use crate::shared::shared_structs::GenericResponse;
use crate::usuarios::auth_middleware::UsuarioAutenticado;
// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

const PRODUTO_NAO_ENCONTRADO: &str = "Produto não encontrado";
const CATEGORIA_SEM_PRODUTOS: &str = "Nenhum produto encontrado para essa categoria";

/// Rota para cadastrar um novo produto. Retorna o produto com o id gerado.
#[post("/admin/cadastrar/")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    usuario: UsuarioAutenticado,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ErroApi> {
    let produto = data
        .repositorio
        .criar(&item)
        .await
        .map_err(|e| ErroApi::do_repositorio(e, PRODUTO_NAO_ENCONTRADO))?;

    info!(usuario = %usuario.0.username, id = produto.id, "produto cadastrado");
    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para buscar todos os produtos.
#[get("/admin/produtos")]
pub async fn listar_produtos(
    data: web::Data<AppState>,
    _usuario: UsuarioAutenticado,
) -> Result<HttpResponse, ErroApi> {
    let produtos = data
        .repositorio
        .listar_todos()
        .await
        .map_err(|e| ErroApi::do_repositorio(e, PRODUTO_NAO_ENCONTRADO))?;

    Ok(HttpResponse::Ok().json(produtos))
}

#[get("/admin/produtos/{id}")]
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    _usuario: UsuarioAutenticado,
    path: web::Path<i32>,
) -> Result<HttpResponse, ErroApi> {
    let produto = data
        .repositorio
        .buscar_por_id(path.into_inner())
        .await
        .map_err(|e| ErroApi::do_repositorio(e, PRODUTO_NAO_ENCONTRADO))?;

    Ok(HttpResponse::Ok().json(produto))
}

/// Rota para buscar os produtos de uma categoria.
///
/// Categoria sem nenhum produto responde 404, e não uma lista vazia.
#[get("/admin/produtos/categoria/{categoria}")]
pub async fn buscar_produtos_por_categoria(
    data: web::Data<AppState>,
    _usuario: UsuarioAutenticado,
    path: web::Path<String>,
) -> Result<HttpResponse, ErroApi> {
    let produtos = data
        .repositorio
        .listar_por_categoria(&path)
        .await
        .map_err(|e| ErroApi::do_repositorio(e, CATEGORIA_SEM_PRODUTOS))?;

    Ok(HttpResponse::Ok().json(produtos))
}

/// Rota para atualizar um produto existente (substituição completa dos campos).
#[put("/admin/produtos/{id}/")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    usuario: UsuarioAutenticado,
    path: web::Path<i32>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ErroApi> {
    let produto = data
        .repositorio
        .substituir(path.into_inner(), &item)
        .await
        .map_err(|e| ErroApi::do_repositorio(e, PRODUTO_NAO_ENCONTRADO))?;

    info!(usuario = %usuario.0.username, id = produto.id, "produto atualizado");
    Ok(HttpResponse::Ok().json(produto))
}

#[delete("/admin/produtos/{id}/")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    usuario: UsuarioAutenticado,
    path: web::Path<i32>,
) -> Result<HttpResponse, ErroApi> {
    let id = path.into_inner();
    data.repositorio
        .remover(id)
        .await
        .map_err(|e| ErroApi::do_repositorio(e, PRODUTO_NAO_ENCONTRADO))?;

    info!(usuario = %usuario.0.username, id, "produto deletado");
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(format!(
        "Produto com ID {id} foi deletado com sucesso"
    ))))
}
