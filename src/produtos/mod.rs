// src/produtos/mod.rs

pub mod produtos_structs;
pub mod produtos_repositorio;
// Implementações do repositório: PostgreSQL e memória
pub mod repositorio_postgres;
pub mod repositorio_memoria;
pub mod produtos_router;
