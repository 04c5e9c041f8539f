// src/usuarios/credenciais.rs

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;
use tracing::warn;

use super::usuario_structs::Usuario;

/// Tabela embutida usada quando nenhum arquivo de credenciais é configurado:
/// (username, senha, nome de exibição, desativado).
const USUARIOS_PADRAO: &[(&str, &str, &str, bool)] = &[
    ("alice", "secret", "Alice Wonderson", false),
    ("bob", "secret2", "Bob Builder", true),
];

#[derive(Debug, Error)]
pub enum ErroCredenciais {
    #[error("falha ao ler o arquivo de credenciais {caminho}: {fonte}")]
    Leitura {
        caminho: String,
        #[source]
        fonte: std::io::Error,
    },

    #[error("arquivo de credenciais malformado: {0}")]
    Formato(#[from] serde_json::Error),

    #[error("falha ao gerar hash da senha de {0}: {1}")]
    Hash(String, #[source] bcrypt::BcryptError),

    #[error("usuário duplicado na tabela de credenciais: {0}")]
    Duplicado(String),
}

/// Senha do hash usado quando o username não existe.
const SENHA_FICTICIA: &str = "usuario-inexistente";

/// Mapa imutável username -> credencial, carregado uma única vez na inicialização.
#[derive(Debug)]
pub struct RepositorioCredenciais {
    usuarios: HashMap<String, Usuario>,
    /// Verificado quando o username não existe, para que a resposta leve o
    /// mesmo tempo de uma senha incorreta.
    hash_ficticio: String,
}

impl RepositorioCredenciais {
    pub fn new(usuarios: impl IntoIterator<Item = Usuario>) -> Result<Self, ErroCredenciais> {
        let mut mapa = HashMap::new();
        for usuario in usuarios {
            if mapa.contains_key(&usuario.username) {
                return Err(ErroCredenciais::Duplicado(usuario.username));
            }
            mapa.insert(usuario.username.clone(), usuario);
        }

        let custo = mapa
            .values()
            .find_map(|usuario| custo_do_hash(&usuario.hashed_password))
            .unwrap_or(DEFAULT_COST);
        let hash_ficticio = hash(SENHA_FICTICIA, custo)
            .map_err(|e| ErroCredenciais::Hash(SENHA_FICTICIA.to_string(), e))?;

        Ok(Self {
            usuarios: mapa,
            hash_ficticio,
        })
    }

    /// Monta a tabela embutida, gerando os hashes com o custo bcrypt informado.
    pub fn padrao(custo: u32) -> Result<Self, ErroCredenciais> {
        let usuarios = USUARIOS_PADRAO
            .iter()
            .map(|&(username, senha, nome_exibicao, desativado)| -> Result<Usuario, ErroCredenciais> {
                let hashed_password = hash(senha, custo)
                    .map_err(|e| ErroCredenciais::Hash(username.to_string(), e))?;
                Ok(Usuario {
                    username: username.to_string(),
                    hashed_password,
                    nome_exibicao: nome_exibicao.to_string(),
                    desativado,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(usuarios)
    }

    /// Lê um array JSON de usuários com senhas já em hash.
    pub fn de_json(conteudo: &str) -> Result<Self, ErroCredenciais> {
        let usuarios: Vec<Usuario> = serde_json::from_str(conteudo)?;
        Self::new(usuarios)
    }

    pub fn de_arquivo(caminho: &Path) -> Result<Self, ErroCredenciais> {
        let conteudo = fs::read_to_string(caminho).map_err(|fonte| ErroCredenciais::Leitura {
            caminho: caminho.display().to_string(),
            fonte,
        })?;
        Self::de_json(&conteudo)
    }

    pub fn buscar(&self, username: &str) -> Option<&Usuario> {
        self.usuarios.get(username)
    }

    /// Verifica usuário e senha.
    ///
    /// Falha fechada: usuário ausente, senha incorreta, hash ilegível ou conta
    /// desativada retornam `None`. Username ausente também passa por um
    /// `bcrypt::verify`, contra `hash_ficticio`.
    pub fn autenticar(&self, username: &str, senha: &str) -> Option<Usuario> {
        let Some(usuario) = self.buscar(username) else {
            let _ = verify(senha, &self.hash_ficticio);
            return None;
        };

        match verify(senha, &usuario.hashed_password) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                warn!(username, erro = %e, "hash de senha ilegível na tabela de credenciais");
                return None;
            }
        }

        if usuario.desativado {
            warn!(username, "tentativa de login com conta desativada");
            return None;
        }

        Some(usuario.clone())
    }

    pub fn len(&self) -> usize {
        self.usuarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usuarios.is_empty()
    }
}

/// Custo de um hash no formato `$2b$12$...`, se for legível.
fn custo_do_hash(hash_senha: &str) -> Option<u32> {
    let custo: u32 = hash_senha.split('$').nth(2)?.parse().ok()?;
    (4..=31).contains(&custo).then_some(custo)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Custo mínimo aceito pelo bcrypt, para os testes não ficarem lentos.
    const CUSTO: u32 = 4;

    fn repositorio() -> RepositorioCredenciais {
        RepositorioCredenciais::padrao(CUSTO).unwrap()
    }

    #[test]
    fn autentica_usuario_ativo() {
        let usuario = repositorio().autenticar("alice", "secret").unwrap();

        assert_eq!(usuario.username, "alice");
        assert_eq!(usuario.nome_exibicao, "Alice Wonderson");
        assert!(!usuario.desativado);
    }

    #[test]
    fn senha_incorreta_retorna_none() {
        assert!(repositorio().autenticar("alice", "errada").is_none());
    }

    #[test]
    fn usuario_ausente_retorna_none() {
        assert!(repositorio().autenticar("mallory", "secret").is_none());
    }

    #[test]
    fn usuario_ausente_paga_o_mesmo_custo_bcrypt() {
        let repositorio = repositorio();
        let custo_real = custo_do_hash(&repositorio.buscar("alice").unwrap().hashed_password);

        assert_eq!(custo_real, Some(CUSTO));
        assert_eq!(custo_do_hash(&repositorio.hash_ficticio), custo_real);
        assert!(verify(SENHA_FICTICIA, &repositorio.hash_ficticio).unwrap());
        assert!(repositorio.autenticar("mallory", SENHA_FICTICIA).is_none());
    }

    #[test]
    fn custo_de_hash_ilegivel_e_ignorado() {
        assert_eq!(custo_do_hash("nao-e-um-hash"), None);
        assert_eq!(custo_do_hash("$2b$99$abc"), None);
        assert_eq!(custo_do_hash(""), None);
    }

    #[test]
    fn conta_desativada_retorna_none_mesmo_com_senha_correta() {
        let repositorio = repositorio();

        assert!(repositorio.buscar("bob").unwrap().desativado);
        assert!(repositorio.autenticar("bob", "secret2").is_none());
    }

    #[test]
    fn hash_ilegivel_falha_fechado() {
        let repositorio = RepositorioCredenciais::new([Usuario {
            username: "carol".to_string(),
            hashed_password: "nao-e-um-hash".to_string(),
            nome_exibicao: "Carol".to_string(),
            desativado: false,
        }])
        .unwrap();

        assert!(repositorio.autenticar("carol", "nao-e-um-hash").is_none());
    }

    #[test]
    fn senha_nao_fica_em_texto_claro() {
        let repositorio = repositorio();

        assert_ne!(repositorio.buscar("alice").unwrap().hashed_password, "secret");
    }

    #[test]
    fn carrega_usuarios_de_json() {
        let hash_senha = hash("segredo", CUSTO).unwrap();
        let conteudo = serde_json::json!([
            { "username": "dave", "hashed_password": hash_senha, "nome_exibicao": "Dave" },
        ])
        .to_string();

        let repositorio = RepositorioCredenciais::de_json(&conteudo).unwrap();

        assert_eq!(repositorio.len(), 1);
        assert!(repositorio.autenticar("dave", "segredo").is_some());
    }

    #[test]
    fn json_malformado_e_rejeitado() {
        let erro = RepositorioCredenciais::de_json("[{\"username\": 1}]").unwrap_err();

        assert!(matches!(erro, ErroCredenciais::Formato(_)));
    }

    #[test]
    fn usuario_duplicado_e_rejeitado() {
        let usuario = Usuario {
            username: "erin".to_string(),
            hashed_password: String::new(),
            nome_exibicao: "Erin".to_string(),
            desativado: false,
        };

        let erro = RepositorioCredenciais::new([usuario.clone(), usuario]).unwrap_err();

        assert!(matches!(erro, ErroCredenciais::Duplicado(nome) if nome == "erin"));
    }

    #[test]
    fn arquivo_inexistente_e_erro_de_leitura() {
        let erro =
            RepositorioCredenciais::de_arquivo(Path::new("/caminho/que/nao/existe.json")).unwrap_err();

        assert!(matches!(erro, ErroCredenciais::Leitura { .. }));
    }
}
