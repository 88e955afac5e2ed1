use serde::{Deserialize, Serialize};

/// A market niche suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Niche {
    pub id: String,
    pub nome: String,
    pub categoria: String,
    pub demanda: String,
    pub competicao: String,
    pub rentabilidade: String,
    pub tendencia: String,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub nome: String,
    pub categoria: String,
    pub localizacao: String,
    pub avaliacao: f64,
    pub produtos_principais: Vec<String>,
    pub contato: String,
    /// Pre-formatted, e.g. "R$ 500,00"
    pub preco_minimo: String,
}

/// A trending product. Growth and search volume are display strings ("+150%", "500k/mês").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub id: String,
    pub produto: String,
    pub categoria: String,
    pub crescimento: String,
    pub volume_busca: String,
    pub sazonalidade: String,
    pub oportunidade: String,
}
