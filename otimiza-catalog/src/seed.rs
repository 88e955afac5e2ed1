//! Bundled reference data for the niche, supplier and trend finders.

use otimiza_shared::{Niche, Supplier, Trend};

#[allow(clippy::too_many_arguments)]
fn niche(
    id: &str,
    nome: &str,
    categoria: &str,
    demanda: &str,
    competicao: &str,
    rentabilidade: &str,
    tendencia: &str,
    descricao: &str,
) -> Niche {
    Niche {
        id: id.to_string(),
        nome: nome.to_string(),
        categoria: categoria.to_string(),
        demanda: demanda.to_string(),
        competicao: competicao.to_string(),
        rentabilidade: rentabilidade.to_string(),
        tendencia: tendencia.to_string(),
        descricao: descricao.to_string(),
    }
}

pub fn niches() -> Vec<Niche> {
    vec![
        niche(
            "1",
            "Produtos para Pets",
            "Animais",
            "Alta",
            "Média",
            "Alta",
            "Crescendo",
            "Mercado em crescimento com foco em bem-estar animal",
        ),
        niche(
            "2",
            "Fitness em Casa",
            "Saúde",
            "Muito Alta",
            "Alta",
            "Média",
            "Estável",
            "Equipamentos e acessórios para exercícios domésticos",
        ),
        niche(
            "3",
            "Produtos Sustentáveis",
            "Eco-friendly",
            "Crescendo",
            "Baixa",
            "Alta",
            "Crescendo",
            "Produtos ecológicos e sustentáveis para consumo consciente",
        ),
        niche(
            "4",
            "Tech Gadgets",
            "Tecnologia",
            "Alta",
            "Muito Alta",
            "Baixa",
            "Estável",
            "Gadgets e acessórios tecnológicos inovadores",
        ),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            nome: "TechSupply Brasil".to_string(),
            categoria: "Eletrônicos".to_string(),
            localizacao: "São Paulo, SP".to_string(),
            avaliacao: 4.8,
            produtos_principais: vec![
                "Smartphones".to_string(),
                "Fones de Ouvido".to_string(),
                "Capas".to_string(),
            ],
            contato: "contato@techsupply.com.br".to_string(),
            preco_minimo: "R$ 500,00".to_string(),
        },
        Supplier {
            id: "2".to_string(),
            nome: "PetWorld Fornecedor".to_string(),
            categoria: "Pet Shop".to_string(),
            localizacao: "Rio de Janeiro, RJ".to_string(),
            avaliacao: 4.6,
            produtos_principais: vec![
                "Ração".to_string(),
                "Brinquedos".to_string(),
                "Acessórios".to_string(),
            ],
            contato: "vendas@petworld.com.br".to_string(),
            preco_minimo: "R$ 200,00".to_string(),
        },
        Supplier {
            id: "3".to_string(),
            nome: "EcoVerde Distribuidora".to_string(),
            categoria: "Sustentabilidade".to_string(),
            localizacao: "Curitiba, PR".to_string(),
            avaliacao: 4.9,
            produtos_principais: vec![
                "Produtos Biodegradáveis".to_string(),
                "Cosméticos Naturais".to_string(),
            ],
            contato: "eco@ecoverde.com.br".to_string(),
            preco_minimo: "R$ 300,00".to_string(),
        },
    ]
}

fn trend(
    id: &str,
    produto: &str,
    categoria: &str,
    crescimento: &str,
    volume_busca: &str,
    sazonalidade: &str,
    oportunidade: &str,
) -> Trend {
    Trend {
        id: id.to_string(),
        produto: produto.to_string(),
        categoria: categoria.to_string(),
        crescimento: crescimento.to_string(),
        volume_busca: volume_busca.to_string(),
        sazonalidade: sazonalidade.to_string(),
        oportunidade: oportunidade.to_string(),
    }
}

pub fn trends() -> Vec<Trend> {
    vec![
        trend("1", "Air Fryer", "Eletrodomésticos", "+150%", "500k/mês", "Baixa", "Alta"),
        trend("2", "Plantas Artificiais", "Decoração", "+80%", "200k/mês", "Média", "Média"),
        trend("3", "Produtos para Home Office", "Trabalho", "+200%", "800k/mês", "Baixa", "Muito Alta"),
    ]
}
