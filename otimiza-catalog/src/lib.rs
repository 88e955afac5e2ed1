pub mod filter;
pub mod seed;

use otimiza_shared::{Niche, Supplier, Trend};
use tracing::debug;

use crate::filter::{exact, substring, TextFilter};

/// Read-only reference collections served by the finder endpoints.
///
/// Built once at startup; every query returns clones in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    niches: Vec<Niche>,
    suppliers: Vec<Supplier>,
    trends: Vec<Trend>,
}

impl Catalog {
    pub fn new(niches: Vec<Niche>, suppliers: Vec<Supplier>, trends: Vec<Trend>) -> Self {
        Self { niches, suppliers, trends }
    }

    /// Catalog preloaded with the bundled reference data.
    pub fn seeded() -> Self {
        Self::new(seed::niches(), seed::suppliers(), seed::trends())
    }

    /// Niches whose category equals `categoria`, ignoring case.
    pub fn list_niches(&self, categoria: Option<&str>) -> Vec<Niche> {
        let categoria = TextFilter::from_param(categoria);

        let niches: Vec<Niche> = self
            .niches
            .iter()
            .filter(|n| categoria.accepts(&n.categoria, exact))
            .cloned()
            .collect();

        debug!(count = niches.len(), "Listed niches");
        niches
    }

    /// Suppliers whose category and location contain the given fragments.
    /// Both filters must pass when both are set.
    pub fn list_suppliers(&self, categoria: Option<&str>, localizacao: Option<&str>) -> Vec<Supplier> {
        let categoria = TextFilter::from_param(categoria);
        let localizacao = TextFilter::from_param(localizacao);

        let suppliers: Vec<Supplier> = self
            .suppliers
            .iter()
            .filter(|s| categoria.accepts(&s.categoria, substring))
            .filter(|s| localizacao.accepts(&s.localizacao, substring))
            .cloned()
            .collect();

        debug!(count = suppliers.len(), "Listed suppliers");
        suppliers
    }

    /// Trends whose category contains `categoria`. Substring match, unlike niches.
    pub fn list_trends(&self, categoria: Option<&str>) -> Vec<Trend> {
        let categoria = TextFilter::from_param(categoria);

        let trends: Vec<Trend> = self
            .trends
            .iter()
            .filter(|t| categoria.accepts(&t.categoria, substring))
            .cloned()
            .collect();

        debug!(count = trends.len(), "Listed trends");
        trends
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
