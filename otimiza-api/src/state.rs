use std::sync::Arc;

use otimiza_catalog::Catalog;
use otimiza_core::{CalculationRepository, CalculatorService};

#[derive(Clone)]
pub struct AppState {
    pub calculator: CalculatorService,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CalculationRepository>, catalog: Catalog) -> Self {
        Self {
            calculator: CalculatorService::new(repo),
            catalog: Arc::new(catalog),
        }
    }
}
