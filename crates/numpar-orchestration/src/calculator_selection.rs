//! Calculator selection logic.

use std::sync::Arc;

use numpar_core::calculator::{NumError, PiCalculator};
use numpar_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn PiCalculator>>, NumError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numpar_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory).unwrap();
        let names: Vec<&str> = calcs.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["ParallelMidpoint", "SequentialMidpoint"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("sequential", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "SequentialMidpoint");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_calculators_to_run("unknown", &factory),
            Err(NumError::Config(_))
        ));
    }
}
