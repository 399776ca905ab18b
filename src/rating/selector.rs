//! Rule-chained rate selector.

use std::sync::Arc;

use super::rules::{DestinationStateMatch, OriginStateMatch, PreferredCarrier, ServiceMatch};
use super::RateRule;
use crate::config::OptimizationSettings;
use crate::models::{CarrierRate, Shipment};

/// Picks the cheapest rate accepted by every rule in its chain.
///
/// # Tie-breaking
/// Among equally priced offers, the first in catalog order wins.
///
/// # Example
/// ```
/// use u_loadplan::rating::RateSelector;
/// use u_loadplan::rating::rules::ServiceMatch;
///
/// let standard = RateSelector::standard();
/// assert_eq!(standard.rule_names(), vec!["CARRIER", "MODE", "ORIGIN", "DESTINATION"]);
///
/// let mode_only = RateSelector::new().with_rule(ServiceMatch);
/// assert_eq!(mode_only.rule_names(), vec!["MODE"]);
/// ```
#[derive(Clone)]
pub struct RateSelector {
    rules: Vec<Arc<dyn RateRule>>,
}

impl RateSelector {
    /// Creates a selector with no rules (every rate is compatible).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates the standard chain: carrier, mode, origin, destination.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(PreferredCarrier)
            .with_rule(ServiceMatch)
            .with_rule(OriginStateMatch)
            .with_rule(DestinationStateMatch)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: RateRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules in chain order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Whether every rule accepts `rate` for `shipment`.
    pub fn is_compatible(
        &self,
        rate: &CarrierRate,
        shipment: &Shipment,
        settings: &OptimizationSettings,
    ) -> bool {
        self.rules
            .iter()
            .all(|rule| rule.accepts(rate, shipment, settings))
    }

    /// Compatible rates in catalog order.
    pub fn compatible<'a>(
        &'a self,
        shipment: &'a Shipment,
        rates: &'a [CarrierRate],
        settings: &'a OptimizationSettings,
    ) -> impl Iterator<Item = &'a CarrierRate> + 'a {
        rates
            .iter()
            .filter(move |rate| self.is_compatible(rate, shipment, settings))
    }

    /// Cheapest compatible rate, or `None` when nothing is compatible.
    ///
    /// A later offer replaces the current best only when strictly cheaper,
    /// so the earliest minimal offer is kept.
    pub fn select_best<'a>(
        &self,
        shipment: &Shipment,
        rates: &'a [CarrierRate],
        settings: &OptimizationSettings,
    ) -> Option<&'a CarrierRate> {
        let mut best: Option<&'a CarrierRate> = None;
        for rate in rates {
            if !self.is_compatible(rate, shipment, settings) {
                continue;
            }
            match best {
                None => best = Some(rate),
                Some(current) if rate.rate < current.rate => best = Some(rate),
                Some(_) => {}
            }
        }
        best
    }
}

impl Default for RateSelector {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RateSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateSelector")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Cheapest rate compatible with `shipment` under the standard rule chain.
pub fn select_best_rate<'a>(
    shipment: &Shipment,
    rates: &'a [CarrierRate],
    settings: &OptimizationSettings,
) -> Option<&'a CarrierRate> {
    RateSelector::standard().select_best(shipment, rates, settings)
}
