//! Template categories and their file-name derivation.
//!
//! Category tables are fixed so every run visits destinations in the same
//! order.

use heck::ToSnakeCase;

/// Highest dimensionality still generated for the deprecated virtual metric.
pub const DEPRECATED_CEILING: u32 = 7;

/// A template rendered once per dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCategory {
    /// Base name of the generated type, `EventMetric`.
    pub base: &'static str,
    /// Generation stops above this dimensionality, when set.
    pub ceiling: Option<u32>,
}

impl MetricCategory {
    /// Template file name under the template directory.
    pub fn template_file_name(&self) -> String {
        format!("{}.rs.tmpl", self.base.to_snake_case())
    }

    /// Destination file name for one dimensionality, `event_metric3.rs`.
    pub fn dest_file_name(&self, dimensionality: u32) -> String {
        format!("{}{}.rs", self.base.to_snake_case(), dimensionality)
    }

    /// Whether this category is generated at the given dimensionality.
    pub fn applies_to(&self, dimensionality: u32) -> bool {
        self.ceiling.map_or(true, |ceiling| dimensionality <= ceiling)
    }
}

/// A template rendered once per run, fed by per-dimensionality fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCategory {
    /// Base name of the generated type, `MetricFactory`.
    pub base: &'static str,
}

impl AggregateCategory {
    /// Final template file name under the template directory.
    pub fn template_file_name(&self) -> String {
        format!("{}.rs.tmpl", self.base.to_snake_case())
    }

    /// Fragment template file name, rendered once per dimensionality.
    pub fn fragment_file_name(&self) -> String {
        format!("{}.methods.rs.tmpl", self.base.to_snake_case())
    }

    /// Destination file name, `metric_factory.rs`.
    pub fn dest_file_name(&self) -> String {
        format!("{}.rs", self.base.to_snake_case())
    }
}

/// Per-dimensionality categories, in generation order.
pub const CATEGORIES: [MetricCategory; 5] = [
    MetricCategory { base: "Metric", ceiling: None },
    MetricCategory { base: "CallbackMetric", ceiling: None },
    MetricCategory { base: "Counter", ceiling: None },
    MetricCategory { base: "EventMetric", ceiling: None },
    MetricCategory { base: "VirtualMetric", ceiling: Some(DEPRECATED_CEILING) },
];

/// Aggregate categories, emitted after the dimensionality loop.
pub const AGGREGATES: [AggregateCategory; 1] = [AggregateCategory { base: "MetricFactory" }];
