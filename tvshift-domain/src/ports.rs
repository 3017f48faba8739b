use std::collections::BTreeMap;
use tracing::warn;
use tvshift_types::warning::Warning;

/// Sink for the non-fatal advisories a retarget pass raises.
///
/// The pass never fails; anything a developer should hear about lands here.
/// tvshift-domain uses the trait so hosts can route advisories into their own
/// diagnostics channel instead of the collecting aggregator.
pub trait WarningSink {
    fn add_warning(&mut self, category: &str, message: String);
}

/// Collecting `WarningSink`, keyed by category tag.
///
/// Messages keep their insertion order within a category. Each message is also
/// echoed through `tracing` as it lands, so a host with a subscriber installed
/// sees advisories live rather than only at drain time.
#[derive(Debug, Clone, Default)]
pub struct WarningAggregator {
    by_category: BTreeMap<String, Vec<String>>,
}

impl WarningAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Messages recorded under `category`, in insertion order.
    pub fn for_category(&self, category: &str) -> &[String] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flatten into `Warning` DTOs, ordered by category and then insertion order.
    pub fn into_warnings(self) -> Vec<Warning> {
        let mut out = Vec::new();
        for (category, messages) in self.by_category {
            for message in messages {
                out.push(Warning {
                    category: category.clone(),
                    message,
                });
            }
        }
        out
    }
}

impl WarningSink for WarningAggregator {
    fn add_warning(&mut self, category: &str, message: String) {
        warn!(category = %category, "{}", message);
        self.by_category
            .entry(category.to_string())
            .or_default()
            .push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aggregator_keeps_insertion_order_per_category() {
        let mut sink = WarningAggregator::new();
        sink.add_warning("xcodeproject", "first".to_string());
        sink.add_warning("xcodeproject", "second".to_string());
        sink.add_warning("other", "third".to_string());

        assert_eq!(sink.for_category("xcodeproject"), ["first", "second"]);
        assert_eq!(sink.for_category("missing"), [] as [&str; 0]);

        let warnings = sink.into_warnings();
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0].category, "other");
        assert_eq!(warnings[1].message, "first");
        assert_eq!(warnings[2].message, "second");
    }
}
