use ipnetwork::Ipv4Network;
use std::collections::HashSet;

/*-------------------------------------------------------------------------------------------------
  Reference Set
-------------------------------------------------------------------------------------------------*/

/// Snapshot of the networks currently held by a WAF IPSet.
///
/// Membership is an exact match on the canonical `a.b.c.d/n` text form; a candidate `/23` is
/// neither contained in nor containing an existing `/24`.
#[derive(Clone, Debug, Default)]
pub struct ReferenceSet {
    values: Vec<String>,
    lookup: HashSet<String>,
}

impl ReferenceSet {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let lookup = values.iter().cloned().collect();
        Self { values, lookup }
    }

    /// Values in the order the IPSet returned them.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Test whether a network, in canonical text form, is already in the set.
    ///
    /// ```
    /// let ip_set = wafipset::ReferenceSet::new(["1.2.3.4/32", "5.6.7.8/32"]);
    /// assert!(ip_set.contains(&"1.2.3.4/32".parse().unwrap()));
    /// assert!(!ip_set.contains(&"1.2.3.0/24".parse().unwrap()));
    /// ```
    pub fn contains(&self, network: &Ipv4Network) -> bool {
        self.contains_str(&network.to_string())
    }

    pub fn contains_str(&self, value: &str) -> bool {
        self.lookup.contains(value)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    fn network(value: &str) -> Ipv4Network {
        value.parse().unwrap()
    }

    #[test]
    fn test_exact_membership() {
        let reference_set = ReferenceSet::new(["1.2.3.4/32", "5.6.7.8/32"]);
        assert!(reference_set.contains(&network("1.2.3.4/32")));
        assert!(reference_set.contains(&network("1.2.3.4")));

        let reference_set = ReferenceSet::new(["5.6.7.8/32"]);
        assert!(!reference_set.contains(&network("1.2.3.4/32")));
    }

    #[test]
    fn test_membership_is_not_prefix_aware() {
        let reference_set = ReferenceSet::new(["52.10.0.0/24"]);
        assert!(!reference_set.contains(&network("52.10.0.0/23")));
        assert!(!reference_set.contains(&network("52.10.0.128/25")));
    }

    #[test]
    fn test_values_keep_order() {
        let reference_set = ReferenceSet::new(["9.9.9.9/32", "1.1.1.1/32", "9.9.9.9/32"]);
        assert_eq!(
            reference_set.values(),
            ["9.9.9.9/32", "1.1.1.1/32", "9.9.9.9/32"]
        );
        assert_eq!(reference_set.len(), 3);
        assert!(!reference_set.is_empty());
        assert!(ReferenceSet::default().is_empty());
    }
}
