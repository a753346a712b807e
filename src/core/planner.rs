use crate::core::errors::TokenError;
use crate::core::network::{validate_ipv4_network, validate_ipv6_network};
use crate::core::range::summarize_range;
use crate::core::reference_set::ReferenceSet;
use crate::core::token::TokenShape;
use ipnetwork::{Ipv4Network, Ipv6Network};
use log::{debug, trace};

/*-------------------------------------------------------------------------------------------------
  Dispositions
-------------------------------------------------------------------------------------------------*/

/// Outcome of a single IPv4 network candidate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// Valid and not already in the IPSet; will be inserted.
    Accepted(Ipv4Network),

    /// Valid but already present in the IPSet.
    Duplicate(Ipv4Network),

    /// Not a valid, globally routable IPv4 network.
    Rejected(TokenError),
}

impl Disposition {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Disposition::Accepted(_))
    }
}

/// An IPv4 network candidate, either an input token or one block of a summarized range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Token as given, or the canonical form of a summarized block.
    pub token: String,
    pub disposition: Disposition,
}

/// One processed input token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    /// A single IPv4 address or CIDR block.
    Network(Candidate),

    /// An IPv4 range and the candidates it was summarized into.
    Range {
        token: String,
        result: Result<Vec<Candidate>, TokenError>,
    },

    /// An IPv6 network; validated for information only, never submitted.
    Ipv6 {
        token: String,
        result: Result<Ipv6Network, TokenError>,
    },
}

impl Entry {
    pub fn token(&self) -> &str {
        match self {
            Entry::Network(candidate) => &candidate.token,
            Entry::Range { token, .. } | Entry::Ipv6 { token, .. } => token,
        }
    }

    /// IPv4 candidates produced by this entry.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Entry::Network(candidate) => std::slice::from_ref(candidate),
            Entry::Range {
                result: Ok(candidates),
                ..
            } => candidates,
            _ => &[],
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Plan
-------------------------------------------------------------------------------------------------*/

/// Per-outcome counts over all IPv4 candidates, failed ranges, and IPv6 entries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub accepted: usize,
    pub duplicate: usize,
    pub rejected: usize,
    pub ipv6: usize,
}

/// The result of planning an IPSet update.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Plan {
    entries: Vec<Entry>,
    updates: Vec<Ipv4Network>,
}

impl Plan {
    /// Processed input tokens, in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Accepted networks, in encounter order.
    pub fn updates(&self) -> &[Ipv4Network] {
        &self.updates
    }

    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    /// Whether there is nothing to insert.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Number of input tokens provided.
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for entry in &self.entries {
            match entry {
                Entry::Ipv6 { .. } => tally.ipv6 += 1,
                Entry::Range { result: Err(_), .. } => tally.rejected += 1,
                _ => {
                    for candidate in entry.candidates() {
                        match candidate.disposition {
                            Disposition::Accepted(_) => tally.accepted += 1,
                            Disposition::Duplicate(_) => tally.duplicate += 1,
                            Disposition::Rejected(_) => tally.rejected += 1,
                        }
                    }
                }
            }
        }
        tally
    }
}

/*-------------------------------------------------------------------------------------------------
  Planner
-------------------------------------------------------------------------------------------------*/

/// Drives validation, summarization, and membership checks over the candidate tokens.
///
/// When a reference set is supplied, valid networks already in it are reported as duplicates.
/// Without one (dry runs, or no IPSet to compare against) every valid network is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planner<'r> {
    reference_set: Option<&'r ReferenceSet>,
}

impl<'r> Planner<'r> {
    pub fn new(reference_set: Option<&'r ReferenceSet>) -> Self {
        Self { reference_set }
    }

    /// Process all tokens in order and collect the accepted networks.
    ///
    /// ```
    /// let ip_set = wafipset::ReferenceSet::new(["1.1.1.1/32"]);
    /// let tokens = ["8.8.8.8/32", "10.0.0.0/8", "1.1.1.1/32"];
    ///
    /// let plan = wafipset::Planner::new(Some(&ip_set)).plan(&tokens);
    /// assert_eq!(plan.update_count(), 1);
    /// assert_eq!(plan.updates()[0].to_string(), "8.8.8.8/32");
    /// ```
    pub fn plan<S: AsRef<str>>(&self, tokens: &[S]) -> Plan {
        let mut plan = Plan::default();

        for token in tokens {
            let entry = self.process(token.as_ref());
            plan.updates.extend(
                entry
                    .candidates()
                    .iter()
                    .filter_map(|candidate| match candidate.disposition {
                        Disposition::Accepted(network) => Some(network),
                        _ => None,
                    }),
            );
            plan.entries.push(entry);
        }

        debug!(
            "Planned {} update(s) from {} token(s)",
            plan.update_count(),
            plan.token_count()
        );
        plan
    }

    /// Process a single token.
    pub fn process(&self, token: &str) -> Entry {
        let shape = TokenShape::classify(token);
        trace!("Token {token:?} classified as {shape:?}");

        match shape {
            TokenShape::Range => Entry::Range {
                token: token.to_string(),
                result: summarize_range(token).map(|networks| {
                    networks
                        .iter()
                        .map(|network| self.candidate(&network.to_string()))
                        .collect()
                }),
            },
            TokenShape::Ipv6 => Entry::Ipv6 {
                token: token.to_string(),
                result: validate_ipv6_network(token),
            },
            TokenShape::Ipv4 => Entry::Network(self.candidate(token)),
        }
    }

    fn candidate(&self, token: &str) -> Candidate {
        Candidate {
            token: token.to_string(),
            disposition: self.disposition(token),
        }
    }

    fn disposition(&self, token: &str) -> Disposition {
        match validate_ipv4_network(token) {
            Err(error) => Disposition::Rejected(error),
            Ok(network) => match self.reference_set {
                Some(reference_set) if reference_set.contains(&network) => {
                    Disposition::Duplicate(network)
                }
                _ => Disposition::Accepted(network),
            },
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
