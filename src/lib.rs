//! Validate an IP allowlist against an AWS WAF regional IPSet and build the
//! `aws waf-regional update-ip-set` command that inserts the missing networks.
//!
//! ```
//! let config = wafipset::Config {
//!     dry_run: true,
//!     ..wafipset::Config::new(wafipset::Input::List("8.8.8.8,10.0.0.0/8,1.1.1.0-1.1.1.3".into()))
//! };
//!
//! let reconciliation = wafipset::reconcile(&config, &wafipset::Client::default())?;
//! assert_eq!(reconciliation.plan.update_count(), 2);
//! # Ok::<(), wafipset::Error>(())
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::client::{Client, ClientBuilder, IpSetSource};
pub use crate::core::collector::{collect, collect_from_file, collect_from_text};
pub use crate::core::config::{Config, Input};
pub use crate::core::errors::{Error, ErrorKind, Result, TokenError};
pub use crate::core::json::{IpSet, IpSetDescriptor};
pub use crate::core::network::{validate_ipv4_network, validate_ipv6_network};
pub use crate::core::planner::{Candidate, Disposition, Entry, Plan, Planner, Tally};
pub use crate::core::range::summarize_range;
pub use crate::core::reconcile::{reconcile, Reconciliation};
pub use crate::core::reference_set::ReferenceSet;
pub use crate::core::special_purpose::SpecialPurpose;
pub use crate::core::token::TokenShape;
pub use crate::core::update::UpdateCommand;

// Re-export the ipnetwork crate
pub use ipnetwork;
