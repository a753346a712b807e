use log::{info, warn};
use wafipset::Reconciliation;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Reconciliation Results
--------------------------------------------------------------------------------------*/

pub fn reconciliation(reconciliation: &Reconciliation) {
    if let Some(ip_set) = &reconciliation.ip_set {
        let name = ip_set.name.as_deref().unwrap_or("unnamed");
        info!(
            "Compared against WAF IPSet {} ({name}) with {} descriptor(s)",
            ip_set.ip_set_id,
            ip_set.descriptors.len()
        );
    }

    let tally = reconciliation.plan.tally();
    info!(
        "Processed {} token(s): {} to insert, {} already present",
        reconciliation.plan.token_count(),
        tally.accepted,
        tally.duplicate
    );

    if tally.rejected > 0 {
        warn!("Excluded {} invalid or non-global network(s)", tally.rejected);
    }

    if tally.ipv6 > 0 {
        warn!("Ignored {} IPv6 network(s); IPv6 updates are not generated", tally.ipv6);
    }
}
