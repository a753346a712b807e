use crate::core::client::IpSetSource;
use crate::core::collector;
use crate::core::config::Config;
use crate::core::errors::Result;
use crate::core::json::IpSet;
use crate::core::planner::{Plan, Planner};
use crate::core::reference_set::ReferenceSet;
use crate::core::update::UpdateCommand;
use log::info;

/*-------------------------------------------------------------------------------------------------
  Reconciliation
-------------------------------------------------------------------------------------------------*/

/// Everything a run produces: the IPSet snapshot (when fetched), the plan, and the update
/// command for the accepted networks.
#[derive(Clone, Debug)]
pub struct Reconciliation {
    pub reference_set: Option<ReferenceSet>,
    pub ip_set: Option<IpSet>,
    pub plan: Plan,
    pub command: UpdateCommand,
}

impl Reconciliation {
    /// The update command, or `None` when there is nothing to update.
    pub fn update_command(&self) -> Option<&UpdateCommand> {
        if self.plan.is_empty() {
            None
        } else {
            Some(&self.command)
        }
    }
}

/// Reconcile the configured input against the live IPSet.
///
/// The IPSet is fetched at most once, before any token is collected or processed; a fetch or
/// input failure ends the run.
pub fn reconcile<S: IpSetSource + ?Sized>(config: &Config, source: &S) -> Result<Reconciliation> {
    let ip_set = match config.remote_ip_set() {
        Some((ip_set_id, region)) => Some(source.get_ip_set(ip_set_id, region)?),
        None => {
            info!("No IPSet comparison in effect; all valid networks are candidates");
            None
        }
    };
    let reference_set = ip_set.as_ref().map(IpSet::reference_set);

    let tokens = collector::collect(config)?;
    info!("Collected {} token(s)", tokens.len());

    let plan = Planner::new(reference_set.as_ref()).plan(&tokens);
    let command = UpdateCommand::new(config, plan.updates());

    Ok(Reconciliation {
        reference_set,
        ip_set,
        plan,
        command,
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
