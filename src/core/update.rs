use crate::core::config::Config;
use ipnetwork::Ipv4Network;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Update Command
-------------------------------------------------------------------------------------------------*/

const REGION_PLACEHOLDER: &str = "<region>";
const IP_SET_ID_PLACEHOLDER: &str = "<ip-set-id>";
const CHANGE_TOKEN_PLACEHOLDER: &str = "<change-token>";

/// The `aws waf-regional update-ip-set` command that inserts the planned networks.
///
/// Missing identifiers are rendered as placeholders for the operator to fill in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateCommand {
    pub ip_set_id: Option<String>,
    pub region: Option<String>,
    pub change_token: Option<String>,
    pub networks: Vec<Ipv4Network>,
}

impl UpdateCommand {
    pub fn new(config: &Config, networks: &[Ipv4Network]) -> Self {
        Self {
            ip_set_id: config.ip_set_id.clone(),
            region: config.region.clone(),
            change_token: config.change_token.clone(),
            networks: networks.to_vec(),
        }
    }

    pub fn update_count(&self) -> usize {
        self.networks.len()
    }

    /// The space-separated list of `INSERT` directives.
    ///
    /// ```
    /// let config = wafipset::Config::new(wafipset::Input::List(String::new()));
    /// let networks = ["8.8.8.8/32".parse().unwrap()];
    /// let command = wafipset::UpdateCommand::new(&config, &networks);
    ///
    /// assert_eq!(
    ///     command.updates(),
    ///     r#"Action="INSERT",IPSetDescriptor='{Type="IPV4",Value="8.8.8.8/32"}'"#
    /// );
    /// ```
    pub fn updates(&self) -> String {
        self.networks
            .iter()
            .map(|network| {
                format!(r#"Action="INSERT",IPSetDescriptor='{{Type="IPV4",Value="{network}"}}'"#)
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// The command that requests a change token, when none was supplied.
    pub fn change_token_command(&self) -> Option<String> {
        match self.change_token {
            Some(_) => None,
            None => Some(format!(
                "aws waf-regional get-change-token --region {}",
                self.region()
            )),
        }
    }

    fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(REGION_PLACEHOLDER)
    }
}

impl fmt::Display for UpdateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aws waf-regional update-ip-set --region {} --ip-set-id {} --change-token {} --updates {}",
            self.region(),
            self.ip_set_id.as_deref().unwrap_or(IP_SET_ID_PLACEHOLDER),
            self.change_token
                .as_deref()
                .unwrap_or(CHANGE_TOKEN_PLACEHOLDER),
            self.updates()
        )
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Input;

    fn networks(values: &[&str]) -> Vec<Ipv4Network> {
        values.iter().map(|value| value.parse().unwrap()).collect()
    }

    #[test]
    fn test_update_command() {
        let config = Config {
            ip_set_id: Some("abc-123".to_string()),
            region: Some("us-east-1".to_string()),
            change_token: Some("token-1".to_string()),
            ..Config::new(Input::List(String::new()))
        };
        let command = UpdateCommand::new(&config, &networks(&["8.8.8.8/32", "52.94.0.0/22"]));

        assert_eq!(command.update_count(), 2);
        assert_eq!(
            command.to_string(),
            concat!(
                "aws waf-regional update-ip-set --region us-east-1 --ip-set-id abc-123 ",
                "--change-token token-1 --updates ",
                r#"Action="INSERT",IPSetDescriptor='{Type="IPV4",Value="8.8.8.8/32"}' "#,
                r#"Action="INSERT",IPSetDescriptor='{Type="IPV4",Value="52.94.0.0/22"}'"#,
            )
        );
        assert_eq!(command.change_token_command(), None);
    }

    #[test]
    fn test_update_command_placeholders() {
        let config = Config::new(Input::List(String::new()));
        let command = UpdateCommand::new(&config, &networks(&["8.8.8.8/32"]));

        assert!(command.to_string().starts_with(
            "aws waf-regional update-ip-set --region <region> --ip-set-id <ip-set-id> --change-token <change-token> --updates "
        ));
        assert_eq!(
            command.change_token_command().as_deref(),
            Some("aws waf-regional get-change-token --region <region>")
        );
    }

    #[test]
    fn test_change_token_command_uses_region() {
        let config = Config {
            region: Some("eu-west-1".to_string()),
            ..Config::new(Input::List(String::new()))
        };
        let command = UpdateCommand::new(&config, &[]);
        assert_eq!(
            command.change_token_command().as_deref(),
            Some("aws waf-regional get-change-token --region eu-west-1")
        );
        assert_eq!(command.updates(), "");
    }
}
