use crate::core::errors::{Error, Result};
use crate::core::json::{self, IpSet};
use log::{debug, info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/*-------------------------------------------------------------------------------------------------
  IPSet Source
-------------------------------------------------------------------------------------------------*/

/// Anything that can retrieve the current contents of a WAF regional IPSet.
pub trait IpSetSource {
    fn get_ip_set(&self, ip_set_id: &str, region: &str) -> Result<IpSet>;
}

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct.
///
/// ```
/// let client = wafipset::ClientBuilder::new()
///     .aws_cli("/usr/local/bin/aws")
///     .profile("security-audit")
///     .build();
///
/// assert_eq!(client.aws_cli(), std::path::Path::new("/usr/local/bin/aws"));
/// assert_eq!(client.profile(), Some("security-audit"));
/// ```
///
/// The [ClientBuilder::new] method sources initial values from environment variables when set.
/// Use [ClientBuilder::default] to ignore the environment.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    aws_cli: PathBuf,
    profile: Option<String>,
}

/*--------------------------------------------------------------------------------------
  Client Builder Implementation
--------------------------------------------------------------------------------------*/

impl Default for ClientBuilder {
    /// Create a new [ClientBuilder] with default configuration values.
    ///
    /// ```
    /// let client = wafipset::ClientBuilder::default().build();
    ///
    /// assert_eq!(client.aws_cli(), std::path::Path::new("aws"));
    /// assert_eq!(client.profile(), None);
    /// ```
    fn default() -> Self {
        Self {
            aws_cli: PathBuf::from("aws"),
            profile: None,
        }
    }
}

impl ClientBuilder {
    /// Create a new [ClientBuilder] reading initial configuration values from
    /// environment variables when set and default values when they are not.
    ///
    /// The environment variables used are:
    /// - `WAFIPSET_AWS_CLI`
    /// - `WAFIPSET_AWS_PROFILE`
    pub fn new() -> Self {
        let default = ClientBuilder::default();

        Self {
            aws_cli: get_env_var("WAFIPSET_AWS_CLI", default.aws_cli),
            profile: env::var("WAFIPSET_AWS_PROFILE")
                .ok()
                .filter(|profile| !profile.is_empty())
                .inspect(|profile| info!("Using WAFIPSET_AWS_PROFILE: {}", profile))
                .or(default.profile),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the AWS CLI program used to query WAF; defaults to `aws` on the `PATH`.
    pub fn aws_cli<P: AsRef<Path>>(&mut self, aws_cli: P) -> &mut Self {
        self.aws_cli = aws_cli.as_ref().to_path_buf();
        self
    }

    /// Set the named AWS CLI profile passed as `--profile`.
    pub fn profile(&mut self, profile: &str) -> &mut Self {
        self.profile = Some(profile.to_string());
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Client {
        Client {
            aws_cli: self.aws_cli.clone(),
            profile: self.profile.clone(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// Retrieves WAF regional IPSets through the AWS CLI
/// (`aws waf-regional get-ip-set --output json`).
///
/// The client only reads; it never calls `update-ip-set`.
#[derive(Debug, Clone)]
pub struct Client {
    aws_cli: PathBuf,
    profile: Option<String>,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Default for Client {
    fn default() -> Self {
        ClientBuilder::default().build()
    }
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn aws_cli(&self) -> &Path {
        &self.aws_cli
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn get_ip_set_args<'a>(&'a self, ip_set_id: &'a str, region: &'a str) -> Vec<&'a str> {
        let mut args = vec![
            "waf-regional",
            "get-ip-set",
            "--ip-set-id",
            ip_set_id,
            "--region",
            region,
            "--output",
            "json",
        ];
        if let Some(profile) = &self.profile {
            args.extend(["--profile", profile.as_str()]);
        }
        args
    }
}

impl IpSetSource for Client {
    fn get_ip_set(&self, ip_set_id: &str, region: &str) -> Result<IpSet> {
        let args = self.get_ip_set_args(ip_set_id, region);
        info!("Get WAF IPSet: {:?} {}", self.aws_cli, args.join(" "));

        let output = Command::new(&self.aws_cli)
            .args(&args)
            .output()
            .map_err(|error| {
                Error::Remote(format!("unable to run {:?}: {}", self.aws_cli, error))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("Get WAF IPSet failed with {}", output.status);
            return Err(Error::Remote(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Get WAF IPSet response: {} bytes", stdout.len());

        let ip_set = json::parse(&stdout).map_err(|error| Error::Remote(error.to_string()))?;
        info!(
            "Successfully retrieved WAF IPSet {} ({} descriptor(s))",
            ip_set.ip_set_id,
            ip_set.descriptors.len()
        );
        Ok(ip_set)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use env::VarError;
    use test_log::test;

    /*-------------------------------------------------------------------------
      Test Environment Variable Configuration
    -------------------------------------------------------------------------*/

    /// ENV_VAR: WAFIPSET_AWS_CLI
    /// ENV_VAR: WAFIPSET_AWS_PROFILE
    #[test]
    fn test_environment_variable_configuration() {
        let test_env_vars = [
            ("WAFIPSET_AWS_CLI", "/opt/aws/bin/aws"),
            ("WAFIPSET_AWS_PROFILE", "waf-admin"),
        ];

        let default = Client::default();

        // Store environment variable values
        let stored_env_vars: Vec<(String, std::result::Result<String, VarError>)> = test_env_vars
            .iter()
            .map(|(env_var, _)| (env_var.to_string(), env::var(env_var)))
            .collect();

        // Unset all environment variables
        test_env_vars
            .iter()
            .for_each(|(env_var, _)| env::remove_var(env_var));

        // Test default cases
        let new = Client::new();
        assert_eq!(new.aws_cli(), default.aws_cli());
        assert_eq!(new.profile(), default.profile());

        // Set all environment variables
        for (env_var, value) in test_env_vars.iter() {
            env::set_var(env_var, value);
        }

        // Test environment variable configuration
        let env_config = Client::new();
        assert_eq!(env_config.aws_cli(), Path::new("/opt/aws/bin/aws"));
        assert_eq!(env_config.profile(), Some("waf-admin"));

        // Reset environment variables
        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => env::set_var(env_var, value),
                Err(VarError::NotPresent) => env::remove_var(env_var),
                Err(VarError::NotUnicode(value)) => env::set_var(env_var, value),
            }
        }
    }

    /*-------------------------------------------------------------------------
      Test Getter and Setter Methods
    -------------------------------------------------------------------------*/

    #[test]
    fn test_getter_and_setter_methods() {
        let client = ClientBuilder::default()
            .aws_cli("./scratch/aws")
            .profile("readonly")
            .build();

        assert_eq!(client.aws_cli(), PathBuf::from("./scratch/aws"));
        assert_eq!(client.profile(), Some("readonly"));
    }

    #[test]
    fn test_get_ip_set_args() {
        let client = ClientBuilder::default().build();
        assert_eq!(
            client.get_ip_set_args("abc-123", "us-east-1").join(" "),
            "waf-regional get-ip-set --ip-set-id abc-123 --region us-east-1 --output json"
        );

        let client = ClientBuilder::default().profile("prod").build();
        assert!(client
            .get_ip_set_args("abc-123", "us-east-1")
            .join(" ")
            .ends_with("--output json --profile prod"));
    }

    /*-------------------------------------------------------------------------
      Test IPSet Retrieval
    -------------------------------------------------------------------------*/

    #[test]
    fn test_get_ip_set_missing_program() {
        let directory = tempfile::tempdir().unwrap();
        let client = ClientBuilder::default()
            .aws_cli(directory.path().join("no-such-aws"))
            .build();

        let error = client.get_ip_set("abc-123", "us-east-1").unwrap_err();
        assert!(matches!(error, Error::Remote(_)));
    }

    #[cfg(unix)]
    mod stub_aws_cli {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use test_log::test;

        fn write_stub(directory: &Path, body: &str) -> PathBuf {
            let path = directory.join("aws");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_get_ip_set_from_stub() {
            let directory = tempfile::tempdir().unwrap();
            let aws_cli = write_stub(
                directory.path(),
                r#"cat <<'EOF'
{"IPSet": {"IPSetId": "abc-123", "Name": "allow", "IPSetDescriptors": [{"Type": "IPV4", "Value": "1.1.1.1/32"}]}}
EOF"#,
            );
            let client = ClientBuilder::default().aws_cli(&aws_cli).build();

            let ip_set = client
                .get_ip_set("abc-123", "us-east-1")
                .inspect_err(log_error)
                .unwrap();
            assert_eq!(ip_set.ip_set_id, "abc-123");
            assert_eq!(ip_set.reference_set().values(), ["1.1.1.1/32"]);
        }

        #[test]
        fn test_get_ip_set_service_error() {
            let directory = tempfile::tempdir().unwrap();
            let aws_cli = write_stub(
                directory.path(),
                "echo 'An error occurred (WAFNonexistentItemException) when calling the GetIPSet operation' >&2\nexit 254",
            );
            let client = ClientBuilder::default().aws_cli(&aws_cli).build();

            match client.get_ip_set("abc-123", "us-east-1") {
                Err(Error::Remote(message)) => {
                    assert!(message.contains("WAFNonexistentItemException"))
                }
                other => panic!("expected a remote error, got {other:?}"),
            }
        }

        #[test]
        fn test_get_ip_set_unparsable_output() {
            let directory = tempfile::tempdir().unwrap();
            let aws_cli = write_stub(directory.path(), "echo 'not json'");
            let client = ClientBuilder::default().aws_cli(&aws_cli).build();

            let error = client.get_ip_set("abc-123", "us-east-1").unwrap_err();
            assert!(matches!(error, Error::Remote(_)));
        }
    }
}
