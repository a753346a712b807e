use crate::core::errors::TokenError;
use crate::core::special_purpose;
use ipnetwork::{Ipv4Network, Ipv6Network};
use log::trace;

/*-------------------------------------------------------------------------------------------------
  Network Validation
-------------------------------------------------------------------------------------------------*/

/// Parse and validate an IPv4 network token.
///
/// A bare address is treated as a `/32`. The token must not have host bits set (`10.0.0.1/24` is
/// rejected) and the network must be globally routable.
///
/// ```
/// let network = wafipset::validate_ipv4_network("8.8.8.8").unwrap();
/// assert_eq!(network.to_string(), "8.8.8.8/32");
///
/// let rejected = wafipset::validate_ipv4_network("10.0.0.0/8").unwrap_err();
/// assert_eq!(rejected.kind(), wafipset::ErrorKind::Routability);
/// ```
pub fn validate_ipv4_network(token: &str) -> Result<Ipv4Network, TokenError> {
    let network = parse_ipv4_network(token)?;

    if let Some(purpose) = special_purpose::classify_network(&network) {
        trace!("{network} is a {purpose} network");
        return Err(TokenError::NotGlobal(purpose));
    }

    Ok(network)
}

/// Parse and validate an IPv6 network token. IPv6 networks are never submitted, so no
/// routability check is applied.
pub fn validate_ipv6_network(token: &str) -> Result<Ipv6Network, TokenError> {
    let network = token
        .parse::<Ipv6Network>()
        .map_err(|error| TokenError::ParseIpv6(error.to_string()))?;

    if network.ip() != network.network() {
        return Err(TokenError::ParseIpv6(format!("{token} has host bits set")));
    }

    Ok(network)
}

fn parse_ipv4_network(token: &str) -> Result<Ipv4Network, TokenError> {
    if token.is_empty() {
        return Err(TokenError::Parse("empty token".to_string()));
    }

    let network = token
        .parse::<Ipv4Network>()
        .map_err(|error| TokenError::Parse(error.to_string()))?;

    if network.ip() != network.network() {
        return Err(TokenError::Parse(format!("{token} has host bits set")));
    }

    Ok(network)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
