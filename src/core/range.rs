use crate::core::errors::TokenError;
use ipnetwork::Ipv4Network;
use log::debug;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  IPv4 Range Summarization
-------------------------------------------------------------------------------------------------*/

/// Summarize an inclusive `start-end` IPv4 address range into the minimal list of
/// non-overlapping CIDR blocks that exactly cover it, in ascending order.
///
/// ```
/// let networks = wafipset::summarize_range("10.0.0.1-10.0.0.3").unwrap();
/// let networks: Vec<String> = networks.iter().map(|n| n.to_string()).collect();
/// assert_eq!(networks, ["10.0.0.1/32", "10.0.0.2/31"]);
/// ```
pub fn summarize_range(token: &str) -> Result<Vec<Ipv4Network>, TokenError> {
    let (start, end) = token.split_once('-').unwrap_or((token, ""));

    let start: Ipv4Addr = start
        .parse()
        .map_err(|error| TokenError::RangeStart(format!("{start:?}: {error}")))?;
    let end: Ipv4Addr = end
        .parse()
        .map_err(|error| TokenError::RangeEnd(format!("{end:?}: {error}")))?;

    if start > end {
        return Err(TokenError::RangeOrder { start, end });
    }

    let networks = summarize(start, end);
    debug!(
        "Summarized range {start}-{end} into {} network(s)",
        networks.len()
    );
    Ok(networks)
}

/// Greedy range-to-CIDR decomposition. Each step emits the largest block that is aligned at the
/// current lower bound and does not extend past the upper bound.
fn summarize(start: Ipv4Addr, end: Ipv4Addr) -> Vec<Ipv4Network> {
    // u64 so that advancing past 255.255.255.255 does not overflow
    let mut lower = u64::from(u32::from(start));
    let upper = u64::from(u32::from(end));

    let mut networks = Vec::new();
    while lower <= upper {
        let alignment_bits = lower.trailing_zeros().min(32);
        let remaining = upper - lower + 1;
        let fit_bits = 63 - remaining.leading_zeros();
        let host_bits = alignment_bits.min(fit_bits);

        // host_bits <= 32, so the prefix is always valid
        let prefix = 32 - host_bits as u8;
        let address = Ipv4Addr::from(lower as u32);
        if let Ok(network) = Ipv4Network::new(address, prefix) {
            networks.push(network);
        }

        lower += 1u64 << host_bits;
    }

    networks
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
