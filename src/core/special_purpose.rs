use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Special-Purpose IPv4 Address Blocks
-------------------------------------------------------------------------------------------------*/

/// Categories of IPv4 address space that are not globally routable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialPurpose {
    ThisNetwork,
    Private,
    SharedAddressSpace,
    Loopback,
    LinkLocal,
    ProtocolAssignments,
    Documentation,
    Benchmarking,
    Multicast,
    Reserved,
    Broadcast,
}

impl fmt::Display for SpecialPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialPurpose::ThisNetwork => "this network",
            SpecialPurpose::Private => "private",
            SpecialPurpose::SharedAddressSpace => "shared address space",
            SpecialPurpose::Loopback => "loopback",
            SpecialPurpose::LinkLocal => "link-local",
            SpecialPurpose::ProtocolAssignments => "IETF protocol assignments",
            SpecialPurpose::Documentation => "documentation",
            SpecialPurpose::Benchmarking => "benchmarking",
            SpecialPurpose::Multicast => "multicast",
            SpecialPurpose::Reserved => "reserved",
            SpecialPurpose::Broadcast => "limited broadcast",
        };
        f.write_str(name)
    }
}

// (network address, prefix length, category)
const SPECIAL_PURPOSE_BLOCKS: [([u8; 4], u8, SpecialPurpose); 15] = [
    ([0, 0, 0, 0], 8, SpecialPurpose::ThisNetwork),
    ([10, 0, 0, 0], 8, SpecialPurpose::Private),
    ([100, 64, 0, 0], 10, SpecialPurpose::SharedAddressSpace),
    ([127, 0, 0, 0], 8, SpecialPurpose::Loopback),
    ([169, 254, 0, 0], 16, SpecialPurpose::LinkLocal),
    ([172, 16, 0, 0], 12, SpecialPurpose::Private),
    ([192, 0, 0, 0], 24, SpecialPurpose::ProtocolAssignments),
    ([192, 0, 2, 0], 24, SpecialPurpose::Documentation),
    ([192, 168, 0, 0], 16, SpecialPurpose::Private),
    ([198, 18, 0, 0], 15, SpecialPurpose::Benchmarking),
    ([198, 51, 100, 0], 24, SpecialPurpose::Documentation),
    ([203, 0, 113, 0], 24, SpecialPurpose::Documentation),
    ([224, 0, 0, 0], 4, SpecialPurpose::Multicast),
    ([255, 255, 255, 255], 32, SpecialPurpose::Broadcast),
    ([240, 0, 0, 0], 4, SpecialPurpose::Reserved),
];

/// Find the special-purpose category of a single address, if any.
///
/// The most specific block wins, so `255.255.255.255` is reported as the limited broadcast
/// address rather than as part of the reserved `240.0.0.0/4` block.
pub fn classify_address(address: Ipv4Addr) -> Option<SpecialPurpose> {
    SPECIAL_PURPOSE_BLOCKS
        .iter()
        .filter(|(octets, prefix, _)| {
            Ipv4Network::new(Ipv4Addr::from(*octets), *prefix)
                .map(|block| block.contains(address))
                .unwrap_or(false)
        })
        .max_by_key(|(_, prefix, _)| *prefix)
        .map(|(_, _, purpose)| *purpose)
}

/// Find the special-purpose category of a network.
///
/// A network is special-purpose when both its first and its last address fall inside
/// special-purpose blocks; the category reported is that of the first address.
pub fn classify_network(network: &Ipv4Network) -> Option<SpecialPurpose> {
    let first = classify_address(network.network());
    let last = classify_address(network.broadcast());

    match (first, last) {
        (Some(purpose), Some(_)) => Some(purpose),
        _ => None,
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
    fn test_special_purpose_blocks_parse() {
        for (octets, prefix, _) in SPECIAL_PURPOSE_BLOCKS.iter() {
            let block = Ipv4Network::new(Ipv4Addr::from(*octets), *prefix).unwrap();
            assert_eq!(block.network(), Ipv4Addr::from(*octets));
        }
    }

    #[test]
    fn test_classify_address() {
        assert_eq!(
            classify_address("10.1.2.3".parse().unwrap()),
            Some(SpecialPurpose::Private)
        );
        assert_eq!(
            classify_address("127.0.0.1".parse().unwrap()),
            Some(SpecialPurpose::Loopback)
        );
        assert_eq!(
            classify_address("169.254.10.10".parse().unwrap()),
            Some(SpecialPurpose::LinkLocal)
        );
        assert_eq!(
            classify_address("239.1.1.1".parse().unwrap()),
            Some(SpecialPurpose::Multicast)
        );
        assert_eq!(
            classify_address("255.255.255.255".parse().unwrap()),
            Some(SpecialPurpose::Broadcast)
        );
        assert_eq!(
            classify_address("250.0.0.1".parse().unwrap()),
            Some(SpecialPurpose::Reserved)
        );
        assert_eq!(classify_address("8.8.8.8".parse().unwrap()), None);
    }

    #[test]
    fn test_classify_network() {
        assert_eq!(
            classify_network(&network("192.168.0.0/16")),
            Some(SpecialPurpose::Private)
        );
        assert_eq!(
            classify_network(&network("198.51.100.0/24")),
            Some(SpecialPurpose::Documentation)
        );
        assert_eq!(
            classify_network(&network("0.0.0.0/0")),
            Some(SpecialPurpose::ThisNetwork)
        );

        // Partially overlapping a private block is still global
        assert_eq!(classify_network(&network("8.0.0.0/6")), None);
        assert_eq!(classify_network(&network("1.1.1.1/32")), None);
    }
}
