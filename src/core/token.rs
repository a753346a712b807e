/*-------------------------------------------------------------------------------------------------
  Token Shape
-------------------------------------------------------------------------------------------------*/

/// The shape of a raw input token, which decides how it is processed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TokenShape {
    /// `start-end` IPv4 address range.
    Range,

    /// IPv6 address or network; validated for information only.
    Ipv6,

    /// IPv4 address or CIDR block.
    Ipv4,
}

impl TokenShape {
    /// Classify a token. A hyphen after the first character marks a range; otherwise a colon
    /// after the first character marks IPv6; everything else is parsed as IPv4.
    ///
    /// Classification is lenient: `10.0.0.0/24-extra` is classified as a range and then fails
    /// range parsing, and a token starting with `-` falls through to IPv4 parsing.
    pub fn classify(token: &str) -> TokenShape {
        if token.find('-').is_some_and(|index| index > 0) {
            TokenShape::Range
        } else if token.find(':').is_some_and(|index| index > 0) {
            TokenShape::Ipv6
        } else {
            TokenShape::Ipv4
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ranges() {
        assert_eq!(TokenShape::classify("1.1.1.1-1.1.1.9"), TokenShape::Range);
        assert_eq!(TokenShape::classify("10.0.0.0/24-extra"), TokenShape::Range);
    }

    #[test]
    fn test_classify_ipv6() {
        assert_eq!(TokenShape::classify("2001:db8::/32"), TokenShape::Ipv6);
        assert_eq!(TokenShape::classify("::1"), TokenShape::Ipv4);
    }

    #[test]
    fn test_classify_ipv4() {
        assert_eq!(TokenShape::classify("8.8.8.8"), TokenShape::Ipv4);
        assert_eq!(TokenShape::classify("8.8.8.0/24"), TokenShape::Ipv4);
        assert_eq!(TokenShape::classify("-8.8.8.8"), TokenShape::Ipv4);
        assert_eq!(TokenShape::classify(""), TokenShape::Ipv4);
    }
}
