use crate::core::errors::Result;
use crate::core::reference_set::ReferenceSet;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

/// Parse the JSON printed by `aws waf-regional get-ip-set`.
pub fn parse(json: &str) -> Result<IpSet> {
    let response: JsonGetIpSetResponse = serde_json::from_str(json)?;
    Ok(response.ip_set)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  GetIPSet Response
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonGetIpSetResponse {
    #[serde(rename = "IPSet")]
    pub ip_set: IpSet,
}

/*--------------------------------------------------------------------------------------
  IPSet
--------------------------------------------------------------------------------------*/

/// A WAF regional IPSet as returned by `GetIPSet`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IpSet {
    #[serde(rename = "IPSetId")]
    pub ip_set_id: String,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "IPSetDescriptors", default)]
    pub descriptors: Vec<IpSetDescriptor>,
}

impl IpSet {
    /// Reference set of the descriptor values, in the order the service returned them.
    pub fn reference_set(&self) -> ReferenceSet {
        ReferenceSet::new(
            self.descriptors
                .iter()
                .map(|descriptor| descriptor.value.as_str()),
        )
    }
}

/*--------------------------------------------------------------------------------------
  IPSet Descriptor
--------------------------------------------------------------------------------------*/

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IpSetDescriptor {
    /// `IPV4` or `IPV6`.
    #[serde(rename = "Type")]
    pub descriptor_type: String,

    #[serde(rename = "Value")]
    pub value: String,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
