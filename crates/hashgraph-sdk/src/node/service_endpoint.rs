use std::fmt;
use std::net::Ipv4Addr;

use hashgraph_proto::services;

use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{Error, Result};

/// Where a node listens: an IPv4 address or a domain name, plus a port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceEndpoint {
    pub ip_address_v4: Option<Ipv4Addr>,
    pub port: i32,
    pub domain_name: String,
}

impl ServiceEndpoint {
    pub fn from_ip(address: Ipv4Addr, port: i32) -> Self {
        Self { ip_address_v4: Some(address), port, domain_name: String::new() }
    }

    pub fn from_domain(domain_name: impl Into<String>, port: i32) -> Self {
        Self { ip_address_v4: None, port, domain_name: domain_name.into() }
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip_address_v4 {
            Some(address) => write!(f, "{address}:{}", self.port),
            None => write!(f, "{}:{}", self.domain_name, self.port),
        }
    }
}

impl FromProtobuf<services::ServiceEndpoint> for ServiceEndpoint {
    fn from_protobuf(pb: services::ServiceEndpoint) -> Result<Self> {
        let ip_address_v4 = match pb.ip_address_v4.len() {
            0 => None,
            4 => Some(Ipv4Addr::new(
                pb.ip_address_v4[0],
                pb.ip_address_v4[1],
                pb.ip_address_v4[2],
                pb.ip_address_v4[3],
            )),
            len => {
                return Err(Error::from_protobuf(format!("expected 4 bytes for an IPv4 address, got {len}")))
            }
        };

        Ok(Self { ip_address_v4, port: pb.port, domain_name: pb.domain_name })
    }
}

impl ToProtobuf for ServiceEndpoint {
    type Protobuf = services::ServiceEndpoint;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::ServiceEndpoint {
            ip_address_v4: self.ip_address_v4.map(|address| address.octets().to_vec()).unwrap_or_default(),
            port: self.port,
            domain_name: self.domain_name.clone(),
        }
    }
}
