//! Typed constructors for every block shape appended under `vnf-info`.

use crate::xml::{Element, ElementExt};

/// Conversion of a block into the element subtree it is emitted as.
pub trait ToElement {
    fn to_element(&self) -> Element;
}

/// The `resource-allocation` block shared by every VDU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceAllocation {
    pub vim: String,
    pub zone_id: String,
}

impl ToElement for ResourceAllocation {
    fn to_element(&self) -> Element {
        Element::new("resource-allocation")
            .with_child(Element::new("vim").with_text(&self.vim))
            .with_child(Element::new("zone-id").with_text(&self.zone_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    Ipv4,
    Ipv6,
}

impl IpVersion {
    /// `"ipv6"` maps to IPv6; anything else falls back to IPv4.
    pub fn from_layer_protocol(protocol: Option<&str>) -> Self {
        match protocol {
            Some("ipv6") => IpVersion::Ipv6,
            _ => IpVersion::Ipv4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IpVersion::Ipv4 => "IPV4",
            IpVersion::Ipv6 => "IPV6",
        }
    }
}

/// A connection point nested inside a VDU block.
///
/// Internal and external points are distinct variants here, but both are
/// written with the [`VduConnectionPoint::ELEMENT`] tag; consumers of the
/// generated document rely on that tag for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VduConnectionPoint {
    Internal {
        id: String,
        allowed_address_pair: bool,
    },
    External {
        id: String,
        ip_version: IpVersion,
    },
}

impl VduConnectionPoint {
    pub const ELEMENT: &'static str = "internal-connection-point";

    pub fn id(&self) -> &str {
        match self {
            VduConnectionPoint::Internal { id, .. } | VduConnectionPoint::External { id, .. } => id,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, VduConnectionPoint::External { .. })
    }
}

impl ToElement for VduConnectionPoint {
    fn to_element(&self) -> Element {
        let element = Element::new(Self::ELEMENT).with_child(Element::new("id").with_text(self.id()));
        match self {
            VduConnectionPoint::Internal {
                allowed_address_pair,
                ..
            } => {
                if *allowed_address_pair {
                    element.with_child(allowed_address_pair_placeholder())
                } else {
                    element
                }
            }
            VduConnectionPoint::External { ip_version, .. } => element
                .with_child(connection_point_address(*ip_version))
                .with_child(allowed_address_pair_placeholder()),
        }
    }
}

fn allowed_address_pair_placeholder() -> Element {
    Element::new("allowed-address-pair")
        .with_child(Element::new("address"))
        .with_child(Element::new("netmask"))
}

fn connection_point_address(ip_version: IpVersion) -> Element {
    let ip_address = Element::new("ip-address")
        .with_child(Element::new("id"))
        .with_child(Element::new("type").with_text(ip_version.as_str()))
        .with_child(Element::new("subnet-name"))
        .with_child(Element::new("fixed-address").with_child(Element::new("address")));

    Element::new("connection-point-address").with_child(
        Element::new("sol3-parameters")
            .with_child(Element::new("ecp-connection").with_child(ip_address)),
    )
}

/// One `vdu` block per compute node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VduBlock {
    pub id: String,
    pub resource_allocation: ResourceAllocation,
    /// Internal points first, then external ones.
    pub connection_points: Vec<VduConnectionPoint>,
}

impl ToElement for VduBlock {
    fn to_element(&self) -> Element {
        Element::new("vdu")
            .with_child(Element::new("id").with_text(&self.id))
            .with_child(Element::new("flavour-name"))
            .with_child(self.resource_allocation.to_element())
            .with_children(self.connection_points.iter().map(ToElement::to_element))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualLinkBlock {
    pub id: String,
}

impl ToElement for VirtualLinkBlock {
    fn to_element(&self) -> Element {
        Element::new("virtual-link")
            .with_child(Element::new("id").with_text(&self.id))
            .with_child(Element::new("is-externally-managed").with_text("true"))
            .with_child(Element::new("network-name"))
    }
}

/// Top-level external connection point, a direct child of `vnf-info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VnfdConnectionPointBlock {
    pub id: String,
}

impl ToElement for VnfdConnectionPointBlock {
    fn to_element(&self) -> Element {
        Element::new("vnfd-connection-point")
            .with_child(Element::new("id").with_text(&self.id))
            .with_child(Element::new("network-name"))
            .with_child(Element::new("subnets").with_child(Element::new("subnet-name")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalParameterBlock {
    pub id: String,
    pub value: String,
}

impl AdditionalParameterBlock {
    pub const VALUE_TYPE: &'static str = "string";
}

impl ToElement for AdditionalParameterBlock {
    fn to_element(&self) -> Element {
        Element::new("additional-parameters")
            .with_child(Element::new("id").with_text(&self.id))
            .with_child(Element::new("type").with_text(Self::VALUE_TYPE))
            .with_child(Element::new("value").with_text(&self.value))
    }
}
