//! Service address resolution from `kubectl get svc -o json` output.

use paragon_common::ServiceAddress;
use serde_json::Value;

use super::manifest::{ServiceManifest, ServiceType};

/// Resolve the address a deployed service can be reached at.
///
/// Load-balanced services report the first ingress entry's hostname, then
/// its IP, and are [`ServiceAddress::Pending`] when neither is published yet.
/// Cluster-internal services get their in-cluster DNS name.
#[must_use]
pub fn resolve_service_address(service: &ServiceManifest, observed: &Value) -> ServiceAddress {
    match service.service_type() {
        ServiceType::LoadBalancer => {
            let ingress = observed.pointer("/status/loadBalancer/ingress/0");
            let host = ingress
                .and_then(|i| i.get("hostname").and_then(Value::as_str))
                .or_else(|| ingress.and_then(|i| i.get("ip").and_then(Value::as_str)))
                .filter(|h| !h.is_empty());
            match host {
                Some(host) => ServiceAddress::Url(format!("http://{host}")),
                None => ServiceAddress::Pending,
            }
        }
        ServiceType::ClusterIp => ServiceAddress::Url(format!(
            "http://{}.{}.svc.cluster.local",
            service.name(),
            service.namespace()
        )),
    }
}
