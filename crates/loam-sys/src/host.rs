// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host and network information gathered through `sysinfo`.

use std::net::{IpAddr, Ipv4Addr};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};

/// A snapshot of the host's identity and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    /// Operating system name, e.g. `Ubuntu`.
    pub os_name: Option<String>,
    /// Long operating system version, e.g. `Linux (Ubuntu 24.04)`.
    pub os_version: Option<String>,
    /// Kernel version.
    pub kernel_version: Option<String>,
    /// Network host name.
    pub host_name: Option<String>,
    /// Number of logical CPUs.
    pub cpu_count: usize,
    /// Total physical memory in bytes.
    pub total_memory: u64,
}

impl HostInfo {
    /// Queries the host. Only CPU and memory lists are refreshed.
    pub fn collect() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        Self {
            os_name: System::name(),
            os_version: System::long_os_version(),
            kernel_version: System::kernel_version(),
            host_name: System::host_name(),
            cpu_count: system.cpus().len(),
            total_memory: system.total_memory(),
        }
    }
}

/// Returns the non-loopback IPv4 addresses of every network interface.
/// Interfaces are visited in name order and duplicates are dropped.
pub fn ipv4_addresses() -> Vec<Ipv4Addr> {
    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<_> = networks.list().iter().collect();
    interfaces.sort_by(|a, b| a.0.cmp(b.0));

    let mut addresses = Vec::new();
    for (_, data) in interfaces {
        for network in data.ip_networks() {
            if let IpAddr::V4(addr) = network.addr {
                if !addr.is_loopback() && !addresses.contains(&addr) {
                    addresses.push(addr);
                }
            }
        }
    }
    log::trace!("Found IPv4 addresses {addresses:?}.");
    addresses
}
