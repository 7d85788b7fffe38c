//! Text layouts for an [`Assignment`].
//!
//! Every layout is a framed block: separator, timestamp header, title,
//! one group per VM or per interface ordinal, end line, separator.
//! Host lines are libvirt `<dhcp>` entries with a placeholder IP; they are
//! not escaped since VM names are generated.

use std::fmt::Write;

use clap::ValueEnum;

use crate::assignment::{Assignment, Slot};

/// IP written into every host entry; the tool never assigns addresses.
pub const PLACEHOLDER_IP: &str = "x.x.x.x";

const SEPARATOR: &str =
    "###############################################################################";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// MAC addresses grouped per VM
    Vm,
    /// libvirt host entries grouped per VM
    VmXml,
    /// MAC addresses grouped per NIC (one group per bridge)
    Nic,
    /// libvirt host entries grouped per NIC
    NicXml,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Vm, Layout::VmXml, Layout::Nic, Layout::NicXml];

    fn title(self, assignment: &Assignment) -> String {
        match self {
            Layout::Vm => format!(
                "MAC addresses list for {} VMs with {} NICs per VM:",
                assignment.vm_count(),
                assignment.nics_per_vm()
            ),
            Layout::VmXml => "Libvirt XML config for each VM:".into(),
            Layout::Nic => {
                "MAC addresses list per NIC, i.e. for each libvirt network bridge:".into()
            }
            Layout::NicXml => {
                "Libvirt XML config for each NIC, i.e. for each libvirt network bridge:".into()
            }
        }
    }

    fn footer(self) -> &'static str {
        match self {
            Layout::Vm => "End of MAC addresses list per VM.",
            Layout::VmXml => "End of libvirt XML config per VM.",
            Layout::Nic => "End of MAC addresses list per NIC.",
            Layout::NicXml => "End of libvirt XML config per NIC.",
        }
    }

    fn is_xml(self) -> bool {
        matches!(self, Layout::VmXml | Layout::NicXml)
    }
}

/// Heading for the group of interface ordinal `interface`, 1-based.
pub fn nic_heading(interface: usize) -> String {
    format!("Bridge/NIC number {:02}", interface + 1)
}

/// `<host mac="…" name="…" ip="x.x.x.x"/>` for one slot.
pub fn host_entry(slot: &Slot<'_>) -> String {
    format!(
        r#"<host mac="{}" name="{}" ip="{PLACEHOLDER_IP}"/>"#,
        slot.address,
        slot.vm_name()
    )
}

fn slot_line(layout: Layout, slot: &Slot<'_>) -> String {
    if layout.is_xml() {
        host_entry(slot)
    } else {
        slot.address.to_string()
    }
}

/// Render one layout. `generated_at` is printed verbatim in the header.
pub fn render(assignment: &Assignment, layout: Layout, generated_at: &str) -> String {
    let mut out = String::new();
    let _ = write_layout(&mut out, assignment, layout, generated_at);
    out
}

fn write_layout(
    out: &mut String,
    assignment: &Assignment,
    layout: Layout,
    generated_at: &str,
) -> std::fmt::Result {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "MAC Address list generated on: {generated_at}")?;
    writeln!(out)?;
    writeln!(out, "{}", layout.title(assignment))?;

    match layout {
        Layout::Vm | Layout::VmXml => {
            for vm in assignment.vms() {
                writeln!(out)?;
                writeln!(out, " {}", vm.name())?;
                for slot in vm.interfaces() {
                    writeln!(out, "{}", slot_line(layout, &slot))?;
                }
            }
        }
        Layout::Nic | Layout::NicXml => {
            for interface in 0..assignment.nics_per_vm() {
                writeln!(out)?;
                writeln!(out, " {}", nic_heading(interface))?;
                for slot in assignment.interface_column(interface) {
                    writeln!(out, "{}", slot_line(layout, &slot))?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", layout.footer())?;
    writeln!(out, "{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mac::MacAddress;

    fn assignment() -> Assignment {
        let pool = (1..=4)
            .map(|i| MacAddress::new([0xaa, 0xbb, 0xcc, 0, 0, i]))
            .collect();
        Assignment::new(pool, 2, 2).unwrap()
    }

    fn body(text: &str) -> Vec<&str> {
        text.lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .skip(2)
            .collect()
    }

    #[test]
    fn host_entry_shape() {
        let a = assignment();
        let slot = a.slot(1, 0).unwrap();
        assert_eq!(
            host_entry(&slot),
            r#"<host mac="aa:bb:cc:00:00:03" name="VM #002" ip="x.x.x.x"/>"#
        );
    }

    #[test]
    fn header_carries_timestamp() {
        let text = render(&assignment(), Layout::Vm, "2018-11-19 10:00:00 UTC");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(SEPARATOR));
        assert_eq!(
            lines.next(),
            Some("MAC Address list generated on: 2018-11-19 10:00:00 UTC")
        );
        assert!(text.ends_with(&format!("{SEPARATOR}\n")));
    }

    #[test]
    fn vm_layout_groups_by_vm() {
        let text = render(&assignment(), Layout::Vm, "now");
        assert!(text.contains("MAC addresses list for 2 VMs with 2 NICs per VM:"));
        assert_eq!(
            body(&text),
            [
                " VM #001",
                "aa:bb:cc:00:00:01",
                "aa:bb:cc:00:00:02",
                " VM #002",
                "aa:bb:cc:00:00:03",
                "aa:bb:cc:00:00:04",
                "End of MAC addresses list per VM.",
            ]
        );
    }

    #[test]
    fn nic_layout_groups_by_interface() {
        let text = render(&assignment(), Layout::Nic, "now");
        assert_eq!(
            body(&text),
            [
                " Bridge/NIC number 01",
                "aa:bb:cc:00:00:01",
                "aa:bb:cc:00:00:03",
                " Bridge/NIC number 02",
                "aa:bb:cc:00:00:02",
                "aa:bb:cc:00:00:04",
                "End of MAC addresses list per NIC.",
            ]
        );
    }

    #[test]
    fn vm_xml_layout_names_owner() {
        let text = render(&assignment(), Layout::VmXml, "now");
        assert_eq!(
            body(&text)[..3],
            [
                " VM #001",
                r#"<host mac="aa:bb:cc:00:00:01" name="VM #001" ip="x.x.x.x"/>"#,
                r#"<host mac="aa:bb:cc:00:00:02" name="VM #001" ip="x.x.x.x"/>"#,
            ]
        );
    }

    #[test]
    fn nic_xml_layout_interleaves_vms() {
        let text = render(&assignment(), Layout::NicXml, "now");
        assert_eq!(
            body(&text)[..3],
            [
                " Bridge/NIC number 01",
                r#"<host mac="aa:bb:cc:00:00:01" name="VM #001" ip="x.x.x.x"/>"#,
                r#"<host mac="aa:bb:cc:00:00:03" name="VM #002" ip="x.x.x.x"/>"#,
            ]
        );
    }

    #[test]
    fn every_address_appears_once_per_layout() {
        let a = assignment();
        for layout in Layout::ALL {
            let text = render(&a, layout, "now");
            for mac in a.pool() {
                assert_eq!(text.matches(&mac.to_string()).count(), 1, "{layout:?}");
            }
        }
    }
}
