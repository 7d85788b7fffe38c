use clap::Parser;

use crate::mac::Prefix;
use crate::render::Layout;

#[derive(Parser, Debug)]
#[command(
    name = "macgen",
    version,
    about = "Generate unique random MAC addresses for libvirt VMs",
    long_about = "Generate a list of random and unique MAC addresses for your VMs.\n\
                  Every address starts with the given 3-byte prefix (xx:xx:xx).\n\n\
                  Useful when creating VMs with virt-install and static MAC addresses,\n\
                  to pre-fill a libvirt network's DHCP host entries."
)]
pub struct Cli {
    /// MAC address prefix (3 bytes), format xx:xx:xx
    #[arg(short, long, default_value = "aa:aa:aa")]
    pub prefix: Prefix,

    /// Number of VMs
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Number of NIC interfaces per VM
    #[arg(short, long, default_value_t = 1)]
    pub interface: usize,

    /// Layouts to print, comma separated (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub layout: Vec<Layout>,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Requested layouts, all four when none were given.
    pub fn layouts(&self) -> Vec<Layout> {
        if self.layout.is_empty() {
            Layout::ALL.to_vec()
        } else {
            self.layout.clone()
        }
    }
}
