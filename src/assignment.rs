//! Partition of an address pool into VMs and their interfaces.
//!
//! The pool is held once as a row-major (VMs × interfaces) grid. The by-VM
//! and by-interface views are two iteration orders over that grid, so they
//! always enumerate the same slots.

use rand::Rng;

use crate::config::RunConfig;
use crate::error::MacgenError;
use crate::mac::MacAddress;
use crate::pool::AddressPool;

/// Display name for the VM at 0-based `ordinal`, e.g. `VM #001`.
pub fn vm_name(ordinal: usize) -> String {
    format!("VM #{:03}", ordinal + 1)
}

/// One (VM, interface, address) cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot<'a> {
    pub vm: usize,
    pub interface: usize,
    pub address: &'a MacAddress,
}

impl Slot<'_> {
    pub fn vm_name(&self) -> String {
        vm_name(self.vm)
    }
}

/// A VM's row of the grid.
#[derive(Debug, Clone, Copy)]
pub struct VirtualMachine<'a> {
    ordinal: usize,
    interfaces: &'a [MacAddress],
}

impl<'a> VirtualMachine<'a> {
    pub fn name(&self) -> String {
        vm_name(self.ordinal)
    }

    /// Addresses in interface order.
    pub fn addresses(&self) -> &'a [MacAddress] {
        self.interfaces
    }

    pub fn interfaces(self) -> impl Iterator<Item = Slot<'a>> {
        let vm = self.ordinal;
        self.interfaces
            .iter()
            .enumerate()
            .map(move |(interface, address)| Slot {
                vm,
                interface,
                address,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pool: Vec<MacAddress>,
    vm_count: usize,
    nics_per_vm: usize,
}

impl Assignment {
    /// Split `pool` into `vm_count` consecutive chunks of `nics_per_vm`.
    pub fn new(
        pool: Vec<MacAddress>,
        vm_count: usize,
        nics_per_vm: usize,
    ) -> Result<Self, MacgenError> {
        if vm_count == 0 || nics_per_vm == 0 || pool.len() != vm_count * nics_per_vm {
            return Err(MacgenError::PoolShape {
                len: pool.len(),
                vm_count,
                nics_per_vm,
            });
        }
        Ok(Self {
            pool,
            vm_count,
            nics_per_vm,
        })
    }

    /// Generate a fresh pool for `config` and partition it.
    pub fn generate<R: Rng + ?Sized>(
        config: &RunConfig,
        rng: &mut R,
    ) -> Result<Self, MacgenError> {
        let pool = AddressPool::new(config.prefix).generate(config.total(), rng);
        let assignment = Self::new(pool, config.vm_count, config.nics_per_vm)?;
        tracing::debug!(
            vms = config.vm_count,
            nics_per_vm = config.nics_per_vm,
            "addresses assigned"
        );
        Ok(assignment)
    }

    pub fn vm_count(&self) -> usize {
        self.vm_count
    }

    pub fn nics_per_vm(&self) -> usize {
        self.nics_per_vm
    }

    /// The flat pool in generation order.
    pub fn pool(&self) -> &[MacAddress] {
        &self.pool
    }

    pub fn slot(&self, vm: usize, interface: usize) -> Option<Slot<'_>> {
        if vm >= self.vm_count || interface >= self.nics_per_vm {
            return None;
        }
        Some(Slot {
            vm,
            interface,
            address: &self.pool[vm * self.nics_per_vm + interface],
        })
    }

    pub fn vms(&self) -> impl Iterator<Item = VirtualMachine<'_>> {
        self.pool
            .chunks_exact(self.nics_per_vm)
            .enumerate()
            .map(|(ordinal, interfaces)| VirtualMachine {
                ordinal,
                interfaces,
            })
    }

    /// Every slot, VM by VM.
    pub fn by_vm(&self) -> impl Iterator<Item = Slot<'_>> {
        self.vms().flat_map(|vm| vm.interfaces())
    }

    /// Interface `interface` of every VM, in VM order.
    pub fn interface_column(&self, interface: usize) -> impl Iterator<Item = Slot<'_>> {
        (0..self.vm_count).filter_map(move |vm| self.slot(vm, interface))
    }

    /// Every slot, interface ordinal by interface ordinal.
    pub fn by_interface(&self) -> impl Iterator<Item = Slot<'_>> {
        (0..self.nics_per_vm).flat_map(move |interface| self.interface_column(interface))
    }
}
