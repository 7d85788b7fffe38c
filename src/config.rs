use crate::error::MacgenError;
use crate::mac::Prefix;

/// Upper bounds on the size of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_vms: usize,
    pub max_nics: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vms: 500,
            max_nics: 10,
        }
    }
}

/// Validated input for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub prefix: Prefix,
    pub vm_count: usize,
    pub nics_per_vm: usize,
}

impl RunConfig {
    pub fn new(
        prefix: Prefix,
        vm_count: usize,
        nics_per_vm: usize,
        limits: &Limits,
    ) -> Result<Self, MacgenError> {
        validate_counts(vm_count, nics_per_vm, limits)?;
        Ok(Self {
            prefix,
            vm_count,
            nics_per_vm,
        })
    }

    /// Number of addresses the run needs.
    pub fn total(&self) -> usize {
        self.vm_count * self.nics_per_vm
    }
}

// ── validation ────────────────────────────────────────────

fn validate_counts(
    vm_count: usize,
    nics_per_vm: usize,
    limits: &Limits,
) -> Result<(), MacgenError> {
    if vm_count < 1 {
        return Err(MacgenError::Validation {
            message: "minimum number of VMs is 1".into(),
        });
    }
    if vm_count > limits.max_vms {
        return Err(MacgenError::Validation {
            message: format!("maximum number of VMs is {}", limits.max_vms),
        });
    }
    if nics_per_vm < 1 {
        return Err(MacgenError::Validation {
            message: "minimum number of NICs per VM is 1".into(),
        });
    }
    if nics_per_vm > limits.max_nics {
        return Err(MacgenError::Validation {
            message: format!("maximum number of NICs per VM is {}", limits.max_nics),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix() -> Prefix {
        "aa:bb:cc".parse().unwrap()
    }

    #[test]
    fn accepts_bounds() {
        let limits = Limits::default();
        assert!(RunConfig::new(prefix(), 1, 1, &limits).is_ok());
        let max = RunConfig::new(prefix(), 500, 10, &limits).unwrap();
        assert_eq!(max.total(), 5000);
    }

    #[test]
    fn rejects_zero_vms() {
        let err = RunConfig::new(prefix(), 0, 1, &Limits::default()).unwrap_err();
        assert!(err.to_string().contains("minimum number of VMs is 1"));
    }

    #[test]
    fn rejects_zero_nics() {
        let err = RunConfig::new(prefix(), 1, 0, &Limits::default()).unwrap_err();
        assert!(err.to_string().contains("minimum number of NICs per VM is 1"));
    }

    #[test]
    fn rejects_counts_above_limits() {
        let limits = Limits::default();
        let err = RunConfig::new(prefix(), 501, 1, &limits).unwrap_err();
        assert!(err.to_string().contains("maximum number of VMs is 500"));
        let err = RunConfig::new(prefix(), 1, 11, &limits).unwrap_err();
        assert!(err.to_string().contains("maximum number of NICs per VM is 10"));
    }

    #[test]
    fn custom_limits_apply() {
        let limits = Limits {
            max_vms: 2,
            max_nics: 2,
        };
        assert!(RunConfig::new(prefix(), 2, 2, &limits).is_ok());
        assert!(RunConfig::new(prefix(), 3, 2, &limits).is_err());
        assert!(RunConfig::new(prefix(), 2, 3, &limits).is_err());
    }
}
