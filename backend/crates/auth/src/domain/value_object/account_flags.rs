//! Account Flags
//!
//! Server-set booleans describing the standing of an account.

/// Approval / verification / activity flags
///
/// `Default` matches what the identity backend assumes for a field it
/// omits: not approved, not verified, active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountFlags {
    /// Vetted by an administrator (meaningful for college and government)
    pub approved: bool,
    /// Email address confirmed
    pub verified: bool,
    /// Account not deactivated
    pub active: bool,
}

impl Default for AccountFlags {
    fn default() -> Self {
        Self {
            approved: false,
            verified: false,
            active: true,
        }
    }
}

impl AccountFlags {
    /// All three flags set
    pub const fn granted() -> Self {
        Self {
            approved: true,
            verified: true,
            active: true,
        }
    }

    #[inline]
    pub const fn is_fully_granted(&self) -> bool {
        self.approved && self.verified && self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let flags = AccountFlags::default();
        assert!(!flags.approved);
        assert!(!flags.verified);
        assert!(flags.active);
        assert!(!flags.is_fully_granted());
    }

    #[test]
    fn test_granted_flags() {
        assert!(AccountFlags::granted().is_fully_granted());
    }
}
