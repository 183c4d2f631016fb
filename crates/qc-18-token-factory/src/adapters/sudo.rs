use crate::domain::{Address, TokenFactoryError};
use crate::ports::outbound::SudoPermissions;
use std::collections::BTreeSet;

/// Label reported as the required authority when a sudo check fails.
pub const SUDOERS_LABEL: &str = "<sudoers>";

/// Fixed set of sudo-privileged addresses.
#[derive(Debug, Clone, Default)]
pub struct StaticSudoers {
    members: BTreeSet<Address>,
}

impl StaticSudoers {
    pub fn new<I, A>(members: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Address>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.members.contains(addr)
    }
}

impl SudoPermissions for StaticSudoers {
    fn check_permissions(&self, addr: &Address) -> Result<(), TokenFactoryError> {
        if !self.contains(addr) {
            return Err(TokenFactoryError::Unauthorized {
                sender: addr.to_string(),
                admin: SUDOERS_LABEL.to_string(),
            });
        }
        Ok(())
    }
}
