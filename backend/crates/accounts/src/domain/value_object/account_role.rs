use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, assigned once at registration and immutable afterwards.
///
/// Exactly one role per identity; there is no separate admin role. The
/// bootstrap administrator is a regular `Company` account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountRole {
    Company = 0,
    Employee = 1,
}

impl AccountRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AccountRole::Company => "company",
            AccountRole::Employee => "employee",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(AccountRole::Company),
            1 => Some(AccountRole::Employee),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "company" => Some(AccountRole::Company),
            "employee" => Some(AccountRole::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
