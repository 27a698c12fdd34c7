//! Conference identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the four recognized security conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    /// IEEE Symposium on Security and Privacy
    Sp,
    /// ACM Conference on Computer and Communications Security
    Ccs,
    /// USENIX Security Symposium
    Usenix,
    /// Network and Distributed System Security Symposium
    Ndss,
}

impl Conference {
    /// All recognized conferences.
    pub const ALL: [Conference; 4] = [
        Conference::Sp,
        Conference::Ccs,
        Conference::Usenix,
        Conference::Ndss,
    ];

    /// Short lowercase code used on the command line and in config.
    pub fn code(&self) -> &'static str {
        match self {
            Conference::Sp => "sp",
            Conference::Ccs => "ccs",
            Conference::Usenix => "usenix",
            Conference::Ndss => "ndss",
        }
    }

    /// DBLP conference stream key.
    pub fn dblp_stream(&self) -> &'static str {
        match self {
            Conference::Sp => "conf/sp",
            Conference::Ccs => "conf/ccs",
            Conference::Usenix => "conf/uss",
            Conference::Ndss => "conf/ndss",
        }
    }

    /// Venue name as indexed by Semantic Scholar.
    pub fn venue_name(&self) -> &'static str {
        match self {
            Conference::Sp => "IEEE Symposium on Security and Privacy",
            Conference::Ccs => "Conference on Computer and Communications Security",
            Conference::Usenix => "USENIX Security Symposium",
            Conference::Ndss => "Network and Distributed System Security Symposium",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Conference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sp" => Ok(Conference::Sp),
            "ccs" => Ok(Conference::Ccs),
            "usenix" => Ok(Conference::Usenix),
            "ndss" => Ok(Conference::Ndss),
            other => Err(AppError::InvalidConference(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_recognized() {
        assert_eq!("sp".parse::<Conference>().unwrap(), Conference::Sp);
        assert_eq!("USENIX".parse::<Conference>().unwrap(), Conference::Usenix);
        assert_eq!(" ndss ".parse::<Conference>().unwrap(), Conference::Ndss);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(matches!(
            "pets".parse::<Conference>(),
            Err(AppError::InvalidConference(code)) if code == "pets"
        ));
    }

    #[test]
    fn test_code_round_trip() {
        for conference in Conference::ALL {
            assert_eq!(conference.code().parse::<Conference>().unwrap(), conference);
        }
    }
}
