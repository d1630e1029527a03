//! User role/status and course status enums.
//!
//! The database stores these as TEXT (with CHECK constraints, see the
//! migrations in `learnhub-db`); rows carry plain `String` fields and are
//! parsed into these enums wherever authorization logic needs them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Account role. Ordered roughly by privilege, but privilege checks are
/// always explicit (see [`crate::entitlement`]) -- never ordinal comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "super_admin",
        }
    }

    /// True only for the student role.
    pub fn is_student(self) -> bool {
        matches!(self, UserRole::Student)
    }

    /// True for roles allowed to manage courses and lessons.
    pub fn is_course_manager(self) -> bool {
        matches!(
            self,
            UserRole::Instructor | UserRole::Admin | UserRole::SuperAdmin
        )
    }

    /// True for admin and super-admin.
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "instructor" => Ok(UserRole::Instructor),
            "admin" => Ok(UserRole::Admin),
            "super_admin" => Ok(UserRole::SuperAdmin),
            other => Err(CoreError::Internal(format!("Unknown user role: {other}"))),
        }
    }
}

/// Account status. Only `active` accounts may authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(CoreError::Internal(format!("Unknown user status: {other}"))),
        }
    }
}

/// Course lifecycle status. Only `published` courses are publicly visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Draft,
    Published,
}

impl CourseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "draft",
            CourseStatus::Published => "published",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CourseStatus::Draft),
            "published" => Ok(CourseStatus::Published),
            other => Err(CoreError::Internal(format!(
                "Unknown course status: {other}"
            ))),
        }
    }
}

/// Payment status stored on payment audit rows. Only successfully settled
/// payments are ever recorded, so this currently has a single value.
pub const PAYMENT_STATUS_SUCCEEDED: &str = "succeeded";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [
            UserRole::Student,
            UserRole::Instructor,
            UserRole::Admin,
            UserRole::SuperAdmin,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn course_manager_roles() {
        assert!(!UserRole::Student.is_course_manager());
        assert!(UserRole::Instructor.is_course_manager());
        assert!(UserRole::Admin.is_course_manager());
        assert!(UserRole::SuperAdmin.is_course_manager());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
        let back: UserRole = serde_json::from_str("\"instructor\"").unwrap();
        assert_eq!(back, UserRole::Instructor);
    }
}
