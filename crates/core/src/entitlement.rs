//! The access-control gate.
//!
//! Pure decision functions over role, status, ownership, and enrollment
//! facts. Callers gather the facts (usually from the database) and ask for a
//! yes/no here, so every rule is unit-testable without I/O.
//!
//! Error classes follow the API taxonomy:
//! - self-targeting admin actions are `Validation` (the request itself is
//!   invalid, regardless of privilege),
//! - privilege failures are `Forbidden`,
//! - reads of content that should not be revealed to exist are `NotFound`.

use crate::error::CoreError;
use crate::roles::{CourseStatus, UserRole};
use crate::types::DbId;

/// May this caller read a course's gated content (lessons, student detail)?
///
/// - Admins and super-admins always may.
/// - Instructors may read their own courses only; ownership substitutes for
///   payment, and applies to drafts as well.
/// - Students need an enrollment AND a published course. An unpublished
///   course reads as absent (`NotFound`), a missing enrollment as
///   `Forbidden`.
pub fn can_view_course_content(
    role: UserRole,
    viewer_id: DbId,
    course_id: DbId,
    course_instructor_id: DbId,
    course_status: CourseStatus,
    enrolled: bool,
) -> Result<(), CoreError> {
    match role {
        UserRole::Admin | UserRole::SuperAdmin => Ok(()),
        UserRole::Instructor => {
            if course_instructor_id == viewer_id {
                Ok(())
            } else {
                Err(CoreError::Forbidden(
                    "You do not own this course".to_string(),
                ))
            }
        }
        UserRole::Student => {
            if course_status != CourseStatus::Published {
                return Err(CoreError::NotFound {
                    entity: "Course",
                    id: course_id,
                });
            }
            if !enrolled {
                return Err(CoreError::Forbidden(
                    "You are not enrolled in this course".to_string(),
                ));
            }
            Ok(())
        }
    }
}

/// May this (possibly anonymous) caller see unpublished courses in listings?
///
/// Instructors additionally see their own drafts; that is handled at query
/// construction with the instructor id, not here.
pub fn can_list_unpublished(role: Option<UserRole>) -> bool {
    matches!(role, Some(UserRole::Admin) | Some(UserRole::SuperAdmin))
}

/// Is a single course's metadata visible to this caller?
///
/// Published courses are public. Drafts are visible to the owning
/// instructor and to admins only.
pub fn course_visible(
    viewer: Option<(DbId, UserRole)>,
    course_instructor_id: DbId,
    course_status: CourseStatus,
) -> bool {
    if course_status == CourseStatus::Published {
        return true;
    }
    match viewer {
        Some((_, UserRole::Admin)) | Some((_, UserRole::SuperAdmin)) => true,
        Some((viewer_id, UserRole::Instructor)) => viewer_id == course_instructor_id,
        _ => false,
    }
}

/// May `requester` change `target`'s account status?
pub fn can_modify_user_status(
    requester_id: DbId,
    requester_role: UserRole,
    target_id: DbId,
    target_role: UserRole,
) -> Result<(), CoreError> {
    if requester_id == target_id {
        return Err(CoreError::Validation(
            "You cannot change your own status".to_string(),
        ));
    }
    if requester_role == UserRole::Admin && target_role == UserRole::SuperAdmin {
        return Err(CoreError::Forbidden(
            "Admins cannot modify Super Admin accounts".to_string(),
        ));
    }
    Ok(())
}

/// May `requester` change `target`'s role to `new_role`?
pub fn can_modify_user_role(
    requester_id: DbId,
    requester_role: UserRole,
    target_id: DbId,
    target_role: UserRole,
    new_role: UserRole,
) -> Result<(), CoreError> {
    if requester_id == target_id {
        return Err(CoreError::Validation(
            "You cannot change your own role".to_string(),
        ));
    }
    if requester_role == UserRole::Admin && target_role == UserRole::SuperAdmin {
        return Err(CoreError::Forbidden(
            "Admins cannot modify Super Admin accounts".to_string(),
        ));
    }
    if new_role == UserRole::SuperAdmin && requester_role != UserRole::SuperAdmin {
        return Err(CoreError::Forbidden("Insufficient permissions".to_string()));
    }
    Ok(())
}

/// May `requester` delete `target`'s account?
pub fn can_delete_user(
    requester_id: DbId,
    requester_role: UserRole,
    target_id: DbId,
    target_role: UserRole,
) -> Result<(), CoreError> {
    if requester_id == target_id {
        return Err(CoreError::Validation(
            "You cannot delete yourself".to_string(),
        ));
    }
    if requester_role == UserRole::Admin && target_role == UserRole::SuperAdmin {
        return Err(CoreError::Forbidden(
            "Admins cannot delete Super Admin accounts".to_string(),
        ));
    }
    Ok(())
}
