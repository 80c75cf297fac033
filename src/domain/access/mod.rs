// src/domain/access/mod.rs
pub mod permission;
pub mod role;
pub mod specifications;
pub mod value_objects;

pub use permission::Permission;
pub use role::Role;
pub use specifications::{ContentEditScope, ContentEditSpec};
pub use value_objects::UserId;

pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.has_permission(permission)
}

/// A manager may act on users strictly below them in the hierarchy.
pub fn can_manage_user(manager: Role, target: Role) -> bool {
    manager.hierarchy() > target.hierarchy()
}

/// Only a superadmin hands out superadmin; anything else needs an equal or
/// higher rank than the role being assigned.
pub fn can_assign_role(assigner: Role, role: Role) -> bool {
    if role == Role::SuperAdmin {
        return assigner == Role::SuperAdmin;
    }
    assigner.hierarchy() >= role.hierarchy()
}
