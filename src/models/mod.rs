//! 数据模型模块
//! 用户、角色、权限实体，以及分页状态

pub mod dataset;
pub mod pagination;
pub mod role;
pub mod user;

pub use dataset::Dataset;
pub use pagination::{page_count, PageLimit, PageResult, PaginationState, ALLOWED_LIMITS};
pub use role::{Permission, PermissionRef, Role, RoleRef};
pub use user::{CreateUserRequest, User};
