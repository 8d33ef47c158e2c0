//! 列表数据源
//! 控制器只依赖 {load, remove} 能力，用户与角色各提供一个实现

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AdminError,
    models::{PageResult, PaginationState, Role, User},
    render::{ids, rows},
    services::DataService,
    store::keys,
};

/// 列表页的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Users,
    Roles,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Roles => "roles",
        }
    }

    pub fn mount_id(&self) -> &'static str {
        match self {
            EntityKind::Users => ids::USERS_MOUNT,
            EntityKind::Roles => ids::ROLES_MOUNT,
        }
    }

    pub fn table_id(&self) -> &'static str {
        match self {
            EntityKind::Users => ids::USER_TABLE,
            EntityKind::Roles => ids::ROLE_TABLE,
        }
    }

    pub fn pagination_id(&self) -> &'static str {
        match self {
            EntityKind::Users => ids::USER_PAGINATION,
            EntityKind::Roles => ids::ROLE_PAGINATION,
        }
    }

    pub fn pagination_key(&self) -> &'static str {
        match self {
            EntityKind::Users => keys::USERS_PAGINATION,
            EntityKind::Roles => keys::ROLES_PAGINATION,
        }
    }

    pub fn search_key(&self) -> &'static str {
        match self {
            EntityKind::Users => keys::USERS_SEARCH,
            EntityKind::Roles => keys::ROLES_SEARCH,
        }
    }
}

/// 列表控制器所需的实体能力
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: Clone + Send + Sync;

    const KIND: EntityKind;

    /// 查询过滤后的一页数据
    async fn load(&self, pagination: PaginationState, query: &str) -> PageResult<Self::Item>;

    /// 删除一条记录；不存在时为空操作
    async fn remove(&self, id: &str) -> Result<(), AdminError>;

    /// 列表页容器标记
    fn render_container(query: &str) -> String;

    /// 表格行标记
    fn render_rows(items: &[Self::Item], query: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct UserSource {
    data: Arc<DataService>,
}

impl UserSource {
    pub fn new(data: Arc<DataService>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ListSource for UserSource {
    type Item = User;

    const KIND: EntityKind = EntityKind::Users;

    async fn load(&self, pagination: PaginationState, query: &str) -> PageResult<User> {
        self.data.load_users(pagination, query).await
    }

    async fn remove(&self, id: &str) -> Result<(), AdminError> {
        self.data.remove_user(id).await
    }

    fn render_container(query: &str) -> String {
        rows::users_container(query)
    }

    fn render_rows(items: &[User], query: &str) -> String {
        rows::user_rows(items, query)
    }
}

#[derive(Debug, Clone)]
pub struct RoleSource {
    data: Arc<DataService>,
}

impl RoleSource {
    pub fn new(data: Arc<DataService>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ListSource for RoleSource {
    type Item = Role;

    const KIND: EntityKind = EntityKind::Roles;

    async fn load(&self, pagination: PaginationState, query: &str) -> PageResult<Role> {
        self.data.load_roles(pagination, query).await
    }

    /// 级联：同时从所有用户中移除该角色
    async fn remove(&self, id: &str) -> Result<(), AdminError> {
        self.data.remove_role(id).await
    }

    fn render_container(query: &str) -> String {
        rows::roles_container(query)
    }

    fn render_rows(items: &[Role], query: &str) -> String {
        rows::role_rows(items, query)
    }
}
