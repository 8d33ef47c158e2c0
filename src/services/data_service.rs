//! 数据服务
//! 独占实体集合，负责过滤、分页切片、变更与级联删除；
//! 每个操作都先经过模拟延迟，并在返回前完成持久化

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::{
    error::AdminError,
    models::{Dataset, PageResult, PaginationState, Role, User},
    services::seed::SeedSource,
    store::{keys, KeyValueStore},
};

/// 数据服务
///
/// 整个数据集由一把读写锁保护：查询并发读，变更（包括跨集合的级联删除）串行执行。
#[derive(Debug)]
pub struct DataService {
    store: Arc<dyn KeyValueStore>,
    seed: Arc<dyn SeedSource>,
    delay: Duration,
    data: RwLock<Dataset>,
}

impl DataService {
    /// 从存储恢复数据集；不存在或损坏时生成种子数据并立即持久化
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        seed: Arc<dyn SeedSource>,
        delay: Duration,
    ) -> Result<Self, AdminError> {
        let restored = store
            .get(keys::DATASET)
            .and_then(|raw| match serde_json::from_str::<Dataset>(&raw) {
                Ok(dataset) => Some(dataset),
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted dataset is malformed, regenerating");
                    None
                }
            });

        let dataset = match restored {
            Some(dataset) => {
                tracing::info!(
                    users = dataset.users.len(),
                    roles = dataset.roles.len(),
                    permissions = dataset.permissions.len(),
                    "Dataset restored from store"
                );
                dataset
            }
            None => {
                let dataset = seed.generate();
                Self::write_dataset(store.as_ref(), &dataset)?;
                dataset
            }
        };

        Ok(Self {
            store,
            seed,
            delay,
            data: RwLock::new(dataset),
        })
    }

    /// 模拟网络延迟；延迟为 0 时也至少让出一次调度
    async fn latency(&self) {
        if self.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn write_dataset(store: &dyn KeyValueStore, dataset: &Dataset) -> Result<(), AdminError> {
        let raw = serde_json::to_string(dataset)?;
        store.set(keys::DATASET, &raw);
        Ok(())
    }

    fn persist(&self, dataset: &Dataset) -> Result<(), AdminError> {
        Self::write_dataset(self.store.as_ref(), dataset)
    }

    // ==================== Queries ====================

    /// 分页查询用户，按姓名或邮箱做大小写无关的子串匹配
    pub async fn load_users(&self, pagination: PaginationState, query: &str) -> PageResult<User> {
        self.latency().await;

        let needle = query.to_lowercase();
        let data = self.data.read().await;
        let page = PageResult::slice(data.users.iter().filter(|u| u.matches(&needle)), pagination);

        metrics::counter!("admin.data.load", "entity" => "users").increment(1);
        tracing::debug!(
            page = pagination.page,
            limit = pagination.limit.get(),
            query = %query,
            count = page.count,
            "Users loaded"
        );

        page
    }

    /// 分页查询角色，仅匹配角色名
    pub async fn load_roles(&self, pagination: PaginationState, query: &str) -> PageResult<Role> {
        self.latency().await;

        let needle = query.to_lowercase();
        let data = self.data.read().await;
        let page = PageResult::slice(data.roles.iter().filter(|r| r.matches(&needle)), pagination);

        metrics::counter!("admin.data.load", "entity" => "roles").increment(1);
        tracing::debug!(
            page = pagination.page,
            limit = pagination.limit.get(),
            query = %query,
            count = page.count,
            "Roles loaded"
        );

        page
    }

    /// 根据 ID 查找用户
    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.latency().await;

        let data = self.data.read().await;
        data.users.iter().find(|u| u.id == id).cloned()
    }

    /// 当前数据集的完整副本
    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    // ==================== Mutations ====================

    /// 删除用户；不存在时为空操作
    pub async fn remove_user(&self, id: &str) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let before = data.users.len();
        data.users.retain(|u| u.id != id);

        if data.users.len() == before {
            tracing::debug!(user_id = %id, "User not found, nothing to remove");
            return Ok(());
        }

        self.persist(&data)?;
        metrics::counter!("admin.data.mutation", "entity" => "users").increment(1);
        tracing::info!(user_id = %id, "User removed");

        Ok(())
    }

    /// 删除角色，并从所有用户的角色列表中移除该引用
    pub async fn remove_role(&self, id: &str) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let before = data.roles.len();
        data.roles.retain(|r| r.id != id);

        if data.roles.len() == before {
            tracing::debug!(role_id = %id, "Role not found, nothing to remove");
            return Ok(());
        }

        let mut affected = 0;
        for user in data.users.iter_mut() {
            let held = user.roles.len();
            user.roles.retain(|r| r.id != id);
            if user.roles.len() != held {
                affected += 1;
            }
        }

        self.persist(&data)?;
        metrics::counter!("admin.data.mutation", "entity" => "roles").increment(1);
        tracing::info!(role_id = %id, affected_users = affected, "Role removed");

        Ok(())
    }

    /// 删除权限，并从所有角色的权限列表中移除该引用
    pub async fn remove_permission(&self, id: &str) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let before = data.permissions.len();
        data.permissions.retain(|p| p.id != id);

        if data.permissions.len() == before {
            tracing::debug!(permission_id = %id, "Permission not found, nothing to remove");
            return Ok(());
        }

        let mut affected = 0;
        for role in data.roles.iter_mut() {
            let held = role.permissions.len();
            role.permissions.retain(|p| p.id != id);
            if role.permissions.len() != held {
                affected += 1;
            }
        }

        self.persist(&data)?;
        metrics::counter!("admin.data.mutation", "entity" => "permissions").increment(1);
        tracing::info!(permission_id = %id, affected_roles = affected, "Permission removed");

        Ok(())
    }

    /// 新增用户；ID 已存在时整体替换
    pub async fn add_user(&self, user: User) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let user_id = user.id.clone();
        match data.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => data.users.push(user),
        }

        self.persist(&data)?;
        metrics::counter!("admin.data.mutation", "entity" => "users").increment(1);
        tracing::info!(user_id = %user_id, "User added");

        Ok(())
    }

    /// 按 ID 替换用户（保留原 ID）；不存在时为空操作
    pub async fn edit_user(&self, id: &str, mut user: User) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let Some(existing) = data.users.iter_mut().find(|u| u.id == id) else {
            tracing::debug!(user_id = %id, "User not found, nothing to edit");
            return Ok(());
        };

        user.id = id.to_string();
        *existing = user;

        self.persist(&data)?;
        metrics::counter!("admin.data.mutation", "entity" => "users").increment(1);
        tracing::info!(user_id = %id, "User updated");

        Ok(())
    }

    /// 清空存储并重新生成种子数据集；界面偏好（分页与搜索）原样写回
    pub async fn reset(&self) -> Result<(), AdminError> {
        self.latency().await;

        let mut data = self.data.write().await;
        let preferences: Vec<_> = keys::PREFERENCES
            .iter()
            .filter_map(|key| self.store.get(key).map(|value| (*key, value)))
            .collect();

        self.store.clear();
        for (key, value) in &preferences {
            self.store.set(key, value);
        }

        *data = self.seed.generate();
        self.persist(&data)?;

        tracing::info!(
            users = data.users.len(),
            roles = data.roles.len(),
            "Dataset reset"
        );

        Ok(())
    }
}
