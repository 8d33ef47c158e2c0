//! 测试公共模块
//! 固定数据集、内存存储与服务/控制器构建工具

#![allow(dead_code)]

use admin_console::{
    controller::{ListController, RoleSource, UserSource},
    models::{Dataset, Permission, Role, User},
    render::{ids, Document},
    services::{DataService, SeedSource},
    store::{KeyValueStore, MemoryStore},
};
use std::sync::Arc;
use std::time::Duration;

/// 每次生成同一份数据集的种子源
#[derive(Debug)]
pub struct FixedSeed(pub Dataset);

impl SeedSource for FixedSeed {
    fn generate(&self) -> Dataset {
        self.0.clone()
    }
}

/// 生成 n 个编号用户：id `u001`、姓名 `User 1`、邮箱 `user1@example.com`
pub fn numbered_users(n: usize) -> Vec<User> {
    (1..=n)
        .map(|i| User {
            id: format!("u{:03}", i),
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            roles: vec![],
        })
        .collect()
}

/// 生成 n 个编号角色：id `r001`、名称 `role-1`
pub fn numbered_roles(n: usize) -> Vec<Role> {
    (1..=n)
        .map(|i| Role {
            id: format!("r{:03}", i),
            name: format!("role-{}", i),
            permissions: vec![],
        })
        .collect()
}

pub fn dataset_with_users(n: usize) -> Dataset {
    Dataset {
        users: numbered_users(n),
        roles: numbered_roles(3),
        permissions: vec![],
    }
}

/// 带交叉引用的小数据集：
/// p1/p2 两个权限；admin(p1,p2)、viewer(p2) 两个角色；
/// John Smith(admin,viewer)、Ann Lee(viewer)、Zed Null(无角色)
pub fn linked_dataset() -> Dataset {
    let p1 = Permission {
        id: "p1".to_string(),
        name: "write:users".to_string(),
    };
    let p2 = Permission {
        id: "p2".to_string(),
        name: "read:users".to_string(),
    };
    let admin = Role {
        id: "admin".to_string(),
        name: "Admin".to_string(),
        permissions: vec![p1.to_ref(), p2.to_ref()],
    };
    let viewer = Role {
        id: "viewer".to_string(),
        name: "Viewer".to_string(),
        permissions: vec![p2.to_ref()],
    };

    Dataset {
        users: vec![
            User {
                id: "john".to_string(),
                name: "John Smith".to_string(),
                email: "john@corp.local".to_string(),
                roles: vec![admin.to_ref(), viewer.to_ref()],
            },
            User {
                id: "ann".to_string(),
                name: "Ann Lee".to_string(),
                email: "bjork@x.com".to_string(),
                roles: vec![viewer.to_ref()],
            },
            User {
                id: "zed".to_string(),
                name: "Zed Null".to_string(),
                email: "zed@x.com".to_string(),
                roles: vec![],
            },
        ],
        roles: vec![admin, viewer],
        permissions: vec![p1, p2],
    }
}

/// 以固定数据集和零延迟创建数据服务
pub fn create_service(dataset: Dataset) -> (Arc<DataService>, Arc<MemoryStore>) {
    create_service_with_delay(dataset, Duration::ZERO)
}

pub fn create_service_with_delay(
    dataset: Dataset,
    delay: Duration,
) -> (Arc<DataService>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let data = DataService::new(store.clone(), Arc::new(FixedSeed(dataset)), delay)
        .expect("Failed to create data service");
    (Arc::new(data), store)
}

pub fn create_document() -> Document {
    Document::with_mount_points([ids::USERS_MOUNT, ids::ROLES_MOUNT])
}

pub fn users_controller(
    data: &Arc<DataService>,
    store: &Arc<MemoryStore>,
) -> ListController<UserSource> {
    let store: Arc<dyn KeyValueStore> = store.clone();
    ListController::new(UserSource::new(data.clone()), data.clone(), store)
}

pub fn roles_controller(
    data: &Arc<DataService>,
    store: &Arc<MemoryStore>,
) -> ListController<RoleSource> {
    let store: Arc<dyn KeyValueStore> = store.clone();
    ListController::new(RoleSource::new(data.clone()), data.clone(), store)
}

/// 当前页用户 ID 列表
pub fn user_ids(controller: &ListController<UserSource>) -> Vec<String> {
    controller
        .current()
        .items
        .iter()
        .map(|u| u.id.clone())
        .collect()
}
