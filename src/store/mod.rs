//! 持久化键值存储
//! 模拟浏览器本地存储：同步读写，后写覆盖，写入对后续读取立即可见

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt::Debug;

/// 存储键
pub mod keys {
    /// 完整数据集（用户、角色、权限）
    pub const DATASET: &str = "data";
    pub const USERS_PAGINATION: &str = "pagination";
    pub const USERS_SEARCH: &str = "search";
    pub const ROLES_PAGINATION: &str = "roles-pagination";
    pub const ROLES_SEARCH: &str = "roles-search";

    /// 界面偏好：重置数据集时保留
    pub const PREFERENCES: [&str; 4] = [
        USERS_PAGINATION,
        USERS_SEARCH,
        ROLES_PAGINATION,
        ROLES_SEARCH,
    ];
}

/// 键值存储接口
///
/// 所有方法使用 `&self`，实现方通过内部可变性（`RwLock` 等）保证线程安全。
/// 没有事务保证，也不向调用方报告持久化失败。
pub trait KeyValueStore: Send + Sync + Debug {
    /// 读取键值，不存在时返回 `None`
    fn get(&self, key: &str) -> Option<String>;

    /// 写入或覆盖键值
    fn set(&self, key: &str, value: &str);

    /// 清空所有键
    fn clear(&self);
}
