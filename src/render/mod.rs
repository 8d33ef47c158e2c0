//! 展示层
//! 纯函数：由数据生成标记；`Document` 表示嵌入环境提供的挂载区域

pub mod document;
pub mod markup;
pub mod pagination;
pub mod rows;

pub use document::{Document, Region};
pub use markup::{escape_html, Highlighter};
pub use pagination::{pagination_window, render_pagination, PageSlot, PaginationView};

/// 挂载点与子区域 ID
pub mod ids {
    pub const USERS_MOUNT: &str = "users";
    pub const ROLES_MOUNT: &str = "roles";
    pub const USER_TABLE: &str = "user-table-container";
    pub const USER_PAGINATION: &str = "pagination-container";
    pub const ROLE_TABLE: &str = "role-table-container";
    pub const ROLE_PAGINATION: &str = "role-pagination-container";
}

/// 容器模板中子区域的占位标记
pub fn slot(id: &str) -> String {
    format!("<!--slot:{}-->", id)
}
