//! 应用外壳
//! 持有数据服务、两个列表控制器与文档，按消息类型分派

use std::sync::Arc;

use crate::{
    controller::{EntityKind, ListController, ListMessage, RoleSource, UserSource},
    error::AdminError,
    models::CreateUserRequest,
    render::{ids, Document},
    services::DataService,
    store::KeyValueStore,
};

/// 应用消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// 切换到某个列表页并刷新
    Show(EntityKind),
    /// 发给某个列表页的操作
    List {
        target: EntityKind,
        message: ListMessage,
    },
    AddUser(CreateUserRequest),
    EditUser {
        id: String,
        name: String,
        email: String,
    },
    /// 删除权限（级联到角色），然后刷新角色页
    DeletePermission(String),
}

pub struct App {
    data: Arc<DataService>,
    users: ListController<UserSource>,
    roles: ListController<RoleSource>,
    document: Document,
    active: EntityKind,
}

impl App {
    /// 创建默认挂载点并启动
    pub async fn start(
        data: Arc<DataService>,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, AdminError> {
        let document = Document::with_mount_points([ids::USERS_MOUNT, ids::ROLES_MOUNT]);
        Self::start_with(data, store, document).await
    }

    /// 在给定文档上启动；挂载点缺失时立即失败
    pub async fn start_with(
        data: Arc<DataService>,
        store: Arc<dyn KeyValueStore>,
        mut document: Document,
    ) -> Result<Self, AdminError> {
        let mut users = ListController::new(
            UserSource::new(data.clone()),
            data.clone(),
            store.clone(),
        );
        let mut roles = ListController::new(RoleSource::new(data.clone()), data.clone(), store);

        users.mount(&mut document).await?;
        roles.mount(&mut document).await?;

        tracing::info!("Admin console started");

        Ok(Self {
            data,
            users,
            roles,
            document,
            active: EntityKind::Users,
        })
    }

    pub fn active(&self) -> EntityKind {
        self.active
    }

    pub fn users(&self) -> &ListController<UserSource> {
        &self.users
    }

    pub fn roles(&self) -> &ListController<RoleSource> {
        &self.roles
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// 当前页的完整标记
    pub fn screen(&self) -> Result<String, AdminError> {
        self.document.compose(self.active.mount_id())
    }

    async fn route(&mut self, target: EntityKind, message: ListMessage) -> Result<(), AdminError> {
        match target {
            EntityKind::Users => self.users.handle(&mut self.document, message).await,
            EntityKind::Roles => self.roles.handle(&mut self.document, message).await,
        }
    }

    /// 分派一条消息
    pub async fn dispatch(&mut self, message: Message) -> Result<(), AdminError> {
        match message {
            Message::Show(kind) => {
                self.active = kind;
                self.route(kind, ListMessage::Refresh).await
            }
            Message::List { target, message } => self.route(target, message).await,
            Message::AddUser(request) => {
                self.data.add_user(request.into_user()).await?;
                self.route(EntityKind::Users, ListMessage::Refresh).await
            }
            Message::EditUser { id, name, email } => {
                match self.data.get_user(&id).await {
                    Some(mut user) => {
                        user.name = name;
                        user.email = email;
                        self.data.edit_user(&id, user).await?;
                    }
                    None => tracing::debug!(user_id = %id, "User not found, edit ignored"),
                }
                self.route(EntityKind::Users, ListMessage::Refresh).await
            }
            Message::DeletePermission(id) => {
                self.data.remove_permission(&id).await?;
                self.route(EntityKind::Roles, ListMessage::Refresh).await
            }
        }
    }
}
