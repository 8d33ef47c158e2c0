//! 列表控制器
//! 加载 → 渲染 → 分页 → 持久化界面状态；用户页与角色页共享同一状态机
//!
//! 每个操作在 `&mut self` 上顺序执行，因此同一控制器上的操作天然排队。
//! 没有请求取消：嵌入方若并发驱动多个控制器副本，后完成的加载覆盖先完成的渲染。

mod source;

pub use source::{EntityKind, ListSource, RoleSource, UserSource};

use std::sync::Arc;

use crate::{
    error::AdminError,
    models::{page_count, PageLimit, PageResult, PaginationState},
    render::{render_pagination, Document, PaginationView},
    services::DataService,
    store::KeyValueStore,
};

/// 控制器所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Rendering,
}

/// 列表页上的用户操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    /// 按当前状态重新加载
    Refresh,
    Search(String),
    GoToPage(u32),
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    SetLimit(PageLimit),
    Delete(String),
    Reset,
}

pub struct ListController<S: ListSource> {
    source: S,
    data: Arc<DataService>,
    store: Arc<dyn KeyValueStore>,
    pagination: PaginationState,
    search: String,
    /// 最近一次加载的结果，仅作渲染缓存
    current: PageResult<S::Item>,
    phase: ListPhase,
}

impl<S: ListSource> ListController<S> {
    /// 创建控制器并从存储恢复分页与搜索状态；损坏的状态降级为默认值
    pub fn new(source: S, data: Arc<DataService>, store: Arc<dyn KeyValueStore>) -> Self {
        let kind = S::KIND;

        let pagination = match store.get(kind.pagination_key()) {
            Some(raw) => PaginationState::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    entity = kind.as_str(),
                    raw = %raw,
                    "Persisted pagination is malformed, using defaults"
                );
                PaginationState::default()
            }),
            None => PaginationState::default(),
        };
        let search = store.get(kind.search_key()).unwrap_or_default();

        Self {
            source,
            data,
            store,
            pagination,
            search,
            current: PageResult::default(),
            phase: ListPhase::Idle,
        }
    }

    pub fn kind(&self) -> EntityKind {
        S::KIND
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current(&self) -> &PageResult<S::Item> {
        &self.current
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// 基于最近一次加载结果的总页数（至少为 1）
    pub fn page_count(&self) -> u32 {
        page_count(self.current.count, self.pagination.limit)
    }

    /// 挂载到文档：挂载点缺失时立即失败
    pub async fn mount(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        let kind = S::KIND;
        if !doc.contains(kind.mount_id()) {
            return Err(AdminError::RenderTargetUnavailable(
                kind.mount_id().to_string(),
            ));
        }

        doc.set_markup(kind.mount_id(), S::render_container(&self.search))?;
        doc.insert_region(kind.table_id(), "tbody");
        doc.insert_region(kind.pagination_id(), "div");

        tracing::debug!(entity = kind.as_str(), "List mounted");

        self.reload_clamped(doc).await
    }

    /// 处理一条用户操作
    pub async fn handle(
        &mut self,
        doc: &mut Document,
        message: ListMessage,
    ) -> Result<(), AdminError> {
        tracing::debug!(entity = S::KIND.as_str(), message = ?message, "Handling list message");

        match message {
            ListMessage::Refresh => {}
            ListMessage::Search(query) => {
                self.store.set(S::KIND.search_key(), &query);
                // 容器里的搜索框回显新的查询词，子区域不受影响
                doc.set_markup(S::KIND.mount_id(), S::render_container(&query))?;
                self.search = query;
                // 搜索总是从第一页开始
                self.pagination.page = 1;
            }
            ListMessage::GoToPage(page) => self.pagination.page = page.max(1),
            ListMessage::FirstPage => self.pagination.page = 1,
            ListMessage::PrevPage => {
                self.pagination.page = self.pagination.page.saturating_sub(1).max(1)
            }
            ListMessage::NextPage => self.pagination.page = self.pagination.page.saturating_add(1),
            ListMessage::LastPage => self.pagination.page = self.page_count(),
            ListMessage::SetLimit(limit) => self.pagination.limit = limit,
            ListMessage::Delete(id) => {
                self.begin_loading(doc)?;
                let removed = self.source.remove(&id).await;
                self.settle(doc, removed)?;
            }
            ListMessage::Reset => {
                self.begin_loading(doc)?;
                let reset = self.data.reset().await;
                self.settle(doc, reset)?;
            }
        }

        self.reload_clamped(doc).await
    }

    /// 按当前分页与搜索状态加载并渲染表格行
    pub async fn update_and_render(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        self.load(doc).await?;
        self.render_rows(doc)?;
        self.phase = ListPhase::Idle;
        Ok(())
    }

    /// 加载；若当前页超出新的总页数则夹取到末页并再加载一次；然后渲染并持久化分页
    async fn reload_clamped(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        self.load(doc).await?;

        let pages = self.page_count();
        if self.pagination.clamp_to(pages) {
            tracing::debug!(
                entity = S::KIND.as_str(),
                page = self.pagination.page,
                "Page clamped after reload"
            );
            self.load(doc).await?;
        }

        self.render_rows(doc)?;
        self.render_pagination(doc)?;
        self.phase = ListPhase::Idle;
        Ok(())
    }

    fn begin_loading(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        self.phase = ListPhase::Loading;
        doc.set_busy(S::KIND.table_id(), true)
    }

    /// 变更失败时撤销加载状态，再把错误交给调用方
    fn settle(
        &mut self,
        doc: &mut Document,
        outcome: Result<(), AdminError>,
    ) -> Result<(), AdminError> {
        if let Err(e) = outcome {
            tracing::warn!(entity = S::KIND.as_str(), error = %e, "List mutation failed");
            self.phase = ListPhase::Idle;
            doc.set_busy(S::KIND.table_id(), false)?;
            return Err(e);
        }
        Ok(())
    }

    async fn load(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        self.begin_loading(doc)?;

        self.current = self.source.load(self.pagination, &self.search).await;

        doc.set_busy(S::KIND.table_id(), false)
    }

    fn render_rows(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        self.phase = ListPhase::Rendering;
        let markup = S::render_rows(&self.current.items, &self.search);
        doc.set_markup(S::KIND.table_id(), markup)
    }

    fn render_pagination(&mut self, doc: &mut Document) -> Result<(), AdminError> {
        let view = PaginationView {
            page: self.pagination.page,
            total: self.page_count(),
            limit: self.pagination.limit,
        };
        doc.set_markup(S::KIND.pagination_id(), render_pagination(view))?;

        let raw = self.pagination.to_json()?;
        self.store.set(S::KIND.pagination_key(), &raw);
        Ok(())
    }
}
