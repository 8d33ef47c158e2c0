//! 渲染目标
//! 嵌入环境提供的命名区域集合，控制器把标记写入其中

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::error::AdminError;

const SLOT_OPEN: &str = "<!--slot:";
const SLOT_CLOSE: &str = "-->";
/// 区域嵌套的最大展开深度
const MAX_DEPTH: usize = 8;

/// 一个可写入标记的区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub tag: String,
    pub markup: String,
    /// 加载中标记（渲染为 `class="loading"`）
    pub busy: bool,
}

impl Region {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            markup: String::new(),
            busy: false,
        }
    }
}

/// 命名区域集合
#[derive(Debug, Default)]
pub struct Document {
    regions: BTreeMap<String, Region>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定挂载点创建文档
    pub fn with_mount_points<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions = ids
            .into_iter()
            .map(|id| (id.into(), Region::new("div")))
            .collect();
        Self { regions }
    }

    /// 创建（或重置）区域
    pub fn insert_region(&mut self, id: impl Into<String>, tag: &str) {
        self.regions.insert(id.into(), Region::new(tag));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    fn region_mut(&mut self, id: &str) -> Result<&mut Region, AdminError> {
        self.regions
            .get_mut(id)
            .ok_or_else(|| AdminError::RenderTargetUnavailable(id.to_string()))
    }

    pub fn set_markup(&mut self, id: &str, markup: String) -> Result<(), AdminError> {
        self.region_mut(id)?.markup = markup;
        Ok(())
    }

    pub fn set_busy(&mut self, id: &str, busy: bool) -> Result<(), AdminError> {
        self.region_mut(id)?.busy = busy;
        Ok(())
    }

    /// 输出区域的完整标记，子区域占位符被替换为子区域内容
    pub fn compose(&self, id: &str) -> Result<String, AdminError> {
        let mut out = String::new();
        self.compose_into(id, 0, &mut out)?;
        Ok(out)
    }

    fn compose_into(&self, id: &str, depth: usize, out: &mut String) -> Result<(), AdminError> {
        let region = self
            .regions
            .get(id)
            .ok_or_else(|| AdminError::RenderTargetUnavailable(id.to_string()))?;

        let _ = write!(out, r#"<{} id="{}""#, region.tag, id);
        if region.busy {
            out.push_str(r#" class="loading""#);
        }
        out.push('>');

        let mut rest = region.markup.as_str();
        while let Some(start) = rest.find(SLOT_OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + SLOT_OPEN.len()..];
            let Some(end) = after.find(SLOT_CLOSE) else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let child = &after[..end];
            if depth < MAX_DEPTH {
                self.compose_into(child, depth + 1, out)?;
            }
            rest = &after[end + SLOT_CLOSE.len()..];
        }
        out.push_str(rest);

        let _ = write!(out, "</{}>", region.tag);
        Ok(())
    }
}
