//! JSON 文件存储
//! 打开时整体加载，每次写入后整体落盘（临时文件 + rename）

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::KeyValueStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// 打开存储文件
    ///
    /// 文件不存在视为空存储；内容损坏时记录告警并从空存储开始。
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Store file is malformed, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Store file opened");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        let raw = serde_json::to_string(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)
    }

    fn flush_logged(&self, entries: &BTreeMap<String, String>) {
        // 内存副本为准，落盘失败只记录日志
        if let Err(e) = self.flush(entries) {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to write store file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // 值未变化时不重写文件（数据集本身可能很大）
        if entries.get(key).is_some_and(|current| current == value) {
            return;
        }
        entries.insert(key.to_string(), value.to_string());
        self.flush_logged(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
        self.flush_logged(&entries);
    }
}
