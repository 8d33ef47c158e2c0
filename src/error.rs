//! 统一错误模型
//! 定义控制台库中所有可上报的错误类型

use thiserror::Error;

/// 应用错误类型
///
/// 删除/编辑不存在的记录、损坏的持久化状态都不属于错误，
/// 它们在各自的调用点被静默处理或降级为默认值。
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Render target not found: #{0}")]
    RenderTargetUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// 获取稳定的错误码
    pub fn code(&self) -> &'static str {
        match self {
            AdminError::RenderTargetUnavailable(_) => "RENDER_TARGET_UNAVAILABLE",
            AdminError::Serialization(_) => "SERIALIZATION_ERROR",
            AdminError::Io(_) => "IO_ERROR",
            AdminError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 获取用户友好的错误消息（不包含内部细节）
    pub fn user_message(&self) -> String {
        match self {
            AdminError::RenderTargetUnavailable(id) => format!("Mount point #{} is missing", id),
            AdminError::Serialization(_) => "Failed to encode console state".to_string(),
            AdminError::Io(_) => "Storage error occurred".to_string(),
            AdminError::Config(_) => "Configuration error".to_string(),
        }
    }

    /// 是否为嵌入环境的前置条件错误（应在挂载时立即失败）
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AdminError::RenderTargetUnavailable(_) | AdminError::Config(_)
        )
    }
}

/// 从 config::ConfigError 转换
impl From<config::ConfigError> for AdminError {
    fn from(e: config::ConfigError) -> Self {
        AdminError::Config(e.to_string())
    }
}

pub type Result<T, E = AdminError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AdminError::RenderTargetUnavailable("users".to_string()).code(),
            "RENDER_TARGET_UNAVAILABLE"
        );
        assert_eq!(AdminError::Config("bad".to_string()).code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_user_message_no_sensitive_info() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/path");
        let error = AdminError::Io(io);
        let message = error.user_message();
        assert_eq!(message, "Storage error occurred");
        assert!(!message.contains("/secret/path"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(AdminError::RenderTargetUnavailable("roles".to_string()).is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(!AdminError::Io(io).is_fatal());
    }
}
