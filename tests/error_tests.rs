//! 错误处理单元测试
//!
//! 测试控制台错误类型与命令解析错误的行为

use admin_console::cli::CommandError;
use admin_console::error::AdminError;

// ==================== 错误码测试 ====================

#[test]
fn test_error_codes() {
    assert_eq!(
        AdminError::RenderTargetUnavailable("users".to_string()).code(),
        "RENDER_TARGET_UNAVAILABLE"
    );
    assert_eq!(AdminError::Config("bad".to_string()).code(), "CONFIG_ERROR");

    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(AdminError::from(serde_error).code(), "SERIALIZATION_ERROR");

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert_eq!(AdminError::from(io).code(), "IO_ERROR");
}

// ==================== 用户消息测试 ====================

#[test]
fn test_user_messages_no_sensitive_info() {
    // 配置错误不暴露具体字段
    let error = AdminError::Config("store.path is empty".to_string());
    let message = error.user_message();
    assert_eq!(message, "Configuration error");
    assert!(!message.contains("store.path"));

    // 序列化错误不暴露解析细节
    let serde_error = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
    let message = AdminError::Serialization(serde_error).user_message();
    assert_eq!(message, "Failed to encode console state");
    assert!(!message.contains("EOF"));
}

#[test]
fn test_user_message_names_missing_mount_point() {
    assert_eq!(
        AdminError::RenderTargetUnavailable("roles".to_string()).user_message(),
        "Mount point #roles is missing"
    );
}

#[test]
fn test_config_error_conversion() {
    let config_error = config::ConfigError::Message("invalid delay".to_string());
    let error = AdminError::from(config_error);
    assert!(matches!(error, AdminError::Config(ref msg) if msg.contains("invalid delay")));
    assert!(error.is_fatal());
}

// ==================== 错误显示测试 ====================

#[test]
fn test_error_display() {
    assert_eq!(
        format!("{}", AdminError::RenderTargetUnavailable("users".to_string())),
        "Render target not found: #users"
    );
    assert_eq!(
        format!("{}", AdminError::Config("bad".to_string())),
        "Configuration error: bad"
    );
}

#[test]
fn test_command_error_display() {
    assert_eq!(
        CommandError::Unknown("frob".to_string()).to_string(),
        "Unknown command: frob"
    );
    assert_eq!(
        CommandError::MissingArgument {
            command: "page",
            argument: "N"
        }
        .to_string(),
        "Missing argument <N> for `page`"
    );
    assert_eq!(
        CommandError::UnsupportedLimit(15).to_string(),
        "Unsupported page size: 15"
    );
}

#[test]
fn test_error_debug_format() {
    let error = AdminError::RenderTargetUnavailable("users".to_string());
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("RenderTargetUnavailable"));
}
