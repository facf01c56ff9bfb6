use std::io;
use thiserror::Error;

/// 博客模块通用的结果类型
pub type Result<T> = std::result::Result<T, BlogError>;

/// 博客模块的错误类型
#[derive(Error, Debug)]
pub enum BlogError {
    /// 指定ID的文章不存在
    #[error("文章不存在: {0}")]
    NotFound(u32),

    /// 文章ID必须为正整数
    #[error("无效的文章ID: {0}")]
    InvalidId(u32),

    /// 文章ID重复
    #[error("文章ID重复: {0}")]
    DuplicateId(u32),

    /// 日期无法解析
    #[error("无效的日期: '{0}'")]
    InvalidDate(String),

    /// JSON 解析或序列化失败
    #[error("JSON 处理失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 快照压缩或解压失败
    #[error("快照处理失败: {0}")]
    Codec(#[from] io::Error),

    /// 已有提交正在进行
    #[error("已有提交正在进行中")]
    SubmissionInFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlogError::NotFound(999);
        assert!(format!("{err}").contains("999"));

        let err = BlogError::InvalidDate("2025-13-01".to_string());
        assert!(format!("{err}").contains("2025-13-01"));

        let io_err = io::Error::new(io::ErrorKind::InvalidData, "魔数不匹配");
        let err = BlogError::from(io_err);
        assert!(format!("{err}").contains("魔数不匹配"));
    }
}
