//! 应用层错误定义

use thiserror::Error;

/// 应用层错误
///
/// 目录加载失败不会出现在这里（加载器降级为空目录），
/// 配置与目录来源的装配错误由启动入口直接报告，只有终端读写会失败
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 终端读写错误
    #[error("Terminal I/O error: {0}")]
    Terminal(String),
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_terminal() {
        let err: ApplicationError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ApplicationError::Terminal(_)));
        assert!(err.to_string().contains("closed"));
    }
}
