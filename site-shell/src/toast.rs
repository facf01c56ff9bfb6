use serde::Serialize;
use std::str::FromStr;

/// 提示类型
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            other => Err(format!("未知的提示类型: {}", other)),
        }
    }
}

/// 提示消息，显示固定时长后自动消失
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms,
        }
    }

    /// 显示中的样式类，例如 "toast visible error"
    pub fn class_name(&self) -> String {
        format!("toast visible {}", self.kind.as_str())
    }

    pub fn is_visible_after(&self, elapsed_ms: u32) -> bool {
        elapsed_ms < self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast() {
        let toast = Toast::new("Enviado", ToastKind::Success, 3000);
        assert_eq!(toast.class_name(), "toast visible success");
        assert!(toast.is_visible_after(2999));
        assert!(!toast.is_visible_after(3000));

        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["durationMs"], 3000);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("success".parse::<ToastKind>(), Ok(ToastKind::Success));
        assert_eq!("error".parse::<ToastKind>(), Ok(ToastKind::Error));
        assert!("warning".parse::<ToastKind>().is_err());
        assert!("Error".parse::<ToastKind>().is_err());
        assert!("".parse::<ToastKind>().is_err());
    }
}
