use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use blog_common::{BlogError, Result};
use crate::toast::{Toast, ToastKind};

pub const SENT_MESSAGE: &str = "Obrigado! A sua mensagem foi enviada com sucesso.";
pub const REJECTED_MESSAGE: &str = "Ops! Ocorreu um erro ao enviar a sua mensagem.";
pub const NETWORK_MESSAGE: &str = "Ops! Ocorreu um erro de rede. Tente novamente.";

#[derive(Deserialize, Debug)]
struct FieldError {
    #[serde(default)]
    message: String,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 服务端接受
    Accepted,
    /// 服务端拒绝；`errors` 为服务端给出的错误说明
    Rejected { errors: Option<Vec<String>> },
    /// 请求未完成或响应无法解析
    NetworkFailure,
}

impl SubmissionOutcome {
    /// 根据响应状态和响应体判断结果
    ///
    /// 失败响应的响应体不是 JSON，或 `errors` 字段存在但不是错误列表时，
    /// 按网络错误处理；没有 `errors` 字段（包括响应体不是对象）时为普通拒绝。
    pub fn from_response(ok: bool, body: &str) -> Self {
        if ok {
            return SubmissionOutcome::Accepted;
        }
        let parsed: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "无法解析表单服务的错误响应");
                return SubmissionOutcome::NetworkFailure;
            }
        };
        let Some(errors) = parsed.as_object().and_then(|body| body.get("errors")) else {
            return SubmissionOutcome::Rejected { errors: None };
        };
        match Vec::<FieldError>::deserialize(errors) {
            Ok(errors) => SubmissionOutcome::Rejected {
                errors: Some(errors.into_iter().map(|e| e.message).collect()),
            },
            Err(e) => {
                warn!(error = %e, "表单服务的错误列表格式无效");
                SubmissionOutcome::NetworkFailure
            }
        }
    }

    /// 要展示的提示
    pub fn toast(&self, duration_ms: u32) -> Toast {
        match self {
            SubmissionOutcome::Accepted => Toast::new(SENT_MESSAGE, ToastKind::Success, duration_ms),
            SubmissionOutcome::Rejected { errors: Some(errors) } => {
                Toast::new(format!("Erro: {}", errors.join(", ")), ToastKind::Error, duration_ms)
            }
            SubmissionOutcome::Rejected { errors: None } => {
                Toast::new(REJECTED_MESSAGE, ToastKind::Error, duration_ms)
            }
            SubmissionOutcome::NetworkFailure => Toast::new(NETWORK_MESSAGE, ToastKind::Error, duration_ms),
        }
    }

    /// 成功后表单需要重置
    pub fn should_reset_form(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

/// 联系表单提交守卫 - 同一时间只允许一个提交，不排队、不自动重试
#[derive(Debug, Default)]
pub struct ContactSubmission {
    in_flight: bool,
    duration_ms: u32,
}

impl ContactSubmission {
    pub fn new(toast_duration_ms: u32) -> Self {
        Self {
            in_flight: false,
            duration_ms: toast_duration_ms,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// 开始提交；已有提交进行中时返回错误，提交按钮应保持禁用
    pub fn begin(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(BlogError::SubmissionInFlight);
        }
        self.in_flight = true;
        debug!("联系表单开始提交");
        Ok(())
    }

    /// 结束提交并返回要展示的提示；用户可以手动再次提交
    pub fn finish(&mut self, outcome: &SubmissionOutcome) -> Toast {
        self.in_flight = false;
        debug!(?outcome, "联系表单提交结束");
        outcome.toast(self.duration_ms)
    }
}
