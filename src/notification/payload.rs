//! Hook payload - Gemini CLI 通过 stdin 传入的事件 JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 缺失字段的显示值
pub const MISSING_FIELD: &str = "undefined";

/// Gemini CLI hook 事件
///
/// 字段保留原始 JSON 值：`None` 表示字段缺失，`Some(Value::Null)` 表示显式的 `null`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPayload {
    /// 事件名（如 `AfterAgent`、`Notification`）
    #[serde(default, deserialize_with = "present")]
    pub hook_event_name: Option<Value>,
    /// 通知子类型（如 `ToolPermission`）
    #[serde(default, deserialize_with = "present")]
    pub notification_type: Option<Value>,
    /// 附带的消息文本
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
}

impl EventPayload {
    /// 解析 stdin 内容
    ///
    /// 非 JSON 返回错误；合法 JSON 但不是对象时返回空 payload（归类为未知事件）。
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).context("hook payload is not valid JSON")?;
        match value {
            Value::Object(_) => {
                serde_json::from_value(value).context("failed to read hook payload fields")
            }
            _ => Ok(Self::default()),
        }
    }

    /// 事件名，只接受字符串
    pub fn hook_event_name(&self) -> Option<&str> {
        self.hook_event_name.as_ref().and_then(Value::as_str)
    }

    /// 通知子类型，只接受字符串
    pub fn notification_type(&self) -> Option<&str> {
        self.notification_type.as_ref().and_then(Value::as_str)
    }

    /// 可用作通知正文的消息
    ///
    /// `null`、`false`、`0` 和空字符串都视为没有消息。
    pub fn display_message(&self) -> Option<String> {
        self.message
            .as_ref()
            .filter(|value| is_truthy(value))
            .map(render_value)
    }
}

/// 字段的文本形式，缺失时为 `undefined`
pub fn render_field(field: &Option<Value>) -> String {
    field
        .as_ref()
        .map(render_value)
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

/// 按模板字符串插值的规则把 JSON 值转成文本
///
/// 数组逐项转换后用逗号连接（`null` 项为空），对象统一为 `[object Object]`。
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        // 1.0 显示为 1
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 出现的字段（包括 `null`）都记为 `Some`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
