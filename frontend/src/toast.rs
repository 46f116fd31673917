//! Toast 通知总线
//!
//! 页面生命周期内的发布/订阅机制：组件通过 Context 取得总线；
//! 组件树之外的代码（HTTP 客户端）通过 window 事件桥触达。
//! 单条 toast 的状态机：created -> visible -> (自动过期 | 手动关闭) -> removed。

use crate::web::Timeout;
use crate::web::events::listen_show_toast;
use leptos::prelude::*;
use std::collections::HashMap;

/// 默认展示时长（毫秒）
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

// =========================================================
// 数据模型
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(ToastKind::Success),
            "error" => Some(ToastKind::Error),
            "warning" => Some(ToastKind::Warning),
            "info" => Some(ToastKind::Info),
            _ => None,
        }
    }

    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success shadow-lg",
            ToastKind::Error => "alert alert-error shadow-lg",
            ToastKind::Warning => "alert alert-warning shadow-lg",
            ToastKind::Info => "alert alert-info shadow-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// 生成总线生命周期内不碰撞的 id：时间戳 + 随机后缀
#[cfg(target_arch = "wasm32")]
fn next_toast_id() -> String {
    let timestamp = js_sys::Date::now() as u64;
    let suffix = (js_sys::Math::random() * 1e9) as u64;
    format!("toast-{}-{:x}", timestamp, suffix)
}

/// 非 WASM 构建（测试）下以单调计数器充当后缀
#[cfg(not(target_arch = "wasm32"))]
fn next_toast_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    format!("toast-{}-{:x}", timestamp, COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// 从列表中移除指定 id；对不存在的 id 是无操作
fn remove_by_id(list: &mut Vec<Toast>, id: &str) -> bool {
    let before = list.len();
    list.retain(|t| t.id != id);
    list.len() != before
}

// =========================================================
// 总线
// =========================================================

/// Toast 总线
///
/// 列表信号承载展示顺序（插入序），定时器表承载每条 toast 的
/// 自动过期调度。两者都以 toast id 为同一身份。
#[derive(Clone, Copy)]
pub struct ToastBus {
    toasts: RwSignal<Vec<Toast>>,
    /// 挂起的过期定时器；条目被移除（drop）即取消调度
    timers: StoredValue<HashMap<String, Timeout>, LocalStorage>,
}

impl ToastBus {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timers: StoredValue::new_local(HashMap::new()),
        }
    }

    /// 列表信号（插入序即展示序）
    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    /// 追加一条 toast 并调度自动移除，返回其 id
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> String {
        let id = next_toast_id();
        let toast = Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            duration_ms,
        };
        self.toasts.update(|list| list.push(toast));

        #[cfg(target_arch = "wasm32")]
        {
            let bus = *self;
            let expired_id = id.clone();
            let timeout = Timeout::new(duration_ms, move || bus.remove(&expired_id));
            self.timers.update_value(|timers| {
                timers.insert(id.clone(), timeout);
            });
        }

        id
    }

    pub fn show_success(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Success, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn show_error(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Error, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn show_warning(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Warning, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn show_info(&self, message: impl Into<String>) -> String {
        self.show(message, ToastKind::Info, DEFAULT_TOAST_DURATION_MS)
    }

    /// 移除指定 toast；对已移除的 id 是无操作
    ///
    /// 先撤掉挂起的定时器再改列表，过期回调因此不可能作用于陈旧 id。
    pub fn remove(&self, id: &str) {
        self.timers.update_value(|timers| {
            timers.remove(id);
        });
        self.toasts.update(|list| {
            remove_by_id(list, id);
        });
    }

    /// 清空全部 toast 并取消所有挂起的定时器
    pub fn clear_all(&self) {
        self.timers.update_value(|timers| timers.clear());
        self.toasts.update(|list| list.clear());
    }
}

// =========================================================
// Context 与事件桥
// =========================================================

/// 创建总线、注册全局事件桥并注入 Context
pub fn provide_toast_bus() -> ToastBus {
    let bus = ToastBus::new();
    provide_context(bus);

    // 事件桥：传输层通过 window 事件请求提示，总线是唯一订阅者
    listen_show_toast(move |message, kind| {
        let kind = ToastKind::parse(&kind).unwrap_or(ToastKind::Info);
        bus.show(message, kind, DEFAULT_TOAST_DURATION_MS);
    });

    bus
}

/// 从 Context 获取总线
pub fn use_toast() -> ToastBus {
    use_context::<ToastBus>().expect("ToastBus should be provided")
}

// =========================================================
// UI 组件
// =========================================================

/// Toast 容器组件，置于 App 根部
#[component]
pub fn ToastContainer() -> impl IntoView {
    let bus = use_toast();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || bus.toasts().get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div role="alert" class=toast.kind.alert_class()>
                            <span>{toast.message.clone()}</span>
                            <button
                                class="btn btn-ghost btn-xs"
                                on:click=move |_| bus.remove(&id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

// =========================================================
// Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for kind in [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Warning,
            ToastKind::Info,
        ] {
            assert_eq!(ToastKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ToastKind::parse("fatal"), None);
    }

    #[test]
    fn ids_do_not_collide() {
        let ids: std::collections::HashSet<String> = (0..256).map(|_| next_toast_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn remove_by_id_is_idempotent() {
        let toast = |id: &str| Toast {
            id: id.to_string(),
            message: "m".to_string(),
            kind: ToastKind::Info,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        };
        let mut list = vec![toast("a"), toast("b"), toast("c")];

        assert!(remove_by_id(&mut list, "b"));
        assert_eq!(list.len(), 2);

        // 重复移除同一 id 不改变列表
        assert!(!remove_by_id(&mut list, "b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "a");
        assert_eq!(list[1].id, "c");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut list = Vec::new();
        for id in ["1", "2", "3"] {
            list.push(Toast {
                id: id.to_string(),
                message: String::new(),
                kind: ToastKind::Success,
                duration_ms: 100,
            });
        }
        remove_by_id(&mut list, "2");
        let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
