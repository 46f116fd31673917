//! 全局事件桥模块
//!
//! HTTP 客户端位于组件树之外，不能直接依赖 Toast 上下文。
//! 这里通过 window 上的自定义事件完成解耦：传输侧只派发字符串载荷，
//! UI 侧在启动时注册唯一的订阅者。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit};

/// 全局 toast 事件名
pub const SHOW_TOAST_EVENT: &str = "show-toast";

/// 派发一条 show-toast 事件，载荷为 `{ message, type }`
pub fn dispatch_show_toast(message: &str, kind: &str) {
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str("message"),
        &JsValue::from_str(message),
    );
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("type"), &JsValue::from_str(kind));

    let init = CustomEventInit::new();
    init.set_detail(&detail);

    if let Some(window) = web_sys::window() {
        if let Ok(event) = CustomEvent::new_with_event_init_dict(SHOW_TOAST_EVENT, &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// 注册 show-toast 事件的订阅者，回调收到 `(message, kind)`
///
/// 监听器与页面同生命周期，闭包被有意泄漏以保持存活。
pub fn listen_show_toast<F>(handler: F)
where
    F: Fn(String, String) + 'static,
{
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Ok(event) = event.dyn_into::<CustomEvent>() else {
            return;
        };
        let detail = event.detail();
        let message = js_sys::Reflect::get(&detail, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string());
        let kind = js_sys::Reflect::get(&detail, &JsValue::from_str("type"))
            .ok()
            .and_then(|v| v.as_string());

        if let Some(message) = message {
            handler(message, kind.unwrap_or_else(|| "info".to_string()));
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback(SHOW_TOAST_EVENT, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
