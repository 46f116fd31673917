//! 定时器封装模块
//!
//! 封装一次性的 `setTimeout`，供 Toast 自动消失调度使用。
//! 持有 `Timeout` 即持有取消权：被 drop 时自动清除定时器。

use wasm_bindgen::prelude::*;

/// 一次性定时器
pub struct Timeout {
    handle: i32,
}

impl Timeout {
    /// 创建新的一次性定时器
    ///
    /// 回调闭包被有意泄漏：一次性回调可能在自身执行中触发对
    /// `Timeout` 的 drop，此时析构闭包会 panic，泄漏可避免这一点。
    ///
    /// # Panics
    /// 如果无法获取 window 对象或设置定时器失败
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let window = web_sys::window().expect("无法获取 window 对象");

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("设置定时器失败");

        closure.forget();

        Self { handle }
    }

    /// 取消定时器；对已触发的定时器是无操作
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
